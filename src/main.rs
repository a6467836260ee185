use anyhow::{anyhow, Context};
use clap::Parser;
use std::env;
use std::path::Path;

use passforge::cli::{self, commands::GenerateArgs, Args, CliCommand};
use passforge::clipboard::SystemClipboard;
use passforge::generators::{RandomKind, SeededRandom};
use passforge::history::JsonFileBackend;
use passforge::logging::{self, LogSettings};
use passforge::{App, Config};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    // Logger first so configuration warnings are not lost
    let mut log_settings = LogSettings::from_lookup(|key| env::var(key).ok());
    if let Some(level) = &args.log_level {
        log_settings.level = logging::parse_level(level)
            .ok_or_else(|| anyhow!("Unknown log level '{}'", level))?;
    }
    logging::init(log_settings.level, log_settings.file.as_deref())
        .context("Failed to initialize logging")?;

    let mut config = Config::load();
    config.log_level = log_settings.level;
    if let Some(language) = args.lang {
        config.language = Some(language);
    }
    if let Some(path) = &args.history_file {
        config.history_file = path.clone();
    }
    if !config.rejected.is_empty() {
        log::debug!("Ignored environment keys: {:?}", config.rejected);
    }

    log::info!("🔐 Starting passforge");
    log::debug!("Loaded config: {:?}", config);

    let mut app = match &args.command {
        Some(CliCommand::Generate(GenerateArgs { seed: Some(seed), .. })) => {
            log::info!("Using seeded random source");
            let backend = Box::new(JsonFileBackend::new(config.history_file.clone()));
            App::new(config, backend, Box::new(SeededRandom::new(*seed)))
        }
        Some(CliCommand::Generate(GenerateArgs { secure: true, .. })) => {
            config.random_source = RandomKind::Secure;
            App::from_config(config)
        }
        _ => App::from_config(config),
    };

    match args.command {
        Some(CliCommand::Generate(generate)) => {
            let options = generate.options(app.default_options());
            let password = cli::handlers::handle_generate(&mut app, &options)?;
            if let (true, Some(password)) = (generate.copy, password) {
                cli::handlers::handle_copy(&app, &mut SystemClipboard::new(), &password);
            }
        }
        Some(CliCommand::Check { password }) => {
            let password = match password {
                Some(password) => password,
                None => inquire::Password::new(&format!("{}:", app.t("validator.evaluatePassword")))
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read password")?,
            };
            cli::handlers::handle_check(&app, &password);
        }
        Some(CliCommand::History { clear: true, .. }) => {
            cli::handlers::handle_clear_history(&mut app)?;
        }
        Some(CliCommand::History { reveal, .. }) => {
            cli::handlers::handle_history(&app, reveal);
        }
        Some(CliCommand::Language { language }) => {
            cli::handlers::handle_language(&mut app, language)?;
        }
        None => {
            cli::menu::run_cli_menu(&mut app).map_err(|e| anyhow!("CLI menu error: {}", e))?;
        }
    }

    log::info!("✅ passforge finished");
    Ok(())
}
