// src/cli/menu.rs
use inquire::{Confirm, InquireError, Password, Select, Text};
use std::error::Error;

use crate::cli::handlers;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::core::App;
use crate::i18n::Language;
use crate::models::{PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Generate,
    Validate,
    History,
    ClearHistory,
    Language,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::Generate,
        MenuAction::Validate,
        MenuAction::History,
        MenuAction::ClearHistory,
        MenuAction::Language,
        MenuAction::Exit,
    ];

    fn key(self) -> &'static str {
        match self {
            MenuAction::Generate => "menu.generate",
            MenuAction::Validate => "menu.validate",
            MenuAction::History => "menu.history",
            MenuAction::ClearHistory => "menu.clearHistory",
            MenuAction::Language => "menu.language",
            MenuAction::Exit => "menu.exit",
        }
    }
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

pub fn run_cli_menu(app: &mut App) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("  🔐 {}", app.t("title"));
    println!("╚══════════════════════════════════════╝");
    println!("{}\n", app.t("subtitle"));

    // Remembers the last choices made in this session
    let mut options = app.default_options();
    let mut clipboard = SystemClipboard::new();

    loop {
        // Labels are rebuilt each round so a language change shows immediately
        let labels: Vec<String> = MenuAction::ALL.iter().map(|action| app.t(action.key())).collect();

        let selection = match Select::new(&app.t("menu.prompt"), labels.clone())
            .with_page_size(10)
            .prompt_skippable()
        {
            Ok(Some(label)) => label,
            Ok(None) => break,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(Box::new(e)),
        };

        let action = labels
            .iter()
            .position(|label| *label == selection)
            .map(|index| MenuAction::ALL[index])
            .unwrap_or(MenuAction::Exit);

        let outcome = match action {
            MenuAction::Generate => generate(app, &mut options, &mut clipboard),
            MenuAction::Validate => validate(app),
            MenuAction::History => show_history(app, &mut clipboard),
            MenuAction::ClearHistory => clear_history(app),
            MenuAction::Language => change_language(app),
            MenuAction::Exit => break,
        };

        match outcome {
            Ok(()) => {}
            Err(e) => match e.downcast_ref::<InquireError>() {
                Some(inquire_error) if is_cancel(inquire_error) => continue,
                _ => eprintln!("❌ {}", e),
            },
        }
        println!();
    }

    log::info!("Interactive session finished");
    Ok(())
}

fn generate(
    app: &mut App,
    options: &mut PasswordGenerationOptions,
    clipboard: &mut dyn Clipboard,
) -> Result<(), Box<dyn Error>> {
    let length_prompt = format!(
        "{} ({}-{}):",
        app.t("generator.length"),
        MIN_PASSWORD_LENGTH,
        MAX_PASSWORD_LENGTH
    );
    let default_length = options.length.to_string();

    let length = loop {
        let answer = Text::new(&length_prompt).with_default(&default_length).prompt()?;
        match answer.trim().parse::<usize>() {
            Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => break length,
            _ => println!("❌ {} {}-{}", app.t("generator.length"), MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH),
        }
    };

    options.length = length;
    options.include_uppercase = Confirm::new(&app.t("generator.options.uppercase"))
        .with_default(options.include_uppercase)
        .prompt()?;
    options.include_lowercase = Confirm::new(&app.t("generator.options.lowercase"))
        .with_default(options.include_lowercase)
        .prompt()?;
    options.include_numbers = Confirm::new(&app.t("generator.options.numbers"))
        .with_default(options.include_numbers)
        .prompt()?;
    options.include_symbols = Confirm::new(&app.t("generator.options.symbols"))
        .with_default(options.include_symbols)
        .prompt()?;

    if let Some(password) = handlers::handle_generate(app, options)? {
        let copy = Confirm::new(&app.t("clipboard.prompt"))
            .with_default(false)
            .prompt()?;
        if copy {
            handlers::handle_copy(app, clipboard, &password);
        }
    }
    Ok(())
}

fn show_history(app: &App, clipboard: &mut dyn Clipboard) -> Result<(), Box<dyn Error>> {
    handlers::handle_history(app, true);
    if app.history().is_empty() {
        return Ok(());
    }

    let passwords: Vec<&str> = app.history().iter().map(|entry| entry.password.as_str()).collect();
    if let Some(password) = Select::new(&app.t("clipboard.choose"), passwords)
        .with_page_size(10)
        .prompt_skippable()?
    {
        handlers::handle_copy(app, clipboard, password);
    }
    Ok(())
}

fn validate(app: &App) -> Result<(), Box<dyn Error>> {
    let password = Password::new(&format!("{}:", app.t("validator.evaluatePassword")))
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    handlers::handle_check(app, &password);
    Ok(())
}

fn clear_history(app: &mut App) -> Result<(), Box<dyn Error>> {
    if app.history().is_empty() {
        println!("{}", app.t("history.empty"));
        return Ok(());
    }

    let confirmed = Confirm::new(&app.t("history.confirmClear"))
        .with_default(false)
        .prompt()?;

    if confirmed {
        handlers::handle_clear_history(app)?;
    }
    Ok(())
}

fn change_language(app: &mut App) -> Result<(), Box<dyn Error>> {
    let names: Vec<&str> = Language::ALL.iter().map(|language| language.native_name()).collect();
    let current = Language::ALL
        .iter()
        .position(|language| *language == app.language())
        .unwrap_or(0);

    let chosen = Select::new(&app.t("language.select"), names.clone())
        .with_starting_cursor(current)
        .prompt()?;

    if let Some(index) = names.iter().position(|name| *name == chosen) {
        handlers::handle_language(app, Language::ALL[index])?;
    }
    Ok(())
}
