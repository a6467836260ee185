// src/cli/handlers.rs
use chrono::Utc;
use console::{style, Color};

use crate::clipboard::{copy_text, Clipboard};
use crate::core::{App, AppError};
use crate::i18n::Language;
use crate::models::PasswordGenerationOptions;
use crate::strength::{LocalizedStrength, StrengthTier};
use crate::utils::{format_time_ago, mask_password};

const BAR_WIDTH: usize = 6;

fn tier_color(score: u8) -> Color {
    match StrengthTier::from_score(score) {
        StrengthTier::VeryWeak => Color::Red,
        StrengthTier::Weak => Color::Color256(208),
        StrengthTier::Fair => Color::Yellow,
        StrengthTier::Good | StrengthTier::Strong => Color::Green,
        StrengthTier::VeryStrong | StrengthTier::Excellent => Color::Color256(28),
    }
}

/// `█████░ Strong (5/6)` colored by tier.
pub fn strength_line(app: &App, strength: &LocalizedStrength) -> String {
    let filled = usize::from(strength.score).min(BAR_WIDTH);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

    format!(
        "{}: {} {} ({}/{})",
        app.t("strength.label"),
        style(bar).fg(tier_color(strength.score)),
        style(&strength.label).fg(tier_color(strength.score)).bold(),
        filled,
        BAR_WIDTH
    )
}

pub fn print_strength(app: &App, strength: &LocalizedStrength, title_key: &str) {
    println!("{}", strength_line(app, strength));
    if !strength.suggestions.is_empty() {
        println!("{}", style(app.t(title_key)).bold());
        for suggestion in &strength.suggestions {
            println!("  • {}", suggestion);
        }
    }
}

/// Returns the password that was printed, if any.
pub fn handle_generate(app: &mut App, options: &PasswordGenerationOptions) -> Result<Option<String>, AppError> {
    match app.generate(options)? {
        Some(record) => {
            println!("{}: {}", app.t("generator.generatedPassword"), style(&record.password).cyan().bold());
            print_strength(app, &record.strength, "strength.suggestions.title");
            if !record.saved_to_history {
                eprintln!("⚠️ History could not be saved");
            }
            Ok(Some(record.password))
        }
        None => {
            println!("❌ {}", app.t("generator.noClasses"));
            Ok(None)
        }
    }
}

pub fn handle_copy(app: &App, clipboard: &mut dyn Clipboard, password: &str) -> bool {
    let copied = copy_text(clipboard, password);
    if copied {
        println!("📋 {}", app.t("clipboard.copied"));
    } else {
        eprintln!("⚠️ {}", app.t("clipboard.failed"));
    }
    copied
}

pub fn handle_check(app: &App, password: &str) {
    let strength = app.evaluate(password);
    print_strength(app, &strength, "strength.suggestions.improvementTitle");
}

pub fn handle_history(app: &App, reveal: bool) {
    println!("{}", style(app.t("history.title")).bold());

    if app.history().is_empty() {
        println!("  {}", app.t("history.empty"));
        return;
    }

    let now = Utc::now();
    for entry in app.history() {
        let shown = if reveal {
            entry.password.clone()
        } else {
            mask_password(&entry.password, 2)
        };

        println!(
            "  {}  {}: {}  {}",
            style(shown).cyan(),
            app.t("history.strengthLabel"),
            style(format!("{}/{}", usize::from(entry.strength).min(BAR_WIDTH), BAR_WIDTH))
                .fg(tier_color(entry.strength)),
            style(format_time_ago(app.translator(), entry.created_at, now)).dim()
        );
    }
}

pub fn handle_clear_history(app: &mut App) -> Result<(), AppError> {
    app.clear_history()?;
    println!("✅ {}", app.t("history.cleared"));
    Ok(())
}

pub fn handle_language(app: &mut App, language: Language) -> Result<(), AppError> {
    app.set_language(language)?;
    println!("✅ {}: {}", app.t("language.changed"), language.native_name());
    Ok(())
}
