//! Terminal UI utilities

use colored::Colorize;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use kyc_demo_core::{KycError, Progress};
use std::time::Duration;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print a user-facing error as a titled notice
pub fn notice(err: &KycError) {
    println!("{} {}: {}", "✗".red().bold(), err.title().red().bold(), err);
}

/// Print a section header
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// Print a key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print the step checklist with the active step highlighted
pub fn stepper(progress: &Progress) {
    for (step, done) in progress.steps() {
        let number = step.number().unwrap_or_default();
        let label = format!("{} Verification", step.name());
        if done {
            println!("  {} {}", "✓".green().bold(), label);
        } else if number == progress.active_step {
            println!("  {} {}", format!("{}", number).blue().bold(), label.bold());
        } else {
            println!("  {} {}", format!("{}", number).dimmed(), label.dimmed());
        }
    }
}

/// Create a spinner progress indicator
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prompt for user confirmation
pub fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for text input
pub fn input(prompt: &str) -> anyhow::Result<String> {
    use dialoguer::Input;
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}

/// Prompt for text input that may be left empty
pub fn optional_input(prompt: &str) -> anyhow::Result<Option<String>> {
    use dialoguer::Input;
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim().to_string();
    Ok((!value.is_empty()).then_some(value))
}

/// Clear the terminal
pub fn clear() {
    let term = Term::stdout();
    let _ = term.clear_screen();
}

/// Print a separator line
pub fn separator() {
    println!("{}", "─".repeat(60).dimmed());
}
