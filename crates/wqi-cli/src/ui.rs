//! Terminal helpers: busy indicator, line input, banner

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use colored::Colorize;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use indicatif::{ProgressBar, ProgressStyle};

use wqi_core::Result;

/// Spinner shown while a request is in flight. Hidden when stderr is piped
/// so scripted runs stay clean.
pub(crate) fn busy(message: &str) -> ProgressBar {
    let spinner = if io::stderr().is_terminal() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Display the startup banner
pub fn display_banner() {
    println!();
    println!("{}", "WQI - Writing Quality Inspector".blue().bold());
    println!(
        "{}",
        "Score a draft against strict rubrics, or rewrite it with focus areas.".dimmed()
    );
    println!();
    println!(
        "{}",
        "💡 Tip: type your text to run the active panel, 'use improve' to switch, 'help' for commands"
            .dimmed()
    );
    println!();
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Run the active panel on the typed text", "<text>".green());
    println!("  {} - Switch panel: analyze or improve", "use <panel>".green());
    println!("  {} - Set the intended purpose (analyze panel)", "purpose <p>".green());
    println!("  {} - Toggle strict scoring (analyze panel)", "strict on|off".green());
    println!("  {} - Set focus areas (improve panel)", "focus <a,b,...>".green());
    println!("  {} - Show the active panel's settings", "show".green());
    println!("  {} - Check whether the service is reachable", "health".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  use improve");
    println!("  focus grammar, tone");
    println!("  The report was wrote by three peoples.");
}

/// Read one line with ↑/↓ history navigation
pub async fn read_line_with_history(prompt: &str, history: &mut Vec<String>) -> Result<String> {
    // Piped input: read a line directly, no editing.
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(input);
    }

    enable_raw_mode()?;
    let mut input = String::new();
    let mut history_index: Option<usize> = None;
    let mut cursor_pos = 0;

    redraw(prompt, &input)?;

    loop {
        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Enter => {
                    disable_raw_mode()?;
                    println!();
                    if !input.is_empty() {
                        history.push(input.clone());
                    }
                    return Ok(input);
                }
                KeyCode::Char(c) => {
                    input.insert(cursor_pos, c);
                    cursor_pos += 1;
                    redraw(prompt, &input)?;
                }
                KeyCode::Backspace => {
                    if cursor_pos > 0 {
                        input.remove(cursor_pos - 1);
                        cursor_pos -= 1;
                        erase_and_redraw(prompt, &input)?;
                    }
                }
                KeyCode::Up => {
                    if !history.is_empty() {
                        let new_index = match history_index {
                            None => history.len() - 1,
                            Some(idx) if idx > 0 => idx - 1,
                            Some(idx) => idx,
                        };
                        history_index = Some(new_index);
                        input = history[new_index].clone();
                        cursor_pos = input.len();
                        erase_and_redraw(prompt, &input)?;
                    }
                }
                KeyCode::Down => {
                    if let Some(idx) = history_index {
                        if idx < history.len() - 1 {
                            let new_index = idx + 1;
                            history_index = Some(new_index);
                            input = history[new_index].clone();
                        } else {
                            history_index = None;
                            input.clear();
                        }
                        cursor_pos = input.len();
                        erase_and_redraw(prompt, &input)?;
                    }
                }
                KeyCode::Esc => {
                    disable_raw_mode()?;
                    println!();
                    return Ok(String::new());
                }
                _ => {}
            }
        }
    }
}

fn redraw(prompt: &str, input: &str) -> Result<()> {
    print!("\r{} {}", prompt.green().bold(), input);
    io::stdout().flush()?;
    Ok(())
}

/// Overwrite the old line with spaces before redrawing a shorter one.
fn erase_and_redraw(prompt: &str, input: &str) -> Result<()> {
    print!("\r{} {}", prompt.green().bold(), " ".repeat(60));
    redraw(prompt, input)
}
