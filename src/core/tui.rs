//! Terminal output helpers for the CLI surface.

use colored::{ColoredString, Colorize};
use std::env;

const MIN_BOX_WIDTH: usize = 40;
const MAX_BOX_WIDTH: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoxStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl BoxStyle {
    fn frame(&self, s: &str) -> ColoredString {
        match self {
            BoxStyle::Info => s.bright_cyan(),
            BoxStyle::Success => s.bright_green(),
            BoxStyle::Warning => s.bright_yellow(),
            BoxStyle::Error => s.bright_red(),
        }
    }

    fn subtitle(&self, s: &str) -> ColoredString {
        match self {
            BoxStyle::Info => s.cyan(),
            BoxStyle::Success => s.green(),
            BoxStyle::Warning => s.yellow(),
            BoxStyle::Error => s.red(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemStatus {
    Pass,
    Fail,
    Info,
}

impl ItemStatus {
    pub fn icon(&self) -> ColoredString {
        match self {
            ItemStatus::Pass => "✅".bright_green(),
            ItemStatus::Fail => "❌".bright_red(),
            ItemStatus::Info => "💡".cyan(),
        }
    }
}

pub fn terminal_width() -> usize {
    env::var("TERM_WIDTH")
        .ok()
        .and_then(|w| w.parse().ok())
        .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.parse().ok()))
        .unwrap_or(80)
}

fn box_width() -> usize {
    terminal_width().clamp(MIN_BOX_WIDTH, MAX_BOX_WIDTH)
}

fn indent() -> String {
    " ".repeat(terminal_width().saturating_sub(box_width()) / 2)
}

fn centered_row(content: &str, width: usize) -> String {
    let padding = width.saturating_sub(2).saturating_sub(content.chars().count());
    let left = padding / 2;
    format!("║{}{}{}║", " ".repeat(left), content, " ".repeat(padding - left))
}

/// A framed title box, centered in the terminal.
pub fn render_box(title: &str, subtitle: &str, style: BoxStyle) {
    let width = box_width();
    let pad = indent();
    let rule = "═".repeat(width.saturating_sub(2));

    println!("{}{}", pad, style.frame(&format!("╔{}╗", rule)));
    println!("{}{}", pad, style.frame(&centered_row(title, width)).bold());
    if !subtitle.is_empty() {
        println!("{}{}", pad, style.subtitle(&centered_row(subtitle, width)));
    }
    println!("{}{}", pad, style.frame(&format!("╚{}╝", rule)));
}

pub fn print_status_line(message: &str, status: ItemStatus) {
    println!("{}  {} {}", indent(), status.icon(), message.bright_white());
}

/// Check-count footer for the validation report.
pub fn print_summary(pass: usize, fail: usize) {
    let pad = indent();
    println!();
    if fail == 0 {
        println!("{}  {} all {} checks passed", pad, "✅".bright_green(), pass);
    } else {
        println!(
            "{}  {} {} passed, {} {} failed",
            pad,
            "✅".bright_green(),
            pass,
            "❌".bright_red(),
            fail
        );
    }
}
