//! # Console Reporting Module
//!
//! Prints interpreter output to stdout, color coded by tone. `colored`
//! already drops the escape codes when stdout is not a terminal or
//! `NO_COLOR` is set, so CI logs and piped output stay plain.

use colored::*;

use crate::core::interpreter::{ConsoleLine, Interpretation, Tone};

/// Prints every line of an interpretation, in order.
///
/// # Output Format
/// ```text
/// 📊 Resultados del scraping
/// Estado: success
/// 📈 Estadísticas:
/// Total remates: 12
/// ...
/// ✅ Scraping completado exitosamente
/// ```
pub fn print_interpretation(interpretation: &Interpretation) {
    for line in &interpretation.lines {
        println!("{}", styled(line));
    }
}

/// Applies the tone's color to a line.
fn styled(line: &ConsoleLine) -> ColoredString {
    match line.tone {
        Tone::Banner => line.text.cyan().bold(),
        Tone::Detail => line.text.normal(),
        Tone::Success => line.text.green().bold(),
        Tone::Failure => line.text.red().bold(),
    }
}

/// Prints a non-fatal warning to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message.yellow());
}
