//! Terminal surface: banner, skills prompt, and step progress lines.

pub mod banner;

use console::style;
use dialoguer::Input;

use crate::errors::AppError;

pub use banner::print_banner;

pub const SKILLS_EXAMPLE: &str = "Data Analysis, Data Engineering, Python, PySpark, Databricks, SQL";

/// Asks for a comma-separated skills line. An empty answer is accepted.
pub fn prompt_skills() -> Result<String, AppError> {
    println!("Please enter all your skills separated by commas;");
    println!("      ex. {}", style(SKILLS_EXAMPLE).green().bright());

    let raw: String = Input::new()
        .with_prompt(">")
        .allow_empty(true)
        .interact_text()?;
    Ok(raw)
}

/// Numbered progress line, e.g. `Loading Main Datasource... 1/4`.
pub fn step_line(message: &str, step: usize, total: usize) -> String {
    format!("{message}... {step}/{total}")
}

pub fn print_step(message: &str, step: usize, total: usize) {
    println!("{}", style(step_line(message, step, total)).dim());
}
