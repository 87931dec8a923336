//! Console output formatter

use crate::output::formatter::{OutputFormatter, ValidationReport};
use colored::{ColoredString, Colorize};
use roster_domain::{JudgementResult, Roster};

const NAME_WIDTH: usize = 32;

/// Formats validation reports and rosters for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a validation report as a table followed by the list checks
    pub fn format_report(report: &ValidationReport<'_>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Roster Validation"));
        output.push('\n');

        output.push_str(&Self::section_header("Units"));
        output.push_str(&format!(
            "{:>3}  {:<5}  {:<width$}  {:>4}  {}\n",
            "#",
            "Skill",
            "Unit",
            "PV",
            "Status",
            width = NAME_WIDTH
        ));
        for (index, result) in report.results.iter().enumerate() {
            let pv = result
                .unit
                .as_ref()
                .and_then(|u| u.point_value)
                .map(|pv| pv.to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "{:>3}  {:<5}  {:<width$}  {:>4}  {}\n",
                index + 1,
                result.skill,
                Self::truncate(&result.name, NAME_WIDTH),
                pv,
                Self::status(result),
                width = NAME_WIDTH
            ));
        }

        if !report.checks.is_empty() {
            output.push_str(&Self::section_header("List Checks"));
            for check in report.checks {
                let mark = if check.outcome.valid {
                    "v".green()
                } else {
                    "x".red()
                };
                match &check.outcome.message {
                    Some(message) => output.push_str(&format!(
                        "  {} {}: {}\n",
                        mark,
                        check.name.bold(),
                        message
                    )),
                    None => output.push_str(&format!("  {} {}\n", mark, check.name.bold())),
                }
            }
        }

        let verdict = if report.valid {
            "Roster is valid".green().bold()
        } else {
            "Roster is not valid".red().bold()
        };
        output.push_str(&format!("\n{}\n", verdict));
        output.push_str(&Self::footer());

        output
    }

    /// Format a validation report as JSON
    pub fn format_report_json(report: &ValidationReport<'_>) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a roster with skill-adjusted point values and the total
    pub fn format_roster(roster: &Roster) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Roster:".cyan().bold(),
            roster.name()
        ));

        if roster.is_empty() {
            output.push_str(&format!("  {}\n", "(no units)".dimmed()));
            return output;
        }

        output.push_str(&format!(
            "{:>3}  {:<5}  {:<width$}  {:>4}  {:>4}\n",
            "#",
            "Skill",
            "Unit",
            "Base",
            "PV",
            width = NAME_WIDTH
        ));
        for unit in roster.units() {
            output.push_str(&format!(
                "{:>3}  {:<5}  {:<width$}  {:>4}  {:>4}\n",
                unit.ordinal,
                unit.skill,
                Self::truncate(unit.name(), NAME_WIDTH),
                unit.base_point_value(),
                unit.point_value(),
                width = NAME_WIDTH
            ));
        }
        output.push_str(&format!(
            "{} {} units, {} PV\n",
            "Total:".bold(),
            roster.len(),
            roster.total_point_value()
        ));

        output
    }

    fn status(result: &JudgementResult) -> ColoredString {
        let text = result.status();
        if !result.is_valid() {
            text.red()
        } else if result.error.is_some() {
            text.yellow()
        } else if result.is_unique() {
            text.cyan()
        } else {
            text.green()
        }
    }

    fn truncate(text: &str, width: usize) -> String {
        if text.chars().count() <= width {
            text.to_string()
        } else {
            let mut cut: String = text.chars().take(width - 1).collect();
            cut.push('…');
            cut
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ValidationReport<'_>) -> String {
        Self::format_report(report)
    }

    fn format_report_json(&self, report: &ValidationReport<'_>) -> String {
        Self::format_report_json(report)
    }

    fn format_roster(&self, roster: &Roster) -> String {
        Self::format_roster(roster)
    }
}
