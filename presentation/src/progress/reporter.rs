//! Progress reporting for validation runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use roster_application::ValidationProgress;
use roster_domain::JudgementResult;
use std::sync::{Mutex, PoisonError};

/// Reports progress with a progress bar, one tick per settled entry
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn mark(result: &JudgementResult) -> String {
        if result.is_valid() {
            format!("{} {}", "v".green(), result.name)
        } else {
            format!("{} {}", "x".red(), result.name)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationProgress for ProgressReporter {
    fn on_run_start(&self, total_entries: usize) {
        let bar = ProgressBar::new(total_entries as u64);
        bar.set_style(Self::bar_style());
        bar.set_prefix("Checking units");
        bar.set_message("Starting...");

        *self.bar.lock().unwrap_or_else(PoisonError::into_inner) = Some(bar);
    }

    fn on_entry_settled(&self, _index: usize, result: &JudgementResult) {
        if let Some(bar) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            bar.set_message(Self::mark(result));
            bar.inc(1);
        }
    }

    fn on_run_complete(&self, settled: usize) {
        if let Some(bar) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            bar.finish_and_clear();
            eprintln!("{} {} units checked", "->".cyan(), settled);
        }
    }
}

/// Simple text-based progress (no progress bar)
pub struct SimpleProgress;

impl ValidationProgress for SimpleProgress {
    fn on_run_start(&self, total_entries: usize) {
        eprintln!("{} {} ({} units)", "->".cyan(), "Checking units".bold(), total_entries);
    }

    fn on_entry_settled(&self, index: usize, result: &JudgementResult) {
        eprintln!("  [{}] {}", index + 1, ProgressReporter::mark(result));
    }

    fn on_run_complete(&self, _settled: usize) {
        eprintln!();
    }
}
