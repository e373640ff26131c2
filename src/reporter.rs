use colored::*;
use gallery_fill::{FillReporter, FillSummary};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::path::Path;

/// CLI progress reporter: one bar over the missing set, one line per entity.
pub struct CliReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(None),
        }
    }

    fn println(&self, line: String) {
        match self.bar.borrow().as_ref() {
            Some(pb) => pb.println(line),
            None => eprintln!("{}", line),
        }
    }
}

impl FillReporter for CliReporter {
    fn on_plan(&self, missing: usize, catalog: usize) {
        if missing == 0 {
            return;
        }
        eprintln!(
            "{} of {} entities are missing images",
            missing.to_string().yellow(),
            catalog
        );

        let pb = ProgressBar::new(missing as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "  {spinner:.cyan} Generating [{bar:30.cyan/dim}] {pos}/{len} {msg}",
        ) {
            pb.set_style(
                style
                    .progress_chars("━╸─")
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
        }
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        *self.bar.borrow_mut() = Some(pb);
    }

    fn on_entity_start(&self, name: &str, _position: usize, _total: usize) {
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.set_message(name.to_string());
        }
    }

    fn on_entity_filled(&self, name: &str, path: &Path, bytes: usize) {
        self.println(format!(
            "  {} {} -> {} ({} bytes)",
            "✓".green(),
            name,
            path.display(),
            bytes
        ));
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.inc(1);
        }
    }

    fn on_entity_failed(&self, name: &str, reason: &str) {
        self.println(format!("  {} {}: {}", "✗".red(), name, reason));
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.inc(1);
        }
    }

    fn on_fill_complete(&self, summary: &FillSummary) {
        if let Some(pb) = self.bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
        if let Some(line) = completion_line(summary) {
            eprintln!("  {} {}", "✓".green(), line);
        }
    }
}

fn completion_line(summary: &FillSummary) -> Option<String> {
    summary
        .all_present()
        .then(|| format!("All {} entities have images!", summary.catalog_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present_line() {
        let summary = FillSummary {
            catalog_size: 3,
            ..FillSummary::default()
        };
        assert_eq!(
            completion_line(&summary).as_deref(),
            Some("All 3 entities have images!")
        );
    }

    #[test]
    fn test_no_all_present_line_after_attempts() {
        let summary = FillSummary {
            catalog_size: 3,
            attempted: 1,
            filled: 1,
            failed: vec![],
        };
        assert_eq!(completion_line(&summary), None);
    }

    #[test]
    fn test_reporter_completes_without_a_bar() {
        let reporter = CliReporter::new();
        reporter.on_plan(0, 2);
        reporter.on_fill_complete(&FillSummary {
            catalog_size: 2,
            ..FillSummary::default()
        });
        assert!(reporter.bar.borrow().is_none());
    }
}
