use std::path::Path;
use std::time::Duration;

use crate::fill::FillSummary;

/// Trait for reporting fill progress.
///
/// The CLI implements it with indicatif; library callers can use [`SilentReporter`].
/// All methods have default no-op implementations.
pub trait FillReporter {
    fn on_plan(&self, _missing: usize, _catalog: usize) {}
    fn on_entity_start(&self, _name: &str, _position: usize, _total: usize) {}
    fn on_entity_filled(&self, _name: &str, _path: &Path, _bytes: usize) {}
    fn on_entity_failed(&self, _name: &str, _reason: &str) {}
    fn on_pause(&self, _delay: Duration) {}
    fn on_fill_complete(&self, _summary: &FillSummary) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl FillReporter for SilentReporter {}
