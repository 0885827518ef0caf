//! Progress reporting: count-style bars for the record parsing stages.

use indicatif::{ProgressBar, ProgressStyle};

fn count_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
         it/s: {per_sec}  elapsed: {elapsed_precise}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▉▊▋▌▍▎▏  ")
}

/// A small wrapper around an `indicatif` count bar.
/// - `inc_items(delta)` increments progress
/// - `finish(msg)` finalizes the bar with a message
///
/// A hidden scope draws nothing, so callers never branch on whether progress is on.
pub struct ProgressScope {
    pb: ProgressBar,
}

impl ProgressScope {
    pub fn count<T: Into<String>>(label: T, total: u64) -> Self {
        let pb = ProgressBar::new(total);
        pb.set_style(count_style());
        let label = label.into();
        if !label.is_empty() {
            pb.set_message(label);
        }
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    pub fn hidden() -> Self {
        Self { pb: ProgressBar::hidden() }
    }

    /// Labeled count bar when `enabled`, hidden otherwise.
    pub fn count_if<T: Into<String>>(enabled: bool, label: T) -> Self {
        if enabled { Self::count(label, 0) } else { Self::hidden() }
    }

    #[inline] pub fn set_length(&self, total: u64) { self.pb.set_length(total); }
    #[inline] pub fn inc_items(&self, delta: u64) { self.pb.inc(delta); }
    pub fn finish<T: Into<String>>(&self, msg: T) { self.pb.finish_with_message(msg.into()); }
}
