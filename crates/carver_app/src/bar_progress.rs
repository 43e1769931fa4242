//! `ProgressObserver` implementation backed by `indicatif`, styled the
//! same as the teacher's scan engine.

use carver_core::ProgressObserver;
use indicatif::{ProgressBar, ProgressStyle};

pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(source_size: u64) -> Self {
        let bar = ProgressBar::new(source_size);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:50.cyan/blue}] {bytes}/{total_bytes} ({eta}) {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

impl ProgressObserver for BarProgress {
    fn on_progress(&mut self, bytes_scanned: u64, source_size: u64) {
        self.bar.set_length(source_size);
        self.bar.set_position(bytes_scanned.min(source_size));
    }

    fn on_carved(&mut self, recovered_count: u64) {
        self.bar.set_message(format!("{recovered_count} recovered"));
    }
}
