use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over a known number of items (catalog rows, merge inputs).
pub fn create_count_progress_bar(total_items: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_items);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .expect("Failed to create progress style")
            .progress_chars("#>-"),
    );
    pb
}
