//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Derive the output file name for entry `index` of `container`:
/// `<stem>.<index>.bmp`, placed in `out_dir` when given, otherwise next
/// to the container.
pub fn output_file_name(container: &Path, index: usize, out_dir: Option<&Path>) -> PathBuf {
    let stem = container
        .file_stem()
        .unwrap_or_else(|| container.as_os_str())
        .to_string_lossy();
    let name = format!("{}.{}.bmp", stem, index);

    match out_dir {
        Some(dir) => dir.join(name),
        None => container.with_file_name(name),
    }
}
