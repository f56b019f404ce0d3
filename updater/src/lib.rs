use std::path::PathBuf;

mod config;
mod updater;

pub use config::Config;
pub use updater::{Summary, Updater};

/// Copies the answers file and the image files from `src_dir` into `dst_dir`.
pub fn update(
    src_dir: impl Into<PathBuf>,
    dst_dir: impl Into<PathBuf>,
) -> anyhow::Result<Summary> {
    let updater = updater::Updater::new(src_dir, dst_dir)?;
    updater.run()
}
