use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::config;

pub struct Updater {
    src_dir: PathBuf,
    dst_dir: PathBuf,
}

/// Per-step outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub answers_updated: bool,
    pub images_copied: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let answers = if self.answers_updated {
            "updated"
        } else {
            "skipped"
        };
        write!(
            f,
            "answers {}, {} image file(s) copied",
            answers, self.images_copied
        )
    }
}

impl Updater {
    pub fn new(src_dir: impl Into<PathBuf>, dst_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let src_dir = src_dir.into();
        let dst_dir = dst_dir.into();

        if !src_dir.try_exists()? {
            return Err(anyhow::anyhow!(
                "source dir `{}` does not exist",
                src_dir.display()
            ));
        }

        Ok(Self { src_dir, dst_dir })
    }

    pub fn run(&self) -> anyhow::Result<Summary> {
        let answers_updated = self.update_answers()?;
        let images_copied = self.update_images()?;

        Ok(Summary {
            answers_updated,
            images_copied,
        })
    }

    fn update_answers(&self) -> anyhow::Result<bool> {
        let src = self.src_dir.join(config::ANSWERS_FILE);
        let dst = self.dst_dir.join(config::ANSWERS_FILE);

        if !src.try_exists()? {
            log::warn!("source file `{}` does not exist, skip", src.display());
            return Ok(false);
        }

        log::info!("copy {} to {}", src.display(), dst.display());
        copy_file(&src, &dst).with_context(|| format!("failed to copy `{}`", src.display()))?;

        Ok(true)
    }

    fn update_images(&self) -> anyhow::Result<usize> {
        let src_images = self.src_dir.join(config::IMAGES_DIR);
        let dst_images = self.dst_dir.join(config::IMAGES_DIR);

        if !src_images.try_exists()? {
            log::warn!("source dir `{}` does not exist, skip", src_images.display());
            return Ok(0);
        }

        if !dst_images.try_exists()? {
            log::info!("create dest dir: {}", dst_images.display());
        }
        fs::create_dir_all(&dst_images)?;

        let mut copied = 0;
        for entry in fs::read_dir(&src_images)? {
            let entry = entry?;
            let src = entry.path();

            // subdirectories are not recursed into
            if !src.is_file() {
                continue;
            }

            let dst = dst_images.join(entry.file_name());

            log::info!("copy {} to {}", src.display(), dst.display());
            copy_file(&src, &dst).with_context(|| format!("failed to copy `{}`", src.display()))?;
            copied += 1;
        }

        Ok(copied)
    }
}

/// Byte copy that keeps the source permissions and file times.
fn copy_file(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::copy(src, dst)?;

    let metadata = fs::metadata(src)?;
    fs::set_permissions(dst, metadata.permissions())?;

    let atime = filetime::FileTime::from_last_access_time(&metadata);
    let mtime = filetime::FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(dst, atime, mtime)?;

    Ok(())
}
