use std::{env, path::PathBuf};

use anyhow::Context as _;
use envconfig::Envconfig;

/// The answers file, copied verbatim.
pub const ANSWERS_FILE: &str = "correct_answers.json";
/// The directory of image files, copied file by file.
pub const IMAGES_DIR: &str = "images";
/// The content directory expected next to the site directory.
pub const SOURCE_DIR_NAME: &str = "Historia";

#[derive(Debug, Clone, Envconfig)]
pub struct Config {
    /// The directory holding the content to publish.
    /// Defaults to the `Historia` directory next to the site directory.
    #[envconfig(from = "HISTORIA_UPDATER_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,
    /// The published site directory.
    /// Defaults to the directory containing the executable.
    #[envconfig(from = "HISTORIA_UPDATER_SITE_DIR")]
    pub site_dir: Option<PathBuf>,
}

impl Config {
    /// Resolves the source and site directories, filling in the defaults.
    pub fn resolve(self) -> anyhow::Result<(PathBuf, PathBuf)> {
        let site_dir = match self.site_dir {
            Some(dir) => dir,
            None => exe_dir()?,
        };

        let source_dir = match self.source_dir {
            Some(dir) => dir,
            None => site_dir
                .parent()
                .with_context(|| format!("site dir `{}` has no parent dir", site_dir.display()))?
                .join(SOURCE_DIR_NAME),
        };

        Ok((source_dir, site_dir))
    }
}

fn exe_dir() -> anyhow::Result<PathBuf> {
    let exe = env::current_exe().context("failed to get the current exe path")?;
    let dir = exe
        .parent()
        .context("the current exe path has no parent dir")?;
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn resolve_keeps_explicit_dirs() {
        let config = Config {
            source_dir: Some("/srv/content".into()),
            site_dir: Some("/srv/site".into()),
        };

        let (source_dir, site_dir) = config.resolve().unwrap();

        assert_eq!(source_dir, Path::new("/srv/content"));
        assert_eq!(site_dir, Path::new("/srv/site"));
    }

    #[test]
    fn resolve_defaults_the_source_next_to_the_site() {
        let config = Config {
            source_dir: None,
            site_dir: Some("/srv/website".into()),
        };

        let (source_dir, _) = config.resolve().unwrap();

        assert_eq!(source_dir, Path::new("/srv/Historia"));
    }
}
