use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::StartupError;

/// A Who's on First data directory that passed the startup check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WofDataDir {
    root: PathBuf,
}

impl WofDataDir {
    /// Subdirectories every usable data directory must have.
    pub const REQUIRED: [&'static str; 2] = ["meta", "data"];

    /// Checks that `path` holds both `meta` and `data` directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StartupError> {
        let root = path.as_ref().to_path_buf();
        let complete = Self::REQUIRED.iter().all(|sub| root.join(sub).is_dir());
        if !complete {
            return Err(StartupError::MissingWofData { path: root });
        }

        info!(path = %root.display(), "wof_data_dir_ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meta_dir(&self) -> PathBuf {
        self.root.join("meta")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn accepts_dir_with_meta_and_data() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("meta")).unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();

        let wof = WofDataDir::open(dir.path()).unwrap();
        assert_eq!(wof.root(), dir.path());
        assert_eq!(wof.data_dir(), dir.path().join("data"));
    }

    #[test]
    fn rejects_incomplete_dirs() {
        for present in [&[][..], &["meta"][..], &["data"][..]] {
            let dir = tempfile::tempdir().unwrap();
            for sub in present {
                fs::create_dir(dir.path().join(sub)).unwrap();
            }

            let err = WofDataDir::open(dir.path()).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("{} does not contain Who's on First data", dir.path().display())
            );
        }
    }

    #[test]
    fn plain_file_is_not_a_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("meta")).unwrap();
        fs::write(dir.path().join("data"), b"").unwrap();

        assert!(WofDataDir::open(dir.path()).is_err());
    }
}
