//! Group file loading and provisioning.
//!
//! Every group is persisted as `<configs dir>/<lower-case group name>.json`.
//! A missing file is created from the group's defaults; an existing file is
//! read as-is and never written again.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::defaults::DefaultExtractor;
use crate::config::group::Group;
use crate::error::{Error, Result};

/// Directory group files live in unless configured otherwise.
pub const DEFAULT_CONFIGS_DIR: &str = "./configs";

/// Permissions of newly created group files.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Loads group files, creating them from defaults when absent.
///
/// # Examples
///
/// ```no_run
/// use vpntoproxy::config::{ConfigLoader, Server};
/// use std::path::Path;
///
/// let server: Server = ConfigLoader::resolve(Path::new("./configs")).unwrap();
/// println!("listening on {}", server.port);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the file backing group `G` inside `configs_dir`.
    #[must_use]
    pub fn path_for<G: Group>(configs_dir: &Path) -> PathBuf {
        configs_dir.join(G::file_name())
    }

    /// Load group `G`, provisioning its file with defaults if it is missing.
    ///
    /// Calling this again once the file exists yields the same values and
    /// leaves the file untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigFileCorrupt`] if the file exists but does not decode.
    /// - [`Error::ConfigFileIo`] if the file cannot be read or created.
    /// - [`Error::MalformedDefault`] if a default literal is invalid.
    pub fn resolve<G: Group>(configs_dir: &Path) -> Result<G> {
        let path = Self::path_for::<G>(configs_dir);

        match fs::read(&path) {
            Ok(contents) => Self::decode(&path, &contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{} not found, creating it with defaults", path.display());
                Self::create_file(&path)
            }
            Err(source) => Err(Error::ConfigFileIo { path, source }),
        }
    }

    /// Populate `G` from its defaults and write it to `path`.
    ///
    /// The file is written pretty-printed and only if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if a default is malformed, the group cannot be
    /// encoded, or the file cannot be written.
    pub fn create_file<G: Group>(path: &Path) -> Result<G> {
        let group: G = DefaultExtractor::extract()?;
        let json = serde_json::to_string_pretty(&group)?;

        let io_err = |source| Error::ConfigFileIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options.open(path).map_err(io_err)?;
        file.write_all(json.as_bytes()).map_err(io_err)?;

        Ok(group)
    }

    // Missing fields keep their zero value; bad encoding or types are corrupt.
    fn decode<G: Group>(path: &Path, contents: &[u8]) -> Result<G> {
        serde_json::from_slice(contents).map_err(|source| Error::ConfigFileCorrupt {
            path: path.to_path_buf(),
            source,
        })
    }
}
