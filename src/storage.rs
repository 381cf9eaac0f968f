use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::{error::AppError, profile::Profile};

/// Profiles file in user's home directory
pub const PROFILES_FILE_NAME: &str = ".git-profiles.json";

/// Environment variable pointing the store at another file
pub const PROFILES_FILE_ENV: &str = "GIT_PROFILES_FILE";

/// Gets the path to the profiles file
///
/// `GIT_PROFILES_FILE` wins when set to a non-empty value.
pub fn default_profiles_path() -> Result<PathBuf, AppError> {
    if let Some(path) = env::var_os(PROFILES_FILE_ENV).filter(|path| !path.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
    Ok(home_dir.join(PROFILES_FILE_NAME))
}

/// JSON file holding the whole profile collection
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Opens the store at its default location
    pub fn new() -> Result<Self, AppError> {
        Ok(Self::at(default_profiles_path()?))
    }

    /// Opens the store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads profiles from the JSON file
    ///
    /// A missing, unreadable or unparsable file yields an empty collection.
    pub fn load(&self) -> Vec<Profile> {
        let file_contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "profiles file does not exist yet");
                return Vec::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read profiles file");
                return Vec::new();
            }
        };

        if file_contents.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Profile>>(&file_contents) {
            Ok(profiles) => {
                debug!(path = %self.path.display(), count = profiles.len(), "loaded profiles");
                profiles
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unparsable profiles file");
                Vec::new()
            }
        }
    }

    /// Saves profiles to the JSON file, replacing its whole content
    ///
    /// # Arguments
    /// * `profiles` - Full collection to persist
    pub fn save(&self, profiles: &[Profile]) -> Result<(), AppError> {
        self.write(profiles).map_err(|err| {
            err.context(format!("failed to write profiles to {}", self.path.display()))
        })
    }

    fn write(&self, profiles: &[Profile]) -> Result<(), AppError> {
        let json: String = serde_json::to_string_pretty(profiles)?;

        // A symlinked profiles file is updated in place of the link itself.
        let target: PathBuf = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir: &Path = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        // Readers only ever see the old or the new file, never a half-written one.
        let mut tmp_file = NamedTempFile::new_in(dir)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.persist(&target).map_err(|err| err.error)?;

        debug!(path = %target.display(), count = profiles.len(), "saved profiles");
        Ok(())
    }
}
