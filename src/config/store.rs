//! Configuration file location, bootstrap and token lookup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigError;
use super::defaults;
use super::ini::{IniConfig, LookupError};

/// Returns the default configuration path,
/// `<home>/.config/notifyourself/config.ini`.
///
/// Falls back to a path relative to the working directory when no home
/// directory can be determined.
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(defaults::CONFIG_DIR)
        .join(defaults::CONFIG_FILE)
}

/// Returns the user-supplied path, or the default path if none was given.
#[must_use]
pub fn resolve_config_path(user: Option<&Path>) -> PathBuf {
    user.map_or_else(default_config_path, Path::to_path_buf)
}

/// Generates the configuration template written on first use.
#[must_use]
pub fn default_config_template() -> String {
    "# notifYourself configuration
#
# You can define multiple targets with different tokens and use
# the -t flag to choose one. Default is the DEFAULT target.

[DEFAULT]
# Use your notifYourself app to find this token
token=

# [ANOTHER_TARGET]
# token=ANOTHER_TARGETS_TOKEN
"
    .to_string()
}

/// Location of the configuration file for one invocation.
///
/// Remembers whether the path is the default one, since only the default
/// file is ever created.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    is_default: bool,
}

impl ConfigStore {
    /// Creates a store for `user` (or the default path if `None`).
    #[must_use]
    pub fn resolve(user: Option<&Path>) -> Self {
        Self::new(resolve_config_path(user), &default_config_path())
    }

    /// Creates a store for `path`, comparing it against `default_path`.
    ///
    /// Useful for testing without touching the real home directory.
    #[must_use]
    pub fn new(path: PathBuf, default_path: &Path) -> Self {
        let is_default = path == default_path;
        Self { path, is_default }
    }

    /// Returns the resolved configuration path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the resolved path is the default path.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }

    /// Writes the configuration template if the default file is missing.
    ///
    /// Custom paths and existing files are left alone. Failures are logged
    /// at debug level and otherwise ignored.
    pub fn ensure_default(&self) {
        if !self.is_default() || self.path.exists() {
            return;
        }

        match write_default_config(&self.path) {
            Ok(()) => tracing::debug!("Wrote config template to {}", self.path.display()),
            Err(e) => tracing::debug!("Skipping config template: {e}"),
        }
    }

    /// Loads and parses the configuration file.
    ///
    /// A missing file yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<IniConfig, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config file at {}", self.path.display());
                return Ok(IniConfig::new());
            }
            Err(e) => {
                return Err(ConfigError::FileRead {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        IniConfig::parse(&content).map_err(|e| ConfigError::Parse {
            path: self.path.clone(),
            line: e.line,
            reason: e.reason,
        })
    }

    /// Loads the configuration and looks up the token for `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or [`lookup_token`] fails.
    pub fn token_for(&self, target: &str) -> Result<String, ConfigError> {
        let config = self.load()?;
        lookup_token(&config, target, &self.path).map(str::to_string)
    }
}

/// Looks up the token for `target`, falling back to the `[DEFAULT]` section.
///
/// `path` is only used for error messages.
///
/// # Errors
///
/// Returns [`ConfigError::SectionNotFound`] if `target` has no section, and
/// [`ConfigError::TokenNotFound`] if no non-empty token resolves for it.
pub fn lookup_token<'a>(
    config: &'a IniConfig,
    target: &str,
    path: &Path,
) -> Result<&'a str, ConfigError> {
    let token = config
        .get(target, defaults::TOKEN_KEY)
        .map_err(|LookupError::SectionNotFound| ConfigError::SectionNotFound {
            target: target.to_string(),
            path: path.to_path_buf(),
        })?;

    token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ConfigError::TokenNotFound {
            target: target.to_string(),
            path: path.to_path_buf(),
        })
}

/// Writes the default configuration template, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, default_config_template())
}
