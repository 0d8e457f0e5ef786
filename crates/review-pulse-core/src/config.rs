//! Where review-pulse reads its settings from.
//!
//! Sources, weakest first: built-in defaults, the per-user file
//! `config.<ext>` in the platform config dir, the nearest directory holding
//! `.review-pulse.<ext>` or `review-pulse.<ext>`, files handed to
//! [`ConfigLoader::with_file`], and finally `REVIEW_PULSE_*` variables.
//! Extensions may be `toml`, `yaml`, `yml` or `json`. When one directory
//! holds several files they are all merged: dotfiles first, then plain
//! names, each group in that extension order.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use review_pulse_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("default store: {:?}", config.default_store);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::review::StoreSelector;

/// The configuration for review-pulse.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Minimum level written to the log file and stderr.
    pub log_level: LogLevel,
    /// Where JSONL log files go; unset means the platform data dir.
    pub log_dir: Option<Utf8PathBuf>,
    /// Review dataset used when a command is not given `--data`.
    ///
    /// Relative paths resolve against the working directory. Omit to use the
    /// bundled sample dataset.
    pub dataset: Option<Utf8PathBuf>,
    /// Store to analyze when a command is not given `--store`.
    pub default_store: Option<StoreSelector>,
    /// How many reviews the `reviews` command lists by default.
    pub recent_limit: Option<usize>,
    /// Largest dataset file the CLI will read, in bytes.
    ///
    /// Unset means [`crate::DEFAULT_MAX_INPUT_BYTES`].
    pub max_input_bytes: Option<usize>,
    /// Read datasets of any size, ignoring `max_input_bytes`.
    #[serde(default)]
    pub disable_input_limit: bool,
}

/// Configured log verbosity.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-step detail, including resolver counts.
    Debug,
    /// Config and dataset loading.
    #[default]
    Info,
    /// Only problems worth a look.
    Warn,
    /// Only failures.
    Error,
}

impl LogLevel {
    /// Name as accepted by `EnvFilter`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The files that fed a loaded [`Config`], so `info` can name them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Files from the nearest project directory, weakest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Per-user file, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files given with `--config`, in command-line order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values win: the last `--config` file, else the strongest
    /// project file, else the user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Merge order within one directory.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Stem of project config files and name of the platform dirs.
const APP_NAME: &str = "review-pulse";

const ENV_PREFIX: &str = "REVIEW_PULSE_";

/// Collects config sources and merges them into a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    /// Directory entry that marks a repository root.
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// A loader that reads the user file and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Look for project files in `path` and then in each of its ancestors.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Toggle reading the per-user file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Keep walking past repository roots, up to `/`.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Merge `path` over everything discovered; repeated calls stack, the
    /// last one strongest.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every source in the order given in the module docs.
    ///
    /// Fails when a file cannot be parsed or a value has the wrong shape,
    /// such as a `default_store` that is neither `all` nor a number.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // REVIEW_PULSE_DEFAULT_STORE=2, REVIEW_PULSE_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            default_store = ?config.default_store,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Project files from the first directory, walking up from `start`, that
    /// has any. Dotfiles come before plain names so the plain names win.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let dotfiles = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!(".{APP_NAME}.{ext}")));
            let regular = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{APP_NAME}.{ext}")));
            let found: Vec<Utf8PathBuf> = dotfiles.chain(regular).filter(|p| p.is_file()).collect();

            if !found.is_empty() {
                return found;
            }

            // The repository root itself is still searched.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|p| p.is_file())
    }

    /// Unknown extensions parse as TOML.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Directory holding the per-user config file, e.g.
/// `~/.config/review-pulse` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Default home of the JSONL logs, e.g. `~/.local/share/review-pulse` on
/// Linux. `None` when no home directory is known.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().to_path_buf()).ok()
}
