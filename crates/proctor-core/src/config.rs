use crate::error::CoreError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default global variable name under which the in-page assertion tally is
/// published.
pub const DEFAULT_TALLY_VAR: &str = "__proctor_tally__";

// --- Struct Definitions (file/env layer) ---

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub page: PageSetupConfig,
    #[serde(default)]
    pub assertions: AssertionConfig,
    #[serde(default)]
    pub errors: ErrorFilterConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GlobalConfig {
    pub log_level: String,
    /// When off, non-assertion page errors are suppressed entirely.
    pub debug: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            debug: false,
        }
    }
}

/// Injection targets, in injection order. `None` means "never configured",
/// which the runner treats as a fatal configuration error; an empty list is a
/// valid configuration with nothing to inject.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PageSetupConfig {
    pub polyfills: Option<Vec<PathBuf>>,
    pub user_scripts: Option<Vec<PathBuf>>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AssertionConfig {
    /// Global variable name the tally is discoverable under inside the page.
    pub tally_var: String,
    /// Optional replacement for the built-in assertion library.
    pub library_path: Option<PathBuf>,
}

impl Default for AssertionConfig {
    fn default() -> Self {
        Self {
            tally_var: DEFAULT_TALLY_VAR.to_string(),
            library_path: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ErrorFilterConfig {
    /// Substrings of page-error messages to suppress in debug mode.
    pub ignore: Vec<String>,
}

// --- Loading Logic ---

pub fn load_config(source_path: Option<PathBuf>) -> Result<Config, CoreError> {
    let default_config_name = "proctor_config"; // Base name for config files

    let mut builder = config::Config::builder()
        .set_default("global.log_level", GlobalConfig::default().log_level)
        .map_err(CoreError::Config)?
        .set_default("assertions.tally_var", DEFAULT_TALLY_VAR)
        .map_err(CoreError::Config)?;

    // Load from specified file path if provided
    if let Some(path) = source_path {
        if path.exists() {
            log::debug!("Loading configuration from: {:?}", path);
            builder = builder.add_source(config::File::from(path).required(true));
        } else {
            log::warn!("Specified configuration file not found: {:?}", path);
        }
    } else {
        log::debug!(
            "Attempting to load configuration from default locations (e.g., {}.toml)",
            default_config_name
        );
        builder = builder.add_source(config::File::with_name(default_config_name).required(false));
    }

    // Load from environment variables (e.g., PROCTOR_GLOBAL_DEBUG)
    builder = builder.add_source(
        config::Environment::with_prefix("PROCTOR")
            .separator("_")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("errors.ignore"),
    );

    let cfg = builder
        .build()
        .map_err(CoreError::Config)?
        .try_deserialize::<Config>()
        .map_err(CoreError::Config)?;

    log::debug!("Successfully loaded configuration: {:?}", cfg);
    Ok(cfg)
}

// --- Resolved (in-memory) layer ---

/// One unit of page-side code, named for diagnostics.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    pub name: String,
    pub source: String,
}

impl ScriptSource {
    pub fn inline(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let source = fs::read_to_string(path).map_err(|e| CoreError::ScriptRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name: path.display().to_string(),
            source,
        })
    }
}

/// The configuration the runner actually consumes, with every script already
/// loaded into memory.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub debug: bool,
    pub ignore_errors: Vec<String>,
    pub tally_var: String,
    /// Source override for the built-in assertion library. Must publish its
    /// tally under `tally_var` and mark thrown assertion failures with the
    /// reserved marker.
    pub assertion_library: Option<String>,
    pub polyfills: Option<Vec<ScriptSource>>,
    pub user_scripts: Option<Vec<ScriptSource>>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            ignore_errors: vec![],
            tally_var: DEFAULT_TALLY_VAR.to_string(),
            assertion_library: None,
            polyfills: None,
            user_scripts: None,
        }
    }
}

impl Config {
    /// Reads every configured script file and produces the in-memory
    /// configuration handed to the runner.
    pub fn resolve(&self) -> Result<RunnerConfig, CoreError> {
        let resolve_list = |paths: &Option<Vec<PathBuf>>| -> Result<Option<Vec<ScriptSource>>, CoreError> {
            match paths {
                None => Ok(None),
                Some(paths) => paths
                    .iter()
                    .map(|p| ScriptSource::from_path(p))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Some),
            }
        };

        let assertion_library = match &self.assertions.library_path {
            None => None,
            Some(path) => Some(ScriptSource::from_path(path)?.source),
        };

        Ok(RunnerConfig {
            debug: self.global.debug,
            ignore_errors: self.errors.ignore.clone(),
            tally_var: self.assertions.tally_var.clone(),
            assertion_library,
            polyfills: resolve_list(&self.page.polyfills)?,
            user_scripts: resolve_list(&self.page.user_scripts)?,
        })
    }
}
