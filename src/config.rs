// src/config.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};

use crate::errors::{LegalEaseError, Result};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODE_VAR: &str = "LEG_MODE";

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Whether summaries come from Gemini or from the canned mock response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Mock,
    Live,
}

impl Mode {
    /// Only the exact value `mock` enables mock mode.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("mock") => Mode::Mock,
            _ => Mode::Live,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Mock => "mock",
            Mode::Live => "live",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the Gemini provider. The credential is not part of it;
/// it is resolved per request by [`CredentialResolver`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves the Gemini credential for a single request.
///
/// Precedence is explicit value, then the process environment, then the env
/// file. The env file is read on every call so edits are picked up without a
/// restart, and its values never shadow variables already in the environment.
#[derive(Clone)]
pub struct CredentialResolver {
    var_name: String,
    env_file: PathBuf,
    lookup: EnvLookup,
}

impl fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("var_name", &self.var_name)
            .field("env_file", &self.env_file)
            .finish_non_exhaustive()
    }
}

impl CredentialResolver {
    /// A resolver backed by the real process environment.
    pub fn new(env_file: impl Into<PathBuf>) -> Self {
        Self::with_lookup(env_file, |key| std::env::var(key).ok())
    }

    /// A resolver with a custom environment lookup.
    pub fn with_lookup<F>(env_file: impl Into<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            var_name: API_KEY_VAR.to_string(),
            env_file: env_file.into(),
            lookup: Arc::new(lookup),
        }
    }

    pub fn resolve(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(key) = explicit.filter(|k| !k.is_empty()) {
            debug!("Using API key supplied with the request");
            return Ok(key.to_string());
        }

        // A variable that is set, even to "", is never replaced by the file.
        let key = match (self.lookup)(&self.var_name) {
            Some(key) => key,
            None => match file_value(&read_env_file(&self.env_file), &self.var_name) {
                Some(key) => {
                    debug!("Using {} from {}", self.var_name, self.env_file.display());
                    key
                }
                None => String::new(),
            },
        };

        if key.is_empty() {
            return Err(LegalEaseError::Config(format!(
                "{var} environment variable not set. \
                 Set it in your environment or create a .env file with {var}=...",
                var = self.var_name
            )));
        }

        Ok(key)
    }
}

/// Parses one env-file line. Blank lines, `#` comments and lines without `=`
/// yield nothing. Matching single or double quotes around the value are
/// stripped; nothing else is interpreted.
pub fn parse_env_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let value = value.trim();
    let unquoted = ['"', '\'']
        .into_iter()
        .find_map(|q| {
            value
                .strip_prefix(q)
                .and_then(|v| v.strip_suffix(q))
                .filter(|_| value.len() >= 2)
        })
        .unwrap_or(value);

    Some((key.to_string(), unquoted.to_string()))
}

/// Reads `KEY=VALUE` pairs from an env file without touching the process
/// environment. A missing file yields no pairs.
pub fn read_env_file(path: &Path) -> Vec<(String, String)> {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.lines().filter_map(parse_env_line).collect(),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Could not read env file {}: {}", path.display(), e);
            }
            Vec::new()
        }
    }
}

/// First value for `key` in parsed env-file pairs.
fn file_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Looks `key` up in the process environment, falling back to env-file
/// pairs only when the variable is not set at all.
pub fn env_or_file(key: &str, file_vars: &[(String, String)]) -> Option<String> {
    std::env::var(key).ok().or_else(|| file_value(file_vars, key))
}

/// High-level application configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mode: Mode,
    pub gemini: GeminiConfig,
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,
    pub credentials: CredentialResolver,
}

impl AppConfig {
    /// Load configuration from environment variables, with the env file
    /// filling in anything the environment does not set.
    pub fn from_env() -> Result<Self> {
        let env_file = std::env::var("LEG_ENV_FILE").unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
        let file_vars = read_env_file(Path::new(&env_file));
        Self::from_lookup(|key| env_or_file(key, &file_vars), CredentialResolver::new(env_file))
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, credentials: CredentialResolver) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("LEG_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| LegalEaseError::Config(format!("LEG_PORT must be a port number, got '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        let max_body_bytes = match var("LEG_MAX_BODY_BYTES") {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                LegalEaseError::Config(format!("LEG_MAX_BODY_BYTES must be a byte count, got '{}'", raw))
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(AppConfig {
            host: var("LEG_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mode: Mode::from_flag(lookup(MODE_VAR).as_deref()),
            gemini: GeminiConfig {
                api_base: var("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            },
            static_dir: var("LEG_STATIC_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
            max_body_bytes,
            credentials,
        })
    }
}
