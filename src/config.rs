//! Credential and client configuration loading.
//!
//! The credential is resolved from the process environment first and then
//! from dotenv-style files, in the order given. Values already present in the
//! environment always win over file contents, and earlier files win over
//! later ones.
//!
//! [`load_credential`] only reads. [`load_credential_into_env`] additionally
//! merges the file assignments into the process environment (without
//! overriding) for callers that rely on `std::env::var` afterwards.

use crate::error::{ResponsesError, ResponsesResult};
use crate::logging::log_debug;
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Optional override for the endpoint base URL.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Optional override for the default model.
pub const MODEL_VAR: &str = "OPENAI_MODEL";

/// Dotenv path searched when the caller names none.
pub const DEFAULT_DOTENV_PATH: &str = ".env";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Key/value assignments read from dotenv files.
pub type DotenvMap = BTreeMap<String, String>;

/// API key for the Responses endpoint.
///
/// The value never appears in `Debug` output; use [`Credential::expose`] at
/// the single point where it is written into a request header.
pub struct Credential(SecretString);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for Credential {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_owned())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Parse dotenv-formatted text into a map.
///
/// Each line is parsed on its own: `KEY=VALUE` split at the first `=`, with
/// surrounding whitespace trimmed. `#` lines and blank lines are ignored, an
/// optional `export ` prefix is accepted, and one pair of matching quotes
/// around the value is removed. Values are taken literally; `$NAME` is not
/// expanded. Malformed lines are skipped silently and never affect other
/// lines. When a key repeats, the first assignment is kept.
pub fn parse_dotenv(contents: &str) -> DotenvMap {
    let mut values = DotenvMap::new();
    for (key, value) in contents.lines().filter_map(parse_dotenv_line) {
        values.entry(key).or_insert(value);
    }
    values
}

fn parse_dotenv_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line
        .strip_prefix("export ")
        .map(str::trim_start)
        .unwrap_or(line);

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return None;
    }

    let value = unquote(value.trim())?;
    Some((key.to_string(), value.to_string()))
}

/// Strip one pair of matching quotes. An opening quote without its closing
/// partner makes the line malformed.
fn unquote(value: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            return rest.strip_suffix(quote);
        }
    }
    Some(value)
}

/// Read every dotenv file in `search_paths`, merging in order.
///
/// Missing or unreadable files contribute nothing. Earlier files take
/// precedence over later ones.
pub fn read_dotenv_files<P: AsRef<Path>>(search_paths: &[P]) -> DotenvMap {
    let mut merged = DotenvMap::new();
    for path in search_paths {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log_debug!(path = %path.display(), error = %e, "Skipping dotenv file");
                continue;
            }
        };

        let values = parse_dotenv(&contents);
        log_debug!(
            path = %path.display(),
            assignments = values.len(),
            "Read dotenv file"
        );
        for (key, value) in values {
            merged.entry(key).or_insert(value);
        }
    }
    merged
}

/// Look up `name`, preferring the process environment over `file_values`.
///
/// Empty values count as absent.
pub fn resolve_var(name: &str, file_values: &DotenvMap) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            file_values
                .get(name)
                .filter(|v| !v.trim().is_empty())
                .cloned()
        })
}

/// Resolve the API key from the environment, then from `search_paths`.
///
/// Does not modify the process environment.
///
/// # Errors
///
/// Returns [`ResponsesError::MissingCredential`] when neither source
/// defines `OPENAI_API_KEY`.
pub fn load_credential<P: AsRef<Path>>(search_paths: &[P]) -> ResponsesResult<Credential> {
    let file_values = read_dotenv_files(search_paths);
    credential_from(&file_values, search_paths.len())
}

/// Like [`load_credential`], but first merges every dotenv assignment into
/// the process environment without overriding variables that are already
/// set.
pub fn load_credential_into_env<P: AsRef<Path>>(
    search_paths: &[P],
) -> ResponsesResult<Credential> {
    let file_values = read_dotenv_files(search_paths);
    for (key, value) in &file_values {
        if std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
        }
    }
    credential_from(&DotenvMap::new(), search_paths.len())
}

fn credential_from(file_values: &DotenvMap, searched: usize) -> ResponsesResult<Credential> {
    match resolve_var(API_KEY_VAR, file_values) {
        Some(value) => Ok(Credential::new(value)),
        None => Err(ResponsesError::missing_credential(format!(
            "{API_KEY_VAR} is not set in the environment or in any of {searched} dotenv file(s)"
        ))),
    }
}

/// Settings for an [`OpenAIResponsesClient`](crate::OpenAIResponsesClient).
#[derive(Debug, Clone)]
pub struct ResponsesConfig {
    pub credential: Credential,
    /// Scheme and host, without the `/v1/responses` path.
    pub base_url: String,
    /// Model used when a request does not name one.
    pub default_model: String,
    pub request_timeout: Duration,
}

impl ResponsesConfig {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Build a configuration from the environment and dotenv files.
    ///
    /// Reads `OPENAI_API_KEY` (required), `OPENAI_BASE_URL` and
    /// `OPENAI_MODEL` with the same precedence as [`load_credential`].
    pub fn from_env<P: AsRef<Path>>(search_paths: &[P]) -> ResponsesResult<Self> {
        let file_values = read_dotenv_files(search_paths);
        let credential = credential_from(&file_values, search_paths.len())?;

        let mut config = Self::new(credential);
        if let Some(base_url) = resolve_var(BASE_URL_VAR, &file_values) {
            config.base_url = base_url;
        }
        if let Some(model) = resolve_var(MODEL_VAR, &file_values) {
            config.default_model = model;
        }

        log_debug!(
            base_url = %config.base_url,
            default_model = %config.default_model,
            "Loaded Responses configuration"
        );

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check that the configuration can be used to build a client.
    pub fn validate(&self) -> ResponsesResult<()> {
        if self.credential.expose().trim().is_empty() {
            return Err(ResponsesError::missing_credential(format!(
                "{API_KEY_VAR} is empty"
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(ResponsesError::invalid_request("Base URL is required"));
        }
        if self.default_model.trim().is_empty() {
            return Err(ResponsesError::invalid_request("Default model is required"));
        }
        if self.request_timeout.is_zero() {
            return Err(ResponsesError::invalid_request(
                "Request timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Full URL of the Responses endpoint.
    pub fn responses_url(&self) -> String {
        format!("{}/v1/responses", self.base_url.trim_end_matches('/'))
    }
}
