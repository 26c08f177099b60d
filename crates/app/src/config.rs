use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use inbox_digest_core::types::Credential;
use inbox_digest_infra::omnivore::DEFAULT_ENDPOINT;
use inbox_digest_infra::omnivore::documents::DEFAULT_PAGE_SIZE;
use thiserror::Error;

pub const API_KEY_VAR: &str = "OMNIVORE_API_KEY";
const API_URL_VAR: &str = "OMNIVORE_API_URL";
const PAGE_SIZE_VAR: &str = "OMNIVORE_PAGE_SIZE";
const REQUEST_TIMEOUT_VAR: &str = "OMNIVORE_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credential: Credential,
    pub endpoint: String,
    pub page_size: u32,
    /// `None` keeps the HTTP client's own default.
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0}")]
    MissingCredential(&'static str),
    #[error("invalid integer for {0}: {1}")]
    InvalidNumber(&'static str, String),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppConfig {
    /// Reads the process environment, falling back to `./.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let dotenv = DotEnv::load(Path::new(".env"))?;
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| dotenv.get(key)))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = Credential::try_from(lookup(API_KEY_VAR))
            .map_err(|_| ConfigError::MissingCredential(API_KEY_VAR))?;
        let endpoint = read_string(&lookup, API_URL_VAR, DEFAULT_ENDPOINT);
        if endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidValue(API_URL_VAR, endpoint));
        }
        let page_size = read_u32(&lookup, PAGE_SIZE_VAR, DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue(PAGE_SIZE_VAR, page_size.to_string()));
        }
        let request_timeout =
            read_optional_u64(&lookup, REQUEST_TIMEOUT_VAR)?.map(Duration::from_secs);

        Ok(Self {
            credential,
            endpoint,
            page_size,
            request_timeout,
        })
    }
}

fn read_string<F>(lookup: &F, key: &'static str, default: &'static str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn read_u32<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber(key, raw))
}

fn read_optional_u64<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber(key, raw)),
        _ => Ok(None),
    }
}

/// Key/value pairs from a dotenv file, consulted only for keys missing from
/// the process environment.
#[derive(Debug, Default)]
struct DotEnv(HashMap<String, String>);

impl DotEnv {
    fn load(path: &Path) -> Result<Self, std::io::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    fn parse(contents: &str) -> Self {
        Self(contents.lines().filter_map(parse_line).collect())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim_start();
    if line.starts_with('#') {
        return None;
    }
    let assignment = line.strip_prefix("export ").unwrap_or(line);
    let (key, raw) = assignment.split_once('=')?;
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some((key.to_string(), decode_value(raw.trim())))
}

/// Single quotes are literal, double quotes honour `\n`, `\t`, `\"` and
/// `\\`, and a bare value ends at an inline ` #` comment.
fn decode_value(raw: &str) -> String {
    if let Some(inner) = raw.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')) {
        return inner.to_string();
    }
    if let Some(inner) = raw.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        let mut decoded = String::with_capacity(inner.len());
        let mut escaped = false;
        for ch in inner.chars() {
            if escaped {
                decoded.push(match ch {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    other => other,
                });
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else {
                decoded.push(ch);
            }
        }
        if escaped {
            decoded.push('\\');
        }
        return decoded;
    }
    match raw.find(" #") {
        Some(comment) => raw[..comment].trim_end().to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_credential() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(API_KEY_VAR)));
    }

    #[test]
    fn blank_credential() {
        let err = AppConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(_)));
    }

    #[test]
    fn defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "token")])).unwrap();
        assert_eq!(config.credential.expose(), "token");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "token"),
            (API_URL_VAR, "http://localhost:4000/api/graphql"),
            (PAGE_SIZE_VAR, "25"),
            (REQUEST_TIMEOUT_VAR, "30"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:4000/api/graphql");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn invalid_page_size() {
        let err = AppConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "t"), (PAGE_SIZE_VAR, "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber(PAGE_SIZE_VAR, _)));
        let err = AppConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "t"), (PAGE_SIZE_VAR, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(PAGE_SIZE_VAR, _)));
    }

    #[test]
    fn dotenv_lines() {
        let env = DotEnv::parse(
            "# comment\nexport OMNIVORE_API_KEY=\"abc\"\nOMNIVORE_PAGE_SIZE = '50'\n\nbroken\n",
        );
        assert_eq!(env.get(API_KEY_VAR).as_deref(), Some("abc"));
        assert_eq!(env.get(PAGE_SIZE_VAR).as_deref(), Some("50"));
        assert_eq!(env.get("broken"), None);
    }

    #[test]
    fn dotenv_double_quotes_unescape() {
        let env = DotEnv::parse(
            "A=\"line\\nnext \\\"quoted\\\"\"\nB='raw\\n'\nC=plain # note\nD=\"tab\\there\"\n",
        );
        assert_eq!(env.get("A").as_deref(), Some("line\nnext \"quoted\""));
        assert_eq!(env.get("B").as_deref(), Some("raw\\n"));
        assert_eq!(env.get("C").as_deref(), Some("plain"));
        assert_eq!(env.get("D").as_deref(), Some("tab\there"));
    }
}
