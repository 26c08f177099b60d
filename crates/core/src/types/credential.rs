use std::fmt;

use crate::error::CoreError;

/// API token sent verbatim in the `authorization` header.
///
/// Only constructible from a non-blank string, so holding one proves the
/// credential was supplied.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Credential {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::MissingCredential);
        }
        Ok(Credential(trimmed.to_string()))
    }
}

impl TryFrom<Option<String>> for Credential {
    type Error = CoreError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        match value {
            Some(raw) => Credential::try_from(raw.as_str()),
            None => Err(CoreError::MissingCredential),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
