//! Cursor codec for pagination continuation tokens.
//!
//! A [`NextToken`] names the entry on the **newer** side of a page boundary.
//! It carries the entry's identity — never an array index — because the
//! catalog can grow between page requests. Within one process the token is
//! passed around as a value; [`NextToken::encode`] produces an opaque string
//! form (JSON payload, URL-safe base64) for handing across a process
//! boundary, e.g. a kiosk restart.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::repo::entry::PromptEntry;

/// Errors from decoding an untrusted token string.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token string is empty or whitespace.
    #[error("cursor token is empty")]
    Empty,

    /// The token is not valid URL-safe base64.
    #[error("cursor token is not valid base64: {0}")]
    Encoding(String),

    /// The decoded payload is not a valid token record.
    #[error("cursor token payload is malformed: {0}")]
    Payload(String),
}

/// Opaque boundary marker between two adjacent entries in sort order.
///
/// `decode(encode(t)) == t` for every token; both functions are pure and
/// deterministic over `(prompt, repo, date, time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextToken {
    prompt: String,
    repo: String,
    date: String,
    time: String,
}

impl NextToken {
    /// Creates a token from its components.
    pub fn new(prompt: String, repo: String, date: String, time: String) -> Self {
        Self {
            prompt,
            repo,
            date,
            time,
        }
    }

    /// Captures an entry's identity as a boundary token.
    pub fn for_entry(entry: &PromptEntry) -> Self {
        Self {
            prompt: entry.prompt().to_string(),
            repo: entry.repo().to_string(),
            date: entry.date().to_string(),
            time: entry.time().to_string(),
        }
    }

    /// The prompt of the entry this token names.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The owning repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Sort-key date component, `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Sort-key time component, `HH-MM-SS`.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Encodes this token as an opaque string.
    ///
    /// # Errors
    ///
    /// [`TokenError::Payload`] if the record cannot be serialised (does not
    /// happen for well-formed string fields).
    pub fn encode(&self) -> Result<String, TokenError> {
        let payload =
            serde_json::to_vec(self).map_err(|e| TokenError::Payload(e.to_string()))?;
        Ok(URL_SAFE_NO_PAD.encode(payload))
    }

    /// Decodes an opaque token string. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Empty`] — empty or whitespace-only input.
    /// - [`TokenError::Encoding`] — not valid URL-safe base64.
    /// - [`TokenError::Payload`] — base64 decoded but the payload is not a
    ///   token record.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;

        serde_json::from_slice(&payload).map_err(|e| TokenError::Payload(e.to_string()))
    }
}
