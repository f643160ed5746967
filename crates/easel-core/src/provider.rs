//! Image generation provider boundary.
//!
//! The actual network call to an image-generation service lives outside the
//! core; this module fixes the contract such an implementation must honor.

use async_trait::async_trait;

/// The outcome of one generation request.
///
/// Exactly one of the two fields is populated: image bytes on success, a
/// non-empty user-displayable message on failure. Implementations map every
/// failure mode — connectivity, authentication, rate limiting, timeout,
/// unknown — to a message rather than letting anything raise past the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResult {
    image_bytes: Option<Vec<u8>>,
    error_message: Option<String>,
}

impl ProviderResult {
    /// A successful generation.
    pub fn image(bytes: Vec<u8>) -> Self {
        Self {
            image_bytes: Some(bytes),
            error_message: None,
        }
    }

    /// A failed generation with a user-displayable message.
    pub fn failure(message: String) -> Self {
        Self {
            image_bytes: None,
            error_message: Some(message),
        }
    }

    /// The generated image, encoded as delivered by the service.
    pub fn image_bytes(&self) -> Option<&[u8]> {
        self.image_bytes.as_deref()
    }

    /// Failure description when generation failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns `true` if generation failed.
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}

/// A service that turns a text prompt into image bytes.
///
/// `generate` is long-running and must be invoked off the UI thread by its
/// caller, e.g. via `tokio::task::spawn`.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Human-readable name of the backing engine.
    fn engine_name(&self) -> &str;

    /// Generates an image for `prompt`. Never panics and never errors past
    /// this boundary; see [`ProviderResult`].
    async fn generate(&self, prompt: &str) -> ProviderResult;
}
