/// Errors produced by the Voyage provider.
///
/// Everything here is a synchronous failure of the call that produced it:
/// no partial results, no silent skipping of malformed inputs within a
/// batch, and nothing is retried inside this crate.
#[derive(Debug, thiserror::Error)]
pub enum VoyageError {
    /// The call supplied more values than the endpoint accepts per request.
    /// Raised before any network activity.
    #[error(
        "too many values for a single {provider} call: got {count}, \
         model {model_id} accepts at most {max}"
    )]
    TooManyValues {
        provider: &'static str,
        model_id: String,
        max: usize,
        count: usize,
    },

    /// An input value could not be normalized under the active model mode,
    /// or call options failed schema validation.
    #[error("unsupported input: {0}")]
    InputShape(String),

    /// Non-2xx response from the remote API. `message` comes from the
    /// parsed `{error: {...}}` body when available, otherwise the raw
    /// body text.
    #[error("Voyage API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body does not match the expected schema.
    /// The raw body is attached for diagnosis.
    #[error("failed to parse response: {message}")]
    ResponseValidation {
        message: String,
        raw: serde_json::Value,
    },

    /// No API key was supplied and the environment variable is unset.
    /// Surfaced at call time, not at provider construction.
    #[error("API key not configured: {0}")]
    MissingApiKey(String),
}
