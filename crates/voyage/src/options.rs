//! Per-call options for the three endpoints.
//!
//! Options arrive from the host as loose JSON (`providerOptions`) and are
//! validated here, at the boundary: unknown keys are rejected before any
//! request building happens. Absent fields are omitted from the outgoing
//! wire body so the remote API's own defaults apply.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::VoyageError;

/// Retrieval role of the inputs. Voyage prepends a role-specific prompt
/// before vectorizing when this is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Query,
    Document,
}

/// Encoding of the returned vectors (`base64` compresses them to a
/// Base64-encoded array of single-precision floats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    Base64,
}

/// Output data type for text embeddings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputDtype {
    Float,
    Int8,
    Uint8,
    Binary,
    Ubinary,
}

/// Options recognized by the text embedding endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase", default)]
pub struct EmbeddingOptions {
    pub input_type: Option<InputType>,
    /// Whether to truncate inputs that exceed the model's context length.
    pub truncation: Option<bool>,
    pub output_dimension: Option<u32>,
    pub output_dtype: Option<OutputDtype>,
}

/// Options recognized by the multimodal embedding endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase", default)]
pub struct MultimodalEmbeddingOptions {
    pub input_type: Option<InputType>,
    pub truncation: Option<bool>,
    pub output_encoding: Option<OutputEncoding>,
}

/// Options recognized by the reranking endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase", default)]
pub struct RerankingOptions {
    /// Whether the API echoes each ranked document back. Wire default: false.
    pub return_documents: Option<bool>,
    /// Whether to truncate query/documents to the context limit. Wire
    /// default: true.
    pub truncation: Option<bool>,
}

/// Validate loose provider options against a recognized-option schema.
///
/// `None` yields the default (all-absent) options; unrecognized keys fail
/// with an input-shape error before the core ever sees the call.
pub(crate) fn parse_options<T>(raw: Option<&Value>) -> Result<T, VoyageError>
where
    T: DeserializeOwned + Default,
{
    match raw {
        None => Ok(T::default()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| VoyageError::InputShape(format!("invalid call options: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_options_yield_defaults() {
        let options: EmbeddingOptions = parse_options(None).unwrap();
        assert_eq!(options, EmbeddingOptions::default());
    }

    #[test]
    fn recognized_keys_parse() {
        let options: EmbeddingOptions = parse_options(Some(&json!({
            "inputType": "query",
            "truncation": false,
            "outputDimension": 1024,
            "outputDtype": "int8",
        })))
        .unwrap();

        assert_eq!(options.input_type, Some(InputType::Query));
        assert_eq!(options.truncation, Some(false));
        assert_eq!(options.output_dimension, Some(1024));
        assert_eq!(options.output_dtype, Some(OutputDtype::Int8));
    }

    #[test]
    fn unknown_keys_are_rejected_at_the_boundary() {
        let result: Result<RerankingOptions, _> =
            parse_options(Some(&json!({ "topK": 3 })));
        assert!(matches!(result, Err(VoyageError::InputShape(_))));
    }

    #[test]
    fn invalid_enum_value_is_rejected() {
        let result: Result<MultimodalEmbeddingOptions, _> =
            parse_options(Some(&json!({ "inputType": "sentence" })));
        assert!(matches!(result, Err(VoyageError::InputShape(_))));
    }
}
