//! Text embedding client for `POST {base_url}/embeddings`.
//!
//! The plain-text endpoint never accepts images, so values go on the wire
//! verbatim; no normalization is involved.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::VoyageError;
use crate::http::post_json;
use crate::model::{ensure_within_capacity, EmbeddingModel, EmbeddingResult, EmbeddingUsage};
use crate::options::{parse_options, EmbeddingOptions, InputType, OutputDtype};
use crate::provider::ProviderConfig;

pub struct TextEmbeddingModel {
    client: reqwest::Client,
    model_id: String,
    config: ProviderConfig,
}

impl TextEmbeddingModel {
    pub(crate) fn new(model_id: String, config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            model_id,
            config,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TextEmbeddingRequest<'a> {
    pub input: &'a [String],
    pub model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dimension: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dtype: Option<OutputDtype>,
}

impl<'a> TextEmbeddingRequest<'a> {
    fn new(input: &'a [String], model: &'a str, options: &EmbeddingOptions) -> Self {
        Self {
            input,
            model,
            input_type: options.input_type,
            truncation: options.truncation,
            output_dimension: options.output_dimension,
            output_dtype: options.output_dtype,
        }
    }
}

// Minimal response shape: only what the projection needs. Extra fields
// the API may add are ignored rather than breaking the parse.
#[derive(Debug, Deserialize)]
pub struct TextEmbeddingResponse {
    pub data: Vec<TextEmbeddingDatum>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
pub struct TextEmbeddingDatum {
    pub embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    pub total_tokens: u32,
}

#[async_trait]
impl EmbeddingModel for TextEmbeddingModel {
    fn provider_name(&self) -> &str {
        self.config.provider_name
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn embed(
        &self,
        values: Vec<String>,
        options: Option<&Value>,
    ) -> Result<EmbeddingResult, VoyageError> {
        let options: EmbeddingOptions = parse_options(options)?;
        ensure_within_capacity(
            self.config.provider_name,
            &self.model_id,
            self.max_embeddings_per_call(),
            values.len(),
        )?;

        let body = TextEmbeddingRequest::new(&values, &self.model_id, &options);
        let raw = post_json(&self.client, &self.config, "/embeddings", &body).await?;

        let response: TextEmbeddingResponse = serde_json::from_value(raw.clone())
            .map_err(|e| VoyageError::ResponseValidation {
                message: e.to_string(),
                raw,
            })?;

        Ok(EmbeddingResult {
            embeddings: response
                .data
                .into_iter()
                .map(|datum| datum.embedding)
                .collect(),
            usage: response
                .usage
                .map(|usage| EmbeddingUsage {
                    tokens: usage.total_tokens,
                }),
        })
    }
}
