//! Multimodal/image embedding client for
//! `POST {base_url}/multimodalembeddings`.
//!
//! One client type serves both modes; the provider constructs it with
//! either the multimodal or the image-only normalizer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::EmbeddingUnit;
use crate::error::VoyageError;
use crate::http::post_json;
use crate::model::{ensure_within_capacity, EmbeddingModel, EmbeddingResult, EmbeddingUsage};
use crate::normalize::{Modality, Normalizer};
use crate::options::{parse_options, InputType, MultimodalEmbeddingOptions, OutputEncoding};
use crate::provider::ProviderConfig;

pub struct MultimodalEmbeddingModel {
    client: reqwest::Client,
    model_id: String,
    config: ProviderConfig,
    normalizer: Normalizer,
}

impl MultimodalEmbeddingModel {
    pub(crate) fn new(model_id: String, config: ProviderConfig, normalizer: Normalizer) -> Self {
        Self {
            client: reqwest::Client::new(),
            model_id,
            config,
            normalizer,
        }
    }

    pub fn modality(&self) -> Modality {
        self.normalizer.modality()
    }
}

#[derive(Debug, Serialize)]
pub struct MultimodalEmbeddingRequest<'a> {
    pub inputs: &'a [EmbeddingUnit],
    pub model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_encoding: Option<OutputEncoding>,
}

impl<'a> MultimodalEmbeddingRequest<'a> {
    fn new(
        inputs: &'a [EmbeddingUnit],
        model: &'a str,
        options: &MultimodalEmbeddingOptions,
    ) -> Self {
        Self {
            inputs,
            model,
            input_type: options.input_type,
            truncation: options.truncation,
            output_encoding: options.output_encoding,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MultimodalEmbeddingResponse {
    pub data: Vec<MultimodalEmbeddingDatum>,
    pub usage: MultimodalUsage,
}

/// `index` is emitted by the API in input order; vectors are projected as
/// emitted, never re-sorted locally.
#[derive(Debug, Deserialize)]
pub struct MultimodalEmbeddingDatum {
    pub embedding: Vec<f32>,
    pub index: u32,
}

#[derive(Debug, Deserialize)]
pub struct MultimodalUsage {
    #[serde(default)]
    pub text_tokens: Option<u32>,
    #[serde(default)]
    pub image_pixels: Option<u64>,
    pub total_tokens: u32,
}

#[async_trait]
impl EmbeddingModel for MultimodalEmbeddingModel {
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
        let options: MultimodalEmbeddingOptions = parse_options(options)?;
        ensure_within_capacity(
            self.config.provider_name,
            &self.model_id,
            self.max_embeddings_per_call(),
            values.len(),
        )?;

        let inputs = self.normalizer.normalize_all(&values)?;
        let body = MultimodalEmbeddingRequest::new(&inputs, &self.model_id, &options);
        let raw = post_json(&self.client, &self.config, "/multimodalembeddings", &body).await?;

        let response: MultimodalEmbeddingResponse = serde_json::from_value(raw.clone())
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
            usage: Some(EmbeddingUsage {
                tokens: response.usage.total_tokens,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentItem;
    use serde_json::json;

    fn units() -> Vec<EmbeddingUnit> {
        vec![
            EmbeddingUnit::new(vec![ContentItem::text("sunny day at the beach")]),
            EmbeddingUnit::new(vec![ContentItem::image_url("https://a.com/b.jpg")]),
        ]
    }

    #[test]
    fn body_wraps_each_unit_as_content() {
        let inputs = units();
        let body = MultimodalEmbeddingRequest::new(
            &inputs,
            "voyage-multimodal-3",
            &MultimodalEmbeddingOptions::default(),
        );

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "inputs": [
                    { "content": [{ "type": "text", "text": "sunny day at the beach" }] },
                    { "content": [{ "type": "image_url", "image_url": "https://a.com/b.jpg" }] },
                ],
                "model": "voyage-multimodal-3",
            })
        );
    }

    #[test]
    fn set_options_flatten_into_the_body() {
        let inputs = units();
        let options = MultimodalEmbeddingOptions {
            input_type: Some(InputType::Query),
            truncation: Some(true),
            output_encoding: Some(OutputEncoding::Base64),
        };
        let body = MultimodalEmbeddingRequest::new(&inputs, "voyage-multimodal-3", &options);
        let wire = serde_json::to_value(&body).unwrap();

        assert_eq!(wire["input_type"], json!("query"));
        assert_eq!(wire["truncation"], json!(true));
        assert_eq!(wire["output_encoding"], json!("base64"));
    }

    #[test]
    fn response_parses_usage_counters() {
        let raw = json!({
            "data": [
                { "object": "embedding", "embedding": [0.1, 0.2], "index": 0 },
                { "object": "embedding", "embedding": [0.3, 0.4], "index": 1 },
            ],
            "usage": { "text_tokens": 10, "image_pixels": 1024, "total_tokens": 1034 },
            "model": "voyage-multimodal-3",
        });

        let response: MultimodalEmbeddingResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.data[1].index, 1);
        assert_eq!(response.usage.text_tokens, Some(10));
        assert_eq!(response.usage.image_pixels, Some(1024));
        assert_eq!(response.usage.total_tokens, 1034);
    }

    #[test]
    fn usage_subcounters_are_optional() {
        let raw = json!({
            "data": [{ "embedding": [1.0], "index": 0 }],
            "usage": { "total_tokens": 5 },
        });
        let response: MultimodalEmbeddingResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.usage.text_tokens, None);
        assert_eq!(response.usage.image_pixels, None);
    }

    #[test]
    fn missing_usage_fails_validation() {
        let raw = json!({ "data": [{ "embedding": [1.0], "index": 0 }] });
        let result: Result<MultimodalEmbeddingResponse, _> = serde_json::from_value(raw);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn normalization_failure_fails_before_any_request() {
        // Text in image mode is rejected during normalization, before the
        // transport or the API key is touched.
        let model = crate::provider::VoyageProvider::new(Default::default())
            .image_embedding_model("voyage-multimodal-3");
        let values = vec![r#"["https://a.com/a.jpg", "a caption"]"#.to_string()];

        let err = model.embed(values, None).await.unwrap_err();
        assert!(matches!(err, VoyageError::InputShape(_)));
    }
}
