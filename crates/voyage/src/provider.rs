//! Provider factory: fixed configuration plus constructors for the
//! concrete model clients.

use std::env;

use crate::embedding::TextEmbeddingModel;
use crate::error::VoyageError;
use crate::multimodal::MultimodalEmbeddingModel;
use crate::normalize::Normalizer;
use crate::reranking::VoyageRerankingModel;

/// Default API prefix; override via [`VoyageProviderSettings::base_url`]
/// e.g. to go through a proxy.
pub const DEFAULT_BASE_URL: &str = "https://api.voyageai.com/v1";

const API_KEY_ENV_VAR: &str = "VOYAGE_API_KEY";

/// Settings for constructing a [`VoyageProvider`].
#[derive(Debug, Clone, Default)]
pub struct VoyageProviderSettings {
    /// URL prefix for API calls; defaults to [`DEFAULT_BASE_URL`]. A
    /// trailing slash is stripped.
    pub base_url: Option<String>,
    /// API key sent in the `Authorization` header. Falls back to the
    /// `VOYAGE_API_KEY` environment variable, read at call time.
    pub api_key: Option<String>,
    /// Extra headers included in every request.
    pub headers: Vec<(String, String)>,
}

/// Immutable per-model configuration, fixed at provider construction.
#[derive(Debug, Clone)]
pub(crate) struct ProviderConfig {
    pub base_url: String,
    pub provider_name: &'static str,
    pub headers: Vec<(String, String)>,
    api_key: Option<String>,
}

impl ProviderConfig {
    /// Resolve the API key: explicit setting first, then the environment.
    /// Absence is a call-time error, not a construction-time one.
    pub fn resolve_api_key(&self) -> Result<String, VoyageError> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                VoyageError::MissingApiKey(format!(
                    "set the {API_KEY_ENV_VAR} environment variable or pass api_key \
                     in VoyageProviderSettings"
                ))
            })
    }
}

/// Factory for Voyage model clients sharing one configuration.
#[derive(Debug, Clone)]
pub struct VoyageProvider {
    base_url: String,
    api_key: Option<String>,
    headers: Vec<(String, String)>,
}

impl VoyageProvider {
    pub fn new(settings: VoyageProviderSettings) -> Self {
        let base_url = settings
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            api_key: settings.api_key,
            headers: settings.headers,
        }
    }

    fn config(&self, provider_name: &'static str) -> ProviderConfig {
        ProviderConfig {
            base_url: self.base_url.clone(),
            provider_name,
            headers: self.headers.clone(),
            api_key: self.api_key.clone(),
        }
    }

    /// Text embedding client for the `/embeddings` endpoint.
    pub fn text_embedding_model(&self, model_id: impl Into<String>) -> TextEmbeddingModel {
        TextEmbeddingModel::new(model_id.into(), self.config("voyage.embedding"))
    }

    /// Multimodal embedding client (text and images interleaved).
    pub fn multimodal_embedding_model(
        &self,
        model_id: impl Into<String>,
    ) -> MultimodalEmbeddingModel {
        MultimodalEmbeddingModel::new(
            model_id.into(),
            self.config("voyage.embedding"),
            Normalizer::MULTIMODAL,
        )
    }

    /// Image-only embedding client; text inputs are rejected.
    pub fn image_embedding_model(&self, model_id: impl Into<String>) -> MultimodalEmbeddingModel {
        MultimodalEmbeddingModel::new(
            model_id.into(),
            self.config("voyage.embedding"),
            Normalizer::IMAGE_ONLY,
        )
    }

    /// Reranking client for the `/rerank` endpoint.
    pub fn reranking_model(&self, model_id: impl Into<String>) -> VoyageRerankingModel {
        VoyageRerankingModel::new(model_id.into(), self.config("voyage.reranking"))
    }
}

/// Default provider instance: default base URL, key from the environment.
pub fn voyage() -> VoyageProvider {
    VoyageProvider::new(VoyageProviderSettings::default())
}

/// Known text embedding model ids. Ids are forwarded verbatim; this list
/// is a convenience, not a validation set.
pub mod embedding_models {
    pub const VOYAGE_3: &str = "voyage-3";
    pub const VOYAGE_3_LITE: &str = "voyage-3-lite";
    pub const VOYAGE_FINANCE_2: &str = "voyage-finance-2";
    pub const VOYAGE_MULTILINGUAL_2: &str = "voyage-multilingual-2";
    pub const VOYAGE_LAW_2: &str = "voyage-law-2";
    pub const VOYAGE_CODE_2: &str = "voyage-code-2";
}

/// Known multimodal embedding model ids.
pub mod multimodal_models {
    pub const VOYAGE_MULTIMODAL_3: &str = "voyage-multimodal-3";
}

/// Known reranking model ids.
pub mod reranking_models {
    pub const RERANK_2_5: &str = "rerank-2.5";
    pub const RERANK_2_5_LITE: &str = "rerank-2.5-lite";
    pub const RERANK_2: &str = "rerank-2";
    pub const RERANK_LITE_2: &str = "rerank-lite-2";
    pub const RERANK_1: &str = "rerank-1";
    pub const RERANK_LITE_1: &str = "rerank-lite-1";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmbeddingModel, RerankingModel};

    #[test]
    fn default_base_url_is_applied() {
        let provider = voyage();
        let model = provider.text_embedding_model("voyage-3");
        assert_eq!(model.model_id(), "voyage-3");
        assert_eq!(model.provider_name(), "voyage.embedding");
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let provider = VoyageProvider::new(VoyageProviderSettings {
            base_url: Some("https://proxy.internal/v1/".into()),
            api_key: Some("k".into()),
            headers: Vec::new(),
        });
        let config = provider.config("voyage.embedding");
        assert_eq!(config.base_url, "https://proxy.internal/v1");
    }

    #[test]
    fn explicit_api_key_wins_over_environment() {
        let provider = VoyageProvider::new(VoyageProviderSettings {
            api_key: Some("explicit-key".into()),
            ..Default::default()
        });
        let config = provider.config("voyage.embedding");
        assert_eq!(config.resolve_api_key().unwrap(), "explicit-key");
    }

    #[test]
    fn reranking_model_carries_its_own_provider_name() {
        let model = voyage().reranking_model("rerank-2.5");
        assert_eq!(model.provider_name(), "voyage.reranking");
        assert_eq!(model.model_id(), "rerank-2.5");
    }
}
