//! Reranking client for `POST {base_url}/rerank`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::VoyageError;
use crate::http::post_json;
use crate::model::{
    RankedEntry, RerankDocuments, RerankingModel, RerankingResult, RerankingUsage,
};
use crate::options::{parse_options, RerankingOptions};
use crate::provider::ProviderConfig;

pub struct VoyageRerankingModel {
    client: reqwest::Client,
    model_id: String,
    config: ProviderConfig,
}

impl VoyageRerankingModel {
    pub(crate) fn new(model_id: String, config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            model_id,
            config,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RerankingRequest<'a> {
    pub model: &'a str,
    pub query: &'a str,
    pub documents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
    pub return_documents: bool,
    pub truncation: bool,
}

impl<'a> RerankingRequest<'a> {
    fn new(
        model: &'a str,
        query: &'a str,
        documents: &RerankDocuments,
        top_n: Option<usize>,
        options: &RerankingOptions,
    ) -> Result<Self, VoyageError> {
        Ok(Self {
            model,
            query,
            documents: documents.to_wire()?,
            top_k: top_n,
            return_documents: options.return_documents.unwrap_or(false),
            truncation: options.truncation.unwrap_or(true),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RerankingResponse {
    pub data: Vec<RerankingDatum>,
    #[serde(default)]
    pub model: Option<String>,
    pub usage: RerankTokenUsage,
}

#[derive(Debug, Deserialize)]
pub struct RerankingDatum {
    pub index: usize,
    pub relevance_score: f64,
}

#[derive(Debug, Deserialize)]
pub struct RerankTokenUsage {
    pub total_tokens: u32,
}

#[async_trait]
impl RerankingModel for VoyageRerankingModel {
    fn provider_name(&self) -> &str {
        self.config.provider_name
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn rerank(
        &self,
        query: &str,
        documents: RerankDocuments,
        top_n: Option<usize>,
        options: Option<&Value>,
    ) -> Result<RerankingResult, VoyageError> {
        let options: RerankingOptions = parse_options(options)?;
        let body = RerankingRequest::new(&self.model_id, query, &documents, top_n, &options)?;
        let raw = post_json(&self.client, &self.config, "/rerank", &body).await?;

        let response: RerankingResponse = serde_json::from_value(raw.clone())
            .map_err(|e| VoyageError::ResponseValidation {
                message: e.to_string(),
                raw,
            })?;

        // Entries come back already rank-sorted; keep the remote order.
        Ok(RerankingResult {
            ranking: response
                .data
                .into_iter()
                .map(|datum| RankedEntry {
                    index: datum.index,
                    relevance_score: datum.relevance_score,
                })
                .collect(),
            usage: RerankingUsage {
                tokens: response.usage.total_tokens,
            },
        })
    }
}
