//! Host-facing model interfaces and result shapes.
//!
//! The traits here are what callers program against; the concrete Voyage
//! models in `embedding`, `multimodal` and `reranking` implement them.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::VoyageError;

/// Token usage reported by an embedding call. Absent when the API did not
/// report usage — never coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingUsage {
    pub tokens: u32,
}

/// Result of one embedding call: one vector per input value, in input
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingResult {
    pub embeddings: Vec<Vec<f32>>,
    pub usage: Option<EmbeddingUsage>,
}

/// One ranked entry; `index` refers back to the supplied document list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry {
    pub index: usize,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RerankingUsage {
    pub tokens: u32,
}

/// Result of one reranking call. Entry order is whatever the API
/// returned (already rank-sorted); it is not re-sorted locally.
#[derive(Debug, Clone, PartialEq)]
pub struct RerankingResult {
    pub ranking: Vec<RankedEntry>,
    pub usage: RerankingUsage,
}

/// Documents handed to a reranking call.
///
/// The wire field is string-only, so structured documents are serialized
/// to canonical JSON strings before sending.
#[derive(Debug, Clone, PartialEq)]
pub enum RerankDocuments {
    /// Plain strings, sent verbatim.
    Text(Vec<String>),
    /// JSON-serializable values, each stringified before sending.
    Json(Vec<Value>),
}

impl RerankDocuments {
    pub fn len(&self) -> usize {
        match self {
            Self::Text(values) => values.len(),
            Self::Json(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn to_wire(&self) -> Result<Vec<String>, VoyageError> {
        match self {
            Self::Text(values) => Ok(values.clone()),
            Self::Json(values) => values
                .iter()
                .map(|value| {
                    serde_json::to_string(value).map_err(|e| {
                        VoyageError::InputShape(format!("document is not serializable: {e}"))
                    })
                })
                .collect(),
        }
    }
}

/// An embedding model: turns a batch of values into one vector each.
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    fn provider_name(&self) -> &str;

    fn model_id(&self) -> &str;

    /// Per-call value ceiling; calls above it fail before any network
    /// activity.
    fn max_embeddings_per_call(&self) -> usize {
        128
    }

    /// This provider issues a single outbound request per call; batching
    /// beyond the ceiling is the caller's responsibility.
    fn supports_parallel_calls(&self) -> bool {
        false
    }

    /// Embed `values`, one result vector per value in input order.
    /// `options` carries loose provider options validated per endpoint.
    async fn embed(
        &self,
        values: Vec<String>,
        options: Option<&Value>,
    ) -> Result<EmbeddingResult, VoyageError>;
}

/// A reranking model: scores a document set against a query.
#[async_trait]
pub trait RerankingModel: Send + Sync {
    fn provider_name(&self) -> &str;

    fn model_id(&self) -> &str;

    async fn rerank(
        &self,
        query: &str,
        documents: RerankDocuments,
        top_n: Option<usize>,
        options: Option<&Value>,
    ) -> Result<RerankingResult, VoyageError>;
}

/// Capacity gate shared by the embedding endpoints. Inclusive boundary:
/// exactly `max` values pass, `max + 1` fails.
pub(crate) fn ensure_within_capacity(
    provider: &'static str,
    model_id: &str,
    max: usize,
    count: usize,
) -> Result<(), VoyageError> {
    if count > max {
        return Err(VoyageError::TooManyValues {
            provider,
            model_id: model_id.to_string(),
            max,
            count,
        });
    }
    Ok(())
}
