//! Voyage AI provider: embedding and reranking clients over the Voyage
//! HTTP API.
//!
//! The interesting part is the multimodal input normalizer
//! ([`normalize::Normalizer`]), which reduces the permissive set of
//! caller input shapes to the canonical content-item list the API
//! expects; everything else is request/response shape translation.

pub mod classify;
pub mod content;
pub mod embedding;
pub mod error;
mod http;
pub mod model;
pub mod multimodal;
pub mod normalize;
pub mod options;
pub mod provider;
pub mod reranking;

pub use content::{ContentItem, EmbeddingUnit};
pub use embedding::TextEmbeddingModel;
pub use error::VoyageError;
pub use model::{
    EmbeddingModel, EmbeddingResult, EmbeddingUsage, RankedEntry, RerankDocuments,
    RerankingModel, RerankingResult, RerankingUsage,
};
pub use multimodal::MultimodalEmbeddingModel;
pub use normalize::{Modality, Normalizer};
pub use options::{
    EmbeddingOptions, InputType, MultimodalEmbeddingOptions, OutputDtype, OutputEncoding,
    RerankingOptions,
};
pub use provider::{voyage, VoyageProvider, VoyageProviderSettings, DEFAULT_BASE_URL};
pub use reranking::VoyageRerankingModel;
