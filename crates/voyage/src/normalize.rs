//! Reduces the permissive union of caller input shapes to canonical
//! [`EmbeddingUnit`]s for the multimodal embedding endpoint.
//!
//! Callers hand the model plain strings. A string may carry a serialized
//! structure (an array, a `{text, image}` object, a pre-formatted
//! `{content: [...]}` array), so every value goes through one decode
//! pre-pass: if it parses as JSON, the parsed shape is classified; if not,
//! it stays a plain string. After that a fixed rule ladder applies, first
//! match wins:
//!
//! 1. plain string — image vs text per the classifier (image-only models
//!    never classify a bare string as text),
//! 2. array of strings — one item per element, classified independently,
//! 3. `{content: [...]}` — already canonical, passed through item-for-item,
//! 4. `{text, image}` fields — text items emitted before image items
//!    regardless of key order; an `image` field is always image content,
//! 5. anything else — stringified to text (multimodal) or rejected
//!    (image-only).

use serde_json::Value;

use crate::classify::{is_base64_image, is_image_string};
use crate::content::{ContentItem, EmbeddingUnit};
use crate::error::VoyageError;

/// Which content kinds a model accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    /// Text and images, interleaved freely.
    Multimodal,
    /// Images only; any text content is an input-shape error.
    ImageOnly,
}

impl Modality {
    fn allows_text(self) -> bool {
        matches!(self, Modality::Multimodal)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Modality::Multimodal => "multimodal",
            Modality::ImageOnly => "image",
        }
    }
}

/// Input normalizer for one model mode.
///
/// The two modes are fixed configurations sharing one rule ladder; use
/// [`Normalizer::MULTIMODAL`] or [`Normalizer::IMAGE_ONLY`].
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    modality: Modality,
}

impl Normalizer {
    pub const MULTIMODAL: Normalizer = Normalizer {
        modality: Modality::Multimodal,
    };

    pub const IMAGE_ONLY: Normalizer = Normalizer {
        modality: Modality::ImageOnly,
    };

    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// Normalize one call's values, one unit per value, order preserved.
    ///
    /// Fails on the first value that cannot be normalized; the batch is
    /// never partially normalized.
    pub fn normalize_all(&self, values: &[String]) -> Result<Vec<EmbeddingUnit>, VoyageError> {
        values.iter().map(|value| self.normalize(value)).collect()
    }

    /// Normalize a single caller value into exactly one unit.
    pub fn normalize(&self, value: &str) -> Result<EmbeddingUnit, VoyageError> {
        // Decode pre-pass: callers may serialize structured shapes to
        // strings. A parse failure is not an error; the original string
        // falls through as plain text/image content.
        match serde_json::from_str::<Value>(value) {
            Ok(parsed) => self.normalize_value(&parsed),
            Err(_) => self.string_unit(value),
        }
    }

    fn normalize_value(&self, value: &Value) -> Result<EmbeddingUnit, VoyageError> {
        match value {
            Value::String(s) => self.string_unit(s),
            Value::Array(items) => self.array_unit(items),
            Value::Object(map) => {
                if let Some(Value::Array(content)) = map.get("content") {
                    return self.content_unit(content);
                }
                if present(map.get("text")) || present(map.get("image")) {
                    return self.fields_unit(map.get("text"), map.get("image"));
                }
                self.fallback_unit(value)
            }
            other => self.fallback_unit(other),
        }
    }

    fn string_unit(&self, s: &str) -> Result<EmbeddingUnit, VoyageError> {
        let item = match self.modality {
            // Image models read every bare string as an image reference.
            Modality::ImageOnly => image_item(s),
            Modality::Multimodal => {
                if is_image_string(s) {
                    image_item(s)
                } else {
                    ContentItem::text(s)
                }
            }
        };
        Ok(EmbeddingUnit::new(vec![item]))
    }

    fn array_unit(&self, items: &[Value]) -> Result<EmbeddingUnit, VoyageError> {
        let mut content = Vec::with_capacity(items.len());
        for item in items {
            let Value::String(s) = item else {
                return Err(VoyageError::InputShape(
                    "array items must be strings".to_string(),
                ));
            };
            content.push(self.array_element(s)?);
        }
        Ok(EmbeddingUnit::new(content))
    }

    // Array elements are classified individually: an element that does not
    // look like an image is text, which image-only models reject.
    fn array_element(&self, s: &str) -> Result<ContentItem, VoyageError> {
        if is_image_string(s) {
            return Ok(image_item(s));
        }
        if !self.modality.allows_text() {
            return Err(text_unsupported());
        }
        Ok(ContentItem::text(s))
    }

    // Pre-formatted `{content: [...]}` passes through item-for-item.
    // Items may also use the field form (`{text: [...], image: [...]}`)
    // inline; those expand in place.
    fn content_unit(&self, items: &[Value]) -> Result<EmbeddingUnit, VoyageError> {
        let mut content = Vec::with_capacity(items.len());
        for item in items {
            if let Ok(canonical) = serde_json::from_value::<ContentItem>(item.clone()) {
                if canonical.is_text() && !self.modality.allows_text() {
                    return Err(text_unsupported());
                }
                content.push(canonical);
                continue;
            }
            if let Value::Object(map) = item {
                self.push_fields(&mut content, map.get("text"), map.get("image"))?;
            }
        }
        Ok(EmbeddingUnit::new(content))
    }

    fn fields_unit(
        &self,
        text: Option<&Value>,
        image: Option<&Value>,
    ) -> Result<EmbeddingUnit, VoyageError> {
        let mut content = Vec::new();
        self.push_fields(&mut content, text, image)?;
        Ok(EmbeddingUnit::new(content))
    }

    // Field form: text items always precede image items, regardless of the
    // object's key order. An `image` field is always image content — it is
    // never re-classified as text, whatever the string looks like.
    fn push_fields(
        &self,
        content: &mut Vec<ContentItem>,
        text: Option<&Value>,
        image: Option<&Value>,
    ) -> Result<(), VoyageError> {
        if let Some(text) = text.filter(|v| !v.is_null()) {
            if !self.modality.allows_text() {
                return Err(text_unsupported());
            }
            match text {
                Value::Array(items) => {
                    for item in items {
                        content.push(ContentItem::text(stringify(item)));
                    }
                }
                Value::String(s) => content.push(ContentItem::text(s.clone())),
                _ => {}
            }
        }
        if let Some(image) = image.filter(|v| !v.is_null()) {
            match image {
                Value::Array(items) => {
                    for item in items {
                        content.push(image_item(&stringify(item)));
                    }
                }
                Value::String(s) => content.push(image_item(s)),
                _ => {}
            }
        }
        Ok(())
    }

    fn fallback_unit(&self, value: &Value) -> Result<EmbeddingUnit, VoyageError> {
        if self.modality.allows_text() {
            return Ok(EmbeddingUnit::new(vec![ContentItem::text(stringify(
                value,
            ))]));
        }
        Err(VoyageError::InputShape(format!(
            "unsupported input format for {} model: {}",
            self.modality.label(),
            value
        )))
    }
}

fn image_item(s: &str) -> ContentItem {
    if is_base64_image(s) {
        ContentItem::image_base64(s)
    } else {
        ContentItem::image_url(s)
    }
}

fn text_unsupported() -> VoyageError {
    VoyageError::InputShape("text content not supported in image embedding model".to_string())
}

fn present(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
