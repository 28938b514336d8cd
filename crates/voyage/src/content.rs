use serde::{Deserialize, Serialize};

/// One unit of embeddable content in the canonical wire shape.
///
/// Serializes to the Voyage multimodal content format:
/// `{"type": "text", "text": ...}`, `{"type": "image_url", "image_url": ...}`
/// or `{"type": "image_base64", "image_base64": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text {
        text: String,
    },
    ImageUrl {
        #[serde(rename = "image_url")]
        url: String,
    },
    ImageBase64 {
        /// Data-URI string (`data:image/...;base64,...`).
        #[serde(rename = "image_base64")]
        data: String,
    },
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl { url: url.into() }
    }

    pub fn image_base64(data: impl Into<String>) -> Self {
        Self::ImageBase64 { data: data.into() }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

/// One logical input that receives a single embedding vector.
///
/// Item order is meaningful: the remote API embeds the items as an
/// interleaved sequence, so the normalizer never reorders text relative
/// to images except where the documented field-form policy applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingUnit {
    pub content: Vec<ContentItem>,
}

impl EmbeddingUnit {
    pub fn new(content: Vec<ContentItem>) -> Self {
        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_items_serialize_to_wire_shape() {
        let unit = EmbeddingUnit::new(vec![
            ContentItem::text("a banana"),
            ContentItem::image_url("https://example.com/banana.png"),
            ContentItem::image_base64("data:image/png;base64,AAAA"),
        ]);

        assert_eq!(
            serde_json::to_value(&unit).unwrap(),
            json!({
                "content": [
                    { "type": "text", "text": "a banana" },
                    { "type": "image_url", "image_url": "https://example.com/banana.png" },
                    { "type": "image_base64", "image_base64": "data:image/png;base64,AAAA" },
                ]
            })
        );
    }

    #[test]
    fn content_items_deserialize_from_wire_shape() {
        let item: ContentItem =
            serde_json::from_value(json!({ "type": "text", "text": "hello" })).unwrap();
        assert_eq!(item, ContentItem::text("hello"));

        let item: ContentItem =
            serde_json::from_value(json!({ "type": "image_url", "image_url": "https://x/a.jpg" }))
                .unwrap();
        assert_eq!(item, ContentItem::image_url("https://x/a.jpg"));
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let result: Result<ContentItem, _> =
            serde_json::from_value(json!({ "type": "video", "video": "clip.mp4" }));
        assert!(result.is_err());
    }
}
