// ABOUTME: Label reader trait for extracting vitamin amounts from supplement label images
// ABOUTME: Data-URL validation, tolerant OCR response decoding, and a canned reader for offline use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Label reading
//!
//! An OCR collaborator returns JSON of the form
//! `{"vitamins": {"Vitamin A": "700 µg", ...}}`. Decoding never fails: a
//! malformed payload yields an empty profile, and names outside the canonical
//! vocabulary are dropped.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use vitamin_core::errors::{AppError, AppResult};
use vitamin_core::models::ProductNutrientProfile;

const DATA_URL_PREFIX: &str = "data:image/";

/// A label photo encoded as a `data:image/...` URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelImage {
    #[serde(rename = "imageBase64")]
    data_url: String,
}

impl LabelImage {
    /// Validate and wrap a data URL
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error unless the text starts with `data:image/`.
    pub fn from_data_url(data_url: impl Into<String>) -> AppResult<Self> {
        let data_url = data_url.into();
        if !data_url.starts_with(DATA_URL_PREFIX) {
            return Err(AppError::invalid_input("imageBase64 data URL is required"));
        }
        Ok(Self { data_url })
    }

    /// MIME type declared by the URL, e.g. `image/png`
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        let rest = self.data_url.strip_prefix("data:")?;
        rest.split([';', ',']).next().filter(|media| !media.is_empty())
    }
}

/// Extracts vitamin amounts from a label image
#[async_trait]
pub trait LabelReader: Send + Sync {
    /// Read the label and return the amounts it lists
    ///
    /// The result is partial: only nutrients printed on the label appear.
    async fn read_label(&self, image: &LabelImage) -> AppResult<ProductNutrientProfile>;
}

#[derive(Debug, Default, Deserialize)]
struct LabelResponse {
    #[serde(default)]
    vitamins: serde_json::Map<String, Value>,
}

/// Decode an OCR payload into a profile
///
/// Keys are mapped onto the canonical vocabulary (aliases such as
/// `"Vitamin B1"` or `"Folic Acid"` included). String values are kept as
/// printed; bare numbers are kept as their decimal text.
#[must_use]
pub fn decode_label_response(json: &str) -> ProductNutrientProfile {
    let response: LabelResponse = match serde_json::from_str(json) {
        Ok(response) => response,
        Err(error) => {
            warn!(%error, "Malformed label response, treating as empty");
            LabelResponse::default()
        }
    };

    let entries = response
        .vitamins
        .into_iter()
        .filter_map(|(label, value)| match value {
            Value::String(amount) => Some((label, amount)),
            Value::Number(number) => Some((label, number.to_string())),
            other => {
                debug!(label = %label, value = %other, "Ignoring non-scalar label amount");
                None
            }
        });
    ProductNutrientProfile::from_labels(entries)
}

/// Reader that decodes a fixed payload whatever the image
pub struct CannedLabelReader {
    payload: String,
}

impl CannedLabelReader {
    /// Reader answering with `payload` (raw OCR JSON)
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

#[async_trait]
impl LabelReader for CannedLabelReader {
    async fn read_label(&self, image: &LabelImage) -> AppResult<ProductNutrientProfile> {
        debug!(media_type = ?image.media_type(), "Reading label from canned payload");
        Ok(decode_label_response(&self.payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitamin_core::models::Nutrient;

    #[test]
    fn test_data_url_validation() {
        let image = LabelImage::from_data_url("data:image/png;base64,AAAA").unwrap();
        assert_eq!(image.media_type(), Some("image/png"));
        assert!(LabelImage::from_data_url("https://example.com/label.png").is_err());
        assert!(LabelImage::from_data_url("").is_err());
    }

    #[test]
    fn test_image_serializes_as_request_body() {
        let image = LabelImage::from_data_url("data:image/png;base64,AAAA").unwrap();
        let body = serde_json::to_value(&image).unwrap();
        assert_eq!(body["imageBase64"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_decode_normalizes_keys_and_drops_minerals() {
        let profile = decode_label_response(
            r#"{"vitamins": {"Vitamin B1": "1.2 mg", "Folic Acid": "400 mcg DFE", "Zinc": "11 mg", "vitamin c": "90 mg"}}"#,
        );
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.get(Nutrient::Thiamin), Some("1.2 mg"));
        assert_eq!(profile.get(Nutrient::Folate), Some("400 mcg DFE"));
        assert_eq!(profile.get(Nutrient::VitaminC), Some("90 mg"));
    }

    #[test]
    fn test_decode_falls_back_to_empty() {
        assert!(decode_label_response("not json").is_empty());
        assert!(decode_label_response("{}").is_empty());
        assert!(decode_label_response(r#"{"vitamins": {"Vitamin D": null}}"#).is_empty());
    }

    #[test]
    fn test_decode_keeps_bare_numbers() {
        let profile = decode_label_response(r#"{"vitamins": {"Biotin": 30}}"#);
        assert_eq!(profile.get(Nutrient::Biotin), Some("30"));
    }

    #[tokio::test]
    async fn test_canned_reader() {
        let reader = CannedLabelReader::new(r#"{"vitamins": {"Vitamin D": "25 mcg"}}"#);
        let image = LabelImage::from_data_url("data:image/jpeg;base64,AAAA").unwrap();
        let profile = reader.read_label(&image).await.unwrap();
        assert_eq!(profile.get(Nutrient::VitaminD), Some("25 mcg"));
    }
}
