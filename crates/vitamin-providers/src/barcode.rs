// ABOUTME: Barcode decoder trait for turning a label photo into a product barcode
// ABOUTME: Fixed-result implementation stands in for camera symbology decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use tracing::debug;
use vitamin_core::constants::defaults::DEMO_BARCODE;

/// Decodes a barcode from raw image bytes
#[async_trait]
pub trait BarcodeDecoder: Send + Sync {
    /// Barcode text, or `None` when no code is found
    async fn decode(&self, image: &[u8]) -> Option<String>;
}

/// Decoder that always reports the same code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBarcodeDecoder {
    code: Option<String>,
}

impl FixedBarcodeDecoder {
    /// Decoder reporting `code`
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }

    /// Decoder that never finds a code
    #[must_use]
    pub const fn none() -> Self {
        Self { code: None }
    }
}

impl Default for FixedBarcodeDecoder {
    fn default() -> Self {
        Self::new(DEMO_BARCODE)
    }
}

#[async_trait]
impl BarcodeDecoder for FixedBarcodeDecoder {
    async fn decode(&self, image: &[u8]) -> Option<String> {
        if image.is_empty() {
            return None;
        }
        debug!(bytes = image.len(), code = ?self.code, "Fixed barcode decode");
        self.code.clone()
    }
}
