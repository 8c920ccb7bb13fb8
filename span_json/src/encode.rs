// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use span_model::StyledText;

/// Encodes `document` as compact JSON.
///
/// Absent optional attributes are omitted, so the output is accepted by every
/// [`JsonParser`](crate::JsonParser) and decodes back to an equal document.
pub fn to_json(document: &StyledText) -> Result<String, serde_json::Error> {
    serde_json::to_string(document)
}

/// Encodes `document` as indented JSON.
pub fn to_json_pretty(document: &StyledText) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}
