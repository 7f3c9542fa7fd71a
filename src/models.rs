//! Typed shapes of the quotes API responses.
//!
//! Every model flattens unrecognized keys into `extra`, so decoding and re-encoding keeps
//! all of the remote payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text.
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Unique identifier of the quote on the platform.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    /// Background image URL suitable for displaying this quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Quote of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qod {
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub id: String,
    /// Day this quote belongs to.
    pub date: String,
    /// QOD category title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteContents {
    pub quotes: Vec<Quote>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QodContents {
    pub quotes: Vec<Qod>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Metadata about the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<Value>,
    pub contents: QuoteContents,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QodResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<Value>,
    pub contents: QodContents,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope of calls whose contents are an open-ended list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<Value>,
    pub contents: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Quote-shaped body: either a bare quote or the standard envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteBody {
    Single(Quote),
    Wrapped(QuoteResponse),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QodBody {
    Single(Qod),
    Wrapped(QodResponse),
}
