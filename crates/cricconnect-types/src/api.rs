use serde::{Deserialize, Serialize};

use crate::models::ChatMessage;

// -- Envelopes --

/// `{ success, message?, data }`: the shape every single-resource response uses.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, message: None, data }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self { success: true, message: Some(message.into()), data }
    }
}

/// `{ success, count, data: [..], message? }` for catalog listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ListEnvelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { success: true, count: data.len(), data, message: None }
    }
}

/// Failure envelope. `errors` is only present for validation failures,
/// `error` only for store failures, `path` only for unknown routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), errors: None, error: None, path: None }
    }
}

// -- Messages --

/// Body of `POST /api/messages`. Fields are optional so that missing values
/// surface as validation errors rather than JSON rejections.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub username: Option<String>,
    pub message: Option<String>,
    pub is_own: Option<bool>,
}

/// A stored message plus its presentation-only relative time label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    #[serde(flatten)]
    pub message: ChatMessage,
    pub formatted_time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagePage {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    pub page: u32,
    pub pages: u64,
    pub data: Vec<MessageResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStats {
    pub total_messages: u64,
    pub today_messages: u64,
    pub unique_users: usize,
    pub users: Vec<String>,
}

/// Serialises as `{}`; used as the `data` of a successful delete.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Empty {}

// -- Matches --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveCount {
    pub total: usize,
    pub live: usize,
    pub completed: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LiveCountResponse {
    pub success: bool,
    pub count: usize,
    pub data: LiveCount,
}

// -- Service root --

#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    pub matches: String,
    pub chat: String,
    pub messages: String,
    pub predictions: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}
