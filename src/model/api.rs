use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapping every API response.
///
/// Exactly one of `data` and `result` is set: `data` on success, `result` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    pub result: Option<ApiResultDto>,
}

impl<T> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            result: None,
        }
    }

    pub fn failure(result: ApiResultDto) -> Self {
        Self {
            data: None,
            result: Some(result),
        }
    }
}

/// Serialized form of an API error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResultDto {
    pub message: String,
    pub name: String,
    pub code: u16,
    pub status_code: u16,
}
