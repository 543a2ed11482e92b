use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sign-in request body.
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInBody {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInDto {
    pub is_successfully: bool,
    pub token: String,
}
