use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /v1/reservation/new`.
///
/// Dates are `YYYY-MM-DD` strings; parsing them is a business rule, not a decoding step.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationBody {
    pub destination: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub accommodation: Option<String>,
    pub guest_count: Option<i32>,
}

/// Body of `POST /v1/reservation/update`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationBody {
    pub pnr: Option<String>,
    pub destination: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub accommodation: Option<String>,
    pub guest_count: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    pub is_successfully: bool,
    pub pnr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationDto {
    pub is_successfully: bool,
}

/// Reservation as shown to its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub pnr: String,
    pub destination: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub accommodation: String,
    pub guest_count: i32,
    /// Owner's first and last name separated by a space.
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListDto {
    pub reservations: Vec<ReservationDto>,
    pub is_successfully: bool,
}
