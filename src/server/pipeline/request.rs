//! Decode and validate stages.
//!
//! Each endpoint declares a request type implementing [`FromWire`], which reads only the
//! headers, query parameters and body fields the endpoint uses, and [`Validate`], which
//! checks field constraints in declaration order and yields the validated form.

use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::server::error::{
    request::{DecodeError, ValidationError},
    AppError,
};

/// Raw parts of an inbound request.
pub struct WireRequest<'a> {
    headers: &'a HeaderMap,
    query: Option<&'a str>,
    body: &'a [u8],
}

impl<'a> WireRequest<'a> {
    pub fn new(headers: &'a HeaderMap, query: Option<&'a str>, body: &'a [u8]) -> Self {
        Self {
            headers,
            query,
            body,
        }
    }

    /// Value of a header, `None` when absent.
    pub fn header(&self, name: &'static str) -> Result<Option<String>, DecodeError> {
        self.headers
            .get(name)
            .map(|value| {
                value
                    .to_str()
                    .map(str::to_string)
                    .map_err(|_| DecodeError::Header(name))
            })
            .transpose()
    }

    /// First value of a query parameter, `None` when absent.
    pub fn query(&self, name: &str) -> Option<String> {
        let query = self.query?;

        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Decodes the JSON body. An empty body decodes to the body type's default.
    pub fn json<T: DeserializeOwned + Default>(&self) -> Result<T, DecodeError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        Ok(serde_json::from_slice(self.body)?)
    }
}

/// Validated request of an endpoint that requires authentication.
///
/// The token is carried alongside the parameters until the auth guard resolves it.
pub struct Guarded<P> {
    pub token: Option<String>,
    pub params: P,
}

/// Endpoint request populated from raw request parts.
pub trait FromWire: Sized {
    fn from_wire(wire: &WireRequest<'_>) -> Result<Self, DecodeError>;
}

/// Field constraints of an endpoint request.
pub trait Validate {
    type Valid;

    /// Checks every constraint in field order and stops at the first violation.
    fn validate(self) -> Result<Self::Valid, ValidationError>;
}

/// Runs the decode and validate stages for request type `R`.
pub fn decode<R>(wire: &WireRequest<'_>) -> Result<R::Valid, AppError>
where
    R: FromWire + Validate,
{
    let request = R::from_wire(wire)?;

    Ok(request.validate()?)
}

/// Requires a string that is present and not blank.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ValidationError::new(field, "required"))
}

/// Requires a count that is present and not zero.
pub fn required_count(field: &'static str, value: Option<i32>) -> Result<i32, ValidationError> {
    value
        .filter(|value| *value != 0)
        .ok_or_else(|| ValidationError::new(field, "required"))
}

/// Requires `value >= min`.
pub fn min(field: &'static str, value: i32, min: i32) -> Result<(), ValidationError> {
    if value < min {
        return Err(ValidationError::new(field, format!("min={}", min)));
    }

    Ok(())
}

/// Requires at most `max` characters.
pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(field, format!("max={}", max)));
    }

    Ok(())
}
