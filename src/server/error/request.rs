use thiserror::Error;

/// Failure to turn raw request parts into an endpoint request.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The body is not JSON or does not match the endpoint's body shape.
    #[error("Request body could not be decoded: {0}")]
    Body(#[from] serde_json::Error),

    /// A header value contains bytes that are not visible ASCII.
    #[error("Header '{0}' is not valid visible ASCII")]
    Header(&'static str),
}

/// First constraint violated by a decoded request.
///
/// `constraint` carries the rule tag including its parameter, e.g. `required`, `min=1`
/// or `max=255`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed, tag: {constraint}, field: {field}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: &'static str, constraint: impl Into<String>) -> Self {
        Self {
            field,
            constraint: constraint.into(),
        }
    }
}
