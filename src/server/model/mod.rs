//! Domain models and operation-specific parameter types.
//!
//! Domain models are produced from entity models at the repository boundary and turned
//! into DTOs by controllers. Parameter types carry validated request data into services
//! and service decisions into repositories.

pub mod account;
pub mod principal;
pub mod reservation;
pub mod user;
