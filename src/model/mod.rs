//! Wire-level data transfer objects.
//!
//! These types describe the JSON bodies accepted and returned by the HTTP API. Request
//! bodies keep every field optional so that presence checks happen in the validation
//! stage of the request pipeline instead of failing deserialization.

pub mod account;
pub mod api;
pub mod health;
pub mod reservation;
