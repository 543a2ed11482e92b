//! HTTP handlers.
//!
//! Every handler takes the raw request parts, runs them through the request pipeline and
//! always answers with the response envelope, so failures never escape as bare axum
//! rejections.

pub mod account;
pub mod health;
pub mod reservation;

#[cfg(test)]
mod test;
