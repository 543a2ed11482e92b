//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They apply the reservation rules
//! from [`rules`], decide what to write and translate repository outcomes into typed
//! domain errors. Every reservation operation takes the calling [`Principal`] explicitly.
//!
//! [`Principal`]: crate::server::model::principal::Principal

pub mod account;
pub mod reservation;
pub mod rules;

#[cfg(test)]
mod test;
