//! SeaORM entity models for the reservation backend.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude`
//! re-exports every entity under its table-level name so repositories can write
//! `entity::prelude::Reservation::find()`.

pub mod prelude;
pub mod reservation;
pub mod user;
