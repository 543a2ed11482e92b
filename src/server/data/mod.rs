//! Database repository layer.
//!
//! Repositories hold a borrowed connection, run SeaORM queries and convert entity models
//! into domain models at the boundary. Business rules stay in the service layer; the only
//! rule a repository applies is ownership scoping, which every reservation query carries.

pub mod reservation;
pub mod user;

#[cfg(test)]
mod test;
