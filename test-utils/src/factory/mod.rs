//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let reservation = factory::reservation::create_reservation(&db, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("jdoe")
//!     .first_name("John")
//!     .last_name("Doe")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `reservation` - Create reservation entities
//! - `helpers` - ID generation and entities with dependencies

pub mod helpers;
pub mod reservation;
pub mod user;

pub use reservation::create_reservation;
pub use user::create_user;
