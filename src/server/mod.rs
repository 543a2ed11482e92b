//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the reservation service: HTTP handlers,
//! the request pipeline, business rules, data access and startup infrastructure. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers composing the pipeline stages
//! - **Pipeline** (`pipeline/`) - Decoding, validation, localization and response encoding
//! - **Service Layer** (`service/`) - Reservation rules and sign-in
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Typed errors and their mapping to API errors
//! - **Middleware** (`middleware/`) - Authentication guard
//! - **Localization** (`localization/`) - Message catalogs and `Accept-Language` handling
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, catalog, token codec)
//! - **Startup** (`startup`) - Logging, database, language files and shutdown signals
//! - **Router** (`router`) - Route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** decodes and validates the request through the pipeline
//! 3. **Middleware** resolves the access token into a principal, where required
//! 4. **Service** applies the business rules and calls the data layer
//! 5. **Controller** converts the result into a DTO
//! 6. **Pipeline** localizes any error and encodes the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod localization;
pub mod middleware;
pub mod model;
pub mod pipeline;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
