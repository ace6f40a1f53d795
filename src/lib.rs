//! Plugin base: shared building blocks for continuous-delivery host plugins.
//!
//! The crate currently provides request validation: a fixed built-in
//! validator plus plugin-supplied validators, merged into a single
//! success or validation-failure response.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Plain request, result, and response types
//! - **Ports**: Trait interfaces for validators and result serialization
//! - **Adapters**: Concrete port implementations (JSON)
//!
//! # Modules
//!
//! - [`validation`]: Validator composition and response translation

pub mod validation;
