//! Backoffice
//!
//! Domain library for the store back-office dashboard: promotion line
//! authoring (rules, actions, validation, labels and payloads), catalog
//! lookups, spin-the-wheel configuration and sales summaries.
//!
//! Everything here is synchronous and free of I/O; the `backoffice-app`
//! crate wires it to the REST backend.

pub mod analytics;
pub mod catalog;
pub mod ids;
pub mod prelude;
pub mod promotions;
pub mod wheel;
