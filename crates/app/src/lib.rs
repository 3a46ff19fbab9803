//! Back-office dashboard client: REST services, session handling and the
//! promotion editor built on the `backoffice` authoring model.

pub mod client;
pub mod config;
pub mod context;
pub mod domain;
pub mod observability;
pub mod session;
