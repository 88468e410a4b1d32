//! Customer module: three-layer split (domain, store, service).
//!
//! The service owns every business rule around customer records; the store is
//! a keyed persistence abstraction with SeaORM and in-memory implementations.

pub mod domain;
pub mod service;
pub mod store;

pub use service::CustomerService;
