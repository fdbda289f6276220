//! Customer module: three-layer architecture (domain, repository, service).
//!
//! The service owns every business rule (email uniqueness, partial-update
//! change detection); repositories only persist.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::CustomerService;
