//! Paralympics REST API library modules.
//!
//! CRUD endpoints over regions (NOC-coded) and events, plus token-based
//! authentication gating every mutating endpoint.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod outbound;
