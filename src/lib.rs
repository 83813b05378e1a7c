//! viewlink - Short-link registry
//!
//! Signed-in users register memorable keys that redirect to destination
//! URLs. Keys are globally unique; owners see and manage their own links and
//! a single configured administrator manages all of them. Anyone may follow
//! a key through the public redirect.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
