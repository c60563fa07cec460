//! Task management for taskboard.
//!
//! Tasks are created with a title and optional description, completed, and
//! deleted through [`services::TaskLifecycleService`]. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
