//! Taskboard: task management behind a storage-agnostic use-case layer.
//!
//! This crate provides the task entity, the repository port that abstracts
//! its storage, a concurrent in-memory store, and the service that enforces
//! task business rules on top of the port.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task creation, lookup, completion, and deletion
//! - [`config`]: Service configuration loaded from the environment
//! - [`telemetry`]: Tracing subscriber bootstrap

pub mod config;
pub mod task;
pub mod telemetry;
