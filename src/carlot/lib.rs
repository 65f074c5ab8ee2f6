//! # Carlot Architecture
//!
//! Carlot tracks a car dealership's vehicles and who is renting them. It is a
//! library with a command-line client, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, rental state machine, load-mutate-save       │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rental States
//!
//! A car is either `Available` or `Rented`. Renting moves it to `Rented`
//! and appends the renter to its history; returning moves it back and
//! clears only the current renter. Renting a rented car, or returning an
//! available one, is a `Conflict` error.
//!
//! ## Consistency
//!
//! Every mutating command loads the full dealers document, changes it and
//! writes it back whole. There is no cache between calls and no locking;
//! carlot assumes a single local operator.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Car`, `CarDealer`, the two documents)
//! - [`validation`]: Plate, year and user-id format checks
//! - [`config`]: Settings and data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
