//! # Stocka Architecture
//!
//! Stocka is a **UI-agnostic inventory library**. This is not a CLI application that
//! happens to have some library code—it's a library that happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (indexes/names → UUIDs → Items)        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
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
//! ## The Selector System
//!
//! To stay ergonomic, stocka uses a dual id system that maps user-friendly
//! selectors (1-based display indexes or item names, used throughout the CLI)
//! to the stable UUIDs at the data store level. See index.rs for details.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a TUI, or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic
//!    against `InMemoryStore`. This is where the lion's share of testing lives.
//!
//! 2. **Model / money / index**: Unit tests for validation rules, cent
//!    parsing, and selector resolution.
//!
//! 3. **CLI** (`tests/cli.rs`): End-to-end tests driving the binary with
//!    `assert_cmd` against a temporary store.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Item` record and its field validation
//! - [`money`]: Integer-cent amounts (parsing and display)
//! - [`index`]: Display indexes and item selectors
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod money;
pub mod store;
