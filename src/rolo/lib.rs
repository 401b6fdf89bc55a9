//! # Rolo Architecture
//!
//! Rolo is a single-user contact book and note taker. The binary is an
//! interactive command loop; everything it does is backed by this library,
//! which never touches stdout, stderr or the process exit code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, parses arguments, prints results    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the application state (contacts, notes, config)     │
//! │  - Persists after every mutation                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (contacts.rs, notes.rs, validate.rs)           │
//! │  - In-memory collections and their rules                    │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Layer (store/)                                 │
//! │  - Abstract `Persistence` trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durability
//!
//! Every mutation rewrites the whole backing file. There is no locking and
//! no atomic rename, so two processes sharing a data directory, or a crash
//! in the middle of a write, can leave a truncated file behind. Rolo is a
//! local single-user tool and accepts that trade-off.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and application state
//! - [`contacts`]: Contact book operations, including the birthday window
//! - [`notes`]: Notebook operations
//! - [`validate`]: Phone, email and date validators
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `ContactField`, `LeapDayPolicy`)
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod contacts;
pub mod error;
pub mod model;
pub mod notes;
pub mod store;
pub mod validate;
