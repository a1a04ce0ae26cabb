//! # Jotz Architecture
//!
//! Jotz is a **UI-agnostic notebook library**. The interactive shell is a
//! client of the library, not the other way around, and that distinction
//! drives the layering.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Reads prompt input, renders tables, colors messages      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the NoteBook and its store; loads on open           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Dispatcher (dispatch.rs)   │
//! │  - Pure business logic, one module per operation            │
//! │  - dispatch.rs resolves raw input to a command kind         │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data + Storage (model.rs, book.rs, store/)                 │
//! │  - Tag/Tags/Note value types, insertion-ordered NoteBook    │
//! │  - Abstract StateStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, dispatcher, book, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! All interactive concerns — sub-prompts, retry on bad input, table
//! rendering — live in `cli/`. Recoverable user mistakes (invalid index,
//! non-numeric input, empty note, unknown command) are `CmdResult`
//! outcomes and messages, not `Err` values; only genuine I/O failures
//! travel the error channel, so a failed save on exit stays loud.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`dispatch`]: Registry plus exact/prefix/fuzzy input resolution
//! - [`book`]: The insertion-ordered note → tags mapping
//! - [`model`]: Core value types (`Note`, `Tag`, `Tags`)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Prompting, rendering, and the REPL loop for the binary (not
//!   part of the lib API)

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod store;
