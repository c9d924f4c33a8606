//! # Tabdeck Architecture
//!
//! Tabdeck is a **UI-agnostic dashboard document library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! The document it edits is the JSON file a "new tab" dashboard renders: a
//! list of flip-cards, each holding bookmarks, each bookmark optionally
//! holding sub-bookmarks. Every entry carries a document-wide unique slug id.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Re-validates after every mutation                        │
//! │  - Persists the working document, owns edit sessions        │
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
//! │  - Abstract DocumentStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Save Gate
//!
//! The working document is persisted after every mutation, valid or not;
//! nothing an editor does should be able to lose work. The `export`
//! operation is the gated path: it refuses to produce output while
//! [`validate::validate`] reports any issue. See `commands/export.rs`.
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
//! This means the same core could serve the dashboard's web editor, a TUI,
//! or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic.
//!    This is where the lion's share of testing lives.
//!
//! 2. **API** (`api.rs`): Tests against `InMemoryStore` verifying dispatch,
//!    validation plumbing, and edit-session buffering.
//!
//! 3. **CLI** (`tests/`): End-to-end runs of the binary against a temp file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Document`, `Card`, `Bookmark`)
//! - [`slug`]: Identifier slugification and unique-id generation
//! - [`validate`]: The pure document validator
//! - [`session`]: Clone-then-commit edit sessions
//! - [`init`]: Document location and the starter document
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod session;
pub mod slug;
pub mod store;
pub mod validate;
