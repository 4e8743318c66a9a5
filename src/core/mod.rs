//! # Core Application Logic
//!
//! The picker's business logic. It knows nothing about any specific UI
//! technology and performs no I/O; timers live in `crate::timer`.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Timers   │
//!            │  Adapter   │            │  (tokio)   │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`dataset`]: The bundled people list
//! - [`filter`]: Substring matching and its memo
//! - [`autocomplete`]: Search widget state
//! - [`selection`]: Selected-person state machine
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`config`]: Settings file, env and defaults

pub mod action;
pub mod autocomplete;
pub mod config;
pub mod dataset;
pub mod filter;
pub mod selection;
pub mod state;
