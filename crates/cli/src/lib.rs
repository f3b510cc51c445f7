//! `catering-cli`
//!
//! **Responsibility:** console shell around the catering registry.
//!
//! This crate provides:
//! - Prompt-driven input collection (menus, guests, menu choices)
//! - The load → gather → assign → report → save workflow
//! - Plain-text reports
//!
//! All business rules live in `catering-registry`; this crate only moves
//! data between the operator and the registry.

pub mod input;
pub mod report;
pub mod workflow;

pub use input::{ConsoleCollector, InputCollector, InputError, MenuDraft};
pub use workflow::{SessionOptions, SessionSummary};
