//! Subcommand implementations.
//!
//! Each function runs one store operation, then re-projects and renders the
//! views that operation affects.

pub mod account;
pub mod admin;
pub mod cart;
pub mod shop;
