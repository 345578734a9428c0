//! Mango Stand Core - Shared types library.
//!
//! This crate provides common types used across all Mango Stand components:
//! - `storefront` - The state/view synchronization engine
//! - `cli` - Terminal shell driving the engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, and email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
