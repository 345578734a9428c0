//! Core types for Mango Stand.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;

pub use email::{Email, EmailError};
pub use id::{ProductId, ProductIdGenerator};
pub use price::{Price, PriceError};
