//! Services layered on the persistence adapter.
//!
//! - [`auth`] - the single-account register/login flow

pub mod auth;
