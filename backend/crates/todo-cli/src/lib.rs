//! todo-cli library
//!
//! This module exports the HTTP client for use in tests and other crates.

pub(crate) mod client;
pub(crate) mod token;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
pub use token::{decode_claims, identity_from_token};
