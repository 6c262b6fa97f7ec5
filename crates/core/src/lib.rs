//! `msgproc-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod aggregate;
pub mod error;
pub mod money;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use money::{Money, MoneyCents};
