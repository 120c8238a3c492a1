//! Quote provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait that all providers implement
//! - The Yahoo Finance implementation

mod traits;

pub mod yahoo;

pub use traits::QuoteProvider;
