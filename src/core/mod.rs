//! Core error handling shared by the data model.

#![warn(missing_docs)]

pub mod error;

pub use error::{DataError, Result};
