//! Core components of the `tabfetch` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`FetchClient`] and its builder.
//! - The primary [`FetchError`] type.
//! - The shared [`Table`] and [`FetchResult`] models.
//! - Internal networking helpers.

/// The client (`FetchClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FetchError`) for the crate.
pub mod error;
/// Shared data models (`Table`, `FetchResult`).
pub mod models;

#[cfg(feature = "dataframe")]
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FetchClient`
pub use client::{FetchClient, FetchClientBuilder};
pub use error::{ErrorKind, FetchError};
pub use models::{FetchResult, Table};
