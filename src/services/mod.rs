//! Business logic above the repository layer.
//!
//! The only computation this service performs beyond filtered reads is the
//! temperature summary in [`summary`].

pub mod summary;

pub use summary::{summarize, SummaryError, TobsSummary};
