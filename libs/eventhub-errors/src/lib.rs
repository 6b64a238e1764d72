//! Core result types for eventhub
//!
//! This crate provides the status-carrying [`Envelope`] returned by every
//! data-access and service operation, with no dependencies on HTTP frameworks
//! beyond the `http::StatusCode` vocabulary.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod envelope;

pub use envelope::{Envelope, Failure};
