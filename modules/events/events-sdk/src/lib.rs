#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Events SDK
//!
//! Public contract of the events module:
//! - [`EventsApi`]: the operations the boundary layer calls
//! - [`Event`], [`Package`], [`CreateEventRequest`], [`UpdateEventRequest`]: data shapes
//! - [`EventResult`]: the envelope every operation returns
//! - [`EventsError`]: typed failures and their status codes

pub mod api;
pub mod errors;
pub mod models;

pub use api::{EventResult, EventsApi};
pub use errors::EventsError;
pub use models::{CreateEventRequest, Event, Package, UpdateEventRequest};
