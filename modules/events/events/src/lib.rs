#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Events module
//!
//! Stores events and their ticket packages, enforces that only an event's
//! creator may change it, and exposes the result through [`EventsApi`].
//!
//! ```text
//!   boundary layer
//!         │  Arc<dyn EventsApi>
//!         ▼
//!   EventService ──► EventRepository ──► BaseRepository ──► SeaORM
//!         │
//!         └─ factory (request → row, row + packages → Event)
//! ```
//!
//! Every operation answers with an [`EventResult`] envelope carrying the
//! status code the boundary layer should report.

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use config::EventsConfig;
pub use events_sdk::{
    CreateEventRequest, Event, EventResult, EventsApi, EventsError, Package, UpdateEventRequest,
};
pub use module::EventsModule;
