//! Public models for the events module.
//!
//! These are the shapes exchanged with the boundary layer. They carry no
//! persistence artifacts: the event/package join is flattened into
//! [`Event::packages`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// An event together with the packages offered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub creator_id: String,
    pub event_name: String,
    pub category: String,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// A ticket package. Shared reference data; many events may offer the same one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: Uuid,
    pub package_name: String,
    pub seating_arrangement: Option<String>,
    pub placement: Option<String>,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
}

/// Data for a new event. The creator comes from the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub event_name: String,
    pub category: String,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    pub location: String,
    pub description: String,
}

/// Full replacement of an event's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub event_name: String,
    pub category: String,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    pub location: String,
    pub description: String,
}
