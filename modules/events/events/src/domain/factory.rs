//! Mapping between storage rows and the SDK shapes.
//!
//! Pure functions: no I/O, no identity generation (the entity assigns ids on insert).

use std::collections::HashSet;

use events_sdk::{CreateEventRequest, Event, Package, UpdateEventRequest};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::infra::storage::entity::{event, package};

/// New event row owned by `creator_id`.
#[must_use]
pub fn from_request(request: CreateEventRequest, creator_id: &str) -> event::ActiveModel {
    event::ActiveModel {
        id: NotSet,
        creator_id: Set(creator_id.to_owned()),
        event_name: Set(request.event_name),
        category: Set(request.category),
        image_url: Set(request.image_url),
        event_date: Set(request.event_date),
        location: Set(request.location),
        description: Set(request.description),
    }
}

/// Overwrite every mutable field. Identity and creator stay untouched.
pub fn apply_update(event: &mut event::Model, request: UpdateEventRequest) {
    event.event_name = request.event_name;
    event.category = request.category;
    event.image_url = request.image_url;
    event.event_date = request.event_date;
    event.location = request.location;
    event.description = request.description;
}

/// Flatten an event and its linked packages into the SDK shape.
///
/// A package linked more than once appears once, at its first position.
#[must_use]
pub fn to_dto(event: event::Model, packages: Vec<package::Model>) -> Event {
    let mut seen = HashSet::with_capacity(packages.len());
    let packages = packages
        .into_iter()
        .filter(|p| seen.insert(p.id))
        .map(package_to_dto)
        .collect();

    Event {
        id: event.id,
        creator_id: event.creator_id,
        event_name: event.event_name,
        category: event.category,
        image_url: event.image_url,
        event_date: event.event_date,
        location: event.location,
        description: event.description,
        packages,
    }
}

#[must_use]
pub fn package_to_dto(package: package::Model) -> Package {
    Package {
        id: package.id,
        package_name: package.package_name,
        seating_arrangement: package.seating_arrangement,
        placement: package.placement,
        price: package.price,
        currency: package.currency,
    }
}
