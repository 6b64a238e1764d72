#![allow(dead_code)]

use eventhub_db::repo::BaseRepository;
use eventhub_db::{Db, DbConfig, DbHandle};
use events::infra::storage::entity::{event_package, package};
use events::{CreateEventRequest, EventsConfig, EventsModule, UpdateEventRequest};
use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};
use time::macros::datetime;
use uuid::Uuid;

/// Migrated in-memory database plus the module built on it.
///
/// One pooled connection keeps every query on the same in-memory database.
pub async fn setup(config: EventsConfig) -> (Db, EventsModule) {
    let cfg = DbConfig {
        dsn: "sqlite::memory:".to_owned(),
        max_conns: Some(1),
        ..DbConfig::default()
    };
    let db = DbHandle::connect(&cfg).await.unwrap().into_db();
    let module = EventsModule::init(db.clone(), config).await.unwrap();
    (db, module)
}

pub fn create_request(name: &str) -> CreateEventRequest {
    CreateEventRequest {
        event_name: name.to_owned(),
        category: "conference".to_owned(),
        image_url: Some(format!("https://img.example/{name}.png")),
        event_date: datetime!(2026-05-20 09:30 UTC),
        location: "Stockholm".to_owned(),
        description: format!("{name} description"),
    }
}

pub fn update_request(name: &str) -> UpdateEventRequest {
    UpdateEventRequest {
        event_name: name.to_owned(),
        category: "meetup".to_owned(),
        image_url: None,
        event_date: datetime!(2026-06-01 18:00 UTC),
        location: "Gothenburg".to_owned(),
        description: "moved".to_owned(),
    }
}

pub async fn add_package(db: &Db, name: &str, price: Option<Decimal>) -> package::Model {
    let conn = db.conn().unwrap();
    BaseRepository::<package::Entity>::new()
        .add(
            &conn,
            package::ActiveModel {
                id: NotSet,
                package_name: Set(name.to_owned()),
                seating_arrangement: Set(Some("Standing".to_owned())),
                placement: Set(None),
                price: Set(price),
                currency: Set(price.map(|_| "EUR".to_owned())),
            },
        )
        .await
        .into_result()
        .unwrap()
}

pub async fn link(db: &Db, event_id: Uuid, package_id: Uuid) {
    let conn = db.conn().unwrap();
    BaseRepository::<event_package::Entity>::new()
        .add(
            &conn,
            event_package::ActiveModel {
                id: NotSet,
                event_id: Set(event_id),
                package_id: Set(package_id),
            },
        )
        .await
        .into_result()
        .unwrap();
}
