//! Generic repository over `SeaORM` entities.
//!
//! [`BaseRepository`] is the only place that turns a runner into queries.
//! Entity repositories in modules wrap it and add named queries built from its
//! operations; they never hold a connection.
//!
//! ```ignore
//! let repo = BaseRepository::<event::Entity>::new();
//! let conn = db.conn()?;
//!
//! let upcoming = repo
//!     .get_all_projected(
//!         &conn,
//!         ListQuery::new()
//!             .filter(Condition::all().add(event::Column::Category.eq("music")))
//!             .sort(Sort::asc(event::Column::EventDate)),
//!         |e| e.event_name,
//!     )
//!     .await;
//! ```

mod base;
mod query;

pub use base::BaseRepository;
pub use query::{ListQuery, Sort};
