pub mod event;
pub mod event_package;
pub mod package;
