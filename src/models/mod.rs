pub mod coordinate;
pub mod event;
pub mod event_kind;
pub mod interval;
pub mod report;
pub mod user;
pub mod window;
pub mod zone;
