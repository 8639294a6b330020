//! Narrow data-access interface between the application and its store.
//!
//! Command logic only ever talks to a `DataService`; the aggregation and
//! geofence code never sees it and receives plain vectors instead.

use crate::errors::AppResult;
use crate::models::event::ClockEvent;
use crate::models::user::{Role, User};
use crate::models::zone::{Zone, ZoneId};
use chrono::{DateTime, Utc};

/// Filter for event listings. Empty `user_ids` means every user.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub user_ids: Vec<i64>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl EventQuery {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_ids: vec![user_id],
            ..Self::default()
        }
    }

    pub fn since(mut self, t: DateTime<Utc>) -> Self {
        self.since = Some(t);
        self
    }

    pub fn until(mut self, t: DateTime<Utc>) -> Self {
        self.until = Some(t);
        self
    }
}

pub trait DataService {
    // events
    /// Newest first. Callers must not rely on the order.
    fn list_events(&self, query: &EventQuery) -> AppResult<Vec<ClockEvent>>;
    fn append_event(&mut self, ev: &ClockEvent) -> AppResult<ClockEvent>;

    // zones
    fn list_zones(&self) -> AppResult<Vec<Zone>>;
    fn find_zone(&self, id: ZoneId) -> AppResult<Option<Zone>>;
    fn add_zone(&mut self, zone: &Zone) -> AppResult<Zone>;
    fn delete_zone(&mut self, id: ZoneId) -> AppResult<bool>;

    // users
    /// Newest first.
    fn list_users(&self) -> AppResult<Vec<User>>;
    fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;
    fn add_user(&mut self, user: &User) -> AppResult<User>;
    fn delete_user(&mut self, id: i64) -> AppResult<bool>;
    fn update_role(&mut self, id: i64, role: Role) -> AppResult<()>;
    fn assign_zone(&mut self, id: i64, zone: Option<ZoneId>) -> AppResult<()>;
    fn update_profile(&mut self, id: i64, first: &str, last: &str, phone: &str) -> AppResult<()>;

    // audit
    fn write_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}
