use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::service::{DataService, EventQuery};
use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::models::user::{Role, User};
use crate::models::zone::{Zone, ZoneId};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, Result, Row, ToSql, params};

/// Fixed-width UTC format so that text comparison equals time comparison.
pub fn ts_to_db(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn ts_from_db(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

fn conversion_error(idx: usize, e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

fn optional_coordinate(lat: Option<f64>, lon: Option<f64>) -> AppResult<Option<Coordinate>> {
    match (lat, lon) {
        (Some(la), Some(lo)) => Coordinate::new(la, lo).map(Some),
        _ => Ok(None),
    }
}

pub fn map_event_row(row: &Row) -> Result<ClockEvent> {
    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidEventKind(kind_str.clone())))?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = ts_from_db(&ts_str).map_err(|e| conversion_error(0, e))?;

    let coordinate = optional_coordinate(row.get("latitude")?, row.get("longitude")?)
        .map_err(|e| conversion_error(0, e))?;

    Ok(ClockEvent {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        timestamp,
        coordinate,
        zone_id: row.get("zone_id")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_zone_row(row: &Row) -> Result<Zone> {
    let center = Coordinate::new(row.get("latitude")?, row.get("longitude")?)
        .map_err(|e| conversion_error(0, e))?;

    Ok(Zone {
        id: row.get("id")?,
        name: row.get("name")?,
        address: row.get("address")?,
        center,
        radius_meters: row.get("radius")?,
    })
}

pub fn map_user_row(row: &Row) -> Result<User> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidRole(role_str.clone())))?;

    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        phone: row.get("phone")?,
        role,
        status: row.get("status")?,
        employee_number: row.get("employee_number")?,
        zone_id: row.get("zone_id")?,
        created_at: row.get("created_at")?,
    })
}

/// Build `SELECT * FROM events WHERE …` for an `EventQuery`.
fn event_query_sql(query: &EventQuery) -> (String, Vec<Box<dyn ToSql>>) {
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();

    if !query.user_ids.is_empty() {
        let placeholders = vec!["?"; query.user_ids.len()].join(",");
        clauses.push(format!("user_id IN ({placeholders})"));
        for id in &query.user_ids {
            params.push(Box::new(*id));
        }
    }
    if let Some(since) = &query.since {
        clauses.push("timestamp >= ?".to_string());
        params.push(Box::new(ts_to_db(since)));
    }
    if let Some(until) = &query.until {
        clauses.push("timestamp < ?".to_string());
        params.push(Box::new(ts_to_db(until)));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    (
        format!("SELECT * FROM events{where_sql} ORDER BY timestamp DESC, id DESC"),
        params,
    )
}

impl DataService for DbPool {
    fn list_events(&self, query: &EventQuery) -> AppResult<Vec<ClockEvent>> {
        let (sql, params) = event_query_sql(query);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            map_event_row,
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn append_event(&mut self, ev: &ClockEvent) -> AppResult<ClockEvent> {
        self.conn.execute(
            "INSERT INTO events (user_id, kind, timestamp, latitude, longitude, zone_id, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                ev.user_id,
                ev.kind.to_db_str(),
                ts_to_db(&ev.timestamp),
                ev.coordinate.map(|c| c.latitude),
                ev.coordinate.map(|c| c.longitude),
                ev.zone_id,
                ev.source,
                ev.created_at,
            ],
        )?;

        let mut saved = ev.clone();
        saved.id = self.conn.last_insert_rowid();
        Ok(saved)
    }

    fn list_zones(&self) -> AppResult<Vec<Zone>> {
        let mut stmt = self.conn.prepare("SELECT * FROM zones ORDER BY id ASC")?;
        let rows = stmt.query_map([], map_zone_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn find_zone(&self, id: ZoneId) -> AppResult<Option<Zone>> {
        let zone = self
            .conn
            .query_row("SELECT * FROM zones WHERE id = ?1", [id], map_zone_row)
            .optional()?;
        Ok(zone)
    }

    fn add_zone(&mut self, zone: &Zone) -> AppResult<Zone> {
        self.conn.execute(
            "INSERT INTO zones (name, address, latitude, longitude, radius, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                zone.name,
                zone.address,
                zone.center.latitude,
                zone.center.longitude,
                zone.radius_meters,
                Utc::now().to_rfc3339(),
            ],
        )?;

        let mut saved = zone.clone();
        saved.id = self.conn.last_insert_rowid();
        Ok(saved)
    }

    fn delete_zone(&mut self, id: ZoneId) -> AppResult<bool> {
        let n = self.conn.execute("DELETE FROM zones WHERE id = ?1", [id])?;
        Ok(n > 0)
    }

    fn list_users(&self) -> AppResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM users ORDER BY created_at DESC, id DESC")?;
        let rows = stmt.query_map([], map_user_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT * FROM users WHERE lower(email) = lower(?1)",
                [email.trim()],
                map_user_row,
            )
            .optional()?;
        Ok(user)
    }

    fn add_user(&mut self, user: &User) -> AppResult<User> {
        self.conn.execute(
            "INSERT INTO users (email, first_name, last_name, phone, role, status, employee_number, zone_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                user.email,
                user.first_name,
                user.last_name,
                user.phone,
                user.role.to_db_str(),
                user.status,
                user.employee_number,
                user.zone_id,
                user.created_at,
            ],
        )?;

        let mut saved = user.clone();
        saved.id = self.conn.last_insert_rowid();
        Ok(saved)
    }

    fn delete_user(&mut self, id: i64) -> AppResult<bool> {
        let n = self.conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
        Ok(n > 0)
    }

    fn update_role(&mut self, id: i64, role: Role) -> AppResult<()> {
        self.conn.execute(
            "UPDATE users SET role = ?1 WHERE id = ?2",
            params![role.to_db_str(), id],
        )?;
        Ok(())
    }

    fn assign_zone(&mut self, id: i64, zone: Option<ZoneId>) -> AppResult<()> {
        self.conn
            .execute("UPDATE users SET zone_id = ?1 WHERE id = ?2", params![zone, id])?;
        Ok(())
    }

    fn update_profile(&mut self, id: i64, first: &str, last: &str, phone: &str) -> AppResult<()> {
        self.conn.execute(
            "UPDATE users SET first_name = ?1, last_name = ?2, phone = ?3, status = 'active'
             WHERE id = ?4",
            params![first, last, phone, id],
        )?;
        Ok(())
    }

    fn write_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
