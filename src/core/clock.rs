use crate::core::calculator::geofence;
use crate::core::calculator::intervals::current_state;
use crate::db::service::{DataService, EventQuery};
use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::models::report::StateSnapshot;
use crate::models::user::User;
use crate::models::zone::{Zone, ZoneId};
use chrono::{DateTime, Utc};

/// What the user asked for on `clock`.
#[derive(Debug, Clone)]
pub struct ClockRequest {
    /// `None` = toggle from the current state.
    pub kind: Option<EventKind>,
    pub coordinate: Option<Coordinate>,
    /// Manual selection, used only when the coordinate resolves to no zone.
    pub manual_zone: Option<ZoneId>,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ClockOutcome {
    pub event: ClockEvent,
    pub zone: Option<Zone>,
    /// True when the zone came from the coordinate rather than `--zone`.
    pub auto_resolved: bool,
    pub before: StateSnapshot,
    pub after: StateSnapshot,
}

impl ClockOutcome {
    /// A clock-in on top of an open clock-in: the earlier one will not count.
    pub fn abandons_previous_in(&self) -> bool {
        self.event.kind.is_in() && self.before.state.is_clocked_in()
    }

    /// A clock-out with nothing to close: kept for audit, worth zero.
    pub fn is_orphan_out(&self) -> bool {
        self.event.kind.is_out() && !self.before.state.is_clocked_in()
    }
}

/// High-level business logic for the `clock` command.
pub struct ClockLogic;

impl ClockLogic {
    /// In when clocked out, out when clocked in.
    pub fn next_action(events: &[ClockEvent]) -> EventKind {
        if current_state(events).state.is_clocked_in() {
            EventKind::ClockOut
        } else {
            EventKind::ClockIn
        }
    }

    /// Pick the zone for a new event: resolved from the coordinate first,
    /// then the manual selection.
    pub fn choose_zone(
        coordinate: Option<&Coordinate>,
        manual: Option<ZoneId>,
        zones: &[Zone],
        require_zone: bool,
    ) -> AppResult<(Option<Zone>, bool)> {
        let resolved = match coordinate {
            Some(c) => geofence::resolve(c, zones)?.cloned(),
            None => None,
        };

        if resolved.is_some() {
            return Ok((resolved, true));
        }

        let manual = match manual {
            Some(id) => Some(
                zones
                    .iter()
                    .find(|z| z.id == id)
                    .cloned()
                    .ok_or(AppError::ZoneNotFound(id))?,
            ),
            None => None,
        };

        if manual.is_none() && require_zone && !zones.is_empty() {
            return Err(AppError::ZoneRequired);
        }

        Ok((manual, false))
    }

    /// Resolve the geofence, tag the event, append it and re-derive the state.
    pub fn apply(
        svc: &mut dyn DataService,
        user: &User,
        req: &ClockRequest,
        require_zone: bool,
    ) -> AppResult<ClockOutcome> {
        let history = svc.list_events(&EventQuery::for_user(user.id))?;

        // state at `req.at`, not at the end of the history: `--at` may backdate
        let prior: Vec<ClockEvent> = history
            .iter()
            .filter(|e| e.timestamp <= req.at)
            .cloned()
            .collect();
        let before = current_state(&prior);

        let kind = req.kind.unwrap_or_else(|| Self::next_action(&prior));

        let zones = svc.list_zones()?;
        let (zone, auto_resolved) =
            Self::choose_zone(req.coordinate.as_ref(), req.manual_zone, &zones, require_zone)?;

        let event = ClockEvent::new(user.id, kind, req.at)
            .with_coordinate(req.coordinate)
            .with_zone(zone.as_ref().map(|z| z.id));

        let saved = svc.append_event(&event)?;

        let mut history = history;
        history.push(saved.clone());
        let after = current_state(&history);

        let where_ = zone.as_ref().map(|z| z.name.as_str()).unwrap_or("Remote");
        svc.write_log(
            "clock",
            &user.email,
            &format!("{} at {} ({})", kind.label(), saved.timestamp.to_rfc3339(), where_),
        )?;

        Ok(ClockOutcome {
            event: saved,
            zone,
            auto_resolved,
            before,
            after,
        })
    }
}
