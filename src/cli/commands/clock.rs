use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::{ClockLogic, ClockRequest};
use crate::core::logic::Core;
use crate::core::users::UserLogic;
use crate::db::pool::DbPool;
use crate::db::service::{DataService, EventQuery};
use crate::errors::AppResult;
use crate::models::coordinate::Coordinate;
use crate::ui::messages::{info, success, warning};
use crate::utils::{describe_kind, format_hours, time::parse_instant};
use chrono::{Local, Utc};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        kind,
        lat,
        lon,
        zone,
        at,
    } = &cli.command
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = UserLogic::acting(&pool, cli.user.as_deref(), cfg.default_user.as_deref())?;

        let coordinate = match (lat, lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::parse(lat, lon)?),
            _ => None,
        };

        let now = Utc::now();
        let at = match at {
            Some(s) => parse_instant(s, now, &Local)?,
            None => now,
        };

        let req = ClockRequest {
            kind: *kind,
            coordinate,
            manual_zone: *zone,
            at,
        };

        let outcome = ClockLogic::apply(&mut pool, &user, &req, cfg.require_zone)?;

        let where_ = match (&outcome.zone, outcome.auto_resolved) {
            (Some(z), true) => format!("{} (detected)", z.name),
            (Some(z), false) => z.name.clone(),
            (None, _) => "Remote".to_string(),
        };

        success(format!(
            "{} for {} at {} · {}",
            describe_kind(outcome.event.kind),
            user.display_name(),
            outcome.event.local().format(&cfg.time_format),
            where_
        ));

        if outcome.abandons_previous_in()
            && let Some(prev) = &outcome.before.last_event
        {
            warning(format!(
                "Already clocked in since {}: that clock-in will not be counted.",
                prev.local().format(&cfg.time_format)
            ));
        }

        if outcome.is_orphan_out() {
            warning("Not clocked in: this clock-out adds no worked time.");
        }

        let events = pool.list_events(&EventQuery::for_user(user.id))?;
        let dashboard = Core::build_dashboard(&events, now, &Local, cfg.week_start, 0);
        info(format!("Today: {}", format_hours(dashboard.today_hours)));
    }

    Ok(())
}
