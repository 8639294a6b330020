use crate::cli::parser::{Cli, Commands, HistoryFilter};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::users::UserLogic;
use crate::db::pool::DbPool;
use crate::db::service::{DataService, EventQuery};
use crate::errors::{AppError, AppResult};
use crate::models::zone::zone_label;
use crate::ui::messages::{header, info};
use crate::utils::date::parse_range;
use crate::utils::format_hours;
use crate::utils::formatting::hours_short;
use crate::utils::table::Table;
use chrono::{Days, Local, NaiveDate, Utc};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::History { filter, period } = &cli.command {
        let pool = DbPool::new(&cfg.database)?;
        let user = UserLogic::acting(&pool, cli.user.as_deref(), cfg.default_user.as_deref())?;

        let now = Utc::now();
        let today = now.with_timezone(&Local).date_naive();

        let bounds: Option<(NaiveDate, NaiveDate)> = match (period, filter) {
            (Some(p), _) => Some(parse_range(p).map_err(AppError::InvalidDate)?),
            (None, HistoryFilter::Week) => Some((today - Days::new(6), today)),
            (None, HistoryFilter::Month) => Some((today - Days::new(29), today)),
            (None, HistoryFilter::All) => None,
        };

        // full history: a shift started before the range still closes inside it
        let events = pool.list_events(&EventQuery::for_user(user.id))?;
        let zones = pool.list_zones()?;

        let days: Vec<_> = Core::build_history(&events, now, &Local)
            .into_iter()
            .filter(|g| bounds.is_none_or(|(first, last)| g.date >= first && g.date <= last))
            .collect();

        if days.is_empty() {
            info("No time records found.");
            return Ok(());
        }

        let mut total = 0.0;
        for day in &days {
            header(format!(
                "{} · {}",
                day.date.format("%a %Y-%m-%d"),
                hours_short(day.total_hours)
            ));

            let mut table = Table::new(&["Time", "Type", "Location", "Coordinates"]);
            for ev in &day.events {
                table.add_row(vec![
                    ev.local().format(&cfg.time_format).to_string(),
                    ev.kind.describe().to_string(),
                    zone_label(ev.zone_id, &zones).to_string(),
                    ev.coordinate.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
                ]);
            }
            print!("{}", table.render());
            total += day.total_hours;
        }

        println!();
        info(format!("Total: {} over {} day(s)", format_hours(total), days.len()));
    }

    Ok(())
}
