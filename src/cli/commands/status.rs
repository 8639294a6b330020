use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::users::UserLogic;
use crate::db::pool::DbPool;
use crate::db::service::{DataService, EventQuery};
use crate::errors::AppResult;
use crate::models::zone::zone_label;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_state};
use crate::utils::format_hours;
use crate::utils::table::Table;
use chrono::{Local, Utc};

/// Dashboard: current state, today / week / month totals and recent activity.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let user = UserLogic::acting(&pool, cli.user.as_deref(), cfg.default_user.as_deref())?;

    let events = pool.list_events(&EventQuery::for_user(user.id))?;
    let zones = pool.list_zones()?;

    let d = Core::build_dashboard(&events, Utc::now(), &Local, cfg.week_start, cfg.recent_activity);

    header(format!("{} <{}>", user.display_name(), user.email));

    let clocked_in = d.snapshot.state.is_clocked_in();
    let state = if clocked_in { "Clocked In" } else { "Clocked Out" };
    let since = match (&d.snapshot.last_event, clocked_in) {
        (Some(ev), true) => format!(
            " since {} · {}",
            ev.local().format(&cfg.time_format),
            zone_label(ev.zone_id, &zones)
        ),
        _ => String::new(),
    };

    println!("Status     : {}{}{}{}", color_for_state(clocked_in), state, RESET, since);
    println!("Today      : {}", format_hours(d.today_hours));
    println!("This week  : {}", format_hours(d.week_hours));
    println!("This month : {}", format_hours(d.month_hours));

    if d.recent.is_empty() {
        println!("\nNo recent activity.");
        return Ok(());
    }

    println!("\nRecent activity:");
    let mut table = Table::new(&["Date", "Time", "Type", "Location"]);
    for ev in &d.recent {
        let local = ev.local();
        table.add_row(vec![
            local.format("%Y-%m-%d").to_string(),
            local.format(&cfg.time_format).to_string(),
            ev.kind.describe().to_string(),
            zone_label(ev.zone_id, &zones).to_string(),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
