use crate::cli::parser::{Commands, ZoneAction};
use crate::config::Config;
use crate::core::zones::{ZoneForm, ZoneLogic};
use crate::db::pool::DbPool;
use crate::db::service::DataService;
use crate::errors::AppResult;
use crate::models::coordinate::Coordinate;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Zone { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        ZoneAction::Add {
            name,
            address,
            lat,
            lon,
            radius,
        } => {
            let form = ZoneForm {
                name: name.clone(),
                address: address.clone(),
                latitude: lat.clone(),
                longitude: lon.clone(),
                radius: radius.clone(),
            };
            let zone = ZoneLogic::add(&mut pool, &form)?;
            success(format!(
                "Zone #{} '{}' added: {} m around ({})",
                zone.id, zone.name, zone.radius_meters, zone.center
            ));
        }

        ZoneAction::List => {
            let zones = pool.list_zones()?;
            if zones.is_empty() {
                info("No zones registered.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "Address", "Center", "Radius (m)"]);
            for z in &zones {
                table.add_row(vec![
                    z.id.to_string(),
                    z.name.clone(),
                    z.address.clone(),
                    z.center.to_string(),
                    format!("{:.0}", z.radius_meters),
                ]);
            }
            print!("{}", table.render());
        }

        ZoneAction::Del { id } => {
            let zone = ZoneLogic::delete(&mut pool, *id)?;
            success(format!("Zone #{} '{}' deleted.", zone.id, zone.name));
        }

        ZoneAction::Locate { lat, lon } => {
            let point = Coordinate::parse(lat, lon)?;
            let (resolved, ranked) = ZoneLogic::locate(&pool, &point)?;

            match &resolved {
                Some(z) => success(format!("({point}) is inside zone #{} '{}'", z.id, z.name)),
                None => warning(format!("({point}) is not inside any zone")),
            }

            if !ranked.is_empty() {
                let mut table = Table::new(&["ID", "Name", "Distance (m)", "Radius (m)", "Inside"]);
                for (z, distance, inside) in &ranked {
                    table.add_row(vec![
                        z.id.to_string(),
                        z.name.clone(),
                        format!("{distance:.1}"),
                        format!("{:.0}", z.radius_meters),
                        if *inside { "yes" } else { "no" }.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
