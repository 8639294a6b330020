use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::users::{UserForm, UserLogic};
use crate::db::pool::DbPool;
use crate::db::service::DataService;
use crate::errors::AppResult;
use crate::models::user::Role;
use crate::models::zone::zone_label;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::User { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        UserAction::Add {
            email,
            first_name,
            last_name,
            phone,
            role,
            employee_number,
            zone,
        } => {
            let form = UserForm {
                email: email.clone(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                phone: phone.clone(),
                role: Role::parse(role)?,
                employee_number: employee_number.clone(),
                zone_id: *zone,
            };
            let user = UserLogic::add(&mut pool, &form)?;
            success(format!(
                "User {} <{}> created ({})",
                user.display_name(),
                user.email,
                user.role.to_db_str()
            ));
        }

        UserAction::List { search } => {
            let users = UserLogic::list(&pool, search.as_deref())?;
            if users.is_empty() {
                info("No users found.");
                return Ok(());
            }

            let zones = pool.list_zones()?;
            let mut table = Table::new(&["Email", "Name", "Role", "Status", "Zone", "Number"]);
            for u in &users {
                table.add_row(vec![
                    u.email.clone(),
                    u.display_name(),
                    u.role.to_db_str().to_string(),
                    u.status.clone(),
                    match u.zone_id {
                        Some(_) => zone_label(u.zone_id, &zones).to_string(),
                        None => "-".to_string(),
                    },
                    u.employee_number.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        UserAction::Del { email } => {
            let user = UserLogic::delete(&mut pool, email)?;
            success(format!("User {} deleted with their time records.", user.email));
        }

        UserAction::Role { email, role } => {
            let user = UserLogic::set_role(&mut pool, email, Role::parse(role)?)?;
            success(format!("{} is now {}.", user.email, user.role.to_db_str()));
        }

        UserAction::Assign { email, zone, none } => {
            let zone_id = if *none { None } else { *zone };
            let user = UserLogic::assign_zone(&mut pool, email, zone_id)?;
            match user.zone_id {
                Some(id) => success(format!("{} assigned to zone #{id}.", user.email)),
                None => success(format!("{} has no assigned zone.", user.email)),
            }
        }

        UserAction::Profile {
            email,
            first_name,
            last_name,
            phone,
        } => {
            let user = UserLogic::complete_profile(&mut pool, email, first_name, last_name, phone)?;
            success(format!("Profile completed for {}.", user.display_name()));
        }
    }

    Ok(())
}
