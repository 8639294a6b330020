use crate::db::service::DataService;
use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, User};
use crate::models::zone::ZoneId;
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").expect("phone pattern")
});

pub fn validate_email(email: &str) -> AppResult<()> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(AppError::InvalidEmail(email.to_string()))
    }
}

pub fn validate_phone(phone: &str) -> AppResult<()> {
    if PHONE_RE.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(AppError::InvalidPhone(phone.to_string()))
    }
}

/// New-user form (admin screen).
#[derive(Debug, Clone)]
pub struct UserForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: Role,
    pub employee_number: String,
    pub zone_id: Option<ZoneId>,
}

impl UserForm {
    pub fn validate(&self) -> AppResult<User> {
        let required = [
            ("email", &self.email),
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("phone", &self.phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(field));
            }
        }

        validate_email(&self.email)?;
        validate_phone(&self.phone)?;

        Ok(User {
            id: 0,
            email: self.email.trim().to_lowercase(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role,
            status: "active".to_string(),
            employee_number: self.employee_number.trim().to_string(),
            zone_id: self.zone_id,
            created_at: Utc::now().to_rfc3339(),
        })
    }
}

pub struct UserLogic;

impl UserLogic {
    pub fn find(svc: &dyn DataService, email: &str) -> AppResult<User> {
        svc.find_user_by_email(email)?
            .ok_or_else(|| AppError::UserNotFound(email.to_string()))
    }

    /// The acting user: `--user` first, then `default_user` from the configuration.
    pub fn acting(
        svc: &dyn DataService,
        flag: Option<&str>,
        default_user: Option<&str>,
    ) -> AppResult<User> {
        let email = flag.or(default_user).ok_or(AppError::NoUserSelected)?;
        Self::find(svc, email)
    }

    pub fn add(svc: &mut dyn DataService, form: &UserForm) -> AppResult<User> {
        let user = form.validate()?;

        if svc.find_user_by_email(&user.email)?.is_some() {
            return Err(AppError::InvalidEmail(format!(
                "{} is already registered",
                user.email
            )));
        }
        if let Some(zone_id) = user.zone_id
            && svc.find_zone(zone_id)?.is_none()
        {
            return Err(AppError::ZoneNotFound(zone_id));
        }

        let saved = svc.add_user(&user)?;
        svc.write_log(
            "user_add",
            &saved.email,
            &format!("Created {} ({})", saved.display_name(), saved.role.to_db_str()),
        )?;
        Ok(saved)
    }

    /// Users whose name or email contains `search` (case-insensitive), newest first.
    pub fn list(svc: &dyn DataService, search: Option<&str>) -> AppResult<Vec<User>> {
        let users = svc.list_users()?;
        let Some(q) = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty()) else {
            return Ok(users);
        };

        Ok(users
            .into_iter()
            .filter(|u| {
                u.email.to_lowercase().contains(&q)
                    || format!("{} {}", u.first_name, u.last_name)
                        .to_lowercase()
                        .contains(&q)
            })
            .collect())
    }

    pub fn delete(svc: &mut dyn DataService, email: &str) -> AppResult<User> {
        let user = Self::find(svc, email)?;
        svc.delete_user(user.id)?;
        svc.write_log("user_del", &user.email, "Deleted user and their time records")?;
        Ok(user)
    }

    pub fn set_role(svc: &mut dyn DataService, email: &str, role: Role) -> AppResult<User> {
        let mut user = Self::find(svc, email)?;
        svc.update_role(user.id, role)?;
        svc.write_log(
            "user_role",
            &user.email,
            &format!("{} → {}", user.role.to_db_str(), role.to_db_str()),
        )?;
        user.role = role;
        Ok(user)
    }

    pub fn assign_zone(
        svc: &mut dyn DataService,
        email: &str,
        zone_id: Option<ZoneId>,
    ) -> AppResult<User> {
        let mut user = Self::find(svc, email)?;

        let label = match zone_id {
            Some(id) => svc.find_zone(id)?.ok_or(AppError::ZoneNotFound(id))?.name,
            None => "none".to_string(),
        };

        svc.assign_zone(user.id, zone_id)?;
        svc.write_log("user_assign", &user.email, &format!("Assigned zone: {label}"))?;
        user.zone_id = zone_id;
        Ok(user)
    }

    /// Complete-profile form: names and phone are required.
    pub fn complete_profile(
        svc: &mut dyn DataService,
        email: &str,
        first: &str,
        last: &str,
        phone: &str,
    ) -> AppResult<User> {
        let mut user = Self::find(svc, email)?;

        for (field, value) in [("first name", first), ("last name", last), ("phone", phone)] {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(field));
            }
        }
        validate_phone(phone)?;

        svc.update_profile(user.id, first.trim(), last.trim(), phone.trim())?;
        svc.write_log("user_profile", &user.email, "Profile completed")?;

        user.first_name = first.trim().to_string();
        user.last_name = last.trim().to_string();
        user.phone = phone.trim().to_string();
        user.status = "active".to_string();
        Ok(user)
    }
}
