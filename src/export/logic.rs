// src/export/logic.rs

use crate::db::service::{DataService, EventQuery};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::build_rows;
use crate::export::notify_export_success;
use crate::ui::messages::{info, warning};
use crate::utils::date::{parse_range, window_for_days};
use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Default export file name, e.g. `time_records_2025-03-03.csv`.
    pub fn default_file_name(today: NaiveDate, format: &ExportFormat) -> String {
        format!("time_records_{}.{}", today.format("%Y-%m-%d"), format.as_str())
    }

    /// Export raw clock events.
    ///
    /// - `users`: emails to include; empty = every user
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `A:B`
    ///
    /// Returns the number of rows written (0 = nothing to export, no file created).
    pub fn export(
        svc: &mut dyn DataService,
        format: ExportFormat,
        file: Option<&str>,
        users: &[String],
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path: PathBuf = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(Self::default_file_name(Local::now().date_naive(), &format)),
        };

        let mut query = EventQuery::default();

        for email in users {
            let user = svc
                .find_user_by_email(email)?
                .ok_or_else(|| AppError::UserNotFound(email.clone()))?;
            query.user_ids.push(user.id);
        }

        if let Some(r) = range
            && !r.eq_ignore_ascii_case("all")
        {
            let (first, last) = parse_range(r).map_err(AppError::InvalidDate)?;
            let window = window_for_days(first, last, &Local);
            query = query.since(window.start).until(window.end);
        }

        let events = svc.list_events(&query)?;
        if events.is_empty() {
            warning("No time records found for the selected filters.");
            return Ok(0);
        }

        let all_users = svc.list_users()?;
        let zones = svc.list_zones()?;
        let rows = build_rows(&events, &all_users, &zones, &Local);

        ensure_writable(&path, force)?;
        write_rows(&path, &format, &rows)?;

        notify_export_success(format.label(), &path);

        svc.write_log(
            "export",
            &path.display().to_string(),
            &format!("Exported {} time records as {}", rows.len(), format.as_str()),
        )?;

        Ok(rows.len())
    }
}

fn write_rows(
    path: &Path,
    format: &ExportFormat,
    rows: &[crate::export::model::ExportRow],
) -> AppResult<()> {
    info(format!("Exporting to {}: {}", format.label(), path.display()));

    let out = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => write_csv(out, rows),
        ExportFormat::Json => write_json(out, rows),
    }
}
