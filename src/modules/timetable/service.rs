use anyhow::Context;
use sqlx::SqlitePool;
use tracing::{info, instrument};

use mercury_core::AppError;
use mercury_models::{CreateTimetableEntryDto, TimetableEntry};

use crate::utils::db::map_insert_error;

const ENTRY_COLUMNS: &str =
    "id, day, subject_id, time_start, time_end, room, teacher_id, class_name";

pub struct TimetableService;

impl TimetableService {
    #[instrument(skip(db))]
    pub async fn create_entry(
        db: &SqlitePool,
        dto: CreateTimetableEntryDto,
    ) -> Result<TimetableEntry, AppError> {
        let entry = sqlx::query_as::<_, TimetableEntry>(&format!(
            "INSERT INTO timetable (day, subject_id, time_start, time_end, room, teacher_id, class_name)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {ENTRY_COLUMNS}"
        ))
        .bind(dto.day.trim())
        .bind(dto.subject_id)
        .bind(&dto.start_time)
        .bind(&dto.end_time)
        .bind(dto.room.trim())
        .bind(dto.teacher_id)
        .bind(&dto.class_name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            map_insert_error(
                e,
                "Timetable entry already exists",
                "Failed to insert timetable entry",
            )
        })?;

        info!(entry_id = %entry.id, class = %entry.class_name, "Timetable entry created");
        Ok(entry)
    }

    /// Lists entries, optionally only those of one class.
    pub async fn list(
        db: &SqlitePool,
        class_name: Option<&str>,
    ) -> Result<Vec<TimetableEntry>, AppError> {
        let entries = match class_name {
            Some(class_name) => {
                sqlx::query_as::<_, TimetableEntry>(&format!(
                    "SELECT {ENTRY_COLUMNS} FROM timetable WHERE class_name = ?
                     ORDER BY day, time_start, id"
                ))
                .bind(class_name)
                .fetch_all(db)
                .await
            }
            None => {
                sqlx::query_as::<_, TimetableEntry>(&format!(
                    "SELECT {ENTRY_COLUMNS} FROM timetable ORDER BY class_name, day, time_start, id"
                ))
                .fetch_all(db)
                .await
            }
        };

        entries
            .context("Failed to fetch timetable")
            .map_err(AppError::database)
    }
}
