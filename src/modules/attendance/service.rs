use anyhow::Context;
use sqlx::SqlitePool;
use tracing::{info, instrument};

use mercury_core::AppError;
use mercury_models::{AccountId, Attendance, CreateAttendanceDto};

use crate::utils::db::map_insert_error;

pub struct AttendanceService;

impl AttendanceService {
    #[instrument(skip(db))]
    pub async fn record(db: &SqlitePool, dto: CreateAttendanceDto) -> Result<Attendance, AppError> {
        let record = sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendance (user_id, subject_id, date, status)
             VALUES (?, ?, ?, ?)
             RETURNING id, user_id, subject_id, date, status",
        )
        .bind(dto.user_id)
        .bind(dto.subject_id)
        .bind(dto.date)
        .bind(dto.status)
        .fetch_one(db)
        .await
        .map_err(|e| {
            map_insert_error(e, "Attendance already recorded", "Failed to insert attendance")
        })?;

        info!(record_id = %record.id, user_id = %record.user_id, "Attendance recorded");
        Ok(record)
    }

    pub async fn list_for_student(
        db: &SqlitePool,
        user_id: AccountId,
    ) -> Result<Vec<Attendance>, AppError> {
        sqlx::query_as::<_, Attendance>(
            "SELECT id, user_id, subject_id, date, status
             FROM attendance WHERE user_id = ?
             ORDER BY date, id",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch attendance")
        .map_err(AppError::database)
    }
}
