use anyhow::Context;
use sqlx::SqlitePool;
use tracing::{info, instrument};

use mercury_core::AppError;
use mercury_models::{AccountId, CreateGradeDto, Grade};

use crate::utils::db::map_insert_error;

pub struct GradeService;

impl GradeService {
    #[instrument(skip(db))]
    pub async fn create_grade(db: &SqlitePool, dto: CreateGradeDto) -> Result<Grade, AppError> {
        let grade = sqlx::query_as::<_, Grade>(
            "INSERT INTO grades (user_id, subject_id, grade, grade_type, date)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, user_id, subject_id, grade, grade_type, date",
        )
        .bind(dto.user_id)
        .bind(dto.subject_id)
        .bind(dto.grade.trim())
        .bind(dto.grade_type)
        .bind(dto.date)
        .fetch_one(db)
        .await
        .map_err(|e| map_insert_error(e, "Grade already exists", "Failed to insert grade"))?;

        info!(grade_id = %grade.id, user_id = %grade.user_id, "Grade created");
        Ok(grade)
    }

    pub async fn list_for_student(
        db: &SqlitePool,
        user_id: AccountId,
    ) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(
            "SELECT id, user_id, subject_id, grade, grade_type, date
             FROM grades WHERE user_id = ?
             ORDER BY date, id",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch grades")
        .map_err(AppError::database)
    }
}
