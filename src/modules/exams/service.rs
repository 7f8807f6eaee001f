use anyhow::Context;
use sqlx::SqlitePool;
use tracing::{info, instrument};

use mercury_core::AppError;
use mercury_models::{CreateExamDto, Exam};

use crate::utils::db::map_insert_error;

pub struct ExamService;

impl ExamService {
    #[instrument(skip(db))]
    pub async fn create_exam(db: &SqlitePool, dto: CreateExamDto) -> Result<Exam, AppError> {
        let exam = sqlx::query_as::<_, Exam>(
            "INSERT INTO exams (class_name, subject_id, teacher_id, date, exam_type, description)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, class_name, subject_id, teacher_id, date, exam_type, description",
        )
        .bind(&dto.class_name)
        .bind(dto.subject_id)
        .bind(dto.teacher_id)
        .bind(dto.date)
        .bind(dto.exam_type.trim())
        .bind(dto.description.trim())
        .fetch_one(db)
        .await
        .map_err(|e| map_insert_error(e, "Exam already exists", "Failed to insert exam"))?;

        info!(exam_id = %exam.id, class = %exam.class_name, "Exam created");
        Ok(exam)
    }

    pub async fn list(db: &SqlitePool, class_name: Option<&str>) -> Result<Vec<Exam>, AppError> {
        let exams = match class_name {
            Some(class_name) => {
                sqlx::query_as::<_, Exam>(
                    "SELECT id, class_name, subject_id, teacher_id, date, exam_type, description
                     FROM exams WHERE class_name = ?
                     ORDER BY date, id",
                )
                .bind(class_name)
                .fetch_all(db)
                .await
            }
            None => {
                sqlx::query_as::<_, Exam>(
                    "SELECT id, class_name, subject_id, teacher_id, date, exam_type, description
                     FROM exams ORDER BY date, id",
                )
                .fetch_all(db)
                .await
            }
        };

        exams
            .context("Failed to fetch exams")
            .map_err(AppError::database)
    }
}
