use anyhow::{Context, anyhow};
use sqlx::SqlitePool;
use tracing::{info, instrument};

use mercury_auth::Role;
use mercury_core::AppError;
use mercury_db::accounts;
use mercury_models::{AccountId, CreateStudentSubjectDto, CreateSubjectDto, Subject};

use crate::utils::db::map_insert_error;

pub struct SubjectService;

impl SubjectService {
    /// Creates a subject and records its teacher assignment in one transaction.
    #[instrument(skip(db))]
    pub async fn create_subject(
        db: &SqlitePool,
        dto: CreateSubjectDto,
    ) -> Result<Subject, AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let teacher = accounts::find_by_id(&mut *tx, dto.teacher_id)
            .await
            .context("Failed to fetch teacher")
            .map_err(AppError::database)?;

        match teacher {
            Some(account) if account.role == Role::Teacher => {}
            Some(_) => {
                return Err(AppError::bad_request(anyhow!(
                    "teacher_id must refer to a teacher"
                )));
            }
            None => return Err(AppError::bad_request(anyhow!("Teacher not found"))),
        }

        let subject = sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (name, class_name, teacher_id) VALUES (?, ?, ?)
             RETURNING id, name, class_name, teacher_id",
        )
        .bind(dto.name.trim())
        .bind(&dto.class_name)
        .bind(dto.teacher_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, "Subject already exists", "Failed to insert subject"))?;

        sqlx::query("INSERT INTO teacher_subjects (user_id, subject_id) VALUES (?, ?)")
            .bind(subject.teacher_id)
            .bind(subject.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                map_insert_error(
                    e,
                    "Teacher already assigned",
                    "Failed to assign subject teacher",
                )
            })?;

        tx.commit()
            .await
            .context("Failed to commit subject")
            .map_err(AppError::database)?;

        info!(subject_id = %subject.id, "Subject created");
        Ok(subject)
    }

    #[instrument(skip(db))]
    pub async fn enrol_student(
        db: &SqlitePool,
        dto: CreateStudentSubjectDto,
    ) -> Result<(), AppError> {
        let student = accounts::find_by_id(db, dto.user_id)
            .await
            .context("Failed to fetch student")
            .map_err(AppError::database)?;

        match student {
            Some(account) if account.role == Role::Student => {}
            Some(_) => {
                return Err(AppError::bad_request(anyhow!(
                    "user_id must refer to a student"
                )));
            }
            None => return Err(AppError::bad_request(anyhow!("Student not found"))),
        }

        sqlx::query("INSERT INTO student_subjects (user_id, subject_id) VALUES (?, ?)")
            .bind(dto.user_id)
            .bind(dto.subject_id)
            .execute(db)
            .await
            .map_err(|e| {
                map_insert_error(
                    e,
                    "Student is already enrolled in this subject",
                    "Failed to enrol student",
                )
            })?;

        Ok(())
    }

    pub async fn list_for_student(
        db: &SqlitePool,
        user_id: AccountId,
    ) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>(
            "SELECT s.id, s.name, s.class_name, s.teacher_id
             FROM subjects s
             JOIN student_subjects ss ON ss.subject_id = s.id
             WHERE ss.user_id = ?
             ORDER BY s.name",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch subjects")
        .map_err(AppError::database)
    }
}
