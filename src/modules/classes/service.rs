use anyhow::{Context, anyhow};
use sqlx::SqlitePool;
use tracing::{info, instrument};

use mercury_core::AppError;
use mercury_models::{Class, ClassMember, ClassMemberInfo, CreateClassDto, CreateClassMemberDto};

use crate::utils::db::map_insert_error;

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db))]
    pub async fn create_class(db: &SqlitePool, dto: CreateClassDto) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(
            "INSERT INTO classes (name) VALUES (?) RETURNING id, name",
        )
        .bind(dto.name.trim())
        .fetch_one(db)
        .await
        .map_err(|e| map_insert_error(e, "Class already exists", "Failed to insert class"))?;

        info!(class = %class.name, "Class created");
        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn add_member(
        db: &SqlitePool,
        dto: CreateClassMemberDto,
    ) -> Result<ClassMember, AppError> {
        sqlx::query_as::<_, ClassMember>(
            "INSERT INTO class_members (user_id, class_name) VALUES (?, ?)
             RETURNING id, user_id, class_name",
        )
        .bind(dto.user_id)
        .bind(&dto.class_name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            map_insert_error(
                e,
                "User is already a member of this class",
                "Failed to insert class member",
            )
        })
    }

    /// Members of `class_name` with their names, ordered by last name.
    pub async fn list_members(
        db: &SqlitePool,
        class_name: &str,
    ) -> Result<Vec<ClassMemberInfo>, AppError> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM classes WHERE name = ?")
            .bind(class_name)
            .fetch_optional(db)
            .await
            .context("Failed to fetch class")
            .map_err(AppError::database)?;

        if exists.is_none() {
            return Err(AppError::not_found(anyhow!("Class not found")));
        }

        sqlx::query_as::<_, ClassMemberInfo>(
            "SELECT u.uid AS user_id, u.email, u.role, p.first_name, p.last_name
             FROM class_members cm
             JOIN users u ON u.uid = cm.user_id
             LEFT JOIN persons p ON p.user_id = u.uid
             WHERE cm.class_name = ?
             ORDER BY p.last_name, p.first_name, u.uid",
        )
        .bind(class_name)
        .fetch_all(db)
        .await
        .context("Failed to fetch class members")
        .map_err(AppError::database)
    }
}
