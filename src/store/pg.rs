use sqlx::PgPool;

use super::AcademicStore;
use crate::errors::AppError;
use crate::models;
use crate::models::assignment::TeachingAssignment;
use crate::models::attendance::Attendance;
use crate::models::grade::Grade;
use crate::models::reference::RefKind;
use crate::models::student::Student;
use crate::models::teacher::Teacher;

/// Postgres-backed store, delegating to the id-keyed model queries.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl AcademicStore for PgStore {
    async fn user_role(&self, user_id: i64) -> Result<Option<String>, AppError> {
        Ok(models::user::queries::role_name(&self.pool, user_id).await?)
    }

    async fn user_exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(models::user::queries::exists(&self.pool, id).await?)
    }

    async fn teacher(&self, id: i64) -> Result<Option<Teacher>, AppError> {
        Ok(models::teacher::queries::find_by_id(&self.pool, id).await?)
    }

    async fn teacher_by_user(&self, user_id: i64) -> Result<Option<Teacher>, AppError> {
        Ok(models::teacher::queries::find_by_user_id(&self.pool, user_id).await?)
    }

    async fn student(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(models::student::queries::find_by_id(&self.pool, id).await?)
    }

    async fn student_by_user(&self, user_id: i64) -> Result<Option<Student>, AppError> {
        Ok(models::student::queries::find_by_user_id(&self.pool, user_id).await?)
    }

    async fn assignment(&self, id: i64) -> Result<Option<TeachingAssignment>, AppError> {
        Ok(models::assignment::queries::find_by_id(&self.pool, id).await?)
    }

    async fn grade(&self, id: i64) -> Result<Option<Grade>, AppError> {
        Ok(models::grade::queries::find_by_id(&self.pool, id).await?)
    }

    async fn attendance(&self, id: i64) -> Result<Option<Attendance>, AppError> {
        Ok(models::attendance::queries::find_by_id(&self.pool, id).await?)
    }

    async fn teacher_owns_group_assignment(
        &self,
        teacher_id: i64,
        group_id: i64,
    ) -> Result<bool, AppError> {
        Ok(models::assignment::queries::owns_group_assignment(&self.pool, teacher_id, group_id)
            .await?)
    }

    async fn reference_exists(&self, kind: RefKind, id: i64) -> Result<bool, AppError> {
        Ok(models::reference::exists(&self.pool, kind, id).await?)
    }
}
