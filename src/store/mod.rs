//! The read-only data-access boundary the permission core consults.
//!
//! Everything the engine knows about the world comes through
//! [`AcademicStore`]: point lookups and existence probes, no writes. The
//! production implementation is [`PgStore`]; [`MemStore`] backs the test
//! suite and Postgres-free embedders.

pub mod mem;
pub mod pg;

pub use mem::MemStore;
pub use pg::PgStore;

use crate::errors::AppError;
use crate::models::assignment::TeachingAssignment;
use crate::models::attendance::Attendance;
use crate::models::grade::Grade;
use crate::models::reference::RefKind;
use crate::models::student::Student;
use crate::models::teacher::Teacher;

/// Each call reflects the store at call time; nothing is cached across
/// requests. `Err` means an infrastructure fault, never an authorization
/// outcome.
#[allow(async_fn_in_trait)]
pub trait AcademicStore: Send + Sync {
    /// Role name for a user account, or `None` for an unknown user.
    async fn user_role(&self, user_id: i64) -> Result<Option<String>, AppError>;

    async fn user_exists(&self, id: i64) -> Result<bool, AppError>;

    async fn teacher(&self, id: i64) -> Result<Option<Teacher>, AppError>;

    async fn teacher_by_user(&self, user_id: i64) -> Result<Option<Teacher>, AppError>;

    async fn student(&self, id: i64) -> Result<Option<Student>, AppError>;

    async fn student_by_user(&self, user_id: i64) -> Result<Option<Student>, AppError>;

    async fn assignment(&self, id: i64) -> Result<Option<TeachingAssignment>, AppError>;

    async fn grade(&self, id: i64) -> Result<Option<Grade>, AppError>;

    async fn attendance(&self, id: i64) -> Result<Option<Attendance>, AppError>;

    /// Whether the teacher owns at least one assignment bound to the group.
    async fn teacher_owns_group_assignment(
        &self,
        teacher_id: i64,
        group_id: i64,
    ) -> Result<bool, AppError>;

    async fn reference_exists(&self, kind: RefKind, id: i64) -> Result<bool, AppError>;
}
