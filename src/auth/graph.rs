//! Read-only relationship queries over the academic graph.
//!
//! ```text
//! grade/attendance --(anchored_to)--> teaching_assignment --(owned_by)--> teacher
//!                                     teaching_assignment --(bound_to)--> group (optional)
//! student --(member_of)--> group
//! ```
//!
//! Each query is a point lookup against the store at call time; nothing is
//! cached across requests. The queries are independent reads, so the engine
//! is free to issue several concurrently within one decision.

use crate::errors::AppError;
use crate::store::AcademicStore;

/// Teacher owning the assignment, or `None` for an unknown assignment.
pub async fn assignment_owner<S: AcademicStore>(
    store: &S,
    assignment_id: i64,
) -> Result<Option<i64>, AppError> {
    Ok(store.assignment(assignment_id).await?.map(|a| a.teacher_id))
}

/// Group the assignment is bound to. Outer `None` means no such assignment;
/// inner `None` means a group-less (elective) assignment.
pub async fn assignment_group<S: AcademicStore>(
    store: &S,
    assignment_id: i64,
) -> Result<Option<Option<i64>>, AppError> {
    Ok(store.assignment(assignment_id).await?.map(|a| a.group_id))
}

/// Group the student currently belongs to.
pub async fn student_group<S: AcademicStore>(
    store: &S,
    student_id: i64,
) -> Result<Option<i64>, AppError> {
    Ok(store.student(student_id).await?.map(|s| s.group_id))
}

/// Assignment a grade is anchored to.
pub async fn grade_assignment<S: AcademicStore>(
    store: &S,
    grade_id: i64,
) -> Result<Option<i64>, AppError> {
    Ok(store.grade(grade_id).await?.map(|g| g.assignment_id))
}

/// Assignment an attendance row is anchored to.
pub async fn attendance_assignment<S: AcademicStore>(
    store: &S,
    attendance_id: i64,
) -> Result<Option<i64>, AppError> {
    Ok(store.attendance(attendance_id).await?.map(|a| a.assignment_id))
}

/// Whether the teacher owns at least one assignment bound to the group.
pub async fn teaches_group<S: AcademicStore>(
    store: &S,
    teacher_id: i64,
    group_id: i64,
) -> Result<bool, AppError> {
    store.teacher_owns_group_assignment(teacher_id, group_id).await
}
