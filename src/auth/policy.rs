//! Per-entity-kind rule sets consulted by the engine.
//!
//! Every function here answers for one entity kind, as an exhaustive match
//! over the principal, with relationship legs resolved through [`graph`]:
//!
//! - profiles (user account, teacher profile, student profile): own row only;
//!   teachers may also delete theirs, students may not
//! - reference data (group, subject, semester, role): readable by anyone
//!   authenticated, writable by admins only
//! - teaching assignments: teachers act on assignments they own; students may
//!   view assignments bound to their group
//! - grades and attendance: writes require owning the anchoring assignment;
//!   teacher reads additionally open up when the record's student is in the
//!   assignment's bound group and the teacher teaches that group; students
//!   read their own rows
//!
//! The engine has already short-circuited admins and checked that the target
//! exists; the admin arms below only keep the matches exhaustive. Anything
//! that matches no rule is denied.

use super::graph;
use super::principal::Principal;
use super::types::{Action, DenyReason, EntityKind, Verdict};
use crate::errors::AppError;
use crate::models::assignment::TeachingAssignment;
use crate::models::attendance::Attendance;
use crate::models::grade::Grade;
use crate::store::AcademicStore;

/// Profile rows are visible and editable only by their holder.
pub(crate) fn profile(principal: &Principal, action: Action, kind: EntityKind, id: i64) -> Verdict {
    let own = match (principal, kind) {
        (Principal::Admin { .. }, _) => return Verdict::Allow,
        (Principal::Teacher { user_id, .. }, EntityKind::User) => *user_id == id,
        (Principal::Teacher { teacher_id, .. }, EntityKind::Teacher) => *teacher_id == id,
        (Principal::Student { user_id, .. }, EntityKind::User) => *user_id == id,
        (Principal::Student { student_id, .. }, EntityKind::Student) => *student_id == id,
        _ => false,
    };
    if !own {
        return Verdict::Deny(DenyReason::Forbidden);
    }
    match (principal, action) {
        (Principal::Teacher { .. }, Action::View | Action::Update | Action::Delete) => {
            Verdict::Allow
        }
        (Principal::Student { .. }, Action::View | Action::Update) => Verdict::Allow,
        _ => Verdict::Deny(DenyReason::Forbidden),
    }
}

/// Reference data is world-readable within the system; only admins write it.
pub(crate) fn reference(action: Action) -> Verdict {
    match action {
        Action::View => Verdict::Allow,
        _ => Verdict::Deny(DenyReason::Forbidden),
    }
}

pub(crate) async fn assignment<S: AcademicStore>(
    store: &S,
    principal: &Principal,
    action: Action,
    target: &TeachingAssignment,
) -> Result<Verdict, AppError> {
    let verdict = match principal {
        Principal::Admin { .. } => Verdict::Allow,
        Principal::Teacher { teacher_id, .. } => {
            if target.teacher_id == *teacher_id {
                Verdict::Allow
            } else {
                Verdict::Deny(DenyReason::Forbidden)
            }
        }
        Principal::Student { student_id, .. } => {
            // Group-less assignments (electives) are not student-visible.
            if action == Action::View
                && target.group_id.is_some()
                && target.group_id == graph::student_group(store, *student_id).await?
            {
                Verdict::Allow
            } else {
                Verdict::Deny(DenyReason::Forbidden)
            }
        }
    };
    Ok(verdict)
}

pub(crate) async fn grade<S: AcademicStore>(
    store: &S,
    principal: &Principal,
    action: Action,
    target: &Grade,
) -> Result<Verdict, AppError> {
    anchored_record(store, principal, action, target.assignment_id, target.student_id).await
}

pub(crate) async fn attendance<S: AcademicStore>(
    store: &S,
    principal: &Principal,
    action: Action,
    target: &Attendance,
) -> Result<Verdict, AppError> {
    anchored_record(store, principal, action, target.assignment_id, target.student_id).await
}

/// Shared rule for records anchored to one assignment and one student.
///
/// A broken anchor (the assignment or student behind the record is gone)
/// surfaces as NotFound, the same as a missing record.
async fn anchored_record<S: AcademicStore>(
    store: &S,
    principal: &Principal,
    action: Action,
    assignment_id: i64,
    student_id: i64,
) -> Result<Verdict, AppError> {
    let verdict = match principal {
        Principal::Admin { .. } => Verdict::Allow,
        Principal::Teacher { teacher_id, .. } => match action {
            Action::Update | Action::Delete => {
                match graph::assignment_owner(store, assignment_id).await? {
                    None => Verdict::Deny(DenyReason::NotFound),
                    Some(owner) if owner == *teacher_id => Verdict::Allow,
                    Some(_) => Verdict::Deny(DenyReason::Forbidden),
                }
            }
            Action::View => {
                let (assignment, student) = tokio::try_join!(
                    store.assignment(assignment_id),
                    store.student(student_id),
                )?;
                let Some(assignment) = assignment else {
                    return Ok(Verdict::Deny(DenyReason::NotFound));
                };
                if assignment.teacher_id == *teacher_id {
                    return Ok(Verdict::Allow);
                }
                let Some(student) = student else {
                    return Ok(Verdict::Deny(DenyReason::NotFound));
                };
                match assignment.group_id {
                    Some(group_id) if student.group_id == group_id => {
                        if graph::teaches_group(store, *teacher_id, group_id).await? {
                            Verdict::Allow
                        } else {
                            Verdict::Deny(DenyReason::Forbidden)
                        }
                    }
                    _ => Verdict::Deny(DenyReason::Forbidden),
                }
            }
            _ => Verdict::Deny(DenyReason::Forbidden),
        },
        Principal::Student { student_id: own, .. } => {
            if action == Action::View && student_id == *own {
                Verdict::Allow
            } else {
                Verdict::Deny(DenyReason::Forbidden)
            }
        }
    };
    Ok(verdict)
}

/// Creation of a grade or attendance row: the acting teacher must own the
/// assignment, and when the assignment binds a group the target student must
/// be in it. Electives bind no group, so ownership alone governs there.
pub(crate) async fn create_anchored<S: AcademicStore>(
    store: &S,
    principal: &Principal,
    assignment_id: i64,
    student_id: i64,
) -> Result<Verdict, AppError> {
    let Principal::Teacher { teacher_id, .. } = principal else {
        return Ok(match principal {
            Principal::Admin { .. } => Verdict::Allow,
            _ => Verdict::Deny(DenyReason::Forbidden),
        });
    };
    let (assignment, student) =
        tokio::try_join!(store.assignment(assignment_id), store.student(student_id))?;
    let (Some(assignment), Some(student)) = (assignment, student) else {
        return Ok(Verdict::Deny(DenyReason::NotFound));
    };
    if assignment.teacher_id != *teacher_id {
        return Ok(Verdict::Deny(DenyReason::Forbidden));
    }
    if let Some(group_id) = assignment.group_id {
        if student.group_id != group_id {
            return Ok(Verdict::Deny(DenyReason::Forbidden));
        }
    }
    Ok(Verdict::Allow)
}

/// Teachers may create assignments for themselves; everything else is admin
/// provisioning.
pub(crate) async fn create_assignment<S: AcademicStore>(
    store: &S,
    principal: &Principal,
    teacher_id: i64,
) -> Result<Verdict, AppError> {
    let verdict = match principal {
        Principal::Admin { .. } => Verdict::Allow,
        Principal::Teacher { teacher_id: own, .. } => {
            if store.teacher(teacher_id).await?.is_none() {
                Verdict::Deny(DenyReason::NotFound)
            } else if teacher_id == *own {
                Verdict::Allow
            } else {
                Verdict::Deny(DenyReason::Forbidden)
            }
        }
        Principal::Student { .. } => Verdict::Deny(DenyReason::Forbidden),
    };
    Ok(verdict)
}
