use crate::errors::AppError;

/// Operations the engine rules on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    ViewAll,
    Create,
    Update,
    Delete,
}

/// Record kinds the policy tables know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Teacher,
    Student,
    Group,
    Subject,
    Semester,
    Role,
    Assignment,
    Grade,
    Attendance,
}

/// What a decision is about. Existing records go by kind and id; creations
/// carry the foreign keys their relationship checks need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRef {
    Entity { kind: EntityKind, id: i64 },
    Collection { kind: EntityKind },
    NewGrade { assignment_id: i64, student_id: i64 },
    NewAttendance { assignment_id: i64, student_id: i64 },
    NewAssignment { teacher_id: i64 },
    NewEntity { kind: EntityKind },
}

impl TargetRef {
    /// Whether this target shape can be paired with the action at all.
    pub(crate) fn accepts(&self, action: Action) -> bool {
        match self {
            TargetRef::Entity { .. } => {
                matches!(action, Action::View | Action::Update | Action::Delete)
            }
            TargetRef::Collection { .. } => action == Action::ViewAll,
            _ => action == Action::Create,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The acting user could not be resolved. Checked before anything else,
    /// never masked as Forbidden.
    Unauthenticated,
    /// The target (or a record it references) does not exist. Kept distinct
    /// from Forbidden so handlers can answer 404 instead of 403.
    NotFound,
    /// The principal is known and the target exists, but no rule grants the
    /// action.
    Forbidden,
    /// Policy-table gap or malformed target. A caller bug, not a runtime
    /// condition.
    Unsupported,
}

/// Outcome of a permission decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Deny(DenyReason),
}

impl Verdict {
    pub fn is_allow(self) -> bool {
        self == Verdict::Allow
    }

    /// Turn a denial into the typed error handlers map to a response.
    pub fn require(self) -> Result<(), AppError> {
        match self {
            Verdict::Allow => Ok(()),
            Verdict::Deny(DenyReason::Unauthenticated) => Err(AppError::Unauthenticated),
            Verdict::Deny(DenyReason::NotFound) => Err(AppError::NotFound),
            Verdict::Deny(DenyReason::Forbidden) => Err(AppError::Forbidden),
            Verdict::Deny(DenyReason::Unsupported) => Err(AppError::Unsupported),
        }
    }
}
