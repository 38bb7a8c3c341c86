use crate::errors::AppError;
use crate::store::AcademicStore;

/// Closed set of roles. Role names coming out of the store are parsed into
/// this once, at the boundary; nothing downstream compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            _ => None,
        }
    }
}

/// The acting account, resolved fresh per request. Teachers and students
/// carry their profile id; nothing else about the account matters to the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Admin { user_id: i64 },
    Teacher { user_id: i64, teacher_id: i64 },
    Student { user_id: i64, student_id: i64 },
}

impl Principal {
    pub fn user_id(&self) -> i64 {
        match *self {
            Principal::Admin { user_id }
            | Principal::Teacher { user_id, .. }
            | Principal::Student { user_id, .. } => user_id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Principal::Admin { .. } => Role::Admin,
            Principal::Teacher { .. } => Role::Teacher,
            Principal::Student { .. } => Role::Student,
        }
    }
}

/// Who is this user id? `Ok(None)` means the request is unauthenticated: an
/// unknown user, an unrecognized role name, or a teacher/student account
/// whose profile row is missing. A valid-but-powerless principal is never
/// produced silently.
pub async fn resolve_principal<S: AcademicStore>(
    store: &S,
    user_id: i64,
) -> Result<Option<Principal>, AppError> {
    let Some(role_name) = store.user_role(user_id).await? else {
        return Ok(None);
    };
    let Some(role) = Role::from_name(&role_name) else {
        log::warn!("user {user_id} has unrecognized role '{role_name}'");
        return Ok(None);
    };
    let principal = match role {
        Role::Admin => Some(Principal::Admin { user_id }),
        Role::Teacher => store
            .teacher_by_user(user_id)
            .await?
            .map(|t| Principal::Teacher { user_id, teacher_id: t.id }),
        Role::Student => store
            .student_by_user(user_id)
            .await?
            .map(|s| Principal::Student { user_id, student_id: s.id }),
    };
    Ok(principal)
}
