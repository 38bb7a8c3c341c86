use actix_session::Session;

use super::principal::{Principal, resolve_principal};
use crate::errors::AppError;
use crate::store::AcademicStore;

/// User id from the session cookie, if the caller is logged in.
pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

/// Session → principal, or the 401-mapped error. The one piece of glue the
/// outer handlers need before calling the engine.
pub async fn require_principal<S: AcademicStore>(
    session: &Session,
    store: &S,
) -> Result<Principal, AppError> {
    let user_id = get_user_id(session).ok_or(AppError::Unauthenticated)?;
    resolve_principal(store, user_id)
        .await?
        .ok_or(AppError::Unauthenticated)
}
