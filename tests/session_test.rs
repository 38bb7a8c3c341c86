//! Session glue tests: user id extraction and the session → principal step
//! handlers run before calling the engine.

mod common;

use actix_session::SessionExt;
use actix_web::test::TestRequest;
use common::*;
use skole::auth::principal::Principal;
use skole::auth::session::{get_user_id, require_principal};
use skole::errors::AppError;

#[tokio::test]
async fn test_get_user_id_reads_session() {
    let req = TestRequest::default().to_http_request();
    let session = req.get_session();
    assert_eq!(get_user_id(&session), None);

    session.insert("user_id", T1_USER).unwrap();
    assert_eq!(get_user_id(&session), Some(T1_USER));
}

#[tokio::test]
async fn test_require_principal_resolves_logged_in_user() {
    let req = TestRequest::default().to_http_request();
    let session = req.get_session();
    session.insert("user_id", T1_USER).unwrap();

    let principal = require_principal(&session, &academy()).await.unwrap();
    assert_eq!(principal, Principal::Teacher { user_id: T1_USER, teacher_id: T1 });
}

#[tokio::test]
async fn test_require_principal_without_session_is_unauthenticated() {
    let req = TestRequest::default().to_http_request();
    let session = req.get_session();

    let err = require_principal(&session, &academy()).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthenticated));
}

#[tokio::test]
async fn test_require_principal_with_stale_user_id_is_unauthenticated() {
    // A session cookie can outlive its account.
    let req = TestRequest::default().to_http_request();
    let session = req.get_session();
    session.insert("user_id", 999i64).unwrap();

    let err = require_principal(&session, &academy()).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthenticated));
}
