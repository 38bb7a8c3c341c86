//! Shared fixture for permission-core tests.
//!
//! `academy()` builds an in-memory store with:
//! - teacher T1 teaching Math to group G1 (assignment A1) plus a group-less
//!   History elective (A_ELECTIVE)
//! - teacher T2 teaching History to group G2 (assignment A2)
//! - student X in G1 with grades under A1 and the elective, student Y in G2
//!
//! Ids are kept distinct across kinds so a mixed-up id can never resolve by
//! accident.

#![allow(dead_code)]

use chrono::NaiveDate;
use skole::auth::PermissionEngine;
use skole::auth::principal::Principal;
use skole::models::reference::RefKind;
use skole::store::MemStore;

pub const ADMIN_USER: i64 = 1;
pub const T1_USER: i64 = 2;
pub const T2_USER: i64 = 3;
pub const X_USER: i64 = 4;
pub const Y_USER: i64 = 5;

pub const T1: i64 = 10;
pub const T2: i64 = 11;

pub const X: i64 = 20;
pub const Y: i64 = 21;

pub const G1: i64 = 30;
pub const G2: i64 = 31;

pub const MATH: i64 = 40;
pub const HISTORY: i64 = 41;

pub const SEM: i64 = 50;

pub const ROLE_STUDENT: i64 = 55;

pub const A1: i64 = 60;
pub const A2: i64 = 61;
pub const A_ELECTIVE: i64 = 62;

pub const GRADE_X: i64 = 70;
pub const GRADE_Y: i64 = 71;
pub const GRADE_X_ELECTIVE: i64 = 72;

pub const ATT_X: i64 = 80;

pub fn academy() -> MemStore {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = MemStore::new();

    store.add_user(ADMIN_USER, "admin");
    store.add_user(T1_USER, "teacher");
    store.add_user(T2_USER, "teacher");
    store.add_user(X_USER, "student");
    store.add_user(Y_USER, "student");

    store.add_teacher(T1, T1_USER);
    store.add_teacher(T2, T2_USER);

    for group in [G1, G2] {
        store.add_reference(RefKind::Group, group);
    }
    for subject in [MATH, HISTORY] {
        store.add_reference(RefKind::Subject, subject);
    }
    store.add_reference(RefKind::Semester, SEM);
    store.add_reference(RefKind::Role, ROLE_STUDENT);

    store.add_student(X, X_USER, G1);
    store.add_student(Y, Y_USER, G2);

    store.add_assignment(A1, T1, MATH, Some(G1), SEM);
    store.add_assignment(A2, T2, HISTORY, Some(G2), SEM);
    store.add_assignment(A_ELECTIVE, T1, HISTORY, None, SEM);

    store.add_grade(GRADE_X, X, A1, 5);
    store.add_grade(GRADE_Y, Y, A2, 4);
    store.add_grade(GRADE_X_ELECTIVE, X, A_ELECTIVE, 3);

    store.add_attendance(ATT_X, X, A1, date(2025, 9, 1), "present");

    store
}

pub fn engine() -> PermissionEngine<MemStore> {
    PermissionEngine::new(academy())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn admin() -> Principal {
    Principal::Admin { user_id: ADMIN_USER }
}

pub fn teacher1() -> Principal {
    Principal::Teacher { user_id: T1_USER, teacher_id: T1 }
}

pub fn teacher2() -> Principal {
    Principal::Teacher { user_id: T2_USER, teacher_id: T2 }
}

pub fn student_x() -> Principal {
    Principal::Student { user_id: X_USER, student_id: X }
}

pub fn student_y() -> Principal {
    Principal::Student { user_id: Y_USER, student_id: Y }
}
