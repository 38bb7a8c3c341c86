//! Relationship graph tests: each query is a point lookup that reflects the
//! store as-is and resolves missing rows to None/false.

mod common;

use common::*;
use skole::auth::graph;

#[tokio::test]
async fn test_assignment_owner() {
    let store = academy();
    assert_eq!(graph::assignment_owner(&store, A1).await.unwrap(), Some(T1));
    assert_eq!(graph::assignment_owner(&store, A2).await.unwrap(), Some(T2));
    assert_eq!(graph::assignment_owner(&store, 999).await.unwrap(), None);
}

#[tokio::test]
async fn test_assignment_group_distinguishes_missing_from_groupless() {
    let store = academy();
    assert_eq!(graph::assignment_group(&store, A1).await.unwrap(), Some(Some(G1)));
    // Elective: the assignment exists but binds no group.
    assert_eq!(graph::assignment_group(&store, A_ELECTIVE).await.unwrap(), Some(None));
    assert_eq!(graph::assignment_group(&store, 999).await.unwrap(), None);
}

#[tokio::test]
async fn test_student_group() {
    let store = academy();
    assert_eq!(graph::student_group(&store, X).await.unwrap(), Some(G1));
    assert_eq!(graph::student_group(&store, Y).await.unwrap(), Some(G2));
    assert_eq!(graph::student_group(&store, 999).await.unwrap(), None);
}

#[tokio::test]
async fn test_grade_assignment() {
    let store = academy();
    assert_eq!(graph::grade_assignment(&store, GRADE_X).await.unwrap(), Some(A1));
    assert_eq!(graph::grade_assignment(&store, GRADE_X_ELECTIVE).await.unwrap(), Some(A_ELECTIVE));
    assert_eq!(graph::grade_assignment(&store, 999).await.unwrap(), None);
}

#[tokio::test]
async fn test_attendance_assignment() {
    let store = academy();
    assert_eq!(graph::attendance_assignment(&store, ATT_X).await.unwrap(), Some(A1));
    assert_eq!(graph::attendance_assignment(&store, 999).await.unwrap(), None);
}

#[tokio::test]
async fn test_teaches_group() {
    let store = academy();
    assert!(graph::teaches_group(&store, T1, G1).await.unwrap());
    assert!(graph::teaches_group(&store, T2, G2).await.unwrap());
    assert!(!graph::teaches_group(&store, T2, G1).await.unwrap());
    assert!(!graph::teaches_group(&store, T1, 999).await.unwrap());
}

#[tokio::test]
async fn test_groupless_assignment_never_counts_as_teaching_a_group() {
    let store = academy();
    // T1's elective binds no group; only A1 makes T1 a teacher of G1.
    assert!(!graph::teaches_group(&store, T1, G2).await.unwrap());
}
