use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use super::AcademicStore;
use crate::errors::AppError;
use crate::models::assignment::TeachingAssignment;
use crate::models::attendance::Attendance;
use crate::models::grade::Grade;
use crate::models::reference::RefKind;
use crate::models::student::Student;
use crate::models::teacher::Teacher;

/// In-memory store: the test double, and the embedding path for callers that
/// want the engine without Postgres. Build it up front with the `add_*`
/// helpers, then hand it to the engine; reads never mutate.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    users: HashMap<i64, String>,
    teachers: HashMap<i64, Teacher>,
    students: HashMap<i64, Student>,
    assignments: HashMap<i64, TeachingAssignment>,
    grades: HashMap<i64, Grade>,
    attendance: HashMap<i64, Attendance>,
    references: HashMap<RefKind, HashSet<i64>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, id: i64, role: &str) {
        self.users.insert(id, role.to_string());
    }

    pub fn add_teacher(&mut self, id: i64, user_id: i64) {
        self.teachers.insert(id, Teacher { id, user_id });
    }

    pub fn add_student(&mut self, id: i64, user_id: i64, group_id: i64) {
        self.students.insert(id, Student { id, user_id, group_id });
    }

    pub fn add_assignment(
        &mut self,
        id: i64,
        teacher_id: i64,
        subject_id: i64,
        group_id: Option<i64>,
        semester_id: i64,
    ) {
        self.assignments.insert(
            id,
            TeachingAssignment { id, teacher_id, subject_id, group_id, semester_id },
        );
    }

    pub fn add_grade(&mut self, id: i64, student_id: i64, assignment_id: i64, value: i32) {
        self.grades.insert(
            id,
            Grade { id, student_id, assignment_id, value, status: "set".to_string() },
        );
    }

    pub fn add_attendance(
        &mut self,
        id: i64,
        student_id: i64,
        assignment_id: i64,
        date: NaiveDate,
        status: &str,
    ) {
        self.attendance.insert(
            id,
            Attendance { id, student_id, assignment_id, date, status: status.to_string() },
        );
    }

    pub fn add_reference(&mut self, kind: RefKind, id: i64) {
        self.references.entry(kind).or_default().insert(id);
    }
}

impl AcademicStore for MemStore {
    async fn user_role(&self, user_id: i64) -> Result<Option<String>, AppError> {
        Ok(self.users.get(&user_id).cloned())
    }

    async fn user_exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.users.contains_key(&id))
    }

    async fn teacher(&self, id: i64) -> Result<Option<Teacher>, AppError> {
        Ok(self.teachers.get(&id).cloned())
    }

    async fn teacher_by_user(&self, user_id: i64) -> Result<Option<Teacher>, AppError> {
        Ok(self.teachers.values().find(|t| t.user_id == user_id).cloned())
    }

    async fn student(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(self.students.get(&id).cloned())
    }

    async fn student_by_user(&self, user_id: i64) -> Result<Option<Student>, AppError> {
        Ok(self.students.values().find(|s| s.user_id == user_id).cloned())
    }

    async fn assignment(&self, id: i64) -> Result<Option<TeachingAssignment>, AppError> {
        Ok(self.assignments.get(&id).cloned())
    }

    async fn grade(&self, id: i64) -> Result<Option<Grade>, AppError> {
        Ok(self.grades.get(&id).cloned())
    }

    async fn attendance(&self, id: i64) -> Result<Option<Attendance>, AppError> {
        Ok(self.attendance.get(&id).cloned())
    }

    async fn teacher_owns_group_assignment(
        &self,
        teacher_id: i64,
        group_id: i64,
    ) -> Result<bool, AppError> {
        Ok(self
            .assignments
            .values()
            .any(|a| a.teacher_id == teacher_id && a.group_id == Some(group_id)))
    }

    async fn reference_exists(&self, kind: RefKind, id: i64) -> Result<bool, AppError> {
        Ok(self.references.get(&kind).is_some_and(|ids| ids.contains(&id)))
    }
}
