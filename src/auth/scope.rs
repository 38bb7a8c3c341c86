use crate::models::assignment::TeachingAssignment;
use crate::models::attendance::Attendance;
use crate::models::grade::Grade;

/// How a list query must be narrowed for a principal. Handlers feed the
/// carried ids into their WHERE clauses; the `matches_*` predicates serve
/// callers that already hold the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeFilter {
    /// No narrowing: admins, and reference data for everyone.
    Unrestricted,
    /// Rows under assignments the teacher owns.
    OwnedAssignments { teacher_id: i64 },
    /// Assignments bound to the student's group.
    GroupAssignments { group_id: i64 },
    /// The student's own grade/attendance rows.
    OwnRecords { student_id: i64 },
    /// The principal's own account/profile row.
    OwnUser { user_id: i64 },
}

impl ScopeFilter {
    pub fn matches_assignment(&self, assignment: &TeachingAssignment) -> bool {
        match *self {
            ScopeFilter::Unrestricted => true,
            ScopeFilter::OwnedAssignments { teacher_id } => assignment.teacher_id == teacher_id,
            ScopeFilter::GroupAssignments { group_id } => assignment.group_id == Some(group_id),
            ScopeFilter::OwnRecords { .. } | ScopeFilter::OwnUser { .. } => false,
        }
    }

    /// `anchor` is the assignment the grade hangs off; callers listing grades
    /// have it in hand.
    pub fn matches_grade(&self, grade: &Grade, anchor: &TeachingAssignment) -> bool {
        self.matches_anchored(grade.student_id, anchor)
    }

    pub fn matches_attendance(&self, attendance: &Attendance, anchor: &TeachingAssignment) -> bool {
        self.matches_anchored(attendance.student_id, anchor)
    }

    fn matches_anchored(&self, student_id: i64, anchor: &TeachingAssignment) -> bool {
        match *self {
            ScopeFilter::Unrestricted => true,
            ScopeFilter::OwnedAssignments { teacher_id } => anchor.teacher_id == teacher_id,
            ScopeFilter::GroupAssignments { group_id } => anchor.group_id == Some(group_id),
            ScopeFilter::OwnRecords { student_id: own } => student_id == own,
            ScopeFilter::OwnUser { .. } => false,
        }
    }
}
