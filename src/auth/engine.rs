//! The decision core: combines role rules with relationship-graph facts into
//! a verdict.
//!
//! Evaluation order is fixed and fail-closed:
//!
//! 1. admins are allowed unconditionally, before any other check
//! 2. an action/target pairing that cannot be well-formed is a caller bug:
//!    logged, denied `Unsupported`
//! 3. a target (or, for creations, a referenced record) that does not exist
//!    is denied `NotFound` before any ownership rule runs, so an
//!    authenticated caller always gets a stable 404 for a missing id
//! 4. the per-kind rules in [`policy`] decide the rest
//!
//! The engine never writes and holds no shared mutable state; each decision
//! is a pure function of (principal, action, target, store snapshot). It does
//! not guard against the target changing between the decision and the
//! caller's subsequent action; callers needing that must wrap both in one
//! transaction at the data-access boundary.

use super::graph;
use super::policy;
use super::principal::{Principal, resolve_principal};
use super::scope::ScopeFilter;
use super::types::{Action, DenyReason, EntityKind, TargetRef, Verdict};
use crate::errors::AppError;
use crate::models::reference::RefKind;
use crate::store::AcademicStore;

/// Constructed once over a store and injected wherever decisions are needed.
pub struct PermissionEngine<S> {
    store: S,
}

impl<S: AcademicStore> PermissionEngine<S> {
    pub fn new(store: S) -> Self {
        PermissionEngine { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decide whether `principal` may perform `action` on `target`.
    pub async fn decide(
        &self,
        principal: &Principal,
        action: Action,
        target: &TargetRef,
    ) -> Result<Verdict, AppError> {
        if let Principal::Admin { .. } = principal {
            return Ok(Verdict::Allow);
        }
        if !target.accepts(action) {
            log::error!("malformed permission check: {action:?} on {target:?}");
            return Ok(Verdict::Deny(DenyReason::Unsupported));
        }
        match *target {
            TargetRef::Entity { kind, id } => self.decide_entity(principal, action, kind, id).await,
            // Listing is open to every authenticated principal; the scope
            // filter is what narrows the rows.
            TargetRef::Collection { .. } => Ok(Verdict::Allow),
            TargetRef::NewGrade { assignment_id, student_id }
            | TargetRef::NewAttendance { assignment_id, student_id } => {
                policy::create_anchored(&self.store, principal, assignment_id, student_id).await
            }
            TargetRef::NewAssignment { teacher_id } => {
                policy::create_assignment(&self.store, principal, teacher_id).await
            }
            TargetRef::NewEntity { kind } => match kind {
                EntityKind::Assignment | EntityKind::Grade | EntityKind::Attendance => {
                    log::error!("creation of {kind:?} must go through its payload target");
                    Ok(Verdict::Deny(DenyReason::Unsupported))
                }
                // Profiles and reference data are provisioned by admins only.
                _ => Ok(Verdict::Deny(DenyReason::Forbidden)),
            },
        }
    }

    /// [`decide`](Self::decide) composed with principal resolution: an
    /// unresolvable user id becomes `Deny(Unauthenticated)`.
    pub async fn decide_for_user(
        &self,
        user_id: i64,
        action: Action,
        target: &TargetRef,
    ) -> Result<Verdict, AppError> {
        match resolve_principal(&self.store, user_id).await? {
            Some(principal) => self.decide(&principal, action, target).await,
            None => Ok(Verdict::Deny(DenyReason::Unauthenticated)),
        }
    }

    async fn decide_entity(
        &self,
        principal: &Principal,
        action: Action,
        kind: EntityKind,
        id: i64,
    ) -> Result<Verdict, AppError> {
        let verdict = match kind {
            EntityKind::User => {
                if !self.store.user_exists(id).await? {
                    Verdict::Deny(DenyReason::NotFound)
                } else {
                    policy::profile(principal, action, kind, id)
                }
            }
            EntityKind::Teacher => {
                if self.store.teacher(id).await?.is_none() {
                    Verdict::Deny(DenyReason::NotFound)
                } else {
                    policy::profile(principal, action, kind, id)
                }
            }
            EntityKind::Student => {
                if self.store.student(id).await?.is_none() {
                    Verdict::Deny(DenyReason::NotFound)
                } else {
                    policy::profile(principal, action, kind, id)
                }
            }
            EntityKind::Group => self.decide_reference(RefKind::Group, action, id).await?,
            EntityKind::Subject => self.decide_reference(RefKind::Subject, action, id).await?,
            EntityKind::Semester => self.decide_reference(RefKind::Semester, action, id).await?,
            EntityKind::Role => self.decide_reference(RefKind::Role, action, id).await?,
            EntityKind::Assignment => match self.store.assignment(id).await? {
                None => Verdict::Deny(DenyReason::NotFound),
                Some(a) => policy::assignment(&self.store, principal, action, &a).await?,
            },
            EntityKind::Grade => match self.store.grade(id).await? {
                None => Verdict::Deny(DenyReason::NotFound),
                Some(g) => policy::grade(&self.store, principal, action, &g).await?,
            },
            EntityKind::Attendance => match self.store.attendance(id).await? {
                None => Verdict::Deny(DenyReason::NotFound),
                Some(a) => policy::attendance(&self.store, principal, action, &a).await?,
            },
        };
        Ok(verdict)
    }

    async fn decide_reference(
        &self,
        kind: RefKind,
        action: Action,
        id: i64,
    ) -> Result<Verdict, AppError> {
        if !self.store.reference_exists(kind, id).await? {
            return Ok(Verdict::Deny(DenyReason::NotFound));
        }
        Ok(policy::reference(action))
    }

    /// The list-shaping counterpart of `decide`: which rows of `kind` the
    /// principal may see. Handlers push the returned ids into their list
    /// queries instead of post-filtering full result sets.
    pub async fn scope_filter(
        &self,
        principal: &Principal,
        kind: EntityKind,
    ) -> Result<ScopeFilter, AppError> {
        let filter = match principal {
            Principal::Admin { .. } => ScopeFilter::Unrestricted,
            Principal::Teacher { user_id, teacher_id } => match kind {
                EntityKind::Group
                | EntityKind::Subject
                | EntityKind::Semester
                | EntityKind::Role => ScopeFilter::Unrestricted,
                EntityKind::Assignment | EntityKind::Grade | EntityKind::Attendance => {
                    ScopeFilter::OwnedAssignments { teacher_id: *teacher_id }
                }
                EntityKind::User | EntityKind::Teacher | EntityKind::Student => {
                    ScopeFilter::OwnUser { user_id: *user_id }
                }
            },
            Principal::Student { user_id, student_id } => match kind {
                EntityKind::Group
                | EntityKind::Subject
                | EntityKind::Semester
                | EntityKind::Role => ScopeFilter::Unrestricted,
                EntityKind::Assignment => {
                    let Some(group_id) = graph::student_group(&self.store, *student_id).await?
                    else {
                        // The profile row vanished since resolution.
                        return Err(AppError::NotFound);
                    };
                    ScopeFilter::GroupAssignments { group_id }
                }
                EntityKind::Grade | EntityKind::Attendance => {
                    ScopeFilter::OwnRecords { student_id: *student_id }
                }
                EntityKind::User | EntityKind::Teacher | EntityKind::Student => {
                    ScopeFilter::OwnUser { user_id: *user_id }
                }
            },
        };
        Ok(filter)
    }
}
