//! Filter criteria for staff listings

use crate::domain::{Department, Role, Staff};
use chrono::NaiveDate;

/// Optional predicates combined with AND. An absent field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffFilter {
    pub department: Option<Department>,
    pub role: Option<Role>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search_term: Option<String>,
}

impl StaffFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn hired_from(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn hired_to(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        self.department.is_none()
            && self.role.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.search_term().is_none()
    }

    /// Search term, lowercased; empty terms count as absent
    fn search_term(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    /// Narrow `staff` in place: department, role, start date, end date, then search.
    pub fn apply(&self, staff: &mut Vec<Staff>) {
        if let Some(department) = self.department {
            staff.retain(|s| s.department == department);
        }
        if let Some(role) = self.role {
            staff.retain(|s| s.role == role);
        }
        if let Some(from) = self.start_date {
            staff.retain(|s| s.hire_date >= from);
        }
        if let Some(to) = self.end_date {
            staff.retain(|s| s.hire_date <= to);
        }
        if let Some(term) = self.search_term() {
            staff.retain(|s| matches_term(s, &term));
        }
    }
}

/// `term` must already be lowercase
fn matches_term(staff: &Staff, term: &str) -> bool {
    [
        staff.first_name.as_str(),
        staff.last_name.as_str(),
        staff.email.as_str(),
        staff.department.as_str(),
        staff.role.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}
