//! Conversion of command-line strings into domain values

use crate::cli::commands::{AddArgs, UpdateArgs};
use crate::domain::{Department, EmploymentStatus, NewStaff, Role, StaffFilter, StaffPatch};
use crate::error::{Result, StaffbookError};
use chrono::NaiveDate;
use std::str::FromStr;

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| StaffbookError::InvalidDate(s.to_string()))
}

/// Parse a whole, non-negative salary; thousands separators are allowed
pub fn parse_salary(s: &str) -> Result<u64> {
    let digits: String = s.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    digits.parse::<u64>().map_err(|_| {
        StaffbookError::InvalidValue(format!(
            "Invalid salary: '{}'. Expected a non-negative whole amount",
            s
        ))
    })
}

pub fn parse_department(s: &str) -> Result<Department> {
    Department::from_str(s).map_err(|_| StaffbookError::UnknownDepartment(s.to_string()))
}

pub fn parse_role(s: &str) -> Result<Role> {
    Role::from_str(s).map_err(|_| StaffbookError::UnknownRole(s.to_string()))
}

pub fn parse_status(s: &str) -> Result<EmploymentStatus> {
    EmploymentStatus::from_str(s).map_err(StaffbookError::InvalidValue)
}

fn parse_opt<T>(value: Option<&str>, parse: impl Fn(&str) -> Result<T>) -> Result<Option<T>> {
    value.map(parse).transpose()
}

/// Build filter criteria from `list` flags
pub fn build_filter(
    department: Option<&str>,
    role: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    search: Option<&str>,
) -> Result<StaffFilter> {
    Ok(StaffFilter {
        department: parse_opt(department, parse_department)?,
        role: parse_opt(role, parse_role)?,
        start_date: parse_opt(from, parse_date)?,
        end_date: parse_opt(to, parse_date)?,
        search_term: search.map(str::to_string),
    })
}

impl AddArgs {
    pub fn into_new_staff(self) -> Result<NewStaff> {
        Ok(NewStaff {
            department: parse_department(&self.department)?,
            role: parse_role(&self.role)?,
            hire_date: parse_date(&self.hire_date)?,
            salary: parse_salary(&self.salary)?,
            status: parse_status(&self.status)?,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        })
    }
}

impl UpdateArgs {
    pub fn into_patch(self) -> Result<StaffPatch> {
        let patch = StaffPatch {
            department: parse_opt(self.department.as_deref(), parse_department)?,
            role: parse_opt(self.role.as_deref(), parse_role)?,
            hire_date: parse_opt(self.hire_date.as_deref(), parse_date)?,
            salary: parse_opt(self.salary.as_deref(), parse_salary)?,
            status: parse_opt(self.status.as_deref(), parse_status)?,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        };

        if patch.is_empty() {
            return Err(StaffbookError::EmptyUpdate);
        }
        Ok(patch)
    }
}
