//! Output formatting utilities

use crate::domain::{Department, EmploymentStatus, Role, Staff};
use chrono::NaiveDate;

pub const EMPTY_LISTING: &str = "No staff members found with the current filters.";

/// Whole-unit amount with thousands separators, e.g. `RWF 120,000`
pub fn format_currency(amount: u64, currency: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{} {}", currency, grouped)
}

/// Hire dates are shown as `Jan 15, 2020`
pub fn format_hire_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn format_status(status: EmploymentStatus) -> String {
    format!("[{}]", status)
}

/// Render staff as an aligned table, or the empty-listing notice
pub fn format_staff_table(staff: &[Staff], currency: &str) -> String {
    if staff.is_empty() {
        return EMPTY_LISTING.to_string();
    }

    let header = [
        "ID",
        "Name",
        "Email",
        "Department",
        "Role",
        "Hire Date",
        "Status",
        "Salary",
    ];
    let rows: Vec<[String; 8]> = staff
        .iter()
        .map(|s| {
            [
                s.id.clone(),
                s.full_name(),
                s.email.clone(),
                s.department.to_string(),
                s.role.to_string(),
                format_hire_date(s.hire_date),
                format_status(s.status),
                format_currency(s.salary, currency),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, header.iter().map(|h| h.to_string()), &widths);
    for row in rows {
        push_row(&mut output, row.into_iter(), &widths);
    }
    output
}

fn push_row(output: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    output.push_str(line.trim_end());
    output.push('\n');
}

/// Multi-line description of one staff member
pub fn format_staff_detail(staff: &Staff, currency: &str) -> String {
    format!(
        "{}\n\
        ID:         {}\n\
        Email:      {}\n\
        Phone:      {}\n\
        Department: {}\n\
        Role:       {}\n\
        Hired:      {}\n\
        Status:     {}\n\
        Salary:     {}\n",
        staff.full_name(),
        staff.id,
        staff.email,
        staff.phone,
        staff.department,
        staff.role,
        format_hire_date(staff.hire_date),
        format_status(staff.status),
        format_currency(staff.salary, currency)
    )
}

pub fn format_department_counts(counts: &[(Department, usize)]) -> String {
    format_counts(counts.iter().map(|(d, n)| (d.as_str(), *n)))
}

pub fn format_role_counts(counts: &[(Role, usize)]) -> String {
    format_counts(counts.iter().map(|(r, n)| (r.as_str(), *n)))
}

fn format_counts<'a>(counts: impl Iterator<Item = (&'a str, usize)>) -> String {
    let mut output = String::new();
    for (name, count) in counts {
        output.push_str(&format!("{:<18} {}\n", name, count));
    }
    output
}
