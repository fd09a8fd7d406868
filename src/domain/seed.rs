//! Example roster written into an empty store

use crate::domain::{Department, EmploymentStatus, Role, Staff};
use chrono::NaiveDate;

struct SeedRow {
    id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    phone: &'static str,
    department: Department,
    role: Role,
    hired: NaiveDate,
    salary: u64,
    status: EmploymentStatus,
}

/// Seed dates are checked when `SEED` is evaluated at compile time
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed hire date"),
    }
}

const SEED: [SeedRow; 8] = [
    SeedRow {
        id: "1",
        first_name: "John",
        last_name: "Doe",
        phone: "+250-789-123-456",
        department: Department::Medical,
        role: Role::Doctor,
        hired: date(2020, 1, 15),
        salary: 120000,
        status: EmploymentStatus::Active,
    },
    SeedRow {
        id: "2",
        first_name: "Jane",
        last_name: "Smith",
        phone: "+250-789-234-567",
        department: Department::Nursing,
        role: Role::Nurse,
        hired: date(2019, 6, 22),
        salary: 75000,
        status: EmploymentStatus::Active,
    },
    SeedRow {
        id: "3",
        first_name: "Robert",
        last_name: "Johnson",
        phone: "+250-789-345-678",
        department: Department::Laboratory,
        role: Role::LabTechnician,
        hired: date(2021, 3, 10),
        salary: 65000,
        status: EmploymentStatus::Active,
    },
    SeedRow {
        id: "4",
        first_name: "Sarah",
        last_name: "Williams",
        phone: "+250-789-456-789",
        department: Department::Pharmacy,
        role: Role::Pharmacist,
        hired: date(2018, 11, 5),
        salary: 85000,
        status: EmploymentStatus::OnLeave,
    },
    SeedRow {
        id: "5",
        first_name: "Michael",
        last_name: "Brown",
        phone: "+250-789-567-890",
        department: Department::Radiology,
        role: Role::Radiologist,
        hired: date(2020, 8, 20),
        salary: 110000,
        status: EmploymentStatus::Active,
    },
    SeedRow {
        id: "6",
        first_name: "Emily",
        last_name: "Davis",
        phone: "+250-789-678-901",
        department: Department::Administration,
        role: Role::Administrator,
        hired: date(2017, 5, 12),
        salary: 95000,
        status: EmploymentStatus::Active,
    },
    SeedRow {
        id: "7",
        first_name: "David",
        last_name: "Miller",
        phone: "+250-789-789-012",
        department: Department::Maintenance,
        role: Role::MaintenanceStaff,
        hired: date(2022, 1, 30),
        salary: 55000,
        status: EmploymentStatus::Active,
    },
    SeedRow {
        id: "8",
        first_name: "Lisa",
        last_name: "Wilson",
        phone: "+250-789-890-123",
        department: Department::It,
        role: Role::ItSupport,
        hired: date(2021, 7, 15),
        salary: 80000,
        status: EmploymentStatus::Active,
    },
];

/// The eight example staff records, ids "1" through "8"
pub fn seed_staff() -> Vec<Staff> {
    SEED.iter()
        .map(|row| Staff {
            id: row.id.to_string(),
            first_name: row.first_name.to_string(),
            last_name: row.last_name.to_string(),
            email: format!(
                "{}.{}@stluke.org",
                row.first_name.to_lowercase(),
                row.last_name.to_lowercase()
            ),
            phone: row.phone.to_string(),
            department: row.department,
            role: row.role,
            hire_date: row.hired,
            salary: row.salary,
            status: row.status,
        })
        .collect()
}
