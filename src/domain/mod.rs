//! Domain layer - Staff records, filtering and seed data

pub mod filter;
pub mod seed;
pub mod staff;

pub use filter::StaffFilter;
pub use seed::seed_staff;
pub use staff::{Department, EmploymentStatus, NewStaff, Role, Staff, StaffPatch};
