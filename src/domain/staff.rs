//! Staff record and its fixed enumerations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalize user input for enum lookup: case-insensitive, `-`/`_` as spaces.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Department a staff member is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Medical,
    Nursing,
    Laboratory,
    Pharmacy,
    Radiology,
    Administration,
    Maintenance,
    #[serde(rename = "IT")]
    It,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::Medical,
        Department::Nursing,
        Department::Laboratory,
        Department::Pharmacy,
        Department::Radiology,
        Department::Administration,
        Department::Maintenance,
        Department::It,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Medical => "Medical",
            Department::Nursing => "Nursing",
            Department::Laboratory => "Laboratory",
            Department::Pharmacy => "Pharmacy",
            Department::Radiology => "Radiology",
            Department::Administration => "Administration",
            Department::Maintenance => "Maintenance",
            Department::It => "IT",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown department: '{}'", s))
    }
}

/// Job role. Not tied to any particular department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Doctor,
    Nurse,
    #[serde(rename = "Lab Technician")]
    LabTechnician,
    Pharmacist,
    Radiologist,
    Administrator,
    #[serde(rename = "Maintenance Staff")]
    MaintenanceStaff,
    #[serde(rename = "IT Support")]
    ItSupport,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Doctor,
        Role::Nurse,
        Role::LabTechnician,
        Role::Pharmacist,
        Role::Radiologist,
        Role::Administrator,
        Role::MaintenanceStaff,
        Role::ItSupport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::LabTechnician => "Lab Technician",
            Role::Pharmacist => "Pharmacist",
            Role::Radiologist => "Radiologist",
            Role::Administrator => "Administrator",
            Role::MaintenanceStaff => "Maintenance Staff",
            Role::ItSupport => "IT Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown role: '{}'", s))
    }
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[default]
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::OnLeave => "On Leave",
            EmploymentStatus::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "active" => Ok(EmploymentStatus::Active),
            "on leave" | "onleave" => Ok(EmploymentStatus::OnLeave),
            "terminated" => Ok(EmploymentStatus::Terminated),
            _ => Err(format!(
                "Unknown status: '{}'. Valid statuses are: Active, On Leave, Terminated",
                s
            )),
        }
    }
}

/// One employee record as persisted in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub role: Role,
    pub hire_date: NaiveDate,
    pub salary: u64,
    pub status: EmploymentStatus,
}

impl Staff {
    /// Attach an identifier to a new-staff payload
    pub fn from_new(id: String, new: NewStaff) -> Self {
        Staff {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            department: new.department,
            role: new.role,
            hire_date: new.hire_date,
            salary: new.salary,
            status: new.status,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Shallow merge: every field present in the patch overwrites this record's value
    pub fn apply(&mut self, patch: StaffPatch) {
        if let Some(v) = patch.first_name {
            self.first_name = v;
        }
        if let Some(v) = patch.last_name {
            self.last_name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.department {
            self.department = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if let Some(v) = patch.hire_date {
            self.hire_date = v;
        }
        if let Some(v) = patch.salary {
            self.salary = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
    }
}

/// Complete staff payload without an identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStaff {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub role: Role,
    pub hire_date: NaiveDate,
    pub salary: u64,
    #[serde(default)]
    pub status: EmploymentStatus,
}

/// Partial update. The identifier is deliberately absent: it never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<Department>,
    pub role: Option<Role>,
    pub hire_date: Option<NaiveDate>,
    pub salary: Option<u64>,
    pub status: Option<EmploymentStatus>,
}

impl StaffPatch {
    pub fn is_empty(&self) -> bool {
        *self == StaffPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Staff {
        Staff {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@stluke.org".to_string(),
            phone: "+250-789-123-456".to_string(),
            department: Department::Medical,
            role: Role::Doctor,
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
            salary: 120000,
            status: EmploymentStatus::Active,
        }
    }

    #[test]
    fn test_department_from_str() {
        assert_eq!("medical".parse::<Department>().unwrap(), Department::Medical);
        assert_eq!("it".parse::<Department>().unwrap(), Department::It);
        assert_eq!("IT".parse::<Department>().unwrap(), Department::It);
        assert!("Surgery".parse::<Department>().is_err());
    }

    #[test]
    fn test_role_from_str_accepts_separators() {
        assert_eq!(
            "lab technician".parse::<Role>().unwrap(),
            Role::LabTechnician
        );
        assert_eq!(
            "maintenance-staff".parse::<Role>().unwrap(),
            Role::MaintenanceStaff
        );
        assert_eq!("IT_Support".parse::<Role>().unwrap(), Role::ItSupport);
        assert!("Surgeon".parse::<Role>().is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "on-leave".parse::<EmploymentStatus>().unwrap(),
            EmploymentStatus::OnLeave
        );
        assert_eq!(
            "Terminated".parse::<EmploymentStatus>().unwrap(),
            EmploymentStatus::Terminated
        );
        assert!("retired".parse::<EmploymentStatus>().is_err());
    }

    #[test]
    fn test_staff_json_layout() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["hireDate"], "2020-01-15");
        assert_eq!(json["department"], "Medical");
        assert_eq!(json["status"], "Active");

        let mut nurse = sample();
        nurse.role = Role::LabTechnician;
        nurse.department = Department::It;
        nurse.status = EmploymentStatus::OnLeave;
        let json = serde_json::to_value(nurse).unwrap();
        assert_eq!(json["role"], "Lab Technician");
        assert_eq!(json["department"], "IT");
        assert_eq!(json["status"], "On Leave");
    }

    #[test]
    fn test_apply_patch_only_touches_supplied_fields() {
        let mut staff = sample();
        let before = staff.clone();
        staff.apply(StaffPatch {
            status: Some(EmploymentStatus::OnLeave),
            ..StaffPatch::default()
        });

        assert_eq!(staff.status, EmploymentStatus::OnLeave);
        assert_eq!(
            Staff {
                status: before.status,
                ..staff
            },
            before
        );
    }

    #[test]
    fn test_patch_deserializes_partial_json() {
        let patch: StaffPatch = serde_json::from_str(r#"{"salary": 130000}"#).unwrap();
        assert_eq!(patch.salary, Some(130000));
        assert!(patch.first_name.is_none());
        assert!(!patch.is_empty());
        assert!(StaffPatch::default().is_empty());
    }

    #[test]
    fn test_new_staff_status_defaults_to_active() {
        let new: NewStaff = serde_json::from_str(
            r#"{"firstName":"A","lastName":"B","email":"a@b","phone":"1",
                "department":"Nursing","role":"Nurse","hireDate":"2024-02-01","salary":1}"#,
        )
        .unwrap();
        assert_eq!(new.status, EmploymentStatus::Active);
        let staff = Staff::from_new("x".to_string(), new);
        assert_eq!(staff.full_name(), "A B");
    }
}
