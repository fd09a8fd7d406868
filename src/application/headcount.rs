//! Headcount per department and per role

use crate::application::StaffStore;
use crate::domain::{Department, Role, Staff, StaffFilter};
use crate::error::Result;
use crate::infrastructure::KeyValueStorage;

/// Count records per department, in enumeration order, zeros included
pub fn by_department(staff: &[Staff]) -> Vec<(Department, usize)> {
    Department::ALL
        .into_iter()
        .map(|d| (d, staff.iter().filter(|s| s.department == d).count()))
        .collect()
}

/// Count records per role, in enumeration order, zeros included
pub fn by_role(staff: &[Staff]) -> Vec<(Role, usize)> {
    Role::ALL
        .into_iter()
        .map(|r| (r, staff.iter().filter(|s| s.role == r).count()))
        .collect()
}

/// Service summarizing the roster held by a store
pub struct HeadcountService<'a, S> {
    store: &'a StaffStore<S>,
}

impl<'a, S: KeyValueStorage> HeadcountService<'a, S> {
    pub fn new(store: &'a StaffStore<S>) -> Self {
        HeadcountService { store }
    }

    pub fn departments(&self) -> Result<Vec<(Department, usize)>> {
        let staff = self.store.list(&StaffFilter::new())?;
        Ok(by_department(&staff))
    }

    pub fn roles(&self) -> Result<Vec<(Role, usize)>> {
        let staff = self.store.list(&StaffFilter::new())?;
        Ok(by_role(&staff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStorage;

    #[test]
    fn test_seed_headcount_is_one_each() {
        let store = StaffStore::new(MemoryStorage::new());
        store.initialize().unwrap();
        let service = HeadcountService::new(&store);

        let departments = service.departments().unwrap();
        assert_eq!(departments.len(), 8);
        assert!(departments.iter().all(|(_, n)| *n == 1));

        let roles = service.roles().unwrap();
        assert_eq!(roles[0], (Role::Doctor, 1));
    }

    #[test]
    fn test_headcount_reflects_deletes() {
        let store = StaffStore::new(MemoryStorage::new());
        store.initialize().unwrap();
        store.delete("8").unwrap();

        let departments = HeadcountService::new(&store).departments().unwrap();
        assert_eq!(departments.last(), Some(&(Department::It, 0)));
    }

    #[test]
    fn test_by_department_empty() {
        assert!(by_department(&[]).iter().all(|(_, n)| *n == 0));
    }
}
