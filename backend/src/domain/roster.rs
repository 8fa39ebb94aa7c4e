//! Client-side collection of employees keyed by identifier.
//!
//! A roster mirrors what the server last confirmed. Mutations are only ever
//! applied with records the server returned, so the local view cannot drift
//! from the store by more than the records other clients changed.

use super::{Employee, EmployeeId};

/// Result of [`EmployeeRoster::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// An entry with the same id was overwritten in place.
    Replaced,
    /// The id was new and the record now heads the roster.
    Prepended,
}

/// Ordered employees with at most one entry per id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRoster {
    entries: Vec<Employee>,
}

impl EmployeeRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a server-confirmed record into the roster.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::{Employee, EmployeeDetails, EmployeeId, EmployeeRoster, MergeOutcome};
    ///
    /// let id = EmployeeId::random();
    /// let details = EmployeeDetails::new("Иван", "ivan@x.com", 25, "IT", 50_000).unwrap();
    /// let mut roster = EmployeeRoster::new();
    /// assert_eq!(roster.merge(Employee::new(id, details.clone())), MergeOutcome::Prepended);
    /// assert_eq!(roster.merge(Employee::new(id, details)), MergeOutcome::Replaced);
    /// assert_eq!(roster.len(), 1);
    /// ```
    pub fn merge(&mut self, employee: Employee) -> MergeOutcome {
        match self.entries.iter_mut().find(|e| e.id() == employee.id()) {
            Some(slot) => {
                *slot = employee;
                MergeOutcome::Replaced
            }
            None => {
                self.entries.insert(0, employee);
                MergeOutcome::Prepended
            }
        }
    }

    /// Drop the entry with `id`, returning it when present.
    pub fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Entries whose email equals `email` once surrounding whitespace is
    /// removed from the query.
    pub fn find_by_email(&self, email: &str) -> Vec<&Employee> {
        let needle = email.trim();
        self.entries.iter().filter(|e| e.email() == needle).collect()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Employee> for EmployeeRoster {
    /// Later duplicates of an id replace earlier ones; first-seen order is kept.
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut entries: Vec<Employee> = Vec::new();
        for employee in iter {
            match entries.iter_mut().find(|e| e.id() == employee.id()) {
                Some(slot) => *slot = employee,
                None => entries.push(employee),
            }
        }
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a EmployeeRoster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
