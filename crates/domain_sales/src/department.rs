//! Department entity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use core_kernel::DepartmentId;

/// A department that sellers belong to
///
/// Departments read from storage always carry their name. A department built
/// with [`Department::reference`] has no name and only serves as a lookup key,
/// e.g. when listing the sellers of a department.
///
/// Equality and hashing consider the id only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Storage-assigned key
    pub id: DepartmentId,
    /// Department name, absent for lookup keys
    pub name: Option<String>,
}

impl Department {
    /// Creates a department with a known name
    pub fn new(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Creates a lookup key for the department with the given id
    pub fn reference(id: DepartmentId) -> Self {
        Self { id, name: None }
    }

    /// Returns the name, or an empty string for lookup keys
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Department {}

impl Hash for Department {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Department [id={}, name={}]", self.id, name),
            None => write!(f, "Department [id={}, name=null]", self.id),
        }
    }
}
