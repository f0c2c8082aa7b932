use super::student::Student;
use std::collections::HashMap;

/// Registered students keyed by id.
///
/// A duplicate id is an expected outcome of [`Roster::register`], not an
/// error: the call simply reports `false` and leaves the roster untouched.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    name: String,
    entries: HashMap<String, Student>,
}

impl Roster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert `student` unless its id is already taken.
    /// Returns `true` when the student was added.
    pub fn register(&mut self, student: Student) -> bool {
        if self.entries.contains_key(&student.id) {
            return false;
        }
        self.entries.insert(student.id.clone(), student);
        true
    }

    pub fn lookup(&self, id: &str) -> Option<&Student> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
