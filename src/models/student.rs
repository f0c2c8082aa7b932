use std::fmt;

/// One enrolled student. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// One-line description, e.g. `Student ID: 1, Name: Cylon`.
    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student ID: {}, Name: {}", self.id, self.name)
    }
}
