use std::fmt;

use serde::{Deserialize, Serialize};

/// A named Git identity stored in the profiles file.
///
/// Fields are free text and never validated; missing fields in the file read as empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Display label, not required to be unique
    #[serde(default)]
    pub name: String,
    /// Git username (user.name)
    #[serde(default)]
    pub username: String,
    /// Git email address (user.email)
    #[serde(default)]
    pub email: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Label shown in selection lists: `name (username, email)`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.username, self.email)
    }
}
