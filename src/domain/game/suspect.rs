//! Suspect persona.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SuspectId;

/// Hidden role of a suspect in the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuspectRole {
    /// Innocent person of interest.
    #[default]
    Suspect,
    /// The one who did it.
    Criminal,
}

impl SuspectRole {
    /// Parses the role label an LLM writes; anything but "criminal" is innocent.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("criminal") {
            SuspectRole::Criminal
        } else {
            SuspectRole::Suspect
        }
    }
}

/// A persona the player can interrogate.
///
/// Only `id`, `name` and `occupation` are ever shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    pub id: SuspectId,
    pub name: String,
    pub occupation: String,
    pub bio: String,
    pub alibi: String,
    pub role: SuspectRole,
}

impl Suspect {
    pub fn new(
        id: SuspectId,
        name: impl Into<String>,
        occupation: impl Into<String>,
        bio: impl Into<String>,
        alibi: impl Into<String>,
        role: SuspectRole,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            occupation: occupation.into(),
            bio: bio.into(),
            alibi: alibi.into(),
            role,
        }
    }

    pub fn is_criminal(&self) -> bool {
        self.role == SuspectRole::Criminal
    }

    /// Name to attach to transcript lines, never blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Suspect"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_label_parsing_is_lenient() {
        assert_eq!(SuspectRole::from_label("criminal"), SuspectRole::Criminal);
        assert_eq!(SuspectRole::from_label(" Criminal "), SuspectRole::Criminal);
        assert_eq!(SuspectRole::from_label("suspect"), SuspectRole::Suspect);
        assert_eq!(SuspectRole::from_label("witness"), SuspectRole::Suspect);
    }

    #[test]
    fn blank_name_displays_placeholder() {
        let suspect = Suspect::new(SuspectId::ordinal(1), " ", "chef", "", "", SuspectRole::Suspect);
        assert_eq!(suspect.display_name(), "Suspect");
    }
}
