//! Role choice configuration loading from config.toml
//!
//! The set of roles a user can hold within a party is read-only data supplied
//! once at startup. Each role is a small positive integer paired with a
//! human-readable label. When no configuration file is present, the built-in
//! defaults (`Organizer` and `Participant`) are used.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Role value for the user organizing a party
pub const ORGANIZER: i16 = 1;
/// Role value for a regular party participant
pub const PARTICIPANT: i16 = 2;

/// A single selectable role
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleChoice {
    /// Stored value of the role
    pub value: i16,
    /// Human-readable label
    pub label: String,
}

/// Configuration structure representing the roles section of config.toml
#[derive(Debug, Deserialize)]
struct RolesFile {
    roles: Vec<RoleChoice>,
}

/// The fixed set of role values accepted when linking a user to a party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChoices {
    choices: Vec<RoleChoice>,
}

impl RoleChoices {
    /// Builds a validated set of role choices.
    ///
    /// # Errors
    /// Returns `Error::Config` if the list is empty, a value is not positive,
    /// a value appears twice, or a label is blank.
    pub fn new(choices: Vec<RoleChoice>) -> Result<Self> {
        if choices.is_empty() {
            return Err(Error::Config {
                message: "At least one role choice must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for choice in &choices {
            if choice.value <= 0 {
                return Err(Error::Config {
                    message: format!("Role value must be positive, got {}", choice.value),
                });
            }
            if !seen.insert(choice.value) {
                return Err(Error::Config {
                    message: format!("Duplicate role value {}", choice.value),
                });
            }
            if choice.label.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Role {} has an empty label", choice.value),
                });
            }
        }

        Ok(Self { choices })
    }

    /// Lists all `(value, label)` choices in configuration order.
    #[must_use]
    pub fn get_choices(&self) -> &[RoleChoice] {
        &self.choices
    }

    /// Returns the label for a role value, if it is a known choice.
    #[must_use]
    pub fn label_for(&self, value: i16) -> Option<&str> {
        self.choices
            .iter()
            .find(|choice| choice.value == value)
            .map(|choice| choice.label.as_str())
    }

    /// Whether `value` is one of the configured roles.
    #[must_use]
    pub fn contains(&self, value: i16) -> bool {
        self.label_for(value).is_some()
    }
}

impl Default for RoleChoices {
    fn default() -> Self {
        Self {
            choices: vec![
                RoleChoice {
                    value: ORGANIZER,
                    label: "Organizer".to_string(),
                },
                RoleChoice {
                    value: PARTICIPANT,
                    label: "Participant".to_string(),
                },
            ],
        }
    }
}

/// Parses role choices from TOML text containing a `[[roles]]` array.
pub fn parse_role_choices(contents: &str) -> Result<RoleChoices> {
    let file: RolesFile = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse role configuration: {e}"),
    })?;
    RoleChoices::new(file.roles)
}

/// Loads role choices from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or the `roles` array is missing
/// - The roles fail validation (see [`RoleChoices::new`])
pub fn load_role_choices<P: AsRef<Path>>(path: P) -> Result<RoleChoices> {
    let path_ref = path.as_ref();
    debug!("Loading role choices from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_role_choices(&contents)
}

/// Loads role choices from `./config.toml`, or the built-in defaults when the
/// file does not exist.
pub fn load_default_role_choices() -> Result<RoleChoices> {
    let path = Path::new("config.toml");
    if path.exists() {
        load_role_choices(path)
    } else {
        info!("No config.toml found, using default role choices.");
        Ok(RoleChoices::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_role_choices() {
        let toml_str = r#"
            [[roles]]
            value = 1
            label = "Organizer"

            [[roles]]
            value = 2
            label = "Participant"

            [[roles]]
            value = 3
            label = "Birthday person"
        "#;

        let roles = parse_role_choices(toml_str).unwrap();
        assert_eq!(roles.get_choices().len(), 3);
        assert_eq!(roles.label_for(3), Some("Birthday person"));
        assert!(roles.contains(1));
        assert!(!roles.contains(4));
    }

    #[test]
    fn test_default_choices() {
        let roles = RoleChoices::default();
        assert_eq!(roles.label_for(ORGANIZER), Some("Organizer"));
        assert_eq!(roles.label_for(PARTICIPANT), Some("Participant"));
        assert!(!roles.contains(0));
    }

    #[test]
    fn test_rejects_invalid_choices() {
        let duplicate = r#"
            [[roles]]
            value = 1
            label = "Organizer"

            [[roles]]
            value = 1
            label = "Host"
        "#;
        assert!(matches!(
            parse_role_choices(duplicate),
            Err(Error::Config { .. })
        ));

        let non_positive = r#"
            [[roles]]
            value = 0
            label = "Nobody"
        "#;
        assert!(matches!(
            parse_role_choices(non_positive),
            Err(Error::Config { .. })
        ));

        assert!(matches!(
            RoleChoices::new(Vec::new()),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_role_choices("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
