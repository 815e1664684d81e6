// ABOUTME: Source repository identifier in owner/name form.
// ABOUTME: Only emptiness is validated; existence is discovered by the platform.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("repository cannot be empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository(String);

impl Repository {
    pub fn new(value: &str) -> Result<Self, RepositoryError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(RepositoryError::Empty);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Owner segment, if the identifier has the `owner/name` shape.
    pub fn owner(&self) -> Option<&str> {
        self.0.split_once('/').map(|(owner, _)| owner)
    }

    /// Name segment; the whole identifier when there is no owner.
    pub fn name(&self) -> &str {
        self.0
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.0)
    }

    /// Identifier with the owner separator replaced by a hyphen.
    pub fn slug(&self) -> String {
        self.0.replacen('/', "-", 1)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Repository {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_owner_and_name() {
        let repo = Repository::new("acme/widgets").unwrap();
        assert_eq!(repo.owner(), Some("acme"));
        assert_eq!(repo.name(), "widgets");
        assert_eq!(repo.slug(), "acme-widgets");
    }

    #[test]
    fn bare_name_has_no_owner() {
        let repo = Repository::new("widgets").unwrap();
        assert_eq!(repo.owner(), None);
        assert_eq!(repo.name(), "widgets");
        assert_eq!(repo.slug(), "widgets");
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(Repository::new(""), Err(RepositoryError::Empty));
        assert_eq!(Repository::new("   "), Err(RepositoryError::Empty));
    }
}
