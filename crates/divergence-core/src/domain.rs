//! Evaluation domain: the fixed category support of every property.
//!
//! A domain can be built in code or parsed from a YAML/JSON string. Parsed
//! domains are validated; domains built in code are taken as given.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Errors that can occur when parsing a domain.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Domain validation failed: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Property name to the ordered list of categories it may take.
///
/// Category order fixes the layout of aligned vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Domain(BTreeMap<String, Vec<String>>);

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a domain from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, DomainError> {
        let domain: Domain = serde_yaml::from_str(yaml)?;
        domain.validate()?;
        Ok(domain)
    }

    /// Parse a domain from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let domain: Domain = serde_json::from_str(json)?;
        domain.validate()?;
        Ok(domain)
    }

    /// Declare `property` with its ordered categories, replacing any previous list.
    pub fn insert<S: Into<String>>(
        &mut self,
        property: impl Into<String>,
        categories: impl IntoIterator<Item = S>,
    ) -> Option<Vec<String>> {
        self.0.insert(
            property.into(),
            categories.into_iter().map(Into::into).collect(),
        )
    }

    /// Categories declared for `property`.
    pub fn categories(&self, property: &str) -> Option<&[String]> {
        self.0.get(property).map(Vec::as_slice)
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate the domain structure.
    fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::MissingField("properties".to_string()));
        }

        for (property, categories) in &self.0 {
            if property.is_empty() {
                return Err(DomainError::ValidationError(
                    "Empty property name".to_string(),
                ));
            }

            if categories.is_empty() {
                return Err(DomainError::MissingField(format!(
                    "{}.categories",
                    property
                )));
            }

            let mut seen = HashSet::new();
            for category in categories {
                if !seen.insert(category) {
                    return Err(DomainError::ValidationError(format!(
                        "Duplicate category '{}' in property '{}'",
                        category, property
                    )));
                }
            }
        }

        Ok(())
    }
}

impl<K, C, S> FromIterator<(K, C)> for Domain
where
    K: Into<String>,
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        let mut domain = Domain::new();
        for (property, categories) in iter {
            domain.insert(property, categories);
        }
        domain
    }
}
