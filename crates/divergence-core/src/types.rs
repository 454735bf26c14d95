//! Core data types: distributions, rows and result sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse probability mass over the categories of one property.
///
/// Categories that are not present carry an implicit mass of `0.0`. Masses
/// do not need to sum to one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(BTreeMap<String, f64>);

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mass assigned to `category`, or `0.0` when absent.
    pub fn mass(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn insert(&mut self, category: impl Into<String>, mass: f64) -> Option<f64> {
        self.0.insert(category.into(), mass)
    }

    /// Categories carried by this distribution.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// One evaluation example: property name to its distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, Distribution>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&Distribution> {
        self.0.get(property)
    }

    pub fn insert(
        &mut self,
        property: impl Into<String>,
        distribution: Distribution,
    ) -> Option<Distribution> {
        self.0.insert(property.into(), distribution)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Distribution)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Distribution)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Distribution)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Per-property divergence scores collected across rows.
///
/// Each sequence is in row-processing order and only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DivergenceResults(BTreeMap<String, Vec<f64>>);

impl DivergenceResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a score for `property`, creating its sequence on first use.
    pub fn record(&mut self, property: &str, score: f64) {
        self.0.entry(property.to_string()).or_default().push(score);
    }

    pub fn get(&self, property: &str) -> Option<&[f64]> {
        self.0.get(property).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Arithmetic mean of every property's scores.
    ///
    /// NaN scores propagate into the mean.
    pub fn means(&self) -> BTreeMap<String, f64> {
        self.0
            .iter()
            .map(|(property, scores)| {
                let mean = scores.iter().sum::<f64>() / scores.len() as f64;
                (property.clone(), mean)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<f64>> {
        self.0
    }
}
