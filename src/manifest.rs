//! Aggregate manifest of the templates exposed by a build.

use crate::config::TemplateDefinition;
use serde::{Deserialize, Serialize};

/// Discovery entry for one template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemplateSummary {
    pub name: String,
    pub description: String,
    pub category: String,
    /// `/` followed by the namespace
    pub path: String,
}

/// Projects the identity fields of an unresolved definition. Never fails;
/// missing fields become empty strings.
pub fn summarize(definition: &TemplateDefinition, namespace: &str) -> TemplateSummary {
    TemplateSummary {
        name: definition.name().to_string(),
        description: definition.description().to_string(),
        category: definition.category().to_string(),
        path: format!("/{}", namespace),
    }
}

/// Ordered collection of summaries, serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<TemplateSummary>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a summary; entries keep insertion order.
    pub fn push(&mut self, summary: TemplateSummary) {
        self.entries.push(summary);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateSummary> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[TemplateSummary] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a TemplateSummary;
    type IntoIter = std::slice::Iter<'a, TemplateSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<TemplateSummary> for Manifest {
    fn from_iter<I: IntoIterator<Item = TemplateSummary>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
