//! Ordered check results.
//!
//! [`CheckResults`] maps check-names to verdicts in the order the checks first
//! reported them. Reports render in that order, so the map is a list of
//! entries rather than a hash map.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::verdict::{Verdict, VerdictKind};

/// Insertion-ordered map from check-name to verdict.
///
/// Recording a verdict under an existing name replaces the old verdict but
/// keeps the name's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResults {
    entries: Vec<(String, Verdict)>,
}

impl CheckResults {
    /// Create an empty result map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict, overwriting any earlier verdict for `name`.
    pub fn record(&mut self, name: impl Into<String>, verdict: Verdict) {
        let name = name.into();
        tracing::debug!("{} -> {}", name, verdict);
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = verdict,
            None => self.entries.push((name, verdict)),
        }
    }

    /// Get the verdict for a check-name.
    pub fn get(&self, name: &str) -> Option<&Verdict> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, verdict)| verdict)
    }

    /// Get the verdict kind for a check-name.
    pub fn status(&self, name: &str) -> Option<VerdictKind> {
        self.get(name).map(Verdict::kind)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, verdict)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Verdict)> {
        self.entries
            .iter()
            .map(|(name, verdict)| (name.as_str(), verdict))
    }

    /// Check-names in report order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Names of failing checks in report order.
    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, verdict)| verdict.is_failure())
            .map(|(name, _)| name)
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Number of verdicts of the given kind.
    pub fn count(&self, kind: VerdictKind) -> usize {
        self.entries
            .iter()
            .filter(|(_, verdict)| verdict.kind() == kind)
            .count()
    }
}

impl Serialize for CheckResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, verdict) in &self.entries {
            map.serialize_entry(name, verdict.token())?;
        }
        map.end()
    }
}
