use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Static pedigree entry.
///
/// Founders (generation 1) have no parents and are handed out at random on
/// introduction. Higher generations are reachable only by breeding carriers of
/// exactly the listed unordered parent pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDef {
    pub id: String,
    pub name: String,
    pub generation: u8,
    pub species_id: String,
    #[serde(default)]
    pub parent_a: Option<String>,
    #[serde(default)]
    pub parent_b: Option<String>,
}

impl VariantDef {
    #[must_use]
    pub fn founder(id: &str, name: &str, species_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            generation: 1,
            species_id: species_id.to_string(),
            parent_a: None,
            parent_b: None,
        }
    }

    #[must_use]
    pub fn bred(
        id: &str,
        name: &str,
        species_id: &str,
        generation: u8,
        parents: (&str, &str),
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            generation,
            species_id: species_id.to_string(),
            parent_a: Some(parents.0.to_string()),
            parent_b: Some(parents.1.to_string()),
        }
    }

    #[must_use]
    pub fn is_founder(&self) -> bool {
        self.parent_a.is_none() && self.parent_b.is_none()
    }

    /// Both parents, when the entry is a bred variant.
    #[must_use]
    pub fn parents(&self) -> Option<(&str, &str)> {
        match (&self.parent_a, &self.parent_b) {
            (Some(a), Some(b)) => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }

    /// Unordered match against a parent pair.
    #[must_use]
    pub fn bred_from(&self, a: &str, b: &str) -> bool {
        self.parents()
            .is_some_and(|(pa, pb)| (pa == a && pb == b) || (pa == b && pb == a))
    }
}

/// Append-only record of every variant ever produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscoverySet(BTreeSet<String>);

impl DiscoverySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a discovery. Returns `true` the first time an id is seen.
    pub fn insert(&mut self, variant_id: &str) -> bool {
        self.0.insert(variant_id.to_string())
    }

    #[must_use]
    pub fn contains(&self, variant_id: &str) -> bool {
        self.0.contains(variant_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DiscoverySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_parent_match() {
        let v = VariantDef::bred("showa", "Showa", "koi", 2, ("kohaku", "sanke"));
        assert!(v.bred_from("kohaku", "sanke"));
        assert!(v.bred_from("sanke", "kohaku"));
        assert!(!v.bred_from("kohaku", "kohaku"));
        assert!(!v.is_founder());
    }

    #[test]
    fn test_founder_never_matches() {
        let v = VariantDef::founder("kohaku", "Kohaku", "koi");
        assert!(v.is_founder());
        assert!(v.parents().is_none());
        assert!(!v.bred_from("kohaku", "kohaku"));
    }

    #[test]
    fn test_discovery_is_a_set() {
        let mut set = DiscoverySet::new();
        assert!(set.insert("kohaku"));
        assert!(!set.insert("kohaku"));
        assert!(set.insert("showa"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["kohaku", "showa"]);
    }

    #[test]
    fn test_discovery_serializes_as_list() {
        let set: DiscoverySet = ["b", "a", "b"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
