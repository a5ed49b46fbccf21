//! NodePath parsing and formatting.
//!
//! Grammar (simple, engine-agnostic):
//!   name/.../name
//! - '/' separates node names along a walk from the hierarchy root
//! - Names may contain whitespace ("Left Arm" is a legal scene-node name)
//! - Empty components are rejected ("A//B", leading or trailing '/')
//!
//! Paths are compared structurally: two paths are equal iff their component
//! sequences are equal. The resolver relies on `ends_with` for its
//! suffix-alignment tier.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    components: Vec<String>,
}

impl NodePath {
    /// Construct a NodePath from pre-split components.
    /// Components must be non-empty; use `parse` for untrusted input.
    pub fn new(components: Vec<String>) -> Self {
        debug_assert!(components.iter().all(|c| !c.is_empty()));
        Self { components }
    }

    /// Parse a slash-separated path string.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }
        let parts: Vec<&str> = s.split('/').collect();
        if parts.iter().any(|seg| seg.is_empty()) {
            return Err(PathError::EmptyComponent {
                path: s.to_string(),
            });
        }
        Ok(Self {
            components: parts.into_iter().map(|p| p.to_string()).collect(),
        })
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Last component of the path (the node the path denotes).
    pub fn leaf(&self) -> &str {
        self.components
            .last()
            .map(|s| s.as_str())
            .unwrap_or_default()
    }

    /// True if this path's trailing components equal `suffix` in full.
    /// Used by the suffix-alignment tier: a candidate at "W/A/B/X" still
    /// matches the stale path "A/B/X" after a wrapper was inserted above.
    pub fn ends_with(&self, suffix: &NodePath) -> bool {
        if self.components.len() < suffix.components.len() {
            return false;
        }
        let skip = self.components.len() - suffix.components.len();
        self.components[skip..] == suffix.components[..]
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.components.join("/"))
    }
}

impl FromStr for NodePath {
    type Err = PathError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodePath::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for NodePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NodePath {
    fn deserialize<D>(deserializer: D) -> Result<NodePath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NodePath::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let p = NodePath::parse("Root/Arm/Hand").unwrap();
        assert_eq!(
            p.components(),
            &["Root".to_string(), "Arm".to_string(), "Hand".to_string()]
        );
        assert_eq!(p.leaf(), "Hand");
        assert_eq!(p.to_string(), "Root/Arm/Hand");
    }

    #[test]
    fn parse_single_component() {
        let p = NodePath::parse("Hips").unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.leaf(), "Hips");
    }

    #[test]
    fn parse_allows_whitespace_in_names() {
        let p = NodePath::parse("Left Arm/Hand").unwrap();
        assert_eq!(p.components()[0], "Left Arm");
    }

    #[test]
    fn parse_rejects_empty_components() {
        assert!(NodePath::parse("").is_err());
        assert!(NodePath::parse("A//B").is_err());
        assert!(NodePath::parse("/A").is_err());
        assert!(NodePath::parse("A/").is_err());
    }

    #[test]
    fn ends_with_full_suffix_only() {
        let long = NodePath::parse("W/A/B/X").unwrap();
        let stale = NodePath::parse("A/B/X").unwrap();
        assert!(long.ends_with(&stale));
        assert!(long.ends_with(&long));
        assert!(!stale.ends_with(&long));
        // Partial component text must not match
        let other = NodePath::parse("B/X").unwrap();
        assert!(long.ends_with(&other));
        let mismatch = NodePath::parse("A/X").unwrap();
        assert!(!long.ends_with(&mismatch));
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let p = NodePath::parse("Root/Spine/Head").unwrap();
        let s = serde_json::to_string(&p).unwrap();
        assert_eq!(s, "\"Root/Spine/Head\"");
        let back: NodePath = serde_json::from_str(&s).unwrap();
        assert_eq!(back, p);
    }
}
