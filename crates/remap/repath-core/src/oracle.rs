//! Property-type plausibility heuristic.
//!
//! Decides whether a node is a plausible carrier for an opaque property-name
//! string using coarse keyword sniffing — a best-effort heuristic, not a
//! sound type check. Callers that know their engine's real component model
//! can substitute their own `PropertyOracle`; the resolver's control flow is
//! oblivious to the rule set.

use crate::hierarchy::{Capability, Node};

/// Trait for deciding whether a property name plausibly lives on a node.
pub trait PropertyOracle {
    fn is_plausible(&self, property: &str, node: &Node) -> bool;
}

/// What a matched keyword demands of the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// The node must carry this capability tag.
    Capability(Capability),
    /// Always plausible (transform-like properties apply to every node).
    AlwaysPlausible,
}

/// One keyword rule: a case-sensitive substring test on the property name.
#[derive(Clone, Debug)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub requires: Requirement,
}

/// Keyword-sniffing oracle. Rules are checked in order and the first rule
/// whose keyword occurs in the property name decides; a property matching no
/// rule is plausible on any node (intentionally permissive default).
#[derive(Clone, Debug)]
pub struct KeywordOracle {
    rules: Vec<KeywordRule>,
}

impl KeywordOracle {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }
}

impl Default for KeywordOracle {
    fn default() -> Self {
        // "Particle" before "Renderer": ParticleSystemRenderer-style
        // properties belong to the particle system, not the mesh renderer.
        Self::new(vec![
            KeywordRule {
                keyword: "Particle",
                requires: Requirement::Capability(Capability::HasParticleSystem),
            },
            KeywordRule {
                keyword: "Renderer",
                requires: Requirement::Capability(Capability::HasRenderer),
            },
            KeywordRule {
                keyword: "Mesh",
                requires: Requirement::Capability(Capability::HasRenderer),
            },
            KeywordRule {
                keyword: "Transform",
                requires: Requirement::AlwaysPlausible,
            },
            KeywordRule {
                keyword: "Position",
                requires: Requirement::AlwaysPlausible,
            },
            KeywordRule {
                keyword: "Rotation",
                requires: Requirement::AlwaysPlausible,
            },
        ])
    }
}

impl PropertyOracle for KeywordOracle {
    fn is_plausible(&self, property: &str, node: &Node) -> bool {
        for rule in &self.rules {
            if property.contains(rule.keyword) {
                return match rule.requires {
                    Requirement::Capability(cap) => node.has_capability(cap),
                    Requirement::AlwaysPlausible => true,
                };
            }
        }
        true
    }
}
