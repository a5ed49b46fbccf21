//! Stale-path resolution: the four-tier search policy.
//!
//! Classifies one `(path, property)` binding against a live hierarchy. In
//! order, first success wins:
//!
//! 1. already-valid check (the path resolves from the root as-is)
//! 2. exact path equality among indexed candidates
//! 3. suffix alignment (candidate's trailing components equal the stale
//!    path in full — robust to wrapper groups inserted above the subtree)
//! 4. leaf-name equality plus plausibility-oracle approval
//! 5. leaf-name equality alone, a last-resort guess
//!
//! Targets found structurally (tiers 2/3) or by bare name (tier 5) still get
//! a post-hoc plausibility check; a found-but-implausible target yields
//! `Unresolved(TypeMismatch)` instead of silently corrupting data. The
//! already-valid check runs before any search on purpose: re-remapping a
//! valid path is an error, not a missed optimization.

use serde::{Deserialize, Serialize};

use crate::binding::Binding;
use crate::hierarchy::{Hierarchy, HierarchyIndex};
use crate::oracle::PropertyOracle;
use crate::path::NodePath;

/// Why a binding could not be resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnresolvedReason {
    /// No candidate matched at any tier.
    NoCandidate,
    /// A target was found but failed the plausibility check.
    TypeMismatch,
}

impl UnresolvedReason {
    pub fn as_str(self) -> &'static str {
        match self {
            UnresolvedReason::NoCandidate => "no candidate",
            UnresolvedReason::TypeMismatch => "type mismatch",
        }
    }
}

/// Tagged result of resolving one binding. Every well-formed binding yields
/// exactly one outcome; there is no crashing error path in the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemapOutcome {
    /// The path already resolves under the current tree; leave it alone.
    Unchanged,
    /// The binding should be rewritten to this path.
    Remapped(NodePath),
    /// Reported to the caller, never silently dropped.
    Unresolved(UnresolvedReason),
}

/// Resolver over one live hierarchy. The candidate index is built once at
/// construction and reused for every binding in the pass.
pub struct PathResolver<'a> {
    hierarchy: &'a Hierarchy,
    index: HierarchyIndex,
    oracle: &'a dyn PropertyOracle,
}

impl<'a> PathResolver<'a> {
    pub fn new(hierarchy: &'a Hierarchy, oracle: &'a dyn PropertyOracle) -> Self {
        Self {
            hierarchy,
            index: HierarchyIndex::build(hierarchy),
            oracle,
        }
    }

    pub fn index(&self) -> &HierarchyIndex {
        &self.index
    }

    /// Classify one stale binding. Pure function of `(path, property)` and
    /// the tree shape, so resolving the same binding twice yields the same
    /// outcome.
    pub fn resolve(&self, binding: &Binding) -> RemapOutcome {
        if self.hierarchy.resolve_path(&binding.path).is_some() {
            return RemapOutcome::Unchanged;
        }

        let stale = &binding.path;
        let candidates = self.index.candidates();

        // Tier 2: full path equality among descendants (e.g. the root
        // changed identity but the subtree is intact).
        let mut found = candidates.iter().find(|c| c.path == *stale);

        // Tier 3: trailing components equal the stale path verbatim. First
        // qualifier in traversal order is final; no scoring.
        if found.is_none() {
            found = candidates.iter().find(|c| c.path.ends_with(stale));
        }

        // Tier 4: leaf name plus plausibility. The oracle already vetted
        // this target, so the post-hoc check below is skipped for it.
        let mut vetted = false;
        if found.is_none() {
            found = candidates.iter().find(|c| {
                let node = self.hierarchy.node(c.node);
                node.name == stale.leaf() && self.oracle.is_plausible(&binding.property, node)
            });
            vetted = found.is_some();
        }

        // Tier 5: leaf name only, an explicit best-effort guess.
        if found.is_none() {
            found = candidates
                .iter()
                .find(|c| self.hierarchy.node(c.node).name == stale.leaf());
        }

        let Some(target) = found else {
            return RemapOutcome::Unresolved(UnresolvedReason::NoCandidate);
        };

        if !vetted
            && !self
                .oracle
                .is_plausible(&binding.property, self.hierarchy.node(target.node))
        {
            return RemapOutcome::Unresolved(UnresolvedReason::TypeMismatch);
        }

        // Degenerate case: the search landed on the stale path itself
        // (possible with duplicate sibling names).
        if target.path == *stale {
            return RemapOutcome::Unchanged;
        }
        RemapOutcome::Remapped(target.path.clone())
    }
}
