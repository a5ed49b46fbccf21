//! Pass driver and reporting artifacts.
//!
//! `resolve_all` runs one synchronous pass: every binding is classified and
//! collected into a `RemapPlan` (the per-binding outcomes the caller applies
//! to its own curve storage) and a `ResolutionLog` (the accepted-remap and
//! warning maps that drive a UI summary or CLI report).

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::binding::Binding;
use crate::ids::ClipId;
use crate::resolver::{PathResolver, RemapOutcome};

/// One classified binding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub clip: ClipId,
    pub binding: Binding,
    pub outcome: RemapOutcome,
}

/// Outcomes for every binding in the pass, in input order. The caller applies
/// `Remapped` entries by rewriting the binding's path field and leaves
/// everything else untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RemapPlan {
    #[serde(default)]
    pub entries: Vec<PlanEntry>,
}

impl RemapPlan {
    #[inline]
    pub fn push(&mut self, entry: PlanEntry) {
        self.entries.push(entry);
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remapped_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, RemapOutcome::Remapped(_)))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, RemapOutcome::Unresolved(_)))
            .count()
    }

    /// One-line report for a CLI or status bar.
    pub fn summary(&self) -> String {
        format!(
            "{} remapped, {} warnings",
            self.remapped_count(),
            self.warning_count()
        )
    }
}

/// Report key: original path string plus property name. Keying by the pair
/// rather than the path alone keeps two bindings at the same stale path with
/// different properties from overwriting each other's entries.
pub type LogKey = (String, String);

/// Accepted remaps and warnings for display. Insertion order is irrelevant;
/// identical `(path, property)` inputs compute identical outcomes, so a
/// repeated key rewrites an equal value.
#[derive(Clone, Debug, Default)]
pub struct ResolutionLog {
    /// `(path, property)` -> remapped target path.
    pub remapped: HashMap<LogKey, String>,
    /// `(path, property)` -> warning reason.
    pub warnings: HashMap<LogKey, String>,
}

impl ResolutionLog {
    pub fn is_empty(&self) -> bool {
        self.remapped.is_empty() && self.warnings.is_empty()
    }
}

/// Resolve every binding against the live hierarchy. Runs to completion;
/// single-threaded with no suspension points. Mutating curve data from the
/// returned plan cannot invalidate the resolver's index, which was built once
/// up front from the tree shape alone.
pub fn resolve_all<I>(resolver: &PathResolver<'_>, bindings: I) -> (RemapPlan, ResolutionLog)
where
    I: IntoIterator<Item = (ClipId, Binding)>,
{
    let mut plan = RemapPlan::default();
    let mut log = ResolutionLog::default();

    for (clip, binding) in bindings {
        let outcome = resolver.resolve(&binding);
        match &outcome {
            RemapOutcome::Unchanged => {}
            RemapOutcome::Remapped(new_path) => {
                log::debug!(
                    "remap '{}' -> '{}' for property '{}'",
                    binding.path,
                    new_path,
                    binding.property
                );
                log.remapped.insert(
                    (binding.path.to_string(), binding.property.clone()),
                    new_path.to_string(),
                );
            }
            RemapOutcome::Unresolved(reason) => {
                log::warn!(
                    "unresolved '{}' for property '{}': {}",
                    binding.path,
                    binding.property,
                    reason.as_str()
                );
                log.warnings.insert(
                    (binding.path.to_string(), binding.property.clone()),
                    reason.as_str().to_string(),
                );
            }
        }
        plan.push(PlanEntry {
            clip,
            binding,
            outcome,
        });
    }

    log::info!("resolution pass complete: {}", plan.summary());
    (plan, log)
}
