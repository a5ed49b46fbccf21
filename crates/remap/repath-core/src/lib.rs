//! repath-core (engine-agnostic)
//!
//! Repairs broken references inside animation data after a character
//! hierarchy has been restructured. Each animated property is addressed by a
//! slash-separated node path plus a property name; when nodes are renamed,
//! moved, or reparented those paths go stale. This crate indexes the live
//! hierarchy, classifies each stale `(path, property)` binding through a
//! ranked tie-break policy, and reports the result as a plan plus a log.
//!
//! The editor UI, clip/curve storage, and hierarchy persistence are external
//! collaborators: the caller supplies the tree and the bindings, and applies
//! accepted remaps to its own data.

pub mod binding;
pub mod error;
pub mod hierarchy;
pub mod ids;
pub mod oracle;
pub mod path;
pub mod plan;
pub mod resolver;

// Re-exports for consumers (adapters)
pub use binding::Binding;
pub use error::PathError;
pub use hierarchy::{Candidate, Capability, Hierarchy, HierarchyIndex, Node};
pub use ids::{ClipId, NodeId};
pub use oracle::{KeywordOracle, KeywordRule, PropertyOracle, Requirement};
pub use path::NodePath;
pub use plan::{resolve_all, LogKey, PlanEntry, RemapPlan, ResolutionLog};
pub use resolver::{PathResolver, RemapOutcome, UnresolvedReason};
