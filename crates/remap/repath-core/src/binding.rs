//! Bindings: the (path, property) pairs a clip animates.

use serde::{Deserialize, Serialize};

use crate::path::NodePath;

/// One animated property stream within one clip. The property name is opaque
/// to everything except the plausibility oracle's keyword sniffing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    pub path: NodePath,
    pub property: String,
}

impl Binding {
    pub fn new(path: NodePath, property: impl Into<String>) -> Self {
        Self {
            path,
            property: property.into(),
        }
    }
}
