//! End-to-end pass over the shared rig fixtures: a rig whose skeleton was
//! wrapped in an "Armature" group after the clips were authored.

use serde::Deserialize;

use repath_core::{
    Binding, ClipId, Hierarchy, KeywordOracle, NodePath, PathResolver, RemapOutcome,
};

#[derive(Debug, Deserialize)]
struct Row {
    clip: u32,
    path: NodePath,
    property: String,
}

fn load_bindings(name: &str) -> Vec<(ClipId, Binding)> {
    let rows: Vec<Row> = repath_test_fixtures::bindings::load(name).expect("binding fixture");
    rows.into_iter()
        .map(|r| (ClipId(r.clip), Binding::new(r.path, r.property)))
        .collect()
}

/// it should resolve the restructured rig with two remaps and two warnings
#[test]
fn restructured_rig_pass() {
    let h: Hierarchy =
        repath_test_fixtures::hierarchies::load("rig-restructured").expect("hierarchy fixture");
    let oracle = KeywordOracle::default();
    let resolver = PathResolver::new(&h, &oracle);

    let (plan, log) = repath_core::resolve_all(&resolver, load_bindings("rig-clips"));

    assert_eq!(plan.entries.len(), 5);
    assert_eq!(plan.remapped_count(), 2);
    assert_eq!(plan.warning_count(), 2);
    assert_eq!(plan.summary(), "2 remapped, 2 warnings");

    // The FX subtree was untouched, so its binding stays as-is.
    assert_eq!(plan.entries[0].outcome, RemapOutcome::Unchanged);

    // Suffix alignment recovers the wrapped skeleton path.
    assert_eq!(
        plan.entries[1].outcome,
        RemapOutcome::Remapped(NodePath::parse("Armature/Hips/Spine/Chest/Head").unwrap())
    );

    // The renamed ancestor chain falls through to the leaf-plus-type tier.
    assert_eq!(
        plan.entries[2].outcome,
        RemapOutcome::Remapped(NodePath::parse("Armature/Hips/Spine/Chest/Head").unwrap())
    );

    let head_key = (
        "Hips/Spine/Chest/Head".to_string(),
        "Transform.localPosition.x".to_string(),
    );
    assert_eq!(
        log.remapped.get(&head_key).map(String::as_str),
        Some("Armature/Hips/Spine/Chest/Head")
    );
    assert_eq!(log.warnings.len(), 2);
}

/// it should report everything as valid against the pre-restructure rig
#[test]
fn original_rig_accepts_its_own_paths() {
    let h: Hierarchy =
        repath_test_fixtures::hierarchies::load("rig-before").expect("hierarchy fixture");
    let oracle = KeywordOracle::default();
    let resolver = PathResolver::new(&h, &oracle);

    for path in ["FX/Sparks", "Hips/Spine/Chest/Head", "Hips/LeftLeg/Foot"] {
        let binding = Binding::new(NodePath::parse(path).unwrap(), "Transform.localPosition.x");
        assert_eq!(resolver.resolve(&binding), RemapOutcome::Unchanged);
    }
}
