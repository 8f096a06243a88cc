use std::collections::HashMap;

use serde::Deserialize;

use ncache_frames_core::{
    cached_span, overlay_arrays, union_all, union_frames, Coverage, FrameRange, RangeRelation,
};

#[derive(Debug, Deserialize)]
struct CacheVersion {
    name: String,
    scene_range: FrameRange,
    nodes: HashMap<String, NodeInfo>,
}

#[derive(Debug, Deserialize)]
struct NodeInfo {
    range: FrameRange,
}

fn load(name: &str) -> CacheVersion {
    ncache_test_fixtures::cacheversions::load(name).expect("cache version fixture")
}

#[test]
fn fixtures_are_listed() {
    let mut keys = ncache_test_fixtures::cacheversions::keys();
    keys.sort();
    assert_eq!(keys, vec!["flag_v001", "flag_v002"]);
    assert_eq!(load("flag_v001").name, "flag_v001");
}

#[test]
fn frames_cached_across_versions() {
    let v1 = load("flag_v001");
    let v2 = load("flag_v002");

    let flag = union_frames(v1.nodes["flagShape"].range, v2.nodes["flagShape"].range);
    assert_eq!(flag.first(), Some(&1));
    assert_eq!(flag.last(), Some(&200));
    assert_eq!(flag.len(), 200);

    // rope caches never touched 81..=149
    let rope = union_frames(v1.nodes["ropeShape"].range, v2.nodes["ropeShape"].range);
    assert_eq!(rope.len(), 80 + 41);
    assert!(!rope.contains(81));
    assert!(!rope.contains(149));

    let everything = union_all(
        [&v1, &v2]
            .iter()
            .flat_map(|v| v.nodes.values().map(|n| n.range)),
    );
    assert_eq!(everything, flag);
}

#[test]
fn cached_flags_overlay_between_versions() {
    let v1 = load("flag_v001");
    let v2 = load("flag_v002");
    let a = v1.nodes["flagShape"].range;
    let b = v2.nodes["flagShape"].range;

    let flags_a = vec![true; a.len()];
    let flags_b = vec![true; b.len()];
    let overlay = overlay_arrays(&flags_a, &flags_b, a, b).unwrap();
    assert_eq!(overlay.ranges.relation, RangeRelation::Overlapping);
    assert_eq!(overlay.len(), 200);

    let coverage = overlay.coverage();
    let both = coverage.iter().filter(|c| **c == Coverage::Both).count();
    assert_eq!(both, 21); // frames 100..=120
    assert_eq!(coverage[0], Coverage::FirstOnly);
    assert_eq!(coverage[199], Coverage::SecondOnly);
    assert!(!coverage.contains(&Coverage::Neither));

    let rope = overlay_arrays(
        &vec![1u8; v1.nodes["ropeShape"].range.len()],
        &vec![2u8; v2.nodes["ropeShape"].range.len()],
        v1.nodes["ropeShape"].range,
        v2.nodes["ropeShape"].range,
    )
    .unwrap();
    assert_eq!(rope.ranges.relation, RangeRelation::Disjoint);
    assert_eq!(rope.len(), 80 + 41);
    assert_eq!(rope.first[79], Some(1));
    assert_eq!(rope.second[80], Some(2));
}

#[test]
fn cached_range_bar() {
    let v2 = load("flag_v002");
    let span = cached_span(v2.nodes["ropeShape"].range, v2.scene_range);
    assert!(!span.is_empty());
    assert!(span.start_percent > 74.0 && span.start_percent < 75.0);
    assert!(span.end_percent > 94.0 && span.end_percent < 95.0);

    let full = cached_span(v2.nodes["flagShape"].range, v2.scene_range);
    assert_eq!(full.end_percent, 100.0);
}
