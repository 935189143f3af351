use fence_builder::{BarPlacement, FenceParams, FenceVariant, ScallopParams};
use glam::DVec3;

#[test]
fn empty_object_decodes_to_defaults() {
    let params: FenceParams = serde_json::from_str("{}").unwrap();
    assert_eq!(params, FenceParams::default());
}

#[test]
fn decodes_camel_case_fields() {
    let json = r#"{
        "picketWidth": 0.3,
        "picketHeight": 3.5,
        "picketDepth": 0.08,
        "picketSpacing": 0.25,
        "numPickets": 12,
        "crossSectionHeight": 0.3,
        "crossSectionDepth": 0.12,
        "numCrossSections": 3,
        "crossSectionOffset": 0.5,
        "crossSectionSpacing": 1.0,
        "barPlacement": "Behind",
        "numFenceSections": 4,
        "sectionSpacing": 0.1,
        "xOffset": -3.0,
        "fenceVariant": "Normal"
    }"#;
    let params: FenceParams = serde_json::from_str(json).unwrap();

    assert_eq!(params.picket_width, 0.3);
    assert_eq!(params.num_pickets, 12);
    assert_eq!(params.num_cross_sections, 3);
    assert_eq!(params.cross_section_offset, 0.5);
    assert_eq!(params.bar_placement, BarPlacement::Behind);
    assert_eq!(params.num_fence_sections, 4);
    assert_eq!(params.x_offset, -3.0);
    assert_eq!(params.fence_variant, FenceVariant::Normal);
    assert!(params.validate().is_ok());
}

#[test]
fn decodes_scalloped_variant() {
    let json = r#"{
        "fenceVariant": {
            "Scalloped": {
                "latticeDivisions": [4, 3, 2],
                "controlPoints": [[1, 2, 0], [2, 2, 0]],
                "scallopControlPointDelta": [0.0, 1.5, 0.0]
            }
        }
    }"#;
    let params: FenceParams = serde_json::from_str(json).unwrap();
    let scallop = params.scallop().unwrap();

    assert_eq!(scallop.lattice_divisions, [4, 3, 2]);
    assert_eq!(scallop.control_points, vec![[1, 2, 0], [2, 2, 0]]);
    assert_eq!(scallop.scallop_control_point_delta, DVec3::new(0.0, 1.5, 0.0));
}

#[test]
fn scalloped_fields_fall_back_to_defaults() {
    let params: FenceParams =
        serde_json::from_str(r#"{ "fenceVariant": { "Scalloped": {} } }"#).unwrap();
    assert_eq!(params.scallop(), Some(&ScallopParams::default()));
}

#[test]
fn preset_survives_json() {
    let preset = FenceParams::scalloped_preset().nth_in_row(3);
    let json = serde_json::to_string(&preset).unwrap();
    assert!(json.contains("\"xOffset\":78.0"));
    let decoded: FenceParams = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, preset);
}

#[test]
fn rejects_unknown_variant() {
    let result: Result<FenceParams, _> =
        serde_json::from_str(r#"{ "fenceVariant": "Picket" }"#);
    assert!(result.is_err());
}
