//! Numbered node names (`picket1`, `picket2`, ...) unique within a scene.

use fence_mesh::Scene;

/// Picket meshes.
pub const PICKET: &str = "picket";
/// Cross-section meshes.
pub const CROSS_SECTION: &str = "crossSection";
/// Fence section groups.
pub const FENCE_SECTION: &str = "fenceSection";
/// Group holding a section's pickets.
pub const PICKET_ROW: &str = "pickets";
/// Group holding a section's cross-sections.
pub const CROSS_SECTION_ROW: &str = "crossSections";
/// Fence root group.
pub const FENCE: &str = "fence";

/// `count` names `{prefix}{n}`, continuing after the highest number the
/// scene already uses for `prefix`.
pub fn numbered(scene: &Scene, prefix: &str, count: usize) -> Vec<String> {
    let start = highest_index(scene, prefix) + 1;
    (start..start + count).map(|n| format!("{prefix}{n}")).collect()
}

/// Single numbered name.
pub fn next(scene: &Scene, prefix: &str) -> String {
    format!("{prefix}{}", highest_index(scene, prefix) + 1)
}

fn highest_index(scene: &Scene, prefix: &str) -> usize {
    scene
        .iter()
        .filter_map(|(_, node)| node.name().strip_prefix(prefix)?.parse::<usize>().ok())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fence_mesh::Transform;

    #[test]
    fn test_numbering_continues() {
        let mut scene = Scene::new();
        assert_eq!(numbered(&scene, PICKET, 2), vec!["picket1", "picket2"]);

        scene.create_group("picket7", Transform::IDENTITY);
        scene.create_group("pickets", Transform::IDENTITY);
        assert_eq!(next(&scene, PICKET), "picket8");
        assert_eq!(next(&scene, FENCE_SECTION), "fenceSection1");
        assert!(numbered(&scene, CROSS_SECTION, 0).is_empty());
    }
}
