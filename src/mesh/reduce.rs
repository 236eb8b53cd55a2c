use indexmap::IndexMap;

use super::Mesh;

/// Area centroids grouped by place name. Keys keep the order in which
/// each place is first seen among the areas; points keep area order.
pub type PlacePoints = IndexMap<String, Vec<[f32; 3]>>;

impl Mesh {
    /// Group area centroids by place name, dropping unplaced areas.
    /// Returns `None` when no area resolves to a place.
    pub fn place_points(&self) -> Option<PlacePoints> {
        let mut points = PlacePoints::new();
        for area in &self.areas {
            let Some(name) = self.place_name(area) else {
                continue;
            };
            points
                .entry(name.to_string())
                .or_default()
                .push(area.centroid.to_array());
        }

        if points.is_empty() {
            None
        } else {
            Some(points)
        }
    }
}
