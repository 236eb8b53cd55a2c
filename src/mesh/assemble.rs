use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;
use tracing::debug;

use super::{Area, Mesh, Place};
use crate::codec::{AreaId, AreaRecord, BinaryReader, PlaceId, RawNav, Vec3};
use crate::error::{Error, ReferenceKind, Result};

impl Mesh {
    /// Check every cross-record reference and build the mesh.
    ///
    /// Connections must name an existing area and an edge that polygon
    /// has; any miss fails the whole file. Ladder ids are kept as decoded.
    /// Areas naming an unknown place are kept but unplaced.
    pub fn assemble(raw: RawNav) -> Result<Self> {
        let RawNav { header, places, areas, ladders } = raw;

        let index: AHashMap<AreaId, usize> = areas
            .iter()
            .enumerate()
            .map(|(i, area)| (area.id, i))
            .collect();
        let ladder_ids: AHashSet<u32> = ladders.iter().map(|l| l.id).collect();

        for area in &areas {
            check_connections(area, &areas, &index)?;
            for missing in area.ladders.iter().filter(|id| !ladder_ids.contains(id)) {
                debug!(area = area.id, ladder = missing, "ladder id not in ladder table");
            }
        }

        let has_unnamed_areas = places.has_unnamed_areas;
        let places: IndexMap<PlaceId, Place> = places
            .names
            .into_iter()
            .map(|(id, name)| (id, Place { id, name }))
            .collect();

        let areas = areas
            .into_iter()
            .map(|record| {
                let place = resolve_place(&record, &places);
                let centroid = Vec3::mean(&record.corners).ok_or_else(|| {
                    BinaryReader::malformed(record.offset, format!("area {} has no corners", record.id))
                })?;
                Ok(Area { record, place, centroid })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            header,
            areas,
            places,
            ladders,
            has_unnamed_areas,
            index,
        })
    }
}

fn check_connections(
    area: &AreaRecord,
    areas: &[AreaRecord],
    index: &AHashMap<AreaId, usize>,
) -> Result<()> {
    for (_, conn) in area.all_connections() {
        let Some(&target) = index.get(&conn.target) else {
            return Err(Error::DanglingReference {
                area: area.id,
                target: conn.target,
                kind: ReferenceKind::Area,
            });
        };
        if conn.edge as usize >= areas[target].corners.len() {
            return Err(Error::DanglingReference {
                area: area.id,
                target: conn.edge as u32,
                kind: ReferenceKind::Edge,
            });
        }
    }
    Ok(())
}

fn resolve_place(record: &AreaRecord, places: &IndexMap<PlaceId, Place>) -> Option<PlaceId> {
    match record.place_id {
        0 => None,
        id if places.contains_key(&id) => Some(id),
        id => {
            debug!(area = record.id, place = id, "unknown place id, leaving area unplaced");
            None
        }
    }
}
