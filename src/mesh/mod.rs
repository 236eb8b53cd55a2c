//! Validated navigation mesh.
//!
//! A `Mesh` only exists once every cross-reference in the file has been
//! checked, so consumers never see a dangling connection.

pub mod assemble;
pub mod reduce;

use ahash::AHashMap;
use indexmap::IndexMap;

use crate::codec::{
    AreaFlags, AreaId, AreaRecord, Connection, Direction, Ladder, NavHeader, PlaceId, RawNav, Vec3,
};
use crate::error::Result;

pub use reduce::PlacePoints;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
}

/// Decoded area with its place resolved and centroid computed
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub record: AreaRecord,
    /// `None` when the record has no place or names one missing from the table
    pub place: Option<PlaceId>,
    pub centroid: Vec3,
}

impl Area {
    pub fn id(&self) -> AreaId {
        self.record.id
    }

    pub fn flags(&self) -> AreaFlags {
        self.record.flags
    }

    pub fn corners(&self) -> &[Vec3] {
        &self.record.corners
    }

    pub fn connections(&self, dir: Direction) -> &[Connection] {
        self.record.connections(dir)
    }
}

#[derive(Debug, Clone)]
pub struct Mesh {
    header: NavHeader,
    areas: Vec<Area>,
    places: IndexMap<PlaceId, Place>,
    ladders: Vec<Ladder>,
    has_unnamed_areas: bool,
    index: AHashMap<AreaId, usize>,
}

impl Mesh {
    pub fn header(&self) -> &NavHeader {
        &self.header
    }

    /// Areas in file order
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.places.values()
    }

    pub fn ladders(&self) -> &[Ladder] {
        &self.ladders
    }

    pub fn has_unnamed_areas(&self) -> bool {
        self.has_unnamed_areas
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.index.get(&id).map(|&i| &self.areas[i])
    }

    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(&id)
    }

    /// Name of the place an area belongs to
    pub fn place_name(&self, area: &Area) -> Option<&str> {
        area.place
            .and_then(|id| self.places.get(&id))
            .map(|p| p.name.as_str())
    }

    /// Areas reachable from `area` through its `dir` side
    pub fn neighbors<'a>(&'a self, area: &'a Area, dir: Direction) -> impl Iterator<Item = &'a Area> + 'a {
        area.connections(dir)
            .iter()
            .filter_map(move |c| self.area(c.target))
    }
}

/// Decode and validate a whole nav file
pub fn parse_nav(data: &[u8]) -> Result<Mesh> {
    let raw = RawNav::read(data)?;
    Mesh::assemble(raw)
}

/// Decode a nav file and reduce it to place centroids. `Ok(None)` means
/// the file decoded but no area belongs to a named place.
pub fn decode_places(data: &[u8]) -> Result<Option<PlacePoints>> {
    Ok(parse_nav(data)?.place_points())
}
