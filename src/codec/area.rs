//! Per-area records.
//!
//! An area record is decoded in isolation: every count and coordinate is
//! checked for local sanity here, while references to other areas, places
//! and ladders are left for assembly once the whole file has been read.

use ahash::AHashSet;
use bitflags::bitflags;

use super::header::SectionLayout;
use super::types::{AreaId, Direction, PlaceId, Vec3};
use super::BinaryReader;
use crate::error::Result;

/// Upper bound on polygon corners per area
pub const MAX_POLYGON_CORNERS: usize = 16;

/// Fewest corners a polygon can have
pub const MIN_POLYGON_CORNERS: usize = 3;

// id + corner count + three corners + four empty connection lists
// + empty hiding spots + empty encounters + place + two empty ladder
// lists, not counting the flags field
const MIN_AREA_SIZE: usize = 4 + 1 + 3 * 12 + 4 * 4 + 1 + 4 + 2 + 2 * 4;

bitflags! {
    /// Navigation attributes of an area. Unknown bits are kept as-is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AreaFlags: u32 {
        const CROUCH = 0x0001;
        const JUMP = 0x0002;
        const PRECISE = 0x0004;
        const NO_JUMP = 0x0008;
        const STOP = 0x0010;
        const RUN = 0x0020;
        const WALK = 0x0040;
        const AVOID = 0x0080;
        const TRANSIENT = 0x0100;
        const DONT_HIDE = 0x0200;
        const STAND = 0x0400;
        const NO_HOSTAGES = 0x0800;
        const STAIRS = 0x1000;
        const NO_MERGE = 0x2000;
        const OBSTACLE_TOP = 0x4000;
        const CLIFF = 0x8000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HidingSpotFlags: u8 {
        const IN_COVER = 0x01;
        const GOOD_SNIPER_SPOT = 0x02;
        const IDEAL_SNIPER_SPOT = 0x04;
        const EXPOSED = 0x08;
    }
}

/// Directed adjacency from one side of an area to an edge of another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub target: AreaId,
    /// Index of the edge on the target polygon
    pub edge: u8,
}

impl Connection {
    fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            target: reader.read_u32_le()?,
            edge: reader.read_u8()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HidingSpot {
    pub id: u32,
    pub position: Vec3,
    pub flags: HidingSpotFlags,
}

impl HidingSpot {
    fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            id: reader.read_u32_le()?,
            position: reader.read_vec3()?,
            flags: HidingSpotFlags::from_bits_retain(reader.read_u8()?),
        })
    }
}

/// Precomputed route through this area towards a bot's spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproachArea {
    pub here: AreaId,
    pub prev: AreaId,
    pub prev_to_here: u8,
    pub next: AreaId,
    pub here_to_next: u8,
}

impl ApproachArea {
    fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            here: reader.read_u32_le()?,
            prev: reader.read_u32_le()?,
            prev_to_here: reader.read_u8()?,
            next: reader.read_u32_le()?,
            here_to_next: reader.read_u8()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterSpot {
    pub area: AreaId,
    /// Parametric distance along the path, in 1/255ths
    pub t: u8,
}

/// Line of sight path crossing this area between two neighbours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterPath {
    pub from_area: AreaId,
    pub from_dir: u8,
    pub to_area: AreaId,
    pub to_dir: u8,
    pub spots: Vec<EncounterSpot>,
}

impl EncounterPath {
    fn read(reader: &mut BinaryReader) -> Result<Self> {
        let from_area = reader.read_u32_le()?;
        let from_dir = reader.read_u8()?;
        let to_area = reader.read_u32_le()?;
        let to_dir = reader.read_u8()?;
        let spot_count = reader.read_u8()? as usize;
        let mut spots = Vec::with_capacity(reader.capacity_for(spot_count, 5));
        for _ in 0..spot_count {
            spots.push(EncounterSpot {
                area: reader.read_u32_le()?,
                t: reader.read_u8()?,
            });
        }
        Ok(Self { from_area, from_dir, to_area, to_dir, spots })
    }
}

/// Ladder ids reachable from this area, split by climb direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LadderRefs {
    pub up: Vec<u32>,
    pub down: Vec<u32>,
}

impl LadderRefs {
    fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            up: read_u32_list(reader)?,
            down: read_u32_list(reader)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.up.iter().chain(self.down.iter()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleArea {
    pub area: AreaId,
    pub attributes: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    pub areas: Vec<VisibleArea>,
    /// Area whose visibility set this one extends, 0 for none
    pub inherit_from: AreaId,
}

impl Visibility {
    fn read(reader: &mut BinaryReader) -> Result<Self> {
        let count = reader.read_u32_le()? as usize;
        let mut areas = Vec::with_capacity(reader.capacity_for(count, 5));
        for _ in 0..count {
            areas.push(VisibleArea {
                area: reader.read_u32_le()?,
                attributes: reader.read_u8()?,
            });
        }
        Ok(Self {
            areas,
            inherit_from: reader.read_u32_le()?,
        })
    }
}

/// One area exactly as stored, before cross-references are resolved
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRecord {
    /// Byte offset of the record within the file
    pub offset: usize,
    pub id: AreaId,
    pub flags: AreaFlags,
    pub corners: Vec<Vec3>,
    /// Indexed by `Direction::index()`
    pub connections: [Vec<Connection>; 4],
    pub hiding_spots: Vec<HidingSpot>,
    pub approach_areas: Option<Vec<ApproachArea>>,
    pub encounter_paths: Vec<EncounterPath>,
    /// 0 when the area has no place
    pub place_id: PlaceId,
    pub ladders: LadderRefs,
    pub earliest_occupy: Option<[f32; 2]>,
    /// One value per corner
    pub light_intensity: Option<Vec<f32>>,
    pub visibility: Option<Visibility>,
}

impl AreaRecord {
    pub fn read(reader: &mut BinaryReader, layout: &SectionLayout) -> Result<Self> {
        let id_offset = reader.position();
        let id = reader.read_u32_le()?;
        if id == 0 {
            return Err(BinaryReader::malformed(id_offset, "area id 0 is reserved"));
        }

        let flags = AreaFlags::from_bits_retain(layout.flags_width.read(reader)?);

        let count_offset = reader.position();
        let corner_count = reader.read_u8()? as usize;
        if !(MIN_POLYGON_CORNERS..=MAX_POLYGON_CORNERS).contains(&corner_count) {
            return Err(BinaryReader::malformed(
                count_offset,
                format!("area {id} declares {corner_count} corners"),
            ));
        }
        let mut corners = Vec::with_capacity(corner_count);
        for _ in 0..corner_count {
            corners.push(reader.read_finite_vec3()?);
        }

        let mut connections: [Vec<Connection>; 4] = Default::default();
        for dir in Direction::ALL {
            let count = reader.read_u32_le()? as usize;
            let list = &mut connections[dir.index()];
            list.reserve(reader.capacity_for(count, 5));
            for _ in 0..count {
                list.push(Connection::read(reader)?);
            }
        }

        let spot_count = reader.read_u8()? as usize;
        let mut hiding_spots = Vec::with_capacity(reader.capacity_for(spot_count, 17));
        for _ in 0..spot_count {
            hiding_spots.push(HidingSpot::read(reader)?);
        }

        let approach_areas = if layout.has_approach_areas {
            let count = reader.read_u8()? as usize;
            let mut list = Vec::with_capacity(reader.capacity_for(count, 14));
            for _ in 0..count {
                list.push(ApproachArea::read(reader)?);
            }
            Some(list)
        } else {
            None
        };

        let path_count = reader.read_u32_le()? as usize;
        let mut encounter_paths = Vec::with_capacity(reader.capacity_for(path_count, 11));
        for _ in 0..path_count {
            encounter_paths.push(EncounterPath::read(reader)?);
        }

        let place_id = reader.read_u16_le()?;
        let ladders = LadderRefs::read(reader)?;

        let earliest_occupy = if layout.has_occupy_times {
            Some([reader.read_f32_le()?, reader.read_f32_le()?])
        } else {
            None
        };

        let light_intensity = if layout.has_light_intensity {
            let mut values = Vec::with_capacity(corner_count);
            for _ in 0..corner_count {
                values.push(reader.read_f32_le()?);
            }
            Some(values)
        } else {
            None
        };

        let visibility = if layout.has_visibility {
            Some(Visibility::read(reader)?)
        } else {
            None
        };

        Ok(Self {
            offset: id_offset,
            id,
            flags,
            corners,
            connections,
            hiding_spots,
            approach_areas,
            encounter_paths,
            place_id,
            ladders,
            earliest_occupy,
            light_intensity,
            visibility,
        })
    }

    /// Read the count-prefixed area table. Area ids must be unique.
    pub fn read_table(reader: &mut BinaryReader, layout: &SectionLayout) -> Result<Vec<Self>> {
        let count = reader.read_u32_le()? as usize;
        let mut areas = Vec::with_capacity(reader.capacity_for(count, MIN_AREA_SIZE + layout.flags_width.size()));
        let mut seen = AHashSet::with_capacity(areas.capacity());
        for _ in 0..count {
            let area = Self::read(reader, layout)?;
            if !seen.insert(area.id) {
                return Err(BinaryReader::malformed(area.offset, format!("duplicate area id {}", area.id)));
            }
            areas.push(area);
        }
        Ok(areas)
    }

    pub fn connections(&self, dir: Direction) -> &[Connection] {
        &self.connections[dir.index()]
    }

    pub fn all_connections(&self) -> impl Iterator<Item = (Direction, &Connection)> + '_ {
        Direction::ALL
            .into_iter()
            .flat_map(move |dir| self.connections(dir).iter().map(move |c| (dir, c)))
    }
}

fn read_u32_list(reader: &mut BinaryReader) -> Result<Vec<u32>> {
    let count = reader.read_u32_le()? as usize;
    let mut list = Vec::with_capacity(reader.capacity_for(count, 4));
    for _ in 0..count {
        list.push(reader.read_u32_le()?);
    }
    Ok(list)
}
