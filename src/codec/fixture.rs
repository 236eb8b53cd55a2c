//! Test-only nav file encoder.

use super::header::{SectionLayout, FlagsWidth, NAV_MAGIC};
use super::types::{Direction, Vec3};
use super::BinaryWriter;

#[derive(Debug, Clone)]
pub struct AreaSpec {
    pub id: u32,
    pub flags: u32,
    pub corners: Vec<Vec3>,
    pub place: u16,
    pub connections: [Vec<(u32, u8)>; 4],
    pub hiding_spots: usize,
    pub approach_areas: usize,
    pub encounter_paths: usize,
    pub ladders_up: Vec<u32>,
    pub ladders_down: Vec<u32>,
    /// (area, attributes) pairs written when the version carries visibility
    pub visible: Vec<(u32, u8)>,
    pub inherit_from: u32,
}

impl AreaSpec {
    pub fn new(id: u32, corners: Vec<Vec3>) -> Self {
        Self {
            id,
            flags: 0,
            corners,
            place: 0,
            connections: Default::default(),
            hiding_spots: 0,
            approach_areas: 0,
            encounter_paths: 0,
            ladders_up: Vec::new(),
            ladders_down: Vec::new(),
            visible: Vec::new(),
            inherit_from: 0,
        }
    }

    /// Axis-aligned square of side `size` with its low corner at (x, y, z)
    pub fn square(id: u32, x: f32, y: f32, z: f32, size: f32) -> Self {
        Self::new(
            id,
            vec![
                Vec3::new(x, y, z),
                Vec3::new(x + size, y, z),
                Vec3::new(x + size, y + size, z),
                Vec3::new(x, y + size, z),
            ],
        )
    }

    pub fn place(mut self, place: u16) -> Self {
        self.place = place;
        self
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn connect(mut self, dir: Direction, target: u32, edge: u8) -> Self {
        self.connections[dir.index()].push((target, edge));
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LadderSpec {
    pub id: u32,
    pub bottom_area: u32,
    pub top_area: u32,
}

#[derive(Debug, Clone)]
pub struct NavBuilder {
    pub magic: u32,
    pub version: u32,
    pub places: Vec<String>,
    pub areas: Vec<AreaSpec>,
    pub ladders: Vec<LadderSpec>,
}

impl NavBuilder {
    pub fn new(version: u32) -> Self {
        Self {
            magic: NAV_MAGIC,
            version,
            places: Vec::new(),
            areas: Vec::new(),
            ladders: Vec::new(),
        }
    }

    pub fn place(mut self, name: &str) -> Self {
        self.places.push(name.to_string());
        self
    }

    pub fn area(mut self, area: AreaSpec) -> Self {
        self.areas.push(area);
        self
    }

    pub fn ladder(mut self, ladder: LadderSpec) -> Self {
        self.ladders.push(ladder);
        self
    }

    pub fn write_area(&self, w: &mut BinaryWriter, area: &AreaSpec) {
        let layout = SectionLayout::for_version(self.version);

        w.write_u32_le(area.id);
        match layout.flags_width {
            FlagsWidth::U8 => w.write_u8(area.flags as u8),
            FlagsWidth::U16 => w.write_u16_le(area.flags as u16),
            FlagsWidth::U32 => w.write_u32_le(area.flags),
        }

        w.write_u8(area.corners.len() as u8);
        for corner in &area.corners {
            w.write_vec3(*corner);
        }

        for list in &area.connections {
            w.write_u32_le(list.len() as u32);
            for &(target, edge) in list {
                w.write_u32_le(target);
                w.write_u8(edge);
            }
        }

        w.write_u8(area.hiding_spots as u8);
        for i in 0..area.hiding_spots {
            let base = area.corners.first().copied().unwrap_or_default();
            w.write_u32_le(i as u32 + 1);
            w.write_vec3(Vec3::new(base.x + i as f32, base.y, base.z + 1.0));
            w.write_u8(1 << (i % 4));
        }

        if layout.has_approach_areas {
            w.write_u8(area.approach_areas as u8);
            for i in 0..area.approach_areas as u32 {
                w.write_u32_le(area.id);
                w.write_u32_le(area.id + 100 + i);
                w.write_u8(1);
                w.write_u32_le(area.id + 200 + i);
                w.write_u8(3);
            }
        }

        w.write_u32_le(area.encounter_paths as u32);
        for i in 0..area.encounter_paths as u32 {
            w.write_u32_le(area.id + 1 + i);
            w.write_u8(0);
            w.write_u32_le(area.id + 2 + i);
            w.write_u8(2);
            w.write_u8(1);
            w.write_u32_le(area.id);
            w.write_u8(128);
        }

        w.write_u16_le(area.place);

        for list in [&area.ladders_up, &area.ladders_down] {
            w.write_u32_le(list.len() as u32);
            for id in list {
                w.write_u32_le(*id);
            }
        }

        if layout.has_occupy_times {
            w.write_f32_le(4.5);
            w.write_f32_le(6.0);
        }
        if layout.has_light_intensity {
            for _ in &area.corners {
                w.write_f32_le(1.0);
            }
        }
        if layout.has_visibility {
            w.write_u32_le(area.visible.len() as u32);
            for &(target, attributes) in &area.visible {
                w.write_u32_le(target);
                w.write_u8(attributes);
            }
            w.write_u32_le(area.inherit_from);
        }
    }

    pub fn write_ladder(w: &mut BinaryWriter, ladder: &LadderSpec) {
        w.write_u32_le(ladder.id);
        w.write_f32_le(20.0);
        w.write_vec3(Vec3::new(0.0, 0.0, 128.0));
        w.write_vec3(Vec3::ZERO);
        w.write_f32_le(128.0);
        w.write_u32_le(Direction::North as u32);
        w.write_u32_le(ladder.top_area);
        w.write_u32_le(0);
        w.write_u32_le(0);
        w.write_u32_le(0);
        w.write_u32_le(ladder.bottom_area);
    }

    pub fn build(&self) -> Vec<u8> {
        let layout = SectionLayout::for_version(self.version);
        let mut w = BinaryWriter::with_capacity(256);

        w.write_u32_le(self.magic);
        w.write_u32_le(self.version);
        if layout.has_sub_version {
            w.write_u32_le(1);
        }
        w.write_u32_le(0x0010_0000);
        if layout.has_analyzed_flag {
            w.write_bool(true);
        }

        w.write_u16_le(self.places.len() as u16);
        for name in &self.places {
            w.write_len_string(name);
        }
        if layout.has_unnamed_areas_flag {
            w.write_bool(self.areas.iter().any(|a| a.place == 0));
        }

        w.write_u32_le(self.areas.len() as u32);
        for area in &self.areas {
            self.write_area(&mut w, area);
        }

        w.write_u32_le(self.ladders.len() as u32);
        for ladder in &self.ladders {
            Self::write_ladder(&mut w, ladder);
        }

        w.into_vec()
    }
}

/// One place named "Kitchen" covered by one 2x2 square
pub fn kitchen() -> Vec<u8> {
    NavBuilder::new(16)
        .place("Kitchen")
        .area(AreaSpec::square(1, 0.0, 0.0, 0.0, 2.0).place(1))
        .build()
}

/// Two places, four connected areas, one unplaced area and a ladder
pub fn two_rooms(version: u32) -> Vec<u8> {
    let mut hall = AreaSpec::square(10, 0.0, 0.0, 0.0, 4.0)
        .place(1)
        .connect(Direction::East, 11, 3)
        .connect(Direction::North, 12, 2);
    hall.hiding_spots = 2;
    hall.encounter_paths = 1;
    hall.approach_areas = 1;
    hall.ladders_up = vec![1];

    NavBuilder::new(version)
        .place("Hallway")
        .place("Kitchen")
        .area(hall)
        .area(
            AreaSpec::square(11, 4.0, 0.0, 0.0, 4.0)
                .place(1)
                .connect(Direction::West, 10, 1),
        )
        .area(
            AreaSpec::square(12, 0.0, 4.0, 8.0, 2.0)
                .place(2)
                .connect(Direction::South, 10, 0),
        )
        .area(AreaSpec::square(13, 20.0, 20.0, 0.0, 2.0))
        .ladder(LadderSpec { id: 1, bottom_area: 10, top_area: 12 })
        .build()
}
