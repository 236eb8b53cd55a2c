use serde::Serialize;

/// Numeric area id as stored in the file
pub type AreaId = u32;

/// Positional place id; 1 is the first entry of the place table
pub type PlaceId = u16;

/// World-space position in engine units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Arithmetic mean of `points`, or `None` for an empty slice.
    /// Accumulates in f64 so the result does not depend on point order
    /// beyond f32 rounding of the final value.
    pub fn mean(points: &[Vec3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let (sx, sy, sz) = points.iter().fold((0.0f64, 0.0f64, 0.0f64), |acc, p| {
            (acc.0 + p.x as f64, acc.1 + p.y as f64, acc.2 + p.z as f64)
        });
        let n = points.len() as f64;
        Some(Self {
            x: (sx / n) as f32,
            y: (sy / n) as f32,
            z: (sz / n) as f32,
        })
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

/// Cardinal direction of an area edge. Connection lists are stored in
/// this order in every area record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Direction {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn index(self) -> usize {
        self as usize
    }
}
