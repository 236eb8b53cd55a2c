use super::types::{AreaId, Vec3};
use super::BinaryReader;
use crate::error::Result;

// id + width + top + bottom + length + direction + five area ids
const LADDER_SIZE: usize = 4 + 4 + 12 + 12 + 4 + 4 + 5 * 4;

/// Climbable ladder stored after the area table
#[derive(Debug, Clone, PartialEq)]
pub struct Ladder {
    pub id: u32,
    pub width: f32,
    pub top: Vec3,
    pub bottom: Vec3,
    pub length: f32,
    /// Direction the climber faces, as a raw `Direction` index
    pub direction: u32,
    pub top_forward_area: AreaId,
    pub top_left_area: AreaId,
    pub top_right_area: AreaId,
    pub top_behind_area: AreaId,
    pub bottom_area: AreaId,
}

impl Ladder {
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            id: reader.read_u32_le()?,
            width: reader.read_f32_le()?,
            top: reader.read_vec3()?,
            bottom: reader.read_vec3()?,
            length: reader.read_f32_le()?,
            direction: reader.read_u32_le()?,
            top_forward_area: reader.read_u32_le()?,
            top_left_area: reader.read_u32_le()?,
            top_right_area: reader.read_u32_le()?,
            top_behind_area: reader.read_u32_le()?,
            bottom_area: reader.read_u32_le()?,
        })
    }

    pub fn read_table(reader: &mut BinaryReader) -> Result<Vec<Self>> {
        let count = reader.read_u32_le()? as usize;
        let mut ladders = Vec::with_capacity(reader.capacity_for(count, LADDER_SIZE));
        for _ in 0..count {
            ladders.push(Self::read(reader)?);
        }
        Ok(ladders)
    }
}
