//! Nav file header and the per-version section layout derived from it.

use super::BinaryReader;
use crate::error::{Error, Result};

/// Leading identifier of every nav file
pub const NAV_MAGIC: u32 = 0xFEED_FACE;

/// Oldest format revision this decoder reads
pub const MIN_VERSION: u32 = 6;

/// Newest format revision this decoder reads (CS:GO)
pub const MAX_VERSION: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavHeader {
    pub magic: u32,
    pub version: u32,
    /// Game-specific revision, 0 when the version predates it
    pub sub_version: u32,
    /// Size of the map's .bsp the mesh was built against
    pub bsp_size: u32,
    pub is_analyzed: bool,
}

impl NavHeader {
    /// Read and validate the header. Nothing past the version field is
    /// read if the magic or version are rejected.
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        let magic = reader.read_u32_le()?;
        if magic != NAV_MAGIC {
            return Err(Error::InvalidMagic { found: magic });
        }

        let version = reader.read_u32_le()?;
        if !(MIN_VERSION..=MAX_VERSION).contains(&version) {
            return Err(Error::UnsupportedVersion { version });
        }

        let layout = SectionLayout::for_version(version);
        let sub_version = if layout.has_sub_version {
            reader.read_u32_le()?
        } else {
            0
        };
        let bsp_size = reader.read_u32_le()?;
        let is_analyzed = if layout.has_analyzed_flag {
            reader.read_bool()?
        } else {
            false
        };

        Ok(Self {
            magic,
            version,
            sub_version,
            bsp_size,
            is_analyzed,
        })
    }

    pub fn layout(&self) -> SectionLayout {
        SectionLayout::for_version(self.version)
    }
}

/// Width of the per-area attribute field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagsWidth {
    U8,
    U16,
    U32,
}

impl FlagsWidth {
    pub fn read(self, reader: &mut BinaryReader) -> Result<u32> {
        Ok(match self {
            Self::U8 => reader.read_u8()? as u32,
            Self::U16 => reader.read_u16_le()? as u32,
            Self::U32 => reader.read_u32_le()?,
        })
    }

    pub fn size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}

/// Which optional sections a given format revision carries.
/// Computed once from the header and handed to every record reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub flags_width: FlagsWidth,
    pub has_sub_version: bool,
    pub has_analyzed_flag: bool,
    pub has_unnamed_areas_flag: bool,
    pub has_approach_areas: bool,
    pub has_occupy_times: bool,
    pub has_light_intensity: bool,
    pub has_visibility: bool,
}

impl SectionLayout {
    pub fn for_version(version: u32) -> Self {
        let flags_width = match version {
            0..=8 => FlagsWidth::U8,
            9..=12 => FlagsWidth::U16,
            _ => FlagsWidth::U32,
        };
        Self {
            flags_width,
            has_sub_version: version >= 10,
            has_analyzed_flag: version >= 14,
            has_unnamed_areas_flag: version >= 12,
            has_approach_areas: version < 15,
            has_occupy_times: version >= 8,
            has_light_intensity: version >= 11,
            has_visibility: version >= 16,
        }
    }
}
