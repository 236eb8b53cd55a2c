use indexmap::IndexMap;

use super::header::SectionLayout;
use super::types::PlaceId;
use super::BinaryReader;
use crate::error::Result;

/// Place names keyed by positional id (first entry is id 1)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceTable {
    pub names: IndexMap<PlaceId, String>,
    /// Set by the compiler when some areas carry no place
    pub has_unnamed_areas: bool,
}

impl PlaceTable {
    pub fn read(reader: &mut BinaryReader, layout: &SectionLayout) -> Result<Self> {
        let count = reader.read_u16_le()? as usize;
        // u16 length plus at least one byte of text
        let mut names = IndexMap::with_capacity(reader.capacity_for(count, 3));
        for index in 0..count {
            let offset = reader.position();
            let name = reader.read_len_string()?;
            if name.is_empty() {
                return Err(BinaryReader::malformed(offset, format!("place {} has an empty name", index + 1)));
            }
            // count is a u16, so index + 1 always fits
            names.insert((index + 1) as PlaceId, name);
        }

        let has_unnamed_areas = if layout.has_unnamed_areas_flag {
            reader.read_bool()?
        } else {
            false
        };

        Ok(Self { names, has_unnamed_areas })
    }

    pub fn name(&self, id: PlaceId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
