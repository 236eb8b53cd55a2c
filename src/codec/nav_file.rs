use super::area::AreaRecord;
use super::header::NavHeader;
use super::ladder::Ladder;
use super::places::PlaceTable;
use super::BinaryReader;
use crate::error::Result;

/// Everything a nav file holds, decoded record by record with no
/// cross-record checks applied yet
#[derive(Debug, Clone)]
pub struct RawNav {
    pub header: NavHeader,
    pub places: PlaceTable,
    pub areas: Vec<AreaRecord>,
    pub ladders: Vec<Ladder>,
}

impl RawNav {
    /// Decode a whole nav file. Bytes after the ladder table are ignored.
    pub fn read(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);

        let header = NavHeader::read(&mut reader)?;
        let layout = header.layout();
        let places = PlaceTable::read(&mut reader, &layout)?;
        let areas = AreaRecord::read_table(&mut reader, &layout)?;
        let ladders = Ladder::read_table(&mut reader)?;

        Ok(Self {
            header,
            places,
            areas,
            ladders,
        })
    }
}
