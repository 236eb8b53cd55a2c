pub mod reader;
pub mod types;
pub mod header;
pub mod places;
pub mod area;
pub mod ladder;
pub mod nav_file;

#[cfg(test)]
pub(crate) mod writer;
#[cfg(test)]
pub(crate) mod fixture;

pub use reader::BinaryReader;
#[cfg(test)]
pub(crate) use writer::BinaryWriter;
pub use types::*;
pub use header::{NavHeader, SectionLayout, FlagsWidth, NAV_MAGIC, MIN_VERSION, MAX_VERSION};
pub use places::PlaceTable;
pub use area::{
    AreaRecord, AreaFlags, Connection,
    HidingSpot, HidingSpotFlags, ApproachArea,
    EncounterPath, EncounterSpot, LadderRefs,
    Visibility, VisibleArea, MAX_POLYGON_CORNERS,
};
pub use ladder::Ladder;
pub use nav_file::RawNav;
