//! Navigation mesh decoder
//!
//! Decodes `.nav` files into a validated mesh of areas and named places,
//! and reduces each mesh to the centroids of its areas grouped by place
//! name.
//!
//! The layout is derived from Source engine nav versions 6 to 16: the
//! header, version gates and section order match, but areas store a
//! variable-corner polygon, an edge index per connection, one light value
//! per corner and area-based encounter spots. Nav files shipped with
//! Source games are not readable by this crate.

pub mod codec;
pub mod error;
pub mod mesh;
pub mod batch;
pub mod output;

pub use error::{Error, ReferenceKind, Result};
pub use codec::{
    NavHeader, SectionLayout, RawNav,
    AreaRecord, AreaFlags, Connection, Direction,
    HidingSpot, EncounterPath, ApproachArea, LadderRefs, Ladder,
    AreaId, PlaceId, Vec3,
};
pub use mesh::{Mesh, Area, Place, PlacePoints, parse_nav, decode_places};
pub use batch::{
    BatchConfig, BatchReport, FileReport, FileStatus, Aggregate,
    map_name, expand_inputs, decode_file, run_batch, run_batch_parallel,
};
