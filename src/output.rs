//! JSON sink for batch results.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::batch::Aggregate;
use crate::error::{Error, Result};

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| Error::Io(format!("json encode: {e}")))
}

/// Write every map into a single `{map: {place: [[x, y, z], ...]}}` file
pub fn write_aggregate(path: &Path, maps: &Aggregate, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_json(maps, pretty)?)?;
    Ok(())
}

/// Write one `<map>.json` per map into `dir`, returning the files written
pub fn write_per_map(dir: &Path, maps: &Aggregate, pretty: bool) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(maps.len());
    for (name, places) in maps {
        let path = dir.join(format!("{name}.json"));
        std::fs::write(&path, to_json(places, pretty)?)?;
        written.push(path);
    }
    Ok(written)
}
