// File: src/persistence.rs
use crate::core::dictionary::AffixDictionary;
use crate::error::{ConjugatorError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Bumped whenever the layout of `Suffix` or `AffixDictionary` changes.
const SNAPSHOT_VERSION: u32 = 1;

/// What goes into a snapshot file.
#[derive(serde::Serialize, serde::Deserialize)]
struct SerializableState {
    version: u32,
    dictionary: AffixDictionary,
}

/// Writes the parsed dictionary next to `path` and renames it into place, so
/// a reader never sees a half-written snapshot.
pub fn save_snapshot(dictionary: &AffixDictionary, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        version: SNAPSHOT_VERSION,
        dictionary: dictionary.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    bincode::serialize_into(&mut writer, &state)?;
    writer.flush()?;
    drop(writer);
    temp_file.persist(path).map_err(|e| e.error)?;

    info!(path = %path.display(), entries = dictionary.len(), "wrote dictionary snapshot");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<AffixDictionary> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;
    if state.version != SNAPSHOT_VERSION {
        return Err(ConjugatorError::Snapshot(Box::new(bincode::ErrorKind::Custom(format!(
            "snapshot version {}, expected {SNAPSHOT_VERSION}",
            state.version
        )))));
    }
    Ok(state.dictionary)
}
