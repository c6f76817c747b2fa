use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::scene_record::SceneRecord;

pub const DEFAULT_SCENE_FILE_NAME: &str = "globe_scene.json";

/// Where a scene is loaded from at startup and flushed to on save.
pub trait SceneStorage {
    /// Reads the stored scene. Absence of any stored scene is not an error.
    fn load(&self) -> Result<SceneRecord, SceneStoreError>;

    /// Replaces the stored scene with `record`.
    fn save(&mut self, record: &SceneRecord) -> Result<(), SceneStoreError>;
}

#[derive(Debug)]
pub enum SceneStoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Serialize(serde_json::Error),
}

impl fmt::Display for SceneStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneStoreError::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
            SceneStoreError::Parse { path, source } => {
                write!(f, "malformed scene file {}: {source}", path.display())
            }
            SceneStoreError::Serialize(err) => write!(f, "scene serialization error: {err}"),
        }
    }
}

impl std::error::Error for SceneStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneStoreError::Io { source, .. } => Some(source),
            SceneStoreError::Parse { source, .. } => Some(source),
            SceneStoreError::Serialize(source) => Some(source),
        }
    }
}

/// Scene persisted as a single JSON document.
///
/// `save` truncates and rewrites the file in place. A write that fails
/// halfway can leave a truncated file behind and lose the previous save;
/// the next `load` then reports it as malformed.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SceneStorage for JsonFileStore {
    fn load(&self) -> Result<SceneRecord, SceneStoreError> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no saved scene, starting empty");
                return Ok(SceneRecord::default());
            }
            Err(source) => {
                return Err(SceneStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let record: SceneRecord =
            serde_json::from_str(&payload).map_err(|source| SceneStoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        info!(
            path = %self.path.display(),
            entities = record.entity_count(),
            "loaded scene"
        );
        Ok(record)
    }

    fn save(&mut self, record: &SceneRecord) -> Result<(), SceneStoreError> {
        let payload = serde_json::to_string(record).map_err(SceneStoreError::Serialize)?;
        fs::write(&self.path, payload).map_err(|source| SceneStoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            path = %self.path.display(),
            entities = record.entity_count(),
            "saved scene"
        );
        Ok(())
    }
}

/// In-process storage for sessions that should not touch the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<SceneRecord>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: SceneRecord) -> Self {
        Self {
            record: Some(record),
            saves: 0,
        }
    }

    pub fn record(&self) -> Option<&SceneRecord> {
        self.record.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SceneStorage for MemoryStore {
    fn load(&self) -> Result<SceneRecord, SceneStoreError> {
        Ok(self.record.clone().unwrap_or_default())
    }

    fn save(&mut self, record: &SceneRecord) -> Result<(), SceneStoreError> {
        self.record = Some(record.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonFileStore, MemoryStore, SceneStorage, SceneStoreError};
    use crate::scene_record::{BuildingRecord, PointRecord, SceneRecord};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;

    fn temp_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        let id = format!("globe_scene_store_{label}_{}", std::process::id());
        dir.push(id);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn sample_record() -> SceneRecord {
        let p = |lat, lon| PointRecord { lat, lon };
        SceneRecord {
            markers: vec![p(37.7749, -122.4194), p(35.6762, 139.6503)],
            routes: vec![vec![p(37.7749, -122.4194), p(35.6762, 139.6503)]],
            trees: vec![p(35.6762, 139.6503)],
            grass: vec![p(-33.8688, 151.2093)],
            buildings: vec![BuildingRecord {
                lat: 40.7128,
                lon: -74.006,
                height: 0.3,
            }],
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = temp_dir("missing");
        let store = JsonFileStore::new(dir.join("nope.json"));
        assert_eq!(store.load().expect("load"), SceneRecord::default());
    }

    #[test]
    fn malformed_file_is_fatal() {
        let dir = temp_dir("malformed");
        let path = dir.join("scene.json");
        fs::write(&path, "{ \"markers\": [ {\"lat\": 1.0 ").expect("write");

        let err = JsonFileStore::new(&path).load().expect_err("parse error");
        match err {
            SceneStoreError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_shape_is_fatal() {
        let dir = temp_dir("shape");
        let path = dir.join("scene.json");
        fs::write(&path, r#"{"markers": {"lat": 1.0, "lon": 2.0}}"#).expect("write");
        assert!(matches!(
            JsonFileStore::new(&path).load(),
            Err(SceneStoreError::Parse { .. })
        ));
    }

    #[test]
    fn save_then_load_twice_is_stable() {
        let dir = temp_dir("round_trip");
        let path = dir.join("scene.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&sample_record()).expect("save");
        let first_bytes = fs::read(&path).expect("read");
        let loaded = store.load().expect("load");
        assert_eq!(loaded, sample_record());

        store.save(&loaded).expect("save again");
        let second_bytes = fs::read(&path).expect("read");
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = temp_dir("overwrite");
        let mut store = JsonFileStore::new(dir.join("scene.json"));
        store.save(&sample_record()).expect("save");
        store.save(&SceneRecord::default()).expect("save empty");
        assert_eq!(store.load().expect("load"), SceneRecord::default());
    }

    #[test]
    fn save_into_missing_directory_reports_io() {
        let dir = temp_dir("io");
        let mut store = JsonFileStore::new(dir.join("no_such_dir").join("scene.json"));
        assert!(matches!(
            store.save(&sample_record()),
            Err(SceneStoreError::Io { .. })
        ));
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().expect("load"), SceneRecord::default());
        store.save(&sample_record()).expect("save");
        store.save(&sample_record()).expect("save");
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.record(), Some(&sample_record()));
    }
}
