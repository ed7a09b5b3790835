//! Named map storage.
//!
//! `InMemoryRegistry` keeps maps for the life of the process; `JsonFileRegistry`
//! additionally rewrites one JSON file holding every map after each `put`.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{error, info, warn};

pub use crate::error::RegistryError;
use crate::model::{MapInfo, Route};
use crate::solver::solve;
use crate::traits::MapRepository;

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// File holding the name → map table.
    pub path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("map.json"),
        }
    }
}

impl RegistryConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

type MapTable = BTreeMap<String, MapInfo>;

#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    maps: RwLock<MapTable>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapRepository for InMemoryRegistry {
    fn get(&self, name: &str) -> Result<MapInfo, RegistryError> {
        lookup(&self.maps.read(), name)
    }

    fn put(&self, name: &str, map: MapInfo) -> Result<(), RegistryError> {
        map.validate()?;
        self.maps.write().insert(name.to_string(), map);
        Ok(())
    }

    fn names(&self) -> Vec<String> {
        self.maps.read().keys().cloned().collect()
    }
}

/// Registry persisted as a single JSON object keyed by map name.
#[derive(Debug)]
pub struct JsonFileRegistry {
    config: RegistryConfig,
    maps: RwLock<MapTable>,
}

impl JsonFileRegistry {
    /// Load the store, failing on unreadable or unparseable files.
    ///
    /// A missing file is an empty store.
    pub fn load(config: RegistryConfig) -> Result<Self, RegistryError> {
        let maps = read_table(&config.path)?.unwrap_or_default();
        Ok(Self {
            config,
            maps: RwLock::new(maps),
        })
    }

    /// Load the store, starting empty if the file cannot be read.
    pub fn open(config: RegistryConfig) -> Self {
        match read_table(&config.path) {
            Ok(maps) => Self {
                config,
                maps: RwLock::new(maps.unwrap_or_default()),
            },
            Err(err) => {
                error!(path = %config.path.display(), error = %err, "cannot read map store, starting empty");
                Self {
                    config,
                    maps: RwLock::new(MapTable::new()),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl MapRepository for JsonFileRegistry {
    fn get(&self, name: &str) -> Result<MapInfo, RegistryError> {
        lookup(&self.maps.read(), name)
    }

    /// Store `map` and rewrite the file.
    ///
    /// If the write fails the previous entry for `name` is restored and the error returned.
    fn put(&self, name: &str, map: MapInfo) -> Result<(), RegistryError> {
        map.validate()?;

        let mut maps = self.maps.write();
        let previous = maps.insert(name.to_string(), map);

        if let Err(err) = write_table(&self.config.path, &maps) {
            error!(path = %self.config.path.display(), name, error = %err, "cannot write map store");
            match previous {
                Some(previous) => maps.insert(name.to_string(), previous),
                None => maps.remove(name),
            };
            return Err(err);
        }
        Ok(())
    }

    fn names(&self) -> Vec<String> {
        self.maps.read().keys().cloned().collect()
    }
}

/// Fetch `map_name` from `repo` and solve for `house_id` on that snapshot.
pub fn solve_named<R>(repo: &R, map_name: &str, house_id: &str) -> Result<Vec<Route>, RegistryError>
where
    R: MapRepository + ?Sized,
{
    let map = repo.get(map_name)?;
    Ok(solve(&map, house_id)?)
}

fn lookup(maps: &MapTable, name: &str) -> Result<MapInfo, RegistryError> {
    maps.get(name).cloned().ok_or_else(|| RegistryError::MapNotFound {
        name: name.to_string(),
    })
}

/// `None` when the file does not exist yet.
fn read_table(path: &Path) -> Result<Option<MapTable>, RegistryError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "map store not found, starting empty");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let maps: MapTable = serde_json::from_reader(BufReader::new(file))?;
    info!(path = %path.display(), maps = maps.len(), "loaded map store");
    Ok(Some(maps))
}

fn write_table(path: &Path, maps: &MapTable) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    serde_json::to_writer_pretty(&mut writer, maps)?;
    writer.flush()?;
    drop(writer);
    fs::rename(tmp_path, path)?;
    Ok(())
}
