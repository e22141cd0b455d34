use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{BackendSnapshot, DeviceSnapshot, SnapshotError};

/// A generation label with its devices, in catalog order
pub struct HardwareGeneration {
    /// Generation label (e.g. "Eagle R3 (2023)")
    pub label: String,

    /// Devices belonging to the generation
    pub devices: Vec<Box<dyn DeviceSnapshot>>,
}

impl HardwareGeneration {
    /// Create an empty generation
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            devices: Vec::new(),
        }
    }

    /// Append a device
    pub fn with_device<D: DeviceSnapshot + 'static>(mut self, device: D) -> Self {
        self.devices.push(Box::new(device));
        self
    }
}

impl std::fmt::Debug for HardwareGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.devices.iter().map(|d| d.name()).collect();
        f.debug_struct("HardwareGeneration")
            .field("label", &self.label)
            .field("devices", &names)
            .finish()
    }
}

/// A device reference in the catalog: a bare path or a path with a name override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeviceEntry {
    /// Snapshot file path, relative to the snapshot directory
    Path(String),
    /// Snapshot file path with an explicit display name
    Named {
        /// Snapshot file path
        path: String,
        /// Display name override
        name: String,
    },
}

impl DeviceEntry {
    /// Snapshot file path
    pub fn path(&self) -> &str {
        match self {
            DeviceEntry::Path(path) | DeviceEntry::Named { path, .. } => path,
        }
    }
}

/// Catalog entry for one generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSpec {
    /// Generation label
    pub label: String,

    /// Devices in the generation
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

/// Ordered grouping of snapshot files by hardware generation
///
/// ```toml
/// snapshot_dir = "snapshots"
///
/// [[generation]]
/// label = "Heron (2024)"
/// devices = ["props_torino.json", { path = "props_fez.json", name = "Fez" }]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Directory that relative device paths resolve against
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,

    /// Generations in reporting order
    #[serde(default, rename = "generation")]
    pub generations: Vec<GenerationSpec>,
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("snapshots")
}

impl Default for Catalog {
    fn default() -> Self {
        Self::ibm_eras()
    }
}

impl Catalog {
    /// The four IBM processor eras, from Falcon to Heron
    pub fn ibm_eras() -> Self {
        let era = |label: &str, chips: &[&str]| GenerationSpec {
            label: label.to_string(),
            devices: chips
                .iter()
                .map(|chip| DeviceEntry::Path(format!("props_{}.json", chip)))
                .collect(),
        };

        Self {
            snapshot_dir: default_snapshot_dir(),
            generations: vec![
                era("Falcon (2020/21)", &["hanoi", "cairo", "kolkata"]),
                era("Eagle R1 (2022)", &["washington"]),
                era("Eagle R3 (2023)", &["sherbrooke", "brisbane", "kyoto", "osaka"]),
                era("Heron (2024)", &["torino", "fez", "marrakesh"]),
            ],
        }
    }

    /// Parse a catalog from TOML
    pub fn from_toml(content: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the snapshot directory
    pub fn with_snapshot_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.snapshot_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Resolve a device path against the snapshot directory
    pub fn resolve(&self, entry: &DeviceEntry) -> PathBuf {
        let path = Path::new(entry.path());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.snapshot_dir.join(path)
        }
    }

    /// Load every snapshot file.
    ///
    /// Files that are missing or unreadable are logged and skipped; a
    /// generation whose devices all fail is still returned, empty.
    pub fn load(&self) -> Vec<HardwareGeneration> {
        self.generations
            .iter()
            .map(|spec| {
                let mut generation = HardwareGeneration::new(&spec.label);
                for entry in &spec.devices {
                    let path = self.resolve(entry);
                    match BackendSnapshot::from_file(&path) {
                        Ok(snapshot) => {
                            let snapshot = match entry {
                                DeviceEntry::Named { name, .. } => snapshot.with_name(name),
                                DeviceEntry::Path(_) => snapshot,
                            };
                            if let Some(date) = snapshot.properties().and_then(|p| p.calibrated_at())
                            {
                                debug!(
                                    "{} ({}): calibrated at {}",
                                    snapshot.name(),
                                    snapshot.backend_name(),
                                    date
                                );
                            }
                            generation.devices.push(Box::new(snapshot));
                        }
                        Err(e) => {
                            warn!("Skipping snapshot {}: {}", path.display(), e);
                        }
                    }
                }
                generation
            })
            .collect()
    }
}
