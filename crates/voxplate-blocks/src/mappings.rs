use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use super::state::BlockState;

/// Face-direction tag used to select a per-direction texture.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
    Top,
    Bottom,
}

impl Orientation {
    /// Property-vocabulary spelling, as compared against `facing` values.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::East => "east",
            Orientation::South => "south",
            Orientation::West => "west",
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
        }
    }
}

/// Parametric geometry families a mapping entry can select instead of the
/// plain cube.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GeometryKind {
    Stairs,
    Fence,
    Pane,
    Plant,
    PressurePlate,
    Rail,
}

impl GeometryKind {
    pub fn from_key(key: &str) -> Option<GeometryKind> {
        match key {
            "stairs" => Some(GeometryKind::Stairs),
            "fence" => Some(GeometryKind::Fence),
            "pane" => Some(GeometryKind::Pane),
            "plant" => Some(GeometryKind::Plant),
            "pressure_plate" => Some(GeometryKind::PressurePlate),
            "rail" => Some(GeometryKind::Rail),
            _ => None,
        }
    }
}

/// Per-orientation texture keys for one block name. `base` is the `"*"`
/// fallback every resolution path ends on.
#[derive(Clone, Debug, Default)]
pub struct FaceTextures {
    pub base: String,
    pub north: Option<String>,
    pub east: Option<String>,
    pub south: Option<String>,
    pub west: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub front: Option<String>,
    pub on: Option<String>,
    pub translucent: bool,
    pub geometry: Option<GeometryKind>,
}

impl FaceTextures {
    pub fn plain(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Default::default()
        }
    }

    /// The fixed property-priority decision table. Earlier rules win even
    /// when a later rule would also apply.
    fn pick(&self, state: &BlockState, orientation: Option<Orientation>) -> &str {
        if let Some(axis) = state.prop("axis") {
            let along = match axis {
                "x" => matches!(orientation, Some(Orientation::East | Orientation::West)),
                "y" => matches!(orientation, Some(Orientation::Top | Orientation::Bottom)),
                "z" => matches!(orientation, Some(Orientation::North | Orientation::South)),
                _ => false,
            };
            return if along {
                self.top.as_deref().unwrap_or(&self.base)
            } else {
                &self.base
            };
        }

        if let (Some(facing), Some(o)) = (state.prop("facing"), orientation) {
            if facing == o.as_str() {
                return if state.prop_is("lit", "true") {
                    self.on
                        .as_deref()
                        .or(self.front.as_deref())
                        .unwrap_or(&self.base)
                } else {
                    self.front.as_deref().unwrap_or(&self.base)
                };
            }
        }

        if state.prop_is("half", "top") {
            return self.top.as_deref().unwrap_or(&self.base);
        }

        if state.prop_is("powered", "true") {
            return self.on.as_deref().unwrap_or(&self.base);
        }

        if matches!(
            state.prop("shape"),
            Some("south_east" | "south_west" | "north_west" | "north_east")
        ) {
            return self.on.as_deref().unwrap_or(&self.base);
        }

        let by_orientation = match orientation {
            Some(Orientation::North) => self.north.as_deref(),
            Some(Orientation::East) => self.east.as_deref(),
            Some(Orientation::South) => self.south.as_deref(),
            Some(Orientation::West) => self.west.as_deref(),
            Some(Orientation::Top) => self.top.as_deref(),
            Some(Orientation::Bottom) => self.bottom.as_deref(),
            None => None,
        };
        by_orientation.unwrap_or(&self.base)
    }
}

/// Per-block override hook; when present it bypasses the decision table.
pub type TextureSupplier = Arc<dyn Fn(&BlockState, Option<Orientation>) -> String + Send + Sync>;

/// One compiled mapping entry.
#[derive(Clone)]
pub enum Mapping {
    /// A single key for all faces.
    Plain(String),
    /// Per-orientation keys resolved through the decision table.
    Faces(Box<FaceTextures>),
    /// Caller-supplied function; keeps the face table around so geometry and
    /// translucency survive the override.
    Dynamic {
        supplier: TextureSupplier,
        faces: Box<FaceTextures>,
    },
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapping::Plain(k) => f.debug_tuple("Plain").field(k).finish(),
            Mapping::Faces(t) => f.debug_tuple("Faces").field(t).finish(),
            Mapping::Dynamic { faces, .. } => f
                .debug_struct("Dynamic")
                .field("faces", faces)
                .finish_non_exhaustive(),
        }
    }
}

/// Block name -> texture mapping table, plus the resolver over it.
///
/// An empty table is valid: every lookup then degrades to the bare block
/// name, which doubles as the fallback color seed.
#[derive(Clone, Debug, Default)]
pub struct TextureMappings {
    entries: HashMap<String, Mapping>,
}

impl TextureMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MappingsConfig = toml::from_str(toml_str)?;
        let mut out = TextureMappings::new();
        for (name, entry) in cfg.mappings {
            let mapping = match entry {
                MappingEntry::Key(k) => Mapping::Plain(k),
                MappingEntry::Detail(d) => Mapping::Faces(Box::new(compile_faces(&name, d))),
            };
            out.entries.insert(name, mapping);
        }
        Ok(out)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn get(&self, name: &str) -> Option<&Mapping> {
        self.entries.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, mapping: Mapping) {
        self.entries.insert(name.into(), mapping);
    }

    /// Installs a per-block supplier, merging over any existing entry so its
    /// geometry and translucency flags are kept.
    pub fn set_supplier(&mut self, name: &str, supplier: TextureSupplier) {
        let faces = match self.entries.remove(name) {
            Some(Mapping::Plain(k)) => Box::new(FaceTextures::plain(k)),
            Some(Mapping::Faces(f)) => f,
            Some(Mapping::Dynamic { faces, .. }) => faces,
            None => Box::new(FaceTextures::plain(name)),
        };
        self.entries
            .insert(name.to_string(), Mapping::Dynamic { supplier, faces });
    }

    /// Custom-geometry short-circuit: when set, the generator owns all six
    /// faces of the cell and no per-face resolution happens.
    pub fn custom_geometry(&self, name: &str) -> Option<GeometryKind> {
        match self.entries.get(name)? {
            Mapping::Plain(_) => None,
            Mapping::Faces(f) => f.geometry,
            Mapping::Dynamic { faces, .. } => faces.geometry,
        }
    }

    /// Neighbor predicate for face culling: a cell that is translucent or
    /// non-cube does not hide the faces behind it.
    pub fn translucent_or_open(&self, name: &str) -> bool {
        match self.entries.get(name) {
            Some(Mapping::Faces(f)) => f.translucent || f.geometry.is_some(),
            Some(Mapping::Dynamic { faces, .. }) => faces.translucent || faces.geometry.is_some(),
            Some(Mapping::Plain(_)) | None => false,
        }
    }

    /// Resolves the material key for one face of a block. `None` stands for
    /// the direction-agnostic lookup custom geometry uses.
    pub fn texture_key(&self, state: &BlockState, orientation: Option<Orientation>) -> String {
        match self.entries.get(&state.name) {
            None => state.name.clone(),
            Some(Mapping::Plain(k)) => k.clone(),
            Some(Mapping::Dynamic { supplier, .. }) => supplier(state, orientation),
            Some(Mapping::Faces(f)) => f.pick(state, orientation).to_string(),
        }
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MappingsConfig {
    pub mappings: HashMap<String, MappingEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum MappingEntry {
    // Simple: name = "texture_key"
    Key(String),
    // Detailed: name = { "*" = "side_key", top = "top_key", geometry = "fence" }
    Detail(FaceTexturesDef),
}

#[derive(Deserialize)]
pub struct FaceTexturesDef {
    #[serde(rename = "*")]
    pub base: String,
    pub north: Option<String>,
    pub east: Option<String>,
    pub south: Option<String>,
    pub west: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub front: Option<String>,
    pub on: Option<String>,
    #[serde(default)]
    pub translucent: bool,
    pub geometry: Option<String>,
}

fn compile_faces(name: &str, def: FaceTexturesDef) -> FaceTextures {
    let geometry = match def.geometry.as_deref() {
        None | Some("block") => None,
        Some(key) => {
            let kind = GeometryKind::from_key(key);
            if kind.is_none() {
                log::warn!("unknown geometry family '{}' for block '{}'", key, name);
            }
            kind
        }
    };
    FaceTextures {
        base: def.base,
        north: def.north,
        east: def.east,
        south: def.south,
        west: def.west,
        top: def.top,
        bottom: def.bottom,
        front: def.front,
        on: def.on,
        translucent: def.translucent,
        geometry,
    }
}
