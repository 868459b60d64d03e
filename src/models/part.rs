//! Building-part categories and the mapping from 3D mesh names to them.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    Roof,
    Walls,
    Windows,
    Doors,
    Foundation,
    Terrace,
    Interior,
}

impl PartCategory {
    pub const ALL: [PartCategory; 7] = [
        PartCategory::Roof,
        PartCategory::Walls,
        PartCategory::Windows,
        PartCategory::Doors,
        PartCategory::Foundation,
        PartCategory::Terrace,
        PartCategory::Interior,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PartCategory::Roof => "roof",
            PartCategory::Walls => "walls",
            PartCategory::Windows => "windows",
            PartCategory::Doors => "doors",
            PartCategory::Foundation => "foundation",
            PartCategory::Terrace => "terrace",
            PartCategory::Interior => "interior",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            PartCategory::Roof => "Tak",
            PartCategory::Walls => "Väggar",
            PartCategory::Windows => "Fönster",
            PartCategory::Doors => "Dörrar",
            PartCategory::Foundation => "Grund",
            PartCategory::Terrace => "Terrass",
            PartCategory::Interior => "Interiör",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PartCategory::Roof => "Takläggning, isolering, takpannor, plåttak eller andra takmaterial.",
            PartCategory::Walls => "Ytter- och innerväggar, isolering, gipsskivor och konstruktion.",
            PartCategory::Windows => "Fönsterinstallation, byte av fönster, energiglas och fönsterbågar.",
            PartCategory::Doors => "Ytterdörrar, innerdörrar, skjutdörrar och dörrtillbehör.",
            PartCategory::Foundation => "Grundläggning, betongplatta, krypgrund eller källare.",
            PartCategory::Terrace => "Altan, terrass, trädäck och utemiljö.",
            PartCategory::Interior => "Kök, badrum, golv, inredning och invändiga renoveringar.",
        }
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MeshPattern {
    Prefix(&'static str),
    Contains(&'static str),
}

impl MeshPattern {
    fn matches(self, mesh: &str) -> bool {
        match self {
            MeshPattern::Prefix(p) => mesh.starts_with(p),
            MeshPattern::Contains(s) => mesh.contains(s),
        }
    }
}

/// Ordered rule table; the first matching rule decides the category.
pub const MESH_RULES: [(MeshPattern, PartCategory); 8] = [
    (MeshPattern::Prefix("Roof"), PartCategory::Roof),
    (MeshPattern::Prefix("Window"), PartCategory::Windows),
    (MeshPattern::Prefix("Door"), PartCategory::Doors),
    (MeshPattern::Contains("Wall"), PartCategory::Walls),
    (MeshPattern::Prefix("Foundation"), PartCategory::Foundation),
    (MeshPattern::Prefix("Terrace"), PartCategory::Terrace),
    (MeshPattern::Contains("Floor"), PartCategory::Interior),
    (MeshPattern::Contains("Ceiling"), PartCategory::Interior),
];

pub fn classify_mesh(mesh: &str) -> Option<PartCategory> {
    MESH_RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(mesh))
        .map(|(_, category)| *category)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartMapError {
    BlankMeshName,
    DuplicateMesh(String),
}

impl fmt::Display for PartMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartMapError::BlankMeshName => f.write_str("asset contains a mesh with a blank name"),
            PartMapError::DuplicateMesh(name) => write!(f, "asset contains mesh '{name}' more than once"),
        }
    }
}

impl std::error::Error for PartMapError {}

/// Category lookup for one loaded model asset, resolved once at load time.
#[derive(Debug, Clone, Default)]
pub struct PartMap {
    categories: HashMap<String, PartCategory>,
    unrecognized: Vec<String>,
}

impl PartMap {
    pub fn from_meshes<I, S>(meshes: I) -> Result<Self, PartMapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut map = PartMap::default();

        for mesh in meshes {
            let mesh = mesh.into();
            if mesh.trim().is_empty() {
                return Err(PartMapError::BlankMeshName);
            }
            if !seen.insert(mesh.clone()) {
                return Err(PartMapError::DuplicateMesh(mesh));
            }
            match classify_mesh(&mesh) {
                Some(category) => {
                    map.categories.insert(mesh, category);
                }
                None => map.unrecognized.push(mesh),
            }
        }

        Ok(map)
    }

    /// `None` for meshes that are unrecognized or not part of this asset.
    pub fn category_of(&self, mesh: &str) -> Option<PartCategory> {
        self.categories.get(mesh).copied()
    }

    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    pub fn meshes_in(&self, category: PartCategory) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .filter(move |(_, c)| **c == category)
            .map(|(mesh, _)| mesh.as_str())
    }
}
