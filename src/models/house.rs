use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HouseShape {
    #[default]
    #[serde(rename = "rectangular")]
    Rectangular,
    #[serde(rename = "t-shaped")]
    TShaped,
    #[serde(rename = "final-l-shaped")]
    LShaped,
    #[serde(rename = "u-shaped")]
    UShaped,
}

impl HouseShape {
    pub const ALL: [HouseShape; 4] = [
        HouseShape::Rectangular,
        HouseShape::TShaped,
        HouseShape::LShaped,
        HouseShape::UShaped,
    ];

    /// Asset file stem.
    pub fn id(self) -> &'static str {
        match self {
            HouseShape::Rectangular => "rectangular",
            HouseShape::TShaped => "t-shaped",
            HouseShape::LShaped => "final-l-shaped",
            HouseShape::UShaped => "u-shaped",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HouseShape::Rectangular => "Rektangulär",
            HouseShape::TShaped => "T-formad",
            HouseShape::LShaped => "L-formad",
            HouseShape::UShaped => "U-formad",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

pub const FLOOR_COUNTS: [u8; 2] = [1, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelVariant {
    pub shape: HouseShape,
    pub floors: u8,
}

impl Default for ModelVariant {
    fn default() -> Self {
        Self { shape: HouseShape::default(), floors: 1 }
    }
}

impl ModelVariant {
    /// `None` when the floor count has no asset.
    pub fn new(shape: HouseShape, floors: u8) -> Option<Self> {
        FLOOR_COUNTS.contains(&floors).then_some(Self { shape, floors })
    }

    /// `<shape>-model.glb` for a single floor, `<shape>-model-<n>floor.glb` otherwise.
    pub fn asset_file(&self) -> String {
        if self.floors <= 1 {
            format!("{}-model.glb", self.shape.id())
        } else {
            format!("{}-model-{}floor.glb", self.shape.id(), self.floors)
        }
    }
}
