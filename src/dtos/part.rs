use serde::Serialize;

use crate::models::house::{HouseShape, ModelVariant, FLOOR_COUNTS};
use crate::models::part::PartCategory;

#[derive(Serialize)]
pub struct PartResponse {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<PartCategory> for PartResponse {
    fn from(part: PartCategory) -> Self {
        Self {
            id: part.id(),
            title: part.title(),
            description: part.description(),
        }
    }
}

#[derive(Serialize)]
pub struct ModelAssetResponse {
    pub floors: u8,
    pub file: String,
    pub url: String,
}

#[derive(Serialize)]
pub struct ModelShapeResponse {
    pub shape: &'static str,
    pub label: &'static str,
    pub assets: Vec<ModelAssetResponse>,
}

impl ModelShapeResponse {
    pub fn new(shape: HouseShape, base_url: &str) -> Self {
        let assets = FLOOR_COUNTS
            .iter()
            .filter_map(|&floors| ModelVariant::new(shape, floors))
            .map(|variant| {
                let file = variant.asset_file();
                ModelAssetResponse {
                    floors: variant.floors,
                    url: format!("{base_url}{file}"),
                    file,
                }
            })
            .collect();

        Self { shape: shape.id(), label: shape.label(), assets }
    }
}
