//! Viewer-side part selection: which building part is open in the offer form
//! and which one is under the pointer.

use crate::models::house::ModelVariant;
use crate::models::part::{PartCategory, PartMap};

#[derive(Debug, Clone)]
pub enum ViewerEvent {
    Click(String),
    PointerOver(String),
    PointerOut,
    CloseForm,
    SubmitForm,
    /// A different asset was loaded; carries its validated mesh map.
    ChangeVariant(ModelVariant, PartMap),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Selected,
    Hovered,
    None,
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    variant: ModelVariant,
    parts: PartMap,
    selected: Option<PartCategory>,
    hovered: Option<PartCategory>,
}

impl ViewerState {
    pub fn new(variant: ModelVariant, parts: PartMap) -> Self {
        Self { variant, parts, selected: None, hovered: None }
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn selected(&self) -> Option<PartCategory> {
        self.selected
    }

    pub fn hovered(&self) -> Option<PartCategory> {
        self.hovered
    }

    pub fn apply(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Click(mesh) => {
                if let Some(category) = self.parts.category_of(&mesh) {
                    self.selected = Some(category);
                }
            }
            ViewerEvent::PointerOver(mesh) => {
                if let Some(category) = self.parts.category_of(&mesh) {
                    self.hovered = Some(category);
                }
            }
            ViewerEvent::PointerOut => self.hovered = None,
            ViewerEvent::CloseForm | ViewerEvent::SubmitForm => self.selected = None,
            ViewerEvent::ChangeVariant(variant, parts) => {
                // the open form survives a model swap
                self.variant = variant;
                self.parts = parts;
                self.hovered = None;
            }
        }
    }

    pub fn highlight(&self, mesh: &str) -> Highlight {
        match self.parts.category_of(mesh) {
            Some(c) if Some(c) == self.selected => Highlight::Selected,
            Some(c) if Some(c) == self.hovered => Highlight::Hovered,
            _ => Highlight::None,
        }
    }

    /// Tooltip text, shown only while no form is open.
    pub fn hover_label(&self) -> Option<&'static str> {
        match (self.selected, self.hovered) {
            (None, Some(hovered)) => Some(hovered.title()),
            _ => None,
        }
    }
}
