//! Fence Options

use crate::domain::value_objects::{FarmToken, Point};

/// Request to draw a fence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FenceDraft {
    /// Desired name; blank means "next default name"
    pub name: String,
    /// Farm to attach the fence to; required for developers
    pub farm: Option<FarmToken>,
    /// Ordered polygon vertices, at least three
    pub boundary: Vec<Point>,
    /// Take the first free suffixed name instead of reporting a conflict
    pub auto_rename: bool,
}

impl FenceDraft {
    pub fn new(name: impl Into<String>, boundary: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            boundary,
            ..Self::default()
        }
    }

    pub fn on_farm(mut self, farm: FarmToken) -> Self {
        self.farm = Some(farm);
        self
    }

    pub fn with_auto_rename(mut self, auto_rename: bool) -> Self {
        self.auto_rename = auto_rename;
        self
    }
}
