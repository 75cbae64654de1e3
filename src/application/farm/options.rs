//! Farm Options

/// Request to create a farm
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmDraft {
    /// Desired name; blank means "next default name"
    pub name: String,
    /// Opaque location descriptor
    pub gps: String,
    /// Take the first free suffixed name instead of reporting a conflict
    pub auto_rename: bool,
}

impl FarmDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Draft with a blank name
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_gps(mut self, gps: impl Into<String>) -> Self {
        self.gps = gps.into();
        self
    }

    pub fn with_auto_rename(mut self, auto_rename: bool) -> Self {
        self.auto_rename = auto_rename;
        self
    }
}
