use serde::{Deserialize, Serialize};

/// Supported game variants.
///
/// Each title selects both the staging-root candidates (under the mod
/// manager's app-data directory) and the canonical save directory under
/// `Documents/My Games`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Title {
    /// Skyrim Legendary Edition
    Skyrim,
    /// Skyrim Special Edition / Anniversary Edition
    SkyrimSe,
}

impl Title {
    /// All supported titles, in sweep order.
    pub const ALL: [Title; 2] = [Title::Skyrim, Title::SkyrimSe];

    /// The stable identifier used in staging paths and report lines.
    pub fn id(&self) -> &'static str {
        match self {
            Title::Skyrim => "skyrim",
            Title::SkyrimSe => "skyrimse",
        }
    }

    /// The display name used as the `My Games` subdirectory.
    pub fn display_name(&self) -> &'static str {
        match self {
            Title::Skyrim => "Skyrim",
            Title::SkyrimSe => "Skyrim Special Edition",
        }
    }

    /// Parse a title identifier as it appears in host events.
    pub fn from_id(id: &str) -> Option<Title> {
        Title::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
