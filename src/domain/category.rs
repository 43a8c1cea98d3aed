use std::fmt;
use serde::Deserialize;

/// The closed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum CategoryKind {
    Electronics,
    Fitness,
    Kitchen,
    Furniture,
    Gaming,
    #[serde(rename = "Smart Home")]
    SmartHome,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 6] = [
        CategoryKind::Electronics,
        CategoryKind::Fitness,
        CategoryKind::Kitchen,
        CategoryKind::Furniture,
        CategoryKind::Gaming,
        CategoryKind::SmartHome,
    ];

    /// Display name, as shown on the aisle tabs and matched by search.
    pub fn name(&self) -> &'static str {
        match self {
            CategoryKind::Electronics => "Electronics",
            CategoryKind::Fitness => "Fitness",
            CategoryKind::Kitchen => "Kitchen",
            CategoryKind::Furniture => "Furniture",
            CategoryKind::Gaming => "Gaming",
            CategoryKind::SmartHome => "Smart Home",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        let folded = name.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.name().to_lowercase() == folded)
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A browsable aisle. `count` is informational only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub name: CategoryKind,
    pub icon: String,
    pub count: u32,
}
