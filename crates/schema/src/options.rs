//! Knobs for the converter. Every field has a default, so a config file may set only some.

use serde::{Deserialize, Serialize};

/// Icon shown for every element classified as an icon.
pub const DEFAULT_ICON_PATH: &str = "material/insert_emoticon";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Prepended to every component type, e.g. `ia.` gives `ia.container.flex`.
    pub type_prefix: String,
    /// Placeholder icon path.
    pub icon_path: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            type_prefix: String::new(),
            icon_path: DEFAULT_ICON_PATH.to_owned(),
        }
    }
}
