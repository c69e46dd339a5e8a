use crate::{ClassifierConfig, DecorationConfig, GeneratorConfig, WindowConfig};

use serde::{Deserialize, Serialize};

/// Everything that shapes the terrain, independent of how it is drawn.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MapConfig {
    pub generator: GeneratorConfig,
    pub classifier: ClassifierConfig,
    pub decoration: DecorationConfig,
    pub window: WindowConfig,
}
