mod loader;
mod presets;

pub use loader::{PresetLoader, PresetLoaderError, PresetRecord};
pub use presets::{default_presets, find_preset, presets_by_category};
