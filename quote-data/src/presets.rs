use quote_core::{CalculatorPreset, ServiceCategory};

use crate::loader::{PresetLoader, PresetLoaderError};

const BUNDLED_PRESETS: &str = include_str!("../data/calculator_presets.csv");

/// The presets shown on the calculator page.
pub fn default_presets() -> Result<Vec<CalculatorPreset>, PresetLoaderError> {
    PresetLoader::load(BUNDLED_PRESETS.as_bytes())
}

pub fn find_preset<'a>(
    presets: &'a [CalculatorPreset],
    id: &str,
) -> Option<&'a CalculatorPreset> {
    presets.iter().find(|p| p.id == id)
}

/// Presets showcasing `category`, in table order.
pub fn presets_by_category(
    presets: &[CalculatorPreset],
    category: ServiceCategory,
) -> Vec<&CalculatorPreset> {
    presets
        .iter()
        .filter(|p| p.service_category == Some(category))
        .collect()
}
