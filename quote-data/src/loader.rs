use std::io::Read;

use quote_core::{CalculatorPreset, ServiceCategory};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading calculator presets.
#[derive(Debug, Error)]
pub enum PresetLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Unknown service category '{category}' for preset '{id}'")]
    InvalidCategory { id: String, category: String },

    #[error("Duplicate preset id '{0}'")]
    DuplicateId(String),

    #[error("Preset '{id}': {reason}")]
    InvalidValues { id: String, reason: String },
}

impl From<csv::Error> for PresetLoaderError {
    fn from(err: csv::Error) -> Self {
        PresetLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of the presets CSV file.
///
/// - `id`: stable identifier used by the CLI (`--preset email-management`)
/// - `service_category`: one of the service slugs, or empty for none
/// - the remaining columns are detailed-shape calculator inputs
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PresetRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub service_category: Option<String>,
    pub tasks_per_week: Decimal,
    pub minutes_per_task: Decimal,
    pub hourly_rate: Decimal,
    pub coverage: Decimal,
    pub automation_efficiency: Decimal,
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Loader for calculator presets stored as CSV.
pub struct PresetLoader;

impl PresetLoader {
    /// Parse preset records from a CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PresetRecord>, PresetLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: PresetRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Convert parsed records into presets.
    ///
    /// Rejects unknown service categories, repeated ids, and inputs the
    /// calculator would accept but that make no sense for a preset
    /// (negative quantities, ratios outside `[0, 1]`).
    pub fn into_presets(
        records: Vec<PresetRecord>
    ) -> Result<Vec<CalculatorPreset>, PresetLoaderError> {
        let mut presets: Vec<CalculatorPreset> = Vec::with_capacity(records.len());

        for record in records {
            if presets.iter().any(|p| p.id == record.id) {
                return Err(PresetLoaderError::DuplicateId(record.id));
            }

            let service_category = match record.service_category {
                Some(category) => Some(ServiceCategory::parse(&category).ok_or_else(|| {
                    PresetLoaderError::InvalidCategory {
                        id: record.id.clone(),
                        category,
                    }
                })?),
                None => None,
            };

            let preset = CalculatorPreset {
                id: record.id,
                name: record.name,
                description: record.description,
                service_category,
                tasks_per_week: record.tasks_per_week,
                minutes_per_task: record.minutes_per_task,
                hourly_rate: record.hourly_rate,
                coverage: record.coverage,
                automation_efficiency: record.automation_efficiency,
            };

            preset
                .input()
                .validate()
                .map_err(|e| PresetLoaderError::InvalidValues {
                    id: preset.id.clone(),
                    reason: e.to_string(),
                })?;

            presets.push(preset);
        }

        Ok(presets)
    }

    /// Parse and convert in one step.
    pub fn load<R: Read>(reader: R) -> Result<Vec<CalculatorPreset>, PresetLoaderError> {
        Self::into_presets(Self::parse(reader)?)
    }
}
