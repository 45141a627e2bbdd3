use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeSavingsInput;

/// Service lines the business sells; presets point at the one they showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    BasicScripting,
    EmailFileHygiene,
    ReportingLite,
    WebsitesLanding,
    PcHelpers,
    ReusableTemplates,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicScripting => "basic-scripting",
            Self::EmailFileHygiene => "email-file-hygiene",
            Self::ReportingLite => "reporting-lite",
            Self::WebsitesLanding => "websites-landing",
            Self::PcHelpers => "pc-helpers",
            Self::ReusableTemplates => "reusable-templates",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic-scripting" => Some(Self::BasicScripting),
            "email-file-hygiene" => Some(Self::EmailFileHygiene),
            "reporting-lite" => Some(Self::ReportingLite),
            "websites-landing" => Some(Self::WebsitesLanding),
            "pc-helpers" => Some(Self::PcHelpers),
            "reusable-templates" => Some(Self::ReusableTemplates),
            _ => None,
        }
    }
}

/// A named starting point for the calculator ("Email Processing", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub service_category: Option<ServiceCategory>,

    // Detailed-shape defaults
    pub tasks_per_week: Decimal,
    pub minutes_per_task: Decimal,
    pub hourly_rate: Decimal,
    pub coverage: Decimal,
    pub automation_efficiency: Decimal,
}

impl CalculatorPreset {
    pub fn input(&self) -> TimeSavingsInput {
        TimeSavingsInput::from_detailed(
            self.tasks_per_week,
            self.minutes_per_task,
            self.hourly_rate,
            Some(self.coverage),
            Some(self.automation_efficiency),
        )
    }
}
