use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`TimeSavingsInput::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SavingsInputError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: Decimal },

    #[error("{field} must be between 0 and 1 (got {value})")]
    RatioOutOfRange { field: &'static str, value: Decimal },

    #[error("inputs are too large to estimate: {0} overflows")]
    OutOfRange(&'static str),
}

fn default_simple_efficiency() -> Decimal {
    Decimal::new(8, 1)
}

fn default_coverage() -> Decimal {
    Decimal::new(8, 1)
}

fn default_detailed_efficiency() -> Decimal {
    Decimal::new(9, 1)
}

/// Inputs to the time-savings calculator.
///
/// Callers describe a repetitive task either directly in hours per week or
/// as a number of tasks of a given length. Defaults for the optional ratios
/// are resolved by the constructors, so a stored value is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum TimeSavingsInput {
    Simple {
        hours_per_week: Decimal,
        hourly_rate: Decimal,
        automation_efficiency: Decimal,
    },
    Detailed {
        tasks_per_week: Decimal,
        minutes_per_task: Decimal,
        hourly_rate: Decimal,
        coverage: Decimal,
        automation_efficiency: Decimal,
    },
}

impl TimeSavingsInput {
    /// Hours-based input. Efficiency defaults to 0.8.
    pub fn from_simple(
        hours_per_week: Decimal,
        hourly_rate: Decimal,
        automation_efficiency: Option<Decimal>,
    ) -> Self {
        Self::Simple {
            hours_per_week,
            hourly_rate,
            automation_efficiency: automation_efficiency.unwrap_or_else(default_simple_efficiency),
        }
    }

    /// Task-based input. Coverage defaults to 0.8 and efficiency to 0.9.
    pub fn from_detailed(
        tasks_per_week: Decimal,
        minutes_per_task: Decimal,
        hourly_rate: Decimal,
        coverage: Option<Decimal>,
        automation_efficiency: Option<Decimal>,
    ) -> Self {
        Self::Detailed {
            tasks_per_week,
            minutes_per_task,
            hourly_rate,
            coverage: coverage.unwrap_or_else(default_coverage),
            automation_efficiency: automation_efficiency
                .unwrap_or_else(default_detailed_efficiency),
        }
    }

    pub fn hourly_rate(&self) -> Decimal {
        match self {
            Self::Simple { hourly_rate, .. } | Self::Detailed { hourly_rate, .. } => *hourly_rate,
        }
    }

    /// Rejects negative quantities, ratios outside `[0, 1]`, and values
    /// whose savings would not fit in a [`Decimal`].
    ///
    /// The calculator itself never calls this; it is meant for the place
    /// where user input enters the system.
    pub fn validate(&self) -> Result<(), SavingsInputError> {
        self.check_fields()?;
        self.check_magnitude()
    }

    fn check_fields(&self) -> Result<(), SavingsInputError> {
        match self {
            Self::Simple {
                hours_per_week,
                hourly_rate,
                automation_efficiency,
            } => {
                non_negative("hours_per_week", *hours_per_week)?;
                non_negative("hourly_rate", *hourly_rate)?;
                ratio("automation_efficiency", *automation_efficiency)
            }
            Self::Detailed {
                tasks_per_week,
                minutes_per_task,
                hourly_rate,
                coverage,
                automation_efficiency,
            } => {
                non_negative("tasks_per_week", *tasks_per_week)?;
                non_negative("minutes_per_task", *minutes_per_task)?;
                non_negative("hourly_rate", *hourly_rate)?;
                ratio("coverage", *coverage)?;
                ratio("automation_efficiency", *automation_efficiency)
            }
        }
    }

    /// Replays the calculator's growing products with checked arithmetic.
    fn check_magnitude(&self) -> Result<(), SavingsInputError> {
        let (hours_per_week, efficiency) = match self {
            Self::Simple {
                hours_per_week,
                automation_efficiency,
                ..
            } => (*hours_per_week, *automation_efficiency),
            Self::Detailed {
                tasks_per_week,
                minutes_per_task,
                coverage,
                automation_efficiency,
                ..
            } => {
                let minutes = tasks_per_week
                    .checked_mul(*minutes_per_task)
                    .ok_or(SavingsInputError::OutOfRange("tasks_per_week × minutes_per_task"))?;
                (minutes / Decimal::from(60), *automation_efficiency * *coverage)
            }
        };

        let weekly_cost = (hours_per_week * efficiency)
            .checked_mul(self.hourly_rate())
            .ok_or(SavingsInputError::OutOfRange("weekly_cost_savings"))?;
        weekly_cost
            .checked_mul(Decimal::from(52))
            .ok_or(SavingsInputError::OutOfRange("yearly_cost_savings"))?;
        weekly_cost
            .checked_mul(Decimal::new(433, 2))
            .ok_or(SavingsInputError::OutOfRange("monthly_cost_savings"))?;

        Ok(())
    }
}

fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), SavingsInputError> {
    if value < Decimal::ZERO {
        return Err(SavingsInputError::Negative { field, value });
    }
    Ok(())
}

fn ratio(
    field: &'static str,
    value: Decimal,
) -> Result<(), SavingsInputError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(SavingsInputError::RatioOutOfRange { field, value });
    }
    Ok(())
}

/// Estimated value of automating a task.
///
/// `hours_saved`, `roi_per_week` and `roi_per_year` repeat other fields under
/// the names the site's widgets read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSavingsResult {
    pub weekly_time_saved: Decimal,
    pub weekly_cost_savings: Decimal,
    pub monthly_cost_savings: Decimal,
    pub yearly_cost_savings: Decimal,
    pub hours_saved: Decimal,
    pub roi_per_week: Decimal,
    pub roi_per_year: Decimal,
    /// Effective efficiency as a percentage (0–100).
    pub efficiency: Decimal,
}
