use serde::{Deserialize, Serialize};

use super::{Language, TargetOs};

/// Price table for custom-script quotes, in integer cents.
///
/// Every field has a default so a partial `[pricing]` table in the server
/// config only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceSchedule {
    pub base_cents: u64,
    pub python_cents: u64,
    pub powershell_cents: u64,
    pub bash_cents: u64,
    pub nodejs_cents: u64,
    /// Charged once per distinct target OS.
    pub per_os_cents: u64,
    pub packaging_cents: u64,
    pub network_cents: u64,
    pub scheduler_cents: u64,
}

impl PriceSchedule {
    pub fn language_surcharge(
        &self,
        language: Language,
    ) -> u64 {
        match language {
            Language::Python => self.python_cents,
            Language::Powershell => self.powershell_cents,
            Language::Bash => self.bash_cents,
            Language::Nodejs => self.nodejs_cents,
        }
    }

    /// Largest quote this schedule can produce: the dearest language on
    /// every OS with every feature. `None` when that does not fit in a `u64`.
    pub fn max_quote_cents(&self) -> Option<u64> {
        let language = Language::all()
            .iter()
            .map(|language| self.language_surcharge(*language))
            .max()
            .unwrap_or(0);
        let os = self.per_os_cents.checked_mul(TargetOs::all().len() as u64)?;

        [language, os, self.packaging_cents, self.network_cents, self.scheduler_cents]
            .into_iter()
            .try_fold(self.base_cents, u64::checked_add)
    }
}

impl Default for PriceSchedule {
    fn default() -> Self {
        Self {
            base_cents: 15_000,
            python_cents: 0,
            powershell_cents: 2_000,
            bash_cents: 0,
            nodejs_cents: 1_000,
            per_os_cents: 1_000,
            packaging_cents: 2_000,
            network_cents: 1_500,
            scheduler_cents: 1_000,
        }
    }
}
