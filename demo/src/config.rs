use std::str::FromStr;

use anyhow::{Context, Result};
use hr_domain::legacy::LEGACY_CONNECTION_STRING;
use hr_domain::tax::TaxRates;
use rust_decimal::Decimal;

#[derive(Clone, Debug)]
pub struct HrConfig {
    pub tax_rates: TaxRates,
    pub legacy_db_url: String,
    pub log_filter: String,
}

impl HrConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = TaxRates::default();
        let full_time = rate(&lookup, "HR_FULL_TIME_TAX_RATE", defaults.full_time)?;
        let part_time = rate(&lookup, "HR_PART_TIME_TAX_RATE", defaults.part_time)?;

        let legacy_db_url =
            lookup("HR_LEGACY_DB_URL").unwrap_or_else(|| LEGACY_CONNECTION_STRING.into());
        // RUST_LOG 优先于 HR_LOG
        let log_filter = lookup("RUST_LOG")
            .or_else(|| lookup("HR_LOG"))
            .unwrap_or_else(|| "info".into());

        Ok(Self {
            tax_rates: TaxRates {
                full_time,
                part_time,
            },
            legacy_db_url,
            log_filter,
        })
    }
}

fn rate(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Decimal,
) -> Result<Decimal> {
    match lookup(key) {
        Some(raw) => {
            Decimal::from_str(raw.trim()).with_context(|| format!("invalid {key}: {raw:?}"))
        }
        None => Ok(default),
    }
}
