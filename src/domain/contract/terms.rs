//! Charter terms, parties, and financial terms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Charter period, locations, and rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharterTerms {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub delivery_location: String,
    pub return_location: String,
    pub operational_area: String,
    pub daily_rate: f64,
    pub currency: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl CharterTerms {
    /// Charter length in days.
    ///
    /// An end date at or before the start date yields 1 day: same-day
    /// charters count as one day, and an inverted range is silently
    /// accepted at the one-day minimum rather than rejected.
    pub fn duration_days(&self) -> i64 {
        let days = (self.end_date - self.start_date).num_days();
        days.max(1)
    }

    /// Daily rate times duration.
    pub fn total_charter_value(&self) -> f64 {
        self.daily_rate * self.duration_days() as f64
    }
}

/// One contracting party with contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PartyRecord {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
}

/// Lessor, lessee, and optional broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Parties {
    pub lessor: PartyRecord,
    pub lessee: PartyRecord,
    #[serde(default)]
    pub broker: Option<String>,
    #[serde(default)]
    pub broker_commission_pct: f64,
}

/// Payment schedule, deposit, and insurance figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTerms {
    /// Percentage due on signing.
    pub payment_schedule_initial_pct: u8,
    /// Percentage due at the final milestone.
    pub payment_schedule_final_pct: u8,
    pub payment_timing: String,
    pub security_deposit: f64,
    pub deposit_method: String,
    pub fuel_policy: String,
    pub hull_insurance: f64,
    pub liability_insurance: f64,
}

impl Default for FinancialTerms {
    fn default() -> Self {
        Self {
            payment_schedule_initial_pct: 50,
            payment_schedule_final_pct: 50,
            payment_timing: "30 days before charter".to_string(),
            security_deposit: 0.0,
            deposit_method: "Bank transfer".to_string(),
            fuel_policy: "Plus fuel".to_string(),
            hull_insurance: 0.0,
            liability_insurance: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(start: (i32, u32, u32), end: (i32, u32, u32)) -> CharterTerms {
        CharterTerms {
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            delivery_location: "Monaco".to_string(),
            return_location: "Monaco".to_string(),
            operational_area: "Western Mediterranean".to_string(),
            daily_rate: 10_000.0,
            currency: "EUR".to_string(),
            special_requests: None,
        }
    }

    #[test]
    fn duration_counts_days_between_dates() {
        assert_eq!(terms((2026, 7, 1), (2026, 7, 8)).duration_days(), 7);
    }

    #[test]
    fn same_day_charter_is_one_day() {
        assert_eq!(terms((2026, 7, 1), (2026, 7, 1)).duration_days(), 1);
    }

    #[test]
    fn inverted_range_clamps_to_one_day() {
        assert_eq!(terms((2026, 7, 8), (2026, 7, 1)).duration_days(), 1);
    }

    #[test]
    fn total_value_multiplies_rate_by_duration() {
        let terms = terms((2026, 7, 1), (2026, 7, 8));
        assert!((terms.total_charter_value() - 70_000.0).abs() < f64::EPSILON);
    }
}
