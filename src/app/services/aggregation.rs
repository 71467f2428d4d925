//! KPI aggregation over a measurement collection
//!
//! Pure single-pass folds: totals for heat loss, gas savings, and cost
//! savings, plus average loss per distinct location. An empty collection
//! yields all zeros — no division by zero.

use crate::app::models::{KpiSummary, Measurement};
use std::collections::HashSet;

/// Compute summary KPIs over a record collection
pub fn summarize(records: &[Measurement]) -> KpiSummary {
    if records.is_empty() {
        return KpiSummary::default();
    }

    let mut total_loss_mj = 0.0;
    let mut total_saved_m3 = 0.0;
    let mut total_saved_eur = 0.0;
    let mut locations: HashSet<&str> = HashSet::new();

    for record in records {
        total_loss_mj += record.heat_loss_mj;
        total_saved_m3 += record.gas_saved_m3;
        total_saved_eur += record.cost_saved_eur;
        locations.insert(record.location.as_str());
    }

    KpiSummary {
        total_loss_mj,
        total_saved_m3,
        total_saved_eur,
        avg_loss_per_location_mj: total_loss_mj / locations.len() as f64,
    }
}
