//! Data models for heat-loss measurement processing
//!
//! This module contains the canonical record shape produced by the import
//! pipeline and the derived KPI summary computed over a record collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Canonical Measurement Record
// =============================================================================

/// One heat-loss measurement for a location/door
///
/// Every field is always populated: unparseable or missing input degrades to
/// a documented default during import rather than failing the record. Records
/// are append-only — once stored they are never mutated, only wiped wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Unique identifier, assigned at creation, immutable
    pub id: Uuid,

    /// Measurement timestamp; import time when the source cell was unparseable
    pub date: DateTime<Utc>,

    /// Location/door label; `"Unknown"` when the source cell was absent or empty
    pub location: String,

    /// Door width in meters
    pub door_width: f64,

    /// Inside temperature in degrees Celsius (may be negative)
    pub temp_inside: f64,

    /// Outside temperature in degrees Celsius (may be negative)
    pub temp_outside: f64,

    /// Heat loss in megajoules
    pub heat_loss_mj: f64,

    /// Gas saved in cubic meters
    pub gas_saved_m3: f64,

    /// Cost saved in euros
    pub cost_saved_eur: f64,
}

impl Measurement {
    /// Create a new measurement with a freshly assigned identity
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: DateTime<Utc>,
        location: String,
        door_width: f64,
        temp_inside: f64,
        temp_outside: f64,
        heat_loss_mj: f64,
        gas_saved_m3: f64,
        cost_saved_eur: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            location,
            door_width,
            temp_inside,
            temp_outside,
            heat_loss_mj,
            gas_saved_m3,
            cost_saved_eur,
        }
    }
}

// =============================================================================
// Derived KPI Summary
// =============================================================================

/// Summary statistics over a measurement collection
///
/// Derived on demand, never stored. An empty collection yields all zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Total heat loss in megajoules
    pub total_loss_mj: f64,

    /// Total gas saved in cubic meters
    pub total_saved_m3: f64,

    /// Total cost saved in euros
    pub total_saved_eur: f64,

    /// Total heat loss divided by the number of distinct locations
    pub avg_loss_per_location_mj: f64,
}
