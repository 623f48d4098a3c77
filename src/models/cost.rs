//! Cost formula inputs, rates, and results.

use serde::{Deserialize, Serialize};

/// Quantities entered for one cost calculation.
///
/// `processing_rate` is the recycled fraction in `[0, 1]`; the caller is
/// expected to clamp it, the formula does not.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInputs {
    /// Collected e-waste volume.
    pub collection_volume: f64,
    /// Haul distance.
    pub transportation_distance: f64,
    /// Fraction of the collected volume that is processed.
    pub processing_rate: f64,
    /// Volume sent to disposal.
    pub disposal_volume: f64,
}

impl CostInputs {
    /// Creates a set of inputs.
    pub fn new(
        collection_volume: f64,
        transportation_distance: f64,
        processing_rate: f64,
        disposal_volume: f64,
    ) -> Self {
        Self {
            collection_volume,
            transportation_distance,
            processing_rate,
            disposal_volume,
        }
    }
}

/// Unit rates used by the cost formula.
///
/// # Examples
///
/// ```
/// use u_ewaste::models::CostRates;
///
/// let rates = CostRates::default();
/// assert_eq!(rates.collection, 5.0);
/// assert_eq!(rates.recovery_fraction, 0.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostRates {
    /// Cost per collected unit.
    pub collection: f64,
    /// Cost per unit per distance.
    pub transport: f64,
    /// Cost per processed unit.
    pub processing: f64,
    /// Cost per disposed unit.
    pub disposal: f64,
    /// Share of processed material that is recovered.
    pub recovery_fraction: f64,
    /// Sale price per recovered unit.
    pub recovery_price: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            collection: 5.0,
            transport: 0.1,
            processing: 10.0,
            disposal: 15.0,
            recovery_fraction: 0.6,
            recovery_price: 20.0,
        }
    }
}

/// Breakdown produced by one cost calculation.
///
/// `total_cost` is the sum of the four cost components and `net_cost` is
/// `total_cost - recovery_value`, which may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostResult {
    /// Collection component.
    pub collection_cost: f64,
    /// Transportation component.
    pub transportation_cost: f64,
    /// Processing component.
    pub processing_cost: f64,
    /// Disposal component.
    pub disposal_cost: f64,
    /// Value of recovered material.
    pub recovery_value: f64,
    /// Sum of the four cost components.
    pub total_cost: f64,
    /// Total cost minus recovery value.
    pub net_cost: f64,
}
