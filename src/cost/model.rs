//! Cost formula evaluator.
//!
//! Four inputs in, five components plus a net figure out. Pure and
//! infallible: out-of-range inputs are computed mechanically.

use crate::models::{CostInputs, CostRates, CostResult};

/// Evaluates the e-waste cost breakdown with a fixed set of unit rates.
///
/// # Examples
///
/// ```
/// use u_ewaste::cost::CostModel;
/// use u_ewaste::models::CostInputs;
///
/// let model = CostModel::default();
/// let r = model.evaluate(&CostInputs::new(1000.0, 50.0, 0.8, 200.0));
/// assert!((r.total_cost - 21000.0).abs() < 1e-9);
/// assert!((r.recovery_value - 9600.0).abs() < 1e-9);
/// assert!((r.net_cost - 11400.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostModel {
    rates: CostRates,
}

impl CostModel {
    /// Creates a model with custom unit rates.
    pub fn new(rates: CostRates) -> Self {
        Self { rates }
    }

    /// The unit rates in use.
    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// Computes the cost breakdown for `inputs`.
    pub fn evaluate(&self, inputs: &CostInputs) -> CostResult {
        let r = &self.rates;
        let volume = inputs.collection_volume;
        let processed = volume * inputs.processing_rate;

        let collection_cost = volume * r.collection;
        let transportation_cost = inputs.transportation_distance * volume * r.transport;
        let processing_cost = processed * r.processing;
        let disposal_cost = inputs.disposal_volume * r.disposal;
        let recovery_value = processed * r.recovery_fraction * r.recovery_price;

        let total_cost = collection_cost + transportation_cost + processing_cost + disposal_cost;

        tracing::trace!(total_cost, recovery_value, "evaluated cost model");

        CostResult {
            collection_cost,
            transportation_cost,
            processing_cost,
            disposal_cost,
            recovery_value,
            total_cost,
            net_cost: total_cost - recovery_value,
        }
    }
}

/// Evaluates `inputs` with the default unit rates.
pub fn evaluate_cost(inputs: &CostInputs) -> CostResult {
    CostModel::default().evaluate(inputs)
}
