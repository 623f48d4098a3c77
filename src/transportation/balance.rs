//! Supply/demand balance check.

/// Worst-case rounding error of summing `supply` and `demand`.
///
/// Each addition can be off by one unit in the last place of the running
/// total, so the bound is `f64::EPSILON` times the larger total times the
/// number of terms. It stays far below one whole unit for any total that
/// `f64` still counts exactly (up to 2^53).
pub fn rounding_tolerance(supply: &[f64], demand: &[f64]) -> f64 {
    let total_supply: f64 = supply.iter().map(|q| q.abs()).sum();
    let total_demand: f64 = demand.iter().map(|q| q.abs()).sum();
    let terms = (supply.len() + demand.len()) as f64;
    f64::EPSILON * total_supply.max(total_demand) * terms
}

/// Returns `true` if total supply equals total demand up to summation
/// rounding (see [`rounding_tolerance`]).
///
/// # Examples
///
/// ```
/// use u_ewaste::transportation::is_balanced;
///
/// assert!(is_balanced(&[300.0, 400.0, 500.0], &[400.0, 500.0, 300.0]));
/// assert!(!is_balanced(&[1200.0], &[1300.0]));
/// assert!(is_balanced(&[0.1, 0.2], &[0.3]));
/// ```
pub fn is_balanced(supply: &[f64], demand: &[f64]) -> bool {
    let total_supply: f64 = supply.iter().sum();
    let total_demand: f64 = demand.iter().sum();
    (total_supply - total_demand).abs() <= rounding_tolerance(supply, demand)
}
