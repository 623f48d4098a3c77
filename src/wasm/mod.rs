//! Browser bindings.
//!
//! Thin wasm-bindgen wrappers over the solvers. Requests and results cross
//! the boundary as plain JS objects with camelCase fields; solver errors
//! become thrown `Error`s carrying the [`SolveError`](crate::error::SolveError)
//! message.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::DEFAULT_SOLVE_DELAY_MS;
use crate::cost::CostModel;
use crate::input::parse_number;
use crate::models::{CostInputs, CostRates};
use crate::request::{AssignmentRequest, TransportationRequest};
use crate::workspace::{AssignmentProblem, TransportationProblem};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Evaluates the cost formula. `rates` may be `undefined` for the defaults.
#[wasm_bindgen(js_name = evaluateCost)]
pub fn evaluate_cost(inputs: JsValue, rates: JsValue) -> Result<JsValue, JsError> {
    let inputs: CostInputs = from_js(inputs)?;
    let rates: CostRates = if rates.is_undefined() || rates.is_null() {
        CostRates::default()
    } else {
        from_js(rates)?
    };
    to_js(&CostModel::new(rates).evaluate(&inputs))
}

/// Solves an assignment request `{costs, rowLabels, columnLabels, mode?}`.
#[wasm_bindgen(js_name = solveAssignment)]
pub fn solve_assignment(request: JsValue) -> Result<JsValue, JsError> {
    let request: AssignmentRequest = from_js(request)?;
    let solution = request.solve()?;
    to_js(&solution)
}

/// Solves a transportation request
/// `{supply, demand, costs, sourceLabels, destinationLabels}`.
#[wasm_bindgen(js_name = solveTransportation)]
pub fn solve_transportation(request: JsValue) -> Result<JsValue, JsError> {
    let request: TransportationRequest = from_js(request)?;
    let solution = request.solve()?;
    to_js(&solution)
}

/// Coerces a table cell to a number (unparseable text becomes 0).
#[wasm_bindgen(js_name = parseNumber)]
pub fn parse_number_js(text: &str) -> f64 {
    parse_number(text)
}

/// The built-in vehicle/zone instance.
#[wasm_bindgen(js_name = sampleAssignment)]
pub fn sample_assignment() -> Result<JsValue, JsError> {
    to_js(&AssignmentProblem::sample())
}

/// The built-in collection-point/recycling-centre instance.
#[wasm_bindgen(js_name = sampleTransportation)]
pub fn sample_transportation() -> Result<JsValue, JsError> {
    to_js(&TransportationProblem::sample())
}

/// A promise that resolves after `ms` milliseconds (default 800).
///
/// Used by the page to show a "solving" state before calling a solver.
/// Resolves immediately when the host has no `setTimeout`.
#[wasm_bindgen(js_name = solveDelay)]
pub fn solve_delay(ms: Option<u32>) -> js_sys::Promise {
    let ms = ms.unwrap_or(DEFAULT_SOLVE_DELAY_MS as u32);
    js_sys::Promise::new(&mut |resolve, reject| {
        let scheduled = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("setTimeout"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .map(|set_timeout| {
                set_timeout
                    .call2(&JsValue::NULL, &resolve, &JsValue::from(ms))
                    .is_ok()
            })
            .unwrap_or(false);
        if !scheduled {
            if let Err(err) = resolve.call0(&JsValue::NULL) {
                tracing::warn!(?err, "solve delay could not resolve");
                if reject.call1(&JsValue::NULL, &err).is_err() {
                    tracing::warn!("solve delay could not reject either");
                }
            }
        }
    })
}
