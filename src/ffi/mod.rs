//! C ABI.
//!
//! Every entry point takes a NUL-terminated JSON request and returns a
//! newly allocated NUL-terminated JSON response, either `{"ok": ...}` or
//! `{"error": "..."}`. Responses must be released with
//! [`ewaste_free_string`].

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cost::evaluate_cost;
use crate::models::CostInputs;
use crate::request::{AssignmentRequest, Response, TransportationRequest};

fn respond<T: Serialize>(response: Response<T>) -> *mut c_char {
    let json = serde_json::to_string(&response).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ffi response could not be encoded");
        serde_json::json!({ "error": format!("failed to encode response: {e}") }).to_string()
    });
    // serde_json escapes control characters, so no interior NUL can appear.
    CString::new(json)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated string.
unsafe fn read_request<T: DeserializeOwned>(ptr: *const c_char) -> Result<T, String> {
    if ptr.is_null() {
        return Err("request pointer is null".to_string());
    }
    let text = CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| format!("request is not UTF-8: {e}"))?;
    serde_json::from_str(text).map_err(|e| format!("invalid request: {e}"))
}

unsafe fn handle<Req, Out, F>(ptr: *const c_char, run: F) -> *mut c_char
where
    Req: DeserializeOwned,
    Out: Serialize,
    F: FnOnce(Req) -> Result<Out, String>,
{
    let result = read_request::<Req>(ptr).and_then(run);
    if let Err(msg) = &result {
        tracing::warn!(error = %msg, "ffi request failed");
    }
    respond(Response::from(result))
}

/// Evaluates the cost formula for a `CostInputs` JSON object.
///
/// # Safety
///
/// `request` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ewaste_evaluate_cost_json(request: *const c_char) -> *mut c_char {
    handle(request, |inputs: CostInputs| Ok(evaluate_cost(&inputs)))
}

/// Solves an assignment request JSON object.
///
/// # Safety
///
/// `request` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ewaste_solve_assignment_json(request: *const c_char) -> *mut c_char {
    handle(request, |req: AssignmentRequest| {
        req.solve().map_err(|e| e.to_string())
    })
}

/// Solves a transportation request JSON object.
///
/// # Safety
///
/// `request` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ewaste_solve_transportation_json(request: *const c_char) -> *mut c_char {
    handle(request, |req: TransportationRequest| {
        req.solve().map_err(|e| e.to_string())
    })
}

/// Releases a string returned by this library.
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by one of the
/// `ewaste_*_json` functions, and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn ewaste_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
