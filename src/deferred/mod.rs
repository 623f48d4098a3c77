//! Cancellable deferred solve.
//!
//! Runs a synchronous solve closure on a tokio task after a cosmetic delay.
//! The solvers themselves never sleep; this wrapper only schedules them.
//! A newer request cancelling an older one is the caller's decision.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::Config;

/// A solve scheduled to run after a delay.
///
/// Must be created inside a tokio runtime.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use std::time::Duration;
/// use u_ewaste::deferred::DeferredSolve;
/// use u_ewaste::workspace::TransportationProblem;
///
/// let mut problem = TransportationProblem::sample();
/// let task = DeferredSolve::spawn(Duration::from_millis(10), move || {
///     problem.solve().map(|s| s.total_cost())
/// });
/// let cost = task.wait().await.unwrap().unwrap();
/// assert_eq!(cost, 11100.0);
/// # }
/// ```
#[derive(Debug)]
pub struct DeferredSolve<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> DeferredSolve<T> {
    /// Schedules `solve` to run once `delay` has elapsed.
    pub fn spawn<F>(delay: Duration, solve: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            solve()
        });
        Self { handle }
    }

    /// Schedules `solve` with the delay from `config`.
    pub fn with_config<F>(config: &Config, solve: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::spawn(config.solve_delay(), solve)
    }

    /// Cancels the solve if it has not run yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Returns `true` once the task has completed or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the result; `None` if the task was cancelled.
    ///
    /// A panic inside the solve closure is propagated.
    pub async fn wait(self) -> Option<T> {
        match self.handle.await {
            Ok(value) => Some(value),
            Err(err) if err.is_cancelled() => {
                tracing::debug!("deferred solve cancelled");
                None
            }
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}
