//! Percentage progress callback trait and implementations.

/// Progress callback receiving a transfer percentage.
///
/// Percentages are in `0.0..=100.0`. Transfers cannot be cancelled from a
/// callback; it is purely informational.
pub trait ProgressCallback: Send + Sync {
    /// Called with progress updates.
    ///
    /// # Arguments
    /// * `percent` - Completed share of the current transfer, `0.0..=100.0`
    fn on_progress(&self, percent: f64);
}

/// A progress callback that ignores every update.
pub struct NoOpProgress;

impl ProgressCallback for NoOpProgress {
    fn on_progress(&self, _percent: f64) {}
}

/// A progress callback that wraps a closure.
pub struct FnProgress<F> {
    callback: F,
}

impl<F> FnProgress<F>
where
    F: Fn(f64) + Send + Sync,
{
    /// Create a new closure-based progress callback.
    ///
    /// # Arguments
    /// * `callback` - Closure that receives the percentage
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ProgressCallback for FnProgress<F>
where
    F: Fn(f64) + Send + Sync,
{
    fn on_progress(&self, percent: f64) {
        (self.callback)(percent)
    }
}

/// Create a progress callback from a closure.
///
/// # Arguments
/// * `f` - Closure that receives the percentage
///
/// # Returns
/// A `FnProgress` wrapper implementing `ProgressCallback`.
pub fn progress_fn<F>(f: F) -> FnProgress<F>
where
    F: Fn(f64) + Send + Sync,
{
    FnProgress::new(f)
}

/// Percentage of `done` out of `total`, clamped to `0.0..=100.0`.
///
/// An empty transfer is reported as complete.
pub fn percent_of(done: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    ((done as f64 / total as f64) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_noop_progress() {
        let progress: NoOpProgress = NoOpProgress;
        progress.on_progress(42.0);
    }

    #[test]
    fn test_fn_progress_captures_state() {
        let seen: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone: Arc<Mutex<Vec<f64>>> = seen.clone();

        let callback = progress_fn(move |percent: f64| {
            seen_clone.lock().unwrap().push(percent);
        });

        callback.on_progress(0.0);
        callback.on_progress(50.0);
        callback.on_progress(100.0);

        assert_eq!(*seen.lock().unwrap(), vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_fn_progress_as_trait_object() {
        let seen: Arc<Mutex<f64>> = Arc::new(Mutex::new(0.0));
        let seen_clone: Arc<Mutex<f64>> = seen.clone();
        let callback = progress_fn(move |percent: f64| *seen_clone.lock().unwrap() = percent);

        let dyn_callback: &dyn ProgressCallback = &callback;
        dyn_callback.on_progress(75.0);

        assert_eq!(*seen.lock().unwrap(), 75.0);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(0, 10), 0.0);
        assert_eq!(percent_of(5, 10), 50.0);
        assert_eq!(percent_of(10, 10), 100.0);
        assert_eq!(percent_of(0, 0), 100.0);
        assert_eq!(percent_of(20, 10), 100.0);
    }
}
