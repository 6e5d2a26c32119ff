//! Progress notification port
//!
//! Lets the presentation layer show a busy indicator while a request is
//! in flight.

/// Callback for request progress
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self);

    /// Called once the request has finished, successfully or not
    fn on_request_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self) {}
    fn on_request_complete(&self, _success: bool) {}
}
