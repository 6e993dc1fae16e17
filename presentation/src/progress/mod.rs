//! Progress reporters implementing the application's `ProgressNotifier` port

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
