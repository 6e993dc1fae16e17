//! Application-level configuration.
//!
//! - [`CouncilConfig`]: roster, retry policy, intake policy and dispatch mode
//!   shared by every use case

pub mod council_config;

pub use council_config::CouncilConfig;
