//! Helper routines for the Kubernetes submission client.
//!
//! These are the building blocks the deployment code uses when it turns an
//! application submission into driver and executor pods: prefixed
//! configuration extraction, file URI normalization, pod template splitting,
//! and master URL parsing. Everything here is a pure transformation over
//! caller-supplied values; pod creation and scheduling live elsewhere.

pub mod client;
pub mod config;
pub mod error;
pub mod master;
pub mod pod;
pub mod uri;

pub use error::SubmitError;
pub use pod::SplitPod;
