//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces that the domain requires. Validation
//! is expressed as a port so form handlers can swap in custom rule sets.

pub mod validator;

pub use validator::{SubmissionValidator, ValidationConfig};
