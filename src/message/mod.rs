//! Message format and submission validation.
//!
//! This module implements the message aggregate shown on message cards and
//! the validation schema applied to message submission forms.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::StarRating`], [`domain::MessageSubmission`])
//! - **Ports**: Abstract trait interfaces ([`ports::validator::SubmissionValidator`])
//! - **Validation**: Rule enforcement at the submission boundary
//!
//! # Example
//!
//! ```
//! use whisper::message::domain::MessageSubmission;
//! use whisper::message::error::SubmissionField;
//! use whisper::message::ports::validator::SubmissionValidator;
//! use whisper::message::validation::service::DefaultSubmissionValidator;
//!
//! let validator = DefaultSubmissionValidator::new();
//! let error = validator
//!     .validate(&MessageSubmission::new("short").with_stars(9_i64))
//!     .expect_err("both fields are invalid");
//!
//! let fields = error.field_errors();
//! assert!(fields.contains_key(&SubmissionField::Content));
//! assert!(fields.contains_key(&SubmissionField::Stars));
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;
