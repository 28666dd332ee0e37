//! Whisper: anonymous message submission and message cards.
//!
//! This crate provides the validation schema for the message submission form
//! and the controller behind each displayed message card: rendering, template
//! export to the clipboard and confirmed deletion.
//!
//! # Architecture
//!
//! Whisper follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `chrono`)
//!
//! # Modules
//!
//! - [`message`]: Message format and submission validation
//! - [`card`]: Message card display, template export and deletion

pub mod card;
pub mod message;
