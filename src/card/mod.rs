//! Message cards: display, template export and deletion of one message.
//!
//! A card shows a message's sender name, star rating, content and creation
//! time, exports the same content as an HTML or JSX snippet, and gates
//! deletion behind a confirmation step. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
