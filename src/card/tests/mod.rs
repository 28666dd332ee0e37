//! Unit tests for the card module.

mod timestamp_tests;
