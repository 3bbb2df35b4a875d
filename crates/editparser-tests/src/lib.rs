//! Integration test crate for EditParser.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives the format registry end to end and checks the resulting
//! edit lists against the timecode and edit model crates.

#[cfg(test)]
mod timecode;

#[cfg(test)]
mod cmx3600;

#[cfg(test)]
mod vegas;
