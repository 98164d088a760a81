//! Error types for taxonomic path parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while parsing taxonomic path strings.

use thiserror::Error;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur during taxonomic path parsing.
#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum ParsingErrorType {
    /// The first taxon of the path is empty, even after trimming.
    #[error("Malformed taxonomic path - empty leading taxon component")]
    MalformedPath,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error carrying the offending input string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} in \"{input}\"")]
pub struct ParsingError {
    kind: ParsingErrorType,
    input: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and the input that caused it
    pub fn new(kind: ParsingErrorType, input: &str) -> Self {
        Self { kind, input: input.to_string() }
    }

    /// Convenience constructor for MalformedPath
    pub fn malformed_path(input: &str) -> Self {
        Self::new(ParsingErrorType::MalformedPath, input)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the input string that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}
