//! Parsers for taxonomic paths.
//!
//! This module provides the [TaxopathParser], which turns taxonomic path
//! strings or taxa of a classification tree into [Taxopath](crate::model::Taxopath)s,
//! along with its error type.

pub mod parsing_error;
pub mod taxopath_parser;

pub use parsing_error::{ParsingError, ParsingErrorType};
pub use taxopath_parser::{TaxopathParser, TaxopathSource};
