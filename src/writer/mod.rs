//! Writers for taxonomic paths.
//!
//! This module provides the [TaxopathGenerator], which turns
//! [Taxopath](crate::model::Taxopath)s or taxa back into delimited strings.

pub mod taxopath_generator;

pub use taxopath_generator::TaxopathGenerator;
