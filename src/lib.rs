//! Taxopath is a library to parse taxonomic path strings and relate them to
//! the taxa of a classification tree.
//!
//! A taxonomic path string lists the taxa from a top-level taxon down to a
//! more specific one, separated by a delimiter, e.g.
//! `"Animalia;Chordata;Aves;Apterygiformes"`, as found in many taxonomic
//! databases. Core functionality provided:
//! - Parser: [TaxopathParser](crate::parser::TaxopathParser) turns such a
//!   string into a [Taxopath], the ordered list of taxon names, or collects
//!   the [Taxopath] of a taxon by walking up its ancestry.
//! - Generator: [TaxopathGenerator](crate::writer::TaxopathGenerator) turns
//!   a [Taxopath] or a taxon back into a string.
//! - Classification tree: [Taxonomy](crate::model::Taxonomy) stores taxa using
//!   the arena pattern, so no direct references are stored, only indices.
//!   See [crate::model] for more details.
//! - Configurability:
//!   - Set of delimiter chars (default `;`)
//!   - Trimming of whitespace around taxa (default on)
//!   - Removal of a trailing delimiter (default on)
//!
//! Empty taxa are filled with their preceding taxon, which is how taxonomic
//! databases commonly express unspecified deeper ranks:
//! `"Tax_1; Tax_2 ;;Tax_4;"` is parsed as `["Tax_1", "Tax_2", "Tax_2", "Tax_4"]`.
//! The first taxon must not be empty.
//!
//! Limitations:
//! - No file reading or writing; callers feed the parser line by line
//! - Names containing delimiter chars cannot be represented
//!
//! # Usage patterns
//! 1. [parse_taxopath] parses a single string with default settings.
//! 2. Configure a [TaxopathParser](crate::parser::TaxopathParser) yourself for
//!    full control, and reuse it for every line of your input.
//!
//! ## Example Default Configuration
//! ```
//! use taxopath::parse_taxopath;
//!
//! let path = parse_taxopath("Animalia;Chordata;Aves").unwrap();
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.last(), "Aves");
//! ```
//!
//! ## Example Parser Configuration
//! ```
//! use taxopath::parser::TaxopathParser;
//!
//! let parser = TaxopathParser::new()
//!     .with_delimiters("|,")                    // Split at '|' and ','
//!     .with_remove_trailing_delimiter(false);   // Keep trailing empty taxon
//!
//! let path = parser.from_string("Aves|Charadriiformes,")?;
//! assert_eq!(path.as_slice(), ["Aves", "Charadriiformes", "Charadriiformes"]);
//! # Ok::<(), taxopath::parser::ParsingError>(())
//! ```

pub mod model;
pub mod parser;
pub mod writer;

pub use crate::model::Taxopath;
use crate::parser::{ParsingError, TaxopathParser};

// ============================================================================
// Quick API
// ============================================================================
/// Parses a taxonomic path string using default settings,
/// returning a [Taxopath].
///
/// See [`TaxopathParser::from_string`] for full documentation.
pub fn parse_taxopath<S: AsRef<str>>(taxopath: S) -> Result<Taxopath, ParsingError> {
    TaxopathParser::new().from_string(taxopath.as_ref())
}
