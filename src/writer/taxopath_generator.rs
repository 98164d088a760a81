//! Generation of taxonomic path strings.
//!
//! This module provides the [TaxopathGenerator], the counterpart of the
//! [TaxopathParser](crate::parser::TaxopathParser): it joins the names of a
//! [Taxopath] (or of the ancestry of a taxon) into a delimited string.

use crate::model::taxon_node::TaxonNode;
use crate::model::Taxopath;
use crate::parser::TaxopathParser;
use serde::{Deserialize, Serialize};

/// Default delimiter placed between taxa
const DEFAULT_DELIMITER: &str = ";";

// =#========================================================================#=
// TAXOPATH GENERATOR
// =#========================================================================#=
/// Generator (configuration) for taxonomic path strings.
///
/// # Configuration
/// * [`delimiter`](Self::delimiter) - String placed between two taxa.
///   Default `";"`.
/// * [`trim_nested_duplicates`](Self::trim_nested_duplicates) - Whether a
///   taxon with the same name as its predecessor is written as empty string,
///   e.g. `["A", "A", "C"]` becomes `"A;;C"`. This reverts the filling done by
///   the parser. Default `false`.
/// * [`append_delimiter`](Self::append_delimiter) - Whether to end the string
///   with the delimiter. Default `false`.
///
/// # Example
/// ```
/// use taxopath::parser::TaxopathParser;
/// use taxopath::writer::TaxopathGenerator;
///
/// let path = TaxopathParser::new().from_string("Aves;;Apteryx")?;
/// assert_eq!(path.as_slice(), ["Aves", "Aves", "Apteryx"]);
///
/// let generator = TaxopathGenerator::new();
/// assert_eq!(generator.from_taxopath(&path), "Aves;Aves;Apteryx");
///
/// let generator = generator.with_trim_nested_duplicates(true).with_append_delimiter(true);
/// assert_eq!(generator.from_taxopath(&path), "Aves;;Apteryx;");
/// # Ok::<(), taxopath::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxopathGenerator {
    delimiter: String,
    trim_nested_duplicates: bool,
    append_delimiter: bool,
}

impl Default for TaxopathGenerator {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            trim_nested_duplicates: false,
            append_delimiter: false,
        }
    }
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl TaxopathGenerator {
    /// Creates a new [TaxopathGenerator] with default settings:
    /// - Delimiter `;`
    /// - Nested duplicates are written out
    /// - No trailing delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delimiter placed between taxa.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Sets the delimiter placed between taxa.
    pub fn set_delimiter(&mut self, delimiter: &str) -> &mut Self {
        self.delimiter = delimiter.to_string();
        self
    }

    /// Sets the delimiter placed between taxa.
    pub fn with_delimiter(mut self, delimiter: &str) -> Self {
        self.set_delimiter(delimiter);
        self
    }

    /// Returns whether taxa equal to their predecessor are written empty.
    pub fn trim_nested_duplicates(&self) -> bool {
        self.trim_nested_duplicates
    }

    /// Sets whether taxa equal to their predecessor are written empty.
    pub fn set_trim_nested_duplicates(&mut self, trim_nested_duplicates: bool) -> &mut Self {
        self.trim_nested_duplicates = trim_nested_duplicates;
        self
    }

    /// Sets whether taxa equal to their predecessor are written empty.
    pub fn with_trim_nested_duplicates(mut self, trim_nested_duplicates: bool) -> Self {
        self.set_trim_nested_duplicates(trim_nested_duplicates);
        self
    }

    /// Returns whether the string ends with the delimiter.
    pub fn append_delimiter(&self) -> bool {
        self.append_delimiter
    }

    /// Sets whether the string ends with the delimiter.
    pub fn set_append_delimiter(&mut self, append_delimiter: bool) -> &mut Self {
        self.append_delimiter = append_delimiter;
        self
    }

    /// Sets whether the string ends with the delimiter.
    pub fn with_append_delimiter(mut self, append_delimiter: bool) -> Self {
        self.set_append_delimiter(append_delimiter);
        self
    }

    /// Creates a generator whose output the given parser reads back into
    /// the same [Taxopath], also with nested duplicates trimmed.
    ///
    /// Uses the first delimiter char of the parser, or the default delimiter
    /// if the parser has none. A trailing delimiter is appended exactly if the
    /// parser removes one, so that a trimmed last taxon is not lost.
    pub fn matching(parser: &TaxopathParser) -> Self {
        let delimiter = parser
            .delimiters()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| DEFAULT_DELIMITER.to_string());
        Self {
            delimiter,
            trim_nested_duplicates: false,
            append_delimiter: parser.remove_trailing_delimiter(),
        }
    }
}

// ============================================================================
// Generating (pub)
// ============================================================================
impl TaxopathGenerator {
    /// Returns the taxonomic path string of a [Taxopath].
    ///
    /// # Arguments
    /// * `taxopath` - The path to write
    ///
    /// # Returns
    /// The names joined by the delimiter, root-most first.
    pub fn from_taxopath(&self, taxopath: &Taxopath) -> String {
        let capacity = taxopath.iter().map(|name| name.len() + self.delimiter.len()).sum();
        let mut result = String::with_capacity(capacity);

        let mut previous: Option<&str> = None;
        for (index, name) in taxopath.iter().enumerate() {
            if index > 0 {
                result.push_str(&self.delimiter);
            }
            if !(self.trim_nested_duplicates && previous == Some(name)) {
                result.push_str(name);
            }
            previous = Some(name);
        }

        if self.append_delimiter {
            result.push_str(&self.delimiter);
        }

        result
    }

    /// Returns the taxonomic path string of a taxon, from its top-level
    /// ancestor down to the taxon itself.
    ///
    /// # Example
    /// ```
    /// use taxopath::model::Taxonomy;
    /// use taxopath::writer::TaxopathGenerator;
    ///
    /// let mut taxonomy = Taxonomy::new();
    /// let aves = taxonomy.add_top_level("Aves");
    /// let parrots = taxonomy.add_child(aves, "Psittaciformes");
    /// let kea = taxonomy.add_child(parrots, "Nestor");
    ///
    /// let generator = TaxopathGenerator::new().with_delimiter(" > ");
    /// assert_eq!(generator.from_taxon(&taxonomy.taxon(kea)), "Aves > Psittaciformes > Nestor");
    /// ```
    pub fn from_taxon<N: TaxonNode>(&self, taxon: &N) -> String {
        self.from_taxopath(&TaxopathParser::new().from_taxon(taxon))
    }
}
