//! Structs and logic to parse taxonomic path strings.
//!
//! This module provides the [TaxopathParser] struct, which turns either a
//! delimited string or a taxon of a classification tree into a [Taxopath].

use crate::model::taxon_node::TaxonNode;
use crate::model::{TaxonRef, Taxopath};
use crate::parser::parsing_error::ParsingError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default delimiter chars separating taxa in a taxonomic path string
pub(crate) const DEFAULT_DELIMITERS: &str = ";";

// =#========================================================================#=
// TAXOPATH PARSER
// =#========================================================================#=
/// Parser (configuration) for taxonomic path strings.
///
/// A taxonomic path string lists taxa from the top-level taxon downwards,
/// separated by delimiter chars, e.g. `"Animalia;Chordata;Aves"`.
/// Empty elements are filled with the preceding taxon, which is a common
/// technique in taxonomic databases for unspecified taxa in deeper ranks.
/// For example, the input string
///
/// ```text
/// Tax_1; Tax_2 ;;Tax_4;
/// ```
///
/// is parsed into the [Taxopath] `["Tax_1", "Tax_2", "Tax_2", "Tax_4"]`.
///
/// # Configuration
/// * [`delimiters`](Self::delimiters) - Set of chars, each of which
///   separates two taxa. Default `";"`. An empty set means no splitting.
/// * [`trim_whitespaces`](Self::trim_whitespaces) - Whether to trim
///   whitespace around each taxon. Default `true`.
/// * [`remove_trailing_delimiter`](Self::remove_trailing_delimiter) - Whether
///   a delimiter at the very end of the string is ignored, instead of
///   producing a last (filled) taxon. Default `true`.
///
/// Each option has a getter, a `set_*` method for chaining on a mutable
/// parser, and a `with_*` method for builder-style construction.
/// Options are not validated.
///
/// # Parsing
/// * [`from_string`](Self::from_string) - Parse a taxonomic path string
/// * [`from_taxon`](Self::from_taxon) - Collect the path of a taxon in a tree
/// * [`parse`](Self::parse) - Either of the two, depending on the input
///
/// # Errors
/// The first taxon must not be empty (after trimming), otherwise a
/// [ParsingError] of kind
/// [MalformedPath](crate::parser::ParsingErrorType::MalformedPath) is returned.
///
/// # Example
/// ```
/// use taxopath::parser::TaxopathParser;
///
/// let parser = TaxopathParser::new()
///     .with_delimiters("|")
///     .with_remove_trailing_delimiter(false);
///
/// let path = parser.from_string("Aves|Anseriformes|")?;
/// assert_eq!(path.as_slice(), ["Aves", "Anseriformes", "Anseriformes"]);
/// # Ok::<(), taxopath::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxopathParser {
    delimiters: String,
    trim_whitespaces: bool,
    remove_trailing_delimiter: bool,
}

impl Default for TaxopathParser {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_string(),
            trim_whitespaces: true,
            remove_trailing_delimiter: true,
        }
    }
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl TaxopathParser {
    /// Creates a new [TaxopathParser] with default settings:
    /// - Delimiter `;`
    /// - Whitespace around taxa is trimmed
    /// - Trailing delimiter is removed
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set of delimiter chars.
    pub fn delimiters(&self) -> &str {
        &self.delimiters
    }

    /// Sets the delimiter chars; any of them separates two taxa.
    pub fn set_delimiters(&mut self, delimiters: &str) -> &mut Self {
        self.delimiters = delimiters.to_string();
        self
    }

    /// Sets the delimiter chars; any of them separates two taxa.
    pub fn with_delimiters(mut self, delimiters: &str) -> Self {
        self.set_delimiters(delimiters);
        self
    }

    /// Returns whether whitespace around taxa is trimmed.
    pub fn trim_whitespaces(&self) -> bool {
        self.trim_whitespaces
    }

    /// Sets whether whitespace around taxa is trimmed.
    pub fn set_trim_whitespaces(&mut self, trim_whitespaces: bool) -> &mut Self {
        self.trim_whitespaces = trim_whitespaces;
        self
    }

    /// Sets whether whitespace around taxa is trimmed.
    pub fn with_trim_whitespaces(mut self, trim_whitespaces: bool) -> Self {
        self.set_trim_whitespaces(trim_whitespaces);
        self
    }

    /// Returns whether a delimiter at the end of the string is ignored.
    pub fn remove_trailing_delimiter(&self) -> bool {
        self.remove_trailing_delimiter
    }

    /// Sets whether a delimiter at the end of the string is ignored.
    ///
    /// If `false`, a trailing delimiter yields one more taxon, which is then
    /// filled with its predecessor: `"A;B;"` becomes `["A", "B", "B"]`.
    pub fn set_remove_trailing_delimiter(&mut self, remove_trailing_delimiter: bool) -> &mut Self {
        self.remove_trailing_delimiter = remove_trailing_delimiter;
        self
    }

    /// Sets whether a delimiter at the end of the string is ignored.
    pub fn with_remove_trailing_delimiter(mut self, remove_trailing_delimiter: bool) -> Self {
        self.set_remove_trailing_delimiter(remove_trailing_delimiter);
        self
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(c)
    }
}

// ============================================================================
// Parsing (pub)
// ============================================================================
impl TaxopathParser {
    /// Parses a taxonomic path string into a [Taxopath].
    ///
    /// Steps, in this order:
    /// 1. Split at each delimiter char, keeping empty elements
    /// 2. If configured and the string ends with a delimiter char,
    ///    drop the last (empty) element
    /// 3. If configured, trim whitespace of each element
    /// 4. Fill each empty element with its (filled) predecessor
    ///
    /// # Arguments
    /// * `taxopath` - The taxonomic path string
    ///
    /// # Returns
    /// * [Taxopath] - Non-empty path without empty names
    /// * [ParsingError] - If the first element is empty; this includes the
    ///   empty string and strings starting with a delimiter
    ///
    /// # Example
    /// ```
    /// use taxopath::parser::TaxopathParser;
    ///
    /// let parser = TaxopathParser::new();
    /// let path = parser.from_string("Tax_1; Tax_2 ;;Tax_4;")?;
    /// assert_eq!(path.as_slice(), ["Tax_1", "Tax_2", "Tax_2", "Tax_4"]);
    ///
    /// assert!(parser.from_string(";Tax_2").is_err());
    /// # Ok::<(), taxopath::parser::ParsingError>(())
    /// ```
    pub fn from_string(&self, taxopath: &str) -> Result<Taxopath, ParsingError> {
        let is_delimiter = |c: char| self.is_delimiter(c);

        // Empty elements between adjacent delimiters are kept
        let mut elements: Vec<&str> = taxopath.split(is_delimiter).collect();

        if self.remove_trailing_delimiter && taxopath.ends_with(is_delimiter) {
            elements.pop();
        }

        if self.trim_whitespaces {
            for element in elements.iter_mut() {
                *element = element.trim();
            }
        }

        // First taxon can't be filled from anywhere
        if elements.first().is_none_or(|first| first.is_empty()) {
            debug!(input = taxopath, "Rejecting taxonomic path with empty leading taxon");
            return Err(ParsingError::malformed_path(taxopath));
        }

        let mut names: Vec<String> = Vec::with_capacity(elements.len());
        for element in elements {
            let name = match (element.is_empty(), names.last()) {
                (true, Some(previous)) => previous.clone(),
                _ => element.to_string(),
            };
            names.push(name);
        }

        trace!(input = taxopath, num_taxa = names.len(), "Parsed taxonomic path");
        Ok(Taxopath::from_names(names))
    }

    /// Collects the [Taxopath] of a taxon by walking up its ancestry.
    ///
    /// The result lists the names from the top-level ancestor down to the
    /// given taxon, so its length is the depth of the taxon plus one.
    /// The configuration of the parser is not used.
    ///
    /// # Arguments
    /// * `taxon` - Any [TaxonNode], e.g. a [TaxonRef] of a
    ///   [Taxonomy](crate::model::Taxonomy)
    ///
    /// # Example
    /// ```
    /// use taxopath::model::Taxonomy;
    /// use taxopath::parser::TaxopathParser;
    ///
    /// let mut taxonomy = Taxonomy::new();
    /// let aves = taxonomy.add_top_level("Aves");
    /// let penguins = taxonomy.add_child(aves, "Sphenisciformes");
    /// let hoiho = taxonomy.add_child(penguins, "Megadyptes");
    ///
    /// let path = TaxopathParser::new().from_taxon(&taxonomy.taxon(hoiho));
    /// assert_eq!(path.as_slice(), ["Aves", "Sphenisciformes", "Megadyptes"]);
    /// ```
    pub fn from_taxon<N: TaxonNode>(&self, taxon: &N) -> Taxopath {
        let mut names = vec![taxon.name().to_string()];

        let mut current = taxon.parent();
        while let Some(ancestor) = current {
            names.push(ancestor.name().to_string());
            current = ancestor.parent();
        }
        names.reverse();

        trace!(taxon = taxon.name(), num_taxa = names.len(), "Collected taxonomic path of taxon");
        Taxopath::from_names(names)
    }

    /// Parses a [Taxopath] from a string or a taxon.
    ///
    /// Shorthand for [`from_string`](Self::from_string) and
    /// [`from_taxon`](Self::from_taxon), dispatching on the type of `source`.
    /// Taxa never fail to produce a path.
    ///
    /// # Example
    /// ```
    /// use taxopath::model::Taxonomy;
    /// use taxopath::parser::TaxopathParser;
    ///
    /// let parser = TaxopathParser::new();
    /// let mut taxonomy = Taxonomy::new();
    /// let aves = taxonomy.add_top_level("Aves");
    /// let ducks = taxonomy.add_child(aves, "Anseriformes");
    ///
    /// assert_eq!(parser.parse("Aves;Anseriformes")?, parser.parse(taxonomy.taxon(ducks))?);
    /// # Ok::<(), taxopath::parser::ParsingError>(())
    /// ```
    pub fn parse<S: TaxopathSource>(&self, source: S) -> Result<Taxopath, ParsingError> {
        source.parse_with(self)
    }
}

// =#========================================================================#=
// TAXOPATH SOURCE (trait)
// =#========================================================================T=
/// Input that a [TaxopathParser] can turn into a [Taxopath].
///
/// Implemented for strings (via [`TaxopathParser::from_string`]) and for
/// [TaxonRef] (via [`TaxopathParser::from_taxon`]).
pub trait TaxopathSource {
    /// Parses this input with the given parser.
    fn parse_with(self, parser: &TaxopathParser) -> Result<Taxopath, ParsingError>;
}

impl TaxopathSource for &str {
    fn parse_with(self, parser: &TaxopathParser) -> Result<Taxopath, ParsingError> {
        parser.from_string(self)
    }
}

impl TaxopathSource for &String {
    fn parse_with(self, parser: &TaxopathParser) -> Result<Taxopath, ParsingError> {
        parser.from_string(self)
    }
}

impl TaxopathSource for TaxonRef<'_> {
    fn parse_with(self, parser: &TaxopathParser) -> Result<Taxopath, ParsingError> {
        Ok(parser.from_taxon(&self))
    }
}

impl TaxopathSource for &TaxonRef<'_> {
    fn parse_with(self, parser: &TaxopathParser) -> Result<Taxopath, ParsingError> {
        Ok(parser.from_taxon(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsingErrorType;

    #[test]
    fn test_split_keeps_inner_empty_elements() {
        let parser = TaxopathParser::new().with_trim_whitespaces(false);
        let path = parser.from_string("A;;;D").unwrap();
        assert_eq!(path.as_slice(), ["A", "A", "A", "D"]);
    }

    #[test]
    fn test_whitespace_only_first_element_fails() {
        let parser = TaxopathParser::new();
        let err = parser.from_string("  ;B").unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::MalformedPath);
        assert_eq!(err.input(), "  ;B");
    }

    #[test]
    fn test_whitespace_kept_without_trimming() {
        let parser = TaxopathParser::new().with_trim_whitespaces(false);
        let path = parser.from_string(" A; ;C").unwrap();
        assert_eq!(path.as_slice(), [" A", " ", "C"]);
    }

    #[test]
    fn test_only_delimiter_fails() {
        let parser = TaxopathParser::new();
        assert!(parser.from_string(";").is_err());
        assert!(parser.with_remove_trailing_delimiter(false).from_string(";").is_err());
    }
}
