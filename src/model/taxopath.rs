//! Taxopath module for taxonomic path representation.
//!
//! - `Taxopath`: Ordered list of taxon names, from the top-level taxon down
//!   to the most specific one.

use std::ops::Index;
use std::slice;

// =#========================================================================#=
// TAXOPATH
// =#========================================================================#=
/// A taxonomic path, i.e. the ordered names of the taxa leading from a
/// top-level taxon down to one taxon of a classification.
///
/// For example, the string `"Animalia;Chordata;Aves"` corresponds to the
/// Taxopath `["Animalia", "Chordata", "Aves"]`.
///
/// # Invariants
/// - Contains at least one name
/// - The first (root-most) name is never empty
/// - No name is empty; omitted ranks are filled with their preceding name
///
/// # Construction
/// A Taxopath is obtained from a [TaxopathParser](crate::parser::TaxopathParser),
/// either by parsing a string or by walking the ancestry of a taxon.
/// It is immutable afterwards.
///
/// # Example
/// ```
/// use taxopath::parser::TaxopathParser;
///
/// let path = TaxopathParser::new().from_string("Aves;Apterygiformes;;Apteryx")?;
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.first(), "Aves");
/// assert_eq!(&path[2], "Apterygiformes");
/// assert_eq!(path.last(), "Apteryx");
/// # Ok::<(), taxopath::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Taxopath {
    /// Taxon names, root-most first
    names: Vec<String>,
}

impl Taxopath {
    /// Creates a Taxopath from already validated and filled names.
    ///
    /// Callers must uphold the invariants listed on [Taxopath].
    pub(crate) fn from_names(names: Vec<String>) -> Self {
        debug_assert!(!names.is_empty(), "Taxopath must contain at least one name");
        debug_assert!(names.iter().all(|name| !name.is_empty()), "Taxopath names must not be empty");
        Taxopath { names }
    }

    /// Returns the number of names (ranks) in this path.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the path contains no names.
    ///
    /// Never the case for a Taxopath obtained from a parser.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the name at the given rank position, or `None` if out of bounds.
    ///
    /// # Arguments
    /// * `index` - Position in the path; 0 is the top-level taxon
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|s| s.as_str())
    }

    /// Returns the root-most (top-level) name.
    pub fn first(&self) -> &str {
        &self.names[0]
    }

    /// Returns the most specific name, i.e. the last one.
    pub fn last(&self) -> &str {
        &self.names[self.names.len() - 1]
    }

    /// Returns an iterator over the names, root-most first.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.names.iter() }
    }

    /// Returns the names as slice, root-most first.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Consumes the path and returns the names, root-most first.
    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl Index<usize> for Taxopath {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.names[index]
    }
}

impl<'a> IntoIterator for &'a Taxopath {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the names of a [Taxopath], root-most first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| s.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| s.as_str())
    }
}

impl ExactSizeIterator for Iter<'_> {}
