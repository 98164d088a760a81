//! Taxonomy module for classification tree representation.
//!
//! This module provides the core data structures for holding a classification:
//! - `Taxonomy`: Arena of taxa, possibly with several top-level taxa.
//! - `TaxonId` is used to index taxa.
//! - `TaxonRef` is a borrowed view of one taxon, used to walk the tree.

use crate::model::taxon_node::TaxonNode;
use std::fmt;

/// Index of a taxon in a [Taxonomy] (arena).
pub type TaxonId = usize;

// =#========================================================================#=
// TAXON ENTRY
// =#========================================================================#=
/// A single taxon as stored in the arena.
#[derive(Debug, Clone, PartialEq)]
struct TaxonEntry {
    /// Name of the taxon; never empty
    name: String,
    /// Optional rank name, e.g. "Genus"
    rank: Option<String>,
    /// Index of the parent taxon; `None` for top-level taxa
    parent: Option<TaxonId>,
    /// Indices of the children, in insertion order and unique by name
    children: Vec<TaxonId>,
}

// =#========================================================================#=
// TAXONOMY
// =#========================================================================#=
/// A classification tree represented using the arena pattern.
///
/// Taxa are stored in a contiguous vector and referenced by [TaxonId].
/// Each taxon knows the index of its parent (a non-owning back reference)
/// and the indices of its children, so there are no reference cycles.
///
/// # Structure
/// - Any number of top-level taxa, each without parent
/// - Children of a taxon are unique by name
/// - Names are never empty
///
/// # Construction
/// Add top-level taxa with [Taxonomy::add_top_level], then children with
/// [Taxonomy::add_child]. Both return the existing taxon if one of the same
/// name is already present at that position.
///
/// # Example
/// ```
/// use taxopath::model::Taxonomy;
///
/// let mut taxonomy = Taxonomy::new();
/// let aves = taxonomy.add_top_level("Aves");
/// let kiwis = taxonomy.add_child(aves, "Apterygiformes");
/// let kiwi = taxonomy.add_child(kiwis, "Apteryx");
///
/// let taxon = taxonomy.taxon(kiwi);
/// assert_eq!(taxon.depth(), 2);
/// assert_eq!(taxon.parent().unwrap().name(), "Apterygiformes");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    /// Taxa of this taxonomy (arena pattern)
    taxa: Vec<TaxonEntry>,

    /// Indices of the top-level taxa, in insertion order
    top_level: Vec<TaxonId>,
}

// ============================================================================
// New, Construction (pub)
// ============================================================================
impl Taxonomy {
    /// Creates a new, empty taxonomy.
    pub fn new() -> Self {
        Taxonomy { taxa: Vec::new(), top_level: Vec::new() }
    }

    /// Adds a top-level taxon with the given name, or returns the index of
    /// the existing top-level taxon of that name.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    pub fn add_top_level(&mut self, name: &str) -> TaxonId {
        if let Some(index) = self.find_top_level(name) {
            return index;
        }

        let index = self.push_entry(name, None);
        self.top_level.push(index);
        index
    }

    /// Adds a child with the given name to `parent`, or returns the index of
    /// the existing child of that name.
    ///
    /// # Arguments
    /// * `parent` - Index of the parent taxon
    /// * `name` - Name of the child taxon
    ///
    /// # Panics
    /// Panics if `name` is empty or `parent` is out of bounds.
    pub fn add_child(&mut self, parent: TaxonId, name: &str) -> TaxonId {
        if let Some(index) = self.find_child(parent, name) {
            return index;
        }

        let index = self.push_entry(name, Some(parent));
        self.taxa[parent].children.push(index);
        index
    }

    /// Sets the rank name of a taxon, e.g. "Genus".
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set_rank(&mut self, index: TaxonId, rank: &str) {
        self.taxa[index].rank = Some(rank.to_string());
    }

    fn push_entry(&mut self, name: &str, parent: Option<TaxonId>) -> TaxonId {
        assert!(!name.is_empty(), "Taxon name must not be empty");
        let index = self.taxa.len();
        self.taxa.push(TaxonEntry {
            name: name.to_string(),
            rank: None,
            parent,
            children: Vec::new(),
        });
        index
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl Taxonomy {
    /// Returns the index of the top-level taxon with the given name, if any.
    pub fn find_top_level(&self, name: &str) -> Option<TaxonId> {
        self.top_level.iter().copied().find(|&index| self.taxa[index].name == name)
    }

    /// Returns the index of the child of `parent` with the given name, if any.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub fn find_child(&self, parent: TaxonId, name: &str) -> Option<TaxonId> {
        self.taxa[parent]
            .children
            .iter()
            .copied()
            .find(|&index| self.taxa[index].name == name)
    }

    /// Returns a view of the taxon at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn taxon(&self, index: TaxonId) -> TaxonRef<'_> {
        assert!(index < self.taxa.len(), "Taxon index {} out of bounds", index);
        TaxonRef { taxonomy: self, index }
    }

    /// Returns a view of the taxon at the given index, or `None` if out of bounds.
    pub fn get(&self, index: TaxonId) -> Option<TaxonRef<'_>> {
        (index < self.taxa.len()).then_some(TaxonRef { taxonomy: self, index })
    }

    /// Returns an iterator over the top-level taxa, in insertion order.
    pub fn top_level(&self) -> impl Iterator<Item = TaxonRef<'_>> + '_ {
        self.top_level.iter().map(move |&index| TaxonRef { taxonomy: self, index })
    }

    /// Returns the total number of taxa in this taxonomy.
    pub fn num_taxa(&self) -> usize {
        self.taxa.len()
    }

    /// Returns `true` if this taxonomy contains no taxa.
    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }
}

// =#========================================================================#=
// TAXON REF
// =#========================================================================#=
/// Borrowed view of a single taxon in a [Taxonomy].
///
/// Cheap to copy; gives access to name, rank, parent and children.
#[derive(Clone, Copy)]
pub struct TaxonRef<'a> {
    taxonomy: &'a Taxonomy,
    index: TaxonId,
}

impl<'a> TaxonRef<'a> {
    fn entry(&self) -> &'a TaxonEntry {
        &self.taxonomy.taxa[self.index]
    }

    /// Returns the index of this taxon in its taxonomy.
    pub fn id(&self) -> TaxonId {
        self.index
    }

    /// Returns the name of this taxon.
    pub fn name(&self) -> &'a str {
        &self.entry().name
    }

    /// Returns the rank name of this taxon, if set.
    pub fn rank(&self) -> Option<&'a str> {
        self.entry().rank.as_deref()
    }

    /// Returns the parent taxon, or `None` for a top-level taxon.
    pub fn parent(&self) -> Option<TaxonRef<'a>> {
        self.entry().parent.map(|index| TaxonRef { taxonomy: self.taxonomy, index })
    }

    /// Returns an iterator over the children of this taxon, in insertion order.
    pub fn children(self) -> impl Iterator<Item = TaxonRef<'a>> {
        let taxonomy = self.taxonomy;
        self.entry().children.iter().map(move |&index| TaxonRef { taxonomy, index })
    }

    /// Returns the number of children of this taxon.
    pub fn num_children(&self) -> usize {
        self.entry().children.len()
    }

    /// Returns the number of ancestors of this taxon; 0 for top-level taxa.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.entry().parent;
        while let Some(index) = current {
            depth += 1;
            current = self.taxonomy.taxa[index].parent;
        }
        depth
    }

    /// Returns `true` if this taxon has no parent.
    pub fn is_top_level(&self) -> bool {
        self.entry().parent.is_none()
    }
}

impl PartialEq for TaxonRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.taxonomy, other.taxonomy) && self.index == other.index
    }
}

impl Eq for TaxonRef<'_> {}

impl fmt::Debug for TaxonRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaxonRef")
            .field("id", &self.index)
            .field("name", &self.name())
            .finish()
    }
}

impl TaxonNode for TaxonRef<'_> {
    fn name(&self) -> &str {
        TaxonRef::name(self)
    }

    fn parent(&self) -> Option<Self> {
        TaxonRef::parent(self)
    }
}
