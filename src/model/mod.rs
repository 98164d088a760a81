//! Data model for taxonomic classifications.
//!
//! # Taxonomic paths
//! A [Taxopath] is the ordered list of taxon names from a top-level taxon
//! down to one taxon, e.g. `["Aves", "Anseriformes", "Anatidae"]`.
//! It is produced by the [TaxopathParser](crate::parser::TaxopathParser).
//!
//! # Classification tree
//! A [Taxonomy] stores taxa using the arena pattern, referenced by [TaxonId].
//! [TaxonRef] is a borrowed view of a taxon, giving access to its name,
//! parent and children.
//!
//! # Walking ancestry
//! Parser and generator only need the name and the parent of a taxon, which
//! the [TaxonNode] trait abstracts. You can implement [TaxonNode] for your own
//! classification tree to reuse them without adopting [Taxonomy].

pub mod taxon_node;
pub mod taxonomy;
pub mod taxopath;

pub use taxon_node::TaxonNode;
pub use taxonomy::{TaxonId, TaxonRef, Taxonomy};
pub use taxopath::Taxopath;
