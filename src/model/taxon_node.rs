//! Trait for reading the ancestry of a taxon in a classification tree.
//!
//! The [`TaxonNode`] trait decouples the
//! [TaxopathParser](crate::parser::TaxopathParser) and the
//! [TaxopathGenerator](crate::writer::TaxopathGenerator) from a concrete
//! classification tree. They only need the name of a taxon and access to its
//! parent, so any tree offering these two can be used.
//!
//! # Built-in implementations
//! * [`TaxonRef`](crate::model::TaxonRef) - Borrowed view of a taxon stored in a
//!   [`Taxonomy`](crate::model::Taxonomy)
//!
//! # Custom implementations
//! Implement [`TaxonNode`] on a lightweight handle (a reference or an index
//! paired with its tree) of your own tree type, so that `parent` can cheaply
//! return another handle.

// =#========================================================================#=
// TAXON NODE (trait)
// =#========================================================================T=
/// Read-only view of a taxon and its parent.
///
/// # Contract
/// * [`name`](Self::name) is never empty.
/// * Following [`parent`](Self::parent) repeatedly terminates at a taxon
///   without parent, i.e. the parent links do not form a cycle.
pub trait TaxonNode: Sized {
    /// Returns the name of this taxon.
    fn name(&self) -> &str;

    /// Returns the parent taxon, or `None` if this is a top-level taxon.
    fn parent(&self) -> Option<Self>;
}
