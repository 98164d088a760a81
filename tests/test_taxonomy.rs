use taxopath::model::{TaxonNode, Taxonomy};

// --- TESTS BUILDING ---
#[test]
fn test_building_taxonomy() {
    let mut taxonomy = Taxonomy::new();
    assert!(taxonomy.is_empty());

    let aves = taxonomy.add_top_level("Aves");
    let passeri = taxonomy.add_child(aves, "Passeriformes");
    let acanthisittidae = taxonomy.add_child(passeri, "Acanthisittidae");
    let rifleman = taxonomy.add_child(acanthisittidae, "Acanthisitta chloris");
    let rock_wren = taxonomy.add_child(acanthisittidae, "Xenicus gilviventris");

    // Counts
    assert_eq!(taxonomy.num_taxa(), 5);
    assert_eq!(taxonomy.top_level().count(), 1);
    assert_eq!(taxonomy.taxon(acanthisittidae).num_children(), 2);

    // Relationships
    let taxon = taxonomy.taxon(rock_wren);
    assert_eq!(taxon.id(), rock_wren);
    assert_eq!(taxon.depth(), 3);
    assert!(!taxon.is_top_level());
    assert_eq!(taxon.parent().unwrap().id(), acanthisittidae);
    assert!(taxonomy.taxon(aves).is_top_level());
    assert!(taxonomy.taxon(aves).parent().is_none());

    // Children in insertion order
    let children: Vec<&str> = taxonomy.taxon(acanthisittidae).children().map(|c| c.name()).collect();
    assert_eq!(children, ["Acanthisitta chloris", "Xenicus gilviventris"]);
    assert_eq!(taxonomy.find_child(acanthisittidae, "Acanthisitta chloris"), Some(rifleman));
    assert_eq!(taxonomy.find_child(acanthisittidae, "Traversia lyalli"), None);
}

#[test]
fn test_several_top_level_taxa() {
    let mut taxonomy = Taxonomy::new();
    let bacteria = taxonomy.add_top_level("Bacteria");
    let archaea = taxonomy.add_top_level("Archaea");
    let again = taxonomy.add_top_level("Bacteria");

    assert_eq!(bacteria, again);
    assert_ne!(bacteria, archaea);
    assert_eq!(taxonomy.find_top_level("Archaea"), Some(archaea));
    assert_eq!(taxonomy.find_top_level("Eukaryota"), None);

    let names: Vec<&str> = taxonomy.top_level().map(|t| t.name()).collect();
    assert_eq!(names, ["Bacteria", "Archaea"]);
}

#[test]
fn test_ranks() {
    let mut taxonomy = Taxonomy::new();
    let aves = taxonomy.add_top_level("Aves");
    let strigops = taxonomy.add_child(aves, "Strigops");
    taxonomy.set_rank(aves, "Class");
    taxonomy.set_rank(strigops, "Genus");

    assert_eq!(taxonomy.taxon(aves).rank(), Some("Class"));
    assert_eq!(taxonomy.taxon(strigops).rank(), Some("Genus"));

    let other = taxonomy.add_child(aves, "Nestor");
    assert_eq!(taxonomy.taxon(other).rank(), None);
}

#[test]
fn test_get_out_of_bounds() {
    let mut taxonomy = Taxonomy::new();
    let aves = taxonomy.add_top_level("Aves");
    assert!(taxonomy.get(aves).is_some());
    assert!(taxonomy.get(aves + 1).is_none());
}

#[test]
#[should_panic]
fn test_taxon_out_of_bounds_panics() {
    let taxonomy = Taxonomy::new();
    taxonomy.taxon(0);
}

#[test]
#[should_panic]
fn test_empty_child_name_panics() {
    let mut taxonomy = Taxonomy::new();
    let aves = taxonomy.add_top_level("Aves");
    taxonomy.add_child(aves, "");
}

// --- TESTS TAXON NODE ---
#[test]
fn test_taxon_node_walks_to_top_level() {
    let mut taxonomy = Taxonomy::new();
    let aves = taxonomy.add_top_level("Aves");
    let charadrii = taxonomy.add_child(aves, "Charadriiformes");
    let wrybill = taxonomy.add_child(charadrii, "Anarhynchus frontalis");

    let mut names = Vec::new();
    let mut current = Some(taxonomy.taxon(wrybill));
    while let Some(taxon) = current {
        names.push(TaxonNode::name(&taxon).to_string());
        current = TaxonNode::parent(&taxon);
    }
    assert_eq!(names, ["Anarhynchus frontalis", "Charadriiformes", "Aves"]);
}
