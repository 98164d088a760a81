use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use taxopath::parser::TaxopathParser;
use taxopath::writer::TaxopathGenerator;

const TAXONOMY_LINES: &[&str] = &[
    "Bacteria;Proteobacteria;Gammaproteobacteria;Enterobacterales;Enterobacteriaceae;Escherichia;",
    "Bacteria; Firmicutes ; Bacilli ;;Lactobacillaceae;Lactobacillus;",
    "Eukaryota;Opisthokonta;Metazoa;Chordata;Aves;Apterygiformes;;Apteryx;",
    "Archaea;Euryarchaeota;;;Methanobacteriaceae;Methanobrevibacter;",
];

/// Repeats the lines to the size of a typical reference taxonomy file
fn taxonomy_input(num_lines: usize) -> Vec<&'static str> {
    TAXONOMY_LINES.iter().copied().cycle().take(num_lines).collect()
}

fn parse_lines(c: &mut Criterion) {
    let parser = TaxopathParser::new();
    let lines = taxonomy_input(10_000);

    c.bench_function("from_string", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(parser.from_string(line).unwrap());
            }
        });
    });
}

fn generate_lines(c: &mut Criterion) {
    let parser = TaxopathParser::new();
    let generator = TaxopathGenerator::matching(&parser).with_trim_nested_duplicates(true);
    let paths: Vec<_> = taxonomy_input(10_000)
        .into_iter()
        .map(|line| parser.from_string(line).unwrap())
        .collect();

    c.bench_function("from_taxopath", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(generator.from_taxopath(path));
            }
        });
    });
}

criterion_group!(benches, parse_lines, generate_lines);
criterion_main!(benches);
