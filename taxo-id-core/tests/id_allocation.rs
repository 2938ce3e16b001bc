//! End-to-end allocation fixtures.
//!
//! Exercises the published fixture corpus: a small four-tier taxonomy run
//! through configurations shaped like each production namespace. The bases
//! here are the ones the corpus identifiers were recorded against, which
//! predate the current production base offsets.

use taxo_id_core::{
    Annotation, IdAllocator, LabelSet, LayoutSpec, NamespaceConfig, SymbolTable, Taxonomy,
};

fn fixture_symbols() -> SymbolTable {
    SymbolTable::from_pairs([
        ("CLAS", "class"),
        ("SUBC", "subclass"),
        ("SUPT", "supertype"),
        ("CLUS", "cluster"),
    ])
}

fn fixture_taxonomy() -> Taxonomy {
    Taxonomy {
        labelsets: vec![
            LabelSet {
                name: "class".to_string(),
                rank: Some(3),
            },
            LabelSet {
                name: "subclass".to_string(),
                rank: Some(2),
            },
            LabelSet {
                name: "supertype".to_string(),
                rank: Some(1),
            },
            LabelSet {
                name: "cluster".to_string(),
                rank: Some(0),
            },
        ],
        annotations: [
            ("class", "CS20230722_CLAS_01"),
            ("subclass", "CS20230722_SUBC_001"),
            ("subclass", "CS20230722_SUBC_002"),
            ("supertype", "CS20230722_SUPT_0001"),
            ("supertype", "CS20230722_SUPT_0002"),
            ("supertype", "CS20230722_SUPT_0003"),
            ("cluster", "CS20230722_CLUS_0001"),
            ("cluster", "CS20230722_CLUS_0002"),
            ("cluster", "CS20230722_CLUS_0003"),
            ("cluster", "CS20230722_CLUS_0004"),
            ("cluster", "CS20230722_CLUS_0005"),
        ]
        .iter()
        .map(|(labelset, accession)| Annotation {
            cell_set_accession: accession.to_string(),
            labelset: labelset.to_string(),
        })
        .collect(),
    }
}

fn cl_style() -> NamespaceConfig {
    NamespaceConfig {
        name: "CL".to_string(),
        iri_base: "http://purl.obolibrary.org/obo/CL_".to_string(),
        curie_prefix: "CL:".to_string(),
        prefixes: vec!["CL:".to_string(), "CL_".to_string()],
        base: 100_200,
        spare_factor: 1.15,
        granularity: 1,
        layout: LayoutSpec::ClassesOnly,
        symbols: fixture_symbols(),
    }
}

fn clm_style() -> NamespaceConfig {
    NamespaceConfig {
        name: "CLM".to_string(),
        iri_base: "http://purl.obolibrary.org/obo/CLM_".to_string(),
        curie_prefix: "CLM:".to_string(),
        prefixes: vec!["CLM:".to_string(), "CLM_".to_string()],
        base: 5_000_000,
        spare_factor: 1.1,
        granularity: 1,
        layout: LayoutSpec::MarkerPrimary { nsf_gap: 10 },
        symbols: fixture_symbols(),
    }
}

fn pcl_style() -> NamespaceConfig {
    NamespaceConfig {
        name: "PCL".to_string(),
        iri_base: "http://purl.obolibrary.org/obo/PCL_".to_string(),
        curie_prefix: "PCL:".to_string(),
        prefixes: vec!["PCL:".to_string(), "PCL_".to_string(), "PCL_INDV:".to_string()],
        base: 110_000,
        spare_factor: 1.5,
        granularity: 1,
        layout: LayoutSpec::Full { dataset_slots: 50 },
        symbols: fixture_symbols(),
    }
}

#[test]
fn cl_corpus_identifiers() {
    let allocator = IdAllocator::new(cl_style(), &fixture_taxonomy()).unwrap();

    assert_eq!(allocator.class_id("CS20230722_CLAS_01").unwrap(), "0100201");
    assert_eq!(allocator.class_id("CS20230722_SUBC_002").unwrap(), "0100212");
    assert_eq!(allocator.class_id("CS20230722_SUPT_0003").unwrap(), "0100223");
    assert_eq!(allocator.class_id("CS20230722_CLUS_0004").unwrap(), "0100234");
}

#[test]
fn pcl_corpus_identifiers() {
    let allocator = IdAllocator::new(pcl_style(), &fixture_taxonomy()).unwrap();

    assert_eq!(allocator.class_id("CS20230722_CLAS_01").unwrap(), "0110001");
    assert_eq!(allocator.class_id("CS20230722_SUBC_002").unwrap(), "0110012");
    assert_eq!(allocator.class_id("CS20230722_SUPT_0003").unwrap(), "0110023");
    assert_eq!(allocator.class_id("CS20230722_CLUS_0004").unwrap(), "0110034");

    assert_eq!(
        allocator.marker_gene_set_id("CS20230722_SUBC_002").unwrap(),
        "0110112"
    );
    assert_eq!(
        allocator.nsf_marker_gene_set_id("CS20230722_SUBC_002").unwrap(),
        "0110132"
    );
    assert_eq!(
        allocator.ws_marker_gene_set_id("CS20230722_SUBC_002").unwrap(),
        "0110152"
    );
    assert_eq!(
        allocator
            .evidence_marker_gene_set_id("CS20230722_SUBC_002")
            .unwrap(),
        "0110172"
    );
}

#[test]
fn clm_corpus_identifiers() {
    let allocator = IdAllocator::new(clm_style(), &fixture_taxonomy()).unwrap();

    assert_eq!(
        allocator.marker_gene_set_id("CS20230722_SUBC_002").unwrap(),
        "5000012"
    );
    assert_eq!(
        allocator.nsf_marker_gene_set_id("CS20230722_SUBC_002").unwrap(),
        "5000062"
    );
    assert_eq!(
        allocator.ws_marker_gene_set_id("CS20230722_SUBC_002").unwrap(),
        "5000082"
    );
    assert_eq!(
        allocator
            .evidence_marker_gene_set_id("CS20230722_SUBC_002")
            .unwrap(),
        "5000102"
    );
}

#[test]
fn construction_is_deterministic() {
    let taxonomy = fixture_taxonomy();
    let first = IdAllocator::new(pcl_style(), &taxonomy).unwrap();
    let second = IdAllocator::new(pcl_style(), &taxonomy).unwrap();

    assert_eq!(first.layout(), second.layout());
    for annotation in &taxonomy.annotations {
        let accession = annotation.cell_set_accession.as_str();
        assert_eq!(
            first.class_id(accession).unwrap(),
            second.class_id(accession).unwrap()
        );
        assert_eq!(
            first.marker_gene_set_id(accession).unwrap(),
            second.marker_gene_set_id(accession).unwrap()
        );
    }
}

#[test]
fn derived_ranges_are_strictly_increasing() {
    let allocator = IdAllocator::new(pcl_style(), &fixture_taxonomy()).unwrap();
    let layout = allocator.layout();

    let bases = [
        layout.dataset_base.unwrap(),
        layout.marker_base.unwrap(),
        layout.nsf_base.unwrap(),
        layout.ws_base.unwrap(),
        layout.evidence_base.unwrap(),
    ];
    for pair in bases.windows(2) {
        assert!(pair[0] < pair[1], "{} not below {}", pair[0], pair[1]);
    }
    assert!(layout.first_free < bases[0]);
}

#[test]
fn growth_within_spare_capacity_keeps_published_ids() {
    let before = IdAllocator::new(pcl_style(), &fixture_taxonomy()).unwrap();

    let mut grown = fixture_taxonomy();
    grown.annotations.push(Annotation {
        cell_set_accession: "CS20230722_SUBC_003".to_string(),
        labelset: "subclass".to_string(),
    });
    let after = IdAllocator::new(pcl_style(), &grown).unwrap();

    // every identifier published before the growth is unchanged
    for annotation in &fixture_taxonomy().annotations {
        let accession = annotation.cell_set_accession.as_str();
        assert_eq!(
            before.class_id(accession).unwrap(),
            after.class_id(accession).unwrap()
        );
    }
    // and the new node lands inside the subclass range, above its siblings
    assert_eq!(after.class_id("CS20230722_SUBC_003").unwrap(), "0110013");
}

#[test]
fn yaml_and_json_summaries_allocate_identically() {
    let json = r#"{
        "labelsets": [
            {"name": "class", "rank": 1},
            {"name": "cluster", "rank": 0}
        ],
        "annotations": [
            {"cell_set_accession": "CS20230722_CLAS_01", "labelset": "class"},
            {"cell_set_accession": "CS20230722_CLUS_0001", "labelset": "cluster"}
        ]
    }"#;
    let yaml = "
labelsets:
  - name: class
    rank: 1
  - name: cluster
    rank: 0
annotations:
  - cell_set_accession: CS20230722_CLAS_01
    labelset: class
  - cell_set_accession: CS20230722_CLUS_0001
    labelset: cluster
";
    let from_json =
        IdAllocator::new(pcl_style(), &Taxonomy::from_json_str(json).unwrap()).unwrap();
    let from_yaml =
        IdAllocator::new(pcl_style(), &Taxonomy::from_yaml_str(yaml).unwrap()).unwrap();

    assert_eq!(from_json.layout(), from_yaml.layout());
    assert_eq!(
        from_json.class_id("CS20230722_CLAS_01").unwrap(),
        from_yaml.class_id("CS20230722_CLAS_01").unwrap()
    );
}

#[test]
fn duplicate_ranks_fail_construction() {
    let mut taxonomy = fixture_taxonomy();
    taxonomy.labelsets.push(LabelSet {
        name: "shadow".to_string(),
        rank: Some(2),
    });
    assert!(IdAllocator::new(pcl_style(), &taxonomy).is_err());
}
