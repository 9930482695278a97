//! End-to-end parses through `SpcParser` with a fixture decoder.

mod support;

use pretty_assertions::assert_eq;
use raman_graph_ir::{Datatype, Graph, GraphCollectorSink, NTriplesSink, Term};
use raman_spc::{
    AttributeList, AttributeValue, BuilderKind, SpcConfig, SpcDecoder, SpcError, SpcParser,
};
use raman_vocab::{dcat, invivo, rdf};
use std::sync::Arc;
use support::{
    assert_reachable, dir_entries, fixture_tree, parser, FixtureDecoder, BASE, FILE_NAME,
};

fn root() -> Term {
    Term::iri(BASE)
}

fn double(value: &str) -> Term {
    Term::typed(value, Datatype::xsd_double())
}

fn collect(kind: BuilderKind, tree: AttributeList) -> (Graph, raman_spc::ParseReport) {
    let decoder = FixtureDecoder::tree(tree);
    let (parser, _staging) = parser(&decoder, kind);
    let mut sink = GraphCollectorSink::new();
    let report = parser
        .parse(&b"raw spc bytes"[..], BASE, &mut sink)
        .expect("parse succeeds");
    (sink.finish(), report)
}

#[test]
fn compact_graph_for_reference_file() {
    let (graph, report) = collect(BuilderKind::Compact, fixture_tree());

    assert_eq!(report.root, BASE);
    assert_eq!(report.file_name, FILE_NAME);
    assert!(report.tree_emitted);
    assert_eq!(report.attributes, 5);
    assert_eq!(report.properties, 12);
    assert_eq!(report.filename_facts, 4);
    assert!(report.skipped.is_empty());
    assert_eq!(graph.len(), 22);

    let root = root();
    let types: Vec<_> = graph.objects(&root, rdf::TYPE).cloned().collect();
    assert_eq!(
        types,
        invivo::ROOT_CLASSES.iter().map(Term::iri).collect::<Vec<_>>()
    );
    assert_eq!(
        graph.object(&root, dcat::MEDIA_TYPE),
        Some(&Term::string("application/x-pkcs7-certificates"))
    );

    let get = |local: &str| graph.object(&root, &invivo::iri(local)).cloned();
    assert_eq!(get("wavelength"), Some(Term::string("[400.0, 401.25, 402.5]")));
    assert_eq!(get("zMin"), Some(double("-2.0")));
    assert_eq!(get("zMax"), Some(double("1.5")));
    assert_eq!(get("fexper"), Some(double("11.0")));
    assert_eq!(get("fres"), Some(double("NaN")));
    assert_eq!(get("fcmnt"), Some(Term::string("NULL")));
    assert_eq!(get(".wavelength"), Some(Term::string("[Raman shift, cm-1]")));
    assert_eq!(
        get("date"),
        Some(Term::typed("2015-02-23T01:17:00Z", Datatype::xsd_date_time()))
    );
    assert_eq!(get("user"), Some(Term::string("bob")));
    assert_eq!(get("exposure"), Some(Term::string("10")));
    assert_eq!(get("volunteerid"), Some(Term::string("V12")));
    assert_eq!(get("dayorder"), Some(Term::string("J1")));
    assert_eq!(get("skinspecification"), Some(Term::string("Temoin")));
    assert_eq!(get("measurementnumber"), Some(Term::string("m3")));
    assert_eq!(get("hyperspec"), None);

    // `spc` is read as `intensity`, both for the data and its label.
    let intensity: Vec<_> = graph
        .objects(&root, &invivo::iri("intensity"))
        .cloned()
        .collect();
    assert_eq!(
        intensity,
        vec![Term::string("[98.0, 120.5, 133.75]"), Term::string("I / a.u.")]
    );
    assert_eq!(graph.objects(&root, &invivo::iri("spc")).count(), 0);

    assert_eq!(graph.objects(&root, &invivo::iri("filename")).count(), 2);
    assert_reachable(&graph, &root);
}

#[test]
fn verbose_graph_for_reference_file() {
    let (graph, report) = collect(BuilderKind::Verbose, fixture_tree());

    assert_eq!(report.properties, 12);
    assert_eq!(graph.len(), 93);
    assert_reachable(&graph, &root());

    // Every property node carries a name and a description.
    let nodes: Vec<Term> = graph
        .about(&root())
        .map(|t| t.o.clone())
        .filter(Term::is_blank)
        .collect();
    assert_eq!(nodes.len(), 1 + 1 + 12 + 4);
    for node in &nodes {
        assert_eq!(graph.objects(node, invivo::NAME).count(), 1, "{node}");
        assert_eq!(graph.objects(node, invivo::DESCRIPTION).count(), 1, "{node}");
    }

    let z = graph
        .objects(&root(), &invivo::iri("z"))
        .next()
        .expect("z is linked from the root");
    assert_eq!(graph.object(z, invivo::MIN), Some(&double("-2.0")));
    assert_eq!(graph.object(z, invivo::MAX), Some(&double("1.5")));
    assert_eq!(
        graph.object(z, rdf::TYPE),
        Some(&Term::iri(invivo::iri("z")))
    );
}

#[test]
fn staged_copy_is_removed_after_parse() {
    let decoder = FixtureDecoder::tree(fixture_tree());
    let (parser, staging) = parser(&decoder, BuilderKind::Compact);
    let mut sink = GraphCollectorSink::new();
    parser
        .parse(&b"raw spc bytes"[..], BASE, &mut sink)
        .expect("parse succeeds");

    let calls = decoder.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].path.starts_with(staging.path()));
    assert!(calls[0].path.ends_with(FILE_NAME));
    assert_eq!(calls[0].bytes.as_deref(), Some(&b"raw spc bytes"[..]));
    assert!(calls[0].options.hdr2data && calls[0].options.log2data);

    assert!(!calls[0].path.exists());
    assert_eq!(dir_entries(staging.path()), 0);
}

#[test]
fn decoder_failure_leaves_file_level_statements() {
    let decoder = FixtureDecoder::failing();
    let (parser, staging) = parser(&decoder, BuilderKind::Compact);
    let mut sink = GraphCollectorSink::new();
    let report = parser
        .parse(&b"not spc"[..], BASE, &mut sink)
        .expect("decoder failures are not fatal");

    assert!(!report.tree_emitted);
    assert_eq!(report.properties, 0);
    assert_eq!(report.filename_facts, 4);

    let graph = sink.finish();
    assert_eq!(graph.len(), 3 + 1 + 1 + 4);
    assert_eq!(
        graph.object(&root(), &invivo::iri("filename")),
        Some(&Term::string(FILE_NAME))
    );
    assert_eq!(dir_entries(staging.path()), 0);
}

#[test]
fn invalid_base_never_reaches_the_decoder() {
    let decoder = FixtureDecoder::tree(fixture_tree());
    let (parser, staging) = parser(&decoder, BuilderKind::Compact);
    let mut sink = GraphCollectorSink::new();

    for base in [
        "",
        "   ",
        "http://host/data/a.spc",
        "http://host/resource/",
        "http://host/resource/a/b.spc",
    ] {
        let err = parser
            .parse(&b"raw"[..], base, &mut sink)
            .expect_err("invalid base");
        assert!(matches!(err, SpcError::InvalidInput(_)), "{base:?}: {err}");
    }

    assert!(decoder.calls().is_empty());
    assert!(sink.graph().is_empty());
    assert_eq!(dir_entries(staging.path()), 0);
}

#[test]
fn unusable_staging_dir_fails_the_parse() {
    let decoder = FixtureDecoder::tree(fixture_tree());
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"regular file").unwrap();

    let mut config = SpcConfig::default();
    config.staging.dir = Some(blocker.join("staging"));
    let shared: Arc<dyn SpcDecoder> = decoder.clone();
    let parser = SpcParser::with_decoder(config, shared);

    let mut sink = GraphCollectorSink::new();
    let err = parser
        .parse(&b"raw spc bytes"[..], BASE, &mut sink)
        .expect_err("staging under a regular file fails");
    match err {
        SpcError::StagingIo { path, .. } => assert!(path.starts_with(&blocker), "{path:?}"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(decoder.calls().is_empty());
    assert!(sink.graph().is_empty());
}

#[test]
fn malformed_date_skips_only_that_property() {
    let tree = AttributeList::new()
        .with(
            "acq..time..s.",
            AttributeValue::strings(["DATE=2015-02-23 13:17\r\nUSER=bob"]),
        )
        .with("fexper", AttributeValue::doubles(vec![1.0]));
    let (graph, report) = collect(BuilderKind::Compact, tree);

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].key, "acq..time..s.");
    assert!(matches!(report.skipped[0].error, SpcError::DateFormat { .. }));
    assert_eq!(report.properties, 2);

    let root = root();
    assert_eq!(graph.object(&root, &invivo::iri("date")), None);
    assert_eq!(graph.object(&root, &invivo::iri("user")), Some(&Term::string("bob")));
    assert_eq!(graph.object(&root, &invivo::iri("fexper")), Some(&double("1.0")));
}

#[test]
fn repeated_parses_produce_the_same_graph() {
    let (mut first, _) = collect(BuilderKind::Compact, fixture_tree());
    let (mut second, _) = collect(BuilderKind::Compact, fixture_tree());
    first.sort();
    second.sort();
    assert_eq!(first.into_triples(), second.into_triples());
}

#[test]
fn streaming_sink_matches_collected_graph() {
    let (graph, _) = collect(BuilderKind::Compact, fixture_tree());

    let decoder = FixtureDecoder::tree(fixture_tree());
    let (parser, _staging) = parser(&decoder, BuilderKind::Compact);
    let mut sink = NTriplesSink::new(Vec::new());
    parser
        .parse(&b"raw spc bytes"[..], BASE, &mut sink)
        .expect("parse succeeds");
    assert_eq!(sink.written(), graph.len());

    let out = String::from_utf8(sink.finish().expect("write to memory")).expect("utf-8");
    let expected: String = graph.iter().map(|t| format!("{t}\n")).collect();
    assert_eq!(out, expected);
}

#[test]
fn text_entry_point_extracts_nothing() {
    let decoder = FixtureDecoder::tree(fixture_tree());
    let (parser, _staging) = parser(&decoder, BuilderKind::Compact);

    parser
        .parse_text(&b"DATE=23.02.2015 13:17"[..], BASE)
        .expect("no-op");
    assert!(decoder.calls().is_empty());
    assert!(matches!(
        parser.parse_text(&b""[..], ""),
        Err(SpcError::InvalidInput(_))
    ));
}
