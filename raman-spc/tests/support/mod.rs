//! Shared helpers for raman-spc integration tests.

// Not every test crate uses every helper.
#![allow(dead_code)]

use parking_lot::Mutex;
use raman_graph_ir::{Graph, Term};
use raman_spc::{
    AttributeList, BuilderKind, DecodeError, DecodeOptions, SpcConfig, SpcDecoder, SpcParser,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Base identifier used across tests
pub const BASE: &str = "http://host/marmotta/resource/201502203V12_J1_T_m3.spc";

pub const FILE_NAME: &str = "201502203V12_J1_T_m3.spc";

/// Attribute tree shaped like a decoded acquisition file
pub fn fixture_tree() -> AttributeList {
    AttributeList::from_json(include_str!("../fixtures/acquisition.json"))
        .expect("fixture JSON is a valid attribute tree")
}

/// What the decoder saw during one call
#[derive(Debug, Clone)]
pub struct DecodeCall {
    pub path: PathBuf,
    pub bytes: Option<Vec<u8>>,
    pub options: DecodeOptions,
}

enum Outcome {
    Tree(AttributeList),
    Fail,
}

/// Decoder returning a fixed tree (or failing) and recording its calls
pub struct FixtureDecoder {
    outcome: Outcome,
    calls: Mutex<Vec<DecodeCall>>,
}

impl FixtureDecoder {
    pub fn tree(tree: AttributeList) -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::Tree(tree),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::Fail,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<DecodeCall> {
        self.calls.lock().clone()
    }
}

impl SpcDecoder for FixtureDecoder {
    fn decode(&self, path: &Path, options: DecodeOptions) -> Result<AttributeList, DecodeError> {
        self.calls.lock().push(DecodeCall {
            path: path.to_path_buf(),
            bytes: std::fs::read(path).ok(),
            options,
        });
        match &self.outcome {
            Outcome::Tree(tree) => Ok(tree.clone()),
            Outcome::Fail => Err(DecodeError::Engine {
                status: "exit status: 1".to_string(),
                stderr: "Error in read.spc: not an SPC file".to_string(),
            }),
        }
    }
}

/// Parser staging into its own temporary directory
pub fn parser(decoder: &Arc<FixtureDecoder>, kind: BuilderKind) -> (SpcParser, TempDir) {
    let staging = tempfile::tempdir().expect("create staging dir");
    let mut config = SpcConfig::default();
    config.builder = kind;
    config.staging.dir = Some(staging.path().to_path_buf());

    let decoder: Arc<dyn SpcDecoder> = decoder.clone();
    (SpcParser::with_decoder(config, decoder), staging)
}

/// Every statement has the root as subject, or a blank subject that the root
/// links to exactly once.
pub fn assert_reachable(graph: &Graph, root: &Term) {
    let linked: Vec<&Term> = graph
        .about(root)
        .map(|t| &t.o)
        .filter(|o| o.is_blank())
        .collect();
    let unique: HashSet<&Term> = linked.iter().copied().collect();
    assert_eq!(linked.len(), unique.len(), "a node is linked more than once");

    for triple in graph {
        assert!(
            &triple.s == root || unique.contains(&triple.s),
            "orphan statement: {triple}"
        );
    }
}

/// Entries left in a directory
pub fn dir_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}
