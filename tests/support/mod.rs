#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::rc::Rc;

use benchtop::api::{ApiService, DirStore, FixtureResolver, FixtureStore, Navigator};
use benchtop::{BenchtopError, Result};
use tempfile::TempDir;

/// Readout uid carried by the generated fixture tree.
pub const FIXTURE_UID: &str = "k7x9q2m4p8w1z5r3t6y0u4i8o2a6s0d4f8g2";

/// Build a complete fixture tree in a temp directory: the field mapping,
/// a readout descriptor, and one unique-values file per mapped field in
/// each of the shapes the resolver accepts.
pub fn fixture_tree() -> TempDir {
    let dir = TempDir::new().expect("create fixture tempdir");

    write_fixture(
        &dir,
        "mapping.json",
        r#"{"cell_type":"uid-001.json","supplier":"uid-002.json","screen":"uid-003.json"}"#,
    );
    write_fixture(
        &dir,
        "readouts/1.json",
        &format!(r#"{{"record_count": 10, "uid": "{FIXTURE_UID}"}}"#),
    );
    // Bare array: counts defaulted to zero
    write_fixture(
        &dir,
        "unique/uid-001.json",
        r#"["Neuron","Astrocyte","Microglia"]"#,
    );
    // Counted objects
    write_fixture(
        &dir,
        "unique/uid-002.json",
        r#"[{"value":"acme","count":12},{"value":"initech","count":3}]"#,
    );
    // Hand-enveloped
    write_fixture(
        &dir,
        "unique/uid-003.json",
        r#"{"field":"screen","values":[{"value":"screen_a","count":7}],"total":1,"status":"success"}"#,
    );

    dir
}

/// Write one fixture file under the tree, creating parent directories.
pub fn write_fixture(dir: &TempDir, rel: &str, contents: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(path, contents).expect("write fixture");
}

/// Navigator that records handed-off locators instead of opening them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub opened: Rc<RefCell<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn open(&mut self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Navigator whose hand-off always fails.
#[derive(Debug, Default)]
pub struct FailingNavigator;

impl Navigator for FailingNavigator {
    fn open(&mut self, _url: &str) -> Result<()> {
        Err(std::io::Error::other("no display").into())
    }
}

/// Directory store wrapper that logs every fetch and can inject scripted
/// failures: `failures` maps a relative path to a remaining budget of 503
/// responses served before fetches delegate to the real store again.
pub struct ScriptedStore {
    inner: DirStore,
    pub fetch_log: Rc<RefCell<Vec<String>>>,
    pub failures: Rc<RefCell<HashMap<String, u32>>>,
}

impl ScriptedStore {
    pub fn new(dir: &TempDir) -> Self {
        Self {
            inner: DirStore::new(dir.path()),
            fetch_log: Rc::new(RefCell::new(Vec::new())),
            failures: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl FixtureStore for ScriptedStore {
    fn fetch(&mut self, path: &str) -> Result<String> {
        self.fetch_log.borrow_mut().push(path.to_string());

        if let Some(remaining) = self.failures.borrow_mut().get_mut(path) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(BenchtopError::not_found(path, 503));
            }
        }

        self.inner.fetch(path)
    }
}

/// A service over a scripted store and recording navigator, with the
/// shared handles tests observe and script through.
pub struct TestService {
    pub service: ApiService,
    pub fetch_log: Rc<RefCell<Vec<String>>>,
    pub failures: Rc<RefCell<HashMap<String, u32>>>,
    pub opened: Rc<RefCell<Vec<String>>>,
    pub dir: TempDir,
}

/// [`TestService`] over a fresh [`fixture_tree`].
pub fn test_service() -> TestService {
    test_service_over(fixture_tree())
}

/// [`TestService`] over a caller-prepared fixture tree.
pub fn test_service_over(dir: TempDir) -> TestService {
    let store = ScriptedStore::new(&dir);
    let fetch_log = store.fetch_log.clone();
    let failures = store.failures.clone();

    let navigator = RecordingNavigator::default();
    let opened = navigator.opened.clone();

    let resolver = FixtureResolver::new(Box::new(store)).expect("mapping loads");
    let service = ApiService::new(resolver, Box::new(navigator));

    TestService {
        service,
        fetch_log,
        failures,
        opened,
        dir,
    }
}
