//! Lookup of documents by VLNV

use std::{collections::HashMap, io, path::Path, sync::Arc};

use log::{debug, warn};

use crate::{
    api::read_document,
    error::Error,
    model::{Document, Vlnv},
};

/// Finds documents referenced by VLNV, e.g. the bus definition another one extends
pub trait DocumentResolver {
    fn resolve(&self, vlnv: &Vlnv) -> Option<Arc<Document>>;
}

/// Resolver that knows no documents
impl DocumentResolver for () {
    fn resolve(&self, _vlnv: &Vlnv) -> Option<Arc<Document>> {
        None
    }
}

/// In-memory collection of documents keyed by VLNV
#[derive(Debug, Default)]
pub struct MemoryLibrary {
    documents: HashMap<Vlnv, Arc<Document>>,
}

impl MemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `document`, replacing and returning a previous document with the same VLNV
    pub fn insert(&mut self, document: Document) -> Option<Arc<Document>> {
        self.documents
            .insert(document.vlnv().clone(), Arc::new(document))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in VLNV order
    pub fn documents(&self) -> Vec<&Arc<Document>> {
        let mut documents = self.documents.values().collect::<Vec<_>>();
        documents.sort_by(|a, b| a.vlnv().cmp(b.vlnv()));
        documents
    }

    /// Read every `.xml` file under `dir` recursively and add the IP-XACT documents among them
    ///
    /// Files that are not IP-XACT documents of a supported kind are skipped with a warning.
    /// Returns the number of documents added.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, Error> {
        let mut count = 0;
        for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "xml") {
                continue;
            }

            match read_document(path) {
                Ok(document) => {
                    debug!("library: {} from {}", document.vlnv(), path.display());
                    if let Some(previous) = self.insert(document) {
                        warn!(
                            "{} is defined more than once, using {}",
                            previous.vlnv(),
                            path.display()
                        );
                    }
                    count += 1;
                }
                Err(Error::Io(err)) => return Err(Error::Io(err)),
                Err(err) => warn!("skipping {}: {err}", path.display()),
            }
        }
        Ok(count)
    }
}

impl DocumentResolver for MemoryLibrary {
    fn resolve(&self, vlnv: &Vlnv) -> Option<Arc<Document>> {
        self.documents.get(vlnv).cloned()
    }
}

#[test]
fn memory_library_resolves_by_vlnv() {
    use crate::model::BusDefinition;

    let vlnv = Vlnv::new("tuni.fi", "interface", "apb", "1.0");
    let mut library = MemoryLibrary::new();
    assert!(library.is_empty());
    assert!(library
        .insert(BusDefinition::new(vlnv.clone()).into())
        .is_none());
    assert!(library
        .insert(BusDefinition::new(vlnv.clone()).into())
        .is_some());

    assert_eq!(library.len(), 1);
    assert!(library.resolve(&vlnv).is_some());
    assert!(library
        .resolve(&Vlnv::new("tuni.fi", "interface", "apb", "2.0"))
        .is_none());
    assert!(().resolve(&vlnv).is_none());
}
