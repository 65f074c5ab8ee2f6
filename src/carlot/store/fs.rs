use super::{DataStore, DEALERS_FILENAME, SESSION_FILENAME};
use crate::error::{CarlotError, Result};
use crate::model::{DealersDocument, SessionDocument};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dealers_path(&self) -> PathBuf {
        self.root.join(DEALERS_FILENAME)
    }

    pub fn session_path(&self) -> PathBuf {
        self.root.join(SESSION_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CarlotError::Io)?;
        }
        Ok(())
    }

    /// Reads `path`, writing `T::default()` there first if the file is absent.
    fn load_or_create<T>(&self, path: &Path) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        if !path.exists() {
            debug!(path = %path.display(), "creating default document");
            let doc = T::default();
            self.write_document(path, &doc)?;
            return Ok(doc);
        }

        let content = fs::read_to_string(path).map_err(CarlotError::Io)?;
        serde_json::from_str(&content).map_err(|source| CarlotError::CorruptDocument {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_document<T: Serialize>(&self, path: &Path, doc: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(doc).map_err(CarlotError::Serialization)?;

        // Write beside the target and rename over it, so a crash never
        // leaves a half-written document behind.
        let tmp_file = self.root.join(format!(".carlot-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(CarlotError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(CarlotError::Io(e));
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_dealers(&self) -> Result<DealersDocument> {
        let path = self.dealers_path();
        let doc: DealersDocument = self.load_or_create(&path)?;
        debug!(path = %path.display(), dealers = doc.dealers.len(), "loaded dealers");
        Ok(doc)
    }

    fn save_dealers(&mut self, doc: &DealersDocument) -> Result<()> {
        let path = self.dealers_path();
        self.write_document(&path, doc)?;
        debug!(path = %path.display(), dealers = doc.dealers.len(), "saved dealers");
        Ok(())
    }

    fn load_session(&self) -> Result<SessionDocument> {
        let path = self.session_path();
        let doc: SessionDocument = self.load_or_create(&path)?;
        debug!(path = %path.display(), active = doc.is_active(), "loaded session");
        Ok(doc)
    }

    fn save_session(&mut self, doc: &SessionDocument) -> Result<()> {
        let path = self.session_path();
        self.write_document(&path, doc)?;
        debug!(path = %path.display(), active = doc.is_active(), "saved session");
        Ok(())
    }
}
