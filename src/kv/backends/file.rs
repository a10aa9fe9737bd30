use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::errors::{Result, TrackerError};
use crate::kv::ByteStore;

static KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid storage key regex"));

/// 文件存储：目录下每个 key 一个文件，写入先落临时文件再 rename
#[derive(Debug, Clone)]
pub struct FileByteStore {
    dir: PathBuf,
}

impl FileByteStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            TrackerError::file_operation(format!(
                "Failed to create storage directory {}: {e}",
                dir.display()
            ))
        })?;
        debug!("FileByteStore opened at {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // key 直接作为文件名，禁止路径分隔符和 ".."
        if !KEY_RE.is_match(key) || key.starts_with('.') {
            return Err(TrackerError::validation(format!(
                "Invalid storage key: '{key}'"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl ByteStore for FileByteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                Err(e.into())
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
