use super::ContactStore;
use crate::book::AddressBook;
use crate::error::{Result, RolodexError};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ContactStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RolodexError::Io)?;
        if content.trim().is_empty() {
            return Ok(AddressBook::new());
        }
        let book = serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RolodexError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(book).map_err(RolodexError::Serialization)?;

        // Write a sibling temp file first, then rename over the target, so a
        // crash mid-write cannot clobber the previous successful save.
        let temp = self.temp_path();
        fs::write(&temp, content).map_err(RolodexError::Io)?;
        fs::rename(&temp, &self.path).map_err(RolodexError::Io)?;
        Ok(())
    }
}
