use crate::error::Result;
use crate::source::traits::MenuSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Menu document on the local file system, read with tokio::fs
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(crate::core::constants::DEFAULT_MENU_PATH)
    }
}

#[async_trait]
impl MenuSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
