use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::debug;

use crate::errors::ServiceError;

/// A JSON document on disk holding one serialisable value.
#[derive(Clone, Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Read the document, or write `T::default()` when the file is missing.
    /// The parent directory must already exist.
    pub async fn load_or_init<T>(&self) -> Result<T, ServiceError>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(T::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = T::default();
                self.save(&empty).await?;
                debug!(path = %self.path.display(), "created empty store file");
                Ok(empty)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save<T: Serialize>(&self, value: &T) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(value)?;
        fs::write(&self.path, data).await?;
        Ok(())
    }
}
