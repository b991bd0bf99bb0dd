use super::{parse_cards, CardSource, MediaStore};
use crate::error::{GameError, GameResult};
use crate::types::ChameleonCard;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Media root with one sub-directory per topic
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

enum EntryKind {
    Dir,
    File,
}

/// Sorted, non-hidden entries of `dir` of the given kind
async fn read_entries(dir: &Path, kind: EntryKind) -> GameResult<Vec<(String, PathBuf)>> {
    let mut reader = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| GameError::storage(dir, e))?;

    let mut entries = Vec::new();
    while let Some(entry) = reader
        .next_entry()
        .await
        .map_err(|e| GameError::storage(dir, e))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let file_type = entry
            .file_type()
            .await
            .map_err(|e| GameError::storage(entry.path(), e))?;
        let wanted = match kind {
            EntryKind::Dir => file_type.is_dir(),
            EntryKind::File => file_type.is_file(),
        };
        if wanted {
            entries.push((name, entry.path()));
        }
    }

    entries.sort();
    Ok(entries)
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn list_topics(&self) -> GameResult<Vec<String>> {
        let topics = read_entries(&self.root, EntryKind::Dir).await?;
        Ok(topics.into_iter().map(|(name, _)| name).collect())
    }

    async fn list_items(&self, topic: &str) -> GameResult<Vec<PathBuf>> {
        let items = read_entries(&self.root.join(topic), EntryKind::File).await?;
        Ok(items.into_iter().map(|(_, path)| path).collect())
    }
}

/// Card catalogue stored as a comma-separated text file
#[derive(Debug, Clone)]
pub struct FileCardSource {
    path: PathBuf,
}

impl FileCardSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CardSource for FileCardSource {
    async fn load_cards(&self) -> GameResult<Vec<ChameleonCard>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| GameError::storage(&self.path, e))?;
        Ok(parse_cards(&text))
    }
}
