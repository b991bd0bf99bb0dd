use super::{parse_cards, CardSource, MediaStore};
use crate::error::GameResult;
use crate::types::ChameleonCard;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Fixed topic → items map
#[derive(Debug, Clone, Default)]
pub struct StaticMediaStore {
    topics: BTreeMap<String, Vec<PathBuf>>,
}

impl StaticMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a topic; its items are named `topic/item`
    pub fn with_topic(mut self, topic: &str, items: &[&str]) -> Self {
        let paths = items
            .iter()
            .map(|item| PathBuf::from(topic).join(item))
            .collect();
        self.topics.insert(topic.to_string(), paths);
        self
    }
}

#[async_trait]
impl MediaStore for StaticMediaStore {
    async fn list_topics(&self) -> GameResult<Vec<String>> {
        Ok(self.topics.keys().cloned().collect())
    }

    async fn list_items(&self, topic: &str) -> GameResult<Vec<PathBuf>> {
        Ok(self.topics.get(topic).cloned().unwrap_or_default())
    }
}

/// Card catalogue held in memory, in the card file format
#[derive(Debug, Clone, Default)]
pub struct StaticCardSource {
    text: String,
}

impl StaticCardSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl CardSource for StaticCardSource {
    async fn load_cards(&self) -> GameResult<Vec<ChameleonCard>> {
        Ok(parse_cards(&self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_media_store() {
        let store = StaticMediaStore::new()
            .with_topic("plants", &["c.png"])
            .with_topic("animals", &["a.png", "b.png"]);

        assert_eq!(store.list_topics().await.unwrap(), vec!["animals", "plants"]);
        assert_eq!(
            store.list_items("plants").await.unwrap(),
            vec![PathBuf::from("plants/c.png")]
        );
        assert!(store.list_items("rocks").await.unwrap().is_empty());
    }
}
