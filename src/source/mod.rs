//! Asset sources for the games
//!
//! The engines only see these traits; the filesystem implementations are
//! what the binary wires up, the in-memory ones back tests and demos.

mod fs;
mod memory;

use crate::error::GameResult;
use crate::types::ChameleonCard;
use async_trait::async_trait;
use std::path::PathBuf;

pub use fs::{FileCardSource, FsMediaStore};
pub use memory::{StaticCardSource, StaticMediaStore};

/// Topic folders and the media items inside them
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Names of all topics
    async fn list_topics(&self) -> GameResult<Vec<String>>;

    /// Items belonging to `topic`
    async fn list_items(&self, topic: &str) -> GameResult<Vec<PathBuf>>;
}

/// The full chameleon card catalogue
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn load_cards(&self) -> GameResult<Vec<ChameleonCard>>;
}

/// Parse `topic, word1, word2, ...` lines
///
/// Fields are trimmed. Blank lines, lines with an empty topic and empty
/// word fields are skipped.
pub fn parse_cards(text: &str) -> Vec<ChameleonCard> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split(',').map(str::trim);
            let topic = fields.next().filter(|t| !t.is_empty())?;
            let words = fields
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();

            Some(ChameleonCard {
                topic: topic.to_string(),
                words,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cards_trims_fields() {
        let cards = parse_cards("Space, Moon ,Mars\n  Ocean ,Fish,  Coral\n");

        assert_eq!(
            cards,
            vec![
                ChameleonCard {
                    topic: "Space".to_string(),
                    words: vec!["Moon".to_string(), "Mars".to_string()],
                },
                ChameleonCard {
                    topic: "Ocean".to_string(),
                    words: vec!["Fish".to_string(), "Coral".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_parse_cards_tolerates_blank_lines_and_crlf() {
        let cards = parse_cards("Space,Moon\r\n\r\n   \nOcean,Fish\r\n\n\n");

        let topics: Vec<_> = cards.iter().map(|c| c.topic.as_str()).collect();
        assert_eq!(topics, vec!["Space", "Ocean"]);
        assert_eq!(cards[0].words, vec!["Moon"]);
    }

    #[test]
    fn test_parse_cards_skips_empty_fields() {
        let cards = parse_cards(",Orphan\nFood,Pizza,,Pasta,\nEmpty\n");

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].words, vec!["Pizza", "Pasta"]);
        assert_eq!(cards[1].topic, "Empty");
        assert!(cards[1].words.is_empty());
    }

    #[test]
    fn test_parse_cards_empty_input() {
        assert!(parse_cards("").is_empty());
        assert!(parse_cards("\n\n").is_empty());
    }
}
