use crate::types::ChannelKind;
use std::path::PathBuf;

/// Result type for game engine operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a round
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("pool is empty")]
    EmptyPool,

    #[error("no topics")]
    NoTopics,

    #[error("no images in topic: {0}")]
    NoImagesInTopic(String),

    #[error("no eligible people in channel")]
    NoEligibleMembers,

    #[error("too few eligible players to start (found {eligible}, need at least 2)")]
    TooFewPlayers { eligible: usize },

    #[error("no cards")]
    NoCardsAvailable,

    #[error("no words in card: {0}")]
    NoWordsInCard(String),

    #[error("game has not started")]
    RoundNotStarted,

    #[error("not a text channel ({0:?})")]
    WrongChannelType(ChannelKind),

    #[error("failed to read {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("action not found: {0}")]
    UnknownAction(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

impl GameError {
    /// Stable error code for host-facing replies
    pub fn code(&self) -> &'static str {
        match self {
            GameError::EmptyPool => "EMPTY_POOL",
            GameError::NoTopics => "NO_TOPICS",
            GameError::NoImagesInTopic(_) => "NO_IMAGES_IN_TOPIC",
            GameError::NoEligibleMembers => "NO_ELIGIBLE_MEMBERS",
            GameError::TooFewPlayers { .. } => "TOO_FEW_PLAYERS",
            GameError::NoCardsAvailable => "NO_CARDS_AVAILABLE",
            GameError::NoWordsInCard(_) => "NO_WORDS_IN_CARD",
            GameError::RoundNotStarted => "ROUND_NOT_STARTED",
            GameError::WrongChannelType(_) => "WRONG_CHANNEL_TYPE",
            GameError::Storage { .. } => "STORAGE",
            GameError::UnknownAction(_) => "UNKNOWN_ACTION",
            GameError::InvalidOption(_) => "INVALID_OPTION",
        }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GameError::Storage {
            path: path.into(),
            source,
        }
    }
}
