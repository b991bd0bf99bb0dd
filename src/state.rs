use crate::config::GameConfig;
use crate::error::GameResult;
use crate::game::{ChameleonEngine, SlideshowEngine, SlideshowOptions};
use crate::protocol::GameEvent;
use crate::source::{CardSource, FileCardSource, FsMediaStore, MediaStore};
use crate::types::EligibilityRule;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

/// Shared application state
///
/// Each engine sits behind its own mutex: calls on one engine run one at a
/// time, while the two games proceed independently.
#[derive(Clone)]
pub struct AppState {
    pub slideshow: Arc<Mutex<SlideshowEngine>>,
    pub chameleon: Arc<Mutex<ChameleonEngine>>,
    /// Broadcast channel for countdown updates
    pub events: broadcast::Sender<GameEvent>,
}

impl AppState {
    /// Build both engines over the given sources and load the topic list
    pub async fn new(
        media: Arc<dyn MediaStore>,
        cards: Arc<dyn CardSource>,
        slideshow_options: SlideshowOptions,
        chameleon_players: EligibilityRule,
        event_buffer: usize,
    ) -> GameResult<Self> {
        let (events, _rx) = broadcast::channel(event_buffer.max(1));

        let mut slideshow = SlideshowEngine::new(media, slideshow_options, events.clone());
        slideshow.initialize().await?;

        let chameleon = ChameleonEngine::new(cards, chameleon_players);

        Ok(Self {
            slideshow: Arc::new(Mutex::new(slideshow)),
            chameleon: Arc::new(Mutex::new(chameleon)),
            events,
        })
    }

    /// Filesystem-backed state as configured by the environment
    pub async fn from_config(config: &GameConfig) -> GameResult<Self> {
        tracing::info!(
            "Loading slideshow topics from {}",
            config.image_dir.display()
        );

        Self::new(
            Arc::new(FsMediaStore::new(&config.image_dir)),
            Arc::new(FileCardSource::new(&config.card_file)),
            SlideshowOptions {
                presenters: config.presenters,
                timer_seconds: config.timer_seconds,
            },
            config.chameleon_players,
            config.event_buffer,
        )
        .await
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::source::{StaticCardSource, StaticMediaStore};

    #[tokio::test]
    async fn test_new_initializes_slideshow() {
        let state = AppState::new(
            Arc::new(StaticMediaStore::new().with_topic("animals", &["a.png"])),
            Arc::new(StaticCardSource::new("Space,Moon\n")),
            SlideshowOptions::default(),
            EligibilityRule::OnlineHuman,
            8,
        )
        .await
        .unwrap();

        let topic = state.slideshow.lock().await.advance_topic().await.unwrap();
        assert_eq!(topic, "animals");
        assert!(state.chameleon.lock().await.current_round().is_none());
    }

    #[tokio::test]
    async fn test_new_fails_without_topics() {
        let result = AppState::new(
            Arc::new(StaticMediaStore::new()),
            Arc::new(StaticCardSource::default()),
            SlideshowOptions::default(),
            EligibilityRule::OnlineHuman,
            8,
        )
        .await;

        assert!(matches!(result, Err(GameError::NoTopics)));
    }

    #[tokio::test]
    async fn test_from_config_reads_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("plants")).unwrap();
        std::fs::write(dir.path().join("plants/c.png"), b"c").unwrap();

        let config = GameConfig {
            image_dir: dir.path().to_path_buf(),
            card_file: dir.path().join("cards.csv"),
            ..Default::default()
        };

        let state = AppState::from_config(&config).await.unwrap();
        let topic = state.slideshow.lock().await.advance_topic().await.unwrap();
        assert_eq!(topic, "plants");
    }
}
