//! Runtime configuration loaded from environment variables

use crate::game::slideshow::{DEFAULT_TIMER_SECONDS, MAX_TIMER_SECONDS};
use crate::types::EligibilityRule;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Slideshow media root, one sub-directory per topic
    pub image_dir: PathBuf,
    /// Chameleon card file
    pub card_file: PathBuf,
    /// Initial slide countdown (0 disables)
    pub timer_seconds: u32,
    /// Who may present a slide
    pub presenters: EligibilityRule,
    /// Who may be dealt into a chameleon round
    pub chameleon_players: EligibilityRule,
    /// Capacity of the countdown event channel
    pub event_buffer: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("images"),
            card_file: PathBuf::from("cards.csv"),
            timer_seconds: DEFAULT_TIMER_SECONDS,
            presenters: EligibilityRule::OnlineHuman,
            chameleon_players: EligibilityRule::OnlineHuman,
            event_buffer: 100,
        }
    }
}

/// Trimmed, non-empty value of an environment variable
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn parse_rule(key: &str, value: &str) -> Option<EligibilityRule> {
    match value.to_ascii_lowercase().as_str() {
        "online" => Some(EligibilityRule::OnlineHuman),
        "any" => Some(EligibilityRule::AnyHuman),
        _ => {
            tracing::warn!(
                "{} must be 'online' or 'any' (got '{}'), using default",
                key,
                value
            );
            None
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!("{} is not a valid number ('{}'), using default", key, value);
            None
        }
    }
}

impl GameConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let image_dir = env_value("SLIDE_GAME_IMAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.image_dir);

        let card_file = env_value("CHAMELEON_GAME_CARD_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.card_file);

        let timer_seconds = env_value("SLIDE_TIMER_SECONDS")
            .and_then(|v| parse_number::<u32>("SLIDE_TIMER_SECONDS", &v))
            .map(|s| s.min(MAX_TIMER_SECONDS))
            .unwrap_or(defaults.timer_seconds);

        let presenters = env_value("SLIDE_PRESENTERS")
            .and_then(|v| parse_rule("SLIDE_PRESENTERS", &v))
            .unwrap_or(defaults.presenters);

        let chameleon_players = env_value("CHAMELEON_PLAYERS")
            .and_then(|v| parse_rule("CHAMELEON_PLAYERS", &v))
            .unwrap_or(defaults.chameleon_players);

        let event_buffer = env_value("EVENT_BUFFER")
            .and_then(|v| parse_number::<usize>("EVENT_BUFFER", &v))
            .filter(|n| *n > 0)
            .unwrap_or(defaults.event_buffer);

        Self {
            image_dir,
            card_file,
            timer_seconds,
            presenters,
            chameleon_players,
            event_buffer,
        }
    }
}
