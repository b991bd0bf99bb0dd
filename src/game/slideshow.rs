//! Slideshow round engine
//!
//! Cycles through topic folders and their images and picks a presenter for
//! every slide. Both presenter variants (any human / online humans only) are
//! the same engine with a different `EligibilityRule`.

use super::countdown::Countdown;
use super::cycle::ShuffledCycle;
use super::rotation::{compute_eligible, Rotation};
use crate::error::{GameError, GameResult};
use crate::protocol::GameEvent;
use crate::source::MediaStore;
use crate::types::{ChannelSnapshot, EligibilityRule, SlideRound};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;

pub const DEFAULT_TIMER_SECONDS: u32 = 30;
pub const MAX_TIMER_SECONDS: u32 = 300;

#[derive(Debug, Clone, Copy)]
pub struct SlideshowOptions {
    pub presenters: EligibilityRule,
    pub timer_seconds: u32,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            presenters: EligibilityRule::OnlineHuman,
            timer_seconds: DEFAULT_TIMER_SECONDS,
        }
    }
}

pub struct SlideshowEngine {
    store: Arc<dyn MediaStore>,
    presenters: EligibilityRule,
    rng: StdRng,
    topics: ShuffledCycle<String>,
    /// Pool for the current topic; None until a topic has images
    images: Option<ShuffledCycle<PathBuf>>,
    topic: Option<String>,
    rotation: Rotation,
    round: Option<SlideRound>,
    timer_seconds: u32,
    countdown: Countdown,
    events: broadcast::Sender<GameEvent>,
}

impl SlideshowEngine {
    pub fn new(
        store: Arc<dyn MediaStore>,
        options: SlideshowOptions,
        events: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            store,
            presenters: options.presenters,
            rng: StdRng::from_os_rng(),
            topics: ShuffledCycle::new(),
            images: None,
            topic: None,
            rotation: Rotation::new(),
            round: None,
            timer_seconds: options.timer_seconds.min(MAX_TIMER_SECONDS),
            countdown: Countdown::new(),
            events,
        }
    }

    /// Replace the random source, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Load the topic list and forget all round state
    pub async fn initialize(&mut self) -> GameResult<usize> {
        self.countdown.cancel();

        let topics = self.store.list_topics().await?;
        if topics.is_empty() {
            return Err(GameError::NoTopics);
        }

        let count = topics.len();
        self.topics.reset(topics, &mut self.rng)?;
        self.images = None;
        self.topic = None;
        self.round = None;
        self.rotation.clear();

        tracing::info!("Slideshow initialized with {} topics", count);
        Ok(count)
    }

    /// Move to the next topic and load its images
    ///
    /// The topic is consumed before its folder is read: if the folder has
    /// no images the engine stays on the new, image-less topic and the
    /// next `advance_image` moves on again.
    pub async fn advance_topic(&mut self) -> GameResult<String> {
        self.countdown.cancel();

        let topic = self.topics.next(&mut self.rng)?.clone();
        self.topic = Some(topic.clone());
        self.images = None;
        self.round = None;

        let items = self.store.list_items(&topic).await?;
        if items.is_empty() {
            tracing::warn!("Topic {} has no images", topic);
            return Err(GameError::NoImagesInTopic(topic));
        }

        let mut pool = ShuffledCycle::new();
        pool.reset(items, &mut self.rng)?;
        tracing::info!("Slideshow topic is now {} ({} images)", topic, pool.len());
        self.images = Some(pool);

        Ok(topic)
    }

    /// Show the next image and pick who presents it
    ///
    /// Arms the countdown when a timer is configured; its updates are sent
    /// to the event channel tagged with the channel id.
    pub async fn advance_image(&mut self, channel: &ChannelSnapshot) -> GameResult<SlideRound> {
        self.countdown.cancel();
        channel.require_text()?;

        let eligible = compute_eligible(channel, self.presenters);
        if eligible.is_empty() {
            return Err(GameError::NoEligibleMembers);
        }

        if self.images.is_none() {
            self.advance_topic().await?;
        }

        let (topic, pool) = match (&self.topic, self.images.as_mut()) {
            (Some(topic), Some(pool)) => (topic.clone(), pool),
            _ => return Err(GameError::EmptyPool),
        };
        let image = pool.next(&mut self.rng)?.clone();
        let presenter = self.rotation.select(&eligible, &mut self.rng)?;

        let round = SlideRound {
            topic,
            image,
            presenter,
        };
        tracing::info!(
            "Slide {} in topic {} presented by {}",
            round.image.display(),
            round.topic,
            round.presenter.id
        );
        self.round = Some(round.clone());

        if self.timer_seconds > 0 {
            let events = self.events.clone();
            let channel_id = channel.id.clone();
            self.countdown.arm(self.timer_seconds, move |event| {
                // No subscribers is fine
                let _ = events.send(GameEvent::from_countdown(channel_id.clone(), event));
            });
        }

        Ok(round)
    }

    /// Set the post-slide countdown, clamped to 0..=300; 0 disables it
    pub fn set_timer_seconds(&mut self, seconds: i64) -> u32 {
        self.timer_seconds = seconds.clamp(0, MAX_TIMER_SECONDS as i64) as u32;
        tracing::info!("Slide timer set to {} seconds", self.timer_seconds);
        self.timer_seconds
    }

    pub fn timer_seconds(&self) -> u32 {
        self.timer_seconds
    }

    pub fn countdown_active(&self) -> bool {
        self.countdown.is_active()
    }

    pub fn current_topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn current_round(&self) -> Option<&SlideRound> {
        self.round.as_ref()
    }
}
