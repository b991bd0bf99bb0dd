//! Chameleon round engine
//!
//! Deals a topic card and a secret word to everyone except one hidden
//! impostor. Topics are not dealt twice until the whole catalogue has been
//! used up.

use super::rotation::compute_eligible;
use crate::error::{GameError, GameResult};
use crate::source::CardSource;
use crate::types::{ChameleonCard, ChameleonRound, ChannelSnapshot, EligibilityRule, Member};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Arc;

pub const MIN_PLAYERS: usize = 2;

pub struct ChameleonEngine {
    source: Arc<dyn CardSource>,
    players: EligibilityRule,
    rng: StdRng,
    used_topics: HashSet<String>,
    round: Option<ChameleonRound>,
}

impl ChameleonEngine {
    pub fn new(source: Arc<dyn CardSource>, players: EligibilityRule) -> Self {
        Self {
            source,
            players,
            rng: StdRng::from_os_rng(),
            used_topics: HashSet::new(),
            round: None,
        }
    }

    /// Replace the random source, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Cards whose topic has not been dealt yet
    ///
    /// Once every topic has been used the used set is cleared and the full
    /// catalogue is offered again. That happens at most once per call.
    pub async fn load_deck(&mut self) -> GameResult<Vec<ChameleonCard>> {
        let cards = self.source.load_cards().await?;
        if cards.is_empty() {
            return Err(GameError::NoCardsAvailable);
        }

        let fresh: Vec<ChameleonCard> = cards
            .iter()
            .filter(|c| !self.used_topics.contains(&c.topic))
            .cloned()
            .collect();
        if !fresh.is_empty() {
            return Ok(fresh);
        }

        if self.used_topics.is_empty() {
            return Err(GameError::NoCardsAvailable);
        }

        tracing::info!(
            "All {} topics used, recycling the deck",
            self.used_topics.len()
        );
        self.used_topics.clear();
        Ok(cards)
    }

    /// Deal a new round, replacing any running one
    pub async fn start(&mut self, channel: &ChannelSnapshot) -> GameResult<&ChameleonRound> {
        channel.require_text()?;

        let eligible = compute_eligible(channel, self.players);
        if eligible.len() < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers {
                eligible: eligible.len(),
            });
        }

        let deck = self.load_deck().await?;
        let card = deck
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::NoCardsAvailable)?;
        let secret_word = card
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| GameError::NoWordsInCard(card.topic.clone()))?;
        let impostor = eligible
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::TooFewPlayers { eligible: 0 })?;

        tracing::info!(
            "Chameleon round started: topic {}, {} players",
            card.topic,
            eligible.len()
        );

        self.used_topics.insert(card.topic.clone());
        let round = self.round.insert(ChameleonRound {
            id: ulid::Ulid::new().to_string(),
            card,
            secret_word,
            impostor,
            started_at: chrono::Utc::now().to_rfc3339(),
        });
        Ok(round)
    }

    /// End the current round; returns it if one was running
    pub fn stop(&mut self) -> Option<ChameleonRound> {
        let round = self.round.take();
        if round.is_some() {
            tracing::info!("Chameleon round stopped");
        }
        round
    }

    /// The word `member_id` gets to see; None for the impostor
    pub fn reveal_word_for(&self, member_id: &str) -> GameResult<Option<&str>> {
        let round = self.current()?;
        if round.impostor.id == member_id {
            Ok(None)
        } else {
            Ok(Some(round.secret_word.as_str()))
        }
    }

    pub fn impostor(&self) -> GameResult<&Member> {
        Ok(&self.current()?.impostor)
    }

    pub fn card(&self) -> GameResult<&ChameleonCard> {
        Ok(&self.current()?.card)
    }

    pub fn current_round(&self) -> Option<&ChameleonRound> {
        self.round.as_ref()
    }

    pub fn used_topics(&self) -> &HashSet<String> {
        &self.used_topics
    }

    fn current(&self) -> GameResult<&ChameleonRound> {
        self.round.as_ref().ok_or(GameError::RoundNotStarted)
    }
}
