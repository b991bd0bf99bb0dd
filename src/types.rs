use crate::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Opaque ID types for type safety
pub type MemberId = String;
pub type ChannelId = String;
pub type RoundId = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Idle,
    Dnd,
    Offline,
}

/// A channel participant as reported by the host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: MemberId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_bot: bool,
    /// None when the host has no presence data for this member
    #[serde(default)]
    pub presence: Option<Presence>,
}

impl Member {
    pub fn human(id: impl Into<MemberId>, presence: Presence) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            is_bot: false,
            presence: Some(presence),
        }
    }

    pub fn bot(id: impl Into<MemberId>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            is_bot: true,
            presence: Some(Presence::Online),
        }
    }

    pub fn is_online(&self) -> bool {
        self.presence == Some(Presence::Online)
    }

    /// Platform mention markup for this member
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    GuildText,
    GuildVoice,
    Thread,
    DirectMessage,
}

/// Point-in-time view of the channel an action was invoked in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    pub id: ChannelId,
    pub kind: ChannelKind,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl ChannelSnapshot {
    pub fn text(id: impl Into<ChannelId>, members: Vec<Member>) -> Self {
        Self {
            id: id.into(),
            kind: ChannelKind::GuildText,
            members,
        }
    }

    /// Both games only run in guild text channels
    pub fn require_text(&self) -> GameResult<()> {
        if self.kind == ChannelKind::GuildText {
            Ok(())
        } else {
            Err(GameError::WrongChannelType(self.kind))
        }
    }
}

/// Which channel members may take a turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityRule {
    /// Any member that is not a bot
    AnyHuman,
    /// Non-bot members whose presence is online
    #[default]
    OnlineHuman,
}

impl EligibilityRule {
    pub fn admits(&self, member: &Member) -> bool {
        match self {
            EligibilityRule::AnyHuman => !member.is_bot,
            EligibilityRule::OnlineHuman => !member.is_bot && member.is_online(),
        }
    }
}

/// One line of the chameleon card file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChameleonCard {
    pub topic: String,
    pub words: Vec<String>,
}

/// Result of advancing the slideshow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideRound {
    pub topic: String,
    pub image: PathBuf,
    pub presenter: Member,
}

/// A dealt chameleon round; word and impostor are fixed for its lifetime
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChameleonRound {
    pub id: RoundId,
    pub card: ChameleonCard,
    pub secret_word: String,
    pub impostor: Member,
    pub started_at: String, // ISO timestamp
}
