use crate::game::countdown::{time_left_text, CountdownEvent, TIME_UP_TEXT};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Button ids shared between replies and dispatch
pub const SLIDE_NEXT: &str = "slide-next";
pub const CHAMELEON_GET_WORD: &str = "chameleon-get-word";
pub const CHAMELEON_REVEAL: &str = "chameleon-reveal";
pub const CHAMELEON_NEXT: &str = "chameleon-next";

/// An interaction delivered by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum HostEvent {
    Command {
        name: String,
        channel: ChannelSnapshot,
        member: Member,
        #[serde(default)]
        options: HashMap<String, serde_json::Value>,
    },
    Button {
        id: String,
        channel: ChannelSnapshot,
        member: Member,
    },
}

impl HostEvent {
    /// Command name or button id
    pub fn action_id(&self) -> &str {
        match self {
            HostEvent::Command { name, .. } => name,
            HostEvent::Button { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Button {
    pub id: String,
    pub label: String,
    pub style: ButtonStyle,
}

impl Button {
    pub fn primary(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            style: ButtonStyle::Primary,
        }
    }

    pub fn secondary(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            style: ButtonStyle::Secondary,
        }
    }
}

/// What the host should present in response to an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum Reply {
    Text {
        content: String,
        ephemeral: bool,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        buttons: Vec<Button>,
    },
    Slide {
        content: String,
        presenter: MemberId,
        topic: String,
        /// File the host attaches to the reply
        image: PathBuf,
        buttons: Vec<Button>,
        /// Initial countdown text for the follow-up message, when armed
        countdown: Option<String>,
    },
    Card {
        content: String,
        topic: String,
        words: Vec<String>,
        table: String,
        buttons: Vec<Button>,
    },
    Error {
        code: String,
        msg: String,
    },
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Reply::Text {
            content: content.into(),
            ephemeral: false,
            buttons: Vec::new(),
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Reply::Text {
            content: content.into(),
            ephemeral: true,
            buttons: Vec::new(),
        }
    }
}

/// Asynchronous updates pushed to the host outside of a reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum GameEvent {
    CountdownTick {
        channel_id: ChannelId,
        remaining: u32,
        text: String,
        server_now: String,
    },
    CountdownExpired {
        channel_id: ChannelId,
        text: String,
        server_now: String,
    },
}

impl GameEvent {
    pub fn from_countdown(channel_id: ChannelId, event: CountdownEvent) -> Self {
        let server_now = chrono::Utc::now().to_rfc3339();
        match event {
            CountdownEvent::Tick { remaining } => GameEvent::CountdownTick {
                channel_id,
                remaining,
                text: time_left_text(remaining),
                server_now,
            },
            CountdownEvent::Expired => GameEvent::CountdownExpired {
                channel_id,
                text: TIME_UP_TEXT.to_string(),
                server_now,
            },
        }
    }
}

/// Command registration entry for the host platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}
