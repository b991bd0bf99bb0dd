//! Host event dispatch
//!
//! Maps command names and button ids to the game handlers. Handler errors
//! are turned into `Reply::Error` here so a failed action never takes the
//! process down.

mod chameleon;
mod slideshow;

use crate::error::{GameError, GameResult};
use crate::protocol::{
    CommandOption, CommandSpec, HostEvent, Reply, CHAMELEON_GET_WORD, CHAMELEON_NEXT,
    CHAMELEON_REVEAL, SLIDE_NEXT,
};
use crate::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;

pub const SLIDE_TIMER: &str = "slide-timer";
pub const SLIDE_TOPIC: &str = "slide-topic";
pub const CHAMELEON_START: &str = "chameleon-start";
pub const CHAMELEON_STOP: &str = "chameleon-stop";

/// Handle a host event and return what should be shown
pub async fn handle_event(event: HostEvent, state: &Arc<AppState>) -> Reply {
    let action = event.action_id().to_string();

    match dispatch(event, state).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!("Action {} failed: {}", action, e);
            Reply::Error {
                code: e.code().to_string(),
                msg: e.to_string(),
            }
        }
    }
}

async fn dispatch(event: HostEvent, state: &Arc<AppState>) -> GameResult<Reply> {
    match event {
        HostEvent::Command {
            name,
            channel,
            member: _,
            options,
        } => {
            tracing::info!("Executing command {}", name);
            match name.as_str() {
                SLIDE_TIMER => {
                    let seconds = integer_option(&options, "seconds")?;
                    slideshow::handle_set_timer(state, seconds).await
                }
                SLIDE_TOPIC => slideshow::handle_next_topic(state).await,
                SLIDE_NEXT => slideshow::handle_next_slide(state, &channel).await,
                CHAMELEON_START => chameleon::handle_deal(state, &channel).await,
                CHAMELEON_STOP => chameleon::handle_stop(state).await,
                _ => Err(GameError::UnknownAction(format!("command {}", name))),
            }
        }

        HostEvent::Button {
            id,
            channel,
            member,
        } => {
            tracing::info!("Pressed button {}", id);
            match id.as_str() {
                SLIDE_NEXT => slideshow::handle_next_slide(state, &channel).await,
                CHAMELEON_GET_WORD => chameleon::handle_get_word(state, &member).await,
                CHAMELEON_REVEAL => chameleon::handle_reveal(state).await,
                CHAMELEON_NEXT => chameleon::handle_deal(state, &channel).await,
                _ => Err(GameError::UnknownAction(format!("button {}", id))),
            }
        }
    }
}

fn integer_option(options: &HashMap<String, serde_json::Value>, name: &str) -> GameResult<i64> {
    options
        .get(name)
        .ok_or_else(|| GameError::InvalidOption(format!("{} is required", name)))?
        .as_i64()
        .ok_or_else(|| GameError::InvalidOption(format!("{} must be an integer", name)))
}

/// Commands to register with the host platform
pub fn command_manifest() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: SLIDE_TIMER.to_string(),
            description: "set slide timer".to_string(),
            options: vec![CommandOption {
                name: "seconds".to_string(),
                description: "0 disables timer".to_string(),
                required: true,
                min_value: Some(0),
                max_value: Some(crate::game::slideshow::MAX_TIMER_SECONDS as i64),
            }],
        },
        CommandSpec {
            name: SLIDE_TOPIC.to_string(),
            description: "next topic".to_string(),
            options: Vec::new(),
        },
        CommandSpec {
            name: SLIDE_NEXT.to_string(),
            description: "get next image".to_string(),
            options: Vec::new(),
        },
        CommandSpec {
            name: CHAMELEON_START.to_string(),
            description: "start the game".to_string(),
            options: Vec::new(),
        },
        CommandSpec {
            name: CHAMELEON_STOP.to_string(),
            description: "stop the game".to_string(),
            options: Vec::new(),
        },
    ]
}
