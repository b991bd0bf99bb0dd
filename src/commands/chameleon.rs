use crate::error::GameResult;
use crate::protocol::{Button, Reply, CHAMELEON_GET_WORD, CHAMELEON_NEXT, CHAMELEON_REVEAL};
use crate::state::AppState;
use crate::types::{ChannelSnapshot, Member};
use std::sync::Arc;

const WORDS_PER_ROW: usize = 4;

/// Start a round (command or "Next Card") and show the card to everyone
pub async fn handle_deal(state: &Arc<AppState>, channel: &ChannelSnapshot) -> GameResult<Reply> {
    let mut chameleon = state.chameleon.lock().await;
    let round = chameleon.start(channel).await?;

    let table = word_table(&round.card.words);
    Ok(Reply::Card {
        content: format!("**{}**\n```{}```", round.card.topic, table),
        topic: round.card.topic.clone(),
        words: round.card.words.clone(),
        table,
        buttons: vec![
            Button::primary(CHAMELEON_GET_WORD, "Reveal Word"),
            Button::secondary(CHAMELEON_REVEAL, "Reveal Chameleon"),
        ],
    })
}

/// Private reply with the secret word, or the impostor notice
pub async fn handle_get_word(state: &Arc<AppState>, member: &Member) -> GameResult<Reply> {
    let chameleon = state.chameleon.lock().await;

    match chameleon.reveal_word_for(&member.id)? {
        Some(word) => Ok(Reply::ephemeral(format!("The word is: **{}**", word))),
        None => Ok(Reply::ephemeral("*You are the chameleon!*")),
    }
}

pub async fn handle_reveal(state: &Arc<AppState>) -> GameResult<Reply> {
    let chameleon = state.chameleon.lock().await;
    let impostor = chameleon.impostor()?;

    Ok(Reply::Text {
        content: format!("The chameleon was {}!", impostor.mention()),
        ephemeral: false,
        buttons: vec![Button::primary(CHAMELEON_NEXT, "Next Card")],
    })
}

pub async fn handle_stop(state: &Arc<AppState>) -> GameResult<Reply> {
    match state.chameleon.lock().await.stop() {
        Some(round) => Ok(Reply::text(format!(
            "Game stopped. The chameleon was {}!",
            round.impostor.mention()
        ))),
        None => Ok(Reply::text("No game is running.")),
    }
}

/// Lay out words four per row in left-aligned columns
fn word_table(words: &[String]) -> String {
    let mut widths = [0usize; WORDS_PER_ROW];
    for row in words.chunks(WORDS_PER_ROW) {
        for (i, word) in row.iter().enumerate() {
            widths[i] = widths[i].max(word.chars().count());
        }
    }

    words
        .chunks(WORDS_PER_ROW)
        .map(|row| {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, word)| format!("{:<width$}", word, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ");
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
