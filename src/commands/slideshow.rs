use crate::error::GameResult;
use crate::game::countdown::time_left_text;
use crate::protocol::{Button, Reply, SLIDE_NEXT};
use crate::state::AppState;
use crate::types::ChannelSnapshot;
use std::sync::Arc;

pub async fn handle_set_timer(state: &Arc<AppState>, seconds: i64) -> GameResult<Reply> {
    let seconds = state.slideshow.lock().await.set_timer_seconds(seconds);

    if seconds > 0 {
        Ok(Reply::text(format!(
            "Timer duration is set to {} seconds.",
            seconds
        )))
    } else {
        Ok(Reply::text("Timer is disabled."))
    }
}

pub async fn handle_next_topic(state: &Arc<AppState>) -> GameResult<Reply> {
    let topic = state.slideshow.lock().await.advance_topic().await?;
    Ok(Reply::text(format!("Game topic is: {}", topic)))
}

pub async fn handle_next_slide(
    state: &Arc<AppState>,
    channel: &ChannelSnapshot,
) -> GameResult<Reply> {
    let mut slideshow = state.slideshow.lock().await;
    let round = slideshow.advance_image(channel).await?;

    let timer = slideshow.timer_seconds();
    let countdown = (timer > 0).then(|| time_left_text(timer));

    Ok(Reply::Slide {
        content: format!(
            "{}\nGame topic is: {}",
            round.presenter.mention(),
            round.topic
        ),
        presenter: round.presenter.id,
        topic: round.topic,
        image: round.image,
        buttons: vec![Button::primary(SLIDE_NEXT, "Next Slide")],
        countdown,
    })
}
