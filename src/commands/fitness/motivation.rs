use tracing::warn;

use crate::commands::Reply;
use crate::error::CommandError;
use crate::services::GifLookup;
use crate::ui::style::{COLOR_FITNESS, EMOJI_MUSCLE};

pub const FALLBACK: &str = "Could not fetch a motivational image. Try again later.";

/// One lookup, no retry. Failures are logged here and surface as the fallback text.
pub async fn motivation(gifs: &dyn GifLookup) -> Result<Reply, CommandError> {
    match gifs.random_gif().await {
        Ok(url) => Ok(Reply::embed(
            format!("Here's your fitness motivation! {EMOJI_MUSCLE}"),
            url.clone(),
            COLOR_FITNESS,
        )
        .with_image(url)),
        Err(err) => {
            warn!(target = "motivation", error = %err, "gif lookup failed");
            Err(CommandError::external(FALLBACK))
        }
    }
}
