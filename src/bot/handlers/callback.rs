use teloxide::prelude::*;

use crate::bot::{keyboards, login, messages, AppContext};

/// Inline institution picker. Any other callback payload is acknowledged and
/// dropped.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, ctx: AppContext) -> ResponseResult<()> {
    let user_id = q.from.id.0.to_string();
    let data = q.data.clone();

    let institution = match data.as_deref() {
        Some(keyboards::CB_TPI) => "T",
        Some(keyboards::CB_DGTY) => "D",
        _ => {
            bot.answer_callback_query(q.id).await?;
            return Ok(());
        }
    };

    tracing::info!("User {user_id} picked institution {institution}");
    let outcome = login::choose_institution(&ctx.store, &user_id, institution).await;
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(message) = q.message else {
        return Ok(());
    };

    match outcome {
        Ok(reply) => {
            bot.edit_message_text(message.chat.id, message.id, reply.text)
                .await?;
        }
        Err(err) => {
            tracing::error!("Institution choice failed for user {user_id}: {err:#}");
            bot.send_message(message.chat.id, messages::try_later())
                .await?;
        }
    }
    Ok(())
}
