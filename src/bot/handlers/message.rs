use teloxide::prelude::*;
use teloxide::types::ChatId;

use crate::bot::commands::Command;
use crate::bot::format::Period;
use crate::bot::{keyboards, login, messages, timetable, AppContext, Menu, Reply};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: AppContext,
) -> ResponseResult<()> {
    let Some(user_id) = msg.from().map(|u| u.id.0.to_string()) else {
        return Ok(());
    };

    match cmd {
        Command::Start => {
            send_reply(
                &bot,
                msg.chat.id,
                Reply::plain(messages::start()).with_menu(Menu::Login),
            )
            .await?;
        }
        Command::Login | Command::L => {
            let outcome = login::begin(&ctx.store, ctx.institution_mode, &user_id).await;
            send_outcome(&bot, msg.chat.id, &user_id, "login", outcome).await?;
        }
        Command::Logout => {
            let outcome = login::logout(&ctx.store, &user_id).await;
            send_outcome(&bot, msg.chat.id, &user_id, "logout", outcome).await?;
        }
        Command::Help => {
            send_reply(&bot, msg.chat.id, Reply::plain(messages::help())).await?;
        }
    }
    Ok(())
}

/// Menu captions and free text. Captions route to their handlers; everything
/// else feeds the login dialogue and is ignored when no flow is active.
pub async fn text_handler(bot: Bot, msg: Message, ctx: AppContext) -> ResponseResult<()> {
    let (user_id, text) = match (msg.from(), msg.text()) {
        (Some(user), Some(text)) => (user.id.0.to_string(), text.trim()),
        _ => return Ok(()),
    };

    // Unknown slash commands are not login input.
    if text.starts_with('/') {
        return Ok(());
    }

    match text {
        keyboards::BTN_TODAY => {
            let outcome = timetable::timetable_reply(&ctx.store, &ctx.api, &user_id, Period::Today).await;
            send_outcome(&bot, msg.chat.id, &user_id, "timetable today", outcome).await?;
        }
        keyboards::BTN_TOMORROW => {
            let outcome =
                timetable::timetable_reply(&ctx.store, &ctx.api, &user_id, Period::Tomorrow).await;
            send_outcome(&bot, msg.chat.id, &user_id, "timetable tomorrow", outcome).await?;
        }
        keyboards::BTN_WEEK => {
            let outcome = timetable::timetable_reply(&ctx.store, &ctx.api, &user_id, Period::Week).await;
            send_outcome(&bot, msg.chat.id, &user_id, "timetable week", outcome).await?;
        }
        keyboards::BTN_HELP => {
            send_reply(&bot, msg.chat.id, Reply::plain(messages::help())).await?;
        }
        keyboards::BTN_LOGIN => {
            let outcome = login::begin(&ctx.store, ctx.institution_mode, &user_id).await;
            send_outcome(&bot, msg.chat.id, &user_id, "login", outcome).await?;
        }
        keyboards::BTN_LOGOUT => {
            let outcome = login::logout(&ctx.store, &user_id).await;
            send_outcome(&bot, msg.chat.id, &user_id, "logout", outcome).await?;
        }
        _ => match login::handle_text(&ctx.store, &ctx.api, &user_id, text).await {
            Ok(Some(reply)) => send_reply(&bot, msg.chat.id, reply).await?,
            Ok(None) => {}
            Err(err) => {
                tracing::error!("Login step failed for user {user_id}: {err:#}");
                send_reply(&bot, msg.chat.id, Reply::plain(messages::try_later())).await?;
            }
        },
    }
    Ok(())
}

/// Sends a core reply, falling back to the generic try-later message when the
/// operation failed. Nothing here lets an error escape to the dispatcher
/// besides Telegram send failures.
async fn send_outcome(
    bot: &Bot,
    chat_id: ChatId,
    user_id: &str,
    action: &str,
    outcome: anyhow::Result<Reply>,
) -> ResponseResult<()> {
    match outcome {
        Ok(reply) => send_reply(bot, chat_id, reply).await,
        Err(err) => {
            tracing::error!("{action} failed for user {user_id}: {err:#}");
            send_reply(bot, chat_id, Reply::plain(messages::try_later())).await
        }
    }
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<()> {
    let mut request = bot.send_message(chat_id, reply.text);
    if let Some(mode) = reply.parse_mode {
        request = request.parse_mode(mode);
    }
    match reply.menu {
        Some(Menu::Login) => request.reply_markup(keyboards::login_menu()).await?,
        Some(Menu::Main) => request.reply_markup(keyboards::main_menu()).await?,
        Some(Menu::InstitutionChoice) => {
            request.reply_markup(keyboards::institution_keyboard()).await?
        }
        None => request.await?,
    };
    Ok(())
}
