pub mod callback;
pub mod message;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::bot::commands::Command;
use crate::bot::AppContext;

pub struct BotHandler {
    pub ctx: AppContext,
}

impl BotHandler {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        use teloxide::dispatching::UpdateFilterExt;

        let ctx_commands = self.ctx.clone();
        let ctx_text = self.ctx.clone();
        let ctx_callback = self.ctx.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let ctx = ctx_commands.clone();
                        async move { message::command_handler(bot, msg, cmd, ctx).await }
                    }),
            )
            .branch(
                Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                    let ctx = ctx_text.clone();
                    async move { message::text_handler(bot, msg, ctx).await }
                }),
            )
            .branch(
                Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                    let ctx = ctx_callback.clone();
                    async move { callback::callback_handler(bot, q, ctx).await }
                }),
            )
    }
}
