use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Команды бота расписания:")]
pub enum Command {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "авторизоваться в личном кабинете")]
    Login,
    #[command(description = "короткий вариант авторизации")]
    L,
    #[command(description = "выйти из аккаунта")]
    Logout,
    #[command(description = "показать помощь")]
    Help,
}
