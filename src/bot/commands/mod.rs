pub mod course_link;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Course platform bot commands:")]
pub enum Command {
    #[command(description = "Get the link to your course page")]
    C,
    #[command(description = "Display this help message")]
    Help,
}
