use course_link_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_course_link_command_parsing() {
        let result = Command::parse("/c", "testbot");
        assert_eq!(result.ok(), Some(Command::C));
    }

    #[test]
    fn test_course_link_command_with_bot_mention() {
        let result = Command::parse("/c@testbot", "testbot");
        assert_eq!(result.ok(), Some(Command::C));
    }

    #[test]
    fn test_course_link_command_for_other_bot_is_rejected() {
        let result = Command::parse("/c@otherbot", "testbot");
        assert!(result.is_err());
    }

    #[test]
    fn test_help_command_parsing() {
        let result = Command::parse("/help", "testbot");
        assert_eq!(result.ok(), Some(Command::Help));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Command::parse("/course", "testbot").is_err());
        assert!(Command::parse("/start", "testbot").is_err());
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert!(Command::parse("c", "testbot").is_err());
        assert!(Command::parse("hello", "testbot").is_err());
    }

    #[test]
    fn test_descriptions_list_commands() {
        let descriptions = Command::descriptions().to_string();
        assert!(descriptions.contains("/c"));
        assert!(descriptions.contains("/help"));
    }
}
