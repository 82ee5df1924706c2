use colored::{ColoredString, Colorize};
use roster::commands::{CmdMessage, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled(message));
    }
}

fn styled(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_styles() {
        assert_eq!(styled(&CmdMessage::info("table row")), "table row".dimmed());
        assert_eq!(styled(&CmdMessage::success("done")), "done".green());
        assert_eq!(styled(&CmdMessage::warning("hmm")), "hmm".yellow());
        assert_eq!(styled(&CmdMessage::error("no")), "no".red());
    }
}
