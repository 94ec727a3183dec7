use colored::Colorize;
use phonebook::commands::{CmdMessage, MessageLevel};

/// Everything goes to stdout, errors included; only logging uses stderr.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
