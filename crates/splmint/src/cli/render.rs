use colored::{ColoredString, Colorize};
use splmintapp::commands::{CmdMessage, MessageLevel};

fn styled(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}\n", styled(m)))
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// `key = value` lines, keys padded to a common width.
pub fn render_entries(entries: &[(&str, String)]) -> String {
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(key, value)| format!("{:<width$} = {}\n", key, value, width = width))
        .collect()
}
