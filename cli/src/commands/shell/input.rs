use std::path::PathBuf;
use std::str::FromStr;

use netplan_trainer_common::task::TaskField;

/// Terminates a multi-line `edit` block.
pub const END_OF_EDIT: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Show,
    Task,
    Status,
    Help,
    Set(TaskField, String),
    Edit,
    Load(PathBuf),
    Apply,
    Reset,
    Explain(String),
    Close,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }

        // `dhcp4?` is a shortcut for `explain dhcp4`
        if let Some(topic) = line.strip_suffix('?') {
            let topic = topic.trim();
            if !topic.is_empty() && !topic.contains(char::is_whitespace) {
                return Ok(Self::Explain(topic.to_string()));
            }
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word.to_lowercase().as_str(), rest) {
            ("show" | "ls", "") => Ok(Self::Show),
            ("task", "") => Ok(Self::Task),
            ("status", "") => Ok(Self::Status),
            ("help" | "h", "") => Ok(Self::Help),
            ("edit", "") => Ok(Self::Edit),
            ("apply", "") => Ok(Self::Apply),
            ("netplan", args) if args.eq_ignore_ascii_case("apply") => Ok(Self::Apply),
            ("reset", "") => Ok(Self::Reset),
            ("close", "") => Ok(Self::Close),
            ("quit" | "exit" | "q", "") => Ok(Self::Quit),
            ("explain", "") => Err("usage: explain <topic>".into()),
            ("explain", topic) => Ok(Self::Explain(topic.to_string())),
            ("load", "") | ("load", "-") => Err("usage: load <file>".into()),
            ("load", path) => Ok(Self::Load(PathBuf::from(path))),
            ("set", args) => parse_set(args),
            (word, _) => Err(format!("unknown command '{word}', type 'help'")),
        }
    }
}

fn parse_set(args: &str) -> Result<ShellCommand, String> {
    let Some((field, value)) = args.split_once(char::is_whitespace) else {
        return Err("usage: set <field> <value>".into());
    };
    let field: TaskField = field.parse()?;
    let value = value.trim();
    if value.is_empty() {
        return Err("usage: set <field> <value>".into());
    }
    Ok(ShellCommand::Set(field, value.to_string()))
}
