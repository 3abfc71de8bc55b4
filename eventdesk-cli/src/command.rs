//! Command-line parsing.

use eventdesk_lib::model::AttendeeDraft;
use eventdesk_lib::model::EventDraft;

pub const USAGE: &str = "\
Usage:
  eventdesk [--retry] events
  eventdesk [--retry] attendees <event-id>
  eventdesk create --name <name> --start <date-time> --end <date-time> --location <place> --capacity <n>
  eventdesk register <event-id> --name <name> --email <address>

Date-times accept RFC 3339 (2030-05-01T18:00:00Z) or local time (2030-05-01T18:00).
Listings show times in local time.
Set EVENTDESK_API_URL to point at the events API (default http://localhost:8000).";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' needs a value")]
    MissingValue(String),
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("'{0}' is not an event id")]
    InvalidEventId(String),
    #[error("'--retry' only applies to read commands")]
    RetryNotAllowed,
}

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Events,
    Attendees(i64),
    Create(EventDraft),
    Register(AttendeeDraft),
}

/// Parsed invocation.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    /// Wrap read commands in the default retry policy.
    pub retry: bool,
}

/// Parses arguments, excluding the program name.
///
/// Numeric fields that do not parse are left empty so validation reports
/// them like a blank form field.
pub fn parse<I, S>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args: Vec<String> = args.into_iter().map(Into::into).collect();

    let retry = match args.iter().position(|a| a == "--retry") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };

    let mut args = args.into_iter();
    let command = match args.next().as_deref() {
        None => return Err(UsageError::MissingCommand),
        Some("help" | "--help" | "-h") => Command::Help,
        Some("events") => {
            no_more(&mut args)?;
            Command::Events
        }
        Some("attendees") => {
            let raw = args.next().ok_or(UsageError::MissingArgument("event-id"))?;
            no_more(&mut args)?;
            let id = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| UsageError::InvalidEventId(raw.clone()))?;
            Command::Attendees(id)
        }
        Some("create") => {
            let mut draft = EventDraft::default();
            for (flag, value) in options(&mut args)? {
                match flag.as_str() {
                    "--name" => draft.name = value,
                    "--start" => draft.start_time = value,
                    "--end" => draft.end_time = value,
                    "--location" => draft.location = value,
                    "--capacity" => draft.max_capacity = value.trim().parse().ok(),
                    _ => return Err(UsageError::UnknownOption(flag)),
                }
            }
            Command::Create(draft)
        }
        Some("register") => {
            let raw = args.next().ok_or(UsageError::MissingArgument("event-id"))?;
            let mut draft = AttendeeDraft {
                event_id: raw.trim().parse().ok(),
                ..Default::default()
            };
            for (flag, value) in options(&mut args)? {
                match flag.as_str() {
                    "--name" => draft.name = value,
                    "--email" => draft.email = value,
                    _ => return Err(UsageError::UnknownOption(flag)),
                }
            }
            Command::Register(draft)
        }
        Some(other) => return Err(UsageError::UnknownCommand(other.to_string())),
    };

    if retry && matches!(command, Command::Create(_) | Command::Register(_)) {
        return Err(UsageError::RetryNotAllowed);
    }

    Ok(Invocation { command, retry })
}

fn no_more(args: &mut impl Iterator<Item = String>) -> Result<(), UsageError> {
    match args.next() {
        Some(extra) => Err(UsageError::UnexpectedArgument(extra)),
        None => Ok(()),
    }
}

fn options(args: &mut impl Iterator<Item = String>) -> Result<Vec<(String, String)>, UsageError> {
    let mut pairs = Vec::new();
    while let Some(flag) = args.next() {
        if !flag.starts_with("--") {
            return Err(UsageError::UnexpectedArgument(flag));
        }
        let value = args.next().ok_or_else(|| UsageError::MissingValue(flag.clone()))?;
        pairs.push((flag, value));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_commands() {
        assert_eq!(
            parse(["events"]).unwrap(),
            Invocation {
                command: Command::Events,
                retry: false
            }
        );
        assert_eq!(
            parse(["--retry", "attendees", "12"]).unwrap(),
            Invocation {
                command: Command::Attendees(12),
                retry: true
            }
        );
    }

    #[test]
    fn test_create_collects_draft() {
        let invocation = parse([
            "create",
            "--name",
            "RustConf",
            "--start",
            "2030-09-10T09:00",
            "--end",
            "2030-09-12T17:00",
            "--location",
            "Montreal",
            "--capacity",
            "800",
        ])
        .unwrap();
        assert_eq!(
            invocation.command,
            Command::Create(EventDraft {
                name: "RustConf".to_string(),
                start_time: "2030-09-10T09:00".to_string(),
                end_time: "2030-09-12T17:00".to_string(),
                location: "Montreal".to_string(),
                max_capacity: Some(800),
            })
        );
    }

    #[test]
    fn test_unparsable_numbers_become_missing() {
        let invocation = parse(["create", "--capacity", "lots"]).unwrap();
        let Command::Create(draft) = invocation.command else {
            panic!("expected create");
        };
        assert_eq!(draft.max_capacity, None);

        let invocation = parse(["register", "abc", "--name", "Ada"]).unwrap();
        let Command::Register(draft) = invocation.command else {
            panic!("expected register");
        };
        assert_eq!(draft.event_id, None);
        assert_eq!(draft.name, "Ada");
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(parse(Vec::<String>::new()), Err(UsageError::MissingCommand));
        assert_eq!(
            parse(["launch"]),
            Err(UsageError::UnknownCommand("launch".to_string()))
        );
        assert_eq!(
            parse(["create", "--colour", "red"]),
            Err(UsageError::UnknownOption("--colour".to_string()))
        );
        assert_eq!(
            parse(["register", "3", "--email"]),
            Err(UsageError::MissingValue("--email".to_string()))
        );
        assert_eq!(
            parse(["attendees"]),
            Err(UsageError::MissingArgument("event-id"))
        );
        assert_eq!(
            parse(["events", "now"]),
            Err(UsageError::UnexpectedArgument("now".to_string()))
        );
        assert_eq!(
            parse(["attendees", "twelve"]),
            Err(UsageError::InvalidEventId("twelve".to_string()))
        );
        assert_eq!(
            parse(["--retry", "register", "3"]),
            Err(UsageError::RetryNotAllowed)
        );
    }
}
