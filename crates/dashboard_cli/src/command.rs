//! Line command grammar for the dashboard shell.
//!
//! Parsing only checks shape (verbs, argument count, id syntax); field
//! validation such as blank titles or off-grid times stays in the core
//! stores so the shell surfaces the same errors any other caller would see.

use dashboard_core::{EventId, Priority, TaskId, TimeSlot, Weekday};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const HELP: &str = "\
commands:
  task add [low|medium|high] <title...>
  task toggle <id>
  task delete <id>
  task list [done|pending]
  task stats
  event add <day> <time> <title...>
  event at <day> <time>
  event list
  event delete <id>
  grid
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Done,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    TaskAdd { priority: Priority, title: String },
    TaskToggle(TaskId),
    TaskDelete(TaskId),
    TaskList(TaskFilter),
    TaskStats,
    /// `time` stays raw text so the store reports empty/invalid time itself.
    EventAdd { day: Weekday, time: String, title: String },
    EventAt { day: Weekday, time: TimeSlot },
    EventList,
    EventDelete(EventId),
    Grid,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn usage(form: &str) -> ParseError {
    ParseError(format!("usage: {form}"))
}

fn parse_id(raw: Option<&str>, form: &str) -> Result<Uuid, ParseError> {
    let raw = raw.ok_or_else(|| usage(form))?;
    Uuid::parse_str(raw).map_err(|_| ParseError(format!("invalid id `{raw}`")))
}

fn parse_day(raw: Option<&str>, form: &str) -> Result<Weekday, ParseError> {
    raw.ok_or_else(|| usage(form))?
        .parse::<Weekday>()
        .map_err(|err| ParseError(format!("{err}")))
}

/// Parses one input line. Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Ok(None);
    };

    let command = match (head, rest) {
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        ("grid", _) => Command::Grid,
        ("task", [verb, args @ ..]) => parse_task(verb, args)?,
        ("event", [verb, args @ ..]) => parse_event(verb, args)?,
        ("task" | "event", []) => return Err(ParseError(format!("{head}: missing verb"))),
        (other, _) => return Err(ParseError(format!("unknown command `{other}`; try help"))),
    };
    Ok(Some(command))
}

fn parse_task(verb: &str, args: &[&str]) -> Result<Command, ParseError> {
    match verb {
        "add" => {
            // An optional leading priority word; everything else is the title.
            let (priority, title_words) = match args.split_first() {
                Some((first, tail)) => match first.parse::<Priority>() {
                    Ok(priority) => (priority, tail),
                    Err(_) => (Priority::default(), args),
                },
                None => (Priority::default(), args),
            };
            Ok(Command::TaskAdd {
                priority,
                title: title_words.join(" "),
            })
        }
        "toggle" => Ok(Command::TaskToggle(parse_id(
            args.first().copied(),
            "task toggle <id>",
        )?)),
        "delete" => Ok(Command::TaskDelete(parse_id(
            args.first().copied(),
            "task delete <id>",
        )?)),
        "list" => match args.first().copied() {
            None => Ok(Command::TaskList(TaskFilter::All)),
            Some("done") => Ok(Command::TaskList(TaskFilter::Done)),
            Some("pending") => Ok(Command::TaskList(TaskFilter::Pending)),
            Some(_) => Err(usage("task list [done|pending]")),
        },
        "stats" => Ok(Command::TaskStats),
        other => Err(ParseError(format!("unknown task verb `{other}`"))),
    }
}

fn parse_event(verb: &str, args: &[&str]) -> Result<Command, ParseError> {
    match verb {
        "add" => {
            const FORM: &str = "event add <day> <time> <title...>";
            let day = parse_day(args.first().copied(), FORM)?;
            let time = args.get(1).copied().unwrap_or_default().to_string();
            let title = args.get(2..).unwrap_or_default().join(" ");
            Ok(Command::EventAdd { day, time, title })
        }
        "at" => {
            const FORM: &str = "event at <day> <time>";
            let day = parse_day(args.first().copied(), FORM)?;
            let time = args
                .get(1)
                .ok_or_else(|| usage(FORM))?
                .parse::<TimeSlot>()
                .map_err(|err| ParseError(format!("{err}")))?;
            Ok(Command::EventAt { day, time })
        }
        "list" => Ok(Command::EventList),
        "delete" => Ok(Command::EventDelete(parse_id(
            args.first().copied(),
            "event delete <id>",
        )?)),
        other => Err(ParseError(format!("unknown event verb `{other}`"))),
    }
}
