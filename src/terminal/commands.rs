use crate::dictionary::CanonicalField;
use crate::state::{Event, Selection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Session(Event),
    Speak(usize),
    Options,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  search <text> | / <text>   filter by text (empty clears)
  unit <value>               select unit (All or nothing resets)
  topic <value>              select topic (All or nothing resets)
  grade <value>              select grade (All or nothing resets)
  first | prev | next | last page navigation
  page <n>                   jump to page n
  speak <row>                speak the word on row n of this page
  options                    list unit/topic/grade values
  help | quit";

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "search" | "/" => Command::Session(Event::Search(rest.to_string())),
        "unit" => select(CanonicalField::Unit, rest),
        "topic" => select(CanonicalField::Topic, rest),
        "grade" => select(CanonicalField::Grade, rest),
        "first" => Command::Session(Event::FirstPage),
        "prev" => Command::Session(Event::PrevPage),
        "next" => Command::Session(Event::NextPage),
        "last" => Command::Session(Event::LastPage),
        "page" => match rest.parse() {
            Ok(n) => Command::Session(Event::GoToPage(n)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "speak" => match rest.parse() {
            Ok(n) => Command::Speak(n),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "options" => Command::Options,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn select(field: CanonicalField, value: &str) -> Command {
    Command::Session(Event::Select(field, Selection::parse(value)))
}
