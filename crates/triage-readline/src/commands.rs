//! REPL command parsing.

use std::str::FromStr;

use triage_core::Gender;

/// Keywords offered by completion and hints.
pub const KEYWORDS: &[&str] = &[
    "next", "back", "reset", "submit", "save", "show", "help", "quit", "age", "gender", "pregnant",
];

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    Reset,
    Submit,
    /// Save the report, optionally into a specific directory
    Save(Option<String>),
    Show,
    Help,
    Quit,
    /// 1-based pick from the list shown at the current step
    Pick(usize),
    /// Free-text symptom toggle (`+text`)
    Symptom(String),
    Age(String),
    Gender(Option<Gender>),
    Pregnant(bool),
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        if let Some(symptom) = line.strip_prefix('+') {
            let symptom = symptom.trim();
            if symptom.is_empty() {
                return Err("usage: +<symptom>".to_string());
            }
            return Ok(Command::Symptom(symptom.to_string()));
        }

        if let Ok(number) = line.parse::<usize>() {
            if number == 0 {
                return Err("picks start at 1".to_string());
            }
            return Ok(Command::Pick(number));
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Command::Next),
            "back" | "b" => Ok(Command::Back),
            "reset" | "restart" => Ok(Command::Reset),
            "submit" => Ok(Command::Submit),
            "save" => Ok(Command::Save((!rest.is_empty()).then(|| rest.to_string()))),
            "show" | "ls" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "age" => Ok(Command::Age(rest.to_string())),
            "gender" => parse_gender(rest).map(Command::Gender),
            "pregnant" => parse_yes_no(rest).map(Command::Pregnant),
            _ => Err(format!("unknown command '{}'; type 'help'", keyword)),
        }
    }
}

fn parse_gender(value: &str) -> Result<Option<Gender>, String> {
    match value.to_ascii_lowercase().as_str() {
        "clear" | "none" => Ok(None),
        "m" => Ok(Some(Gender::Male)),
        "f" => Ok(Some(Gender::Female)),
        other => Gender::from_str(other)
            .map(Some)
            .map_err(|_| "usage: gender male|female|clear".to_string()),
    }
}

fn parse_yes_no(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err("usage: pregnant yes|no".to_string()),
    }
}

pub const HELP: &str = "\
Commands:
  next | back            move between steps (next on intake submits)
  <number>               pick from the list shown for this step
  +<symptom>             toggle a symptom by name
  age <years>            record age
  gender male|female|clear
  pregnant yes|no
  submit                 evaluate eligibility
  save [dir]             write the report to disk
  show                   redraw the current step
  reset                  start over
  quit                   leave";
