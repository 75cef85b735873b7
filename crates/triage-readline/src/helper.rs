use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::commands::KEYWORDS;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
///
/// Keywords complete at the start of the line; catalog symptoms complete
/// after a leading `+`.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    symptoms: Vec<String>,
}

impl CliHelper {
    pub fn new(symptoms: Vec<String>) -> Self {
        Self {
            commands: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            symptoms,
        }
    }

    fn candidates<'a>(&'a self, line: &str) -> (usize, Box<dyn Iterator<Item = &'a String> + 'a>) {
        match line.strip_prefix('+') {
            Some(partial) => {
                let partial = partial.trim_start().to_lowercase();
                let start = line.len() - line.trim_start_matches('+').trim_start().len();
                let matches = self
                    .symptoms
                    .iter()
                    .filter(move |s| s.to_lowercase().starts_with(&partial));
                (start, Box::new(matches))
            }
            None => {
                let line = line.to_string();
                let matches = self
                    .commands
                    .iter()
                    .filter(move |cmd| !line.contains(' ') && cmd.starts_with(&line));
                (0, Box::new(matches))
            }
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.is_empty() {
            return Ok((0, vec![]));
        }

        let (start, matches) = self.candidates(line);
        let candidates = matches
            .map(|item| Pair {
                display: item.clone(),
                replacement: item.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('+') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }

        // Hints are accepted verbatim, so the typed prefix must already match
        // the catalog spelling exactly.
        let (start, mut matches) = self.candidates(line);
        let typed = &line[start..];
        matches
            .find(|item| item.len() > typed.len() && item.starts_with(typed))
            .map(|item| item[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}
