//! Console prompt used to ask for level and screenshot names.
//!
//! The window has no text input; names are typed into the terminal that
//! launched the editor. [`Prompt`] wraps a [`NameSource`] so headless tests
//! can script the answers.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use bevy_ecs::prelude::Resource;
use log::warn;

/// Something that can answer "what name?" questions.
pub trait NameSource: Send + Sync {
    /// Ask `question`; `None` cancels the operation.
    fn ask(&mut self, question: &str) -> Option<String>;
}

/// Blocking prompt on stdin/stdout.
#[derive(Debug, Default)]
pub struct StdinNames;

impl NameSource for StdinNames {
    fn ask(&mut self, question: &str) -> Option<String> {
        print!("{}", question);
        if let Err(e) = io::stdout().flush() {
            warn!("Failed to flush prompt: {}", e);
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => non_empty(&line),
            Err(e) => {
                warn!("Failed to read from stdin: {}", e);
                None
            }
        }
    }
}

/// Pre-recorded answers, consumed in order.
#[derive(Debug, Default)]
pub struct ScriptedNames {
    answers: VecDeque<String>,
}

impl ScriptedNames {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl NameSource for ScriptedNames {
    fn ask(&mut self, _question: &str) -> Option<String> {
        self.answers.pop_front().and_then(|a| non_empty(&a))
    }
}

fn non_empty(answer: &str) -> Option<String> {
    let trimmed = answer.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Resource holding the active name source.
#[derive(Resource)]
pub struct Prompt(Box<dyn NameSource>);

impl Prompt {
    pub fn new(source: impl NameSource + 'static) -> Self {
        Self(Box::new(source))
    }

    pub fn stdin() -> Self {
        Self::new(StdinNames)
    }

    pub fn ask(&mut self, question: &str) -> Option<String> {
        self.0.ask(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_in_order() {
        let mut prompt = Prompt::new(ScriptedNames::new(["first", "  second \n"]));
        assert_eq!(prompt.ask("?"), Some("first".to_string()));
        assert_eq!(prompt.ask("?"), Some("second".to_string()));
        assert_eq!(prompt.ask("?"), None);
    }

    #[test]
    fn test_blank_answer_cancels() {
        let mut prompt = Prompt::new(ScriptedNames::new(["   "]));
        assert_eq!(prompt.ask("?"), None);
    }
}
