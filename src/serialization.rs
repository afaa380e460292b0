use crate::wagner_fischer::{Edit, EditKind};
use std::fmt;
use thiserror::Error;

/// Renders edits in the line-oriented script format: one edit per line,
/// a sigil for the action, the index, a space and the value. Newlines and
/// backslashes inside a value are written as `\n` and `\\`.
///
/// ```text
/// ~0 k
/// ~4 e
/// -6 g
/// ```
pub trait ToScript {
    fn to_script(&self) -> String;
}

pub trait FromScript: Sized {
    fn from_script(s: &str) -> Result<Self, ScriptError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unexpected token: {0:?}")]
    UnexpectedToken(String),
    #[error("invalid index in {0:?}")]
    InvalidIndex(String),
    #[error("missing separator in {0:?}")]
    MissingSeparator(String),
    #[error("invalid escape in {0:?}")]
    InvalidEscape(String),
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn unescape(line: &str, value: &str) -> Result<String, ScriptError> {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => unescaped.push('\\'),
            Some('n') => unescaped.push('\n'),
            _ => return Err(ScriptError::InvalidEscape(line.to_string())),
        }
    }
    Ok(unescaped)
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditKind::Insert => "Insert",
            EditKind::Substitute => "Substitute",
            EditKind::Delete => "Delete",
            EditKind::Move => "Move",
        };
        f.write_str(name)
    }
}

impl<T: fmt::Display> fmt::Display for Edit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edit: <{} \"{}\" at {}>",
            self.action(),
            self.value(),
            self.destination()
        )
    }
}

impl EditKind {
    fn sigil(self) -> char {
        match self {
            EditKind::Insert => '+',
            EditKind::Substitute => '~',
            EditKind::Delete => '-',
            EditKind::Move => '>',
        }
    }

    fn from_sigil(c: char) -> Option<Self> {
        match c {
            '+' => Some(EditKind::Insert),
            '~' => Some(EditKind::Substitute),
            '-' => Some(EditKind::Delete),
            '>' => Some(EditKind::Move),
            _ => None,
        }
    }
}

impl<T: ToString> ToScript for Edit<T> {
    fn to_script(&self) -> String {
        format!(
            "{}{} {}",
            self.action().sigil(),
            self.destination(),
            escape(&self.value().to_string())
        )
    }
}

impl<T: ToString> ToScript for [Edit<T>] {
    fn to_script(&self) -> String {
        self.iter()
            .map(|e| e.to_script())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl FromScript for Edit<String> {
    fn from_script(s: &str) -> Result<Self, ScriptError> {
        let mut chars = s.chars();
        let action = chars
            .next()
            .and_then(EditKind::from_sigil)
            .ok_or_else(|| ScriptError::UnexpectedToken(s.to_string()))?;
        let (index, value) = chars
            .as_str()
            .split_once(' ')
            .ok_or_else(|| ScriptError::MissingSeparator(s.to_string()))?;
        let destination = index
            .parse::<usize>()
            .map_err(|_| ScriptError::InvalidIndex(s.to_string()))?;
        Ok(Edit::new(action, unescape(s, value)?, destination))
    }
}

impl FromScript for Vec<Edit<String>> {
    fn from_script(s: &str) -> Result<Self, ScriptError> {
        if s.is_empty() {
            return Ok(vec![]);
        }

        // can't use `.lines()`: a value ending in '\r' would lose it
        s.split('\n').map(Edit::<String>::from_script).collect()
    }
}
