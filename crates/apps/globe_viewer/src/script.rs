//! Line-oriented input scripts for headless sessions.
//!
//! ```text
//! # comments and blank lines are ignored
//! key f
//! type 37.7749,-122.4194
//! enter
//! frame
//! down
//! drag 12 -4
//! up
//! scroll up
//! key s
//! quit
//! ```

use std::fmt;

use runtime::InputEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptLine {
    Events(Vec<InputEvent>),
    /// Ends the current tick.
    Frame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    UnknownCommand(String),
    BadArgument { command: &'static str, arg: String },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            ScriptError::BadArgument { command, arg } => {
                write!(f, "bad argument for {command}: {arg:?}")
            }
        }
    }
}

impl std::error::Error for ScriptError {}

/// `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<ScriptLine>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let events = match cmd {
        "frame" => return Ok(Some(ScriptLine::Frame)),
        "down" => vec![InputEvent::PointerDown],
        "up" => vec![InputEvent::PointerUp],
        "drag" => {
            let (dx, dy) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                ScriptError::BadArgument {
                    command: "drag",
                    arg: rest.to_string(),
                }
            })?;
            vec![InputEvent::PointerDrag {
                dx: parse_number("drag", dx)?,
                dy: parse_number("drag", dy)?,
            }]
        }
        "scroll" => match rest {
            "up" => vec![InputEvent::ScrollUp],
            "down" => vec![InputEvent::ScrollDown],
            other => {
                return Err(ScriptError::BadArgument {
                    command: "scroll",
                    arg: other.to_string(),
                });
            }
        },
        "key" => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => vec![InputEvent::Char(c)],
                _ => {
                    return Err(ScriptError::BadArgument {
                        command: "key",
                        arg: rest.to_string(),
                    });
                }
            }
        }
        "type" => rest.chars().map(InputEvent::Char).collect(),
        "backspace" => vec![InputEvent::Backspace],
        "enter" => vec![InputEvent::Confirm],
        "quit" => vec![InputEvent::Quit],
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(ScriptLine::Events(events)))
}

fn parse_number(command: &'static str, text: &str) -> Result<f64, ScriptError> {
    text.trim()
        .parse()
        .map_err(|_| ScriptError::BadArgument {
            command,
            arg: text.to_string(),
        })
}
