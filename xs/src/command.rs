//! Line command parsing
//!
//! One input line maps to one `Command`. Arguments are whitespace separated
//! except for `build`, whose content is the rest of the line as typed, and
//! file paths, which also run to the end of the line.

use std::path::PathBuf;

use thiserror::Error;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Build { name: String, content: String },
    Reconstruct { name: String, output: Option<PathBuf> },
    Concat { new_name: String, first: String, second: String },
    Merge { new_name: String, first: String, second: String },
    Search { name: String, word: String },
    Replace { name: String, old_word: String, new_word: String },
    Insert { name: String, position: usize, word: String },
    Remove { name: String, start: usize, end: usize },
    DoubleReplace {
        text1: String,
        text2: String,
        word1: String,
        word2: String,
    },
    Import { path: PathBuf },
    Export { name: String, output: PathBuf },
    Stats { name: String },
    List,
    Delete { name: String },
    Help,
    Quit,
}

/// Errors from parsing a command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: missing argument <{arg}>")]
    MissingArgument { command: &'static str, arg: &'static str },

    #[error("{command}: unexpected argument '{value}'")]
    UnexpectedArgument { command: &'static str, value: String },

    #[error("{command}: <{arg}> must be a non-negative integer, got '{value}'")]
    InvalidNumber {
        command: &'static str,
        arg: &'static str,
        value: String,
    },
}

/// Split off the first whitespace-delimited word, returning it and the rest
fn split_first(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

/// File argument spanning the rest of the line, spaces included
fn trailing_path(command: &'static str, rest: &str) -> Result<PathBuf, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument { command, arg: "file" });
    }
    Ok(PathBuf::from(rest))
}

/// Positional argument reader for fixed-arity commands
struct Args<'a> {
    command: &'static str,
    parts: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn new(command: &'static str, rest: &'a str) -> Self {
        Self {
            command,
            parts: rest.split_whitespace(),
        }
    }

    fn string(&mut self, arg: &'static str) -> Result<String, ParseError> {
        self.parts.next().map(str::to_string).ok_or(ParseError::MissingArgument {
            command: self.command,
            arg,
        })
    }

    fn number(&mut self, arg: &'static str) -> Result<usize, ParseError> {
        let value = self.string(arg)?;
        value.parse().map_err(|_| ParseError::InvalidNumber {
            command: self.command,
            arg,
            value,
        })
    }

    fn finish<T>(mut self, command: T) -> Result<T, ParseError> {
        match self.parts.next() {
            Some(extra) => Err(ParseError::UnexpectedArgument {
                command: self.command,
                value: extra.to_string(),
            }),
            None => Ok(command),
        }
    }
}

/// Parse one input line
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let (cmd, rest) = split_first(line.trim());
    match cmd {
        "" => Err(ParseError::Empty),
        "build" => {
            let (name, content) = split_first(rest);
            if name.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "build",
                    arg: "name",
                });
            }
            if content.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "build",
                    arg: "content",
                });
            }
            Ok(Command::Build {
                name: name.to_string(),
                content: content.to_string(),
            })
        }
        "reconstruct" => {
            let (name, file) = split_first(rest);
            if name.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "reconstruct",
                    arg: "name",
                });
            }
            let output = (!file.is_empty()).then(|| PathBuf::from(file));
            Ok(Command::Reconstruct {
                name: name.to_string(),
                output,
            })
        }
        "concat" | "merge" => {
            let command = if cmd == "concat" { "concat" } else { "merge" };
            let mut args = Args::new(command, rest);
            let new_name = args.string("new")?;
            let first = args.string("first")?;
            let second = args.string("second")?;
            let parsed = if command == "concat" {
                Command::Concat {
                    new_name,
                    first,
                    second,
                }
            } else {
                Command::Merge {
                    new_name,
                    first,
                    second,
                }
            };
            args.finish(parsed)
        }
        "search" => {
            let mut args = Args::new("search", rest);
            let name = args.string("name")?;
            let word = args.string("word")?;
            args.finish(Command::Search { name, word })
        }
        "replace" => {
            let mut args = Args::new("replace", rest);
            let name = args.string("name")?;
            let old_word = args.string("old")?;
            let new_word = args.string("new")?;
            args.finish(Command::Replace {
                name,
                old_word,
                new_word,
            })
        }
        "insert" => {
            let mut args = Args::new("insert", rest);
            let name = args.string("name")?;
            let position = args.number("position")?;
            let word = args.string("word")?;
            args.finish(Command::Insert { name, position, word })
        }
        "remove" => {
            let mut args = Args::new("remove", rest);
            let name = args.string("name")?;
            let start = args.number("start")?;
            let end = args.number("end")?;
            args.finish(Command::Remove { name, start, end })
        }
        "double_replace" => {
            let mut args = Args::new("double_replace", rest);
            let text1 = args.string("text1")?;
            let text2 = args.string("text2")?;
            let word1 = args.string("word1")?;
            let word2 = args.string("word2")?;
            args.finish(Command::DoubleReplace {
                text1,
                text2,
                word1,
                word2,
            })
        }
        "import" => Ok(Command::Import {
            path: trailing_path("import", rest)?,
        }),
        "export" => {
            let (name, file) = split_first(rest);
            if name.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "export",
                    arg: "name",
                });
            }
            Ok(Command::Export {
                name: name.to_string(),
                output: trailing_path("export", file)?,
            })
        }
        "stats" => {
            let mut args = Args::new("stats", rest);
            let name = args.string("name")?;
            args.finish(Command::Stats { name })
        }
        "delete" => {
            let mut args = Args::new("delete", rest);
            let name = args.string("name")?;
            args.finish(Command::Delete { name })
        }
        "list" => Args::new("list", rest).finish(Command::List),
        "help" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
