//! Interactive shell over an XrefStore
//!
//! Reads one command per line, runs it against the store and prints the
//! result. A failing command prints `Error: <message>` and the loop goes on.

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info, warn};

use crate::command::{self, Command, ParseError};
use crate::config::Config;
use crate::error::XrefError;
use crate::store::{TextStats, XrefStore};

/// What a single input line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to print (blank line)
    Silent,
    /// Output for stdout
    Print(String),
    /// Failure message for stderr, without the `Error:` prefix
    Fail(String),
    /// Leave the shell
    Quit,
}

/// Successful result of a command
enum Reply {
    Done,
    Content(String),
    Positions(Vec<usize>),
    Stats(TextStats),
    Names(Vec<String>),
    Help,
    Quit,
}

/// Interactive session state
pub struct ReplSession {
    store: XrefStore,
    config: Config,
}

impl ReplSession {
    /// Create a session with an empty store
    pub fn new(config: Config) -> Self {
        Self::with_store(XrefStore::new(), config)
    }

    /// Create a session over an existing store
    pub fn with_store(store: XrefStore, config: Config) -> Self {
        Self { store, config }
    }

    /// The underlying store
    pub fn store(&self) -> &XrefStore {
        &self.store
    }

    /// Mutable access to the underlying store
    pub fn store_mut(&mut self) -> &mut XrefStore {
        &mut self.store
    }

    /// Run the readline loop until `exit`, `quit` or Ctrl-D
    pub fn run(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        if let Some(history) = &self.config.history_file
            && rl.load_history(history).is_err()
        {
            debug!(path = %history.display(), "No history loaded");
        }

        info!(texts = self.store.len(), "Starting interactive shell");

        loop {
            match rl.readline(&self.config.prompt) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);

                    match self.handle_line(input) {
                        Outcome::Silent => {}
                        Outcome::Print(text) => println!("{}", text),
                        Outcome::Fail(message) => eprintln!("{} {}", "Error:".red(), message),
                        Outcome::Quit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        self.save_history(&mut rl);
        Ok(())
    }

    fn save_history(&self, rl: &mut DefaultEditor) {
        let Some(history) = &self.config.history_file else {
            return;
        };
        if let Some(parent) = history.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), error = %e, "Failed to create history directory");
            return;
        }
        if let Err(e) = rl.save_history(history) {
            warn!(path = %history.display(), error = %e, "Failed to save history");
        }
    }

    /// Parse and run one line
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let command = match command::parse(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return Outcome::Silent,
            Err(ParseError::UnknownCommand(cmd)) => return Outcome::Print(format!("Unknown command: {}", cmd)),
            Err(e) => return Outcome::Fail(e.to_string()),
        };

        debug!(?command, "Executing command");
        match self.execute(command) {
            Ok(Reply::Quit) => Outcome::Quit,
            Ok(reply) => Outcome::Print(render(reply)),
            Err(e) => {
                debug!(error = %e, "Command failed");
                Outcome::Fail(e.to_string())
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<Reply, XrefError> {
        let store = &mut self.store;
        let reply = match command {
            Command::Build { name, content } => {
                store.build(&name, &content)?;
                Reply::Done
            }
            Command::Reconstruct { name, output: None } => Reply::Content(store.reconstruct(&name)?.to_string()),
            Command::Reconstruct {
                name,
                output: Some(output),
            } => {
                store.reconstruct_to(&name, &output)?;
                Reply::Done
            }
            Command::Concat {
                new_name,
                first,
                second,
            } => {
                store.concat(&new_name, &first, &second)?;
                Reply::Done
            }
            Command::Merge {
                new_name,
                first,
                second,
            } => {
                store.merge(&new_name, &first, &second)?;
                Reply::Done
            }
            Command::Search { name, word } => Reply::Positions(store.search(&name, &word)?.to_vec()),
            Command::Replace {
                name,
                old_word,
                new_word,
            } => {
                store.replace(&name, &old_word, &new_word)?;
                Reply::Done
            }
            Command::Insert { name, position, word } => {
                store.insert(&name, position, &word)?;
                Reply::Done
            }
            Command::Remove { name, start, end } => {
                store.remove(&name, start, end)?;
                Reply::Done
            }
            Command::DoubleReplace {
                text1,
                text2,
                word1,
                word2,
            } => {
                store.double_replace(&text1, &text2, &word1, &word2)?;
                Reply::Done
            }
            Command::Import { path } => {
                store.import(&path)?;
                Reply::Done
            }
            Command::Export { name, output } => {
                store.export(&name, &output)?;
                Reply::Done
            }
            Command::Stats { name } => Reply::Stats(store.stats_with_limit(&name, self.config.top_words)?),
            Command::List => Reply::Names(store.names().into_iter().map(str::to_string).collect()),
            Command::Delete { name } => {
                store.delete(&name)?;
                Reply::Done
            }
            Command::Help => Reply::Help,
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }
}

fn render(reply: Reply) -> String {
    match reply {
        Reply::Done => "OK".to_string(),
        Reply::Content(content) => content,
        Reply::Positions(positions) => positions
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        Reply::Stats(stats) => {
            let mut lines = vec![
                format!("Unique words: {}", stats.unique_words),
                format!("Total words: {}", stats.total_words),
            ];
            for (word, count) in stats.top_words {
                lines.push(format!("  {}: {}", word, count));
            }
            lines.join("\n")
        }
        Reply::Names(names) if names.is_empty() => "No texts".to_string(),
        Reply::Names(names) => names.join("\n"),
        Reply::Help => help_text(),
        Reply::Quit => String::new(),
    }
}

fn help_text() -> String {
    let commands = [
        ("build <name> <content...>", "Create a text from the rest of the line"),
        ("reconstruct <name> [file]", "Print content, or write the index to a new file"),
        ("concat <new> <a> <b>", "Join two texts and re-index"),
        ("merge <new> <a> <b>", "Join two texts by shifting the second index"),
        ("search <name> <word>", "Positions of a word"),
        ("replace <name> <old> <new>", "Replace every occurrence of a word"),
        ("insert <name> <pos> <word>", "Insert a word at a token position"),
        ("remove <name> <start> <end>", "Remove an inclusive token range"),
        ("double_replace <t1> <t2> <w1> <w2>", "Swap two words across two texts"),
        ("import <file>", "Build a text from a file, named after the file"),
        ("export <name> <file>", "Write the index to a file"),
        ("stats <name>", "Word counts and most frequent words"),
        ("list", "List texts"),
        ("delete <name>", "Drop a text"),
        ("exit | quit", "Leave the shell"),
    ];
    let mut out = String::from("Available Commands:");
    for (usage, about) in commands {
        out.push_str(&format!("\n  {:36} {}", usage, about));
    }
    out
}
