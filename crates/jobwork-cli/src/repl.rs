//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Supplier names typed after `record` or `suggest` are completed from the
//! directory: Tab lists matches and the best match is shown as an inline hint.

use crate::cli::{ClearArgs, FormatArgs, FormatKind, RecordArgs, SuggestArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use jobwork_domain::{Clock, KeyValueStore};
use jobwork_store::SupplierDirectory;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::path::PathBuf;

/// Commands whose argument is a supplier name.
const NAME_COMMANDS: [&str; 2] = ["record", "suggest"];

/// Line-editor helper that owns the directory and serves completions from it.
pub struct SupplierHelper<S, C> {
    directory: SupplierDirectory<S, C>,
}

impl<S: KeyValueStore, C: Clock> SupplierHelper<S, C> {
    /// Wrap a directory.
    pub fn new(directory: SupplierDirectory<S, C>) -> Self {
        Self { directory }
    }

    /// Completion candidates for the supplier name under the cursor.
    fn candidates(&self, line: &str, pos: usize) -> Option<(usize, Vec<String>)> {
        let (start, query) = name_argument(line, pos)?;
        Some((start, self.directory.suggest(query)))
    }
}

impl<S: KeyValueStore, C: Clock> Completer for SupplierHelper<S, C> {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(self.candidates(line, pos).unwrap_or((pos, Vec::new())))
    }
}

impl<S: KeyValueStore, C: Clock> Hinter for SupplierHelper<S, C> {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (start, suggestions) = self.candidates(line, pos)?;
        let typed = &line[start..pos];
        suggestions
            .iter()
            .find_map(|name| completion_suffix(name, typed))
    }
}

impl<S: KeyValueStore, C: Clock> Highlighter for SupplierHelper<S, C> {}

impl<S: KeyValueStore, C: Clock> Validator for SupplierHelper<S, C> {}

impl<S: KeyValueStore, C: Clock> Helper for SupplierHelper<S, C> {}

/// Locate the supplier-name argument of a `record`/`suggest` line.
///
/// Returns the byte offset where the argument starts and the text typed so
/// far, or `None` when the cursor is not in such an argument.
fn name_argument(line: &str, pos: usize) -> Option<(usize, &str)> {
    let before = line.get(..pos)?;
    let (command, rest) = before.trim_start().split_once(char::is_whitespace)?;
    if !NAME_COMMANDS.contains(&command.to_lowercase().as_str()) {
        return None;
    }

    // The argument is a suffix of `before`, whatever width the separator had
    let argument = rest.trim_start();
    Some((pos - argument.len(), argument))
}

/// The part of `name` that remains to be typed after `typed`.
fn completion_suffix(name: &str, typed: &str) -> Option<String> {
    if typed.trim().is_empty() || name.len() <= typed.len() {
        return None;
    }
    let (head, tail) = (name.get(..typed.len())?, name.get(typed.len()..)?);
    (head.to_lowercase() == typed.to_lowercase()).then(|| tail.to_string())
}

/// Run the interactive REPL.
pub fn run_repl<S: KeyValueStore, C: Clock>(
    directory: SupplierDirectory<S, C>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Jobwork REPL - Type 'help' for commands, 'exit' to quit")
    );
    if !directory.is_available() {
        println!(
            "{}",
            formatter.warning("Supplier storage is unavailable; suggestions are disabled")
        );
    }
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor: Editor<SupplierHelper<S, C>, DefaultHistory> =
        Editor::with_config(editor_config)?;
    editor.set_helper(Some(SupplierHelper::new(directory)));

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("jobwork> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                let Some(helper) = editor.helper_mut() else {
                    break;
                };

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, &mut helper.directory, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Record(RecordArgs),
    List,
    Suggest(SuggestArgs),
    Clear(ClearArgs),
    Format(FormatArgs),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    let args: Vec<String> = parts[1..].iter().map(|s| s.to_string()).collect();
    match parts[0].to_lowercase().as_str() {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "list" | "ls" => Ok(ReplCommand::List),
        "record" => {
            if args.is_empty() {
                return Err(CliError::InvalidInput("Usage: record <supplier name>".to_string()));
            }
            Ok(ReplCommand::Record(RecordArgs { name: args }))
        }
        "suggest" => {
            if args.is_empty() {
                return Err(CliError::InvalidInput("Usage: suggest <partial name>".to_string()));
            }
            Ok(ReplCommand::Suggest(SuggestArgs { query: args }))
        }
        "clear" => Ok(ReplCommand::Clear(ClearArgs {
            yes: args.first().map(|a| a == "-y" || a == "--yes").unwrap_or(false),
        })),
        "format" => parse_format_command(&parts[1..]),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

fn parse_format_command(args: &[&str]) -> Result<ReplCommand> {
    let usage = || CliError::InvalidInput("Usage: format <currency|quantity> <value>".to_string());
    if args.len() != 2 {
        return Err(usage());
    }

    let kind = match args[0].to_lowercase().as_str() {
        "currency" | "amount" => FormatKind::Currency,
        "quantity" | "qty" => FormatKind::Quantity,
        _ => return Err(usage()),
    };
    let value = args[1]
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| CliError::InvalidInput(format!("Not a number: {}", args[1])))?;

    Ok(ReplCommand::Format(FormatArgs { kind, value }))
}

/// Execute a REPL command.
fn execute_repl_command<S: KeyValueStore, C: Clock>(
    cmd: ReplCommand,
    directory: &mut SupplierDirectory<S, C>,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Record(args) => commands::execute_record(args, directory, formatter),
        ReplCommand::List => commands::execute_list(directory, formatter),
        ReplCommand::Suggest(args) => commands::execute_suggest(args, directory, formatter),
        ReplCommand::Clear(args) => commands::execute_clear(args, directory, formatter),
        ReplCommand::Format(args) => commands::execute_format(args, formatter),
        ReplCommand::Exit | ReplCommand::Help => Ok(()),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::home()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  record <name>                  - Record a supplier (Tab completes names)");
    println!("  suggest <partial>              - Show matching suppliers");
    println!("  list                           - Show the ranked directory");
    println!("  clear [-y]                     - Erase the directory");
    println!("  format <currency|quantity> <v> - Format a value for display");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
