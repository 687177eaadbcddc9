//! Syllog REPL - Interactive environment for categorical syllogisms
//!
//! Usage: syllog [source_files...]
//!
//! Commands:
//!   :help       - Show help
//!   :quit       - Exit REPL
//!   :show       - Show statements, diagrams, and verdict
//!   :check      - Show just the verdict
//!   :table      - List all valid forms
//!   :export     - Dump diagrams and verdict as JSON
//!   :set X V    - Set major/minor/conclusion/figure
//!   :clear      - Clear screen
//!   :reset      - Reset to Barbara

use std::fs;
use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use syllog::repl::{format_show, format_table, format_verdict, InputResult, MetaCommand, ReplState};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = "syllog> ";

/// Parse command line arguments.
///
/// Usage: syllog [source_files...]
///
/// Options:
///   -h, --help         Show help and exit
///   -v, --version      Show version and exit
fn parse_args(args: &[String]) -> Vec<PathBuf> {
    let mut source_files = Vec::new();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("syllog v{} - Syllogism REPL", VERSION);
                println!();
                println!("Usage: syllog [OPTIONS] [source_files...]");
                println!();
                println!("Options:");
                println!("  -h, --help         Show this help message");
                println!("  -v, --version      Show version");
                println!();
                println!("Examples:");
                println!("  syllog                     Start REPL");
                println!("  syllog forms.syl           Run forms.syl, then start REPL");
                std::process::exit(0);
            }
            "-v" | "--version" => {
                println!("syllog v{}", VERSION);
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", arg);
                eprintln!("Try 'syllog --help' for usage information");
                std::process::exit(1);
            }
            _ => {
                source_files.push(PathBuf::from(arg));
            }
        }
    }

    source_files
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let source_files = parse_args(&args);

    println!("syllog v{} - Syllogism REPL", VERSION);
    println!("Type :help for help, :quit to exit\n");

    let mut state = ReplState::new();

    for source_file in &source_files {
        handle_source(&mut state, source_file);
    }

    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), DefaultHistory> =
        Editor::with_config(config).expect("Failed to create editor");

    let history_path = history_path();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => match state.process_line(&line) {
                InputResult::MetaCommand(cmd) => {
                    if !handle_command(&mut state, cmd) {
                        break; // :quit
                    }
                }
                InputResult::Statements(source) => {
                    handle_statements(&mut state, &source);
                }
                InputResult::Empty => {}
            },
            Err(ReadlineError::Interrupted) => {
                println!("Use :quit or Ctrl-D to exit");
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = rl.save_history(path);
    }
}

/// History lives next to the user's other dotfiles
fn history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".syllog_history"))
}

/// Handle a meta-command. Returns false if we should exit.
fn handle_command(state: &mut ReplState, cmd: MetaCommand) -> bool {
    match cmd {
        MetaCommand::Help(topic) => {
            print_help(topic.as_deref());
        }
        MetaCommand::Quit => {
            println!("Goodbye!");
            return false;
        }
        MetaCommand::Clear => {
            // ANSI escape to clear screen
            print!("\x1B[2J\x1B[H");
        }
        MetaCommand::Reset => {
            state.reset();
            println!("State reset to AAA-1.");
        }
        MetaCommand::Show => {
            print!("{}", format_show(state));
        }
        MetaCommand::Check => {
            println!("{}", format_verdict(&state.analysis()));
        }
        MetaCommand::Table => {
            print!("{}", format_table());
        }
        MetaCommand::Export => match state.export_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        },
        MetaCommand::Set { target, value } => match state.set_part(&target, &value) {
            Ok(()) => println!("{}", format_verdict(&state.analysis())),
            Err(e) => eprintln!("Error: {}", e),
        },
        MetaCommand::Source(path) => {
            handle_source(state, &path);
        }
        MetaCommand::Unknown(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Type :help for available commands");
        }
    }
    true
}

/// Handle statement-language input
fn handle_statements(state: &mut ReplState, source: &str) {
    match state.execute_text(source) {
        Ok(analysis) => {
            println!("{}", format_verdict(&analysis));
        }
        Err(e) => {
            eprintln!("{}", e);
        }
    }
}

/// Run each non-empty, non-comment line of a file as REPL input
fn handle_source(state: &mut ReplState, path: &Path) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            return;
        }
    };

    for line in content.lines() {
        match state.process_line(line) {
            InputResult::MetaCommand(cmd) => {
                if cmd == MetaCommand::Quit {
                    return;
                }
                handle_command(state, cmd);
            }
            InputResult::Statements(source) => {
                handle_statements(state, &source);
            }
            InputResult::Empty => {}
        }
    }
}

/// Print help message
fn print_help(topic: Option<&str>) {
    match topic {
        None => {
            println!("Syllog REPL Commands:");
            println!();
            println!("  :help [topic]    Show help (topics: syntax, examples)");
            println!("  :quit            Exit the REPL");
            println!("  :show            Statements, diagrams, and verdict");
            println!("  :check           Just the verdict");
            println!("  :table           List every valid form out of all 256");
            println!("  :export          Current diagrams and verdict as JSON");
            println!("  :set <t> <v>     Set major/minor/conclusion (A,E,I,O) or figure (1-4)");
            println!("  :source <file>   Run a file of statements");
            println!("  :clear           Clear the screen");
            println!("  :reset           Reset to Barbara (AAA-1)");
            println!();
            println!("Anything not starting with ':' is parsed as statements or a form code.");
        }
        Some("syntax") => {
            println!("Statement syntax:");
            println!();
            println!("  all <term> are <term>        A  (universal affirmative)");
            println!("  no <term> are <term>         E  (universal negative)");
            println!("  some <term> are <term>       I  (particular affirmative)");
            println!("  some <term> are not <term>   O  (particular negative)");
            println!();
            println!("A syllogism is three statements separated by ';', ',' or '.',");
            println!("with an optional 'therefore' before the conclusion. The figure");
            println!("is derived from where the middle term appears.");
            println!();
            println!("A bare form code like AAA-1 sets mood and figure directly.");
        }
        Some("examples") => {
            println!("Examples:");
            println!();
            println!("  all men are mortal; all greeks are men; therefore all greeks are mortal");
            println!("  no fish are mammals, some pets are fish, so some pets are not mammals");
            println!("  EIO-2");
            println!("  :set figure 3");
            println!("  :show");
        }
        Some(other) => {
            println!("No help for '{}' (topics: syntax, examples)", other);
        }
    }
}
