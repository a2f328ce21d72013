use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::battery;
use crate::models::battery_stats::BatteryStats;

struct ReplState {
    log_dir: PathBuf,
    last: BatteryStats,
}

pub fn run(log_dir: &Path) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to start interactive session: {}", e);
            return;
        }
    };
    let mut state = ReplState {
        log_dir: log_dir.to_path_buf(),
        last: BatteryStats::new(),
    };

    println!("battstats interactive session. Type 'help' for commands.");
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                let input = line.trim();

                if input == "exit" {
                    println!("Goodbye!");
                    break;
                }

                let result = evaluate_input(input, &mut state);
                println!("{}", result);
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
}

fn evaluate_input(input: &str, state: &mut ReplState) -> String {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        ["read"] => {
            state.last = battery::scan_log_dir(&state.log_dir);
            if state.last.is_valid() {
                format!("{}", state.last)
            } else {
                "No battery data found. Run dumpstate via SysDump (*#9900#) first.".to_string()
            }
        }
        ["show"] => {
            if state.last.is_valid() {
                format!("{}", state.last)
            } else {
                "Nothing read yet. Use 'read'.".to_string()
            }
        }
        ["dir"] => format!("Log directory is {}", state.log_dir.display()),
        ["dir", path] => {
            state.log_dir = PathBuf::from(path);
            format!("Log directory set to {}", state.log_dir.display())
        }
        [] | ["help"] => help_text(),
        _ => format!("Unknown command: '{}'. Type 'help'.", input),
    }
}

fn help_text() -> String {
    [
        "read        : Scan the log directory for battery stats.",
        "show        : Print the last scanned record.",
        "dir [path]  : Show or change the log directory.",
        "exit        : Leave the session.",
    ]
    .join("\n")
}
