//! The interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use manor_engine::session::{FAREWELL, INTRO};
use manor_engine::{Session, SessionConfig};
use tracing::{debug, warn};

/// Start-up choices that are not part of the session itself.
pub struct Options {
    /// Load the save file before the first prompt.
    pub resume: bool,
    /// Print the opening narration.
    pub intro: bool,
}

/// Play until the story ends or input runs out.
pub fn run(config: SessionConfig, options: Options) -> Result<(), String> {
    let mut session = Session::new(config);

    if options.intro {
        println!("{INTRO}\n");
    }

    if options.resume {
        match session.load() {
            Ok(message) => println!("{message}\n"),
            Err(e) => {
                warn!(
                    path = %session.config().save_path.display(),
                    error = %e,
                    "could not resume saved game"
                );
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        // Undecodable bytes become an unrecognised command, not a fatal error.
        let line = String::from_utf8_lossy(&buf);
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }

        if session.is_over() {
            debug!("story over");
            println!("{FAREWELL}");
            break;
        }
    }

    Ok(())
}
