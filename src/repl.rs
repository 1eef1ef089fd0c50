use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::config::Config;
use crate::interpreter::{report, Error, Interpreter};

/// Read lines until end of input, printing each result in inspect form.
///
/// Evaluation errors are reported and the session continues; only editor
/// failures end it early.
pub fn run(interp: &mut Interpreter, config: &Config) -> Result<(), Error> {
    let mut editor = DefaultEditor::new()?;
    if let Some(path) = &config.history_file {
        if let Err(err) = editor.load_history(path) {
            warn!(path = %path.display(), %err, "could not load history");
        }
    }

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                match interp.run(&line) {
                    Ok(Some(val)) => println!("=> {}", interp.inspect(&val)),
                    Ok(None) => {}
                    Err(err) => eprintln!("{}", report(&err, &line)),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("leaving repl");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(err) = editor.save_history(path) {
            warn!(path = %path.display(), %err, "could not save history");
        }
    }
    Ok(())
}
