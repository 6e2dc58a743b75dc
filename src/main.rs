//! Address Book - Main entry point
//!
//! Runs the interactive command loop over stdin. State is loaded from the
//! configured file at startup and written back on `exit` or end of input.

use address_book::{AddressBook, Command, Config, Controller};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so command output stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Opening address book at {}", config.book_path.display());

    let book = AddressBook::open(config.book_path.clone()).with_context(|| {
        format!(
            "Failed to load address book from {}",
            config.book_path.display()
        )
    })?;
    let mut controller = Controller::new(book, config.page_size);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Welcome to the Address Book CLI!")?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // End of input saves just like `exit`.
            let reply = controller.execute(Command::Exit).map_err(|e| {
                error!("Failed to save address book: {}", e);
                e
            })?;
            writeln!(stdout)?;
            for line in reply.lines {
                writeln!(stdout, "{}", line)?;
            }
            break;
        };

        let reply = controller.handle_line(&line?);
        for line in &reply.lines {
            writeln!(stdout, "{}", line)?;
        }
        if reply.exit {
            break;
        }
    }

    info!("Address book closed");
    Ok(())
}
