//! Render command parser.
//!
//! Parses the line commands read from stdin into structured `Command`
//! variants that the binary's main loop dispatches on. Arguments run to the
//! end of the line, so paths may contain spaces.

use std::path::PathBuf;

use tracing::warn;

/// A parsed render command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; replies `readyok`.
    IsReady,

    /// Clear, then draw the gamestate JSON at `path`.
    Gamestate { path: PathBuf },

    /// Clear, then draw an orders-phase test case: its starting board and its
    /// adjudicated orders.
    OrdersTest { path: PathBuf },

    /// Draw a JSON list of orders on top of the current overlay.
    Orders { path: PathBuf },

    /// Draw orders written in DATC notation on top of the current overlay.
    Notation { path: PathBuf },

    /// Remove everything drawn so far.
    Clear,

    /// Write the rendered document to `path`.
    Write { path: PathBuf },

    /// Print the rendered document to stdout.
    Print,

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines, unknown commands, and commands missing
/// their argument. The latter two are logged.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (name, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (trimmed, ""),
    };

    match name {
        "isready" => Some(Command::IsReady),
        "clear" => Some(Command::Clear),
        "print" => Some(Command::Print),
        "quit" => Some(Command::Quit),

        "gamestate" => path_arg(name, arg).map(|path| Command::Gamestate { path }),
        "orderstest" => path_arg(name, arg).map(|path| Command::OrdersTest { path }),
        "orders" => path_arg(name, arg).map(|path| Command::Orders { path }),
        "notation" => path_arg(name, arg).map(|path| Command::Notation { path }),
        "write" => path_arg(name, arg).map(|path| Command::Write { path }),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

fn path_arg(command: &str, arg: &str) -> Option<PathBuf> {
    if arg.is_empty() {
        warn!(command, "malformed command: expected '{} <path>'", command);
        return None;
    }
    Some(PathBuf::from(arg))
}
