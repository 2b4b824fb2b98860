//! Go Text Protocol (GTP) front end.
//!
//! Exposes a [`Board`] to GUIs and scripts over a line protocol. There is no
//! move generator, so `genmove` is not offered; the engine only referees the
//! moves it is given and can take them back.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new board of the given size (1-25)
//! - `clear_board` - Reset the board to empty
//! - `play <color> <vertex>` - Place a stone (`pass` is accepted and ignored)
//! - `undo` - Take back the last stone
//! - `showboard` - Dump the padded board
//! - `captures <color>` - Stones captured by `color`
//!
//! ## Example
//!
//! ```
//! use gochain::gtp::GtpEngine;
//!
//! let mut engine = GtpEngine::new(9, 600);
//! let mut out = Vec::new();
//! engine.run("play black E5\nshowboard\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("= \n\n"));
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::board::{Board, Color};
use crate::constants::{MAX_GTP_SIZE, MIN_SIZE};
use crate::coord::{Vertex, parse_vertex};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "undo",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    board: Board,
    /// History depth used whenever the board is rebuilt.
    max_history: usize,
}

impl GtpEngine {
    /// Create an engine with an empty `size` board.
    pub fn new(size: usize, max_history: usize) -> Self {
        Self {
            board: Board::with_max_history(size, max_history),
            max_history,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                debug!(%command, %message, "gtp command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn parse_color(s: &str) -> Option<Color> {
        match s.to_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if (MIN_SIZE..=MAX_GTP_SIZE).contains(&size) => {
                        self.board = Board::with_max_history(size, self.max_history);
                        info!(size, "new board");
                        (true, String::new())
                    }
                    Ok(_) => (false, "unacceptable size".to_string()),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.board.clear();
                (true, String::new())
            }

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let Some(color) = Self::parse_color(color) else {
                    return (false, "invalid color".to_string());
                };
                match parse_vertex(vertex, self.board.size()) {
                    Ok(Vertex::Pass) => (true, String::new()),
                    Ok(Vertex::Play(pt)) => match self.board.place(pt, color) {
                        Ok(()) => (true, String::new()),
                        Err(err) => (false, err.to_string()),
                    },
                    Err(err) => (false, err.to_string()),
                }
            }

            "undo" => match self.board.undo() {
                Ok(()) => (true, String::new()),
                Err(err) => (false, err.to_string()),
            },

            "showboard" => (true, format!("\n{}", self.board.render().trim_end())),

            "captures" => {
                let Some(color) = args.first().and_then(|s| Self::parse_color(s)) else {
                    return (false, "invalid color".to_string());
                };
                (true, self.board.prisoners(color).to_string())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
