//! Go Text Protocol (GTP) front end.
//!
//! Lets a GTP controller or a person at a terminal drive a [`BoardEngine`].
//! Only the rules are implemented, so there is no `genmove` and passing is
//! not accepted.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start over on a new board (9 to 19)
//! - `clear_board` - Reset the board to empty, Black to move
//! - `play <color> <vertex>` - Place a stone of the given color
//! - `showboard` - Print the board
//! - `list_groups` - Print every group with its stones and liberties
//! - `turn` - Print the color to move

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::{debug, info};

use crate::board::{Board, Color, Point};
use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::engine::BoardEngine;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "known_command",
    "list_commands",
    "list_groups",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "turn",
    "version",
];

/// GTP session state.
pub struct GtpEngine {
    engine: BoardEngine,
}

impl GtpEngine {
    pub fn new(size: usize) -> Self {
        Self {
            engine: BoardEngine::new(size),
        }
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
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
            debug!("GTP command: {command} {args:?}");

            let (success, message) = self.execute(&command, args);
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
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) => {
                        self.engine = BoardEngine::new(size);
                        (true, String::new())
                    }
                    Ok(_) => (false, "unacceptable size".to_string()),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.engine = BoardEngine::new(self.engine.size());
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = Color::parse(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                if args[1].eq_ignore_ascii_case("pass") {
                    return (false, "pass is not supported".to_string());
                }
                let Some(pt) = self.engine.board().parse_vertex(args[1]) else {
                    return (false, "invalid vertex".to_string());
                };
                match self.engine.play_as(pt, color) {
                    Ok(outcome) => {
                        if !outcome.captured.is_empty() {
                            let board = self.engine.board();
                            let captured = format_points(board, &outcome.captured);
                            info!("{color} {} captured {captured}", args[1]);
                        }
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string().to_lowercase()),
                }
            }

            "showboard" => (true, format!("\n{}", self.engine.board())),

            "list_groups" => {
                let board = self.engine.board();
                let lines: Vec<String> = self
                    .engine
                    .groups()
                    .iter()
                    .enumerate()
                    .map(|(i, g)| {
                        format!(
                            "Group {} ({}): stones {} liberties {}",
                            i + 1,
                            g.color,
                            format_points(board, g.stones.iter()),
                            format_points(board, g.liberties.iter()),
                        )
                    })
                    .collect();
                (true, lines.join("\n"))
            }

            "turn" => (true, self.engine.current_turn().to_string().to_lowercase()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

/// Space-separated vertex names.
fn format_points<'a>(board: &Board, points: impl IntoIterator<Item = &'a Point>) -> String {
    points
        .into_iter()
        .filter_map(|&pt| board.vertex_name(pt))
        .collect::<Vec<_>>()
        .join(" ")
}
