//! Line-oriented text protocol front-end and command loop.
//!
//! Parses commands, maintains the current game, routes `go` requests to the
//! engine and applies human moves through `GameState::play_move`. Rule
//! errors are reported as `error ...` lines and never end the session.

use std::io::{self, BufRead, Write};

use crate::engines::engine_heuristic::HeuristicEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::CheckersError;
use crate::game_state::checkers_types::{CaptureChain, Color, GameOutcome, GameState};
use crate::game_state::game_state::TurnReport;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::board_text::board_to_text;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::render_game_state;

const ENGINE_NAME: &str = "Plum Checkers";
const ENGINE_AUTHOR: &str = "plum_checkers contributors";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut protocol = ProtocolState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = protocol.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ProtocolState {
    game_state: GameState,
    engine: Box<dyn Engine>,
    debug_mode: bool,
}

impl Default for ProtocolState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolState {
    pub fn new() -> Self {
        Self::with_engine(Box::new(HeuristicEngine::default()))
    }

    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self {
            game_state: GameState::new_game(),
            engine,
            debug_mode: false,
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handles one input line; returns `true` on `quit`.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "checkers" => {
                writeln!(out, "id name {}", ENGINE_NAME)?;
                writeln!(out, "id author {}", ENGINE_AUTHOR)?;
                writeln!(
                    out,
                    "option name Difficulty type combo default medium var easy var medium var hard"
                )?;
                writeln!(out, "option name Seed type string default random")?;
                writeln!(out, "checkersok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "newgame" => {
                self.game_state = GameState::new_game();
                self.engine.new_game();
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "error position: {}", err)?;
                }
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    writeln!(out, "error setoption: {}", err)?;
                }
            }
            "legal" => {
                let moves: Vec<String> = self
                    .game_state
                    .legal_actions()
                    .all_moves()
                    .map(move_to_long_algebraic)
                    .collect();
                if moves.is_empty() {
                    writeln!(out, "legal")?;
                } else {
                    writeln!(out, "legal {}", moves.join(" "))?;
                }
            }
            "play" => {
                let text = parts.next().unwrap_or_default();
                match self.handle_play(text) {
                    Ok(report) => write_report(&report, out)?,
                    Err(err) => writeln!(out, "error {}", err)?,
                }
            }
            "go" => {
                if let Err(err) = self.handle_go(out) {
                    writeln!(out, "error {}", err)?;
                    writeln!(out, "bestmove 0000")?;
                }
            }
            "board" => {
                let side = match self.game_state.side_to_move {
                    Color::White => 'w',
                    Color::Black => 'b',
                };
                writeln!(out, "text {} {}", board_to_text(&self.game_state.board), side)?;
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            "status" => {
                writeln!(out, "{}", status_line(&self.game_state))?;
            }
            "debug" => {
                let mode = parts.next().unwrap_or_default();
                self.debug_mode = mode.eq_ignore_ascii_case("on");
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                // Unknown commands are ignored.
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");
        if name.is_empty() {
            return Err("missing option name".to_owned());
        }
        self.engine.set_option(&name, &value)
    }

    fn handle_position(&mut self, line: &str) -> Result<(), CheckersError> {
        let mut tokens = line.split_whitespace().skip(1);
        let state = match tokens.next() {
            Some("startpos") => GameState::new_game(),
            Some("board") => {
                let text = tokens
                    .next()
                    .ok_or_else(|| CheckersError::InvalidBoardText("missing board text".to_owned()))?;
                let side = match tokens.next() {
                    Some("w") | None => Color::White,
                    Some("b") => Color::Black,
                    Some(other) => {
                        return Err(CheckersError::InvalidBoardText(format!(
                            "unknown side '{other}'"
                        )))
                    }
                };
                GameState::from_text(text, side)?
            }
            Some(other) => {
                return Err(CheckersError::InvalidBoardText(format!(
                    "unsupported position token '{other}'"
                )))
            }
            None => {
                return Err(CheckersError::InvalidBoardText(
                    "incomplete position command".to_owned(),
                ))
            }
        };
        self.game_state = state;
        Ok(())
    }

    fn handle_play(&mut self, text: &str) -> Result<TurnReport, CheckersError> {
        let mv = long_algebraic_to_move(text)?;
        self.game_state.play_move(mv.from, mv.to)
    }

    /// Lets the engine finish the side to move's whole turn.
    fn handle_go(&mut self, out: &mut impl Write) -> Result<(), String> {
        let mover = self.game_state.side_to_move;
        let params = GoParams::default();

        loop {
            let result = self
                .engine
                .choose_move(&self.game_state, &params)
                .map_err(|e| e.to_string())?;
            if self.debug_mode {
                for info in &result.info_lines {
                    writeln!(out, "{}", info).map_err(|e| e.to_string())?;
                }
            }

            let Some(best_move) = result.best_move else {
                writeln!(out, "bestmove 0000").map_err(|e| e.to_string())?;
                return Ok(());
            };
            writeln!(out, "bestmove {}", move_to_long_algebraic(best_move))
                .map_err(|e| e.to_string())?;

            let report = self
                .game_state
                .play_move(best_move.from, best_move.to)
                .map_err(|e| e.to_string())?;
            write_outcome(&report, out).map_err(|e| e.to_string())?;

            if report.turn_complete || self.game_state.side_to_move != mover {
                return Ok(());
            }
        }
    }
}

fn write_report(report: &TurnReport, out: &mut impl Write) -> io::Result<()> {
    let mut line = format!("played {}", move_to_long_algebraic(report.mv));
    if !report.captured.is_empty() {
        line.push_str(" captured");
        for square in &report.captured {
            line.push(' ');
            line.push_str(&square_to_algebraic(*square));
        }
    }
    if report.promoted {
        line.push_str(" promoted");
    }
    writeln!(out, "{}", line)?;
    write_outcome(report, out)
}

fn write_outcome(report: &TurnReport, out: &mut impl Write) -> io::Result<()> {
    if let CaptureChain::InChain(square) = report.chain {
        writeln!(out, "chain {}", square_to_algebraic(square))?;
    }
    if let GameOutcome::Win(winner) = report.outcome {
        writeln!(out, "gameover winner {}", winner)?;
    }
    Ok(())
}

fn status_line(game_state: &GameState) -> String {
    let chain = game_state
        .chain
        .chained_square()
        .map(square_to_algebraic)
        .unwrap_or_else(|| "none".to_owned());
    let outcome = match game_state.outcome() {
        GameOutcome::InProgress => "in_progress".to_owned(),
        GameOutcome::Win(winner) => format!("winner {winner}"),
    };
    format!(
        "status turn {} ply {} chain {} outcome {}",
        game_state.side_to_move, game_state.ply, chain, outcome
    )
}
