//! The interactive loop: one command per line in, plain text out.
//!
//! Rule violations are printed as `error: <reason>` and the loop carries on;
//! only I/O failures end it early.

use std::io::{BufRead, Write};

use anyhow::Result;
use chess_rules::{
    attack_map, render_overlay, suggestion_prompt, ChessError, Color, Engine, GameStatus, Move,
    Session,
};
use tracing::{debug, info};

use crate::config::ConsoleConfig;

const HELP: &str = "\
commands:
  <kind>-<from>-<to>   play a move, e.g. pawn-e2-e4
  back | forward       browse the history
  latest               return to the live position
  log                  list the moves played
  board                show the position under view
  attacks              squares the opponent of the side to move attacks
  legal                list the legal moves
  ai                   let the engine play for the side to move
  hint                 ask the engine without playing
  prompt               print the move-suggestion prompt
  export               board export as JSON
  fen                  setup string of the position under view
  new                  restart the game
  help                 this text
  quit                 leave";

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console {
    session: Session,
    engine: Box<dyn Engine>,
    config: ConsoleConfig,
}

impl Console {
    pub fn new(session: Session, engine: Box<dyn Engine>, config: ConsoleConfig) -> Self {
        Self {
            session,
            engine,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.session.current_state().board)?;
        self.engine_reply(out)?;
        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let cmd = line.trim();
        if cmd.is_empty() {
            return Ok(Flow::Continue);
        }
        debug!(cmd, "console command");

        match cmd.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{HELP}")?,
            "back" => {
                if self.session.step_back() {
                    self.print_position(out)?;
                } else {
                    writeln!(out, "already at the first position")?;
                }
            }
            "forward" => {
                if self.session.step_forward() {
                    self.print_position(out)?;
                } else {
                    writeln!(out, "already at the latest position")?;
                }
            }
            "latest" => {
                self.session.go_to_latest();
                self.print_position(out)?;
            }
            "log" => {
                if self.session.move_log().is_empty() {
                    writeln!(out, "no moves yet")?;
                }
                for rec in self.session.move_log() {
                    let dots = if rec.color == Color::White { "." } else { "..." };
                    write!(out, "{}{dots} {}", rec.fullmove_number, rec.notation)?;
                    if let Some(kind) = rec.captured {
                        write!(out, " (takes {kind})")?;
                    }
                    writeln!(out)?;
                }
            }
            "board" => self.print_position(out)?,
            "attacks" => self.print_attacks(out)?,
            "legal" => {
                let moves: Vec<String> = self
                    .session
                    .legal_moves()
                    .iter()
                    .map(|v| v.mv().to_string())
                    .collect();
                writeln!(out, "{} legal: {}", moves.len(), moves.join(" "))?;
            }
            "ai" => self.play_engine_move(out)?,
            "hint" => {
                let result = self.engine.search(self.session.current_state());
                match result.best_move {
                    Some(mv) => writeln!(out, "hint: {mv} (score {})", result.score)?,
                    None => report(out, &ChessError::NoLegalMoves)?,
                }
            }
            "prompt" => writeln!(out, "{}", suggestion_prompt(self.session.current_state()))?,
            "export" => {
                let export = self.session.current_state().board.export();
                writeln!(out, "{}", serde_json::to_string(&export)?)?;
            }
            "fen" => writeln!(out, "{}", self.session.current_state().to_fen())?,
            "new" => {
                self.session.restart();
                self.engine.new_game();
                self.print_position(out)?;
                self.engine_reply(out)?;
            }
            _ => match self.session.submit_move(cmd) {
                Ok(status) => {
                    self.after_move(status, out)?;
                    self.engine_reply(out)?;
                }
                Err(e) => report(out, &e)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn play_engine_move<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.engine_pick() {
            Ok((mv, status)) => {
                writeln!(out, "{} plays {mv}", self.engine.name())?;
                self.after_move(status, out)
            }
            Err(e) => report(out, &e),
        }
    }

    fn engine_pick(&mut self) -> Result<(Move, GameStatus), ChessError> {
        if !self.session.is_at_latest() {
            return Err(ChessError::NotAtLatestState {
                cursor: self.session.cursor(),
                latest: self.session.history().len() - 1,
            });
        }
        let result = self.engine.search(self.session.current_state());
        let mv = result.best_move.ok_or(ChessError::NoLegalMoves)?;
        let status = self.session.submit(mv)?;
        info!(engine = self.engine.name(), %mv, "engine move");
        Ok((mv, status))
    }

    /// Let the engine answer while it is its side to move.
    fn engine_reply<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(color) = self.config.engine_color else {
            return Ok(());
        };
        if self.session.status().is_over()
            || self.session.current_state().side_to_move != color
            || !self.session.is_at_latest()
        {
            return Ok(());
        }
        self.play_engine_move(out)
    }

    fn after_move<W: Write>(&self, status: GameStatus, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.session.current_state().board)?;
        if status != GameStatus::InProgress {
            writeln!(out, "{status}")?;
        }
        if self.config.show_attacks {
            self.print_attacks(out)?;
        }
        Ok(())
    }

    fn print_position<W: Write>(&self, out: &mut W) -> Result<()> {
        let state = self.session.current_state();
        writeln!(out, "{}", state.board)?;
        writeln!(
            out,
            "position {}/{}, {} to move, {}",
            self.session.cursor(),
            self.session.history().len() - 1,
            state.side_to_move,
            self.session.status()
        )?;
        Ok(())
    }

    fn print_attacks<W: Write>(&self, out: &mut W) -> Result<()> {
        let state = self.session.current_state();
        let by = state.side_to_move.other();
        let attacked = attack_map(&state.board, by);
        writeln!(out, "{} squares attacked by {by}:", attacked.len())?;
        writeln!(out, "{}", render_overlay(attacked))?;
        Ok(())
    }
}

fn report<W: Write>(out: &mut W, err: &ChessError) -> Result<()> {
    writeln!(out, "error: {err}")?;
    Ok(())
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod repl_tests;
