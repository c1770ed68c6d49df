//! Terminal game loops driving the move selector.

use crate::config::EngineConfig;
use anyhow::{Context, Result, bail};
use noughts::{
    Board, GameFinished, GameInProgress, GameResult, GameStatus, OnePly, Player, Position,
    Strategy, StrategyKind,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Prints the configured strategy's move for `board` and the board after it.
#[instrument(skip(config, out))]
pub fn suggest(board_text: &str, config: &EngineConfig, mut out: impl Write) -> Result<Position> {
    let board: Board = board_text
        .parse()
        .with_context(|| format!("Invalid board {:?}", board_text))?;
    let strategy = config.strategy().build();

    writeln!(out, "{}\n", board)?;
    writeln!(out, "Player {} to move", board.current_player())?;

    let position = if *config.strategy() == StrategyKind::OnePly {
        let decision = OnePly.decide(&board)?;
        writeln!(
            out,
            "{} chooses {} ({:?})",
            strategy.name(),
            decision.position,
            decision.priority
        )?;
        decision.position
    } else {
        let position = strategy.select(&board)?;
        writeln!(out, "{} chooses {}", strategy.name(), position)?;
        position
    };

    writeln!(out, "\n{}", board.apply_as_current_player(position)?)?;
    Ok(position)
}

/// Reads the human's move; `None` when the input should be asked again.
fn read_position(
    input: &mut impl BufRead,
    out: &mut impl Write,
    board: &Board,
) -> Result<Option<Position>> {
    write!(out, "Your move (1-9, row,col or label): ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed before the game finished");
    }

    let Some(position) = Position::parse_input(&line) else {
        writeln!(out, "Not a square: {:?}", line.trim())?;
        return Ok(None);
    };
    if !board.is_empty(position) {
        writeln!(out, "{} is already taken", position)?;
        return Ok(None);
    }
    Ok(Some(position))
}

fn report(done: &GameFinished, out: &mut impl Write) -> Result<GameStatus> {
    writeln!(out, "\n{}\n\n{}", done.board(), done.status())?;
    info!(status = %done.status(), moves = done.history().len(), "Game over");
    Ok(done.status())
}

/// Human against the configured engine.
#[instrument(
    skip_all,
    fields(strategy = %config.strategy(), engine_plays = %config.engine_plays())
)]
pub fn play(
    config: &EngineConfig,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<GameStatus> {
    let engine = config.strategy().build();
    let engine_side = *config.engine_plays();
    let mut game = GameInProgress::new();

    writeln!(out, "You are {}, the engine is {}", engine_side.opponent(), engine_side)?;

    loop {
        writeln!(out, "\n{}\n", game.board())?;

        let position = if game.to_move() == engine_side {
            let position = engine.select(game.board())?;
            writeln!(out, "{} plays {}", engine_side, position)?;
            position
        } else {
            match read_position(&mut input, &mut out, game.board())? {
                Some(position) => position,
                None => continue,
            }
        };

        match game.play(position)? {
            GameResult::InProgress(next) => game = next,
            GameResult::Finished(done) => return report(&done, &mut out),
        }
    }
}

/// Two engines against each other, `x` moving first.
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn selfplay(x: &dyn Strategy, o: &dyn Strategy, mut out: impl Write) -> Result<GameStatus> {
    let mut game = GameInProgress::new();

    loop {
        let engine = if game.to_move() == Player::X { x } else { o };
        debug!(player = %game.to_move(), strategy = engine.name(), "Engine to move");
        let player = game.to_move();

        match game.engine_move(engine)? {
            GameResult::InProgress(next) => {
                if let Some(last) = next.history().last() {
                    writeln!(
                        out,
                        "{} ({}) plays {}\n{}\n",
                        player,
                        engine.name(),
                        last.position,
                        next.board()
                    )?;
                }
                game = next;
            }
            GameResult::Finished(done) => return report(&done, &mut out),
        }
    }
}
