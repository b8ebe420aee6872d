use std::io::{self, BufRead, IsTerminal, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use scava_core::{mult, Board, Coord, Coord2, DigOutcome, GameConfig};

use crate::theme::Theme;

mod theme;

const WIDTH: Coord = 20;
const HEIGHT: Coord = 20;

/// Terminal minesweeper. Dig out every safe cell and flag every mine.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Fix the mine placement seed instead of drawing it from the clock.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::debug!("mine placement seed: {}", seed);

    // one mine per five cells
    let config = GameConfig::new((WIDTH, HEIGHT), mult(WIDTH, HEIGHT) / 5);
    let mut board = Board::new(config, seed)?;

    let theme = if io::stdout().is_terminal() {
        Theme::colored()
    } else {
        Theme::plain()
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render(&board, theme)?);
        println!("Flags: {}/{}", board.flag_count(), board.mine_count());

        let Some(command) = prompt(&mut lines, "Would you like to mark or dig?")? else {
            return Ok(());
        };
        match command.to_lowercase().as_str() {
            "mark" => {
                if let Some(coords) = read_coords(&mut lines)? {
                    board.mark(coords)?;
                }
            }
            "dig" => {
                if let Some(coords) = read_coords(&mut lines)? {
                    if board.dig(coords)? == DigOutcome::Exploded {
                        println!("{}", render(&board, theme)?);
                        println!("You hit a mine. Better luck next time!");
                        return Ok(());
                    }
                }
            }
            _ => println!("Unknown command, try \"mark\" or \"dig\"."),
        }

        if board.check_win() {
            println!("{}", render(&board, theme)?);
            println!("Congratulations, you win!");
            return Ok(());
        }
    }
}

/// Seed drawn from the wall clock at process start.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn render(board: &Board, theme: Theme) -> Result<String> {
    let (width, height) = board.size();
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push('[');
            out.push_str(&theme.cell(board.cell_view((x, y))?));
            out.push(']');
        }
        out.push('\n');
    }
    Ok(out)
}

/// Ask for an x and a y coordinate. Unparsable or off-board input abandons
/// the move; the core never sees bad coordinates.
fn read_coords(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<Coord2>> {
    let Some(x) = prompt(lines, "Which x?")? else {
        return Ok(None);
    };
    let Some(y) = prompt(lines, "Which y?")? else {
        return Ok(None);
    };

    match (parse_coord(&x, WIDTH), parse_coord(&y, HEIGHT)) {
        (Some(x), Some(y)) => Ok(Some((x, y))),
        _ => {
            println!("Coordinates must be numbers on the board.");
            Ok(None)
        }
    }
}

/// Parse one zero-based coordinate, rejecting anything outside `0..max`.
fn parse_coord(input: &str, max: Coord) -> Option<Coord> {
    input
        .trim()
        .parse::<Coord>()
        .ok()
        .filter(|&value| value < max)
}

/// Print a prompt and read one trimmed line; `None` means stdin closed.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    println!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_parse_zero_based_and_bounded() {
        assert_eq!(parse_coord("0", WIDTH), Some(0));
        assert_eq!(parse_coord(" 19 ", WIDTH), Some(19));
        assert_eq!(parse_coord("20", WIDTH), None);
        assert_eq!(parse_coord("-1", WIDTH), None);
        assert_eq!(parse_coord("up", WIDTH), None);
        assert_eq!(parse_coord("", WIDTH), None);
    }

    #[test]
    fn render_shows_a_fresh_board_as_hidden() {
        let board = Board::new(GameConfig::new((3, 2), 1), 0).unwrap();
        let out = render(&board, Theme::plain()).unwrap();
        assert_eq!(out, "[?][?][?]\n[?][?][?]\n");
    }
}
