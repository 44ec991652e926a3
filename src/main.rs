use gess::{Game, GameStatus, Play};
use std::io::stdin;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn input(prompt: &str) -> std::io::Result<Option<String>> {
    println!("{prompt}");
    let mut s = String::new();
    if stdin().read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}

/// Read plays until one parses. Returns `None` once input is exhausted.
fn get_play() -> Option<Play> {
    loop {
        match input("Please enter your move (x1,y1-x2,y2):") {
            Ok(None) => return None,
            Ok(Some(s)) => match Play::from_str(&s) {
                Ok(play) => return Some(play),
                Err(e) => println!("Invalid move ({e}). Try again."),
            },
            Err(e) => println!("Error reading input ({e}). Try again."),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("gess demo");
    let mut game = Game::default();
    loop {
        println!("Board:");
        println!("{}", game.board());
        println!("{} to play.", game.side_to_play());

        let Some(play) = get_play() else {
            return;
        };
        match game.do_play(play) {
            Ok(GameStatus::InProgress) => {}
            Ok(GameStatus::Won(side)) => {
                println!("Game over. Winner is {side}.");
                println!("Final board:");
                println!("{}", game.board());
                return;
            }
            Err(e) => {
                println!("Invalid move ({e}). Try again.");
                if let GameStatus::Won(side) = game.status() {
                    println!("Game over. Winner is {side}.");
                    return;
                }
            }
        }
    }
}
