//! Terminal front end for the emotion memory game.
//!
//! Renders the board as text, reads commands from stdin and maps the
//! engine's virtual clock onto wall time by sleeping through each pending
//! resolution.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use emotion_memory::{
    CardId, FlipOutcome, GameController, GameControllerBuilder, GameState, IgnoreReason, Level,
    MemoryConfig, NotificationSink,
};
use pico_args::Arguments;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Play the emotion memory game in a terminal

USAGE:
  emotion-memory [OPTIONS]

OPTIONS:
  --level      N       Starting level               [default: 1]
  --seed       N       RNG seed for a repeatable deal
  --config     PATH    JSON configuration file

FLAGS:
  -h, --help           Print help information

ENVIRONMENT:
  RUST_LOG             Log filter (e.g. emotion_memory=debug)  [default: warn]
";

const COMMANDS: &str = "\
Commands:
  <id> | flip <id>     Turn a card face-up
  new                  Deal a new game at the current level
  next                 Deal a new game at the next level
  level <n>            Deal a new game at level n
  levels               List the selectable levels
  stats                Show progress
  help                 Show this list
  quit                 Leave the game
";

struct Args {
    level: Option<u32>,
    seed: Option<u64>,
    config: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Flip(u32),
    New,
    Next,
    Level(u32),
    Levels,
    Stats,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?.to_ascii_lowercase();
    let arg = words.next();

    let command = match (head.as_str(), arg) {
        (id, None) if id.parse::<u32>().is_ok() => Command::Flip(id.parse().ok()?),
        ("flip" | "f", Some(id)) => match id.parse() {
            Ok(id) => Command::Flip(id),
            Err(_) => Command::Unknown(line.trim().to_string()),
        },
        ("new" | "n", None) => Command::New,
        ("next", None) => Command::Next,
        ("level" | "l", Some(n)) => match n.parse() {
            Ok(n) => Command::Level(n),
            Err(_) => Command::Unknown(line.trim().to_string()),
        },
        ("levels", None) => Command::Levels,
        ("stats" | "s", None) => Command::Stats,
        ("help" | "h" | "?", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    };
    Some(command)
}

/// Prints short cues in place of the audio collaborator.
struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn on_match(&mut self) {
        println!("  ✨ It's a match!");
    }

    fn on_no_match(&mut self) {
        println!("  Not a match. Try again!");
    }

    fn on_game_complete(&mut self) {
        println!("  🎉 Great job! \x07");
    }
}

fn columns(card_count: usize) -> usize {
    if card_count <= 16 {
        4
    } else {
        6
    }
}

fn render(state: &GameState) -> String {
    let cols = columns(state.deck_size());
    let mut out = String::new();

    for row in state.cards().iter().collect::<Vec<_>>().chunks(cols) {
        let cells: Vec<String> = row
            .iter()
            .map(|card| {
                if !card.is_face_up() {
                    format!("[   #{:<8}]", card.id.raw())
                } else if card.is_matched {
                    format!("[{} {:<9}✓]", card.emotion.glyph, card.emotion.label)
                } else {
                    format!("[{} {:<10}]", card.emotion.glyph, card.emotion.label)
                }
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

fn show<N: NotificationSink>(game: &GameController<N>) {
    let snapshot = game.snapshot();
    println!();
    print!("{}", render(&snapshot));
    println!("{}", game.stats());
}

fn describe_flip(outcome: FlipOutcome, state: &GameState, id: CardId) {
    match outcome {
        FlipOutcome::Revealed | FlipOutcome::PairPending { .. } => {
            if let Some(card) = state.card(id) {
                println!("  {} {}", card.emotion.glyph, card.emotion.description);
            }
        }
        FlipOutcome::Ignored(IgnoreReason::PairPending) => {
            println!("  Wait for the cards to turn back.")
        }
        FlipOutcome::Ignored(IgnoreReason::UnknownCard) => {
            println!("  There is no card #{}.", id.raw())
        }
        FlipOutcome::Ignored(IgnoreReason::AlreadyFlipped) => {
            println!("  Card #{} is already showing.", id.raw())
        }
        FlipOutcome::Ignored(IgnoreReason::AlreadyMatched) => {
            println!("  Card #{} is already matched.", id.raw())
        }
    }
}

fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        level: pargs.opt_value_from_str("--level")?,
        seed: pargs.opt_value_from_str("--seed")?,
        config: pargs.opt_value_from_str("--config")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => MemoryConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => MemoryConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let level = Level::new(args.level.unwrap_or(1))?;

    let mut game = GameControllerBuilder::new()
        .config(config)
        .level(level)
        .build(TerminalSink)?;

    println!("🎭 Emotion Memory Game 🎭");
    println!("Find matching pairs to learn about different feelings.");
    println!("{}", game.level_summary(level));
    print!("{COMMANDS}");
    show(&game);

    let mut announced = false;
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Flip(id) => {
                let id = CardId::new(id);
                let outcome = game.flip(id);
                describe_flip(outcome, game.state(), id);
            }
            Command::New => {
                game.new_game();
                announced = false;
                println!("{}", game.level_summary(game.level()));
            }
            Command::Next => {
                let level = game.level().next();
                game.change_level(level);
                announced = false;
                println!("{}", game.level_summary(level));
            }
            Command::Level(n) => match Level::new(n) {
                Ok(level) => {
                    game.change_level(level);
                    announced = false;
                    println!("{}", game.level_summary(level));
                }
                Err(err) => println!("  {err}"),
            },
            Command::Levels => {
                for n in 1..=game.config().max_selectable_level {
                    if let Ok(level) = Level::new(n) {
                        println!("  {}", game.level_summary(level));
                    }
                }
                continue;
            }
            Command::Stats => {
                println!("{}", game.stats());
                println!("  progress {:.0}%", game.stats().progress_percent());
                continue;
            }
            Command::Help => {
                print!("{COMMANDS}");
                continue;
            }
            Command::Quit => break,
            Command::Unknown(text) => {
                println!("  Unknown command: {text}");
                continue;
            }
        }

        show(&game);
        while let Some(wait) = game.time_until_next_event() {
            thread::sleep(wait);
            game.advance(wait);
            show(&game);
        }

        if game.state().game_complete() && !announced {
            announced = true;
            println!("{}", game.stats().summary());
            println!("Type `new` to play again or `next` for a new challenge.");
        }
    }

    Ok(())
}
