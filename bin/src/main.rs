use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rs_wordle_colorings::*;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Plays a Wordle-style game in the terminal, or prints the colorings for a given history.
///
/// Set `RUST_LOG` to control logging, e.g. `RUST_LOG=rs_wordle_colorings=debug`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game against a random word from the words file.
    Play(PlayArgs),
    /// Print the colorings for the given answer, attempts, and hints.
    Color {
        /// The hidden answer.
        answer: String,
        /// The attempts made so far, in order.
        attempts: Vec<String>,
        /// A revealed location (zero-based). May be repeated.
        #[arg(long = "hint")]
        hints: Vec<usize>,
    },
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Path to a file that contains a list of valid words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: PathBuf,

    /// The number of letters in each word.
    #[arg(short = 'l', long, default_value_t = GameConfig::default().word_length)]
    word_length: usize,

    /// The number of guesses allowed in each game.
    #[arg(short = 'n', long, default_value_t = GameConfig::default().max_attempts)]
    max_attempts: usize,
}

impl PlayArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            word_length: self.word_length,
            max_attempts: self.max_attempts,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Play(args) => play(&args),
        Command::Color {
            answer,
            attempts,
            hints,
        } => print_colorings(&answer, &attempts, &hints),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_colorings(answer: &str, attempts: &[String], hints: &[usize]) -> anyhow::Result<()> {
    let answer = Word::new(answer).context("invalid answer")?;
    let attempts = attempts
        .iter()
        .map(|attempt| Word::new(attempt))
        .collect::<Result<Vec<Word>, WordleError>>()
        .context("invalid attempt")?;

    let colorings = compute_colorings(&answer, &attempts, hints)?;

    print_board(&attempts, &colorings);
    println!("Known: {}", colorings.deduced_slots);
    Ok(())
}

fn play(args: &PlayArgs) -> anyhow::Result<()> {
    let mut words_reader = io::BufReader::new(
        File::open(&args.words_file)
            .with_context(|| format!("couldn't open {}", args.words_file.display()))?,
    );
    let word_bank = WordBank::from_reader(&mut words_reader)?;
    println!("There are {} possible words.", word_bank.len());

    let mut rng = rand::thread_rng();
    let mut game = Game::with_random_answer(&word_bank, args.config(), &mut rng)?;
    println!(
        "Guess the word. Enter a {}-letter guess, '?' for a hint, or 'q' to quit.",
        args.word_length
    );

    loop {
        if game.state() == GameState::Playing {
            let colorings = game.colorings();
            print!(
                "[{} left] {} > ",
                game.remaining_attempts(),
                colorings.deduced_slots
            );
            io::stdout().flush()?;

            let Some(input) = read_line()? else {
                return Ok(());
            };
            match input.as_str() {
                "q" => return Ok(()),
                "?" => match game.reveal_hint(&mut rng) {
                    Ok(index) => println!("Letter {} is revealed.", index + 1),
                    Err(err) => println!("{}", err),
                },
                guess => match game.make_attempt(guess, &word_bank) {
                    Ok(_) => print_board(game.attempts(), &game.colorings()),
                    Err(WordleError::NotInWordBank(word)) => {
                        println!("{} isn't in the word list. Try again.", word)
                    }
                    Err(err) => println!("{}. Try again.", err),
                },
            }
            continue;
        }

        if game.state() == GameState::Won {
            println!("You win! It took {} guesses.", game.attempts().len());
        } else {
            println!("Better luck next time! The solution was {}.", game.answer());
        }
        print!("Play again? [y/N] ");
        io::stdout().flush()?;
        match read_line()? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {
                game = game.play_again(&word_bank, &mut rng)?;
                print_board(game.attempts(), &game.colorings());
            }
            _ => return Ok(()),
        }
    }
}

/// Reads a trimmed line from stdin, or `None` at the end of input.
fn read_line() -> io::Result<Option<String>> {
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

fn print_board(attempts: &[Word], colorings: &Colorings) {
    for (attempt, coloring) in attempts.iter().zip(&colorings.attempt_colorings) {
        println!("  {}  {}", attempt, coloring);
    }
    println!();
    print_keyboard(&colorings.keyboard_colorings);
}

/// Prints each keyboard row, with the verdict marker for each guessed letter underneath it.
fn print_keyboard(keyboard: &KeyboardColorings) {
    let other_letters: String = keyboard
        .iter()
        .map(|(letter, _)| letter)
        .filter(|letter| !KEYBOARD_ROWS.iter().any(|row| row.contains(*letter)))
        .collect();
    let mut rows: Vec<&str> = KEYBOARD_ROWS.to_vec();
    if !other_letters.is_empty() {
        rows.push(&other_letters);
    }
    for row in rows {
        let markers: String = row
            .chars()
            .map(|letter| keyboard.get(letter).map_or(' ', LetterVerdict::marker))
            .collect();
        println!("  {}", row);
        println!("  {}", markers);
    }
}
