//! CLI challenge example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rulecards::card::KING;
use rulecards::{
    Card, Challenge, Color, Game, GameOptions, GameState, Goal, Level, Outcome, Rule,
};

fn challenges() -> Vec<Challenge> {
    vec![
        Challenge::new("follow-the-pile", Level::Easy)
            .with_rules([Rule::BaseMatchSuitOrRank])
            .with_goal(Goal::LegalPlaysTarget {
                count: 6,
                max_penalties: 4,
            }),
        Challenge::new("kings-want-red", Level::Medium)
            .with_rules([
                Rule::AfterRankRequireColor {
                    after_rank: KING,
                    required_color: Color::Red,
                },
                Rule::BaseMatchSuitOrRank,
            ])
            .with_goal(Goal::LegalPlaysTarget {
                count: 8,
                max_penalties: 3,
            }),
        Challenge::new("never-twice", Level::Hard)
            .with_rules([
                Rule::ForbidSameSuitAsPrevious,
                Rule::ForbidRankOnColor {
                    forbidden_rank: 7,
                    on_color: Color::Black,
                },
            ])
            .with_goal(Goal::EmptyHandTarget { max_penalties: 2 }),
    ]
}

fn main() {
    println!("Rule challenge CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let challenges = challenges();

    loop {
        println!();
        for (index, challenge) in challenges.iter().enumerate() {
            println!("  {index}: {} ({})", challenge.id, challenge.level);
        }
        let Some(choice) = prompt_usize("Challenge: ") else {
            println!("Goodbye.");
            break;
        };
        let Some(challenge) = challenges.get(choice) else {
            println!("No such challenge.");
            continue;
        };

        if let Err(err) = game.start(challenge.clone()) {
            println!("Cannot start challenge: {err}");
            continue;
        }
        println!("The rules are secret. Find them.");

        if !play_challenge(&mut game) {
            println!("Goodbye.");
            break;
        }
    }
}

/// Runs one challenge. Returns `false` if the player quit.
fn play_challenge(game: &mut Game) -> bool {
    while game.state() == GameState::InProgress {
        print_table(game);

        let input = prompt_line("Card index, 'd' to draw: ");
        match input.as_str() {
            "q" | "quit" => return false,
            "d" | "draw" => match game.draw() {
                Ok(Some(card)) => println!("Drew {}", format_card(&card)),
                Ok(None) => println!("Nothing left to draw."),
                Err(err) => println!("Draw error: {err}"),
            },
            other => {
                let Ok(index) = other.parse::<usize>() else {
                    println!("Please enter a number.");
                    continue;
                };
                if index >= game.hand().len() {
                    println!("You only hold {} cards.", game.hand().len());
                    continue;
                }
                match game.play(index) {
                    Ok(result) => println!("{}", result.message),
                    Err(err) => println!("Play error: {err}"),
                }
            }
        }

        match game.check_outcome() {
            Some(Outcome::Won) => println!("\nChallenge complete!"),
            Some(Outcome::Lost) => println!("\nToo many penalties. Challenge failed."),
            None => {}
        }
    }

    true
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let goal = game.challenge().and_then(Challenge::goal);
    let progress = match goal {
        Some(Goal::LegalPlaysTarget {
            count,
            max_penalties,
        }) => format!(
            "legal plays {}/{count}, penalties {}/{max_penalties}",
            game.legal_plays(),
            game.penalties()
        ),
        Some(Goal::EmptyHandTarget { max_penalties }) => format!(
            "empty your hand, penalties {}/{max_penalties}",
            game.penalties()
        ),
        None => String::new(),
    };
    println!("\nDeck: {} cards | {progress}", game.deck_len());

    if let Some(top) = game.top_card() {
        println!("Top of pile: {}", format_card(top));
    }

    let hand: Vec<String> = game
        .hand()
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{index}:{}", format_card(card)))
        .collect();
    println!("Hand: {}", hand.join("  "));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "34",
    };
    colorize(&card.to_string(), code)
}
