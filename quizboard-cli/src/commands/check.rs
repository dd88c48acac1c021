use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use quizboard_library::load_game;

/// Parse and validate a game file, printing the full report.
pub(crate) fn run(file: &Path) {
    let (game, result) = load_game(file);

    println!(
        "{}",
        result.file_name.if_supports_color(Stdout, |t| t.bold())
    );
    super::print_report(&result);

    if result.usable {
        println!(
            "{} {} ({} categories, {} questions)",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            game.name,
            game.categories.len(),
            game.question_count(),
        );
    } else {
        println!(
            "{} game data is not usable",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        );
        std::process::exit(1);
    }
}
