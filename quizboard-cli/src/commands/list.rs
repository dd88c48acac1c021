use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use quizboard_library::{Library, settings};

/// List the games in the library, sorted by name.
pub(crate) fn run(library_override: Option<PathBuf>) {
    let root = match settings::resolve_library_root(library_override) {
        Ok(root) => root,
        Err(err) => {
            log::error!("could not prepare the library directory: {err}");
            std::process::exit(1);
        }
    };

    let mut library = Library::open(root);
    if let Err(err) = library.load_all() {
        log::error!("could not read the library: {err}");
        std::process::exit(1);
    }

    if library.games().is_empty() {
        println!(
            "{}",
            "No games in the library.".if_supports_color(Stdout, |t| t.dimmed())
        );
        println!("Run 'quizboard import <file>' to add one.");
        return;
    }

    for game in library.games() {
        let marker = if game.image_download_failure {
            " (missing images)"
        } else {
            ""
        };
        println!(
            "  {} — {} categories, {} questions{}",
            game.name.if_supports_color(Stdout, |t| t.bold()),
            game.categories.len(),
            game.question_count(),
            marker.if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    println!();
    println!("{} game(s) in {}", library.games().len(), library.root().display());
}
