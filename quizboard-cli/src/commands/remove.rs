use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use quizboard_library::{Library, settings};

/// Remove a library entry by its exact game name.
pub(crate) fn run(name: &str, library_override: Option<PathBuf>) {
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

    let Some(game) = library.games().iter().find(|g| g.name == name).cloned() else {
        println!(
            "{} no game named '{name}' in the library",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        );
        std::process::exit(1);
    };

    library.remove(&game);
    println!(
        "{} removed '{name}'",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
}
