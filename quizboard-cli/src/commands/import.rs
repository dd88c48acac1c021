use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use quizboard_core::ProgressSink;
use quizboard_library::{Library, load_game, settings};
use quizboard_scraper::ImageCache;

/// Drives an indicatif bar from the pipeline's 0-100 increments.
struct BarProgress(ProgressBar);

impl ProgressSink for BarProgress {
    fn advance(&self, increment: u32) {
        self.0.inc(u64::from(increment));
    }
}

/// Import a game file into the library, migrating images if needed.
pub(crate) fn run(file: &Path, library_override: Option<PathBuf>) {
    let (mut game, result) = load_game(file);
    super::print_report(&result);
    if !result.usable {
        println!(
            "{} {} cannot be imported",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            result.file_name,
        );
        std::process::exit(1);
    }

    let (root, cache_dir) = match (
        settings::resolve_library_root(library_override),
        settings::image_cache_dir(),
    ) {
        (Ok(root), Ok(cache_dir)) => (root, cache_dir),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("could not prepare library directories: {err}");
            std::process::exit(1);
        }
    };
    let cache = match ImageCache::new(cache_dir) {
        Ok(cache) => cache,
        Err(err) => {
            log::error!("could not create HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let mut library = Library::open(root);
    let name = game.name.clone();

    let bar = ProgressBar::new(100);
    if let Ok(style) = ProgressStyle::with_template("  {bar:30.cyan} {pos:>3}% {msg}") {
        bar.set_style(style);
    }
    bar.set_message("migrating images");

    let outcome = library.add(&mut game, &cache, &BarProgress(bar.clone()));
    bar.finish_and_clear();

    match outcome {
        Ok(failed) if failed.is_empty() => {
            println!(
                "{} imported '{}' into {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                name,
                library.root().display(),
            );
        }
        Ok(failed) => {
            println!(
                "{} imported '{}', but {} image(s) could not be downloaded:",
                "!".if_supports_color(Stdout, |t| t.yellow()),
                name,
                failed.len(),
            );
            for url in failed {
                println!("    {url}");
            }
        }
        Err(err) => {
            println!(
                "{} import failed: {err}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            );
            std::process::exit(1);
        }
    }
}
