//! Loader facade: one entry point from a file path to a validated game.

use std::path::{Path, PathBuf};

use quizboard_core::{GameDescription, ParseMessage, ParsingResult};
use quizboard_format::{BUNDLE_EXTENSION, MANIFEST_EXTENSION, native, validate};
use quizboard_scraper::{HtmlImportError, html};

/// Parse and validate a game file, choosing the parser by extension.
///
/// Never fails: read failures, structure violations, and unsupported
/// formats all come back as error messages in the [`ParsingResult`],
/// alongside whatever description could be built.
pub fn load_game(path: &Path) -> (GameDescription, ParsingResult) {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension == MANIFEST_EXTENSION {
        let bundle = bundle_parent(path);
        let parsed = native::parse(path, bundle.as_deref());
        let (game, mut result) = validate(parsed);
        if game.image_download_failure {
            result.push(ParseMessage::ImageDownloadFailure);
        }
        (game, result)
    } else if extension == "html" || extension == "htm" {
        load_html(path)
    } else {
        let game = GameDescription::new(path, None);
        let mut result = ParsingResult::new(game.file_name());
        result.push(ParseMessage::UnsupportedFormat { extension });
        (game, result)
    }
}

fn load_html(path: &Path) -> (GameDescription, ParsingResult) {
    match html::parse(path) {
        Ok(parsed) => validate(parsed),
        Err(HtmlImportError::CategoryMismatch { category, partial }) => {
            let mut result = ParsingResult::new(partial.file_name());
            result.push(ParseMessage::CategoryHeaderMismatch { category });
            (*partial, result)
        }
        Err(HtmlImportError::Io(err)) => {
            log::warn!("failed to read export file {}: {err}", path.display());
            let game = GameDescription::new(path, None);
            let mut result = ParsingResult::new(game.file_name());
            result.push(ParseMessage::FileUnreadable);
            (game, result)
        }
    }
}

/// A manifest inside a `.jj` directory belongs to that bundle.
fn bundle_parent(path: &Path) -> Option<PathBuf> {
    let parent = path.parent()?;
    let name = parent.file_name()?.to_str()?;
    name.ends_with(&format!(".{BUNDLE_EXTENSION}"))
        .then(|| parent.to_path_buf())
}
