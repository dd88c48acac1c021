//! Migration of a game's remote images into its bundle directory.

use std::path::Path;

use quizboard_core::{GameDescription, ProgressSink};

use crate::cache::ImageCache;
use crate::error::FetchError;

/// An image reference that still needs migrating (remote URL).
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Migrate every remote image of a game (regular and bonus questions,
/// question and answer sides) into `bundle_dir`.
///
/// Each image is resolved through the cache, moved into the bundle under
/// its hash-derived name unless a file with that name already exists,
/// and the owning field is rewritten to the bare bundle-relative file
/// name. A failing item is recorded and skipped — nothing already moved
/// is rolled back, and the failed field keeps its original URL. After
/// each item the sink receives the fixed increment `100 / total`.
///
/// Returns the URLs that could not be migrated.
pub fn migrate_images(
    game: &mut GameDescription,
    bundle_dir: &Path,
    cache: &ImageCache,
    progress: &dyn ProgressSink,
) -> Vec<String> {
    let mut slots: Vec<(&mut Option<String>, String)> = Vec::new();
    let questions = game
        .categories
        .iter_mut()
        .flat_map(|category| category.questions.iter_mut())
        .chain(game.bonus_questions.iter_mut());
    for question in questions {
        for slot in [&mut question.question_image, &mut question.answer_image] {
            if let Some(url) = slot.as_deref().filter(|r| is_remote(r)) {
                let url = url.to_string();
                slots.push((slot, url));
            }
        }
    }

    let total = slots.len();
    let step = if total == 0 { 100 } else { (100 / total) as u32 };
    let mut failed = Vec::new();

    for (slot, url) in slots {
        match migrate_one(&url, bundle_dir, cache) {
            Ok(file_name) => *slot = Some(file_name),
            Err(err) => {
                log::warn!("failed to migrate image {url}: {err}");
                failed.push(url);
            }
        }
        progress.advance(step);
    }
    failed
}

fn migrate_one(url: &str, bundle_dir: &Path, cache: &ImageCache) -> Result<String, FetchError> {
    let cached = cache.ensure_local(url)?;
    let file_name = cached.bundle_file_name();
    let destination = bundle_dir.join(&file_name);
    if !destination.exists() {
        std::fs::rename(&cached.path, &destination)?;
    }
    Ok(file_name)
}
