//! Writer for native game manifests.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use quizboard_core::GameDescription;

/// Serialize a game into the native key/value grammar at `path`.
///
/// Keys are written in a stable order so repeated saves of the same game
/// produce identical files. Row points are taken from the first category
/// (grid rows share one value); `bonus.question.points` from the first
/// bonus question.
pub fn write(game: &GameDescription, path: &Path) -> io::Result<()> {
    let mut out = String::new();
    out.push_str("# quizboard game manifest\n");

    entry(&mut out, "game.name", &game.name);
    if let Some(description) = &game.description {
        entry(&mut out, "game.description", description);
    }
    if game.image_download_failure {
        entry(&mut out, "image.download.failure", "true");
    }

    for (n, category) in number(game.categories.iter()) {
        entry(&mut out, &format!("category.{n}.name"), &category.name);
        for (k, question) in number(category.questions.iter()) {
            if let Some(text) = &question.question {
                entry(&mut out, &format!("category.{n}.question.{k}"), text);
            }
            if let Some(image) = &question.question_image {
                entry(&mut out, &format!("category.{n}.question.{k}.image"), image);
            }
            if let Some(text) = &question.answer {
                entry(&mut out, &format!("category.{n}.answer.{k}"), text);
            }
            if let Some(image) = &question.answer_image {
                entry(&mut out, &format!("category.{n}.answer.{k}.image"), image);
            }
        }
    }

    if let Some(first) = game.categories.first() {
        for (k, question) in number(first.questions.iter()) {
            let _ = writeln!(out, "question.{k}.points={}", question.points);
        }
    }

    for (n, player) in number(game.players.iter()) {
        entry(&mut out, &format!("player.{n}.name"), player);
    }

    for (n, question) in number(game.bonus_questions.iter()) {
        if let Some(text) = &question.question {
            entry(&mut out, &format!("bonus.{n}.question"), text);
        }
        if let Some(image) = &question.question_image {
            entry(&mut out, &format!("bonus.{n}.question.image"), image);
        }
        if let Some(text) = &question.answer {
            entry(&mut out, &format!("bonus.{n}.answer"), text);
        }
        if let Some(image) = &question.answer_image {
            entry(&mut out, &format!("bonus.{n}.answer.image"), image);
        }
    }
    if let Some(first) = game.bonus_questions.first() {
        let _ = writeln!(out, "bonus.question.points={}", first.points);
    }

    std::fs::write(path, out)
}

fn entry(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push('=');
    out.push_str(value);
    out.push('\n');
}

/// 1-based numbering, matching the key grammar.
fn number<I: Iterator>(iter: I) -> impl Iterator<Item = (usize, I::Item)> {
    iter.enumerate().map(|(i, item)| (i + 1, item))
}
