//! Parser for native game files.

use std::path::Path;

use quizboard_core::text::clean_description;
use quizboard_core::{Category, DEFAULT_POINT_MULTIPLIER, GameDescription, Question};

use crate::props::{PropMap, indexed};

/// Parse a native game file into an unvalidated [`GameDescription`].
///
/// Never fails outward: unreadable or undecodable input yields an empty
/// description with `file_data_acquired` unset, so callers can tell a
/// read failure from a structurally empty game. Blank required fields
/// (e.g. `game.name`) are a validation concern, not a parse concern.
pub fn parse(path: &Path, bundle_path: Option<&Path>) -> GameDescription {
    let mut game = GameDescription::new(path, bundle_path);
    game.native = true;

    let props = match PropMap::load(path) {
        Ok(props) => props,
        Err(err) => {
            log::warn!("failed to read game file {}: {err}", path.display());
            return game;
        }
    };
    game.file_data_acquired = true;

    game.name = props.get("game.name").unwrap_or_default().to_string();
    if game.name.is_empty() {
        log::debug!("game file {} has no game.name", path.display());
    }
    game.description = props
        .get("game.description")
        .map(clean_description)
        .filter(|d| !d.is_empty());

    game.categories = parse_categories(&props);
    game.players = indexed(&props, |n| format!("player.{n}.name"))
        .map(|(_, name)| name.to_string())
        .collect();
    game.bonus_questions = parse_bonus_questions(&props);
    game.image_download_failure = props
        .get("image.download.failure")
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));

    game
}

/// Probe `category.<n>.name` until the first absent (or blank) key.
/// A category is kept even with zero questions; the validator rejects it.
fn parse_categories(props: &PropMap) -> Vec<Category> {
    indexed(props, |n| format!("category.{n}.name"))
        .map(|(n, name)| {
            let mut category = Category::new(name);
            category.questions = (1usize..)
                .map_while(|k| question_at(props, n, k))
                .filter(Question::is_askable)
                .collect();
            category
        })
        .collect()
}

/// Probe one grid question. The probe ends when question `k` has neither
/// text nor an image; a probed question without an answer side is later
/// filtered out rather than ending the probe.
fn question_at(props: &PropMap, n: usize, k: usize) -> Option<Question> {
    let question = props
        .get(&format!("category.{n}.question.{k}"))
        .map(str::to_string);
    let question_image = props
        .get(&format!("category.{n}.question.{k}.image"))
        .map(str::to_string);
    if question.is_none() && question_image.is_none() {
        return None;
    }

    Some(Question {
        question,
        question_image,
        answer: props
            .get(&format!("category.{n}.answer.{k}"))
            .map(str::to_string),
        answer_image: props
            .get(&format!("category.{n}.answer.{k}.image"))
            .map(str::to_string),
        points: props
            .get_u32(&format!("question.{k}.points"))
            .unwrap_or(k as u32 * DEFAULT_POINT_MULTIPLIER),
    })
}

fn parse_bonus_questions(props: &PropMap) -> Vec<Question> {
    let points = props
        .get_u32("bonus.question.points")
        .unwrap_or(DEFAULT_POINT_MULTIPLIER);
    (1usize..)
        .map_while(|n| bonus_question_at(props, n, points))
        .filter(Question::is_askable)
        .collect()
}

fn bonus_question_at(props: &PropMap, n: usize, points: u32) -> Option<Question> {
    let question = props.get(&format!("bonus.{n}.question")).map(str::to_string);
    let question_image = props
        .get(&format!("bonus.{n}.question.image"))
        .map(str::to_string);
    if question.is_none() && question_image.is_none() {
        return None;
    }

    Some(Question {
        question,
        question_image,
        answer: props.get(&format!("bonus.{n}.answer")).map(str::to_string),
        answer_image: props
            .get(&format!("bonus.{n}.answer.image"))
            .map(str::to_string),
        points,
    })
}
