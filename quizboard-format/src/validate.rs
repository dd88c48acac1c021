//! Structural validation of parsed game descriptions.
//!
//! Validation is the single place where sibling consistency (all
//! categories share one question count) and count bounds are enforced;
//! the parsers stay permissive so partially built data is never rejected
//! early.

use quizboard_core::{GameDescription, ParseMessage, ParsingResult};

pub const MIN_CATEGORIES: usize = 3;
pub const MAX_CATEGORIES: usize = 7;
pub const MIN_QUESTIONS: usize = 3;
pub const MAX_QUESTIONS: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Validate a parsed description.
///
/// The three fatal rules (name, category count, question counts) run in
/// order and short-circuit: the first violation appends exactly one error
/// and stops further category/question validation. The player and bonus
/// stages run independently afterwards and only ever warn. `usable` is
/// set on both the description and the result iff no fatal rule failed.
pub fn validate(mut game: GameDescription) -> (GameDescription, ParsingResult) {
    let mut result = ParsingResult::new(game.file_name());

    if !game.file_data_acquired {
        result.push(ParseMessage::FileUnreadable);
        return (game, result);
    }

    let structure_ok = check_structure(&game, &mut result);
    check_players(&mut game, &mut result);
    check_bonus_questions(&mut game, &mut result);

    if structure_ok {
        game.usable = true;
        result.usable = true;
    }
    (game, result)
}

/// The fatal rules. Returns false on the first violation.
fn check_structure(game: &GameDescription, result: &mut ParsingResult) -> bool {
    if game.name.trim().is_empty() {
        result.push(ParseMessage::MissingGameName);
        return false;
    }

    let categories = game.categories.len();
    if categories < MIN_CATEGORIES {
        result.push(ParseMessage::NotEnoughCategories {
            found: categories,
            min: MIN_CATEGORIES,
        });
        return false;
    }
    if categories > MAX_CATEGORIES {
        result.push(ParseMessage::TooManyCategories {
            found: categories,
            max: MAX_CATEGORIES,
        });
        return false;
    }

    let expected = game.categories[0].questions.len();
    for category in &game.categories {
        let found = category.questions.len();
        if found < MIN_QUESTIONS {
            result.push(ParseMessage::NotEnoughQuestions {
                category: category.name.clone(),
                found,
                min: MIN_QUESTIONS,
            });
            return false;
        }
        if found > MAX_QUESTIONS {
            result.push(ParseMessage::TooManyQuestions {
                category: category.name.clone(),
                found,
                max: MAX_QUESTIONS,
            });
            return false;
        }
        if found != expected {
            result.push(ParseMessage::UnevenQuestionCount {
                category: category.name.clone(),
                found,
                expected,
            });
            return false;
        }
    }

    result.push(ParseMessage::QuestionsParsed {
        questions: game.question_count(),
        categories,
    });
    true
}

/// Players below the minimum are dropped entirely; above the maximum the
/// extras are dropped and the rest retained.
fn check_players(game: &mut GameDescription, result: &mut ParsingResult) {
    let found = game.players.len();
    if found == 0 {
        return;
    }
    if found < MIN_PLAYERS {
        result.push(ParseMessage::TooFewPlayers {
            found,
            min: MIN_PLAYERS,
        });
        game.players.clear();
        return;
    }
    if found > MAX_PLAYERS {
        result.push(ParseMessage::TooManyPlayers {
            found,
            max: MAX_PLAYERS,
        });
        game.players.truncate(MAX_PLAYERS);
    }
    result.push(ParseMessage::PlayersParsed {
        count: game.players.len(),
    });
}

/// Bonus questions are retained iff there are none, or at least as many
/// as there are (retained) players.
fn check_bonus_questions(game: &mut GameDescription, result: &mut ParsingResult) {
    let bonus = game.bonus_questions.len();
    if bonus == 0 {
        return;
    }
    let players = game.players.len();
    if bonus < players {
        result.push(ParseMessage::BonusQuestionsDropped { bonus, players });
        game.bonus_questions.clear();
        return;
    }
    result.push(ParseMessage::BonusQuestionsParsed { count: bonus });
}
