//! Structured parse report.
//!
//! Every file parse produces a [`ParsingResult`]: a usable/unusable
//! verdict plus ordered error, warning, and info messages drawn from a
//! fixed message enumeration. The UI renders these verbatim; nothing in
//! the pipeline surfaces raw errors to the user.

use std::fmt;

/// Severity of a single report message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks use of the game data.
    Error,
    /// Degrades the game data but permits use.
    Warning,
    /// Counts and confirmations.
    Info,
}

/// The fixed set of report messages, with positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMessage {
    /// The source file could not be read or decoded at all.
    FileUnreadable,
    /// `game.name` missing or blank.
    MissingGameName,
    NotEnoughCategories { found: usize, min: usize },
    TooManyCategories { found: usize, max: usize },
    NotEnoughQuestions { category: String, found: usize, min: usize },
    TooManyQuestions { category: String, found: usize, max: usize },
    /// A category's question count differs from the first category's.
    UnevenQuestionCount { category: String, found: usize, expected: usize },
    /// A grid cell references a category that is not a column header.
    CategoryHeaderMismatch { category: String },
    UnsupportedFormat { extension: String },
    TooFewPlayers { found: usize, min: usize },
    TooManyPlayers { found: usize, max: usize },
    BonusQuestionsDropped { bonus: usize, players: usize },
    /// Persisted flag: some image failed to download in an earlier run.
    ImageDownloadFailure,
    QuestionsParsed { questions: usize, categories: usize },
    PlayersParsed { count: usize },
    BonusQuestionsParsed { count: usize },
}

impl ParseMessage {
    pub fn severity(&self) -> Severity {
        use ParseMessage::*;
        match self {
            FileUnreadable
            | MissingGameName
            | NotEnoughCategories { .. }
            | TooManyCategories { .. }
            | NotEnoughQuestions { .. }
            | TooManyQuestions { .. }
            | UnevenQuestionCount { .. }
            | CategoryHeaderMismatch { .. }
            | UnsupportedFormat { .. } => Severity::Error,
            TooFewPlayers { .. }
            | TooManyPlayers { .. }
            | BonusQuestionsDropped { .. }
            | ImageDownloadFailure => Severity::Warning,
            QuestionsParsed { .. } | PlayersParsed { .. } | BonusQuestionsParsed { .. } => {
                Severity::Info
            }
        }
    }
}

impl fmt::Display for ParseMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseMessage::*;
        match self {
            FileUnreadable => write!(f, "The file could not be read"),
            MissingGameName => write!(f, "The game has no name"),
            NotEnoughCategories { found, min } => {
                write!(f, "Not enough categories: found {found}, need at least {min}")
            }
            TooManyCategories { found, max } => {
                write!(f, "Too many categories: found {found}, at most {max} allowed")
            }
            NotEnoughQuestions { category, found, min } => write!(
                f,
                "Category '{category}' has not enough questions: found {found}, need at least {min}"
            ),
            TooManyQuestions { category, found, max } => write!(
                f,
                "Category '{category}' has too many questions: found {found}, at most {max} allowed"
            ),
            UnevenQuestionCount { category, found, expected } => write!(
                f,
                "Category '{category}' has {found} questions but the first category has {expected}"
            ),
            CategoryHeaderMismatch { category } => write!(
                f,
                "A cell references category '{category}', which is not a column header"
            ),
            UnsupportedFormat { extension } => {
                write!(f, "Unsupported file format '.{extension}'")
            }
            TooFewPlayers { found, min } => write!(
                f,
                "Ignoring {found} player(s): a game needs at least {min}"
            ),
            TooManyPlayers { found, max } => write!(
                f,
                "Keeping only the first {max} of {found} players"
            ),
            BonusQuestionsDropped { bonus, players } => write!(
                f,
                "Dropping {bonus} bonus question(s): fewer than the {players} players"
            ),
            ImageDownloadFailure => {
                write!(f, "Some images of this game failed to download earlier")
            }
            QuestionsParsed { questions, categories } => {
                write!(f, "Parsed {questions} questions in {categories} categories")
            }
            PlayersParsed { count } => write!(f, "Parsed {count} players"),
            BonusQuestionsParsed { count } => write!(f, "Parsed {count} bonus questions"),
        }
    }
}

/// Report for one file parse: verdict plus ordered messages per severity.
#[derive(Debug, Clone, Default)]
pub struct ParsingResult {
    /// Name of the parsed source file.
    pub file_name: String,
    /// True iff the game data passed all fatal validation rules.
    pub usable: bool,
    pub errors: Vec<ParseMessage>,
    pub warnings: Vec<ParseMessage>,
    pub infos: Vec<ParseMessage>,
}

impl ParsingResult {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    /// Append a message to the list matching its severity.
    pub fn push(&mut self, message: ParseMessage) {
        match message.severity() {
            Severity::Error => self.errors.push(message),
            Severity::Warning => self.warnings.push(message),
            Severity::Info => self.infos.push(message),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All messages in severity order: errors, then warnings, then infos.
    pub fn messages(&self) -> impl Iterator<Item = (Severity, &ParseMessage)> {
        self.errors
            .iter()
            .map(|m| (Severity::Error, m))
            .chain(self.warnings.iter().map(|m| (Severity::Warning, m)))
            .chain(self.infos.iter().map(|m| (Severity::Info, m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_routes_by_severity() {
        let mut result = ParsingResult::new("quiz.xml");
        result.push(ParseMessage::MissingGameName);
        result.push(ParseMessage::TooFewPlayers { found: 1, min: 2 });
        result.push(ParseMessage::PlayersParsed { count: 3 });

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.infos.len(), 1);
        assert!(result.has_errors());
    }

    #[test]
    fn messages_render_their_parameters() {
        let msg = ParseMessage::NotEnoughQuestions {
            category: "History".into(),
            found: 2,
            min: 3,
        };
        let text = msg.to_string();
        assert!(text.contains("History"));
        assert!(text.contains('2'));
        assert!(text.contains('3'));
    }
}
