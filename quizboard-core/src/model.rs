use std::path::{Path, PathBuf};

/// Points default for grid row `k` when the source names no value:
/// `k * DEFAULT_POINT_MULTIPLIER`. Also the bonus-question default.
pub const DEFAULT_POINT_MULTIPLIER: u32 = 100;

/// A parsed trivia game — the root aggregate for one game.
///
/// Parsers build this permissively: counts, blank fields, and sibling
/// consistency are only enforced by the validator, so a partially built
/// description is never rejected during parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameDescription {
    /// The file this game was read from (manifest file for bundles).
    pub file_path: PathBuf,

    /// Bundle directory containing the manifest and its image assets.
    /// `None` for games stored as a single file.
    pub bundle_path: Option<PathBuf>,

    /// True once the game is stored in the native key/value format.
    /// Flipped exactly once, when a foreign source is promoted.
    pub native: bool,

    /// Display name of the game. May be blank until validated.
    pub name: String,

    /// Optional short description, at most [`text::MAX_DESCRIPTION_LEN`]
    /// characters.
    ///
    /// [`text::MAX_DESCRIPTION_LEN`]: crate::text::MAX_DESCRIPTION_LEN
    pub description: Option<String>,

    /// The main question grid, in source order.
    pub categories: Vec<Category>,

    /// Questions played outside the grid, in source order.
    pub bonus_questions: Vec<Question>,

    /// Player names, in source order.
    pub players: Vec<String>,

    /// True when the source file was readable at the byte level.
    /// Unset means "read failure", not "empty game".
    pub file_data_acquired: bool,

    /// Sticky flag recording that at least one image failed to migrate.
    /// Persisted in the manifest so later loads can warn.
    pub image_download_failure: bool,

    /// Set by the validator only; gates playing and storing the game.
    pub usable: bool,
}

impl GameDescription {
    /// Create an empty description for a source file, before parsing.
    pub fn new(file_path: impl Into<PathBuf>, bundle_path: Option<&Path>) -> Self {
        Self {
            file_path: file_path.into(),
            bundle_path: bundle_path.map(Path::to_path_buf),
            ..Self::default()
        }
    }

    /// Sort key for the library's natural ordering (name, case-sensitive).
    pub fn sort_key(&self) -> &str {
        &self.name
    }

    /// File name of the source, for display and report headers.
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Total number of questions across all categories (bonus excluded).
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// Two descriptions refer to the same source file.
    pub fn same_source(&self, other: &GameDescription) -> bool {
        self.file_path == other.file_path
    }
}

/// A named column of the question grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }
}

/// One question/answer pair. Text and image are interchangeable on each
/// side; an image reference is either a remote URL, a bundle-relative
/// file name, or an absolute path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Question {
    pub question: Option<String>,
    pub question_image: Option<String>,
    pub answer: Option<String>,
    pub answer_image: Option<String>,
    pub points: u32,
}

impl Question {
    /// A question can be asked iff both sides have text or an image.
    pub fn is_askable(&self) -> bool {
        (self.question.is_some() || self.question_image.is_some())
            && (self.answer.is_some() || self.answer_image.is_some())
    }
}
