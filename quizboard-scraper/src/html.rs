//! Parser for third-party HTML game exports.
//!
//! The export convention is a single-page document with one grid table:
//! the first row's `<th>` headers are the category names, every data
//! cell is a `<td data-category="...">` showing its point value as the
//! cell's own text, with the question under a `.front` descendant and
//! the answer under `.back`. Missing text or images degrade to absent
//! fields; only a cell referencing an unknown category aborts the parse.

use std::path::Path;

use scraper::{ElementRef, Html, Selector};

use quizboard_core::text::{clean_description, collapse_whitespace};
use quizboard_core::{Category, DEFAULT_POINT_MULTIPLIER, GameDescription, Question};

use crate::error::HtmlImportError;

/// Base URL the export's relative image references are resolved against.
const EXPORT_BASE_URL: &str = "https://jeopardylabs.com";

/// Parse an HTML export file. The returned description is non-native and
/// has no bundle path; its image references are absolute URLs.
pub fn parse(path: &Path) -> Result<GameDescription, HtmlImportError> {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text, path)
}

/// Parse HTML export text for a given source path.
pub fn parse_str(html: &str, source: &Path) -> Result<GameDescription, HtmlImportError> {
    let document = Html::parse_document(html);
    let mut game = GameDescription::new(source, None);
    game.file_data_acquired = true;

    game.name = select_text(&document, "title").unwrap_or_default();
    game.description = meta_description(&document).filter(|d| !d.is_empty());

    populate_grid(&document, &mut game)?;
    Ok(game)
}

fn populate_grid(document: &Html, game: &mut GameDescription) -> Result<(), HtmlImportError> {
    let Some(selectors) = GridSelectors::new() else {
        return Ok(());
    };

    let Some(table) = document.select(&selectors.table).next() else {
        log::warn!("export contains no grid table");
        return Ok(());
    };

    let mut rows = table.select(&selectors.row);
    let Some(header_row) = rows.next() else {
        log::warn!("export grid has no rows");
        return Ok(());
    };

    game.categories = header_row
        .select(&selectors.header)
        .map(|th| collapse_whitespace(&th.text().collect::<String>()))
        .filter(|name| !name.is_empty())
        .map(Category::new)
        .collect();
    if game.categories.is_empty() {
        log::warn!("export grid has no category headers");
        return Ok(());
    }

    for (row_index, row) in rows.enumerate() {
        for cell in row.select(&selectors.cell) {
            let Some(category_name) = cell.attr("data-category") else {
                continue;
            };
            let Some(position) = game
                .categories
                .iter()
                .position(|c| c.name == category_name)
            else {
                return Err(HtmlImportError::CategoryMismatch {
                    category: category_name.to_string(),
                    partial: Box::new(game.clone()),
                });
            };

            let (question, question_image) = side_content(cell, &selectors.front, &selectors.image);
            let (answer, answer_image) = side_content(cell, &selectors.back, &selectors.image);
            game.categories[position].questions.push(Question {
                question,
                question_image,
                answer,
                answer_image,
                points: cell_points(cell, row_index + 1),
            });
        }
    }
    Ok(())
}

struct GridSelectors {
    table: Selector,
    row: Selector,
    header: Selector,
    cell: Selector,
    front: Selector,
    back: Selector,
    image: Selector,
}

impl GridSelectors {
    // The selectors are fixed literals; None is unreachable in practice.
    fn new() -> Option<Self> {
        Some(Self {
            table: Selector::parse("table").ok()?,
            row: Selector::parse("tr").ok()?,
            header: Selector::parse("th").ok()?,
            cell: Selector::parse("td[data-category]").ok()?,
            front: Selector::parse(".front").ok()?,
            back: Selector::parse(".back").ok()?,
            image: Selector::parse("img").ok()?,
        })
    }
}

/// Extract the text and image reference of a cell side. Either may be
/// absent; relative image paths become absolute export URLs.
fn side_content(
    cell: ElementRef<'_>,
    side: &Selector,
    image: &Selector,
) -> (Option<String>, Option<String>) {
    let Some(element) = cell.select(side).next() else {
        return (None, None);
    };
    let text = collapse_whitespace(&element.text().collect::<String>());
    let image = element
        .select(image)
        .next()
        .and_then(|img| img.attr("src"))
        .map(absolutize);
    ((!text.is_empty()).then_some(text), image)
}

/// The point value is the cell's own visible text, outside front/back.
/// An unparseable value falls back to the row default.
fn cell_points(cell: ElementRef<'_>, row: usize) -> u32 {
    cell.children()
        .filter_map(|node| node.value().as_text())
        .flat_map(|text| text.split_whitespace())
        .find_map(|token| token.parse::<u32>().ok())
        .unwrap_or(row as u32 * DEFAULT_POINT_MULTIPLIER)
}

fn absolutize(src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        src.to_string()
    } else if src.starts_with('/') {
        format!("{EXPORT_BASE_URL}{src}")
    } else {
        format!("{EXPORT_BASE_URL}/{src}")
    }
}

fn select_text(document: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    let element = document.select(&selector).next()?;
    let text = collapse_whitespace(&element.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

fn meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    let content = document.select(&selector).next()?.attr("content")?;
    Some(clean_description(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizboard_core::text::MAX_DESCRIPTION_LEN;
    use std::path::PathBuf;

    fn export(description: &str, cells: &str) -> String {
        format!(
            "<html><head><title> Science  Night </title>\n\
             <meta name=\"description\" content=\"{description}\">\n\
             </head><body><table>\n\
             <tr><th>Physics</th><th>Chemistry</th><th>Biology</th></tr>\n\
             {cells}\n\
             </table></body></html>"
        )
    }

    fn source() -> PathBuf {
        PathBuf::from("export.html")
    }

    #[test]
    fn parses_headers_cells_and_metadata() {
        let html = export(
            "A quiz   about\nscience.",
            "<tr>\
             <td data-category=\"Physics\">100\
             <div class=\"front\">What is c?<img src=\"/img/light.png\"></div>\
             <div class=\"back\">The speed of light</div></td>\
             <td data-category=\"Biology\">100\
             <div class=\"front\">Largest organ?</div>\
             <div class=\"back\">The skin</div></td>\
             </tr>",
        );

        let game = parse_str(&html, &source()).unwrap();

        assert_eq!(game.name, "Science Night");
        assert_eq!(game.description.as_deref(), Some("A quiz about science."));
        assert!(!game.native);
        assert!(game.file_data_acquired);

        let names: Vec<_> = game.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Physics", "Chemistry", "Biology"]);

        let physics = &game.categories[0].questions[0];
        assert_eq!(physics.question.as_deref(), Some("What is c?"));
        assert_eq!(
            physics.question_image.as_deref(),
            Some("https://jeopardylabs.com/img/light.png")
        );
        assert_eq!(physics.answer.as_deref(), Some("The speed of light"));
        assert_eq!(physics.points, 100);

        assert!(game.categories[1].questions.is_empty());
        assert_eq!(game.categories[2].questions.len(), 1);
    }

    #[test]
    fn unknown_cell_category_is_a_hard_error() {
        let html = export(
            "desc",
            "<tr>\
             <td data-category=\"Physics\">100\
             <div class=\"front\">Q</div><div class=\"back\">A</div></td>\
             <td data-category=\"Foo\">100\
             <div class=\"front\">Q</div><div class=\"back\">A</div></td>\
             </tr>",
        );

        let err = parse_str(&html, &source()).unwrap_err();
        let HtmlImportError::CategoryMismatch { category, partial } = err else {
            panic!("expected a category mismatch");
        };
        assert_eq!(category, "Foo");
        // Everything processed before the mismatch is retained.
        assert_eq!(partial.categories.len(), 3);
        assert_eq!(partial.categories[0].questions.len(), 1);
        assert!(partial.categories[1].questions.is_empty());
    }

    #[test]
    fn missing_point_value_falls_back_to_the_row_default() {
        let html = export(
            "desc",
            "<tr><td data-category=\"Physics\">\
             <div class=\"front\">Q</div><div class=\"back\">A</div></td></tr>\
             <tr><td data-category=\"Physics\">\
             <div class=\"front\">Q</div><div class=\"back\">A</div></td></tr>",
        );

        let game = parse_str(&html, &source()).unwrap();
        let points: Vec<_> = game.categories[0].questions.iter().map(|q| q.points).collect();
        assert_eq!(points, vec![100, 200]);
    }

    #[test]
    fn long_descriptions_are_truncated_with_a_marker() {
        let html = export(&"word ".repeat(100), "");

        let game = parse_str(&html, &source()).unwrap();
        let description = game.description.unwrap();
        assert_eq!(description.chars().count(), MAX_DESCRIPTION_LEN);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn absent_sides_degrade_to_none() {
        let html = export(
            "desc",
            "<tr><td data-category=\"Chemistry\">300</td></tr>",
        );

        let game = parse_str(&html, &source()).unwrap();
        let question = &game.categories[1].questions[0];
        assert_eq!(question.question, None);
        assert_eq!(question.question_image, None);
        assert_eq!(question.answer, None);
        assert_eq!(question.points, 300);
    }
}
