//! Lenient reader and representation for flat key/value property files.

use std::collections::HashMap;
use std::io;
use std::path::Path;

/// An order-insensitive key → value map read from a property file.
///
/// Lines are `key=value` (a `:` separator is also accepted); `#` and `!`
/// start comment lines; keys and values are trimmed; a later occurrence
/// of a key overrides an earlier one. There are no escape sequences.
#[derive(Debug, Default)]
pub struct PropMap {
    entries: HashMap<String, String>,
}

impl PropMap {
    /// Read and parse a property file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Parse property text.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some(split) = line.find(['=', ':']) else {
                continue;
            };
            let key = line[..split].trim();
            let value = line[split + 1..].trim();
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), value.to_string());
        }
        Self { entries }
    }

    /// Look up a key. Absent keys and blank values both return `None`:
    /// blank optional fields are treated as absent throughout the format.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Look up a key and parse it as a positive integer. An unparseable
    /// value is logged and treated as absent.
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        let raw = self.get(key)?;
        match raw.parse::<u32>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("ignoring non-numeric value '{raw}' for key '{key}'");
                None
            }
        }
    }
}

/// Iterate 1-based indexed keys, terminating on the first absent key.
///
/// The probe produces a lazy, finite sequence: for keys 1..N present and
/// N+1 absent, exactly N items are yielded in order, regardless of what
/// exists beyond the gap.
pub fn indexed<'a, K>(props: &'a PropMap, key: K) -> impl Iterator<Item = (usize, &'a str)>
where
    K: Fn(usize) -> String + 'a,
{
    (1usize..).map_while(move |n| props.get(&key(n)).map(|value| (n, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comments_separators_and_overrides() {
        let props = PropMap::parse(
            "# comment\n\
             ! also a comment\n\
             game.name = First\n\
             game.name=Second\n\
             colon.key: value\n\
             blank.value =\n\
             no separator line\n",
        );
        assert_eq!(props.get("game.name"), Some("Second"));
        assert_eq!(props.get("colon.key"), Some("value"));
        assert_eq!(props.get("blank.value"), None);
        assert_eq!(props.get("missing"), None);
    }

    #[test]
    fn indexed_probe_stops_at_first_gap() {
        let props = PropMap::parse(
            "player.1.name=Ann\n\
             player.2.name=Ben\n\
             player.4.name=Dora\n",
        );
        let names: Vec<_> = indexed(&props, |n| format!("player.{n}.name"))
            .map(|(_, name)| name)
            .collect();
        assert_eq!(names, vec!["Ann", "Ben"]);
    }

    #[test]
    fn get_u32_rejects_garbage() {
        let props = PropMap::parse("question.1.points=abc\nquestion.2.points=300\n");
        assert_eq!(props.get_u32("question.1.points"), None);
        assert_eq!(props.get_u32("question.2.points"), Some(300));
    }
}
