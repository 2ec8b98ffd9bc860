//! Parsing of phpdoc comment blocks.
//!
//! A block is split into a description region (everything before the
//! first line starting with `@`) and a list of tags. The description's
//! first blank-line-delimited paragraph is the short description, the
//! remaining paragraphs form the long description.

use crate::token::{Token, TokenKind};
use serde::Serialize;

/// Placeholder stored in the type slot of a tag whose type was omitted,
/// e.g. `@param $name`.
pub const TYPE_PLACEHOLDER: &str = "type";

/// A single `@tag` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Tag name without the `@`.
    pub name: String,
    /// Leading whitespace-delimited words of the tag's first line.
    pub parameters: Vec<String>,
    /// Remaining free text, continuation lines joined by a space.
    pub description: String,
    /// Source line the tag starts on.
    pub line: usize,
}

impl Tag {
    /// Returns true if the tag carries nothing after its name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.description.is_empty()
    }

    /// Returns true if the type slot holds [`TYPE_PLACEHOLDER`].
    #[must_use]
    pub fn has_placeholder_type(&self) -> bool {
        self.parameters.first().map(String::as_str) == Some(TYPE_PLACEHOLDER)
    }
}

/// Number of parameter words split off the first line for a tag name.
fn tag_arity(name: &str) -> usize {
    match name {
        "param" => 2,
        "var" | "return" | "throws" => 1,
        _ => 0,
    }
}

/// Tags whose first slot is a type and may be followed by a `$name`.
fn is_typed_tag(name: &str) -> bool {
    matches!(name, "param" | "var" | "return")
}

/// A parsed phpdoc block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocComment {
    raw_text: String,
    short_description: String,
    long_description: String,
    tags: Vec<Tag>,
    is_inline: bool,
    line: usize,
    token_index: usize,
}

impl DocComment {
    /// Parses the comment carried by `token`, found at `token_index` in
    /// the file's token stream.
    #[must_use]
    pub fn parse(token: &Token, token_index: usize) -> Self {
        let raw = token.text.as_str();
        let is_inline = if token.kind == TokenKind::DocComment {
            raw.starts_with("/***")
        } else {
            raw.starts_with("///")
        };

        let mut doc = Self {
            raw_text: raw.to_string(),
            short_description: String::new(),
            long_description: String::new(),
            tags: Vec::new(),
            is_inline,
            line: token.line,
            token_index,
        };

        let mut description: Vec<&str> = Vec::new();
        for (offset, line) in content_lines(raw).into_iter().enumerate() {
            if let Some(tag_text) = line.strip_prefix('@') {
                doc.tags.push(parse_tag(tag_text, token.line + offset));
            } else if let Some(current) = doc.tags.last_mut() {
                if !line.is_empty() {
                    if !current.description.is_empty() {
                        current.description.push(' ');
                    }
                    current.description.push_str(line);
                }
            } else {
                description.push(line);
            }
        }

        let paragraphs = split_paragraphs(&description);
        let mut paragraphs = paragraphs.into_iter();
        doc.short_description = paragraphs.next().unwrap_or_default();
        doc.long_description = paragraphs.collect::<Vec<_>>().join("\n\n");
        doc
    }

    /// First paragraph of the description, or empty.
    #[must_use]
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Description paragraphs after the first, or empty.
    #[must_use]
    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    /// Short and long description joined by a blank line.
    #[must_use]
    pub fn description(&self) -> String {
        if self.long_description.is_empty() {
            self.short_description.clone()
        } else {
            format!("{}\n\n{}", self.short_description, self.long_description)
        }
    }

    /// All tags in source order.
    #[must_use]
    pub fn all_tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Tags named `name`, in source order.
    pub fn tags<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |t| t.name == name)
    }

    /// Tags named `name` that carry some content.
    pub fn non_empty_tags<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags(name).filter(|t| !t.is_empty())
    }

    /// Parameter slots of every tag named `name`.
    #[must_use]
    pub fn params(&self, name: &str) -> Vec<&[String]> {
        self.tags
            .iter()
            .filter(|t| t.name == name)
            .map(|t| t.parameters.as_slice())
            .collect()
    }

    /// True if the block was opened with an extra marker character
    /// (`/***` or `///`).
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.is_inline
    }

    /// Line of the opening marker.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Index of the comment token in the file's token stream.
    #[must_use]
    pub fn token_index(&self) -> usize {
        self.token_index
    }

    /// Line of the first raw line containing `marker`, or the opening
    /// line if the marker does not occur.
    #[must_use]
    pub fn line_of(&self, marker: &str) -> usize {
        self.raw_text
            .lines()
            .position(|l| l.contains(marker))
            .map_or(self.line, |offset| self.line + offset)
    }
}

/// Strips comment markers and returns one trimmed entry per raw line.
fn content_lines(raw: &str) -> Vec<&str> {
    let raw_lines: Vec<&str> = raw.lines().collect();
    let last = raw_lines.len().saturating_sub(1);

    raw_lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let mut line = line.trim();
            if i == 0 {
                line = line.trim_start_matches('/').trim_start_matches('*');
            }
            if i == last {
                line = line.strip_suffix("*/").unwrap_or(line);
            }
            if i > 0 {
                line = line.trim_start_matches('*');
            }
            line.trim()
        })
        .collect()
}

fn split_paragraphs(lines: &[&str]) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for &line in lines {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}

fn parse_tag(text: &str, line: usize) -> Tag {
    let name_len = text
        .find(|c: char| c.is_whitespace())
        .unwrap_or(text.len());
    let name = text[..name_len].to_string();
    let mut rest = text[name_len..].trim_start();

    let mut parameters = Vec::new();
    for _ in 0..tag_arity(&name) {
        if rest.is_empty() {
            break;
        }
        let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        parameters.push(rest[..word_len].to_string());
        rest = rest[word_len..].trim_start();
    }

    if is_typed_tag(&name)
        && parameters
            .first()
            .is_some_and(|p| p.trim_start_matches(['&', '.']).starts_with('$'))
    {
        parameters.insert(0, TYPE_PLACEHOLDER.to_string());
    }

    Tag {
        name,
        parameters,
        description: rest.trim_end().to_string(),
        line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn doc(src: &str) -> DocComment {
        let tokens = tokenize(src);
        let (index, token) = tokens
            .iter()
            .enumerate()
            .find(|(_, t)| t.is_phpdoc())
            .expect("source should contain a phpdoc");
        DocComment::parse(token, index)
    }

    #[test]
    fn splits_short_and_long_description() {
        let d = doc("/**\n * Short line\n * continues\n *\n * Long one\n *\n * Long two\n * @return int\n */");
        assert_eq!(d.short_description(), "Short line\ncontinues");
        assert_eq!(d.long_description(), "Long one\n\nLong two");
        assert_eq!(d.all_tags().len(), 1);
    }

    #[test]
    fn short_description_on_opening_line() {
        let d = doc("/** Does things */");
        assert_eq!(d.short_description(), "Does things");
        assert!(d.all_tags().is_empty());
    }

    #[test]
    fn empty_block() {
        let d = doc("/** */");
        assert_eq!(d.short_description(), "");
        assert_eq!(d.long_description(), "");
        assert!(d.all_tags().is_empty());
        assert!(!d.is_inline());
    }

    #[test]
    fn tags_only_has_empty_short_description() {
        let d = doc("/**\n * @package foo\n */");
        assert_eq!(d.short_description(), "");
        assert_eq!(d.tags("package").count(), 1);
    }

    #[test]
    fn parses_param_slots() {
        let d = doc("/**\n * Doc\n * @param int $x the value\n *        more text\n * @param $y\n * @param string\n */");
        let params = d.params("param");
        assert_eq!(params.len(), 3);
        assert_eq!(params[0], ["int".to_string(), "$x".to_string()]);
        assert_eq!(params[1], [TYPE_PLACEHOLDER.to_string(), "$y".to_string()]);
        assert_eq!(params[2], ["string".to_string()]);

        let first = d.tags("param").next().expect("param tag");
        assert_eq!(first.description, "the value more text");
        assert_eq!(first.line, 3);
    }

    #[test]
    fn repeated_tags_keep_order() {
        let d = doc("/**\n * @see a\n * @author me\n * @see b\n */");
        let sees: Vec<&str> = d.tags("see").map(|t| t.description.as_str()).collect();
        assert_eq!(sees, vec!["a", "b"]);
    }

    #[test]
    fn var_with_missing_type_gets_placeholder() {
        let d = doc("/** @var $foo */");
        let tag = d.tags("var").next().expect("var tag");
        assert!(tag.has_placeholder_type());
    }

    #[test]
    fn detects_inline_markers() {
        assert!(doc("/*** extra */").is_inline());
        assert!(doc("/// three slashes").is_inline());
        assert!(!doc("/** normal */").is_inline());
    }

    #[test]
    fn line_of_marker() {
        let d = doc("<?php\n\n/**\n * Text\n *\n * @copyright 2012 Someone\n */");
        assert_eq!(d.line(), 3);
        assert_eq!(d.line_of("@copyright"), 6);
        assert_eq!(d.line_of("@missing"), 3);
    }

    #[test]
    fn empty_copyright_is_empty_tag() {
        let d = doc("/**\n * @copyright\n */");
        assert_eq!(d.tags("copyright").count(), 1);
        assert_eq!(d.non_empty_tags("copyright").count(), 0);
    }
}
