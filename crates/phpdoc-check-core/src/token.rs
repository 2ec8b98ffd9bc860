//! Lossless PHP tokenizer.
//!
//! Produces a flat stream of classified tokens that together cover the
//! input byte-for-byte. The tokenizer never fails: unterminated comments,
//! strings and heredocs simply run to the end of the input, and any
//! character it does not recognize becomes a one-character [`TokenKind::Punct`].
//!
//! A source containing an open tag (`<?php`, `<?=`, `<?`) starts in HTML
//! mode; a source without one is read as PHP code from the first byte.

use serde::Serialize;

/// Kind of a source token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Text outside of `<?php ... ?>`.
    InlineHtml,
    /// `<?php`, `<?=` or `<?`, including one trailing newline if present.
    OpenTag,
    /// `?>`.
    CloseTag,
    /// Spaces, tabs and newlines.
    Whitespace,
    /// `// ...` or `# ...` up to (not including) the newline.
    LineComment,
    /// `/* ... */` that is not a documentation block.
    BlockComment,
    /// `/** ... */` documentation block.
    DocComment,
    /// `#[...]` attribute group.
    Attribute,
    /// `$name`.
    Variable,
    /// Bare name that is not a reserved word.
    Identifier,
    /// Reserved word (matched case-insensitively).
    Keyword,
    /// Numeric literal.
    Number,
    /// Quoted string, heredoc or nowdoc.
    StringLiteral,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// Any other operator or unrecognized character.
    Punct,
}

/// A classified slice of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Exact source text of the token.
    pub text: String,
    /// 1-based line of the first character.
    pub line: usize,
    /// Byte offset of the first character.
    pub offset: usize,
}

impl Token {
    /// Returns true for whitespace, open tags and every kind of comment.
    #[must_use]
    pub fn is_trivia(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::DocComment
                | TokenKind::OpenTag
        )
    }

    /// Returns true if this token opens a phpdoc: a `/**` block or a `///` line.
    #[must_use]
    pub fn is_phpdoc(&self) -> bool {
        self.kind == TokenKind::DocComment
            || (self.kind == TokenKind::LineComment && self.text.starts_with("///"))
    }

    /// Returns true if this is the keyword `word` (case-insensitive).
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text.eq_ignore_ascii_case(word)
    }

    /// Returns true if this is punctuation with exactly the given text.
    #[must_use]
    pub fn is_punct(&self, text: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == text
    }

    /// Returns the byte offset just past the token.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

const KEYWORDS: &[&str] = &[
    "abstract",
    "and",
    "as",
    "break",
    "case",
    "catch",
    "class",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enddeclare",
    "endfor",
    "endforeach",
    "endif",
    "endswitch",
    "endwhile",
    "enum",
    "extends",
    "final",
    "finally",
    "fn",
    "for",
    "foreach",
    "function",
    "global",
    "goto",
    "if",
    "implements",
    "include",
    "include_once",
    "instanceof",
    "insteadof",
    "interface",
    "isset",
    "match",
    "namespace",
    "new",
    "or",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "require_once",
    "return",
    "static",
    "switch",
    "throw",
    "trait",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
    "yield",
];

/// Returns true if `word` is a reserved word.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    KEYWORDS.contains(&lower.as_str())
}

/// Multi-character operators recognized as a single [`TokenKind::Punct`].
/// Longest first.
const OPERATORS: &[&str] = &["?->", "...", "::", "->", "=>"];

/// Splits `source` into tokens.
///
/// Concatenating the `text` of the returned tokens reproduces `source`.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    in_php: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            in_php: !is_template(src),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while self.pos < self.src.len() {
            if self.in_php {
                self.lex_php();
            } else {
                self.lex_html();
            }
        }
        self.tokens
    }

    fn rest(&self) -> &'a str {
        let src = self.src;
        &src[self.pos..]
    }

    fn push(&mut self, kind: TokenKind, len: usize) {
        let src = self.src;
        let end = (self.pos + len).min(src.len());
        let text = &src[self.pos..end];
        self.tokens.push(Token {
            kind,
            text: text.to_string(),
            line: self.line,
            offset: self.pos,
        });
        self.line += text.matches('\n').count();
        self.pos = end;
    }

    fn lex_html(&mut self) {
        match find_open_tag(self.src, self.pos) {
            Some(start) if start == self.pos => {
                let rest = self.rest();
                let mut len = if rest
                    .get(..5)
                    .is_some_and(|tag| tag.eq_ignore_ascii_case("<?php"))
                {
                    5
                } else if rest.starts_with("<?=") {
                    3
                } else {
                    2
                };
                if rest[len..].starts_with("\r\n") {
                    len += 2;
                } else if rest[len..].starts_with('\n') {
                    len += 1;
                }
                self.push(TokenKind::OpenTag, len);
                self.in_php = true;
            }
            Some(start) => self.push(TokenKind::InlineHtml, start - self.pos),
            None => self.push(TokenKind::InlineHtml, self.src.len() - self.pos),
        }
    }

    fn lex_php(&mut self) {
        let rest = self.rest();
        let Some(c) = rest.chars().next() else {
            return;
        };

        if rest.starts_with("?>") {
            self.push(TokenKind::CloseTag, 2);
            self.in_php = false;
            return;
        }

        match c {
            c if c.is_whitespace() => {
                let len = rest
                    .find(|ch: char| !ch.is_whitespace())
                    .unwrap_or(rest.len());
                self.push(TokenKind::Whitespace, len);
            }
            '#' if rest.starts_with("#[") => {
                let len = bracket_group_len(rest);
                self.push(TokenKind::Attribute, len);
            }
            '#' => self.push(TokenKind::LineComment, line_comment_len(rest)),
            '/' if rest.starts_with("//") => {
                self.push(TokenKind::LineComment, line_comment_len(rest));
            }
            '/' if rest.starts_with("/*") => {
                let len = rest[2..].find("*/").map_or(rest.len(), |i| i + 4);
                let kind = if is_doc_block(&rest[..len]) {
                    TokenKind::DocComment
                } else {
                    TokenKind::BlockComment
                };
                self.push(kind, len);
            }
            '\'' | '"' | '`' => self.push(TokenKind::StringLiteral, quoted_len(rest, c)),
            '<' if rest.starts_with("<<<") => match heredoc_len(rest) {
                Some(len) => self.push(TokenKind::StringLiteral, len),
                None => self.push(TokenKind::Punct, 3),
            },
            '$' if rest[1..].starts_with(is_ident_start) => {
                let len = 1 + ident_len(&rest[1..]);
                self.push(TokenKind::Variable, len);
            }
            c if is_ident_start(c) => {
                let len = ident_len(rest);
                let kind = if is_keyword(&rest[..len]) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                self.push(kind, len);
            }
            c if c.is_ascii_digit() => {
                let len = rest
                    .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '.'))
                    .unwrap_or(rest.len());
                self.push(TokenKind::Number, len);
            }
            '{' => self.push(TokenKind::OpenBrace, 1),
            '}' => self.push(TokenKind::CloseBrace, 1),
            '(' => self.push(TokenKind::OpenParen, 1),
            ')' => self.push(TokenKind::CloseParen, 1),
            '[' => self.push(TokenKind::OpenBracket, 1),
            ']' => self.push(TokenKind::CloseBracket, 1),
            ';' => self.push(TokenKind::Semicolon, 1),
            ',' => self.push(TokenKind::Comma, 1),
            c => {
                let len = OPERATORS
                    .iter()
                    .find(|op| rest.starts_with(**op))
                    .map_or(c.len_utf8(), |op| op.len());
                self.push(TokenKind::Punct, len);
            }
        }
    }
}

/// A source is templated only if it has a full `<?php` or `<?=` tag.
/// A bare `<?` alone (for example inside `'<?xml'`) does not count.
fn is_template(src: &str) -> bool {
    src.contains("<?=") || src.to_ascii_lowercase().contains("<?php")
}

fn find_open_tag(src: &str, from: usize) -> Option<usize> {
    src[from..].find("<?").map(|i| i + from)
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn ident_len(s: &str) -> usize {
    s.find(|c: char| !(c == '_' || c.is_alphanumeric()))
        .unwrap_or(s.len())
}

/// Line comments end before a newline or a `?>` close tag.
fn line_comment_len(s: &str) -> usize {
    let newline = s.find('\n').unwrap_or(s.len());
    let close = s.find("?>").unwrap_or(s.len());
    let end = newline.min(close);
    if end > 0 && s[..end].ends_with('\r') {
        end - 1
    } else {
        end
    }
}

/// `/**` followed by whitespace or another `*` opens a documentation block.
/// `/**/` is an empty plain comment.
fn is_doc_block(text: &str) -> bool {
    text.strip_prefix("/**")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_whitespace() || c == '*')
}

fn quoted_len(s: &str, quote: char) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + 1;
        }
    }
    s.len()
}

fn bracket_group_len(s: &str) -> usize {
    let mut depth = 0usize;
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i + 1;
                }
            }
            '\'' | '"' => {
                let len = quoted_len(&s[i..], c);
                for _ in s[i..i + len].chars().skip(1) {
                    chars.next();
                }
            }
            _ => {}
        }
    }
    s.len()
}

/// Length of a heredoc or nowdoc starting at `<<<`, or `None` if the
/// header is not a valid label.
fn heredoc_len(s: &str) -> Option<usize> {
    let header_end = s.find('\n')?;
    let label = s[3..header_end]
        .trim()
        .trim_matches(|c| c == '"' || c == '\'');
    if label.is_empty() || ident_len(label) != label.len() {
        return None;
    }

    let mut offset = header_end + 1;
    for line in s[header_end + 1..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(after) = trimmed.strip_prefix(label) {
            if !after.starts_with(|c: char| c == '_' || c.is_alphanumeric()) {
                return Some(offset + (line.len() - trimmed.len()) + label.len());
            }
        }
        offset += line.len();
    }
    Some(s.len())
}

/// Reconstructs the source text from a token slice.
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
