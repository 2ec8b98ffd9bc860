//! Structural model of a PHP source file.
//!
//! [`PhpFile::parse`] walks the token stream once and recovers the
//! documentable declarations together with the phpdoc block that
//! immediately precedes each of them. It is not a PHP parser: it only
//! tracks enough structure (brace/paren depth, class and function
//! bodies, statement terminators) to delimit declarations.
//!
//! The parser never fails. Unterminated bodies and statements close at
//! the end of the input.

use crate::phpdoc::DocComment;
use crate::token::{tokenize, Token, TokenKind};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Token index range of a declaration, both ends inclusive.
pub type Boundaries = (usize, usize);

/// Common view over every kind of declaration.
pub trait Declaration {
    /// Simple name (`bar`, `Foo`, `MAX_SIZE`).
    fn name(&self) -> &str;

    /// Qualified display name (`Foo::bar`, `Foo::$prop`).
    fn fullname(&self) -> &str;

    /// Token range of the declaration.
    fn boundaries(&self) -> Boundaries;

    /// The attached phpdoc block, if any.
    fn phpdocs(&self) -> Option<&DocComment>;

    /// Token used to report the declaration's line.
    fn line_token(&self) -> usize {
        self.boundaries().0
    }
}

/// A class, interface, trait or enum.
#[derive(Debug, Clone, Serialize)]
pub struct ClassDecl {
    /// Class name.
    pub name: String,
    /// Introducing keyword (`class`, `interface`, `trait`, `enum`).
    pub keyword: String,
    /// From the keyword to the closing brace.
    pub boundaries: Boundaries,
    /// Attached phpdoc block.
    pub phpdocs: Option<DocComment>,
}

/// One declared function argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    /// Declared type, or empty when the source gives none.
    pub type_hint: String,
    /// Variable name including `$` (and `...` for variadics).
    pub name: String,
}

impl Argument {
    /// Creates an argument from its declared type and name.
    #[must_use]
    pub fn new(type_hint: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_hint: type_hint.into(),
            name: name.into(),
        }
    }
}

/// A function or method.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDecl {
    /// Function name.
    pub name: String,
    /// `Class::name` for methods, `name` otherwise.
    pub fullname: String,
    /// Enclosing class for methods.
    pub class_name: Option<String>,
    /// From the `function` keyword to the closing brace or `;`.
    pub boundaries: Boundaries,
    /// Declared arguments in order.
    pub arguments: Vec<Argument>,
    /// Attached phpdoc block.
    pub phpdocs: Option<DocComment>,
}

/// A class property.
#[derive(Debug, Clone, Serialize)]
pub struct VariableDecl {
    /// Property name without `$`.
    pub name: String,
    /// `Class::$name`.
    pub fullname: String,
    /// Enclosing class.
    pub class_name: String,
    /// The whole declaration statement, shared by comma-separated siblings.
    pub boundaries: Boundaries,
    /// Index of the `$name` token.
    pub tid: usize,
    /// Attached phpdoc block.
    pub phpdocs: Option<DocComment>,
}

/// How a constant was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstantKind {
    /// `const NAME = ...;`
    Const,
    /// `define('NAME', ...);`
    Define,
}

/// A constant or `define()` call.
#[derive(Debug, Clone, Serialize)]
pub struct ConstantDecl {
    /// Constant name.
    pub name: String,
    /// `Class::NAME` for class constants, `NAME` otherwise.
    pub fullname: String,
    /// Declaration form.
    pub kind: ConstantKind,
    /// The whole statement.
    pub boundaries: Boundaries,
    /// Index of the name token (`const`) or the `define` token.
    pub tid: usize,
    /// Attached phpdoc block.
    pub phpdocs: Option<DocComment>,
}

impl Declaration for ClassDecl {
    fn name(&self) -> &str {
        &self.name
    }
    fn fullname(&self) -> &str {
        &self.name
    }
    fn boundaries(&self) -> Boundaries {
        self.boundaries
    }
    fn phpdocs(&self) -> Option<&DocComment> {
        self.phpdocs.as_ref()
    }
}

impl Declaration for FunctionDecl {
    fn name(&self) -> &str {
        &self.name
    }
    fn fullname(&self) -> &str {
        &self.fullname
    }
    fn boundaries(&self) -> Boundaries {
        self.boundaries
    }
    fn phpdocs(&self) -> Option<&DocComment> {
        self.phpdocs.as_ref()
    }
}

impl Declaration for VariableDecl {
    fn name(&self) -> &str {
        &self.name
    }
    fn fullname(&self) -> &str {
        &self.fullname
    }
    fn boundaries(&self) -> Boundaries {
        self.boundaries
    }
    fn phpdocs(&self) -> Option<&DocComment> {
        self.phpdocs.as_ref()
    }
    fn line_token(&self) -> usize {
        self.tid
    }
}

impl Declaration for ConstantDecl {
    fn name(&self) -> &str {
        &self.name
    }
    fn fullname(&self) -> &str {
        &self.fullname
    }
    fn boundaries(&self) -> Boundaries {
        self.boundaries
    }
    fn phpdocs(&self) -> Option<&DocComment> {
        self.phpdocs.as_ref()
    }
    fn line_token(&self) -> usize {
        self.tid
    }
}

/// A parsed PHP file: tokens plus recovered declarations.
#[derive(Debug, Clone, Serialize)]
pub struct PhpFile {
    path: PathBuf,
    #[serde(skip)]
    tokens: Vec<Token>,
    file_phpdocs: Option<DocComment>,
    classes: Vec<ClassDecl>,
    functions: Vec<FunctionDecl>,
    variables: Vec<VariableDecl>,
    constants: Vec<ConstantDecl>,
    phpdocs: Vec<DocComment>,
}

impl PhpFile {
    /// Tokenizes and parses `source`. `path` is only used for display.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, source: &str) -> Self {
        let tokens = tokenize(source);
        let mut file = Self {
            path: path.into(),
            tokens: Vec::new(),
            file_phpdocs: None,
            classes: Vec::new(),
            functions: Vec::new(),
            variables: Vec::new(),
            constants: Vec::new(),
            phpdocs: Vec::new(),
        };
        StructureParser::new(&tokens, &mut file).run();
        file.tokens = tokens;
        file
    }

    /// Display path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full token stream.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The file-level phpdoc block, if one precedes the first code token.
    #[must_use]
    pub fn file_phpdocs(&self) -> Option<&DocComment> {
        self.file_phpdocs.as_ref()
    }

    /// Classes, interfaces, traits and enums in source order.
    #[must_use]
    pub fn classes(&self) -> &[ClassDecl] {
        &self.classes
    }

    /// Functions and methods in source order.
    #[must_use]
    pub fn functions(&self) -> &[FunctionDecl] {
        &self.functions
    }

    /// Class properties in source order.
    #[must_use]
    pub fn variables(&self) -> &[VariableDecl] {
        &self.variables
    }

    /// `const` declarations and `define()` calls in source order.
    #[must_use]
    pub fn all_constants(&self) -> &[ConstantDecl] {
        &self.constants
    }

    /// `const` declarations only.
    pub fn constants(&self) -> impl Iterator<Item = &ConstantDecl> {
        self.constants
            .iter()
            .filter(|c| c.kind == ConstantKind::Const)
    }

    /// `define()` calls only.
    pub fn defines(&self) -> impl Iterator<Item = &ConstantDecl> {
        self.constants
            .iter()
            .filter(|c| c.kind == ConstantKind::Define)
    }

    /// Every phpdoc in the file, attached or not, in source order.
    #[must_use]
    pub fn phpdocs(&self) -> &[DocComment] {
        &self.phpdocs
    }

    /// Line of the token at `tid`; 1 if out of range.
    #[must_use]
    pub fn line_number(&self, tid: usize) -> usize {
        self.tokens.get(tid).map_or(1, |t| t.line)
    }

    /// Byte span `(offset, length)` of the token at `tid`.
    #[must_use]
    pub fn token_span(&self, tid: usize) -> (usize, usize) {
        self.tokens
            .get(tid)
            .map_or((0, 0), |t| (t.offset, t.text.len()))
    }

    /// 1-based character column of the token at `tid`.
    #[must_use]
    pub fn column_number(&self, tid: usize) -> usize {
        let mut column = 1;
        for token in self.tokens[..tid.min(self.tokens.len())].iter().rev() {
            if let Some(pos) = token.text.rfind('\n') {
                return column + token.text[pos + 1..].chars().count();
            }
            column += token.text.chars().count();
        }
        column
    }

    /// Byte offset where `line` starts; end of input past the last line.
    #[must_use]
    pub fn line_offset(&self, line: usize) -> usize {
        if line <= 1 {
            return 0;
        }
        let mut current = 1;
        for token in &self.tokens {
            for (pos, _) in token.text.match_indices('\n') {
                current += 1;
                if current == line {
                    return token.offset + pos + 1;
                }
            }
        }
        self.tokens.last().map_or(0, Token::end)
    }
}

const CLASS_KEYWORDS: &[&str] = &["class", "interface", "trait", "enum"];

const MODIFIERS: &[&str] = &[
    "abstract",
    "final",
    "public",
    "protected",
    "private",
    "static",
    "var",
    "readonly",
];

fn is_modifier(token: &Token) -> bool {
    token.kind == TokenKind::Keyword && MODIFIERS.iter().any(|m| token.is_keyword(m))
}

fn opens_group(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::OpenBrace | TokenKind::OpenParen | TokenKind::OpenBracket
    )
}

fn closes_group(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::CloseBrace | TokenKind::CloseParen | TokenKind::CloseBracket
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContainerKind {
    Class,
    Function,
}

/// An open class or function body, by token range.
#[derive(Debug)]
struct Container {
    kind: ContainerKind,
    name: String,
    open: usize,
    close: usize,
}

impl Container {
    fn contains(&self, tid: usize) -> bool {
        self.open < tid && tid < self.close
    }
}

struct StructureParser<'a> {
    tokens: &'a [Token],
    file: &'a mut PhpFile,
    /// Index into `file.phpdocs` of the last block not yet followed by code.
    pending: Option<usize>,
    containers: Vec<Container>,
    /// Declarations are not recognized before this index.
    skip_until: usize,
    seen_code: bool,
}

impl<'a> StructureParser<'a> {
    fn new(tokens: &'a [Token], file: &'a mut PhpFile) -> Self {
        Self {
            tokens,
            file,
            pending: None,
            containers: Vec::new(),
            skip_until: 0,
            seen_code: false,
        }
    }

    fn run(mut self) {
        for i in 0..self.tokens.len() {
            while self.containers.last().is_some_and(|c| c.close < i) {
                self.containers.pop();
            }

            let token = &self.tokens[i];
            match token.kind {
                TokenKind::Whitespace | TokenKind::OpenTag | TokenKind::Attribute => {}
                _ if token.is_phpdoc() => self.collect_phpdoc(i),
                TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::InlineHtml
                | TokenKind::CloseTag => self.pending = None,
                _ => self.significant(i),
            }
        }
    }

    fn collect_phpdoc(&mut self, i: usize) {
        let token = &self.tokens[i];
        let doc = DocComment::parse(token, i);
        if token.kind == TokenKind::DocComment {
            if !self.seen_code && self.file.file_phpdocs.is_none() {
                self.file.file_phpdocs = Some(doc.clone());
            }
            self.pending = Some(self.file.phpdocs.len());
        } else {
            self.pending = None;
        }
        self.file.phpdocs.push(doc);
    }

    fn significant(&mut self, i: usize) {
        if i >= self.skip_until {
            if let Some(until) = self.declaration(i) {
                self.skip_until = until;
            }
        }
        self.seen_code = true;
        if !is_modifier(&self.tokens[i]) {
            self.pending = None;
        }
    }

    /// Recognizes a declaration starting at `i`. Returns the index up to
    /// which further declarations are not looked for.
    fn declaration(&mut self, i: usize) -> Option<usize> {
        let token = &self.tokens[i];
        match token.kind {
            TokenKind::Keyword if CLASS_KEYWORDS.iter().any(|k| token.is_keyword(k)) => {
                self.class_like(i);
                None
            }
            TokenKind::Keyword if token.is_keyword("function") => self.function(i),
            TokenKind::Keyword if token.is_keyword("const") => self.constant(i),
            TokenKind::Keyword if is_modifier(token) && self.in_class_body(i) => {
                self.property(i)
            }
            TokenKind::Identifier if token.text.eq_ignore_ascii_case("define") => {
                self.define(i)
            }
            _ => None,
        }
    }

    fn attached_doc(&self) -> Option<DocComment> {
        self.pending.and_then(|p| self.file.phpdocs.get(p).cloned())
    }

    fn innermost(&self, i: usize) -> Option<&Container> {
        self.containers.iter().rev().find(|c| c.contains(i))
    }

    fn in_class_body(&self, i: usize) -> bool {
        self.innermost(i)
            .is_some_and(|c| c.kind == ContainerKind::Class)
    }

    fn enclosing_class(&self, i: usize) -> Option<String> {
        self.innermost(i)
            .filter(|c| c.kind == ContainerKind::Class)
            .map(|c| c.name.clone())
    }

    fn is_significant(token: &Token) -> bool {
        !token.is_trivia() && token.kind != TokenKind::Attribute
    }

    fn next_significant(&self, from: usize) -> Option<usize> {
        (from..self.tokens.len()).find(|&j| Self::is_significant(&self.tokens[j]))
    }

    fn prev_significant(&self, before: usize) -> Option<usize> {
        (0..before)
            .rev()
            .find(|&j| Self::is_significant(&self.tokens[j]))
    }

    fn last_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    /// Index of the token closing the group opened at `open`, tracking
    /// depth of the same bracket kind. End of input if unterminated.
    fn matching_close(&self, open: usize) -> usize {
        let (opener, closer) = match self.tokens[open].kind {
            TokenKind::OpenParen => (TokenKind::OpenParen, TokenKind::CloseParen),
            TokenKind::OpenBracket => (TokenKind::OpenBracket, TokenKind::CloseBracket),
            _ => (TokenKind::OpenBrace, TokenKind::CloseBrace),
        };
        let mut depth = 0usize;
        for j in open..self.tokens.len() {
            let kind = self.tokens[j].kind;
            if kind == opener {
                depth += 1;
            } else if kind == closer {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return j;
                }
            }
        }
        self.last_index()
    }

    /// Finds the body following a signature: `(Some(open), close)` for a
    /// braced body, `(None, semicolon)` for a bodiless declaration.
    fn find_body(&self, from: usize) -> (Option<usize>, usize) {
        for j in from..self.tokens.len() {
            match self.tokens[j].kind {
                TokenKind::OpenBrace => return (Some(j), self.matching_close(j)),
                TokenKind::Semicolon => return (None, j),
                _ => {}
            }
        }
        (None, self.last_index())
    }

    /// First `;` at group depth zero from `from`, or the `}` closing a
    /// braced body opened inside the statement (property hooks). Stops
    /// before a closing brace that ends the enclosing scope.
    fn statement_end(&self, from: usize) -> usize {
        let mut depth = 0usize;
        for j in from..self.tokens.len() {
            let kind = self.tokens[j].kind;
            if opens_group(kind) {
                depth += 1;
            } else if closes_group(kind) {
                if depth == 0 {
                    return j.saturating_sub(1).max(from);
                }
                depth -= 1;
                if depth == 0 && kind == TokenKind::CloseBrace {
                    return j;
                }
            } else if kind == TokenKind::Semicolon && depth == 0 {
                return j;
            }
        }
        self.last_index()
    }

    /// Walks back over modifiers preceding `i`.
    fn statement_start(&self, i: usize) -> usize {
        let mut start = i;
        while let Some(p) = self.prev_significant(start) {
            if is_modifier(&self.tokens[p]) {
                start = p;
            } else {
                break;
            }
        }
        start
    }

    fn class_like(&mut self, i: usize) {
        if let Some(p) = self.prev_significant(i) {
            let prev = &self.tokens[p];
            if prev.is_punct("::")
                || prev.is_punct("->")
                || prev.is_punct("?->")
                || prev.is_keyword("new")
            {
                return;
            }
        }
        let Some(name_idx) = self.next_significant(i + 1) else {
            return;
        };
        if self.tokens[name_idx].kind != TokenKind::Identifier {
            return;
        }

        let name = self.tokens[name_idx].text.clone();
        let (open, end) = self.find_body(name_idx + 1);
        self.file.classes.push(ClassDecl {
            name: name.clone(),
            keyword: self.tokens[i].text.to_ascii_lowercase(),
            boundaries: (i, end),
            phpdocs: self.attached_doc(),
        });
        if let Some(open) = open {
            self.containers.push(Container {
                kind: ContainerKind::Class,
                name,
                open,
                close: end,
            });
        }
    }

    fn function(&mut self, i: usize) -> Option<usize> {
        if let Some(p) = self.prev_significant(i) {
            if self.tokens[p].is_keyword("use") {
                return None;
            }
        }
        let mut name_idx = self.next_significant(i + 1)?;
        if self.tokens[name_idx].is_punct("&") {
            name_idx = self.next_significant(name_idx + 1)?;
        }
        if !matches!(
            self.tokens[name_idx].kind,
            TokenKind::Identifier | TokenKind::Keyword
        ) {
            return None;
        }
        let paren = self.next_significant(name_idx + 1)?;
        if self.tokens[paren].kind != TokenKind::OpenParen {
            return None;
        }

        let close_paren = self.matching_close(paren);
        let arguments = self.arguments(paren + 1, close_paren);
        let (open, end) = self.find_body(close_paren + 1);

        let name = self.tokens[name_idx].text.clone();
        let class_name = self.enclosing_class(i);
        let fullname = match &class_name {
            Some(class) => format!("{class}::{name}"),
            None => name.clone(),
        };

        self.file.functions.push(FunctionDecl {
            name: name.clone(),
            fullname,
            class_name,
            boundaries: (i, end),
            arguments,
            phpdocs: self.attached_doc(),
        });
        if let Some(open) = open {
            self.containers.push(Container {
                kind: ContainerKind::Function,
                name,
                open,
                close: end,
            });
        }

        Some(open.unwrap_or(end).max(i + 1))
    }

    /// Splits the parameter list between `start` and `end` (exclusive)
    /// at top-level commas.
    fn arguments(&self, start: usize, end: usize) -> Vec<Argument> {
        let mut arguments = Vec::new();
        let mut depth = 0usize;
        let mut segment_start = start;
        for j in start..=end.min(self.last_index()) {
            let kind = self.tokens[j].kind;
            let at_end = j == end;
            if !at_end && opens_group(kind) {
                depth += 1;
            } else if !at_end && closes_group(kind) {
                depth = depth.saturating_sub(1);
            } else if at_end || (kind == TokenKind::Comma && depth == 0) {
                if let Some(argument) = self.argument(segment_start, j) {
                    arguments.push(argument);
                }
                segment_start = j + 1;
            }
        }
        arguments
    }

    fn argument(&self, start: usize, end: usize) -> Option<Argument> {
        let mut type_hint = String::new();
        let mut variadic = false;
        for j in start..end {
            let token = &self.tokens[j];
            if !Self::is_significant(token) {
                continue;
            }
            match token.kind {
                TokenKind::Variable => {
                    let name = if variadic {
                        format!("...{}", token.text)
                    } else {
                        token.text.clone()
                    };
                    return Some(Argument::new(type_hint, name));
                }
                TokenKind::Keyword if is_modifier(token) => {}
                TokenKind::Punct if token.text == "&" => {}
                TokenKind::Punct if token.text == "..." => variadic = true,
                TokenKind::Punct if token.text == "=" => return None,
                _ => type_hint.push_str(&token.text),
            }
        }
        None
    }

    fn constant(&mut self, i: usize) -> Option<usize> {
        if let Some(p) = self.prev_significant(i) {
            if self.tokens[p].is_keyword("use") {
                return None;
            }
        }
        let start = self.statement_start(i);
        let end = self.statement_end(i + 1);
        let class_name = self.enclosing_class(i);
        let phpdocs = self.attached_doc();

        let mut depth = 0usize;
        let mut in_value = false;
        let mut candidate: Option<usize> = None;
        for j in i + 1..=end {
            let token = &self.tokens[j];
            if opens_group(token.kind) {
                depth += 1;
            } else if closes_group(token.kind) {
                depth = depth.saturating_sub(1);
            } else if depth > 0 {
                continue;
            } else if token.kind == TokenKind::Comma {
                in_value = false;
                candidate = None;
            } else if !in_value && token.is_punct("=") {
                in_value = true;
                if let Some(tid) = candidate.take() {
                    let name: String = self.tokens[tid].text.clone();
                    let fullname = match &class_name {
                        Some(class) => format!("{class}::{name}"),
                        None => name.clone(),
                    };
                    self.file.constants.push(ConstantDecl {
                        name,
                        fullname,
                        kind: ConstantKind::Const,
                        boundaries: (start, end),
                        tid,
                        phpdocs: phpdocs.clone(),
                    });
                }
            } else if !in_value
                && matches!(token.kind, TokenKind::Identifier | TokenKind::Keyword)
            {
                candidate = Some(j);
            }
        }

        Some(end + 1)
    }

    fn property(&mut self, i: usize) -> Option<usize> {
        let mut j = i;
        let first_var = loop {
            j = self.next_significant(j + 1)?;
            let token = &self.tokens[j];
            match token.kind {
                TokenKind::Variable => break j,
                TokenKind::Keyword if token.is_keyword("function") || token.is_keyword("const") => {
                    return None;
                }
                TokenKind::Semicolon
                | TokenKind::OpenBrace
                | TokenKind::CloseBrace
                | TokenKind::OpenParen => return None,
                TokenKind::Punct if token.text == "=" => return None,
                _ => {}
            }
        };

        let class_name = self.enclosing_class(i).unwrap_or_default();
        let end = self.statement_end(first_var);
        let phpdocs = self.attached_doc();

        let mut depth = 0usize;
        let mut want_name = true;
        for j in first_var..=end {
            let token = &self.tokens[j];
            if opens_group(token.kind) {
                depth += 1;
            } else if closes_group(token.kind) {
                depth = depth.saturating_sub(1);
            } else if depth == 0 && token.kind == TokenKind::Comma {
                want_name = true;
            } else if depth == 0 && want_name && token.kind == TokenKind::Variable {
                want_name = false;
                let name = token.text.trim_start_matches('$').to_string();
                self.file.variables.push(VariableDecl {
                    fullname: format!("{class_name}::${name}"),
                    name,
                    class_name: class_name.clone(),
                    boundaries: (i, end),
                    tid: j,
                    phpdocs: phpdocs.clone(),
                });
            }
        }

        Some(end + 1)
    }

    fn define(&mut self, i: usize) -> Option<usize> {
        if let Some(p) = self.prev_significant(i) {
            let prev = &self.tokens[p];
            if prev.is_punct("->")
                || prev.is_punct("?->")
                || prev.is_punct("::")
                || prev.is_keyword("function")
                || prev.is_keyword("new")
            {
                return None;
            }
        }
        let paren = self.next_significant(i + 1)?;
        if self.tokens[paren].kind != TokenKind::OpenParen {
            return None;
        }
        let name_idx = self.next_significant(paren + 1)?;
        let literal = &self.tokens[name_idx];
        if literal.kind != TokenKind::StringLiteral {
            return None;
        }
        let name = unquote(&literal.text)?;

        let close = self.matching_close(paren);
        let end = match self.next_significant(close + 1) {
            Some(semi) if self.tokens[semi].kind == TokenKind::Semicolon => semi,
            _ => close,
        };

        self.file.constants.push(ConstantDecl {
            fullname: name.clone(),
            name,
            kind: ConstantKind::Define,
            boundaries: (i, end),
            tid: i,
            phpdocs: self.attached_doc(),
        });

        Some(end + 1)
    }
}

/// Strips the quotes of a simple single- or double-quoted literal.
fn unquote(literal: &str) -> Option<String> {
    let quote = literal.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let inner = literal.strip_prefix(quote)?.strip_suffix(quote)?;
    Some(inner.to_string())
}
