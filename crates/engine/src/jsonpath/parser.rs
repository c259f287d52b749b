//! JSONPath parser
//!
//! Supported syntax:
//! - `$` root; an expression starting with `*` or `[` is rooted implicitly
//! - `.name`, `['name']`, `["name"]` - member by name
//! - `.*`, `[*]` - wildcard
//! - `[n]` - array index, negative counts from the end
//! - `[start:end:step]` - array slice, every part optional
//! - `[0,2]`, `['a','b']` - unions
//! - `..name`, `..*`, `..[...]` - recursive descent
//! - `[?(@.k)]`, `[?(@.k == 'v')]` - filters with `== != < <= > >=`,
//!   combined with `&&` and `||`

use super::ast::{CompareOp, FilterExpr, JsonPathExpr, RelPath, RelStep, Segment, Selector};
use jsontext_core::JsonValue;
use std::str::FromStr;
use thiserror::Error;

/// Error type for JSONPath parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExprParseError {
    /// Empty expression
    #[error("empty expression")]
    Empty,
    /// Expression does not start with `$`, `*` or `[`
    #[error("expression must start with '$', '*' or '[', found '{0}'")]
    MissingRoot(char),
    /// Empty member name
    #[error("empty member name at position {0}")]
    EmptyName(usize),
    /// Unclosed bracket
    #[error("unclosed bracket starting at position {0}")]
    UnclosedBracket(usize),
    /// Unterminated quoted string
    #[error("unterminated string starting at position {0}")]
    UnterminatedString(usize),
    /// Invalid integer
    #[error("invalid integer at position {0}: {1}")]
    InvalidInteger(usize, String),
    /// Invalid filter literal
    #[error("invalid literal at position {0}: {1}")]
    InvalidLiteral(usize, String),
    /// Unexpected character
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    /// Input ended early
    #[error("unexpected end of expression at position {0}")]
    UnexpectedEnd(usize),
    /// Filter has too many nested groups or `&&`/`||` operators
    #[error("filter nested too deeply at position {0}")]
    TooDeep(usize),
}

/// Maximum number of groups and `&&`/`||` operators in one filter
///
/// Filters are parsed, evaluated and dropped recursively, so their depth is
/// bounded.
pub const MAX_FILTER_DEPTH: usize = 64;

type ParseResult<T> = Result<T, ExprParseError>;

impl FromStr for JsonPathExpr {
    type Err = ExprParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JsonPathExpr::parse(s)
    }
}

impl JsonPathExpr {
    /// Parse an expression
    pub fn parse(s: &str) -> ParseResult<Self> {
        let mut parser = Parser {
            chars: s.chars().collect(),
            pos: 0,
            filter_depth: 0,
        };
        let segments = parser.expression()?;
        Ok(JsonPathExpr {
            source: s.to_string(),
            segments,
        })
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    // groups and operators seen in the current filter
    filter_depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn descend(&mut self) -> ParseResult<()> {
        self.filter_depth += 1;
        if self.filter_depth > MAX_FILTER_DEPTH {
            return Err(ExprParseError::TooDeep(self.pos));
        }
        Ok(())
    }

    fn unexpected(&self) -> ExprParseError {
        match self.peek() {
            Some(c) => ExprParseError::UnexpectedChar(c, self.pos),
            None => ExprParseError::UnexpectedEnd(self.pos),
        }
    }

    fn expect(&mut self, c: char) -> ParseResult<()> {
        if self.peek() == Some(c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn eat(&mut self, s: &str) -> bool {
        let n = s.chars().count();
        let matches = self.chars.len() >= self.pos + n
            && self.chars[self.pos..self.pos + n].iter().copied().eq(s.chars());
        if matches {
            self.pos += n;
        }
        matches
    }

    fn expression(&mut self) -> ParseResult<Vec<Segment>> {
        let mut segments = Vec::new();
        match self.peek() {
            None => return Err(ExprParseError::Empty),
            Some('$') => self.pos += 1,
            Some('*') => {
                self.pos += 1;
                segments.push(Segment::Child(vec![Selector::Wildcard]));
            }
            Some('[') => {}
            Some(c) => return Err(ExprParseError::MissingRoot(c)),
        }

        while !self.at_end() {
            let segment = match self.peek() {
                Some('.') if self.peek_at(1) == Some('.') => {
                    self.pos += 2;
                    match self.peek() {
                        Some('[') => Segment::Descendant(self.bracket()?),
                        _ => Segment::Descendant(vec![self.dot_selector()?]),
                    }
                }
                Some('.') => {
                    self.pos += 1;
                    Segment::Child(vec![self.dot_selector()?])
                }
                Some('[') => Segment::Child(self.bracket()?),
                _ => return Err(self.unexpected()),
            };
            segments.push(segment);
        }
        Ok(segments)
    }

    // after '.' or '..': '*' or a bare name
    fn dot_selector(&mut self) -> ParseResult<Selector> {
        if self.peek() == Some('*') {
            self.pos += 1;
            return Ok(Selector::Wildcard);
        }
        let name = self.bare_name();
        if name.is_empty() {
            return Err(ExprParseError::EmptyName(self.pos));
        }
        Ok(Selector::Name(name))
    }

    fn bare_name(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_name_char(c) {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.chars[start..self.pos].iter().collect()
    }

    // '[' selector (',' selector)* ']'
    fn bracket(&mut self) -> ParseResult<Vec<Selector>> {
        let open = self.pos;
        self.expect('[')?;
        self.skip_ws();

        if self.peek() == Some('?') {
            self.pos += 1;
            self.filter_depth = 0;
            self.skip_ws();
            let parenthesized = self.peek() == Some('(');
            if parenthesized {
                self.pos += 1;
            }
            let filter = self.filter_or()?;
            self.skip_ws();
            if parenthesized {
                self.expect(')')?;
                self.skip_ws();
            }
            self.close_bracket(open)?;
            return Ok(vec![Selector::Filter(filter)]);
        }

        let mut selectors = Vec::new();
        loop {
            self.skip_ws();
            selectors.push(self.bracket_selector(open)?);
            self.skip_ws();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(']') => {
                    self.pos += 1;
                    return Ok(selectors);
                }
                None => return Err(ExprParseError::UnclosedBracket(open)),
                Some(c) => return Err(ExprParseError::UnexpectedChar(c, self.pos)),
            }
        }
    }

    fn close_bracket(&mut self, open: usize) -> ParseResult<()> {
        match self.peek() {
            Some(']') => {
                self.pos += 1;
                Ok(())
            }
            None => Err(ExprParseError::UnclosedBracket(open)),
            Some(c) => Err(ExprParseError::UnexpectedChar(c, self.pos)),
        }
    }

    fn bracket_selector(&mut self, open: usize) -> ParseResult<Selector> {
        match self.peek() {
            None => Err(ExprParseError::UnclosedBracket(open)),
            Some('*') => {
                self.pos += 1;
                Ok(Selector::Wildcard)
            }
            Some(q @ ('\'' | '"')) => Ok(Selector::Name(self.quoted(q)?)),
            Some(c) if c == '-' || c == ':' || c.is_ascii_digit() => self.index_or_slice(),
            Some(c) => Err(ExprParseError::UnexpectedChar(c, self.pos)),
        }
    }

    fn index_or_slice(&mut self) -> ParseResult<Selector> {
        let start = self.optional_int()?;
        self.skip_ws();
        if self.peek() != Some(':') {
            return match start {
                Some(i) => Ok(Selector::Index(i)),
                None => Err(self.unexpected()),
            };
        }
        self.pos += 1;
        self.skip_ws();
        let end = self.optional_int()?;
        self.skip_ws();
        let step = if self.peek() == Some(':') {
            self.pos += 1;
            self.skip_ws();
            self.optional_int()?
        } else {
            None
        };
        Ok(Selector::Slice { start, end, step })
    }

    fn optional_int(&mut self) -> ParseResult<Option<i64>> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return Ok(None);
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse::<i64>()
            .map(Some)
            .map_err(|_| ExprParseError::InvalidInteger(start, text))
    }

    // quoted string; the opening quote is at the cursor
    fn quoted(&mut self, quote: char) -> ParseResult<String> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(ExprParseError::UnterminatedString(start)),
                Some('\\') => {
                    let escaped = self
                        .peek_at(1)
                        .ok_or(ExprParseError::UnterminatedString(start))?;
                    out.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        other => other,
                    });
                    self.pos += 2;
                }
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(c) => {
                    out.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn filter_or(&mut self) -> ParseResult<FilterExpr> {
        let mut left = self.filter_and()?;
        loop {
            self.skip_ws();
            if !self.eat("||") {
                return Ok(left);
            }
            self.descend()?;
            let right = self.filter_and()?;
            left = FilterExpr::Or(Box::new(left), Box::new(right));
        }
    }

    fn filter_and(&mut self) -> ParseResult<FilterExpr> {
        let mut left = self.filter_primary()?;
        loop {
            self.skip_ws();
            if !self.eat("&&") {
                return Ok(left);
            }
            self.descend()?;
            let right = self.filter_primary()?;
            left = FilterExpr::And(Box::new(left), Box::new(right));
        }
    }

    fn filter_primary(&mut self) -> ParseResult<FilterExpr> {
        self.skip_ws();
        if self.peek() == Some('(') {
            self.descend()?;
            self.pos += 1;
            let inner = self.filter_or()?;
            self.skip_ws();
            self.expect(')')?;
            return Ok(inner);
        }
        self.expect('@')?;
        let left = self.rel_path()?;
        self.skip_ws();
        let op = match self.compare_op() {
            Some(op) => op,
            None => return Ok(FilterExpr::Exists(left)),
        };
        self.skip_ws();
        let right = self.literal()?;
        Ok(FilterExpr::Compare { left, op, right })
    }

    fn rel_path(&mut self) -> ParseResult<RelPath> {
        let mut steps = Vec::new();
        loop {
            match self.peek() {
                Some('.') if self.peek_at(1) != Some('.') => {
                    self.pos += 1;
                    let name = self.bare_name();
                    if name.is_empty() {
                        return Err(ExprParseError::EmptyName(self.pos));
                    }
                    steps.push(RelStep::Name(name));
                }
                Some('[') => {
                    let open = self.pos;
                    self.pos += 1;
                    self.skip_ws();
                    let step = match self.peek() {
                        Some(q @ ('\'' | '"')) => RelStep::Name(self.quoted(q)?),
                        _ => match self.optional_int()? {
                            Some(i) => RelStep::Index(i),
                            None => return Err(self.unexpected()),
                        },
                    };
                    self.skip_ws();
                    self.close_bracket(open)?;
                    steps.push(step);
                }
                _ => return Ok(RelPath { steps }),
            }
        }
    }

    fn compare_op(&mut self) -> Option<CompareOp> {
        // two-character operators first
        for (text, op) in [
            ("==", CompareOp::Eq),
            ("!=", CompareOp::Ne),
            ("<=", CompareOp::Le),
            (">=", CompareOp::Ge),
            ("<", CompareOp::Lt),
            (">", CompareOp::Gt),
        ] {
            if self.eat(text) {
                return Some(op);
            }
        }
        None
    }

    fn literal(&mut self) -> ParseResult<JsonValue> {
        let start = self.pos;
        match self.peek() {
            Some(q @ ('\'' | '"')) => Ok(JsonValue::String(self.quoted(q)?)),
            Some(_) => {
                while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.'))
                {
                    self.pos += 1;
                }
                let text: String = self.chars[start..self.pos].iter().collect();
                match text.parse::<JsonValue>() {
                    Ok(v) if !v.is_container() && !text.is_empty() => Ok(v),
                    _ => Err(ExprParseError::InvalidLiteral(start, text)),
                }
            }
            None => Err(ExprParseError::UnexpectedEnd(self.pos)),
        }
    }
}

fn is_name_char(c: char) -> bool {
    !matches!(c, '.' | '[' | ']' | '(' | ')' | '\'' | '"' | ',' | '=' | '!' | '<' | '>' | '&' | '|')
        && !c.is_whitespace()
}
