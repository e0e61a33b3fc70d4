//! Recursive-descent reader.
//!
//! One [`Reader`] owns one cursor over one immutable source buffer and
//! produces the top-level value list. Dispatch is a single match over
//! the lookahead byte; each construct has a focused method that leaves
//! the cursor just past what it consumed.
//!
//! The `^` and `@` prefixes are one-shot modifiers resolved here by
//! lookahead rather than by reader-wide state: `^` followed by `[`,
//! `(` or `{` introduces a function form, `@` followed by `[` or `{`
//! (directly or after a parent token) switches the next construct to
//! object mode, and both fall back to ordinary tokens otherwise.

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::escape::resolve_escape;
use crate::getter;
use sol_ir::{List, ObjectLiteral, Value};
use sol_stack::ensure_sufficient_stack;
use tracing::{trace, warn};

/// Bytes that end a token: whitespace plus the structural characters.
///
/// `;` (comment start) and `"` (string open) are included so that a
/// token can never contain them, which the emitter's token invariant
/// relies on.
#[inline]
fn is_delimiter(byte: u8) -> bool {
    is_whitespace(byte) || matches!(byte, b'(' | b')' | b'[' | b']' | b'{' | b'}' | b';' | b'"')
}

/// ASCII whitespace in the C `isspace` sense (includes vertical tab).
#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// The reader: cursor state plus the construct methods.
pub(crate) struct Reader<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Reader<'src> {
    pub(crate) fn new(cursor: Cursor<'src>) -> Self {
        Self { cursor }
    }

    /// Read every top-level value until end of input.
    pub(crate) fn read_program(&mut self) -> Result<List, ParseError> {
        let mut top = List::new(false);
        while let Some(value) = self.read_value()? {
            top.push(value);
        }
        trace!(values = top.len(), "finished reading program");
        Ok(top)
    }

    /// Skip whitespace and `;`-to-end-of-line comments.
    fn skip_trivia(&mut self) {
        loop {
            let byte = self.cursor.current();
            if is_whitespace(byte) {
                self.cursor.advance();
            } else if byte == b';' {
                self.cursor.eat_until_newline_or_eof();
            } else {
                break;
            }
        }
    }

    /// Read the next value, or `None` at end of input.
    fn read_value(&mut self) -> Result<Option<Value>, ParseError> {
        ensure_sufficient_stack(|| self.read_value_inner())
    }

    fn read_value_inner(&mut self) -> Result<Option<Value>, ParseError> {
        self.skip_trivia();
        if self.cursor.is_eof() {
            return Ok(None);
        }
        let value = match self.cursor.current() {
            b'0'..=b'9' => self.read_number()?,
            b'-' if self.cursor.peek().is_ascii_digit() => self.read_number()?,
            b'"' => self.read_string()?,
            // A `(` list is literal data: it arrives frozen.
            b'(' => Value::frozen(Value::List(self.read_list(b')', false)?)),
            b'[' => Value::List(self.read_list(b']', false)?),
            b'{' => Value::Object(self.read_object_literal(None)?),
            b':' => {
                self.cursor.advance();
                match self.read_value()? {
                    Some(inner) => Value::frozen(inner),
                    None => {
                        return Err(ParseError::UnexpectedEof {
                            expected: "a value after `:`",
                        })
                    }
                }
            }
            b'^' => self.read_function_shorthand()?,
            b'@' => self.read_object_mode()?,
            _ => self.read_token()?,
        };
        Ok(Some(value))
    }

    /// Read a `(…)` or `[…]` list. The cursor sits on the opening
    /// delimiter; `closing` selects which byte terminates it.
    fn read_list(&mut self, closing: u8, object_mode: bool) -> Result<List, ParseError> {
        self.cursor.advance();
        let mut list = List::new(object_mode);
        loop {
            self.skip_trivia();
            if self.cursor.is_eof() {
                return Err(ParseError::UnclosedList);
            }
            if self.cursor.current() == closing {
                self.cursor.advance();
                return Ok(list);
            }
            match self.read_value()? {
                Some(value) => list.push(value),
                None => return Err(ParseError::UnclosedList),
            }
        }
    }

    /// Read `{ key value … }` into an object literal. The cursor sits
    /// on the `{`.
    fn read_object_literal(
        &mut self,
        parent: Option<String>,
    ) -> Result<ObjectLiteral, ParseError> {
        self.cursor.advance();
        let mut literal = ObjectLiteral::new(parent);
        loop {
            self.skip_trivia();
            if self.cursor.is_eof() {
                return Err(ParseError::UnclosedLiteral);
            }
            if self.cursor.current() == b'}' {
                self.cursor.advance();
                trace!(entries = literal.len(), "read object literal");
                return Ok(literal);
            }
            let key = match self.read_value()? {
                Some(Value::Token(name)) => name,
                Some(_) => return Err(ParseError::BadLiteralKey),
                None => return Err(ParseError::UnclosedLiteral),
            };
            let value = match self.read_value()? {
                Some(value) => value,
                None => return Err(ParseError::UnclosedLiteral),
            };
            literal.insert(key, value);
        }
    }

    /// Read `{ statement … }` for a function body. The cursor sits on
    /// the `{`.
    fn read_statement_sequence(&mut self) -> Result<Vec<Value>, ParseError> {
        self.cursor.advance();
        let mut statements = Vec::new();
        loop {
            self.skip_trivia();
            if self.cursor.is_eof() {
                return Err(ParseError::UnclosedLiteral);
            }
            if self.cursor.current() == b'}' {
                self.cursor.advance();
                return Ok(statements);
            }
            match self.read_value()? {
                Some(statement) => statements.push(statement),
                None => return Err(ParseError::UnclosedLiteral),
            }
        }
    }

    /// `^` dispatch: `^[…]`, `^(…){…}`, `^{…}`, or a plain token.
    fn read_function_shorthand(&mut self) -> Result<Value, ParseError> {
        match self.cursor.peek() {
            b'[' => {
                self.cursor.advance();
                let body = self.read_list(b']', false)?;
                let mut function = List::new(false);
                function.push(Value::token("^"));
                function.push(Value::List(List::new(false)));
                function.push(Value::List(body));
                Ok(Value::List(function))
            }
            b'(' => {
                self.cursor.advance();
                let params = self.read_list(b')', false)?;
                // The body brace must follow the parameter list
                // directly; `^(x) {…}` is not a function form.
                if self.cursor.current() != b'{' {
                    return Err(ParseError::BadFunctionForm);
                }
                self.finish_function(params)
            }
            b'{' => {
                self.cursor.advance();
                self.finish_function(List::new(false))
            }
            _ => self.read_token(),
        }
    }

    /// Build `(^ :params statements…)` from a parameter list and the
    /// `{…}` body the cursor sits on.
    fn finish_function(&mut self, params: List) -> Result<Value, ParseError> {
        let statements = self.read_statement_sequence()?;
        let mut function = List::new(false);
        function.push(Value::token("^"));
        function.push(Value::frozen(Value::List(params)));
        for statement in statements {
            function.push(statement);
        }
        Ok(Value::List(function))
    }

    /// `@` dispatch: `@[…]`, `@{…}`, `@name{…}`, or a plain token.
    fn read_object_mode(&mut self) -> Result<Value, ParseError> {
        match self.cursor.peek() {
            b'[' => {
                self.cursor.advance();
                Ok(Value::List(self.read_list(b']', true)?))
            }
            b'{' => {
                self.cursor.advance();
                Ok(Value::Object(
                    self.read_object_literal(Some("Object".to_owned()))?,
                ))
            }
            _ => {
                // `@name{…}` only when the token after `@` runs right
                // into a `{`; otherwise the `@` starts a plain token.
                let mut probe = self.cursor;
                probe.advance();
                while !probe.is_eof() && !is_delimiter(probe.current()) {
                    probe.advance();
                }
                if probe.current() == b'{' {
                    self.cursor.advance();
                    match self.read_token()? {
                        Value::Token(name) => Ok(Value::Object(
                            self.read_object_literal(Some(name))?,
                        )),
                        _ => Err(ParseError::BadLiteralParent),
                    }
                } else {
                    self.read_token()
                }
            }
        }
    }

    /// Scan a token up to the next delimiter and run the dotted-getter
    /// expansion over it.
    fn read_token(&mut self) -> Result<Value, ParseError> {
        let start = self.cursor.pos();
        while !self.cursor.is_eof() && !is_delimiter(self.cursor.current()) {
            self.cursor.advance();
        }
        let raw = self.cursor.slice_from(start);
        if raw.is_empty() {
            // The dispatch table sends every opener elsewhere, so an
            // empty token means the cursor sits on a stray closer.
            return Err(ParseError::UnexpectedDelimiter {
                found: char::from(self.cursor.current()),
            });
        }
        Ok(getter::expand(raw))
    }

    /// Read a `"…"` string, decoding escapes. The cursor sits on the
    /// opening quote.
    fn read_string(&mut self) -> Result<Value, ParseError> {
        self.cursor.advance();
        let mut contents = String::new();
        loop {
            let start = self.cursor.pos();
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    contents.push_str(self.cursor.slice(start, self.cursor.pos()));
                    self.cursor.advance();
                    return Ok(Value::Str(contents));
                }
                b'\\' => {
                    contents.push_str(self.cursor.slice(start, self.cursor.pos()));
                    self.cursor.advance();
                    if self.cursor.is_eof() {
                        return Err(ParseError::UnterminatedString);
                    }
                    let escaped = self.cursor.current();
                    if let Some(decoded) = resolve_escape(escaped) {
                        contents.push(decoded);
                        self.cursor.advance();
                    } else {
                        // Warning only: the escaped character comes
                        // through literally.
                        warn!(
                            escape = %char::from(escaped),
                            "invalid escape sequence encountered"
                        );
                        let width = Cursor::utf8_char_width(escaped);
                        let from = self.cursor.pos();
                        self.cursor.advance_n(width);
                        contents.push_str(self.cursor.slice(from, self.cursor.pos()));
                    }
                }
                _ => return Err(ParseError::UnterminatedString),
            }
        }
    }

    /// Scan a number literal: sign, integer part, optional fraction,
    /// optional exponent. Maximal munch, the way `strtod` consumes.
    fn read_number(&mut self) -> Result<Value, ParseError> {
        let start = self.cursor.pos();
        if self.cursor.current() == b'-' {
            self.cursor.advance();
        }
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            // Consume the exponent only when digits actually follow.
            let mut probe = self.cursor;
            probe.advance();
            if matches!(probe.current(), b'+' | b'-') {
                probe.advance();
            }
            if probe.current().is_ascii_digit() {
                probe.eat_while(|b| b.is_ascii_digit());
                self.cursor = probe;
            }
        }
        let text = self.cursor.slice_from(start);
        match text.parse::<f64>() {
            Ok(value) => Ok(Value::Number(value)),
            Err(_) => Err(ParseError::InvalidNumber {
                text: text.to_owned(),
            }),
        }
    }
}
