/// Segment tokenizer for bracket-based file names
///
/// Turns one path segment (`about`, `[id]`, `[[lang]]`, `[...slug]`,
/// `post-[id]`) into typed tokens with a single-pass state machine.
use crate::error::{MalformedReason, MalformedSegment};

/// Kind of a segment token
///
/// # File naming conventions
///
/// - `name` → **Static**
/// - `[name]` → **Dynamic** (required parameter)
/// - `[[name]]` → **Optional** parameter
/// - `[...name]` → **CatchAll** parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Literal text
    Static,
    /// Required named parameter
    Dynamic,
    /// Optional named parameter
    Optional,
    /// Variadic trailing parameter
    CatchAll,
}

/// A typed piece of a segment
///
/// `value` is the literal text for [`TokenKind::Static`] and the parameter
/// name for the other kinds. It is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentToken {
    pub kind: TokenKind,
    pub value: String,
}

impl SegmentToken {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn is_param(&self) -> bool {
        self.kind != TokenKind::Static
    }
}

/// Scanner state. The three parameter states share one accumulation mode and
/// only differ in the kind of token they emit when closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenizerState {
    Initial,
    Static,
    Dynamic,
    Optional,
    CatchAll,
}

impl TokenizerState {
    fn token_kind(self) -> Option<TokenKind> {
        match self {
            TokenizerState::Initial => None,
            TokenizerState::Static => Some(TokenKind::Static),
            TokenizerState::Dynamic => Some(TokenKind::Dynamic),
            TokenizerState::Optional => Some(TokenKind::Optional),
            TokenizerState::CatchAll => Some(TokenKind::CatchAll),
        }
    }

    fn in_param(self) -> bool {
        matches!(
            self,
            TokenizerState::Dynamic | TokenizerState::Optional | TokenizerState::CatchAll
        )
    }
}

/// `[A-Za-z0-9_.]`
fn is_param_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Accumulator threaded through the scan
struct Tokenizer<'a> {
    segment: &'a str,
    state: TokenizerState,
    buffer: String,
    tokens: Vec<SegmentToken>,
}

impl<'a> Tokenizer<'a> {
    fn new(segment: &'a str) -> Self {
        Self {
            segment,
            state: TokenizerState::Initial,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Emits the buffer as a token of the current state's kind
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if let Some(kind) = self.state.token_kind() {
            let value = std::mem::take(&mut self.buffer);
            self.tokens.push(SegmentToken { kind, value });
        }
    }

    fn fail(&self, reason: MalformedReason) -> MalformedSegment {
        MalformedSegment {
            segment: self.segment.to_string(),
            reason,
            buffer: self.buffer.clone(),
        }
    }

    fn step(&mut self, c: char, prev: Option<char>) -> Result<(), MalformedSegment> {
        match self.state {
            TokenizerState::Initial => {
                self.buffer.clear();
                if c == '[' {
                    self.state = TokenizerState::Dynamic;
                } else {
                    // Not consumed here; Static takes it as its first character
                    self.state = TokenizerState::Static;
                    self.buffer.push(c);
                }
            }
            TokenizerState::Static => {
                if c == '[' {
                    self.flush();
                    self.state = TokenizerState::Dynamic;
                } else {
                    self.buffer.push(c);
                }
            }
            TokenizerState::Dynamic | TokenizerState::Optional | TokenizerState::CatchAll => {
                if self.buffer == "..." {
                    self.buffer.clear();
                    self.state = TokenizerState::CatchAll;
                }
                if c == '[' && self.state == TokenizerState::Dynamic {
                    self.state = TokenizerState::Optional;
                }

                let closes =
                    c == ']' && (self.state != TokenizerState::Optional || prev == Some(']'));
                if closes {
                    if self.buffer.is_empty() {
                        return Err(self.fail(MalformedReason::EmptyParameterName));
                    }
                    self.flush();
                    self.state = TokenizerState::Initial;
                } else if is_param_char(c) {
                    self.buffer.push(c);
                }
                // anything else inside brackets is dropped
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<SegmentToken>, MalformedSegment> {
        if self.state.in_param() {
            return Err(self.fail(MalformedReason::UnterminatedParameter));
        }
        self.flush();
        Ok(self.tokens)
    }
}

/// Tokenizes one path segment
///
/// The segment is the text between two `/` with the file extension already
/// removed. Stray characters inside brackets (anything outside
/// `[A-Za-z0-9_.]`) are discarded.
///
/// # Errors
///
/// - [`MalformedReason::EmptyParameterName`] for `[]` or `[[]]`
/// - [`MalformedReason::UnterminatedParameter`] when the segment ends inside
///   a bracket
///
/// # Examples
///
/// ```
/// use domain_router::{tokenize_segment, SegmentToken, TokenKind};
///
/// assert_eq!(
///     tokenize_segment("[id]").unwrap(),
///     vec![SegmentToken::new(TokenKind::Dynamic, "id")]
/// );
///
/// assert_eq!(
///     tokenize_segment("post-[id]").unwrap(),
///     vec![
///         SegmentToken::new(TokenKind::Static, "post-"),
///         SegmentToken::new(TokenKind::Dynamic, "id"),
///     ]
/// );
/// ```
pub fn tokenize_segment(segment: &str) -> Result<Vec<SegmentToken>, MalformedSegment> {
    let mut tokenizer = Tokenizer::new(segment);
    let mut prev = None;

    for c in segment.chars() {
        tokenizer.step(c, prev)?;
        prev = Some(c);
    }

    tokenizer.finish()
}

/// Symbolic name contributed by a segment: the token values concatenated
pub fn segment_name(tokens: &[SegmentToken]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}
