//! Presentation tokens emitted by the document scan.

use serde::Serialize;

/// Classification of a scanned span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// The `@` sigil opening a documentation chunk.
    ChunkStart,
    /// A whole `<<name>>=` definition line.
    Definition,
    /// A `<<name>>` occurrence on a code line, name defined somewhere.
    Reference,
    /// A `<<name>>` occurrence whose name has no definition in the document.
    UndefinedReference,
    /// Plain code text between references.
    Code,
    /// Prose text run (only from an injected prose scanner).
    ProseText,
    /// Prose comment (only from an injected prose scanner).
    ProseComment,
    /// Prose markup command (only from an injected prose scanner).
    ProseCommand,
}

/// Extra facets carried by some tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenModifier {
    /// The token declares something; carried by every [TokenKind::ChunkStart].
    Declaration,
}

/// One classified span of one document line.
///
/// `start` and `length` are byte offsets/sizes within the line at index
/// `line`; `start + length` never exceeds the line length and `length` is
/// never zero. `keyword` carries the chunk name for reference tokens and is
/// `None` everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub line: usize,
    pub start: usize,
    pub length: usize,
    pub kind: TokenKind,
    pub modifiers: Vec<TokenModifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Token {
    /// A token with no modifiers and no keyword.
    pub fn new(line: usize, start: usize, length: usize, kind: TokenKind) -> Self {
        Self {
            line,
            start,
            length,
            kind,
            modifiers: Vec::new(),
            keyword: None,
        }
    }

    /// Whether this token is a chunk reference, resolved or not.
    pub fn is_reference(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Reference | TokenKind::UndefinedReference
        )
    }
}
