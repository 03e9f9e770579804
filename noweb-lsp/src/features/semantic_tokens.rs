use lsp_types::{SemanticToken, SemanticTokenModifier, SemanticTokenType, SemanticTokensLegend};
use noweb_parser::noweb::{Token, TokenKind, TokenModifier};

/// Legend order; a token's type index is its kind's position here.
pub const SEMANTIC_TOKEN_KINDS: &[TokenKind] = &[
    TokenKind::ChunkStart,
    TokenKind::Definition,
    TokenKind::Reference,
    TokenKind::UndefinedReference,
    TokenKind::Code,
    TokenKind::ProseText,
    TokenKind::ProseComment,
    TokenKind::ProseCommand,
];

/// Legend order for modifiers; bit `n` of the bitset is position `n` here.
pub const SEMANTIC_TOKEN_MODIFIERS: &[TokenModifier] = &[TokenModifier::Declaration];

/// Returns the LSP semantic token type string for a core token kind.
///
/// We map onto standard LSP token types so existing editor themes color
/// noweb documents without custom scopes: the chunk-start sigil reads as a
/// function declaration, definitions as variables, resolved references as
/// keywords, unresolved ones as comments (dimmed), and code/prose text as
/// strings.
pub fn lsp_token_type(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::ChunkStart => "function",
        TokenKind::Definition => "variable",
        TokenKind::Reference => "keyword",
        TokenKind::UndefinedReference => "comment",
        TokenKind::Code => "string",
        TokenKind::ProseText => "string",
        TokenKind::ProseComment => "comment",
        TokenKind::ProseCommand => "macro",
    }
}

pub fn lsp_token_modifier(modifier: TokenModifier) -> &'static str {
    match modifier {
        TokenModifier::Declaration => "declaration",
    }
}

pub fn semantic_tokens_legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: SEMANTIC_TOKEN_KINDS
            .iter()
            .map(|kind| SemanticTokenType::new(lsp_token_type(*kind)))
            .collect(),
        token_modifiers: SEMANTIC_TOKEN_MODIFIERS
            .iter()
            .map(|modifier| SemanticTokenModifier::new(lsp_token_modifier(*modifier)))
            .collect(),
    }
}

/// Encodes core tokens into the LSP wire format.
///
/// The wire format is delta-encoded: each token's line and start column are
/// relative to the previous token. Core tokens are single-line and already
/// ordered by (line, start), so no splitting or sorting is needed;
/// zero-length tokens are skipped defensively.
pub fn encode_semantic_tokens(tokens: &[Token]) -> Vec<SemanticToken> {
    let mut data = Vec::new();
    let mut prev_line = 0u32;
    let mut prev_start = 0u32;

    for token in tokens {
        if token.length == 0 {
            continue;
        }
        let token_type = SEMANTIC_TOKEN_KINDS
            .iter()
            .position(|kind| *kind == token.kind)
            .unwrap_or(0) as u32;
        let line = token.line as u32;
        let start = token.start as u32;
        let delta_line = line.saturating_sub(prev_line);
        let delta_start = if delta_line == 0 {
            start.saturating_sub(prev_start)
        } else {
            start
        };
        data.push(SemanticToken {
            delta_line,
            delta_start,
            length: token.length as u32,
            token_type,
            token_modifiers_bitset: encode_modifiers(&token.modifiers),
        });
        prev_line = line;
        prev_start = start;
    }

    data
}

fn encode_modifiers(modifiers: &[TokenModifier]) -> u32 {
    let mut bitset = 0;
    for modifier in modifiers {
        if let Some(index) = SEMANTIC_TOKEN_MODIFIERS
            .iter()
            .position(|candidate| candidate == modifier)
        {
            bitset |= 1 << index;
        }
    }
    bitset
}
