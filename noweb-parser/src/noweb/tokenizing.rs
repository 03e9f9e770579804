//! Two-mode line classifier
//!
//!     The document is consumed line by line in one of two modes. `Prose`
//!     (the initial mode) covers narrative text between chunks; `Code`
//!     covers chunk bodies. Transitions:
//!
//!         any mode,  boundary line (`@` at column 0)   -> Prose
//!         any mode,  definition line (`<<name>>=`)     -> Code
//!         otherwise                                    -> mode unchanged
//!
//!     The next mode depends only on the current line; there is no
//!     lookahead. Boundary and definition tests are both anchored to
//!     column 0 and escape-aware via [scanning](crate::noweb::scanning).
//!
//! Emission
//!
//!     Boundary lines emit a one-character `ChunkStart` declaration token.
//!     Definition lines emit a whole-line `Definition` token and register
//!     the chunk name. Code lines are split around their `<<name>>`
//!     reference occurrences: each occurrence becomes a `Reference` token
//!     carrying the name as its keyword, and every non-empty stretch of
//!     text around the occurrences becomes a `Code` token. Prose lines emit
//!     nothing unless a prose scanner is injected.
//!
//!     Tokens come out ordered by line, then by start column. References are
//!     emitted optimistically and demoted afterwards by
//!     [resolve_references](crate::noweb::resolving::resolve_references).

use crate::noweb::cancel::CancellationToken;
use crate::noweb::lines::split_lines;
use crate::noweb::prose::ProseScanner;
use crate::noweb::resolving::{resolve_references, DefinitionSet};
use crate::noweb::scanning;
use crate::noweb::token::{Token, TokenKind, TokenModifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Prose,
    Code,
}

/// Line-driven tokenizer for one document scan.
///
/// Carries no state between scans; an instance only holds the optional
/// prose-scanner delegate.
#[derive(Default)]
pub struct Tokenizer<'a> {
    prose: Option<&'a dyn ProseScanner>,
}

impl<'a> Tokenizer<'a> {
    pub fn new() -> Self {
        Self { prose: None }
    }

    /// A tokenizer that hands prose lines to `scanner` for sub-span
    /// tokenization. Chunk classification is unaffected.
    pub fn with_prose_scanner(scanner: &'a dyn ProseScanner) -> Self {
        Self {
            prose: Some(scanner),
        }
    }

    /// Scans `text` into its token sequence.
    ///
    /// Checks `cancel` once per line; on cancellation the tokens produced so
    /// far are resolved and returned.
    pub fn tokenize(&self, text: &str, cancel: &CancellationToken) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut defines = DefinitionSet::new();
        let mut mode = Mode::Prose;

        for (line_no, line) in split_lines(text).into_iter().enumerate() {
            if cancel.is_cancelled() {
                break;
            }
            mode = match mode {
                Mode::Prose => self.scan_prose_line(&mut tokens, &mut defines, line_no, line),
                Mode::Code => self.scan_code_line(&mut tokens, &mut defines, line_no, line),
            };
        }

        resolve_references(&mut tokens, &defines);
        tokens
    }

    fn scan_prose_line(
        &self,
        tokens: &mut Vec<Token>,
        defines: &mut DefinitionSet,
        line_no: usize,
        line: &str,
    ) -> Mode {
        if scanning::is_chunk_boundary(line) {
            tokens.push(chunk_start_token(line_no));
            return Mode::Prose;
        }
        if let Some(name) = scanning::definition_name(line) {
            tokens.push(Token::new(line_no, 0, line.len(), TokenKind::Definition));
            defines.insert(name);
            return Mode::Code;
        }
        if let Some(prose) = self.prose {
            tokens.extend(prose.scan_line(line_no, line));
        }
        Mode::Prose
    }

    fn scan_code_line(
        &self,
        tokens: &mut Vec<Token>,
        defines: &mut DefinitionSet,
        line_no: usize,
        line: &str,
    ) -> Mode {
        if scanning::is_chunk_boundary(line) {
            tokens.push(chunk_start_token(line_no));
            return Mode::Prose;
        }
        // A chunk body can be followed directly by the next definition,
        // without an intervening boundary line.
        if let Some(name) = scanning::definition_name(line) {
            tokens.push(Token::new(line_no, 0, line.len(), TokenKind::Definition));
            defines.insert(name);
            return Mode::Code;
        }

        let mut cursor = 0;
        let mut code_from = 0;
        while let Some(occurrence) = scanning::chunk_name(line, cursor) {
            let reference_start = occurrence.delimited_start();
            if code_from < reference_start {
                tokens.push(Token::new(
                    line_no,
                    code_from,
                    reference_start - code_from,
                    TokenKind::Code,
                ));
            }
            let mut reference = Token::new(
                line_no,
                reference_start,
                occurrence.delimited_len(),
                TokenKind::Reference,
            );
            reference.keyword = Some(occurrence.name.to_string());
            tokens.push(reference);
            code_from = occurrence.delimited_end();
            cursor = code_from;
        }
        if code_from < line.len() {
            tokens.push(Token::new(
                line_no,
                code_from,
                line.len() - code_from,
                TokenKind::Code,
            ));
        }
        Mode::Code
    }
}

fn chunk_start_token(line_no: usize) -> Token {
    let mut token = Token::new(line_no, 0, 1, TokenKind::ChunkStart);
    token.modifiers.push(TokenModifier::Declaration);
    token
}

/// Scans `text` into its token sequence with no prose scanner.
pub fn parse(text: &str, cancel: &CancellationToken) -> Vec<Token> {
    Tokenizer::new().tokenize(text, cancel)
}
