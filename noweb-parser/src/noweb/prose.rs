//! Optional prose-line scanning delegate.
//!
//! Narrative lines between chunks carry their own markup (classically TeX),
//! which is outside this crate's competence. Hosts that can style prose
//! inject a [ProseScanner]; the tokenizer hands it every prose line that is
//! neither a boundary nor a definition. Without a delegate, prose lines
//! simply produce no tokens — chunk classification never depends on one.

use logos::Logos;

use crate::noweb::token::{Token, TokenKind};

/// Tokenizes a single prose line into display sub-spans.
///
/// Implementations may only emit [TokenKind::ProseText],
/// [TokenKind::ProseComment] and [TokenKind::ProseCommand] tokens, with
/// spans inside the line's bounds.
pub trait ProseScanner {
    fn scan_line(&self, line_no: usize, line: &str) -> Vec<Token>;
}

/// The default delegate: prose lines contribute no tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProseScanner;

impl ProseScanner for NoopProseScanner {
    fn scan_line(&self, _line_no: usize, _line: &str) -> Vec<Token> {
        Vec::new()
    }
}

#[derive(Logos, Debug, PartialEq, Clone)]
enum TexToken {
    /// `%` comment to end of line.
    #[regex(r"%[^\n]*")]
    Comment,

    /// Control word (`\section`, optionally starred) or control symbol (`\%`).
    #[regex(r"\\[a-zA-Z@]+\*?")]
    #[regex(r"\\[^a-zA-Z\n]?")]
    Command,

    /// Everything between comments and commands.
    #[regex(r"[^%\\]+")]
    Text,
}

/// Best-effort TeX line scanner.
///
/// Classifies comments, control sequences and text runs; it does not parse
/// TeX beyond that, and bytes it cannot place degrade to text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TexProseScanner;

impl ProseScanner for TexProseScanner {
    fn scan_line(&self, line_no: usize, line: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut lexer = TexToken::lexer(line);
        while let Some(result) = lexer.next() {
            let span = lexer.span();
            if span.is_empty() {
                continue;
            }
            let kind = match result {
                Ok(TexToken::Comment) => TokenKind::ProseComment,
                Ok(TexToken::Command) => TokenKind::ProseCommand,
                Ok(TexToken::Text) | Err(()) => TokenKind::ProseText,
            };
            // Coalesce adjacent text runs so stray bytes don't fragment them.
            if kind == TokenKind::ProseText {
                if let Some(last) = tokens.last_mut() {
                    if last.kind == TokenKind::ProseText && last.start + last.length == span.start {
                        last.length = span.end - last.start;
                        continue;
                    }
                }
            }
            tokens.push(Token::new(line_no, span.start, span.end - span.start, kind));
        }
        tokens
    }
}
