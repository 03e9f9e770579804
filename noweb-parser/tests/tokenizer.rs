//! End-to-end tokenization tests over complete documents.

use noweb_parser::noweb::testing::{
    chunk_start, code, definition, reference, undefined_reference,
};
use noweb_parser::noweb::{parse, CancellationToken, Token, TokenKind};

fn parse_all(text: &str) -> Vec<Token> {
    parse(text, &CancellationToken::new())
}

#[test]
fn empty_document() {
    assert!(parse_all("").is_empty());
}

#[test]
fn single_chunk_start() {
    assert_eq!(parse_all("@ "), vec![chunk_start(0)]);
}

#[test]
fn unresolved_reference_is_demoted() {
    let tokens = parse_all("@\nTest\n<<t>>=\nxyz\n<<abc>>");
    assert_eq!(
        tokens,
        vec![
            chunk_start(0),
            definition(2, 0, 6),
            code(3, 0, 3),
            undefined_reference(4, 0, 7, "abc"),
        ]
    );
}

#[test]
fn reference_resolves_against_a_later_definition() {
    let tokens = parse_all("@\nTest\n<<t>>=\nxyz\n<<abc>>\n@\n<<abc>>=\ndef");
    assert_eq!(
        tokens,
        vec![
            chunk_start(0),
            definition(2, 0, 6),
            code(3, 0, 3),
            reference(4, 0, 7, "abc"),
            chunk_start(5),
            definition(6, 0, 8),
            code(7, 0, 3),
        ]
    );
}

#[test]
fn definitions_chain_without_boundaries() {
    // Several chunks separated only by blank lines; the follow-up
    // definitions must register so earlier references resolve.
    let text = "@\nTest\n<<t>>=\nxyz\n<<abc>>\n\n<<abc>>=\ndef\n\n<<lmn>>=\nsome<<hjk>>\n";
    let tokens = parse_all(text);
    assert_eq!(
        tokens,
        vec![
            chunk_start(0),
            definition(2, 0, 6),
            code(3, 0, 3),
            reference(4, 0, 7, "abc"),
            definition(6, 0, 8),
            code(7, 0, 3),
            definition(9, 0, 8),
            code(10, 0, 4),
            undefined_reference(10, 4, 7, "hjk"),
        ]
    );
}

#[test]
fn back_to_back_references_without_code_between() {
    let tokens = parse_all("@\n<<abc>>=\n<<xyz>><<lmn>>");
    assert_eq!(
        tokens,
        vec![
            chunk_start(0),
            definition(1, 0, 8),
            undefined_reference(2, 0, 7, "xyz"),
            undefined_reference(2, 7, 7, "lmn"),
        ]
    );
}

#[test]
fn code_text_around_references_becomes_code_tokens() {
    let tokens = parse_all("<<main>>=\nbefore <<main>> after");
    assert_eq!(
        tokens,
        vec![
            definition(0, 0, 9),
            code(1, 0, 7),
            reference(1, 7, 8, "main"),
            code(1, 15, 6),
        ]
    );
}

#[test]
fn escaped_references_are_plain_code() {
    let tokens = parse_all("<<t>>=\na @<<not-a-ref@>> b");
    assert_eq!(tokens, vec![definition(0, 0, 6), code(1, 0, 19)]);
}

#[test]
fn references_in_prose_produce_nothing() {
    let tokens = parse_all("just prose\n<<ref>> in prose\n");
    assert!(tokens.is_empty());
}

#[test]
fn crlf_line_endings_are_transparent() {
    let tokens = parse_all("@\r\n<<t>>=\r\nxyz\r\n");
    assert_eq!(
        tokens,
        vec![chunk_start(0), definition(1, 0, 6), code(2, 0, 3)]
    );
}

#[test]
fn boundary_with_trailing_text_still_opens_prose() {
    let tokens = parse_all("<<t>>=\ncode\n@ %def intro\n<<t>>=\nmore");
    assert_eq!(
        tokens,
        vec![
            definition(0, 0, 6),
            code(1, 0, 4),
            chunk_start(2),
            definition(3, 0, 6),
            code(4, 0, 4),
        ]
    );
}

#[test]
fn cancellation_yields_a_prefix() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    assert!(parse("@\n<<t>>=\nxyz", &cancel).is_empty());
}

#[test]
fn reparsing_is_identical() {
    let text = "@ intro\n<<a>>=\nuse <<b>>\n@\n<<b>>=\nbody <<a>> tail\n";
    assert_eq!(parse_all(text), parse_all(text));
}

#[test]
fn every_span_fits_its_line() {
    let text = "@ intro\n<<a>>=\nx<<b>>y\n@<<esc>>\n\n<<c>>=\n<<a>><<b>>";
    let lines: Vec<&str> = text.split('\n').collect();
    for token in parse_all(text) {
        assert!(token.length > 0, "zero-length token: {token:?}");
        assert!(
            token.start + token.length <= lines[token.line].len(),
            "token escapes its line: {token:?}"
        );
    }
}

#[test]
fn injected_prose_scanner_tokenizes_narrative_lines() {
    use noweb_parser::noweb::{TexProseScanner, Tokenizer};

    let scanner = TexProseScanner;
    let tokenizer = Tokenizer::with_prose_scanner(&scanner);
    let text = "@\n\\section{Intro} % note\n<<t>>=\nxyz";
    let tokens = tokenizer.tokenize(text, &CancellationToken::new());

    let prose: Vec<&Token> = tokens.iter().filter(|t| t.line == 1).collect();
    assert_eq!(
        prose
            .iter()
            .map(|t| (t.kind, t.start, t.length))
            .collect::<Vec<_>>(),
        vec![
            (TokenKind::ProseCommand, 0, 8),
            (TokenKind::ProseText, 8, 8),
            (TokenKind::ProseComment, 16, 6),
        ]
    );
    // Chunk classification is unaffected by the delegate.
    assert_eq!(tokens[0], chunk_start(0));
    assert_eq!(tokens[tokens.len() - 2], definition(2, 0, 6));
    assert_eq!(tokens[tokens.len() - 1], code(3, 0, 3));
}

#[test]
fn keywords_appear_only_on_references() {
    let text = "@\n<<t>>=\nuse <<t>> and <<missing>>\n";
    for token in parse_all(text) {
        match token.kind {
            TokenKind::Reference | TokenKind::UndefinedReference => {
                assert!(token.keyword.is_some())
            }
            _ => assert!(token.keyword.is_none()),
        }
    }
}
