//! Foldable line ranges between chunk boundaries.
//!
//! Folding is an independent pass over the raw lines; it shares only the
//! boundary predicate and line splitter with the tokenizer and no state at
//! all.

use serde::Serialize;

use crate::noweb::cancel::CancellationToken;
use crate::noweb::lines::split_lines;
use crate::noweb::scanning;

/// An inclusive range of lines that an editor may collapse.
///
/// `start_line < end_line` always holds; single-line runs are never
/// foldable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldingRange {
    pub start_line: usize,
    pub end_line: usize,
}

/// Computes the foldable ranges of `text`.
///
/// Each chunk-boundary line closes the run that precedes it, and the end of
/// the document closes the final run. A run folds only when it spans at
/// least two lines. Ranges come out ordered by ascending `start_line`.
///
/// Checks `cancel` once per line; on cancellation the ranges produced so far
/// are returned without the closing range.
pub fn compute_folds(text: &str, cancel: &CancellationToken) -> Vec<FoldingRange> {
    let lines = split_lines(text);
    let mut ranges = Vec::new();
    let mut last_boundary = 0;

    for (line_no, line) in lines.iter().enumerate() {
        if cancel.is_cancelled() {
            return ranges;
        }
        if scanning::is_chunk_boundary(line) {
            if line_no > 0 && line_no - 1 > last_boundary {
                ranges.push(FoldingRange {
                    start_line: last_boundary,
                    end_line: line_no - 1,
                });
            }
            last_boundary = line_no;
        }
    }

    let last_line = lines.len() - 1;
    if last_line > last_boundary {
        ranges.push(FoldingRange {
            start_line: last_boundary,
            end_line: last_line,
        });
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folds(text: &str) -> Vec<(usize, usize)> {
        compute_folds(text, &CancellationToken::new())
            .into_iter()
            .map(|range| (range.start_line, range.end_line))
            .collect()
    }

    #[test]
    fn empty_document_has_no_folds() {
        assert!(folds("").is_empty());
    }

    #[test]
    fn single_boundary_line_has_no_folds() {
        assert!(folds("@ ").is_empty());
    }

    #[test]
    fn boundary_plus_trailing_line_folds_to_the_end() {
        assert_eq!(folds("@ \n"), vec![(0, 1)]);
    }

    #[test]
    fn leading_run_closes_at_the_boundary() {
        assert_eq!(folds("\n\n@ \n"), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn adjacent_boundaries_never_fold() {
        assert!(folds("@\n@").is_empty());
    }

    #[test]
    fn fold_starts_at_the_opening_boundary() {
        assert_eq!(folds("@\nx\n@"), vec![(0, 1)]);
    }

    #[test]
    fn chunk_bodies_fold() {
        let text = "@ intro\ntext\n<<t>>=\ncode\ncode\n@ next";
        assert_eq!(folds(text), vec![(0, 4)]);
    }

    #[test]
    fn indented_sigils_do_not_close_runs() {
        assert_eq!(folds("@\na\n \t@\nb"), vec![(0, 3)]);
    }

    #[test]
    fn cancellation_returns_collected_prefix() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(compute_folds("@\na\nb\n@", &cancel).is_empty());
    }
}
