use lsp_types::{FoldingRange, FoldingRangeKind};
use noweb_parser::noweb::FoldingRange as ChunkRange;

/// Converts a core folding range to the LSP wire type.
///
/// Chunk folds are whole-line region folds; character offsets are left
/// unset so the client folds at its own line granularity.
pub fn to_lsp_folding_range(range: &ChunkRange) -> FoldingRange {
    FoldingRange {
        start_line: range.start_line as u32,
        start_character: None,
        end_line: range.end_line as u32,
        end_character: None,
        kind: Some(FoldingRangeKind::Region),
        collapsed_text: None,
    }
}
