pub mod folding_ranges;
pub mod semantic_tokens;
