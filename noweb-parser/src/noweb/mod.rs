//! Main module for noweb scanning functionality
//!
//! The pipeline has two independent consumers of the raw line sequence:
//!
//!     1. Tokenization. See [tokenizing](tokenizing). The two-mode line
//!        classifier walks the document once, emitting classified spans and
//!        accumulating the set of defined chunk names. A post-pass
//!        ([resolving](resolving)) demotes references to names that were
//!        never defined.
//!
//!     2. Folding. See [folding](folding). A single pass over the same lines
//!        groups the runs between chunk boundaries into foldable ranges.
//!
//! Both are built on the escape-aware delimiter scanner in
//! [scanning](scanning), which is the single source of truth for what counts
//! as chunk syntax and what is escaped literal text.

pub mod cancel;
pub mod folding;
pub mod lines;
pub mod prose;
pub mod resolving;
pub mod scanning;
pub mod testing;
pub mod token;
pub mod tokenizing;

pub use cancel::CancellationToken;
pub use folding::{compute_folds, FoldingRange};
pub use prose::{NoopProseScanner, ProseScanner, TexProseScanner};
pub use resolving::{resolve_references, DefinitionSet};
pub use token::{Token, TokenKind, TokenModifier};
pub use tokenizing::{parse, Tokenizer};
