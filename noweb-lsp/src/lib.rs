//! Language Server Protocol (LSP) implementation for noweb
//!
//!     This crate makes the noweb scanners available to any LSP-capable
//!     editor. It is a thin presentation adapter: all classification lives
//!     in `noweb-parser`; this crate only stores open documents, encodes
//!     tokens against the semantic-token legend, and converts folding
//!     ranges to the wire types.
//!
//! Feature Set
//!
//!     1. Semantic Tokens (textDocument/semanticTokens/full):
//!         - Chunk starts, definition lines, references
//!         - Undefined references in their own (comment-colored) type
//!         - Code spans between references
//!         - Prose sub-spans when the TeX prose scanner is enabled
//!
//!     2. Folding Ranges (textDocument/foldingRange):
//!         - One region per chunk, boundary line to the line before the
//!           next boundary
//!
//! Architecture
//!
//!     LSP Layer (tower-lsp):
//!         - JSON-RPC plumbing, handshaking, capability negotiation
//!
//!     Server Layer (this crate):
//!         - Implements the LanguageServer trait
//!         - Full-sync document store (uri -> text)
//!         - Thin; delegates to the feature layer
//!
//!     Feature Layer:
//!         - Legend + delta encoding of core tokens
//!         - Folding range conversion
//!
//! Usage
//!
//!     $ noweb-lsp
//!     Starts the language server on stdin/stdout for editor integration.

pub mod features;
pub mod server;

pub use server::NowebLanguageServer;
