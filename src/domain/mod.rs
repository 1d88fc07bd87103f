// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing what the pipeline
// works on. No file I/O, no burn types, no ndarray here, so
// everything in this layer is testable on its own.

// Raw articles and the tokenised corpus built from them
pub mod article;

// word ↔ index ↔ vector lookup tables
pub mod mappings;

// EmbeddingModel and ArticleSource abstractions
pub mod traits;
