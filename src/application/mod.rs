// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the data and infra layers into complete runs.
// No text processing happens here and nothing is printed;
// printing belongs to the CLI layer.

// Build vocabulary, weights and windows from a corpus
pub mod prepare_use_case;

// Read prepared artifacts back and decode windows to text
pub mod inspect_use_case;
