//! Public library API for decoding untyped dynamic value trees into typed Rust values.

/// Dynamic value model, decoding containers, exact numeric coercion, and the recursive decoder.
pub mod decode;
