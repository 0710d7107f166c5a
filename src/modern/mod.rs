//! Wrappers over library primitives, kept beside the classical ciphers
//!
//! Nothing in the cipher core calls into these. They pass work straight through to
//! the AES and SHA-2 crates, and add only key handling and encoding around them.

// AES-128-CBC with a random IV
pub mod block;

// SHA-256 digests
pub mod hash;

// LSB image watermarking keyed by a SHA-256 digest
pub mod watermark;
