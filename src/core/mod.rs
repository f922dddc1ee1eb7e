// src/core/mod.rs
//
// Site-independent plumbing: markup lexing, the document tree, HTTP, text helpers.

pub mod net;
pub mod sanitize;
pub mod tokenizer;
pub mod tree;

pub use tree::{Document, NodeId, Selector};
