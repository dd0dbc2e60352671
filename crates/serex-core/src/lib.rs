//! # serex-core
//!
//! Expression representation for the Serex series expander.
//!
//! This crate provides:
//! - Arena-allocated expression storage with hash-consing
//! - Type-safe expression handles
//! - O(1) structural equality via interning
//!
//! Expression trees are built once, then borrowed immutably by the
//! expansion algorithm; nothing here mutates a node after interning.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod expr;
pub mod handle;

pub use arena::ExprArena;
pub use expr::{ExprNode, FunctionId, SymbolId};
pub use handle::ExprHandle;
