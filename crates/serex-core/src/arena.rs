//! Arena allocator for expression storage.
//!
//! Expressions are stored contiguously in a `Vec`, with hash-consing
//! ensuring each unique expression is stored exactly once. Handles only
//! ever point at earlier entries, so every tree is finite and acyclic by
//! construction.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::expr::{ExprNode, FunctionId, SymbolId};
use crate::handle::ExprHandle;

/// The main arena for storing expressions.
#[derive(Debug, Default)]
pub struct ExprArena {
    /// Storage for all expression nodes.
    nodes: Vec<ExprNode>,
    /// Interning table: maps node content to its handle.
    intern_map: HashMap<ExprNode, ExprHandle>,
    /// Symbol table: maps symbol names to their IDs.
    symbols: HashMap<String, SymbolId>,
    /// Reverse symbol table for display.
    symbol_names: Vec<String>,
}

impl ExprArena {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns an expression node, returning its handle.
    ///
    /// If an identical node already exists, returns the existing handle.
    pub fn intern(&mut self, node: ExprNode) -> ExprHandle {
        if let Some(&handle) = self.intern_map.get(&node) {
            return handle;
        }

        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "Arena capacity exceeded");

        let handle = ExprHandle::new(index as u32);
        self.nodes.push(node.clone());
        self.intern_map.insert(node, handle);
        handle
    }

    /// Gets the node at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle is invalid.
    #[must_use]
    pub fn get(&self, handle: ExprHandle) -> &ExprNode {
        &self.nodes[handle.index() as usize]
    }

    /// Interns a symbol, returning its unique ID.
    pub fn intern_symbol(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.symbols.get(name) {
            return id;
        }

        let id = self.symbol_names.len() as SymbolId;
        self.symbols.insert(name.to_string(), id);
        self.symbol_names.push(name.to_string());
        id
    }

    /// Gets the name of a symbol by its ID.
    #[must_use]
    pub fn symbol_name(&self, id: SymbolId) -> Option<&str> {
        self.symbol_names.get(id as usize).map(String::as_str)
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Convenience constructors ===

    /// Creates an integer expression.
    pub fn integer(&mut self, value: i64) -> ExprHandle {
        self.intern(ExprNode::Integer(value))
    }

    /// Creates a rational constant, normalized to lowest terms.
    ///
    /// Integral values collapse to `Integer` so hash-consing sees one
    /// canonical form per value.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    pub fn rational(&mut self, num: i64, den: i64) -> ExprHandle {
        assert!(den != 0, "denominator cannot be zero");

        let (mut num, mut den) = if den < 0 { (-num, -den) } else { (num, den) };
        let g = gcd_i64(num.unsigned_abs(), den.unsigned_abs());
        if g > 1 {
            num /= g as i64;
            den /= g as i64;
        }

        if den == 1 {
            self.integer(num)
        } else {
            self.intern(ExprNode::Rational(num, den as u64))
        }
    }

    /// Creates a symbol expression.
    pub fn symbol(&mut self, name: &str) -> ExprHandle {
        let id = self.intern_symbol(name);
        self.intern(ExprNode::Symbol(id))
    }

    /// Creates an addition expression.
    pub fn add(&mut self, args: impl Into<SmallVec<[ExprHandle; 4]>>) -> ExprHandle {
        let args = args.into();
        if args.len() == 1 {
            return args[0];
        }
        self.intern(ExprNode::Add(args))
    }

    /// Creates a multiplication expression.
    pub fn mul(&mut self, args: impl Into<SmallVec<[ExprHandle; 4]>>) -> ExprHandle {
        let args = args.into();
        if args.len() == 1 {
            return args[0];
        }
        self.intern(ExprNode::Mul(args))
    }

    /// Creates a power expression.
    pub fn pow(&mut self, base: ExprHandle, exp: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Pow { base, exp })
    }

    /// Creates a one-argument function application.
    pub fn unary(&mut self, id: FunctionId, arg: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Function {
            id,
            args: smallvec::smallvec![arg],
        })
    }

    /// Creates a function application with arbitrary arity.
    pub fn function(
        &mut self,
        id: FunctionId,
        args: impl Into<SmallVec<[ExprHandle; 2]>>,
    ) -> ExprHandle {
        self.intern(ExprNode::Function {
            id,
            args: args.into(),
        })
    }
}

fn gcd_i64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::functions;

    #[test]
    fn test_arena_basic() {
        let mut arena = ExprArena::new();

        let x = arena.symbol("x");
        let y = arena.symbol("y");

        // Same symbol returns same handle
        let x2 = arena.symbol("x");
        assert_eq!(x, x2);
        assert_ne!(x, y);
        assert_eq!(arena.symbol_name(0), Some("x"));
    }

    #[test]
    fn test_hash_consing() {
        let mut arena = ExprArena::new();

        let x = arena.symbol("x");
        let one = arena.integer(1);

        let sum1 = arena.add(smallvec::smallvec![x, one]);
        let sum2 = arena.add(smallvec::smallvec![x, one]);

        assert_eq!(sum1, sum2);
        // Arena should only have 3 nodes: x, 1, (x + 1)
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_rational_normalization() {
        let mut arena = ExprArena::new();

        // 4/6 reduces to 2/3
        let r = arena.rational(4, 6);
        assert_eq!(arena.get(r), &ExprNode::Rational(2, 3));

        // 6/3 collapses to the integer 2
        let two = arena.rational(6, 3);
        let two_direct = arena.integer(2);
        assert_eq!(two, two_direct);

        // 1/-2 normalizes to -1/2
        let neg = arena.rational(1, -2);
        assert_eq!(arena.get(neg), &ExprNode::Rational(-1, 2));
    }

    #[test]
    fn test_unary_constructor() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let sin_x = arena.unary(functions::SIN, x);

        match arena.get(sin_x) {
            ExprNode::Function { id, args } => {
                assert_eq!(*id, functions::SIN);
                assert_eq!(args.len(), 1);
                assert_eq!(args[0], x);
            }
            other => panic!("expected function node, got {other:?}"),
        }
    }
}
