//! Labeled trees, total self-maps, and the cipher built on top of them.
//!
//! This crate implements both directions of the Joyal bijection between
//! free trees on `n` labeled vertices with a distinguished (start, end)
//! pair and total functions `[0, n) -> [0, n)`, together with the exact
//! modular linear algebra needed to turn such a function into an
//! invertible key matrix mod 30 for a Hill-style block cipher.
//!
//! Layout
//! - `tree`: union-find and incremental spanning-tree construction.
//! - `func`: partial and total self-maps with explicit unset slots.
//! - `bijection`: tree -> function and function -> tree conversions.
//! - `modmat`: fraction-free determinant, adjugate, modular inverses.
//! - `cipher`: the 30-symbol alphabet, key derivation, block transforms.
//! - `sample`: seeded, replayable random functions and marked trees.
//!
//! All computation is synchronous and in-memory; every operation runs to
//! completion before returning.

pub mod api;
pub mod bijection;
pub mod cipher;
pub mod func;
pub mod modmat;
pub mod sample;
pub mod tree;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bijection::{
        function_to_tree, tree_to_function, FunctionToTree, TreeToFunction,
    };
    pub use crate::cipher::{derive_key, CipherEngine, CipherError, MODULUS};
    pub use crate::func::{FunctionTable, SelfMap};
    pub use crate::tree::{Tree, TreeBuilder};
}
