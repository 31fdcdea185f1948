//! Curated re-export surface for downstream drivers.
//!
//! Prefer these re-exports for clarity and consistency across callers;
//! the module paths stay available for anything not listed here.

// Tree construction
pub use crate::tree::{DisjointSetForest, Tree, TreeBuilder, TreeError};
// Total self-maps
pub use crate::func::{FunctionError, FunctionTable, SelfMap};
// The bijection, both directions
pub use crate::bijection::{
    cycle_vertices, distances_from, function_to_tree, orient_edges, simple_path,
    tree_to_function, BijectionError, FunctionToTree, TreeToFunction,
};
// Exact modular linear algebra
pub use crate::modmat::{
    adjugate_mod, derive_key, determinant, extended_gcd, gcd, inverse_mod, matvec_mod, minor,
    modular_inverse, MatrixError,
};
// Cipher
pub use crate::cipher::{
    char_of, code_of, decode, decrypt_text, encode, encrypt_text, CipherEngine, CipherError,
    MAX_TEXT_LEN, MODULUS, SPACE_CODE,
};
// Reproducible sampling
pub use crate::sample::{marked_tree, self_map, ReplayToken, SampleCfg, SampleError};
