//! Wire-format parsing: 1-based comma-separated input to zero-based arrays.
//!
//! All validation happens here, before anything reaches the core crate:
//! exact counts, values in `[1, n]`, well-formed edge tokens.

use anyhow::{ensure, Context, Result};

/// Parse a comma-separated 1-based function like `"1,2,3,6,6,6,7,8,9"`.
///
/// `expected` pins the count when the caller already knows `n`; otherwise
/// `n` is the number of values supplied.
pub fn parse_function(input: &str, expected: Option<usize>) -> Result<Vec<usize>> {
    let mut values = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        let v: usize = token
            .parse()
            .with_context(|| format!("invalid function value {token:?}"))?;
        values.push(v);
    }
    let n = expected.unwrap_or(values.len());
    ensure!(
        values.len() == n,
        "expected {n} function values, got {}",
        values.len()
    );
    for (pos, v) in values.iter_mut().enumerate() {
        ensure!(
            (1..=n).contains(v),
            "value {v} at position {} outside [1, {n}]",
            pos + 1
        );
        *v -= 1;
    }
    Ok(values)
}

/// Parse an edge list like `"1-2,2-3,3-4"` over `n` vertices.
///
/// Exactly `n - 1` edges are required; tree-ness itself is checked by the
/// core builder.
pub fn parse_edges(input: &str, n: usize) -> Result<Vec<(usize, usize)>> {
    let mut edges = Vec::new();
    if input.trim().is_empty() {
        let want = n.saturating_sub(1);
        ensure!(want == 0, "expected {want} edges for {n} vertices, got 0");
        return Ok(edges);
    }
    for token in input.split(',') {
        let token = token.trim();
        let (a, b) = token
            .split_once('-')
            .with_context(|| format!("edge {token:?} is not of the form U-V"))?;
        edges.push((parse_vertex(a.trim(), n)?, parse_vertex(b.trim(), n)?));
    }
    let want = n.saturating_sub(1);
    ensure!(
        edges.len() == want,
        "expected {want} edges for {n} vertices, got {}",
        edges.len()
    );
    Ok(edges)
}

/// Parse a single 1-based vertex token into its zero-based index.
pub fn parse_vertex(token: &str, n: usize) -> Result<usize> {
    let v: usize = token
        .parse()
        .with_context(|| format!("invalid vertex {token:?}"))?;
    check_vertex(v, n)
}

/// Validate a 1-based vertex number and convert to zero-based.
pub fn check_vertex(v: usize, n: usize) -> Result<usize> {
    ensure!((1..=n).contains(&v), "vertex {v} outside [1, {n}]");
    Ok(v - 1)
}
