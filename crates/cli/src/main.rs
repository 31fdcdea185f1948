use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use joyal::api::{
    function_to_tree, marked_tree, tree_to_function, CipherEngine, ReplayToken, SampleCfg,
    SelfMap, Tree,
};

mod parse;

#[derive(Parser)]
#[command(name = "joyal")]
#[command(about = "Joyal bijection demos and Hill cipher driver")]
struct Cmd {
    /// Write the JSON result to this path in addition to stdout
    #[arg(long)]
    out: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convert a tree plus (start, end) marks into a total function
    TreeToFunction {
        #[arg(long)]
        n: usize,
        /// Edge list, 1-based, e.g. "1-2,2-3,3-4"
        #[arg(long)]
        edges: String,
        /// Start vertex, 1-based
        #[arg(long)]
        start: usize,
        /// End vertex, 1-based
        #[arg(long)]
        end: usize,
    },
    /// Recover the marked tree from a total function
    FunctionToTree {
        /// Function values, 1-based, e.g. "1,2,3,6,6,6,7,8,9"
        #[arg(long)]
        function: String,
    },
    /// Encrypt text with the key derived from a function
    Encrypt {
        #[arg(long)]
        function: String,
        #[arg(long)]
        text: String,
    },
    /// Decrypt text with the key derived from a function
    Decrypt {
        #[arg(long)]
        function: String,
        #[arg(long)]
        text: String,
    },
    /// Draw a reproducible random marked tree and its function
    Sample {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let value = match cmd.action {
        Action::TreeToFunction {
            n,
            edges,
            start,
            end,
        } => run_tree_to_function(n, &edges, start, end),
        Action::FunctionToTree { function } => run_function_to_tree(&function),
        Action::Encrypt { function, text } => run_cipher(&function, &text, true),
        Action::Decrypt { function, text } => run_cipher(&function, &text, false),
        Action::Sample { n, seed } => run_sample(n, seed),
    }?;
    emit(&value, cmd.out.as_deref())
}

fn run_tree_to_function(n: usize, edges: &str, start: usize, end: usize) -> Result<Value> {
    tracing::info!(n, start, end, "tree_to_function");
    let edge_list = parse::parse_edges(edges, n)?;
    let start = parse::check_vertex(start, n)?;
    let end = parse::check_vertex(end, n)?;
    let tree = Tree::from_edges(n, &edge_list).context("edge list does not form a tree")?;
    let out = tree_to_function(&tree, start, end)?;
    Ok(json!({
        "n": n,
        "start": start + 1,
        "end": end + 1,
        "function": one_based(out.function.values()),
        "vertebra": one_based(&out.vertebra),
        "vertebra_sorted": one_based(&out.vertebra_sorted),
        "vertebra_reversed": one_based(&out.vertebra_reversed),
        "vertebra_edges": edges_one_based(&out.vertebra_edges),
        "oriented_edges": edges_one_based(&out.oriented_edges),
    }))
}

fn run_function_to_tree(function: &str) -> Result<Value> {
    let values = parse::parse_function(function, None)?;
    let n = values.len();
    tracing::info!(n, "function_to_tree");
    let f = SelfMap::from_values(values)?;
    let out = function_to_tree(&f);
    let is_tree = out.to_tree(n).is_ok();
    let (start, end) = out.marks().context("function has no cycle vertices")?;
    Ok(json!({
        "n": n,
        "start": start + 1,
        "end": end + 1,
        "vertebra": one_based(&out.vertebra),
        "vertebra_sorted": one_based(&out.vertebra_sorted),
        "vertebra_reversed": one_based(&out.vertebra_reversed),
        "vertebra_edges": edges_one_based(&out.vertebra_edges),
        "oriented_edges": edges_one_based(&out.oriented_edges),
        "edges": edges_one_based(&out.edges()),
        "is_tree": is_tree,
    }))
}

fn run_cipher(function: &str, text: &str, encrypting: bool) -> Result<Value> {
    let values = parse::parse_function(function, None)?;
    let n = values.len();
    tracing::info!(n, encrypting, "cipher");
    let f = SelfMap::from_values(values)?;
    let mut engine = CipherEngine::new();
    engine.set_key(&f);
    if encrypting {
        let ciphertext = engine.encrypt(text)?;
        Ok(json!({ "block": n, "ciphertext": ciphertext }))
    } else {
        let plaintext = engine.decrypt(text)?;
        Ok(json!({ "block": n, "plaintext": plaintext }))
    }
}

fn run_sample(n: usize, seed: u64) -> Result<Value> {
    tracing::info!(n, seed, "sample");
    let cfg = SampleCfg { n };
    let tok = ReplayToken { seed, index: 0 };
    let (tree, start, end) = marked_tree(&cfg, tok)?;
    let out = tree_to_function(&tree, start, end)?;
    Ok(json!({
        "n": n,
        "seed": seed,
        "edges": edges_one_based(tree.edges()),
        "start": start + 1,
        "end": end + 1,
        "function": one_based(out.function.values()),
    }))
}

fn one_based(values: &[usize]) -> Vec<usize> {
    values.iter().map(|&v| v + 1).collect()
}

fn edges_one_based(edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    edges.iter().map(|&(u, v)| (u + 1, v + 1)).collect()
}

fn emit(value: &Value, out: Option<&str>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    if let Some(out) = out {
        let out_path = Path::new(out);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out_path, rendered.as_bytes())?;
    }
    Ok(())
}
