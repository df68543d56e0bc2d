//! Fill-out plan demonstration.
//!
//! Demonstrates:
//! - Building an in-memory signup form
//! - Loading a fill-out plan from JSON (from a file argument or built in)
//! - Skipped fields (missing, unsupported type) versus applied fields
//! - Reading back the shared event log
//!
//! Usage:
//!   cargo run --example fill_form
//!   cargo run --example fill_form -- plan.json
//!   cargo run --example fill_form -- --debug

// ============================================================================
// Imports
// ============================================================================

use form_mutator::{
    EventKind, FillOut, FormMutator, MemoryControl, MemoryDocument, MemoryOption, Result,
};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Constants
// ============================================================================

const DEFAULT_PLAN: &str = r##"{
    "[name=username]": "ada",
    "#password": "correct horse battery staple",
    "#country": "Norway",
    "#topics": ["Rust", "Compilers"],
    "#newsletter": true,
    "#avatar": "ignored.png",
    "#nickname": "not on this form",
    "#signup": true
}"##;

// ============================================================================
// Main
// ============================================================================

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let debug = args.iter().any(|a| a == "--debug");
    init_logging(debug);

    let plan_path = args.iter().find(|a| !a.starts_with("--")).cloned();

    if let Err(e) = run(plan_path) {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

fn run(plan_path: Option<String>) -> Result<()> {
    println!("=== Form Mutator: fill-out plan ===\n");

    // ========================================================================
    // Setup
    // ========================================================================

    let plan = match plan_path {
        Some(path) => FillOut::from_json(&std::fs::read_to_string(&path).map_err(|e| {
            form_mutator::Error::config(format!("cannot read plan {path}: {e}"))
        })?)?,
        None => FillOut::from_json(DEFAULT_PLAN)?,
    };
    println!("[Setup] Plan has {} field(s)", plan.len());

    let mut document = MemoryDocument::new();
    document
        .insert(MemoryControl::text().with_name("username"))
        .insert(MemoryControl::password().with_id("password"))
        .insert(
            MemoryControl::select_one([
                MemoryOption::selected("Choose..."),
                MemoryOption::new("Norway"),
                MemoryOption::new("Japan"),
            ])
            .with_id("country"),
        )
        .insert(
            MemoryControl::select_multiple(["Rust", "Go", "Compilers", "Databases"])
                .with_id("topics"),
        )
        .insert(MemoryControl::checkbox().with_id("newsletter"))
        .insert(MemoryControl::new("file").with_id("avatar"))
        .insert(
            MemoryControl::submit()
                .with_id("signup")
                .on(EventKind::Click, |state| state.value = "submitted".into()),
        );

    // ========================================================================
    // Fill Out
    // ========================================================================

    let mut mutator = FormMutator::new(document);
    let report = mutator.fill_out(&plan)?;

    println!("\n[Report]");
    for field in report.fields() {
        println!("    {:<20} {}", field.selector, field.outcome);
    }

    // ========================================================================
    // Event Log
    // ========================================================================

    if let Some(document) = mutator.document() {
        println!("\n[Events] {} dispatched", document.log().len());
        for record in document.log().records() {
            println!("    {:<12} {}", record.target, record.event.kind);
        }

        if let Some(topics) = document.control("#topics")? {
            println!("\n[State] topics = {:?}", topics.selected_texts());
            println!("    {}", serde_json::to_string(topics.state())?);
        }
        if let Some(signup) = document.control("#signup")? {
            println!("[State] signup = {:?}", signup.value());
        }
    }

    println!("\n=== Done ===");
    Ok(())
}

// ============================================================================
// Logging
// ============================================================================

/// Initialize tracing/logging.
fn init_logging(debug: bool) {
    let filter = if debug {
        "form_mutator=trace"
    } else {
        "form_mutator=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}
