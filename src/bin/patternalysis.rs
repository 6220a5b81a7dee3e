//! Command-line front end for the pattern catalog and demos.
//!
//! Every subcommand prints human-readable text by default and pretty JSON with
//! `--json`. Diagnostics go to stderr through `tracing`; set
//! `PATTERNALYSIS_LOG` or pass `-v` to see them.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use patternalysis::catalog::{
    CatalogDocument, PatternCategory, PatternIndex, load_catalog_document, write_catalog_document,
};
use patternalysis::demo::{
    DEFAULT_LOG_CAPACITY, DemoConfig, DemoSession, MAX_LOG_CAPACITY, Panel,
};
use patternalysis::logging::init_logging;
use patternalysis::route::{HomePage, PatternPage, Route};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

#[derive(Parser)]
#[command(name = "patternalysis")]
#[command(about = "Browse the design pattern catalog and run its demos")]
#[command(version)]
struct Cli {
    /// Raise diagnostic verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries in navigation order
    List {
        /// Only show one category (creational, structural, behavioral)
        #[arg(long)]
        category: Option<PatternCategory>,
        #[arg(long)]
        json: bool,
    },
    /// Show the page for a pattern identifier or a /patterns/<id> path
    Show {
        target: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the home page sections
    Home {
        #[arg(long)]
        json: bool,
    },
    /// Resolve a request path to a route
    Route { path: String },
    /// Write the catalog as a JSON document
    Export {
        /// Destination file; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Validate a catalog document and compare it with the built-in catalog
    Check { path: PathBuf },
    /// Run a pattern demo through a sequence of actions (name or name:argument)
    Demo {
        pattern: String,
        steps: Vec<String>,
        /// Print the demo's action vocabulary instead of running it
        #[arg(long)]
        actions: bool,
        #[arg(long, env = "PATTERNALYSIS_SEED")]
        seed: Option<u64>,
        /// Entries each demo log keeps (1 to 1000)
        #[arg(
            long,
            env = "PATTERNALYSIS_LOG_CAPACITY",
            default_value_t = DEFAULT_LOG_CAPACITY,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
                .range(1..=MAX_LOG_CAPACITY as u64)
        )]
        log_capacity: usize,
        #[arg(long)]
        json: bool,
    },
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List { category, json } => list(category, json),
        Commands::Show { target, json } => show(&target, json),
        Commands::Home { json } => home(json),
        Commands::Route { path } => route(&path),
        Commands::Export { output } => export(output),
        Commands::Check { path } => check(path),
        Commands::Demo {
            pattern,
            steps,
            actions,
            seed,
            log_capacity,
            json,
        } => {
            let config = DemoConfig { log_capacity, seed };
            demo(&pattern, &steps, actions, config, json)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{rendered}");
    Ok(())
}

fn list(category: Option<PatternCategory>, json: bool) -> Result<()> {
    let index = PatternIndex::canonical();
    let entries: Vec<_> = index
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| category.is_none_or(|wanted| entry.category == wanted))
        .collect();
    info!(count = entries.len(), "listing patterns");

    if json {
        let rows: Vec<_> = entries
            .iter()
            .map(|(position, entry)| {
                json!({
                    "position": position,
                    "identifier": entry.identifier,
                    "title": entry.title,
                    "category": entry.category,
                })
            })
            .collect();
        return print_json(&rows);
    }

    for (position, entry) in entries {
        println!(
            "{position:>2}  {:<24} {:<24} {}",
            entry.identifier, entry.title, entry.category
        );
    }
    Ok(())
}

fn show(target: &str, json: bool) -> Result<()> {
    let index = PatternIndex::canonical();
    let identifier = if target.starts_with('/') {
        match Route::parse(target) {
            Route::Pattern(entry) => entry.identifier.to_string(),
            Route::Home => bail!("'{target}' is the home page; use `patternalysis home`"),
            Route::NotFound => bail!("no page at '{target}'"),
        }
    } else {
        target.to_string()
    };
    let Some(page) = PatternPage::for_identifier(index, &identifier) else {
        bail!("unknown pattern '{identifier}' (see `patternalysis list`)");
    };

    if json {
        return print_json(&page);
    }

    println!("{}", page.heading);
    println!("Category: {}", page.category.title());
    println!();
    println!("{}", page.intent);
    println!();
    println!("{} ({})", page.back.label, page.back.href);
    if let Some(previous) = &page.previous {
        println!("← Previous: {} ({})", previous.label, previous.href);
    }
    if let Some(next) = &page.next {
        println!("Next → {} ({})", next.label, next.href);
    }
    Ok(())
}

fn home(json: bool) -> Result<()> {
    let page = HomePage::new(PatternIndex::canonical());
    if json {
        return print_json(&page);
    }

    println!("{}", page.title);
    for link in &page.calls_to_action {
        println!("  {} → {}", link.label, link.href);
    }
    for section in &page.sections {
        println!();
        println!("{}: {}", section.title, section.description);
        for link in &section.links {
            println!("  {:<26} {}", link.label, link.href);
        }
    }
    Ok(())
}

fn route(path: &str) -> Result<()> {
    match Route::parse(path) {
        Route::Home => println!("home"),
        Route::Pattern(entry) => println!("pattern {}", entry.identifier),
        Route::NotFound => println!("not found"),
    }
    Ok(())
}

fn export(output: Option<PathBuf>) -> Result<()> {
    let document = CatalogDocument::canonical();
    match output {
        Some(path) => {
            write_catalog_document(&document, &path)?;
            info!(path = %path.display(), "catalog exported");
            Ok(())
        }
        None => print_json(&document),
    }
}

fn check(path: PathBuf) -> Result<()> {
    let document = load_catalog_document(&path)?;
    let drift = document.diff_against_canonical();
    if drift.is_empty() {
        println!(
            "{}: {} patterns, matches the built-in catalog",
            path.display(),
            document.patterns.len()
        );
        return Ok(());
    }
    tracing::warn!(path = %path.display(), issues = drift.len(), "catalog drift");
    bail!(
        "{} differs from the built-in catalog:\n{}",
        path.display(),
        drift.join("\n")
    )
}

fn demo(
    pattern: &str,
    steps: &[String],
    list_actions: bool,
    config: DemoConfig,
    json: bool,
) -> Result<()> {
    let mut session = DemoSession::start(pattern, &config)?;

    if list_actions {
        if json {
            return print_json(session.actions());
        }
        for spec in session.actions() {
            let usage = match spec.argument {
                Some(hint) => format!("{}:{hint}", spec.name),
                None => spec.name.to_string(),
            };
            println!("{usage:<32} {}", spec.summary);
        }
        return Ok(());
    }

    session
        .run(steps)
        .with_context(|| format!("running {pattern} demo"))?;
    info!(pattern, steps = steps.len(), "demo finished");
    let panels = session.view();

    if json {
        let transcript: Vec<String> = session.transcript().iter().map(|a| a.to_string()).collect();
        return print_json(&json!({
            "pattern": session.pattern(),
            "transcript": transcript,
            "panels": panels,
        }));
    }

    print_panels(&panels);
    Ok(())
}

fn print_panels(panels: &[Panel]) {
    for (position, panel) in panels.iter().enumerate() {
        if position > 0 {
            println!();
        }
        println!("[{}]", panel.title);
        if panel.lines.is_empty() {
            println!("  (empty)");
        }
        for line in &panel.lines {
            println!("  {line}");
        }
    }
}
