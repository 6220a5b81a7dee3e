// Integration suite: catalog and navigation properties through the public
// library API, then the CLI end to end (export, check, show, demo).
mod support;

use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use patternalysis::catalog::catalog_schema;
use patternalysis::{
    CatalogDocument, DemoConfig, DemoSession, Neighbors, PatternCategory, PatternIndex, Route,
    index_of, neighbors_of, pattern_path, patterns,
};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use support::{cli, run_command, run_failing, stdout_text};
use tempfile::TempDir;

#[test]
fn catalog_identifiers_are_pairwise_distinct() {
    let ids: BTreeSet<&str> = patterns().iter().map(|entry| entry.identifier()).collect();
    assert_eq!(ids.len(), patterns().len());
    assert_eq!(patterns().len(), 23);
}

#[test]
fn catalog_order_matches_published_listing() {
    let expected = [
        ("singleton", PatternCategory::Creational),
        ("factory-method", PatternCategory::Creational),
        ("abstract-factory", PatternCategory::Creational),
        ("builder", PatternCategory::Creational),
        ("prototype", PatternCategory::Creational),
        ("adapter", PatternCategory::Structural),
        ("bridge", PatternCategory::Structural),
        ("composite", PatternCategory::Structural),
        ("decorator", PatternCategory::Structural),
        ("facade", PatternCategory::Structural),
        ("flyweight", PatternCategory::Structural),
        ("proxy", PatternCategory::Structural),
        ("chain-of-responsibility", PatternCategory::Behavioral),
        ("command", PatternCategory::Behavioral),
        ("interpreter", PatternCategory::Behavioral),
        ("iterator", PatternCategory::Behavioral),
        ("mediator", PatternCategory::Behavioral),
        ("memento", PatternCategory::Behavioral),
        ("observer", PatternCategory::Behavioral),
        ("state", PatternCategory::Behavioral),
        ("strategy", PatternCategory::Behavioral),
        ("template-method", PatternCategory::Behavioral),
        ("visitor", PatternCategory::Behavioral),
    ];
    let actual: Vec<(&str, PatternCategory)> = patterns()
        .iter()
        .map(|entry| (entry.identifier(), entry.category))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn unknown_identifiers_have_no_neighbors() {
    for probe in [
        "not-a-real-pattern",
        "",
        "Singleton",
        " singleton",
        "singleton ",
        "/patterns/singleton",
        "factory_method",
    ] {
        assert_eq!(index_of(probe), None, "{probe:?}");
        assert_eq!(neighbors_of(probe), Neighbors::default(), "{probe:?}");
    }
}

#[test]
fn boundary_and_interior_neighbors() {
    let catalog = patterns();
    let last = catalog.len() - 1;

    assert!(neighbors_of(catalog[0].identifier()).previous.is_none());
    assert!(neighbors_of(catalog[last].identifier()).next.is_none());

    for i in 1..last {
        let neighbors = neighbors_of(catalog[i].identifier());
        assert_eq!(neighbors.previous, Some(&catalog[i - 1]), "previous of {i}");
        assert_eq!(neighbors.next, Some(&catalog[i + 1]), "next of {i}");
    }
}

#[test]
fn navigation_scenarios() {
    let singleton = neighbors_of("singleton");
    assert!(singleton.previous.is_none());
    let next = singleton.next.expect("singleton has a next entry");
    assert_eq!(next.identifier(), "factory-method");
    assert_eq!(next.title(), "Factory Method");
    assert_eq!(next.category, PatternCategory::Creational);

    let visitor = neighbors_of("visitor");
    assert_eq!(
        visitor.previous.map(|entry| entry.identifier()),
        Some("template-method")
    );
    assert!(visitor.next.is_none());

    let composite = neighbors_of("composite");
    assert_eq!(composite.previous.map(|e| e.identifier()), Some("bridge"));
    assert_eq!(composite.next.map(|e| e.identifier()), Some("decorator"));

    assert_eq!(index_of("observer"), Some(18));
}

#[test]
fn navigation_is_idempotent() {
    for entry in patterns() {
        let first = (index_of(entry.identifier()), neighbors_of(entry.identifier()));
        for _ in 0..3 {
            assert_eq!(
                (index_of(entry.identifier()), neighbors_of(entry.identifier())),
                first
            );
        }
    }
}

#[test]
fn every_pattern_route_resolves_and_has_a_demo() -> Result<()> {
    let config = DemoConfig::seeded(17);
    for entry in PatternIndex::canonical().entries() {
        let path = pattern_path(entry.identifier());
        assert_eq!(Route::parse(&path), Route::Pattern(entry), "{path}");
        let session = DemoSession::start(entry.identifier(), &config)?;
        assert_eq!(session.pattern(), entry.identifier());
    }
    Ok(())
}

#[test]
fn cli_list_json_matches_catalog() -> Result<()> {
    let mut cmd = cli();
    cmd.args(["list", "--json"]);
    let output = run_command(cmd)?;
    let rows: Vec<Value> = serde_json::from_slice(&output.stdout).context("parsing list output")?;
    assert_eq!(rows.len(), patterns().len());
    assert_eq!(rows[18]["identifier"], "observer");
    assert_eq!(rows[18]["position"], 18);
    assert_eq!(rows[12]["title"], "Chain of Responsibility");

    let mut cmd = cli();
    cmd.args(["list", "--category", "structural", "--json"]);
    let rows: Vec<Value> = serde_json::from_slice(&run_command(cmd)?.stdout)?;
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["position"], 5);
    Ok(())
}

#[test]
fn cli_rejects_unknown_category() -> Result<()> {
    let mut cmd = cli();
    cmd.args(["list", "--category", "architectural"]);
    let stderr = run_failing(cmd)?;
    assert!(stderr.contains("architectural"), "{stderr}");
    Ok(())
}

#[test]
fn exported_catalog_satisfies_schema_and_checks_clean() -> Result<()> {
    let dir = TempDir::new().context("allocating export dir")?;
    let path = dir.path().join("catalog.json");

    let mut cmd = cli();
    cmd.arg("export").arg("--output").arg(&path);
    run_command(cmd)?;

    let exported: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let schema = JSONSchema::compile(catalog_schema()?)
        .map_err(|err| anyhow!("compiling catalog schema: {err}"))?;
    if let Err(errors) = schema.validate(&exported) {
        let details: Vec<String> = errors.map(|err| err.to_string()).collect();
        panic!("exported catalog violates schema:\n{}", details.join("\n"));
    }

    let document: CatalogDocument = serde_json::from_value(exported)?;
    assert_eq!(document, CatalogDocument::canonical());
    assert!(document.diff_against_canonical().is_empty());

    let mut cmd = cli();
    cmd.arg("check").arg(&path);
    let output = run_command(cmd)?;
    assert!(stdout_text(&output).contains("23 patterns, matches the built-in catalog"));
    Ok(())
}

#[test]
fn check_reports_reordered_catalog() -> Result<()> {
    let mut document = CatalogDocument::canonical();
    document.patterns.swap(0, 1);
    let dir = TempDir::new()?;
    let path = dir.path().join("reordered.json");
    fs::write(&path, serde_json::to_string_pretty(&document)?)?;

    let mut cmd = cli();
    cmd.arg("check").arg(&path);
    let stderr = run_failing(cmd)?;
    assert!(
        stderr.contains("pattern 'singleton' at position 1, expected 0"),
        "{stderr}"
    );
    Ok(())
}

#[test]
fn check_rejects_schema_violations() -> Result<()> {
    let mut value = serde_json::to_value(CatalogDocument::canonical())?;
    value["patterns"][3]["category"] = Value::from("architectural");
    let dir = TempDir::new()?;
    let path = dir.path().join("invalid.json");
    fs::write(&path, serde_json::to_string(&value)?)?;

    let mut cmd = cli();
    cmd.arg("check").arg(&path);
    let stderr = run_failing(cmd)?;
    assert!(stderr.contains("failed schema validation"), "{stderr}");
    Ok(())
}

#[test]
fn cli_show_accepts_identifiers_and_paths() -> Result<()> {
    let mut cmd = cli();
    cmd.args(["show", "/patterns/composite", "--json"]);
    let page: Value = serde_json::from_slice(&run_command(cmd)?.stdout)?;
    assert_eq!(page["heading"], "Composite Pattern");
    assert_eq!(page["previous"]["href"], "/patterns/bridge");
    assert_eq!(page["next"]["href"], "/patterns/decorator");

    let mut cmd = cli();
    cmd.args(["show", "visitor"]);
    let text = stdout_text(&run_command(cmd)?);
    assert!(text.starts_with("Visitor Pattern\n"), "{text}");
    assert!(text.contains("← Previous: Template Method (/patterns/template-method)"));
    assert!(!text.contains("Next →"));

    let mut cmd = cli();
    cmd.args(["show", "not-a-real-pattern"]);
    assert!(run_failing(cmd)?.contains("unknown pattern 'not-a-real-pattern'"));
    Ok(())
}

#[test]
fn cli_route_resolution() -> Result<()> {
    for (path, expected) in [
        ("/", "home"),
        ("/patterns/observer", "pattern observer"),
        ("/patterns/not-a-real-pattern", "not found"),
    ] {
        let mut cmd = cli();
        cmd.args(["route", path]);
        assert_eq!(stdout_text(&run_command(cmd)?).trim(), expected, "{path}");
    }
    Ok(())
}

#[test]
fn cli_home_lists_all_sections() -> Result<()> {
    let mut cmd = cli();
    cmd.args(["home", "--json"]);
    let home: Value = serde_json::from_slice(&run_command(cmd)?.stdout)?;
    let sections = home["sections"].as_array().context("sections array")?;
    let counts: Vec<usize> = sections
        .iter()
        .map(|section| section["links"].as_array().map_or(0, Vec::len))
        .collect();
    assert_eq!(counts, vec![5, 7, 11]);
    assert_eq!(home["calls_to_action"][0]["href"], "/patterns/singleton");
    Ok(())
}

#[test]
fn cli_demo_runs_steps_and_reports_panels() -> Result<()> {
    let mut cmd = cli();
    cmd.args(["demo", "builder", "add:cheese", "add:tomato", "build", "--json"]);
    let report: Value = serde_json::from_slice(&run_command(cmd)?.stdout)?;
    assert_eq!(report["pattern"], "builder");
    assert_eq!(report["transcript"].as_array().map(Vec::len), Some(3));
    let panels = report["panels"].as_array().context("panels array")?;
    let result = panels
        .iter()
        .find(|panel| panel["title"] == "Result")
        .context("result panel")?;
    assert_eq!(result["lines"][0], "Burger with: cheese, tomato");

    let mut cmd = cli();
    cmd.args(["demo", "state", "next", "next"]);
    let text = stdout_text(&run_command(cmd)?);
    assert!(text.starts_with("[Light]\n  🟡 Yellow\n"), "{text}");
    Ok(())
}

#[test]
fn cli_demo_seed_makes_random_demos_repeatable() -> Result<()> {
    let run_seeded = || -> Result<String> {
        let mut cmd = cli();
        cmd.env("PATTERNALYSIS_SEED", "42")
            .args(["demo", "flyweight", "plant", "--json"]);
        Ok(stdout_text(&run_command(cmd)?))
    };
    assert_eq!(run_seeded()?, run_seeded()?);
    Ok(())
}

#[test]
fn cli_demo_log_capacity_bounds_output() -> Result<()> {
    let mut cmd = cli();
    cmd.args(["demo", "chain-of-responsibility", "--log-capacity", "2"])
        .args(["request:auth", "request:log", "request:data", "--json"]);
    let report: Value = serde_json::from_slice(&run_command(cmd)?.stdout)?;
    let lines = report["panels"][0]["lines"].as_array().context("results")?;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "📦 Data processed");
    Ok(())
}

#[test]
fn cli_rejects_out_of_range_log_capacity() -> Result<()> {
    for capacity in ["0", "1001", "18446744073709551615"] {
        let mut cmd = cli();
        cmd.args(["demo", "state", "next", "--log-capacity", capacity]);
        let output = cmd.output().context("running demo")?;
        assert_eq!(output.status.code(), Some(2), "{capacity}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--log-capacity"), "{stderr}");
        assert!(!stderr.contains("panicked"), "{stderr}");
    }

    let mut cmd = cli();
    cmd.env("PATTERNALYSIS_LOG_CAPACITY", "18446744073709551615")
        .args(["demo", "state", "next"]);
    assert!(run_failing(cmd)?.contains("1..=1000"));

    let mut cmd = cli();
    cmd.args(["demo", "state", "next", "--log-capacity", "1000", "--json"]);
    run_command(cmd)?;
    Ok(())
}

#[test]
fn log_env_overrides_verbosity_default() -> Result<()> {
    let stderr_of = |log_env: Option<&str>, verbose: bool| -> Result<String> {
        let mut cmd = cli();
        if let Some(directive) = log_env {
            cmd.env("PATTERNALYSIS_LOG", directive);
        }
        if verbose {
            cmd.arg("-v");
        }
        cmd.args(["list", "--json"]);
        let output = run_command(cmd)?;
        Ok(String::from_utf8_lossy(&output.stderr).into_owned())
    };

    assert!(!stderr_of(None, false)?.contains("listing patterns"));
    assert!(stderr_of(None, true)?.contains("listing patterns"));
    assert!(stderr_of(Some("patternalysis=info"), false)?.contains("listing patterns"));
    assert!(!stderr_of(Some("patternalysis=off"), true)?.contains("listing patterns"));

    // An unparseable directive falls back to the verbosity default.
    assert!(stderr_of(Some("patternalysis=loudest"), true)?.contains("listing patterns"));
    assert!(!stderr_of(Some("patternalysis=loudest"), false)?.contains("listing patterns"));
    Ok(())
}

#[test]
fn cli_demo_errors_name_the_problem() -> Result<()> {
    let mut cmd = cli();
    cmd.args(["demo", "bridge", "draw:webgl"]);
    let stderr = run_failing(cmd)?;
    assert!(stderr.contains("running bridge demo"), "{stderr}");
    assert!(stderr.contains("expected one of svg, canvas"), "{stderr}");

    let mut cmd = cli();
    cmd.args(["demo", "not-a-real-pattern"]);
    assert!(run_failing(cmd)?.contains("no demo for pattern 'not-a-real-pattern'"));

    let mut cmd = cli();
    cmd.args(["demo", "observer", "--actions"]);
    let text = stdout_text(&run_command(cmd)?);
    assert!(text.contains("unsubscribe:<id>"), "{text}");
    Ok(())
}
