use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use osmcore::api::{
    check_order_laws, draw_relations, format_relation, naive_round, relation_comparator,
    LawCheckCfg, NamingCfg, PrecisionCfg, Quantizer, RelationReplay, RelationSetCfg,
    TripleScope,
};

mod timing;

#[derive(Parser)]
#[command(name = "osmcore")]
#[command(about = "Coordinate rounding and relation ordering checks", version)]
struct Cmd {
    /// Decimal digits of the coordinate grid (7 = server precision)
    #[arg(long, global = true, default_value_t = 7)]
    digits: u32,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Round values and show the naive result next to the exact one
    Round {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Time exact rounding against the naive baseline over the sample values
    CompareRounding {
        #[arg(long, default_value_t = 40_000)]
        iterations: usize,
    },
    /// Sort a synthetic relation set and print the labels
    Sort {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Check the order laws of the relation comparator on a synthetic set
    Check {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Check every ordered triple instead of i <= j <= k
        #[arg(long)]
        all_triples: bool,
        /// Stop after this many violations (at least 1)
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
        max_violations: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = PrecisionCfg::new(cmd.digits)?;
    match cmd.action {
        Action::Round { values } => round(cfg, &values),
        Action::CompareRounding { iterations } => compare_rounding(cfg, iterations),
        Action::Sort { count, seed } => sort(count, seed),
        Action::Check {
            count,
            seed,
            all_triples,
            max_violations,
        } => check(count, seed, all_triples, max_violations),
    }
}

#[derive(Debug, Serialize)]
struct Rounded {
    input: f64,
    naive: Option<f64>,
    exact: Option<f64>,
    error: Option<String>,
}

fn round_one(q: &Quantizer, value: f64) -> Rounded {
    match q.quantize(value) {
        Ok(exact) => Rounded {
            input: value,
            naive: Some(naive_round(value, q.cfg().step())),
            exact: Some(exact),
            error: None,
        },
        Err(e) => Rounded {
            input: value,
            naive: None,
            exact: None,
            error: Some(e.to_string()),
        },
    }
}

fn round(cfg: PrecisionCfg, values: &[f64]) -> Result<()> {
    let q = Quantizer::new(cfg);
    let rows: Vec<Rounded> = values.iter().map(|&v| round_one(&q, v)).collect();
    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    tracing::info!(digits = cfg.digits(), values = rows.len(), failed, "round");
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn compare_rounding(cfg: PrecisionCfg, iterations: usize) -> Result<()> {
    let q = Quantizer::new(cfg);
    let t = timing::time_rounding(&q, iterations);
    tracing::info!(calls = t.calls, ratio = t.ratio, "compare_rounding");
    println!("{}", serde_json::to_string_pretty(&t)?);
    if !t.within_bound() {
        bail!(
            "exact rounding is {:.2}x slower than naive (limit {}x)",
            t.ratio,
            timing::MAX_RATIO
        );
    }
    Ok(())
}

fn relation_set(count: usize) -> RelationSetCfg {
    RelationSetCfg {
        count,
        ..RelationSetCfg::default()
    }
}

fn sort(count: usize, seed: u64) -> Result<()> {
    let naming = NamingCfg::default();
    let rels = draw_relations(&relation_set(count), RelationReplay { seed, index: 0 });
    let cmp = relation_comparator(naming.clone());
    let sorted = cmp.sorted(rels);
    tracing::info!(count = sorted.len(), seed, "sort");
    let rows: Vec<serde_json::Value> = sorted
        .iter()
        .map(|r| serde_json::json!({ "id": r.id, "label": format_relation(r, &naming) }))
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn check(count: usize, seed: u64, all_triples: bool, max_violations: u64) -> Result<()> {
    let rels = draw_relations(&relation_set(count), RelationReplay { seed, index: 0 });
    let cmp = relation_comparator(NamingCfg::default());
    let cfg = LawCheckCfg {
        triples: if all_triples {
            TripleScope::All
        } else {
            TripleScope::Ascending
        },
        max_violations: Some(usize::try_from(max_violations).unwrap_or(usize::MAX)),
    };
    let report = check_order_laws(&rels, &cmp, cfg);
    tracing::info!(
        items = report.items,
        pairs = report.pairs_checked,
        triples = report.triples_checked,
        violations = report.violations.len(),
        "check"
    );
    let summary = serde_json::json!({
        "version": osmcore::VERSION,
        "seed": seed,
        "items": report.items,
        "pairs_checked": report.pairs_checked,
        "triples_checked": report.triples_checked,
        "violations": report.violations.len(),
        "truncated": report.truncated,
        "stages": cmp.stage_names().collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if !report.is_lawful() {
        bail!("{report}");
    }
    Ok(())
}
