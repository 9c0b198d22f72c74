//! Seeded synthetic relation sets.
//!
//! Purpose
//! - Reproducible inputs for the order-law harness, the CLI and benches.
//!   Names, types and member counts are drawn from small pools so that many
//!   pairs tie on early comparator stages and later stages get exercised.
//!
//! Model
//! - Names mix numbered variants (`Route 2`, `Route 10`, `Route 02`), case
//!   variants and unicode; some relations carry only `ref`, some nothing.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::{Member, MemberKind, Relation};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Synthetic relation set configuration.
#[derive(Clone, Debug)]
pub struct RelationSetCfg {
    pub count: usize,
    pub name_pool: Vec<String>,
    pub type_pool: Vec<String>,
    /// Member counts are uniform in `0..=max_members`.
    pub max_members: usize,
    /// Probability of a relation without `name` (it may still get a `ref`).
    pub p_unnamed: f64,
    pub p_incomplete: f64,
}

impl Default for RelationSetCfg {
    fn default() -> Self {
        Self {
            count: 64,
            name_pool: [
                "Alpha", "alpha", "Beta", "Gamma", "Route 2", "Route 10", "Route 02", "route 2",
                "Ring", "Ringstraße", "Überweg", "Canal 9", "Canal 9a", "",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            type_pool: [
                "route",
                "multipolygon",
                "boundary",
                "restriction",
                "network",
                "",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            max_members: 4,
            p_unnamed: 0.25,
            p_incomplete: 0.15,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [String]) -> Option<&'a str> {
    pool.choose(rng).map(String::as_str)
}

/// Draw `cfg.count` relations. Ids are `1..=count`, shuffled; about one in
/// eight is negated (locally created).
pub fn draw_relations(cfg: &RelationSetCfg, tok: ReplayToken) -> Vec<Relation> {
    let mut rng = tok.to_std_rng();
    let mut ids: Vec<i64> = (1..=cfg.count as i64).collect();
    ids.shuffle(&mut rng);
    ids.into_iter()
        .map(|id| {
            let id = if rng.gen_ratio(1, 8) { -id } else { id };
            let mut rel = Relation::new(id);
            if let Some(t) = pick(&mut rng, &cfg.type_pool) {
                rel.tags.insert("type", t);
                if t == "boundary" && rng.gen_bool(0.5) {
                    let level = rng.gen_range(2..=10u32);
                    rel.tags.insert("admin_level", level.to_string());
                }
            }
            if rng.gen_bool(cfg.p_unnamed.clamp(0.0, 1.0)) {
                if rng.gen_bool(0.5) {
                    rel.tags.insert("ref", rng.gen_range(1..=20u32).to_string());
                }
            } else if let Some(name) = pick(&mut rng, &cfg.name_pool) {
                rel.tags.insert("name", name);
            }
            let n = rng.gen_range(0..=cfg.max_members);
            for k in 0..n {
                let kind = match rng.gen_range(0..3) {
                    0 => MemberKind::Node,
                    1 => MemberKind::Way,
                    _ => MemberKind::Relation,
                };
                let role = if k == 0 { "outer" } else { "" };
                rel.members
                    .push(Member::new(kind, rng.gen_range(1..10_000), role));
            }
            rel.incomplete = rng.gen_bool(cfg.p_incomplete.clamp(0.0, 1.0));
            rel
        })
        .collect()
}
