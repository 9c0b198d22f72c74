//! Deterministic ordering of domain objects.
//!
//! Purpose
//! - Compose comparators from named key stages (`ChainComparator`) instead of
//!   hand-written compare methods, so the lexicographic chain is data and the
//!   deciding stage of any comparison can be reported.
//! - Provide the relation ordering used by lists (`relation_comparator`).
//! - Certify comparators against the order laws on sample data
//!   (`check_order_laws`).
//!
//! Why
//! - A comparator that mixes keys inconsistently (e.g. "by name if either side
//!   has one, else by type") is not transitive; sorts then become
//!   input-order dependent or panic. Building every stage from an `Ord` key
//!   rules that out, and the law checker catches custom stages that don't.
//!
//! Code cross-refs: `Comparator`, `ChainComparator`, `Alphanum`, `LawReport`

pub mod alphanum;
pub mod chain;
pub mod laws;
mod relation;

pub use alphanum::{alphanum_cmp, Alphanum};
pub use chain::{ChainBuilder, ChainComparator, Comparator, Decision};
pub use laws::{
    check_order_laws, check_sort_determinism, is_sorted_by, LawCheckCfg, LawReport, TripleScope,
    Violation,
};
pub use relation::{relation_comparator, RelationOrder};
