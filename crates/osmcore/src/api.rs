//! Curated internal API (UNSTABLE).
//!
//! Not a public API: a convenience surface for the CLI, benches and
//! integration tests. Breaking changes are allowed.

// Coordinate precision
pub use crate::precision::{
    naive_round, InvalidInputError, LatLon, PrecisionCfg, PrecisionCfgError, Quantizer,
    MAX_DIGITS, SAMPLE_VALUES, SERVER_PRECISION,
};
// Relations and naming
pub use crate::osm::naming::{format_relation, relation_name, relation_type_name, NamingCfg};
pub use crate::osm::rand::{
    draw_relations, RelationSetCfg, ReplayToken as RelationReplay,
};
pub use crate::osm::{Member, MemberKind, Relation, Tags};
// Ordering and order laws
pub use crate::order::{
    alphanum_cmp, check_order_laws, check_sort_determinism, is_sorted_by, relation_comparator,
    Alphanum, ChainBuilder, ChainComparator, Comparator, Decision, LawCheckCfg, LawReport,
    RelationOrder, TripleScope, Violation,
};
