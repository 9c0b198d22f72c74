//! Coordinate precision and deterministic ordering for OSM editing.
//!
//! Modules
//! - `precision`: snap coordinates to the server grid (1e-7 degrees) exactly
//!   and idempotently.
//! - `osm`: relations, tags, members and their derived naming keys.
//! - `order`: staged comparators, natural string order and an exhaustive
//!   order-law checker.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer the curated surface in `api` from callers such as the CLI.

pub mod api;
pub mod order;
pub mod osm;
pub mod precision;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use precision::{PrecisionCfg, Quantizer};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::order::{
        check_order_laws, relation_comparator, ChainComparator, Comparator, LawCheckCfg,
        TripleScope,
    };
    pub use crate::osm::naming::{format_relation, NamingCfg};
    pub use crate::osm::rand::{draw_relations, RelationSetCfg, ReplayToken};
    pub use crate::osm::{Member, MemberKind, Relation, Tags};
    pub use crate::precision::{LatLon, PrecisionCfg, Quantizer, SERVER_PRECISION};
}
