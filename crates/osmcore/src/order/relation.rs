//! Default ordering of relations for lists and selection dialogs.
//!
//! Stages, in order:
//! 1. `name`: display name in natural order; relations without a name (the
//!    `None` sentinel) sort first.
//! 2. `type`: type name in natural order.
//! 3. `members`: member count.
//! 4. `incomplete`: complete relations before incomplete ones.
//! 5. `id`: identity, which makes distinct relations never tie.
//!
//! Every stage is an `Ord` key, so the chain is a total order by construction.

use super::alphanum::Alphanum;
use super::chain::ChainComparator;
use crate::osm::naming::{relation_name, relation_type_name, NamingCfg};
use crate::osm::Relation;

/// Stage names of [`relation_comparator`].
pub struct RelationOrder;

impl RelationOrder {
    pub const NAME: &'static str = "name";
    pub const TYPE: &'static str = "type";
    pub const MEMBERS: &'static str = "members";
    pub const INCOMPLETE: &'static str = "incomplete";
    pub const ID: &'static str = "id";
}

pub fn relation_comparator(cfg: NamingCfg) -> ChainComparator<Relation> {
    ChainComparator::builder()
        .key(RelationOrder::NAME, move |r: &Relation| {
            relation_name(r, &cfg).map(Alphanum)
        })
        .key(RelationOrder::TYPE, |r: &Relation| {
            Alphanum(relation_type_name(r))
        })
        .key(RelationOrder::MEMBERS, |r: &Relation| r.members_count())
        .key(RelationOrder::INCOMPLETE, |r: &Relation| r.incomplete)
        .key(RelationOrder::ID, |r: &Relation| r.id)
        .build()
}

impl Default for ChainComparator<Relation> {
    fn default() -> Self {
        relation_comparator(NamingCfg::default())
    }
}
