//! Map relations as seen by the ordering code.
//!
//! Purpose
//! - A minimal, read-only view of an OSM relation: identity, tags, typed
//!   members and an "incomplete" flag for relations whose members were not
//!   all downloaded.
//! - Derived sort keys (display name, type name) live in `naming`.
//!
//! Parsing, storage and editing belong to the data layer; this module only
//! holds already-parsed values.

pub mod naming;
pub mod rand;

use std::collections::BTreeMap;
use std::fmt;

/// Tag map with deterministic (key-sorted) iteration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Tags(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Primitive type of a relation member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberKind {
    Node,
    Way,
    Relation,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MemberKind::Node => "node",
            MemberKind::Way => "way",
            MemberKind::Relation => "relation",
        })
    }
}

/// Typed member reference with its role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub kind: MemberKind,
    pub id: i64,
    pub role: String,
}

impl Member {
    pub fn new(kind: MemberKind, id: i64, role: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            role: role.into(),
        }
    }
}

/// A relation: identity, tags and ordered members.
///
/// `id` is the stable identity; negative ids mark objects that were created
/// locally and never uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    pub id: i64,
    pub tags: Tags,
    pub members: Vec<Member>,
    pub incomplete: bool,
}

impl Relation {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            tags: Tags::new(),
            members: Vec::new(),
            incomplete: false,
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn mark_incomplete(mut self) -> Self {
        self.incomplete = true;
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key)
    }

    #[inline]
    pub fn members_count(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_new(&self) -> bool {
        self.id < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_builder_collects_tags_and_members() {
        let r = Relation::new(-3)
            .with_tag("type", "route")
            .with_tag("name", "Ring")
            .with_member(Member::new(MemberKind::Way, 10, "forward"))
            .with_member(Member::new(MemberKind::Node, 11, ""))
            .mark_incomplete();
        assert!(r.is_new());
        assert!(r.incomplete);
        assert_eq!(r.members_count(), 2);
        assert_eq!(r.get("name"), Some("Ring"));
        assert_eq!(r.get("ref"), None);
        assert_eq!(r.members[0].kind.to_string(), "way");
    }

    #[test]
    fn tags_iterate_in_key_order() {
        let tags: Tags = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<&str> = tags.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(tags.len(), 3);
        assert!(tags.contains_key("b"));
        assert!(!Tags::new().contains_key("b"));
        assert!(Tags::new().is_empty());
    }
}
