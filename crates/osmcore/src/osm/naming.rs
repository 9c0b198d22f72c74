//! Derived naming keys for relations: display name, type name, label.
//!
//! All functions are pure reads of the relation's tags. Missing tags never
//! fail: `relation_name` returns `None` and `relation_type_name` falls back to
//! `"relation"`.

use super::Relation;

/// Which tags provide a relation's display name, in priority order.
///
/// Key syntax:
/// - `key` — the tag's value.
/// - `:suffix` — the value of the first tag (in key order) whose key ends with
///   `suffix`.
/// - `?key` — the bare key when the tag holds a true value (`yes`, `true`, `1`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingCfg {
    pub name_keys: Vec<String>,
}

impl Default for NamingCfg {
    fn default() -> Self {
        Self {
            name_keys: [
                "name",
                "ref",
                "restriction",
                "landuse",
                "natural",
                "public_transport",
                ":LocationCode",
                "note",
                "?building",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

fn is_true(value: &str) -> bool {
    matches!(value, "yes" | "true" | "1")
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Display name from the first matching naming key; `None` if none matches.
pub fn relation_name(rel: &Relation, cfg: &NamingCfg) -> Option<String> {
    for key in &cfg.name_keys {
        let found = if let Some(flag) = key.strip_prefix('?') {
            rel.get(flag).filter(|v| is_true(v)).map(|_| flag)
        } else if key.starts_with(':') {
            rel.tags
                .iter()
                .find(|(k, v)| k.ends_with(key.as_str()) && non_empty(v).is_some())
                .map(|(_, v)| v)
        } else {
            rel.get(key)
        };
        if let Some(name) = found.and_then(non_empty) {
            return Some(name.to_string());
        }
    }
    None
}

/// Category of a relation: `type` tag, then public transport, building and
/// place fallbacks, then `"relation"`. An `admin_level` tag is appended as
/// `[level]`.
pub fn relation_type_name(rel: &Relation) -> String {
    let mut name = if let Some(t) = rel.get("type").and_then(non_empty) {
        t.to_string()
    } else if rel.get("public_transport").and_then(non_empty).is_some() {
        "public transport".to_string()
    } else if let Some(building) = rel.get("building").and_then(non_empty) {
        if is_true(building) {
            "building".to_string()
        } else {
            building.to_string()
        }
    } else if let Some(place) = rel.get("place").and_then(non_empty) {
        place.to_string()
    } else {
        "relation".to_string()
    };
    if let Some(level) = rel.get("admin_level").and_then(non_empty) {
        name.push('[');
        name.push_str(level);
        name.push(']');
    }
    name
}

/// Human-readable label: `route ["Ring"] (3 members, incomplete)`.
pub fn format_relation(rel: &Relation, cfg: &NamingCfg) -> String {
    let mut out = relation_type_name(rel);
    if let Some(name) = relation_name(rel, cfg) {
        out.push_str(" [\"");
        out.push_str(&name);
        out.push_str("\"]");
    }
    let n = rel.members_count();
    out.push_str(&format!(
        " ({n} {}",
        if n == 1 { "member" } else { "members" }
    ));
    if rel.incomplete {
        out.push_str(", incomplete");
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osm::{Member, MemberKind};

    #[test]
    fn name_follows_key_priority() {
        let cfg = NamingCfg::default();
        let r = Relation::new(1).with_tag("ref", "B 12").with_tag("name", "Ring");
        assert_eq!(relation_name(&r, &cfg).as_deref(), Some("Ring"));
        let r = Relation::new(1).with_tag("ref", "B 12").with_tag("note", "x");
        assert_eq!(relation_name(&r, &cfg).as_deref(), Some("B 12"));
        assert_eq!(relation_name(&Relation::new(1), &cfg), None);
    }

    #[test]
    fn blank_values_are_skipped() {
        let cfg = NamingCfg::default();
        let r = Relation::new(1).with_tag("name", "  ").with_tag("ref", "7");
        assert_eq!(relation_name(&r, &cfg).as_deref(), Some("7"));
    }

    #[test]
    fn suffix_and_flag_keys() {
        let cfg = NamingCfg::default();
        let r = Relation::new(1).with_tag("TMC:cid_58:tabcd_1:LocationCode", "4711");
        assert_eq!(relation_name(&r, &cfg).as_deref(), Some("4711"));
        let r = Relation::new(1).with_tag("building", "yes");
        assert_eq!(relation_name(&r, &cfg).as_deref(), Some("building"));
        let r = Relation::new(1).with_tag("building", "no");
        assert_eq!(relation_name(&r, &cfg), None);
    }

    #[test]
    fn type_name_fallbacks() {
        assert_eq!(relation_type_name(&Relation::new(1)), "relation");
        assert_eq!(
            relation_type_name(&Relation::new(1).with_tag("type", "route")),
            "route"
        );
        assert_eq!(
            relation_type_name(&Relation::new(1).with_tag("public_transport", "stop_area")),
            "public transport"
        );
        assert_eq!(
            relation_type_name(&Relation::new(1).with_tag("building", "yes")),
            "building"
        );
        assert_eq!(
            relation_type_name(&Relation::new(1).with_tag("building", "church")),
            "church"
        );
        assert_eq!(
            relation_type_name(&Relation::new(1).with_tag("place", "island")),
            "island"
        );
        assert_eq!(
            relation_type_name(
                &Relation::new(1)
                    .with_tag("type", "boundary")
                    .with_tag("admin_level", "8")
            ),
            "boundary[8]"
        );
    }

    #[test]
    fn label_lists_type_name_and_members() {
        let cfg = NamingCfg::default();
        let r = Relation::new(1)
            .with_tag("type", "route")
            .with_tag("name", "Ring")
            .with_member(Member::new(MemberKind::Way, 2, ""))
            .mark_incomplete();
        assert_eq!(
            format_relation(&r, &cfg),
            "route [\"Ring\"] (1 member, incomplete)"
        );
        assert_eq!(format_relation(&Relation::new(2), &cfg), "relation (0 members)");
    }
}
