use crate::models::{Member, Relation};

/// Birth-year gap under which two unlinked members are guessed to be cousins
pub const COUSIN_MAX_AGE_GAP: i32 = 15;

/// Birth-year gap beyond which one member is guessed to be a generation above
pub const GENERATION_AGE_GAP: i32 = 20;

/// Infer how `existing` relates to `new_member`
///
/// Returns `Relation::Unknown` when either side is missing; otherwise see
/// [`classify_relation`].
pub fn infer_relation(new_member: Option<&Member>, existing: Option<&Member>) -> Relation {
    match (new_member, existing) {
        (Some(new_member), Some(existing)) => classify_relation(new_member, existing),
        _ => Relation::Unknown,
    }
}

/// Classify the relation between two members
///
/// The checks form a priority chain, first match wins:
/// 1. direct parent link, in either direction
/// 2. direct sibling link, in either direction
/// 3. a shared parent
/// 4. cross-containment of the two parent lists (cousin heuristic)
/// 5. birth-year distance
///
/// Relationship lists are not kept symmetric by the data layer, so every
/// link is checked from both members' side.
pub fn classify_relation(new_member: &Member, existing: &Member) -> Relation {
    if new_member.parents_ids.contains(&existing.id) {
        return Relation::Parent;
    }

    if existing.parents_ids.contains(&new_member.id) {
        return Relation::Child;
    }

    if new_member.brothers_ids.contains(&existing.id)
        || existing.brothers_ids.contains(&new_member.id)
    {
        return Relation::Sibling;
    }

    if shares_parent(new_member, existing) {
        return Relation::Sibling;
    }

    if shares_grandparent_link(new_member, existing) {
        return Relation::FirstCousin;
    }

    if let Some(relation) = relation_from_age(new_member, existing) {
        return relation;
    }

    Relation::PossibleFamilyLink
}

#[inline]
fn shares_parent(a: &Member, b: &Member) -> bool {
    a.parents_ids.iter().any(|id| b.parents_ids.contains(id))
}

/// One-level cross-containment check between the two parent lists
///
/// This is a proxy for a common grandparent, not a traversal of the
/// ancestor graph.
fn shares_grandparent_link(a: &Member, b: &Member) -> bool {
    if a.parents_ids.is_empty() || b.parents_ids.is_empty() {
        return false;
    }

    a.parents_ids.iter().any(|parent| {
        b.parents_ids.iter().any(|other_parent| {
            b.parents_ids.contains(parent) || a.parents_ids.contains(other_parent)
        })
    })
}

fn relation_from_age(new_member: &Member, existing: &Member) -> Option<Relation> {
    let age_diff = new_member.birth_year()? - existing.birth_year()?;

    if age_diff.abs() < COUSIN_MAX_AGE_GAP {
        Some(Relation::DistantCousin)
    } else if age_diff > GENERATION_AGE_GAP {
        Some(Relation::PossibleAuntUncle)
    } else if age_diff < -GENERATION_AGE_GAP {
        Some(Relation::PossibleNieceNephew)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_member(id: &str) -> Member {
        Member {
            id: id.to_string(),
            ..Default::default()
        }
    }

    fn born_in(id: &str, year: i32) -> Member {
        Member {
            id: id.to_string(),
            birth_date: NaiveDate::from_ymd_opt(year, 3, 15),
            ..Default::default()
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_unknown_when_missing() {
        let a = create_member("a");
        assert_eq!(infer_relation(None, Some(&a)), Relation::Unknown);
        assert_eq!(infer_relation(Some(&a), None), Relation::Unknown);
        assert_eq!(infer_relation(None, None), Relation::Unknown);
    }

    #[test]
    fn test_parent_and_child() {
        let mut child = create_member("child");
        child.parents_ids = ids(&["parent"]);
        let parent = create_member("parent");

        assert_eq!(classify_relation(&child, &parent), Relation::Parent);
        assert_eq!(classify_relation(&parent, &child), Relation::Child);
    }

    #[test]
    fn test_parent_wins_over_sibling_link() {
        let mut a = create_member("a");
        a.parents_ids = ids(&["b"]);
        a.brothers_ids = ids(&["b"]);

        assert_eq!(classify_relation(&a, &create_member("b")), Relation::Parent);
    }

    #[test]
    fn test_sibling_link_either_direction() {
        let mut a = create_member("a");
        let b = create_member("b");
        a.brothers_ids = ids(&["b"]);

        assert_eq!(classify_relation(&a, &b), Relation::Sibling);
        assert_eq!(classify_relation(&b, &a), Relation::Sibling);
    }

    #[test]
    fn test_shared_parent_is_sibling() {
        let mut a = create_member("a");
        let mut b = create_member("b");
        a.parents_ids = ids(&["p1", "p2"]);
        b.parents_ids = ids(&["p2", "p3"]);

        assert_eq!(classify_relation(&a, &b), Relation::Sibling);
    }

    #[test]
    fn test_grandparent_link_helper() {
        let mut a = create_member("a");
        let mut b = create_member("b");
        a.parents_ids = ids(&["p1"]);
        b.parents_ids = ids(&["p1", "p2"]);
        assert!(shares_grandparent_link(&a, &b));

        b.parents_ids = ids(&["p2"]);
        assert!(!shares_grandparent_link(&a, &b));

        b.parents_ids.clear();
        assert!(!shares_grandparent_link(&a, &b));
    }

    #[test]
    fn test_age_heuristics() {
        let new_member = born_in("n", 1990);

        assert_eq!(classify_relation(&new_member, &born_in("e", 1980)), Relation::DistantCousin);
        assert_eq!(classify_relation(&new_member, &born_in("e", 2004)), Relation::DistantCousin);
        assert_eq!(classify_relation(&new_member, &born_in("e", 1965)), Relation::PossibleAuntUncle);
        assert_eq!(classify_relation(&new_member, &born_in("e", 2015)), Relation::PossibleNieceNephew);
    }

    #[test]
    fn test_age_gaps_between_bands_fall_through() {
        let new_member = born_in("n", 1990);

        // 15..=20 years apart in either direction matches no age rule
        assert_eq!(classify_relation(&new_member, &born_in("e", 1975)), Relation::PossibleFamilyLink);
        assert_eq!(classify_relation(&new_member, &born_in("e", 1970)), Relation::PossibleFamilyLink);
        assert_eq!(classify_relation(&new_member, &born_in("e", 2010)), Relation::PossibleFamilyLink);
    }

    #[test]
    fn test_fallback_without_dates() {
        let a = create_member("a");
        let b = born_in("b", 1950);

        assert_eq!(classify_relation(&a, &b), Relation::PossibleFamilyLink);
    }
}
