use std::collections::{BTreeSet, HashSet};
use crate::models::Member;

/// Maximum gap between birth years for two members to count as the same period
pub const BIRTH_PERIOD_YEARS: i32 = 5;

/// Case-insensitive surname equality
///
/// An empty surname on either side never matches.
#[inline]
pub fn has_same_last_name(a: &Member, b: &Member) -> bool {
    if a.last_name.is_empty() || b.last_name.is_empty() {
        return false;
    }

    a.last_name.to_lowercase() == b.last_name.to_lowercase()
}

/// True if the two nationality lists share at least one value
#[inline]
pub fn has_same_nationality(a: &Member, b: &Member) -> bool {
    a.nationality
        .iter()
        .any(|nationality| b.nationality.contains(nationality))
}

/// Ids that appear in both members' combined parent/child/sibling lists
///
/// Set semantics: an id listed twice on either side is counted once. The
/// result is sorted so callers get a stable order.
pub fn shared_relatives(a: &Member, b: &Member) -> Vec<String> {
    let theirs: HashSet<&String> = b.relative_ids().collect();

    a.relative_ids()
        .filter(|id| theirs.contains(id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Born within `BIRTH_PERIOD_YEARS` of each other in the same city
#[inline]
pub fn has_same_birth_period_and_place(a: &Member, b: &Member) -> bool {
    let (Some(year_a), Some(year_b)) = (a.birth_year(), b.birth_year()) else {
        return false;
    };

    if (year_a - year_b).abs() > BIRTH_PERIOD_YEARS {
        return false;
    }

    match (a.birth_city(), b.birth_city()) {
        (Some(city_a), Some(city_b)) => city_a == city_b,
        _ => false,
    }
}

/// Both members were born in the same (non-empty) country
#[inline]
pub fn has_same_birth_country(a: &Member, b: &Member) -> bool {
    match (a.birth_country(), b.birth_country()) {
        (Some(country_a), Some(country_b)) => country_a == country_b,
        _ => false,
    }
}
