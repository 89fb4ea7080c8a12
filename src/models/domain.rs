use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

/// A person node in one owner's family tree
///
/// Records come from the document store as-is. Optional or polymorphic
/// fields are normalized while deserializing so the scoring code only ever
/// sees plain lists and an optional date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Member {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(
        rename = "birthDate",
        default,
        deserialize_with = "deserialize_birth_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "birthPlace", default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<BirthPlace>,
    #[serde(default, deserialize_with = "deserialize_nationality")]
    pub nationality: Vec<String>,
    #[serde(rename = "parentsIds", default, deserialize_with = "deserialize_id_list")]
    pub parents_ids: Vec<String>,
    #[serde(rename = "childrenIds", default, deserialize_with = "deserialize_id_list")]
    pub children_ids: Vec<String>,
    #[serde(rename = "brothersIds", default, deserialize_with = "deserialize_id_list")]
    pub brothers_ids: Vec<String>,
}

impl Member {
    /// Year of birth, if a birth date is known
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_date.map(|date| date.year())
    }

    /// Birth city, `None` when absent or empty
    pub fn birth_city(&self) -> Option<&str> {
        self.birth_place
            .as_ref()
            .and_then(|place| place.city.as_deref())
            .filter(|city| !city.is_empty())
    }

    /// Birth country, `None` when absent or empty
    pub fn birth_country(&self) -> Option<&str> {
        self.birth_place
            .as_ref()
            .and_then(|place| place.country.as_deref())
            .filter(|country| !country.is_empty())
    }

    /// Every id listed as parent, child or sibling of this member
    pub fn relative_ids(&self) -> impl Iterator<Item = &String> {
        self.parents_ids
            .iter()
            .chain(self.children_ids.iter())
            .chain(self.brothers_ids.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthPlace {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Probable relationship of an existing member relative to a new one
///
/// The label describes the existing member's role: `Parent` means the
/// existing member is the new member's parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Unknown,
    Parent,
    Child,
    Sibling,
    FirstCousin,
    DistantCousin,
    PossibleAuntUncle,
    PossibleNieceNephew,
    PossibleFamilyLink,
}

impl Relation {
    /// Human-readable text shown next to a suggestion
    pub fn label(&self) -> &'static str {
        match self {
            Relation::Unknown => "Unknown",
            Relation::Parent => "Parent",
            Relation::Child => "Child",
            Relation::Sibling => "Sibling",
            Relation::FirstCousin => "First cousin",
            Relation::DistantCousin => "Distant cousin",
            Relation::PossibleAuntUncle => "Possible aunt/uncle",
            Relation::PossibleNieceNephew => "Possible niece/nephew",
            Relation::PossibleFamilyLink => "Possible family link",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Score and inferred relation for one candidate member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub member: Member,
    pub score: u8,
    pub relation: Relation,
    pub label: &'static str,
}

impl MatchResult {
    pub fn new(member: Member, score: u8, relation: Relation) -> Self {
        Self {
            member,
            score,
            relation,
            label: relation.label(),
        }
    }
}

/// Point values for each scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringPoints {
    pub surname_and_relatives: u32,
    pub birth_period_and_place: u32,
    pub nationality_and_country: u32,
    pub shared_relatives: u32,
    pub same_last_name: u32,
    pub same_nationality: u32,
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            surname_and_relatives: 40,
            birth_period_and_place: 30,
            nationality_and_country: 15,
            shared_relatives: 50,
            same_last_name: 10,
            same_nationality: 10,
        }
    }
}

/// Which signals fired for a pair of members, and what they added up to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub same_last_name: bool,
    pub same_nationality: bool,
    pub same_birth_period_and_place: bool,
    pub same_birth_country: bool,
    pub shared_relatives: Vec<String>,
    /// Sum of the points before capping
    pub raw_total: u32,
    pub score: u8,
}

/// Normalize a nationality value to a list
///
/// A string becomes a one-element list, an array keeps its string
/// elements, anything else is treated as no nationality. Empty strings
/// never count as a nationality.
pub fn normalize_nationality(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Parse a birth date stored as `YYYY-MM-DD`, an RFC 3339 timestamp, or a
/// `{seconds, nanoseconds}` timestamp object
pub fn parse_birth_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        }
        Value::Object(map) => {
            let seconds = map.get("seconds").and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, nanos).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

fn deserialize_birth_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_birth_date))
}

fn deserialize_nationality<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(normalize_nationality).unwrap_or_default())
}

fn deserialize_id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
