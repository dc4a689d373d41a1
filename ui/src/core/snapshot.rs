//! The aggregate-counts document that drives the whole dashboard.
//!
//! A snapshot is produced by an external process, fetched once per mount and
//! never mutated afterwards. Category mappings keep the order in which they
//! appear in the JSON document because several charts (age bars, top-N
//! ethnicity and prescriber slices) depend on it.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Age buckets that together make up the "aging population" insight.
pub const AGING_BUCKETS: [&str; 3] = ["60-74", "75-99", "100+"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_patients: u64,
    pub gender_distribution: Distribution,
    pub ethnicity_distribution: Distribution,
    pub age_groups: Distribution,
    pub prescriber_stats: Distribution,
    /// Carried through from the source document; no chart consumes it yet.
    #[serde(default)]
    pub surgery_stats: Distribution,
    pub contact_availability: ContactAvailability,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAvailability {
    pub home_phone: u64,
    pub mobile_phone: u64,
    pub no_contact: u64,
}

impl ContactAvailability {
    /// Patients reachable by at least one phone number.
    pub fn reachable(&self) -> u64 {
        self.home_phone.saturating_add(self.mobile_phone)
    }

    pub fn total(&self) -> u64 {
        self.reachable().saturating_add(self.no_contact)
    }
}

/// Ordered mapping from category label to count.
///
/// Deserializes from a JSON object without losing key order. A key repeated in
/// the document keeps its first position and takes the last value.
///
/// Lookups go through a label → position index, so parsing stays linear in
/// the number of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    entries: Vec<(String, u64)>,
    positions: HashMap<String, usize>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `label`, keeping the position of an existing entry.
    pub fn insert(&mut self, label: impl Into<String>, count: u64) {
        let label = label.into();
        match self.positions.get(&label) {
            Some(&position) => self.entries[position].1 = count,
            None => {
                self.positions.insert(label.clone(), self.entries.len());
                self.entries.push((label, count));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.positions
            .get(label)
            .map(|&position| self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, count)| acc.saturating_add(*count))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut distribution = Distribution::new();
        for (label, count) in iter {
            distribution.insert(label, count);
        }
        distribution
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Distribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = Distribution;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping category labels to non-negative counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let capacity = access.size_hint().unwrap_or(0);
                let mut distribution = Distribution {
                    entries: Vec::with_capacity(capacity),
                    positions: HashMap::with_capacity(capacity),
                };
                while let Some((label, count)) = access.next_entry::<String, u64>()? {
                    distribution.insert(label, count);
                }
                Ok(distribution)
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// Soft schema issues found after a snapshot parsed successfully.
///
/// None of these stop the dashboard from rendering; affected figures show as
/// unavailable instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaWarning {
    #[error("totalPatients is zero; every percentage will be unavailable")]
    ZeroTotal,
    #[error("ageGroups has no `{0}` bucket; the aging population insight is unavailable")]
    MissingAgeBucket(&'static str),
    #[error("genderDistribution has no `{0}` entry")]
    MissingGender(&'static str),
    #[error("{field} sums to {sum}, more than totalPatients ({total})")]
    ExceedsTotal {
        field: &'static str,
        sum: u64,
        total: u64,
    },
}

impl DashboardSnapshot {
    /// Collect soft schema issues. An empty result means the snapshot is fully usable.
    pub fn validate(&self) -> Vec<SchemaWarning> {
        let mut warnings = Vec::new();

        if self.total_patients == 0 {
            warnings.push(SchemaWarning::ZeroTotal);
        }

        for bucket in AGING_BUCKETS {
            if self.age_groups.get(bucket).is_none() {
                warnings.push(SchemaWarning::MissingAgeBucket(bucket));
            }
        }

        for gender in ["Female", "Male"] {
            if self.gender_distribution.get(gender).is_none() {
                warnings.push(SchemaWarning::MissingGender(gender));
            }
        }

        let sums = [
            ("genderDistribution", self.gender_distribution.total()),
            ("ethnicityDistribution", self.ethnicity_distribution.total()),
            ("ageGroups", self.age_groups.total()),
            ("contactAvailability", self.contact_availability.total()),
        ];
        for (field, sum) in sums {
            if self.total_patients > 0 && sum > self.total_patients {
                warnings.push(SchemaWarning::ExceedsTotal {
                    field,
                    sum,
                    total: self.total_patients,
                });
            }
        }

        warnings
    }
}
