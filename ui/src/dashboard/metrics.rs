//! Turns snapshot counts into chart-ready records and headline percentages.
//!
//! Everything here is pure and cheap; the overview recomputes it on each render.
//! Slicing always follows document order: "top" ethnicities and prescribers are
//! the first entries the source document lists, not the largest ones.

use std::fmt;

use crate::core::format::{format_fixed, UNAVAILABLE};
use crate::core::palette::{CategoryColors, ChartTheme, Color, Palette, CYAN, PINK, PURPLE};
use crate::core::snapshot::{
    ContactAvailability, DashboardSnapshot, Distribution, AGING_BUCKETS,
};

pub const ETHNICITY_LIMIT: usize = 6;
pub const PRESCRIBER_LIMIT: usize = 5;

/// Prefixes dropped from ethnicity labels to keep legends short.
pub const ETHNICITY_PREFIXES: [&str; 2] = ["White - ", "Asian or Asian British - "];

pub const MOBILE_PHONE: &str = "Mobile Phone";
pub const HOME_PHONE: &str = "Home Phone";
pub const NO_CONTACT: &str = "No Contact";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    pub name: String,
    pub value: u64,
    pub fill: Option<Color>,
}

impl ChartRecord {
    pub fn new(name: impl Into<String>, value: u64, fill: Color) -> Self {
        Self {
            name: name.into(),
            value,
            fill: Some(fill),
        }
    }
}

pub fn gender_records(genders: &Distribution, colors: &CategoryColors) -> Vec<ChartRecord> {
    genders
        .iter()
        .map(|(label, count)| ChartRecord::new(label, count, colors.color_for(label)))
        .collect()
}

pub fn age_records(ages: &Distribution, palette: &Palette) -> Vec<ChartRecord> {
    ages.iter()
        .enumerate()
        .map(|(i, (label, count))| ChartRecord::new(label, count, palette.color_at(i)))
        .collect()
}

pub fn ethnicity_records(ethnicities: &Distribution, palette: &Palette) -> Vec<ChartRecord> {
    ethnicities
        .iter()
        .take(ETHNICITY_LIMIT)
        .enumerate()
        .map(|(i, (label, count))| {
            ChartRecord::new(strip_ethnicity_prefix(label), count, palette.color_at(i))
        })
        .collect()
}

/// Drop every leading [`ETHNICITY_PREFIXES`] match. Idempotent.
pub fn strip_ethnicity_prefix(label: &str) -> &str {
    let mut rest = label;
    while let Some(stripped) = ETHNICITY_PREFIXES
        .iter()
        .find_map(|prefix| rest.strip_prefix(prefix))
    {
        rest = stripped;
    }
    rest
}

pub fn prescriber_records(prescribers: &Distribution, palette: &Palette) -> Vec<ChartRecord> {
    prescribers
        .iter()
        .take(PRESCRIBER_LIMIT)
        .enumerate()
        .map(|(i, (key, count))| ChartRecord::new(prescriber_label(key), count, palette.color_at(i)))
        .collect()
}

/// The part of a prescriber key before its first comma.
pub fn prescriber_label(key: &str) -> &str {
    key.split(',').next().unwrap_or(key)
}

/// Always three records, in display order, whatever order the document used.
pub fn contact_records(contact: &ContactAvailability) -> Vec<ChartRecord> {
    vec![
        ChartRecord::new(MOBILE_PHONE, contact.mobile_phone, CYAN),
        ChartRecord::new(HOME_PHONE, contact.home_phone, PURPLE),
        ChartRecord::new(NO_CONTACT, contact.no_contact, PINK),
    ]
}

/// A share of `totalPatients`, or unavailable when it cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage {
    value: Option<f64>,
    decimals: u8,
}

impl Percentage {
    /// `part / total * 100`; unavailable if `part` is missing or `total` is zero.
    pub fn of(part: Option<u64>, total: u64, decimals: u8) -> Self {
        let value = match part {
            Some(part) if total > 0 => Some(part as f64 / total as f64 * 100.0),
            _ => None,
        };
        Self { value, decimals }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }

    /// Display form with a trailing `%` when the value exists: `"52.0%"` or `"—"`.
    pub fn with_sign(&self) -> String {
        if self.is_available() {
            format!("{self}%")
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => f.write_str(&format_fixed(value, self.decimals)),
            None => f.write_str(UNAVAILABLE),
        }
    }
}

pub fn female_percent(snapshot: &DashboardSnapshot) -> Percentage {
    Percentage::of(
        snapshot.gender_distribution.get("Female"),
        snapshot.total_patients,
        1,
    )
}

pub fn male_percent(snapshot: &DashboardSnapshot) -> Percentage {
    Percentage::of(
        snapshot.gender_distribution.get("Male"),
        snapshot.total_patients,
        1,
    )
}

/// Patients reachable by home or mobile phone.
pub fn contact_rate(snapshot: &DashboardSnapshot) -> Percentage {
    Percentage::of(
        Some(snapshot.contact_availability.reachable()),
        snapshot.total_patients,
        1,
    )
}

/// Share of patients in the `60-74`, `75-99` and `100+` buckets.
///
/// Unavailable unless all three buckets exist under exactly those names.
pub fn aging_population_percent(snapshot: &DashboardSnapshot) -> Percentage {
    let elderly = AGING_BUCKETS
        .iter()
        .map(|bucket| snapshot.age_groups.get(bucket))
        .try_fold(0u64, |acc, count| count.map(|c| acc.saturating_add(c)));
    Percentage::of(elderly, snapshot.total_patients, 0)
}

pub fn no_contact_percent(snapshot: &DashboardSnapshot) -> Percentage {
    Percentage::of(
        Some(snapshot.contact_availability.no_contact),
        snapshot.total_patients,
        0,
    )
}

/// Everything the overview renders, derived from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub total_patients: u64,
    pub gender: Vec<ChartRecord>,
    pub age: Vec<ChartRecord>,
    pub ethnicity: Vec<ChartRecord>,
    pub prescribers: Vec<ChartRecord>,
    pub contact: Vec<ChartRecord>,
    pub female_percent: Percentage,
    pub male_percent: Percentage,
    pub contact_rate: Percentage,
    pub aging_population_percent: Percentage,
    pub no_contact_percent: Percentage,
}

impl DashboardMetrics {
    pub fn from_snapshot(snapshot: &DashboardSnapshot, theme: &ChartTheme) -> Self {
        Self {
            total_patients: snapshot.total_patients,
            gender: gender_records(&snapshot.gender_distribution, &theme.gender_colors),
            age: age_records(&snapshot.age_groups, &theme.palette),
            ethnicity: ethnicity_records(&snapshot.ethnicity_distribution, &theme.palette),
            prescribers: prescriber_records(&snapshot.prescriber_stats, &theme.palette),
            contact: contact_records(&snapshot.contact_availability),
            female_percent: female_percent(snapshot),
            male_percent: male_percent(snapshot),
            contact_rate: contact_rate(snapshot),
            aging_population_percent: aging_population_percent(snapshot),
            no_contact_percent: no_contact_percent(snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            total_patients: 1000,
            gender_distribution: [("Female", 520u64), ("Male", 480)].into_iter().collect(),
            ethnicity_distribution: Distribution::new(),
            age_groups: [("60-74", 200u64), ("75-99", 100), ("100+", 10)]
                .into_iter()
                .collect(),
            prescriber_stats: Distribution::new(),
            surgery_stats: Distribution::new(),
            contact_availability: ContactAvailability {
                home_phone: 150,
                mobile_phone: 600,
                no_contact: 250,
            },
        }
    }

    #[test]
    fn gender_percentages() {
        let snap = snapshot();
        assert_eq!(female_percent(&snap).to_string(), "52.0");
        assert_eq!(male_percent(&snap).to_string(), "48.0");
    }

    #[test]
    fn third_gender_breaks_the_hundred() {
        let mut snap = snapshot();
        snap.gender_distribution = [("Female", 500u64), ("Male", 450), ("Unknown", 50)]
            .into_iter()
            .collect();
        let sum = female_percent(&snap).value().unwrap() + male_percent(&snap).value().unwrap();
        assert!((sum - 100.0).abs() > 1e-9);
        assert!((sum - 95.0).abs() < 1e-9);
    }

    #[test]
    fn gender_records_keep_every_category() {
        let mut snap = snapshot();
        snap.gender_distribution = [("Male", 3u64), ("Female", 4), ("Other", 5)]
            .into_iter()
            .collect();
        let records = gender_records(&snap.gender_distribution, &CategoryColors::gender());
        let sum: u64 = records.iter().map(|r| r.value).sum();
        assert_eq!(sum, snap.gender_distribution.total());
        assert_eq!(records[0].fill, Some(CYAN));
        assert_eq!(records[1].fill, Some(PINK));
        assert_eq!(records[2].fill, Some(PURPLE));
    }

    #[test]
    fn contact_rate_counts_both_phones() {
        assert_eq!(contact_rate(&snapshot()).to_string(), "75.0");
        assert_eq!(no_contact_percent(&snapshot()).to_string(), "25");
    }

    #[test]
    fn aging_population_rounds_to_whole_percent() {
        assert_eq!(aging_population_percent(&snapshot()).to_string(), "31");
    }

    #[test]
    fn aging_population_needs_all_buckets() {
        let mut snap = snapshot();
        snap.age_groups = [("60-74", 200u64), ("75+", 110)].into_iter().collect();
        let pct = aging_population_percent(&snap);
        assert!(!pct.is_available());
        assert_eq!(pct.to_string(), UNAVAILABLE);
    }

    #[test]
    fn zero_total_never_divides() {
        let mut snap = snapshot();
        snap.total_patients = 0;
        let metrics = DashboardMetrics::from_snapshot(&snap, &ChartTheme::default());
        for pct in [
            metrics.female_percent,
            metrics.male_percent,
            metrics.contact_rate,
            metrics.aging_population_percent,
            metrics.no_contact_percent,
        ] {
            assert_eq!(pct.to_string(), UNAVAILABLE);
        }
    }

    #[test]
    fn missing_gender_key_is_unavailable() {
        let mut snap = snapshot();
        snap.gender_distribution = [("Female", 520u64)].into_iter().collect();
        assert_eq!(male_percent(&snap).to_string(), UNAVAILABLE);
        assert_eq!(female_percent(&snap).to_string(), "52.0");
    }

    #[test]
    fn ethnicity_takes_first_six_in_document_order() {
        let labels = [
            "White - British",
            "Asian or Asian British - Indian",
            "Black or Black British - African",
            "Mixed",
            "Other",
            "Not stated",
            "White - Irish",
        ];
        let distribution: Distribution = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (*l, i as u64 + 1))
            .collect();
        let records = ethnicity_records(&distribution, &Palette::default());

        assert_eq!(records.len(), ETHNICITY_LIMIT);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "British",
                "Indian",
                "Black or Black British - African",
                "Mixed",
                "Other",
                "Not stated"
            ]
        );
        // Smallest value first: no sorting by count.
        assert_eq!(records[0].value, 1);
    }

    #[test]
    fn short_ethnicity_list_is_not_padded() {
        let distribution: Distribution = [("A", 1u64), ("B", 2)].into_iter().collect();
        assert_eq!(ethnicity_records(&distribution, &Palette::default()).len(), 2);
    }

    #[test]
    fn prefix_stripping_is_idempotent() {
        for label in [
            "White - British",
            "Asian or Asian British - Bangladeshi",
            "White - White - Irish",
            "Asian or Asian British - White - Other",
            "Not stated",
            "",
        ] {
            let once = strip_ethnicity_prefix(label);
            assert_eq!(strip_ethnicity_prefix(once), once, "label {label:?}");
        }
        assert_eq!(strip_ethnicity_prefix("British - White - X"), "British - White - X");
    }

    #[test]
    fn prescribers_take_first_five_and_cut_at_comma() {
        let keys = ["Patel, A", "Okafor, C, Locum", "MacLeod", "Hughes, R", "Ng, T", "Late, X"];
        let distribution: Distribution = keys.iter().map(|k| (*k, 10u64)).collect();
        let records = prescriber_records(&distribution, &Palette::default());

        assert_eq!(records.len(), PRESCRIBER_LIMIT);
        for (record, key) in records.iter().zip(keys) {
            assert_eq!(record.name, key.split(',').next().unwrap());
        }
        assert_eq!(records[2].name, "MacLeod");
    }

    #[test]
    fn palette_colors_follow_position() {
        let palette = Palette::default();
        let ages: Distribution = (0..12).map(|i| (format!("bucket-{i}"), 1u64)).collect();
        let records = age_records(&ages, &palette);
        assert_eq!(records.len(), 12);
        assert_eq!(records[11].fill, Some(palette.color_at(11)));
        assert_eq!(records[10].fill, records[0].fill);
    }

    #[test]
    fn contact_records_are_fixed() {
        let records = contact_records(&snapshot().contact_availability);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, [MOBILE_PHONE, HOME_PHONE, NO_CONTACT]);
        let values: Vec<u64> = records.iter().map(|r| r.value).collect();
        assert_eq!(values, [600, 150, 250]);
        assert_eq!(records[0].fill, Some(CYAN));
        assert_eq!(records[1].fill, Some(PURPLE));
        assert_eq!(records[2].fill, Some(PINK));
    }
}
