use crate::catalog::Amenity;

/// Income at or above this magnitude switches on the luxury narrowing step.
pub(crate) const HIGH_INCOME_THRESHOLD: u64 = 100_000;

/// Cost floor that lets an amenity survive the high-income step on price alone.
pub(crate) const HIGH_INCOME_COST_FLOOR: u32 = 30_000;

/// Universally-popular amenity names used when narrowing eliminates everything.
pub(crate) const POPULAR_NAME_KEYWORDS: [&str; 4] = ["gym", "pool", "parking", "security"];

const YOUNG_BAND: [&str; 3] = ["young", "student", "entertainment"];
const PROFESSIONAL_BAND: [&str; 3] = ["professional", "fitness", "work"];
const ESTABLISHED_BAND: [&str; 3] = ["family", "luxury", "convenience"];

pub(crate) fn matches_category(amenity: &Amenity, category: &str) -> bool {
    amenity.category.eq_ignore_ascii_case(category)
}

/// Lifestyle normalization: lower-case with spaces collapsed to hyphens.
/// Both the hyphenated key and the raw lower-cased string are substring-checked
/// against every tag; the double check is part of the matching contract.
pub(crate) fn lifestyle_needles(lifestyle: &str) -> (String, String) {
    let raw = lifestyle.to_lowercase();
    let key = raw.replace(' ', "-");
    (key, raw)
}

pub(crate) fn matches_lifestyle(amenity: &Amenity, key: &str, raw: &str) -> bool {
    amenity
        .target_demographics
        .iter()
        .any(|tag| tag.contains(key) || tag.contains(raw))
}

/// Leading integer of an age range such as "25-35". Anything without leading
/// digits in its first hyphen-separated token parses to nothing, and no age
/// band applies.
pub(crate) fn leading_age(age_range: &str) -> Option<u32> {
    let first = age_range.split('-').next().unwrap_or("");
    let digits: String = first
        .trim_start()
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Tag keywords for the age band the given age falls into. Over-55 has no
/// band; that cohort gets the full candidate set.
pub(crate) fn age_band_keywords(age: u32) -> Option<&'static [&'static str]> {
    if age <= 25 {
        Some(&YOUNG_BAND)
    } else if age <= 35 {
        Some(&PROFESSIONAL_BAND)
    } else if age <= 55 {
        Some(&ESTABLISHED_BAND)
    } else {
        None
    }
}

pub(crate) fn matches_age_band(amenity: &Amenity, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| amenity.has_tag_containing(keyword))
}

/// Every digit in the string, concatenated, read as one integer: "$100,000+"
/// parses as 100000. No digits at all reads as zero; a digit run too long for
/// u64 saturates high, which keeps absurdly large incomes in the luxury band.
pub(crate) fn embedded_income(income_range: &str) -> u64 {
    let digits: String = income_range
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u64::MAX)
    }
}

pub(crate) fn matches_high_income(amenity: &Amenity) -> bool {
    amenity
        .target_demographics
        .iter()
        .any(|tag| tag == "luxury-seekers")
        || amenity.category == "luxury"
        || amenity.estimated_cost > HIGH_INCOME_COST_FLOOR
}

pub(crate) fn is_popular_fallback(amenity: &Amenity) -> bool {
    let name = amenity.name.to_lowercase();
    POPULAR_NAME_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
}
