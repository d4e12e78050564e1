use derive_more::{AsRef, Deref, Display};
use strum::{AsRefStr, EnumString};

use crate::SlugError;

/// Identifier of a selectable muscle region, e.g. `chest` or `deltoids.left`.
///
/// The laterality suffix is kept so that the exact region can be highlighted, while
/// [`MuscleSlug::base`] is used for dataset lookups and display names.
#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MuscleSlug(String);

impl MuscleSlug {
    pub fn new(slug: &str) -> Result<Self, SlugError> {
        let trimmed_slug = slug.trim();

        if trimmed_slug.is_empty() {
            return Err(SlugError::Empty);
        }

        Ok(MuscleSlug(trimmed_slug.to_string()))
    }

    #[must_use]
    pub fn base(&self) -> &str {
        strip_laterality(&self.0)
    }

    #[must_use]
    pub fn laterality(&self) -> Option<Laterality> {
        laterality(&self.0)
    }

    #[must_use]
    pub fn display_name(&self) -> Option<DisplayName> {
        normalize_for_display(Some(self.0.as_str()))
    }
}

#[derive(AsRefStr, strum::Display, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Laterality {
    Left,
    Right,
}

impl Laterality {
    const ALL: [Laterality; 2] = [Laterality::Left, Laterality::Right];

    fn suffix_len(self) -> usize {
        self.as_ref().len() + 1
    }
}

/// Human readable muscle name derived from a slug.
#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

fn split_laterality(slug: &str) -> Option<(&str, Laterality)> {
    Laterality::ALL.into_iter().find_map(|laterality| {
        let split = slug.len().checked_sub(laterality.suffix_len())?;
        let suffix = slug.get(split..)?;
        let side = suffix.strip_prefix('.')?;
        side.eq_ignore_ascii_case(laterality.as_ref())
            .then(|| (&slug[..split], laterality))
    })
}

/// Remove a single trailing `.left` or `.right` (ASCII case-insensitive).
#[must_use]
pub fn strip_laterality(slug: &str) -> &str {
    split_laterality(slug).map_or(slug, |(base, _)| base)
}

#[must_use]
pub fn laterality(slug: &str) -> Option<Laterality> {
    split_laterality(slug).map(|(_, laterality)| laterality)
}

/// Derive the display name of a slug by dropping its laterality and capitalizing the first
/// character. All other characters are kept verbatim.
#[must_use]
pub fn normalize_for_display(slug: Option<&str>) -> Option<DisplayName> {
    let slug = slug.filter(|slug| !slug.is_empty())?;
    let mut chars = strip_laterality(slug).chars();
    let first = chars.next()?;
    Some(DisplayName(first.to_uppercase().chain(chars).collect()))
}
