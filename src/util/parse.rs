//! Coercion of raw UI strings into typed values.
//!
//! Enum names are matched case-insensitively against their stored string values, so a form may
//! submit `"eu"`, `"EU"` or `" Eu "` for the same region.

use entity::sea_orm_active_enums::{MatchResult, Rank, Region};
use sea_orm::{ActiveEnum, Iterable};

use crate::{error::validation::ValidationError, model::account::{ProfileForm, ProfileUpdate}};

/// Trim a required text field, rejecting blank input.
pub fn required(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(value.to_string())
}

/// Parse a profile level, a whole number of at least 1.
pub fn parse_level(raw: &str) -> Result<i32, ValidationError> {
    match raw.trim().parse::<i32>() {
        Ok(level) if level >= 1 => Ok(level),
        _ => Err(ValidationError::InvalidLevel(raw.to_string())),
    }
}

pub fn parse_region(raw: &str) -> Result<Region, ValidationError> {
    find_variant(raw).ok_or_else(|| ValidationError::InvalidRegion(raw.to_string()))
}

pub fn parse_rank(raw: &str) -> Result<Rank, ValidationError> {
    find_variant(raw).ok_or_else(|| ValidationError::InvalidRank(raw.to_string()))
}

pub fn parse_match_result(raw: &str) -> Result<MatchResult, ValidationError> {
    find_variant(raw).ok_or_else(|| ValidationError::InvalidMatchResult(raw.to_string()))
}

fn find_variant<E>(raw: &str) -> Option<E>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    let raw = raw.trim();
    E::iter().find(|variant| variant.to_value().eq_ignore_ascii_case(raw))
}

/// Coerce a submitted profile form into a typed update.
///
/// Fields the form left out stay `None`. Blank optional text (country, episode, act) is treated
/// as left out, while a blank name is rejected.
pub fn profile_update_from_form(form: ProfileForm) -> Result<ProfileUpdate, ValidationError> {
    Ok(ProfileUpdate {
        name: form.name.as_deref().map(|n| required("name", n)).transpose()?,
        region: form.region.as_deref().map(parse_region).transpose()?,
        country: non_blank(form.country),
        level: form.level.as_deref().map(parse_level).transpose()?,
        rank: form.rank.as_deref().map(parse_rank).transpose()?,
        episode: non_blank(form.episode),
        act: non_blank(form.act),
        phone_verified: None,
        email_verified: None,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
