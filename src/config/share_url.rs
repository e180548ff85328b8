//! Shareable links. Parameters travel as the query keys `a` (attendees),
//! `s` (salary), `d` (duration), `f` (frequency) and `p` (prep), and every
//! decoded value goes through the same range and allow-list rules as any
//! other input.

use crate::domain::model::{
    Frequency, MeetingParameters, ParameterOverrides, ALLOWED_DURATIONS, ALLOWED_PREP_MINUTES,
    MAX_ATTENDEES, MAX_SALARY, MIN_ATTENDEES, MIN_SALARY,
};
use crate::domain::ports::ParameterSource;
use crate::utils::error::Result;
use crate::utils::validation::{clamp, validate_url};
use url::Url;

pub const DEFAULT_SHARE_BASE: &str = "https://calwizz.com/meeting-cost-calculator";

/// Writes the parameters onto `base`, replacing any query and fragment it had.
pub fn encode_share_url(base: &str, params: &MeetingParameters) -> Result<Url> {
    validate_url("share.base_url", base)?;
    let mut url = Url::parse(base)?;
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair("a", &params.attendees().to_string())
        .append_pair("s", &params.annual_salary().to_string())
        .append_pair("d", &params.duration_minutes().to_string())
        .append_pair("f", params.frequency().as_str())
        .append_pair("p", &params.prep_minutes().to_string());
    Ok(url)
}

/// A link (or bare query string) someone shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedLink {
    query: String,
}

impl SharedLink {
    /// Accepts `https://host/path?a=5&...`, `host/path?a=5&...` (no scheme),
    /// `?a=5&...` or `a=5&...`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let query = if trimmed.contains("://") {
            Url::parse(trimmed)?.query().unwrap_or_default().to_string()
        } else {
            let query = match trimmed.split_once('?') {
                Some((_, query)) => query,
                None => trimmed,
            };
            query.split('#').next().unwrap_or_default().to_string()
        };
        Ok(Self { query })
    }

    // First occurrence wins when a key repeats.
    fn first(&self, key: &str) -> Option<String> {
        url::form_urlencoded::parse(self.query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Only the keys present in the link; each one already clamped or
    /// dropped so that it is a valid input.
    pub fn decode(&self) -> ParameterOverrides {
        let defaults = MeetingParameters::default();
        let mut overrides = ParameterOverrides::default();

        if let Some(raw) = self.first("a") {
            let value = nonzero_or(parse_leading_int(&raw), defaults.attendees());
            overrides.attendees = Some(clamp_u32(value, MIN_ATTENDEES, MAX_ATTENDEES));
        }

        if let Some(raw) = self.first("s") {
            let value = nonzero_or(parse_leading_int(&raw), defaults.annual_salary());
            overrides.annual_salary = Some(clamp_u32(value, MIN_SALARY, MAX_SALARY));
        }

        if let Some(raw) = self.first("d") {
            overrides.duration_minutes = allowed(parse_leading_int(&raw), &ALLOWED_DURATIONS);
            if overrides.duration_minutes.is_none() {
                tracing::debug!("ignoring shared duration '{}'", raw);
            }
        }

        if let Some(raw) = self.first("f") {
            overrides.frequency = raw.parse::<Frequency>().ok();
            if overrides.frequency.is_none() {
                tracing::debug!("ignoring shared frequency '{}'", raw);
            }
        }

        if let Some(raw) = self.first("p") {
            overrides.prep_minutes = allowed(parse_leading_int(&raw), &ALLOWED_PREP_MINUTES);
            if overrides.prep_minutes.is_none() {
                tracing::debug!("ignoring shared prep time '{}'", raw);
            }
        }

        overrides
    }

    /// The full parameter set this link describes, defaults filling the gaps.
    pub fn parameters(&self) -> Result<MeetingParameters> {
        self.decode().resolve()
    }
}

impl ParameterSource for SharedLink {
    fn source_name(&self) -> &str {
        "share link"
    }

    fn overrides(&self) -> Result<ParameterOverrides> {
        Ok(self.decode())
    }
}

fn nonzero_or(parsed: Option<i64>, default: u32) -> i64 {
    match parsed {
        Some(n) if n != 0 => n,
        _ => i64::from(default),
    }
}

fn clamp_u32(value: i64, min: u32, max: u32) -> u32 {
    // Bounded by `max`, so the narrowing is lossless.
    clamp(value, i64::from(min), i64::from(max)) as u32
}

fn allowed(parsed: Option<i64>, options: &[u32]) -> Option<u32> {
    let value = u32::try_from(parsed?).ok()?;
    options.contains(&value).then_some(value)
}

/// Leading-integer parse in the manner of browser `parseInt`: leading
/// whitespace and a sign are accepted, trailing junk is ignored, a `0x`
/// prefix switches to hex, and out-of-range magnitudes saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
