use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::portfolio::Profile;

pub const BRIEF_MIME: &str = "text/plain;charset=utf-8";
pub const MAILTO_SUBJECT: &str = "Opportunity";

/// Recruiter's quick score for the candidate, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 80;

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Parse a value coming from the range control.
    pub fn parse(input: &str) -> Result<Self, ScoreError> {
        let input = input.trim();
        if let Ok(v) = input.parse::<i64>() {
            return Ok(Self::clamped(v));
        }
        match input.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Self::clamped(v.round() as i64)),
            _ => Err(ScoreError::NotANumber(input.to_string())),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ScoreError::OutOfRange(value))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score is not a number: {0:?}")]
    NotANumber(String),
    #[error("score {0} is outside 0..=100")]
    OutOfRange(i64),
}

/// The plain-text summary a recruiter can download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brief<'a> {
    pub profile: &'a Profile,
    pub score: Score,
}

impl<'a> Brief<'a> {
    pub fn new(profile: &'a Profile, score: Score) -> Self {
        Self { profile, score }
    }

    pub fn render(&self) -> String {
        let p = self.profile;
        format!(
            "Candidate: {}\nRole: {}\nScore: {}\nEmail: {}\nLinkedIn: {}",
            p.name, p.title, self.score, p.email, p.linkedin
        )
    }

    pub fn file_name(&self) -> String {
        format!("{}_brief.txt", self.profile.name.replace(' ', "_"))
    }
}

pub fn mailto_link(profile: &Profile) -> String {
    format!("mailto:{}?subject={}", profile.email, MAILTO_SUBJECT)
}
