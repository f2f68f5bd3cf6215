//! Channel 3/4 input source selection.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An analog input source that can feed mixer channels 3/4.
///
/// The discriminant of each variant is the byte the mixer expects in the
/// control request payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Source {
    /// MIC 3/4 (the mixer's power-on default)
    #[default]
    Mic34 = 0,
    /// STEREO 5/6
    Stereo56 = 1,
    /// STEREO 7/8
    Stereo78 = 2,
    /// MAIN L/R
    MainLR = 3,
}

impl Source {
    /// All selectable sources, in wire-code order.
    pub const ALL: [Source; 4] =
        [Source::Mic34, Source::Stereo56, Source::Stereo78, Source::MainLR];

    /// The byte written into the control request payload.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The command-line token for this source.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Source::Mic34 => "34",
            Source::Stereo56 => "56",
            Source::Stereo78 => "78",
            Source::MainLR => "LR",
        }
    }
}

impl FromStr for Source {
    type Err = Error;

    /// Parse a command-line token. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "34" => Ok(Source::Mic34),
            "56" => Ok(Source::Stereo56),
            "78" => Ok(Source::Stereo78),
            "LR" => Ok(Source::MainLR),
            other => Err(Error::InvalidSource(other.to_string())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_token_code_mapping() {
        assert_eq!("34".parse::<Source>().unwrap().code(), 0);
        assert_eq!("56".parse::<Source>().unwrap().code(), 1);
        assert_eq!("78".parse::<Source>().unwrap().code(), 2);
        assert_eq!("LR".parse::<Source>().unwrap().code(), 3);
    }

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<u8> = Source::ALL.iter().map(|s| s.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Source::ALL.len());
    }

    #[test]
    fn test_default_is_mic34() {
        assert_eq!(Source::default(), Source::Mic34);
        assert_eq!(Source::default(), "34".parse().unwrap());
    }

    #[test]
    fn test_invalid_tokens_rejected() {
        for token in ["99", "lr", "Lr", "", "34 ", " 34", "3456"] {
            assert_matches!(
                token.parse::<Source>(),
                Err(Error::InvalidSource(t)) if t == token
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for source in Source::ALL {
            assert_eq!(source.to_string().parse::<Source>().unwrap(), source);
        }
    }
}
