use std::str::FromStr;

use crate::error::TraceError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraceFormat {
    /// Single-channel binary `.osi`.
    #[default]
    Binary,
    /// Multi-channel MCAP container `.mcap`.
    Container,
    /// Protobuf text format `.txth`.
    Text,
}

impl TraceFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TraceFormat::Binary => "osi",
            TraceFormat::Container => "mcap",
            TraceFormat::Text => "txth",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            TraceFormat::Binary => ".osi",
            TraceFormat::Container => ".mcap",
            TraceFormat::Text => ".txth",
        }
    }

    /// Case-insensitive, one leading dot is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('.').unwrap_or(s);
        match s.to_ascii_lowercase().as_str() {
            "osi" => Some(TraceFormat::Binary),
            "mcap" => Some(TraceFormat::Container),
            "txth" => Some(TraceFormat::Text),
            _ => None,
        }
    }

    /// Only the container format declares named channels.
    pub fn supports_channels(self) -> bool {
        matches!(self, TraceFormat::Container)
    }
}

impl FromStr for TraceFormat {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraceFormat::parse(s).ok_or_else(|| TraceError::UnsupportedFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tags_ignore_case_and_leading_dot() {
        for tag in ["osi", "OSI", ".osi", ".Osi"] {
            assert_eq!(TraceFormat::parse(tag), Some(TraceFormat::Binary), "{tag}");
        }
        assert_eq!(TraceFormat::parse(".MCAP"), Some(TraceFormat::Container));
        assert_eq!(TraceFormat::parse("txth"), Some(TraceFormat::Text));
    }

    #[test]
    fn unknown_format_tags_are_rejected() {
        assert_eq!(TraceFormat::parse("xyz"), None);
        assert_eq!(TraceFormat::parse("..osi"), None);
        assert_eq!(TraceFormat::parse(""), None);
        let err = "xyz".parse::<TraceFormat>().unwrap_err();
        assert!(matches!(err, TraceError::UnsupportedFormat(ref t) if t == "xyz"));
    }

    #[test]
    fn extension_matches_tag() {
        for f in [TraceFormat::Binary, TraceFormat::Container, TraceFormat::Text] {
            assert_eq!(f.extension(), format!(".{}", f.as_str()));
            assert_eq!(TraceFormat::parse(f.extension()), Some(f));
        }
    }
}
