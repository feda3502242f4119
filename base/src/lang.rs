//! The fixed set of Wikipedia language editions the search is allowed to
//! cross into. Keeping this closed (rather than a bare `String`) means an
//! unrecognised code is rejected at the boundary -- the prober or the
//! façade -- instead of silently producing a node the wiki client can
//! never resolve.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLang {
    En,
    Ru,
    De,
    Fr,
    Es,
    It,
    Pt,
    Uk,
}

impl SupportedLang {
    pub const ALL: [SupportedLang; 8] = [
        SupportedLang::En,
        SupportedLang::Ru,
        SupportedLang::De,
        SupportedLang::Fr,
        SupportedLang::Es,
        SupportedLang::It,
        SupportedLang::Pt,
        SupportedLang::Uk,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Uk => "uk",
        }
    }

    /// Hub languages are favoured by the heuristic scorer (C3) because they
    /// carry disproportionately many interwiki connections.
    pub fn is_hub(&self) -> bool {
        matches!(self, Self::En | Self::Ru)
    }
}

impl fmt::Display for SupportedLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLang(pub String);

impl fmt::Display for UnsupportedLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language code: \"{}\"", self.0)
    }
}

impl std::error::Error for UnsupportedLang {}

impl FromStr for SupportedLang {
    type Err = UnsupportedLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            "de" => Ok(Self::De),
            "fr" => Ok(Self::Fr),
            "es" => Ok(Self::Es),
            "it" => Ok(Self::It),
            "pt" => Ok(Self::Pt),
            "uk" => Ok(Self::Uk),
            other => Err(UnsupportedLang(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_supported_code() {
        for lang in SupportedLang::ALL {
            let parsed: SupportedLang = lang.code().parse().unwrap();
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn rejects_unknown_code() {
        assert!("zz".parse::<SupportedLang>().is_err());
    }

    #[test]
    fn hub_languages_are_en_and_ru() {
        assert!(SupportedLang::En.is_hub());
        assert!(SupportedLang::Ru.is_hub());
        assert!(!SupportedLang::De.is_hub());
    }
}
