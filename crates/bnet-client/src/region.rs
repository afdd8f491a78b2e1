//! Regions, locales and namespaces accepted by the Battle.net APIs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BnetError;

/// API region. Selects both the API host and the OAuth host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    #[default]
    Eu,
    Kr,
    Tw,
    Cn,
}

impl Region {
    pub const ALL: [Region; 5] = [Self::Us, Self::Eu, Self::Kr, Self::Tw, Self::Cn];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Kr => "kr",
            Self::Tw => "tw",
            Self::Cn => "cn",
        }
    }

    /// Host serving the game data and community endpoints.
    pub fn api_host(self) -> String {
        match self {
            Self::Cn => "gateway.battlenet.com.cn".into(),
            other => format!("{}.api.blizzard.com", other.as_str()),
        }
    }

    /// Host serving `/oauth/token`.
    pub fn oauth_host(self) -> String {
        match self {
            Self::Cn => "www.battlenet.com.cn".into(),
            other => format!("{}.battle.net", other.as_str()),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = BnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BnetError::Config(format!("unknown region: {s}")))
    }
}

/// Language tag for localized response text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "es_MX")]
    EsMx,
    #[serde(rename = "pt_BR")]
    PtBr,
    #[default]
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "pt_PT")]
    PtPt,
    #[serde(rename = "it_IT")]
    ItIt,
    #[serde(rename = "ko_KR")]
    KoKr,
    #[serde(rename = "zh_TW")]
    ZhTw,
    #[serde(rename = "zh_CN")]
    ZhCn,
}

impl Locale {
    pub const ALL: [Locale; 13] = [
        Self::EnUs,
        Self::EsMx,
        Self::PtBr,
        Self::EnGb,
        Self::EsEs,
        Self::FrFr,
        Self::RuRu,
        Self::DeDe,
        Self::PtPt,
        Self::ItIt,
        Self::KoKr,
        Self::ZhTw,
        Self::ZhCn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::EsMx => "es_MX",
            Self::PtBr => "pt_BR",
            Self::EnGb => "en_GB",
            Self::EsEs => "es_ES",
            Self::FrFr => "fr_FR",
            Self::RuRu => "ru_RU",
            Self::DeDe => "de_DE",
            Self::PtPt => "pt_PT",
            Self::ItIt => "it_IT",
            Self::KoKr => "ko_KR",
            Self::ZhTw => "zh_TW",
            Self::ZhCn => "zh_CN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = BnetError;

    /// Accepts both `en_GB` and `en-GB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| BnetError::Config(format!("unknown locale: {s}")))
    }
}

/// Data partition for the `/data/wow` game data endpoints.
///
/// The wire value is `{kind}-{region}`, e.g. `dynamic-eu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Static,
    Dynamic,
    Profile,
}

impl Namespace {
    pub fn for_region(self, region: Region) -> String {
        let kind = match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
            Self::Profile => "profile",
        };
        format!("{kind}-{region}")
    }
}

/// Numeric region id used in StarCraft II profile paths.
///
/// Korea and Taiwan share a region id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sc2Region {
    Us,
    Eu,
    KoreaTaiwan,
    China,
}

impl Sc2Region {
    pub fn id(self) -> u8 {
        match self {
            Self::Us => 1,
            Self::Eu => 2,
            Self::KoreaTaiwan => 3,
            Self::China => 5,
        }
    }
}

impl From<Region> for Sc2Region {
    fn from(region: Region) -> Self {
        match region {
            Region::Us => Self::Us,
            Region::Eu => Self::Eu,
            Region::Kr | Region::Tw => Self::KoreaTaiwan,
            Region::Cn => Self::China,
        }
    }
}
