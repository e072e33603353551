use serde::{Deserialize, Serialize};

/// A slot in the document theme's color scheme (`ST_SchemeColorVal`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemeColor {
    Background1,
    Text1,
    Background2,
    Text2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
    /// Placeholder color (`phClr`) substituted from the referencing style.
    Style,
    Dark1,
    Light1,
    Dark2,
    Light2,
}

const SCHEME_TOKENS: [(SchemeColor, &str); 17] = [
    (SchemeColor::Background1, "bg1"),
    (SchemeColor::Text1, "tx1"),
    (SchemeColor::Background2, "bg2"),
    (SchemeColor::Text2, "tx2"),
    (SchemeColor::Accent1, "accent1"),
    (SchemeColor::Accent2, "accent2"),
    (SchemeColor::Accent3, "accent3"),
    (SchemeColor::Accent4, "accent4"),
    (SchemeColor::Accent5, "accent5"),
    (SchemeColor::Accent6, "accent6"),
    (SchemeColor::Hyperlink, "hlink"),
    (SchemeColor::FollowedHyperlink, "folHlink"),
    (SchemeColor::Style, "phClr"),
    (SchemeColor::Dark1, "dk1"),
    (SchemeColor::Light1, "lt1"),
    (SchemeColor::Dark2, "dk2"),
    (SchemeColor::Light2, "lt2"),
];

/// SpreadsheetML `theme="N"` indices. Only these slots have one.
const THEME_INDICES: [(SchemeColor, u32); 12] = [
    (SchemeColor::Dark1, 0),
    (SchemeColor::Light1, 1),
    (SchemeColor::Dark2, 2),
    (SchemeColor::Light2, 3),
    (SchemeColor::Accent1, 4),
    (SchemeColor::Accent2, 5),
    (SchemeColor::Accent3, 6),
    (SchemeColor::Accent4, 7),
    (SchemeColor::Accent5, 8),
    (SchemeColor::Accent6, 9),
    (SchemeColor::Hyperlink, 10),
    (SchemeColor::FollowedHyperlink, 11),
];

impl SchemeColor {
    pub const ALL: [SchemeColor; 17] = [
        SchemeColor::Background1,
        SchemeColor::Text1,
        SchemeColor::Background2,
        SchemeColor::Text2,
        SchemeColor::Accent1,
        SchemeColor::Accent2,
        SchemeColor::Accent3,
        SchemeColor::Accent4,
        SchemeColor::Accent5,
        SchemeColor::Accent6,
        SchemeColor::Hyperlink,
        SchemeColor::FollowedHyperlink,
        SchemeColor::Style,
        SchemeColor::Dark1,
        SchemeColor::Light1,
        SchemeColor::Dark2,
        SchemeColor::Light2,
    ];

    pub fn to_token(self) -> &'static str {
        SCHEME_TOKENS
            .iter()
            .find(|(slot, _)| *slot == self)
            .map(|(_, token)| *token)
            .unwrap_or("phClr")
    }

    /// Case-sensitive lookup of an XML token (`"accent1"`, `"folHlink"`, ...).
    pub fn from_token(token: &str) -> Option<Self> {
        SCHEME_TOKENS
            .iter()
            .find(|(_, t)| *t == token)
            .map(|(slot, _)| *slot)
    }

    /// The SpreadsheetML `theme` attribute for this slot, if it has one.
    pub fn theme_index(self) -> Option<u32> {
        THEME_INDICES
            .iter()
            .find(|(slot, _)| *slot == self)
            .map(|(_, idx)| *idx)
    }

    pub fn from_theme_index(idx: u32) -> Option<Self> {
        THEME_INDICES
            .iter()
            .find(|(_, i)| *i == idx)
            .map(|(slot, _)| *slot)
    }

    /// The concrete theme slot this alias refers to (`bg1` is `lt1`, `tx1` is `dk1`, ...).
    ///
    /// `Style` has no concrete slot; it is substituted by the referencing style.
    pub fn canonical(self) -> Option<Self> {
        match self {
            SchemeColor::Background1 => Some(SchemeColor::Light1),
            SchemeColor::Text1 => Some(SchemeColor::Dark1),
            SchemeColor::Background2 => Some(SchemeColor::Light2),
            SchemeColor::Text2 => Some(SchemeColor::Dark2),
            SchemeColor::Style => None,
            other => Some(other),
        }
    }
}
