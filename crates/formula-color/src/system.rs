use serde::{Deserialize, Serialize};

/// A platform UI color (`ST_SystemColorVal`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SystemColor {
    ScrollBar,
    Background,
    ActiveCaption,
    InactiveCaption,
    Menu,
    Window,
    WindowFrame,
    MenuText,
    WindowText,
    CaptionText,
    ActiveBorder,
    InactiveBorder,
    AppWorkspace,
    Highlight,
    HighlightText,
    ButtonFace,
    ButtonShadow,
    GrayText,
    ButtonText,
    InactiveCaptionText,
    ButtonHighlight,
    DarkShadow3d,
    Light3d,
    InfoText,
    InfoBackground,
    HotLight,
    GradientActiveCaption,
    GradientInactiveCaption,
    MenuHighlight,
    MenuBar,
}

/// `(slot, token, classic Windows default as 0xRRGGBB)`.
///
/// The defaults are only used when a document carries no `lastClr` snapshot.
const SYSTEM_TOKENS: [(SystemColor, &str, u32); 30] = [
    (SystemColor::ScrollBar, "scrollBar", 0xC8C8C8),
    (SystemColor::Background, "background", 0x000000),
    (SystemColor::ActiveCaption, "activeCaption", 0x99B4D1),
    (SystemColor::InactiveCaption, "inactiveCaption", 0xBFCDDB),
    (SystemColor::Menu, "menu", 0xF0F0F0),
    (SystemColor::Window, "window", 0xFFFFFF),
    (SystemColor::WindowFrame, "windowFrame", 0x646464),
    (SystemColor::MenuText, "menuText", 0x000000),
    (SystemColor::WindowText, "windowText", 0x000000),
    (SystemColor::CaptionText, "captionText", 0x000000),
    (SystemColor::ActiveBorder, "activeBorder", 0xB4B4B4),
    (SystemColor::InactiveBorder, "inactiveBorder", 0xF4F7FC),
    (SystemColor::AppWorkspace, "appWorkspace", 0xABABAB),
    (SystemColor::Highlight, "highlight", 0x3399FF),
    (SystemColor::HighlightText, "highlightText", 0xFFFFFF),
    (SystemColor::ButtonFace, "btnFace", 0xF0F0F0),
    (SystemColor::ButtonShadow, "btnShadow", 0xA0A0A0),
    (SystemColor::GrayText, "grayText", 0x6D6D6D),
    (SystemColor::ButtonText, "btnText", 0x000000),
    (SystemColor::InactiveCaptionText, "inactiveCaptionText", 0x434E54),
    (SystemColor::ButtonHighlight, "btnHighlight", 0xFFFFFF),
    (SystemColor::DarkShadow3d, "3dDkShadow", 0x696969),
    (SystemColor::Light3d, "3dLight", 0xE3E3E3),
    (SystemColor::InfoText, "infoText", 0x000000),
    (SystemColor::InfoBackground, "infoBk", 0xFFFFE1),
    (SystemColor::HotLight, "hotLight", 0x0066CC),
    (SystemColor::GradientActiveCaption, "gradientActiveCaption", 0xB9D1EA),
    (SystemColor::GradientInactiveCaption, "gradientInactiveCaption", 0xD7E4F2),
    (SystemColor::MenuHighlight, "menuHighlight", 0x3399FF),
    (SystemColor::MenuBar, "menuBar", 0xF0F0F0),
];

impl SystemColor {
    pub fn all() -> impl Iterator<Item = SystemColor> {
        SYSTEM_TOKENS.iter().map(|(slot, _, _)| *slot)
    }

    pub fn to_token(self) -> &'static str {
        self.entry().1
    }

    pub fn from_token(token: &str) -> Option<Self> {
        SYSTEM_TOKENS
            .iter()
            .find(|(_, t, _)| *t == token)
            .map(|(slot, _, _)| *slot)
    }

    /// Opaque `0xAARRGGBB` default used when no snapshot color is available.
    pub fn default_argb(self) -> u32 {
        0xFF00_0000 | self.entry().2
    }

    fn entry(self) -> &'static (SystemColor, &'static str, u32) {
        // The table is declared in enum order.
        &SYSTEM_TOKENS[self as usize]
    }
}
