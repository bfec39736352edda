//! Known wrapping quirks of the rendering-engine families a text box has
//! to match.
//!
//! The rules are kept as a table: they were tuned against real engines and
//! are not meant to be generalized.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How leading whitespace of the text carried past a soft break is
/// handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftBreakTrim {
    /// Always strip leading whitespace.
    Always,
    /// Strip only when the previous line's text ended with whitespace.
    AfterWhitespace,
    /// Keep the whitespace.
    Never,
}

impl SoftBreakTrim {
    /// Whether the carried remainder should be trimmed, given the text of
    /// the previous line.
    pub fn applies(self, previous_line: &str) -> bool {
        match self {
            SoftBreakTrim::Always => true,
            SoftBreakTrim::AfterWhitespace => previous_line
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace),
            SoftBreakTrim::Never => false,
        }
    }
}

/// Rendering-engine family whose line layout a surface reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuirkProfile {
    #[default]
    Gecko,
    Blink,
    WebKit,
    EdgeHtml,
}

impl QuirkProfile {
    pub const ALL: [QuirkProfile; 4] = [
        QuirkProfile::Gecko,
        QuirkProfile::Blink,
        QuirkProfile::WebKit,
        QuirkProfile::EdgeHtml,
    ];

    pub fn soft_break_trim(self) -> SoftBreakTrim {
        match self {
            QuirkProfile::Gecko => SoftBreakTrim::Always,
            QuirkProfile::Blink | QuirkProfile::WebKit => SoftBreakTrim::AfterWhitespace,
            QuirkProfile::EdgeHtml => SoftBreakTrim::Never,
        }
    }

    /// Move to the next hard line as soon as the current one has no text
    /// left, instead of waiting for a probe miss.
    pub fn advance_on_exhausted_line(self) -> bool {
        matches!(self, QuirkProfile::Gecko | QuirkProfile::EdgeHtml)
    }

    /// The layout reports a zero-width rect for each line break.
    pub fn emits_break_rects(self) -> bool {
        matches!(self, QuirkProfile::Blink | QuirkProfile::WebKit)
    }

    /// Whitespace before a soft break is part of the line rect.
    pub fn rect_covers_trailing_whitespace(self) -> bool {
        !matches!(self, QuirkProfile::Gecko)
    }

    /// Rendered lines need an explicit `pre-wrap` white-space style.
    pub fn pre_wrap_text_style(self) -> bool {
        matches!(self, QuirkProfile::EdgeHtml)
    }

    /// The glyph baseline used to place the editor overlay is rounded to
    /// whole pixels.
    pub fn rounds_text_baseline(self) -> bool {
        !matches!(self, QuirkProfile::Gecko)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuirkProfile::Gecko => "gecko",
            QuirkProfile::Blink => "blink",
            QuirkProfile::WebKit => "webkit",
            QuirkProfile::EdgeHtml => "edgehtml",
        }
    }
}

impl fmt::Display for QuirkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown quirk profile {0:?} (expected gecko, blink, webkit or edgehtml)")]
pub struct ParseQuirkError(pub String);

impl FromStr for QuirkProfile {
    type Err = ParseQuirkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gecko" | "firefox" => Ok(QuirkProfile::Gecko),
            "blink" | "chrome" => Ok(QuirkProfile::Blink),
            "webkit" | "safari" => Ok(QuirkProfile::WebKit),
            "edgehtml" | "edge" | "msie" => Ok(QuirkProfile::EdgeHtml),
            _ => Err(ParseQuirkError(s.to_string())),
        }
    }
}
