//! `preserveAspectRatio` values.
//!
//! Only the value object lives here. Mapping a viewBox into a viewport with it
//! is the renderer's job: `Meet` scales uniformly until the content fits
//! inside the viewport, `Slice` until it covers it, and the alignment decides
//! where the leftover space (or overflow) goes.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SvgError};
use crate::parser::Scanner;

/// Alignment of the viewBox inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Scale non-uniformly to fill the viewport exactly.
    None,
    XMinYMin,
    XMidYMin,
    XMaxYMin,
    XMinYMid,
    #[default]
    XMidYMid,
    XMaxYMid,
    XMinYMax,
    XMidYMax,
    XMaxYMax,
}

impl Align {
    pub fn keyword(&self) -> &'static str {
        match self {
            Align::None => "none",
            Align::XMinYMin => "xMinYMin",
            Align::XMidYMin => "xMidYMin",
            Align::XMaxYMin => "xMaxYMin",
            Align::XMinYMid => "xMinYMid",
            Align::XMidYMid => "xMidYMid",
            Align::XMaxYMid => "xMaxYMid",
            Align::XMinYMax => "xMinYMax",
            Align::XMidYMax => "xMidYMax",
            Align::XMaxYMax => "xMaxYMax",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "none" => Align::None,
            "xMinYMin" => Align::XMinYMin,
            "xMidYMin" => Align::XMidYMin,
            "xMaxYMin" => Align::XMaxYMin,
            "xMinYMid" => Align::XMinYMid,
            "xMidYMid" => Align::XMidYMid,
            "xMaxYMid" => Align::XMaxYMid,
            "xMinYMax" => Align::XMinYMax,
            "xMidYMax" => Align::XMidYMax,
            "xMaxYMax" => Align::XMaxYMax,
            _ => return None,
        })
    }
}

/// Whether the viewBox fits inside (`Meet`) or covers (`Slice`) the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeetOrSlice {
    #[default]
    Meet,
    Slice,
}

impl MeetOrSlice {
    pub fn keyword(&self) -> &'static str {
        match self {
            MeetOrSlice::Meet => "meet",
            MeetOrSlice::Slice => "slice",
        }
    }
}

/// A `preserveAspectRatio` value. Defaults to `xMidYMid meet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AspectRatioSpec {
    align: Align,
    meet_or_slice: MeetOrSlice,
}

impl AspectRatioSpec {
    pub fn new(align: Align, meet_or_slice: MeetOrSlice) -> Self {
        Self {
            align,
            meet_or_slice,
        }
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    pub fn meet_or_slice(&self) -> MeetOrSlice {
        self.meet_or_slice
    }

    pub fn set_meet_or_slice(&mut self, meet_or_slice: MeetOrSlice) {
        self.meet_or_slice = meet_or_slice;
    }
}

impl FromStr for AspectRatioSpec {
    type Err = SvgError;

    /// Parse `<align> [meet | slice]`.
    fn from_str(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s);
        scanner.skip_whitespace();

        let start = scanner.pos();
        let keyword = scanner.identifier();
        let align = Align::from_keyword(keyword)
            .ok_or_else(|| scanner.error_at(start, "expected alignment keyword"))?;

        scanner.skip_whitespace();
        let start = scanner.pos();
        let meet_or_slice = match scanner.identifier() {
            "" | "meet" => MeetOrSlice::Meet,
            "slice" => MeetOrSlice::Slice,
            _ => return Err(scanner.error_at(start, "expected 'meet' or 'slice'")),
        };

        scanner.skip_whitespace();
        if !scanner.is_at_end() {
            return Err(scanner.error("unexpected trailing content"));
        }

        Ok(Self::new(align, meet_or_slice))
    }
}

impl fmt::Display for AspectRatioSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.align.keyword(), self.meet_or_slice.keyword())
    }
}
