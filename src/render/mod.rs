//! Page element sink
//!
//! The fetched KML text is written into one element of a page and the
//! element is then made visible. `RenderTarget` is the seam; `Document` is
//! the in-memory page the CLI and tests render into.

mod document;

pub use document::{Document, Element};

use std::fmt;
use std::str::FromStr;

use crate::errors::Result;

/// CSS-style display value of an element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Block,
    Inline,
    None,
    /// Any other display keyword, kept verbatim
    Other(String),
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block => write!(f, "block"),
            Self::Inline => write!(f, "inline"),
            Self::None => write!(f, "none"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err("Empty display value".to_string()),
            "block" => Ok(Self::Block),
            "inline" => Ok(Self::Inline),
            "none" => Ok(Self::None),
            _ => Ok(Self::Other(trimmed.to_string())),
        }
    }
}

/// Something that holds addressable elements
pub trait RenderTarget: Send + Sync {
    /// Replace the content of element `id`
    fn set_inner_html(&self, id: &str, html: &str) -> Result<()>;

    /// Change the display of element `id`
    fn set_display(&self, id: &str, display: Visibility) -> Result<()>;
}

/// Show or hide element `id`; `state` defaults to `Visibility::Block`
pub fn show_hide<T: RenderTarget + ?Sized>(
    target: &T,
    id: &str,
    state: Option<Visibility>,
) -> Result<()> {
    target.set_display(id, state.unwrap_or_default())
}
