//! Product card color tags.

use serde::{Deserialize, Serialize};

/// Color tag applied to a product card in the storefront.
///
/// The frontend maps each tag to a CSS class; the server only persists the
/// tag. Missing or omitted values default to purple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductColor {
    #[default]
    Purple,
    Blue,
    Green,
    Pink,
    Orange,
    Red,
}

impl ProductColor {
    /// The tag as it appears on the wire and in the products file.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl core::fmt::Display for ProductColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
