//! Icon References
//!
//! Icons are opaque handles. The core only stores and passes them around;
//! turning a handle into a glyph is the job of whatever renders the view.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Opaque, named icon handle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(Cow<'static, str>);

impl IconRef {
    /// Handle for a statically known icon name
    pub const fn named(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<String> for IconRef {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&'static str> for IconRef {
    fn from(name: &'static str) -> Self {
        Self::named(name)
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can turn an icon handle into renderable output.
///
/// The frontend maps handles to icon font classes; other renderers may
/// produce markup or nothing at all.
pub trait IconResolver {
    type Output;

    fn resolve(&self, icon: &IconRef) -> Self::Output;
}
