use alloc::{format, string::String};
use core::fmt;

use crate::{Error, Result};

/// A name usable as a C/C++ identifier: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Generated arrays are called `<name>_data`, color descriptors `<name>_buffer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: &str) -> Result<Self> {
        if !is_valid(name) {
            return Err(Error::InvalidIdentifier);
        }
        Ok(Self(String::from(name)))
    }

    /// Replaces every character that cannot appear in an identifier with `_`.
    /// A leading digit or an empty name gets a `_` prefix.
    pub fn sanitized(name: &str) -> Self {
        let mut ident = String::with_capacity(name.len() + 1);
        if name.chars().next().is_none_or(|c| c.is_ascii_digit()) {
            ident.push('_');
        }
        ident.extend(name.chars().map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }
        }));
        Self(ident)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn array_name(&self) -> String {
        format!("{}_data", self.0)
    }

    pub fn descriptor_name(&self) -> String {
        format!("{}_buffer", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_valid(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
