//! Recording file name value object

use std::fmt;

use super::format::OutputFormat;

/// Name of a recording file, minus the unique part.
///
/// The full name is `<prefix><unique><suffix>`, where the prefix is the base
/// name, the optional session seed and the optional phone number, each
/// followed by `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFileName {
    prefix: String,
    suffix: &'static str,
}

impl RecordFileName {
    /// Build a file name from its parts.
    ///
    /// `seed` and `number` are left out when `None` or empty.
    pub fn new(
        base: &str,
        seed: Option<&str>,
        number: Option<&str>,
        format: OutputFormat,
    ) -> Self {
        let mut prefix = String::with_capacity(base.len() + 24);
        for part in [Some(base), seed, number].into_iter().flatten() {
            if part.is_empty() {
                continue;
            }
            prefix.push_str(part);
            prefix.push('_');
        }

        Self {
            prefix,
            suffix: format.file_suffix(),
        }
    }

    /// Everything before the unique part
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// File extension, including the dot
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Complete the name with a unique part
    pub fn with_unique(&self, unique: &str) -> String {
        format!("{}{}{}", self.prefix, unique, self.suffix)
    }
}

impl fmt::Display for RecordFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}
