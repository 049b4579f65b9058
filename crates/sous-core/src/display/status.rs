//! Notice formatting.

use std::fmt;

use crate::notice::{Notice, NoticeLevel};

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            NoticeLevel::Info => "Info:",
            NoticeLevel::Success => "Success:",
            NoticeLevel::Error => "Error:",
        };
        write!(f, "{prefix} {}", self.title)?;
        if let Some(description) = &self.description {
            write!(f, " {description}")?;
        }
        writeln!(f)
    }
}
