//! Script gate.
//!
//! A record enters the pipeline only if its content contains at least one
//! codepoint of the target script. This is the whole of language
//! identification here; anything smarter is out of scope.
use unicode_script::{Script, UnicodeScript};

use super::Filter;

/// Detects content written (at least partly) in a target script.
pub struct TargetScript {
    script: Script,
}

impl TargetScript {
    /// Gate on a custom script.
    pub fn new(script: Script) -> Self {
        Self { script }
    }

    /// Get the gate's target script.
    pub fn script(&self) -> Script {
        self.script
    }
}

impl Filter<&str> for TargetScript {
    fn detect(&self, content: &str) -> bool {
        content.chars().any(|c| c.script() == self.script)
    }
}

impl Default for TargetScript {
    /// Default target script is Malayalam.
    fn default() -> Self {
        Self {
            script: Script::Malayalam,
        }
    }
}
