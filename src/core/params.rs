use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::CapInsets;

/// Generation parameters suitable for config files and presets.
///
/// The CLI builds one of these from its flags and passes it into the
/// driver; there is no global argument state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenParams {
    /// Explicit cap insets in logical units; None runs detection per file
    pub insets: Option<CapInsets>,
    /// Directory receiving generated assets
    pub target_dir: PathBuf,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            insets: None,
            target_dir: PathBuf::from("."),
        }
    }
}
