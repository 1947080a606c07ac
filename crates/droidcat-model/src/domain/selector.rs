use std::fmt;

use serde::{Deserialize, Serialize};

/// Chooses the target when several devices are attached to `adb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceSelector {
    /// The single physical device connected over USB (`-d`).
    Device,
    /// The single running emulator (`-e`).
    Emulator,
}

impl DeviceSelector {
    /// Flag understood by `adb` for this target.
    pub const fn as_flag(&self) -> &'static str {
        match self {
            DeviceSelector::Device => "-d",
            DeviceSelector::Emulator => "-e",
        }
    }
}

impl fmt::Display for DeviceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}
