use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator telling the backend which payload variant is present and
/// how to route it. The wire form is the uppercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputMode {
    Text,
    Image,
    Audio,
    Video,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Text => "TEXT",
            InputMode::Image => "IMAGE",
            InputMode::Audio => "AUDIO",
            InputMode::Video => "VIDEO",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
