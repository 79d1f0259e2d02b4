use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::palette;
use crate::pen::PenSize;

/// User choices restored between runs. The canvas itself is never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub language: Language,
    pub pen_size: PenSize,
    /// Index into the palette; `None` means the default black pen
    pub color_index: Option<usize>,
}

impl Settings {
    /// Drop values that no longer make sense, e.g. a palette index past the end
    pub fn sanitized(mut self) -> Self {
        if self.color_index.is_some_and(|i| i >= palette::PALETTE.len()) {
            log::warn!("Ignoring stored color index {:?}", self.color_index);
            self.color_index = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "language": "Polish" }"#).unwrap();
        assert_eq!(settings.language, Language::Polish);
        assert_eq!(settings.pen_size, PenSize::Medium);
        assert_eq!(settings.color_index, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{ "pen_size": "Large", "zoom": 3 }"#).unwrap();
        assert_eq!(settings.pen_size, PenSize::Large);
    }

    #[test]
    fn test_sanitize_out_of_range_color() {
        let settings = Settings {
            color_index: Some(palette::PALETTE.len()),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.color_index, None);
    }
}
