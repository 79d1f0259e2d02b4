use std::path::PathBuf;

use crate::i18n::Language;
use crate::pen::PenSize;
use crate::tools::ToolKind;

/// Actions triggered from the toolbar and the color panel
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Toggle a drawing tool on or off
    ToggleTool(ToolKind),
    SetPenSize(PenSize),
    /// Pick the palette entry at this index as the pen color
    SelectColor(usize),
    /// Replace the canvas with a blank one
    ClearCanvas,
    SetLanguage(Language),
    /// Encode the canvas as BMP at this path
    SaveTo(PathBuf),
    /// Replace the canvas with the image at this path
    LoadFrom(PathBuf),
}

impl Command {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::ToggleTool(_) => "ToggleTool",
            Command::SetPenSize(_) => "SetPenSize",
            Command::SelectColor(_) => "SelectColor",
            Command::ClearCanvas => "ClearCanvas",
            Command::SetLanguage(_) => "SetLanguage",
            Command::SaveTo(_) => "SaveTo",
            Command::LoadFrom(_) => "LoadFrom",
        }
    }
}
