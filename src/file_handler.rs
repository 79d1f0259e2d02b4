use std::path::PathBuf;

use crate::i18n::{Label, Language};

/// Extensions the open dialog offers; anything the image crate decodes works
pub const LOADABLE_EXTENSIONS: &[&str] = &["bmp", "png", "jpg", "jpeg", "gif"];

pub const DEFAULT_FILE_NAME: &str = "image.bmp";

/// Native file dialogs. `None` means the user cancelled.
pub struct FileHandler;

impl FileHandler {
    pub fn pick_save_path(language: Language) -> Option<PathBuf> {
        let path = rfd::FileDialog::new()
            .set_title(language.tr(Label::SaveDialogTitle))
            .set_file_name(DEFAULT_FILE_NAME)
            .add_filter(language.tr(Label::BitmapFilter), &["bmp"])
            .save_file();
        if path.is_none() {
            log::debug!("Save dialog cancelled");
        }
        path
    }

    pub fn pick_load_path(language: Language) -> Option<PathBuf> {
        let path = rfd::FileDialog::new()
            .set_title(language.tr(Label::LoadDialogTitle))
            .add_filter(language.tr(Label::ImageFilter), LOADABLE_EXTENSIONS)
            .pick_file();
        if path.is_none() {
            log::debug!("Load dialog cancelled");
        }
        path
    }
}
