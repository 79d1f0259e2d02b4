use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// User interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Polish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Polish];

    /// Locale code used to look up translations
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Polish => "pl",
        }
    }

    /// Label naming this language on its toolbar button
    pub fn label(self) -> Label {
        match self {
            Language::English => Label::English,
            Language::Polish => Label::Polish,
        }
    }

    /// Short text shown on the language button
    pub fn badge(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Polish => "PL",
        }
    }

    pub fn tr(self, label: Label) -> String {
        label.text(self)
    }

    pub fn save_failed(self, err: &str) -> String {
        t!("error.save_failed", locale = self.code(), err = err).into_owned()
    }

    pub fn load_failed(self, err: &str) -> String {
        t!("error.load_failed", locale = self.code(), err = err).into_owned()
    }
}

/// Every static piece of user-visible text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    AppTitle,
    File,
    Save,
    Load,
    Tools,
    Brush,
    Rectangle,
    Ellipse,
    Clear,
    Size,
    Color,
    Language,
    English,
    Polish,
    SizeSmall,
    SizeMedium,
    SizeLarge,
    Colors,
    SaveDialogTitle,
    LoadDialogTitle,
    BitmapFilter,
    ImageFilter,
    ErrorTitle,
    ErrorIo,
    ErrorCodec,
    ErrorEmpty,
    Dismiss,
}

impl Label {
    pub const ALL: [Label; 27] = [
        Label::AppTitle,
        Label::File,
        Label::Save,
        Label::Load,
        Label::Tools,
        Label::Brush,
        Label::Rectangle,
        Label::Ellipse,
        Label::Clear,
        Label::Size,
        Label::Color,
        Label::Language,
        Label::English,
        Label::Polish,
        Label::SizeSmall,
        Label::SizeMedium,
        Label::SizeLarge,
        Label::Colors,
        Label::SaveDialogTitle,
        Label::LoadDialogTitle,
        Label::BitmapFilter,
        Label::ImageFilter,
        Label::ErrorTitle,
        Label::ErrorIo,
        Label::ErrorCodec,
        Label::ErrorEmpty,
        Label::Dismiss,
    ];

    /// Translation key in the locale files
    pub fn key(self) -> &'static str {
        match self {
            Label::AppTitle => "app.title",
            Label::File => "toolbar.file",
            Label::Save => "toolbar.save",
            Label::Load => "toolbar.load",
            Label::Tools => "toolbar.tools",
            Label::Brush => "toolbar.brush",
            Label::Rectangle => "toolbar.rectangle",
            Label::Ellipse => "toolbar.ellipse",
            Label::Clear => "toolbar.clear",
            Label::Size => "toolbar.size",
            Label::Color => "toolbar.color",
            Label::Language => "toolbar.language",
            Label::English => "toolbar.english",
            Label::Polish => "toolbar.polish",
            Label::SizeSmall => "size.small",
            Label::SizeMedium => "size.medium",
            Label::SizeLarge => "size.large",
            Label::Colors => "panel.colors",
            Label::SaveDialogTitle => "dialog.save_title",
            Label::LoadDialogTitle => "dialog.load_title",
            Label::BitmapFilter => "dialog.bitmap_filter",
            Label::ImageFilter => "dialog.image_filter",
            Label::ErrorTitle => "error.title",
            Label::ErrorIo => "error.io",
            Label::ErrorCodec => "error.codec",
            Label::ErrorEmpty => "error.empty",
            Label::Dismiss => "error.dismiss",
        }
    }

    pub fn text(self, language: Language) -> String {
        let key = self.key();
        t!(key, locale = language.code()).into_owned()
    }
}
