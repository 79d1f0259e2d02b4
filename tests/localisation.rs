use mini_paint::{Command, Label, Language, PaintSession, PenSize, Settings, ToolKind};

#[test]
fn test_default_language_is_english() {
    let session = PaintSession::new(10, 10);
    assert_eq!(session.language(), Language::English);
    assert_eq!(session.language().tr(Label::Colors), "Colors");
}

#[test]
fn test_switching_language_keeps_user_choices() {
    let mut session = PaintSession::new(10, 10);
    session.execute(Command::ToggleTool(ToolKind::Ellipse)).unwrap();
    session.execute(Command::SetPenSize(PenSize::Large)).unwrap();
    session.execute(Command::SelectColor(3)).unwrap();

    session.execute(Command::SetLanguage(Language::Polish)).unwrap();

    assert_eq!(session.language(), Language::Polish);
    assert_eq!(session.active_tool(), Some(ToolKind::Ellipse));
    assert_eq!(session.pen_size(), PenSize::Large);
    assert_eq!(session.color_index(), Some(3));
    assert_eq!(session.language().tr(Label::Colors), "Kolory");
}

#[test]
fn test_settings_restore_session() {
    let settings = Settings {
        language: Language::Polish,
        pen_size: PenSize::Small,
        color_index: Some(7),
    };
    let session = PaintSession::with_settings(20, 20, settings.clone());
    assert_eq!(session.settings(), settings);
    assert_eq!(session.pen().width(), 1.0);
    assert_eq!(session.pen().color(), mini_paint::palette::PALETTE[7].color);
    assert_eq!(session.active_tool(), None);
}
