use iced::Color;

/// Accent for headings
pub const ACCENT: Color = Color::from_rgb(0.80, 0.45, 0.85);

/// Warning lines and failure panel
pub const WARNING: Color = Color::from_rgb(0.94, 0.36, 0.36);

/// Secondary text (subtitles, hints)
pub const MUTED: Color = Color::from_rgb(0.62, 0.64, 0.70);
