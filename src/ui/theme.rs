use ratatui::style::Color;

// App chrome.
pub const ACCENT: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const INPUT_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_BUSY: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const SKELETON: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const SUMMARY_TEXT: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const SUMMARY_BACKGROUND: Color = Color::Rgb(0xfa, 0xf5, 0xff);
pub const TOAST_DESTRUCTIVE_BG: Color = Color::Rgb(0xdc, 0x26, 0x26);
pub const TOAST_INFO_BG: Color = Color::Rgb(0xf0, 0xfd, 0xf4);
pub const TOAST_INFO_TEXT: Color = Color::Rgb(0x14, 0x53, 0x2d);

// Sentiment palette.
pub const GREEN_50: Color = Color::Rgb(0xf0, 0xfd, 0xf4);
pub const GREEN_200: Color = Color::Rgb(0xbb, 0xf7, 0xd0);
pub const GREEN_500: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const GREEN_600: Color = Color::Rgb(0x16, 0xa3, 0x4a);
pub const EMERALD_50: Color = Color::Rgb(0xec, 0xfd, 0xf5);

pub const RED_50: Color = Color::Rgb(0xfe, 0xf2, 0xf2);
pub const RED_200: Color = Color::Rgb(0xfe, 0xca, 0xca);
pub const RED_500: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const RED_600: Color = Color::Rgb(0xdc, 0x26, 0x26);
pub const ROSE_50: Color = Color::Rgb(0xff, 0xf1, 0xf2);

pub const BLUE_50: Color = Color::Rgb(0xef, 0xf6, 0xff);
pub const BLUE_200: Color = Color::Rgb(0xbf, 0xdb, 0xfe);
pub const BLUE_500: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const BLUE_600: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const SKY_50: Color = Color::Rgb(0xf0, 0xf9, 0xff);

pub const GRAY_50: Color = Color::Rgb(0xf9, 0xfa, 0xfb);
pub const GRAY_200: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
pub const GRAY_500: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const GRAY_600: Color = Color::Rgb(0x4b, 0x55, 0x63);
pub const SLATE_50: Color = Color::Rgb(0xf8, 0xfa, 0xfc);
