//! Sentiment label to display configuration.

use ratatui::style::Color;

use crate::ui::theme::{
    BLUE_200, BLUE_50, BLUE_500, BLUE_600, EMERALD_50, GRAY_200, GRAY_50, GRAY_500, GRAY_600,
    GREEN_200, GREEN_50, GREEN_500, GREEN_600, RED_200, RED_50, RED_500, RED_600, ROSE_50,
    SKY_50, SLATE_50,
};

/// Normalized sentiment vocabulary. Anything the server sends outside
/// `positive`/`negative`/`neutral` is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Sentiment {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::to_lowercase).as_deref() {
            Some("positive") => Self::Positive,
            Some("negative") => Self::Negative,
            Some("neutral") => Self::Neutral,
            _ => Self::Unknown,
        }
    }

    pub fn presentation(self) -> SentimentPresentation {
        match self {
            Self::Positive => SentimentPresentation {
                color: GREEN_600,
                background: GREEN_50,
                border: GREEN_200,
                icon: SentimentIcon::Smile,
                icon_color: GREEN_500,
                gradient: (GREEN_50, EMERALD_50),
            },
            Self::Negative => SentimentPresentation {
                color: RED_600,
                background: RED_50,
                border: RED_200,
                icon: SentimentIcon::Frown,
                icon_color: RED_500,
                gradient: (RED_50, ROSE_50),
            },
            Self::Neutral => SentimentPresentation {
                color: BLUE_600,
                background: BLUE_50,
                border: BLUE_200,
                icon: SentimentIcon::Meh,
                icon_color: BLUE_500,
                gradient: (BLUE_50, SKY_50),
            },
            Self::Unknown => SentimentPresentation {
                color: GRAY_600,
                background: GRAY_50,
                border: GRAY_200,
                icon: SentimentIcon::Meh,
                icon_color: GRAY_500,
                gradient: (GRAY_50, SLATE_50),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentIcon {
    Smile,
    Frown,
    Meh,
}

impl SentimentIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Smile => "🙂",
            Self::Frown => "🙁",
            Self::Meh => "😐",
        }
    }
}

/// Colors and icon used to paint a result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentPresentation {
    /// Label text.
    pub color: Color,
    /// Label and sentiment section fill.
    pub background: Color,
    pub border: Color,
    pub icon: SentimentIcon,
    pub icon_color: Color,
    /// Card fill, top to bottom.
    pub gradient: (Color, Color),
}

/// Case-insensitive lookup with a grey fallback for anything unrecognized.
pub fn map_sentiment(label: Option<&str>) -> SentimentPresentation {
    Sentiment::from_label(label).presentation()
}
