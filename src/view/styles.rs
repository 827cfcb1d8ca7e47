//! Color configuration and the card palette.

use ratatui::style::{Color, Modifier, Style};

use crate::model::{ItemKind, ItemStatus};
use crate::state::SlideClass;

// ===== ColorConfig =====

/// Whether color output is enabled.
///
/// Priority (first match wins): `--no-color` flag, `NO_COLOR` env var,
/// default on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for catalog rendering. All lookups collapse to the default
/// style when colors are disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    colors: ColorConfig,
}

impl Palette {
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn styled(self, style: Style) -> Style {
        if self.colors.colors_enabled() {
            style
        } else {
            Style::default()
        }
    }

    pub fn genre_title(self) -> Style {
        self.styled(Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD))
    }

    pub fn selected_marker(self) -> Style {
        self.styled(Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    }

    pub fn card_title(self) -> Style {
        self.styled(Style::new().fg(Color::White))
    }

    pub fn card_meta(self) -> Style {
        self.styled(Style::new().fg(Color::DarkGray))
    }

    pub fn kind_tag(self, kind: ItemKind) -> Style {
        let color = match kind {
            ItemKind::Manga => Color::Cyan,
            ItemKind::Manhwa => Color::Green,
            ItemKind::Anime => Color::LightRed,
        };
        self.styled(Style::new().fg(color))
    }

    pub fn status_tag(self, status: ItemStatus) -> Style {
        let color = match status {
            ItemStatus::Ongoing => Color::Green,
            ItemStatus::Completed => Color::Blue,
            ItemStatus::Paused => Color::Yellow,
        };
        self.styled(Style::new().fg(color))
    }

    pub fn page_indicator(self) -> Style {
        self.styled(Style::new().fg(Color::DarkGray))
    }

    pub fn active_page(self) -> Style {
        self.styled(Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    }

    /// Background style while the search overlay is open.
    pub fn dimmed(self) -> Style {
        self.styled(Style::new().add_modifier(Modifier::DIM))
    }

    /// Transition styling: the exit phase dims the row, the enter phase
    /// brightens it.
    pub fn slide(self, class: SlideClass) -> Style {
        let style = match class {
            SlideClass::ExitLeft | SlideClass::ExitRight => {
                Style::new().add_modifier(Modifier::DIM)
            }
            SlideClass::EnterFromRight | SlideClass::EnterFromLeft => {
                Style::new().add_modifier(Modifier::BOLD)
            }
        };
        self.styled(style)
    }
}
