// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the lwcsearch CLI.
//!
//! Everything is built as strings through a [`Painter`], which knows whether
//! colors are on and which palette to use, and a [`Panel`], which frames
//! lines in a box. Nothing here prints; `main` decides where output goes.
//!
//! Colors are off when `NO_COLOR` is set or stdout is not a terminal. The
//! palette is One Dark unless `LWCSEARCH_THEME=light` or a light `COLORFGBG`
//! background says otherwise.

use lwcsearch::Highlighter;

/// Visible width between the panel borders.
pub const PANEL_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";

// ═══════════════════════════════════════════════════════════════════════════
// THEMES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn detect() -> Self {
        Self::from_hints(
            std::env::var("LWCSEARCH_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    }

    /// `COLORFGBG` is "fg;bg"; background 7 or 15 means a light terminal.
    fn from_hints(explicit: Option<&str>, colorfgbg: Option<&str>) -> Self {
        match explicit.map(str::to_ascii_lowercase).as_deref() {
            Some("light") => return Theme::Light,
            Some("dark") => return Theme::Dark,
            _ => {}
        }

        let background = colorfgbg
            .and_then(|hint| hint.rsplit(';').next())
            .and_then(|bg| bg.parse::<u8>().ok());
        match background {
            Some(7 | 15) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &ONE_DARK,
            Theme::Light => &ONE_LIGHT,
        }
    }
}

/// What a piece of output is, which decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Frame,
    Heading,
    Title,
    Tag,
    Muted,
    Match,
    StrongScore,
    Score,
    WeakScore,
}

type Rgb = (u8, u8, u8);

#[derive(Debug)]
struct Palette {
    frame: Rgb,
    heading: Rgb,
    title: Rgb,
    tag: Rgb,
    muted: Rgb,
    matched: Rgb,
    strong: Rgb,
    score: Rgb,
    weak: Rgb,
}

const ONE_DARK: Palette = Palette {
    frame: (92, 99, 112),
    heading: (86, 182, 194),
    title: (102, 217, 239),
    tag: (97, 175, 239),
    muted: (92, 99, 112),
    matched: (255, 215, 0),
    strong: (166, 226, 46),
    score: (152, 195, 121),
    weak: (229, 192, 123),
};

const ONE_LIGHT: Palette = Palette {
    frame: (160, 161, 167),
    heading: (1, 132, 188),
    title: (1, 112, 158),
    tag: (64, 120, 242),
    muted: (160, 161, 167),
    matched: (152, 104, 1),
    strong: (68, 140, 39),
    score: (80, 161, 79),
    weak: (193, 132, 1),
};

impl Palette {
    fn color(&self, role: Role) -> Rgb {
        match role {
            Role::Frame => self.frame,
            Role::Heading => self.heading,
            Role::Title => self.title,
            Role::Tag => self.tag,
            Role::Muted => self.muted,
            Role::Match => self.matched,
            Role::StrongScore => self.strong,
            Role::Score => self.score,
            Role::WeakScore => self.weak,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PAINTER
// ═══════════════════════════════════════════════════════════════════════════

/// Styling for one run of the CLI. `None` means plain text.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    palette: Option<&'static Palette>,
}

impl Painter {
    /// Colors when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
            Self::plain()
        } else {
            Self::themed(Theme::detect())
        }
    }

    pub fn plain() -> Self {
        Self { palette: None }
    }

    pub fn themed(theme: Theme) -> Self {
        Self {
            palette: Some(theme.palette()),
        }
    }

    /// SGR sequence opening `role`, empty when plain.
    fn open(&self, role: Role) -> String {
        let Some(palette) = self.palette else {
            return String::new();
        };
        let modifiers = match role {
            Role::Heading | Role::Title => "1;",
            Role::Muted => "2;",
            Role::Match => "1;7;",
            _ => "",
        };
        let (r, g, b) = palette.color(role);
        format!("\x1b[{}38;2;{};{};{}m", modifiers, r, g, b)
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        if self.palette.is_none() {
            return text.to_string();
        }
        format!("{}{}{}", self.open(role), text, RESET)
    }

    /// Marks matches in reverse video, or in brackets without colors.
    pub fn highlighter(&self) -> Highlighter {
        if self.palette.is_none() {
            Highlighter::new("[", "]")
        } else {
            Highlighter::new(self.open(Role::Match), RESET)
        }
    }

    /// Right-aligned score, colored by strength. A word-start title hit is 13.
    pub fn score(&self, score: u32) -> String {
        let role = match score {
            30.. => Role::StrongScore,
            13.. => Role::Score,
            5.. => Role::WeakScore,
            _ => Role::Muted,
        };
        self.paint(role, &format!("{:>5}", score))
    }

    /// One breakdown cell; zero shows as a dim dot.
    pub fn points(&self, value: u32) -> String {
        if value == 0 {
            self.paint(Role::Muted, &format!("{:>4}", "·"))
        } else {
            format!("{:>4}", value)
        }
    }

    pub fn tags(&self, tags: &[String]) -> String {
        let joined = tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ");
        self.paint(Role::Tag, &joined)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PANEL
// ═══════════════════════════════════════════════════════════════════════════

/// A boxed block of output lines.
///
/// ```text
/// ┌─ HEADING ─────┐
/// │ line          │
/// ├─ SECTION ─────┤
/// └───────────────┘
/// ```
pub struct Panel<'p> {
    painter: &'p Painter,
    lines: Vec<String>,
}

impl<'p> Panel<'p> {
    pub fn new(painter: &'p Painter, heading: &str) -> Self {
        let mut panel = Self {
            painter,
            lines: Vec::new(),
        };
        panel.rule('┌', Some(heading), '┐');
        panel
    }

    pub fn section(&mut self, label: &str) {
        self.rule('├', Some(label), '┤');
    }

    /// Add a content line, padded to the panel width.
    pub fn line(&mut self, content: &str) {
        let border = self.painter.paint(Role::Frame, "│");
        self.lines.push(format!(
            "{}{}{}",
            border,
            pad(content, PANEL_WIDTH, Align::Left),
            border
        ));
    }

    /// Close the box and return every line.
    pub fn finish(mut self) -> String {
        self.rule('└', None, '┘');
        self.lines.join("\n")
    }

    fn rule(&mut self, left: char, label: Option<&str>, right: char) {
        let label = label
            .map(|text| format!("─ {} ", self.painter.paint(Role::Heading, text)))
            .unwrap_or_default();
        let fill = "─".repeat(PANEL_WIDTH.saturating_sub(display_width(&label)));
        let frame = |text: &str| self.painter.paint(Role::Frame, text);
        let line = format!(
            "{}{}{}{}",
            frame(&left.to_string()),
            label,
            frame(&fill),
            frame(&right.to_string())
        );
        self.lines.push(line);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TEXT LAYOUT
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Width in characters, not counting escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI sequences end at the first letter.
            for code in chars.by_ref() {
                if code.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Pad a possibly styled string to `width` visible characters.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(s)));
    match align {
        Align::Left => format!("{}{}", s, fill),
        Align::Right => format!("{}{}", fill, s),
    }
}

/// Cut plain text to at most `max` characters, ending with "…" when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
