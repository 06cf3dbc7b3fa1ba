use serde::{Deserialize, Serialize};

/// The theme a caller asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemePreference {
    /// `Auto` has no ambient signal to consult, so it always resolves to dark.
    pub fn resolve(self) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark | ThemePreference::Auto => Theme::Dark,
        }
    }
}

/// A resolved theme, passed explicitly to every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Static method colour table shared by badges, distribution cells, and
/// detail headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodColor {
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Gray,
}

impl MethodColor {
    pub fn for_method(method: &str) -> Self {
        match method {
            "GET" => MethodColor::Blue,
            "POST" => MethodColor::Green,
            "PUT" => MethodColor::Orange,
            "DELETE" => MethodColor::Red,
            "PATCH" => MethodColor::Purple,
            _ => MethodColor::Gray,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MethodColor::Blue => "blue",
            MethodColor::Green => "green",
            MethodColor::Orange => "orange",
            MethodColor::Red => "red",
            MethodColor::Purple => "purple",
            MethodColor::Gray => "gray",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            MethodColor::Blue => "#3b82f6",
            MethodColor::Green => "#22c55e",
            MethodColor::Orange => "#f97316",
            MethodColor::Red => "#ef4444",
            MethodColor::Purple => "#a855f7",
            MethodColor::Gray => "#6b7280",
        }
    }

    /// SGR foreground code.
    pub fn ansi(&self) -> &'static str {
        match self {
            MethodColor::Blue => "34",
            MethodColor::Green => "32",
            MethodColor::Orange => "33",
            MethodColor::Red => "31",
            MethodColor::Purple => "35",
            MethodColor::Gray => "90",
        }
    }
}

/// Colours for the HTML shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

/// User overrides applied on top of the base palette of a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub text_secondary: Option<String>,
    pub border: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
}

impl Palette {
    pub fn base(theme: Theme) -> Self {
        let (background, surface, text, text_secondary, border) = match theme {
            Theme::Light => ("#ffffff", "#f8fafc", "#0f172a", "#475569", "#e2e8f0"),
            Theme::Dark => ("#0f172a", "#1e293b", "#f8fafc", "#94a3b8", "#334155"),
        };
        Self {
            primary: "#3b82f6".into(),
            secondary: "#10b981".into(),
            background: background.into(),
            surface: surface.into(),
            text: text.into(),
            text_secondary: text_secondary.into(),
            border: border.into(),
            success: "#22c55e".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            info: "#3b82f6".into(),
        }
    }

    pub fn resolve(theme: Theme, overrides: &PaletteOverrides) -> Self {
        let base = Self::base(theme);
        let pick = |o: &Option<String>, b: String| o.clone().unwrap_or(b);
        Self {
            primary: pick(&overrides.primary, base.primary),
            secondary: pick(&overrides.secondary, base.secondary),
            background: pick(&overrides.background, base.background),
            surface: pick(&overrides.surface, base.surface),
            text: pick(&overrides.text, base.text),
            text_secondary: pick(&overrides.text_secondary, base.text_secondary),
            border: pick(&overrides.border, base.border),
            success: pick(&overrides.success, base.success),
            warning: pick(&overrides.warning, base.warning),
            error: pick(&overrides.error, base.error),
            info: pick(&overrides.info, base.info),
        }
    }
}
