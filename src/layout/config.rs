/// Comparison used by the best-fit pass to decide whether a child is "small".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitComparison {
    /// Commit a child only when it wants strictly less than its share.
    #[default]
    Strict,
    /// Commit a child when it wants no more than its share.
    Inclusive,
}

impl FitComparison {
    pub(crate) fn fits(self, wanted: f64, proposal: f64) -> bool {
        match self {
            FitComparison::Strict => wanted < proposal,
            FitComparison::Inclusive => wanted <= proposal,
        }
    }
}

/// Tuning for the stack algorithms.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutConfig {
    /// Spacing between stack children when a stack does not set its own.
    pub default_spacing: f64,
    /// Best-fit comparison.
    pub fit: FitComparison,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_spacing: 8.0,
            fit: FitComparison::Strict,
        }
    }
}

impl LayoutConfig {
    /// Defaults overridden by `VIEWKIT_DEFAULT_SPACING` and `VIEWKIT_FIT` (`strict`/`inclusive`).
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let default_spacing = lookup("VIEWKIT_DEFAULT_SPACING")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(defaults.default_spacing);
        let fit = match lookup("VIEWKIT_FIT").as_deref().map(str::trim) {
            Some("inclusive") => FitComparison::Inclusive,
            Some("strict") => FitComparison::Strict,
            _ => defaults.fit,
        };
        Self {
            default_spacing,
            fit,
        }
    }

    /// Same config with another default spacing.
    pub fn with_default_spacing(mut self, spacing: f64) -> Self {
        self.default_spacing = spacing;
        self
    }

    /// Same config with another best-fit comparison.
    pub fn with_fit(mut self, fit: FitComparison) -> Self {
        self.fit = fit;
        self
    }
}
