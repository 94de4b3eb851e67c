use crate::{
    tree::{
        drawable::DrawableKind,
        node::{NodeId, ViewTree},
    },
    view::{
        color::{Color, ColorScheme},
        font::Font,
        model::Modifier,
    },
};

impl ViewTree {
    /// Nearest ancestor modifier value picked by `pick`.
    fn environment<T>(&self, id: NodeId, pick: impl Fn(&Modifier) -> Option<T>) -> Option<T> {
        self.ancestors(id).find_map(|a| match self.kind(a) {
            DrawableKind::Modified(m) => pick(m),
            _ => None,
        })
    }

    /// Foreground color set by the nearest ancestor, if any.
    pub fn foreground_color(&self, id: NodeId) -> Option<Color> {
        self.environment(id, |m| match m {
            Modifier::ForegroundColor(c) => Some(*c),
            _ => None,
        })
    }

    /// Color scheme set by the nearest ancestor, light by default.
    pub fn color_scheme(&self, id: NodeId) -> ColorScheme {
        self.color_scheme_or(id, ColorScheme::default())
    }

    /// Color scheme set by the nearest ancestor, else `fallback`.
    pub fn color_scheme_or(&self, id: NodeId, fallback: ColorScheme) -> ColorScheme {
        self.environment(id, |m| match m {
            Modifier::ColorScheme(s) => Some(*s),
            _ => None,
        })
        .unwrap_or(fallback)
    }

    /// Font for `id`: its own text font, else the nearest font environment, else body.
    pub fn resolved_font(&self, id: NodeId) -> Font {
        if let DrawableKind::Text {
            font: Some(font), ..
        } = self.kind(id)
        {
            return *font;
        }
        self.environment(id, |m| match m {
            Modifier::Font(f) => Some(*f),
            _ => None,
        })
        .unwrap_or_else(Font::body)
    }
}
