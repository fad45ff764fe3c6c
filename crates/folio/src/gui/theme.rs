use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub primary: Srgba<f64>,
    pub primary_fg: Srgba<f64>,
    pub neutral: Srgba<f64>,
    pub muted_fg: Srgba<f64>,
    pub border: Srgba<f64>,
    pub dark: Srgba<f64>,
    pub tooltip_bg: Srgba<f64>,
    pub tooltip_fg: Srgba<f64>,
    pub shadow: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            primary: Self::lookup_color(
                context,
                "accent_bg_color",
                Self::lookup_color(
                    context,
                    "theme_selected_bg_color",
                    Srgba::new(0.35, 0.4, 0.95, 1.0),
                    None,
                ),
                None,
            ),
            primary_fg: Self::lookup_color(
                context,
                "accent_fg_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
            neutral: Srgba::new(1.0, 1.0, 1.0, 0.9),
            muted_fg: Self::lookup_color(
                context,
                "theme_unfocused_fg_color",
                Srgba::new(0.45, 0.45, 0.5, 1.0),
                Some(1.0),
            ),
            border: Srgba::new(0.0, 0.0, 0.0, 0.06),
            dark: Srgba::new(0.16, 0.16, 0.16, 0.95),
            tooltip_bg: Srgba::new(0.08, 0.08, 0.08, 0.9),
            tooltip_fg: Srgba::new(1.0, 1.0, 1.0, 1.0),
            shadow: Srgba::new(0.0, 0.0, 0.0, 0.1),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn set_source(cr: &cairo::Context, color: Srgba<f64>, opacity: f64) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a * opacity);
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.folio-nav {
    background: none;
    background-color: transparent;
}
.folio-page {
    padding: 96px 64px 48px 64px;
}
.folio-greeting, .folio-muted {
    opacity: 0.7;
    font-size: 18px;
}
.folio-name {
    font-size: 64px;
    font-weight: 800;
}
.folio-heading {
    font-size: 44px;
    font-weight: 700;
}
.folio-tagline {
    font-size: 22px;
    opacity: 0.7;
}
.project-card {
    border-radius: 12px;
    border: 1px solid alpha(currentColor, 0.1);
    background-color: alpha(currentColor, 0.03);
    padding: 24px;
    min-height: 232px;
}
.project-title {
    font-size: 20px;
    font-weight: 600;
}
.project-tag {
    border-radius: 999px;
    padding: 2px 8px;
    font-size: 12px;
    background-color: alpha(@accent_bg_color, 0.1);
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
