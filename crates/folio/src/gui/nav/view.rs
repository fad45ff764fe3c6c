use super::{CENTER_TOOLTIP_GAP, ICON_SIZE, PLUS_ARM, TOOLTIP_GAP, center_for};
use crate::gui::theme::{ThemeColors, set_source};
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use orbit::animation::{ItemPose, Pulse, RingAnimation, lerp};
use orbit::geometry::{Layout, Point};
use orbit::visual::{CenterFill, CenterVisual, Fill, ItemVisual, Shadow, center_rotation};
use orbit::{Icon, NavItem, NavItems, Phase, RadialNav};
use palette::Srgba;
use std::collections::HashMap;
use std::f64::consts::PI;

#[derive(Default)]
pub struct IconSet {
    pixbufs: HashMap<Icon, Pixbuf>,
}

impl IconSet {
    pub fn load(items: &NavItems) -> Self {
        let pixbufs = items
            .iter()
            .filter_map(|item| {
                let path = orbit::icon::find_icon_path(item.icon, ICON_SIZE as u16)?;
                Pixbuf::from_file_at_scale(&path, ICON_SIZE, ICON_SIZE, true)
                    .map_err(|e| log::warn!("Failed to load {}: {}", path.display(), e))
                    .ok()
                    .map(|pixbuf| (item.icon, pixbuf))
            })
            .collect();
        Self { pixbufs }
    }

    fn get(&self, icon: Icon) -> Option<&Pixbuf> {
        self.pixbufs.get(&icon)
    }
}

struct ItemRenderer<'a> {
    item: &'a NavItem,
    visual: ItemVisual,
    pose: ItemPose,
    center: Point,
    size: f64,
    pixbuf: Option<&'a Pixbuf>,
}

impl ItemRenderer<'_> {
    fn position(&self) -> Point {
        self.center.offset(self.pose.offset)
    }

    fn radius(&self) -> f64 {
        self.size / 2.0 * self.pose.scale * self.visual.scale
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        if self.pose.opacity <= 0.0 || self.radius() <= 0.0 {
            return Ok(());
        }

        cr.push_group();
        self.draw_shadow(cr, colors)?;
        self.draw_circle(cr, colors)?;
        self.draw_content(cr, colors)?;
        cr.pop_group_to_source()?;
        cr.paint_with_alpha(self.pose.opacity)
    }

    fn draw_shadow(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (color, drop, blur) = match self.visual.shadow {
            Shadow::Accent => (Srgba { alpha: 0.4, ..colors.primary }, 4.0, 10.0),
            Shadow::Raised => (colors.shadow, 4.0, 8.0),
            Shadow::Resting => (Srgba { alpha: 0.08, ..colors.shadow }, 2.0, 4.0),
        };
        let pos = self.position();
        let radius = self.radius();
        soft_disc(cr, Point::new(pos.x, pos.y + drop), radius, blur, color)
    }

    fn draw_circle(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let pos = self.position();
        let fill = match self.visual.fill {
            Fill::Active => colors.primary,
            Fill::Neutral => colors.neutral,
        };
        set_source(cr, fill, 1.0);
        cr.arc(pos.x, pos.y, self.radius(), 0.0, 2.0 * PI);
        cr.fill()?;

        if self.visual.fill == Fill::Neutral {
            set_source(cr, colors.border, 1.0);
            cr.set_line_width(1.0);
            cr.arc(pos.x, pos.y, self.radius() - 0.5, 0.0, 2.0 * PI);
            cr.stroke()?;
        }
        Ok(())
    }

    fn draw_content(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let pos = self.position();
        let scale = self.pose.scale * self.visual.scale;

        if let Some(pixbuf) = self.pixbuf {
            let (iw, ih) = (
                pixbuf.width() as f64 * scale,
                pixbuf.height() as f64 * scale,
            );
            cr.save()?;
            cr.translate(pos.x - iw / 2.0, pos.y - ih / 2.0);
            cr.scale(scale, scale);
            cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
            cr.paint()?;
            return cr.restore();
        }

        let color = match self.visual.fill {
            Fill::Active => colors.primary_fg,
            Fill::Neutral => colors.muted_fg,
        };
        set_source(cr, color, 1.0);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(18.0 * scale);
        let glyph = self.item.icon.glyph();
        if let Ok(ext) = cr.text_extents(glyph) {
            cr.move_to(
                pos.x - ext.width() / 2.0 - ext.x_bearing(),
                pos.y - ext.height() / 2.0 - ext.y_bearing(),
            );
            cr.show_text(glyph)?;
        }
        Ok(())
    }

    fn draw_tooltip(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        match &self.visual.tooltip {
            Some(label) if self.pose.opacity > 0.5 => {
                let pos = self.position();
                let anchor = Point::new(pos.x + self.radius() + TOOLTIP_GAP, pos.y);
                draw_tooltip(cr, anchor, label.as_str(), colors)
            }
            _ => Ok(()),
        }
    }
}

pub fn draw(
    cr: &Context,
    nav: &RadialNav,
    animation: &RingAnimation,
    icons: &IconSet,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let metrics = nav.layout().metrics;
    let (closed, open) = (
        center_for(Phase::Closed, &metrics),
        center_for(Phase::Open, &metrics),
    );
    let t = animation.container_progress();
    let center = Point::new(lerp(closed.x, open.x, t), lerp(closed.y, open.y, t));

    draw_glow(cr, center, animation.glow_progress(), colors)?;

    let renderers: Vec<ItemRenderer> = if animation.is_visible() {
        draw_ring(cr, center, t, animation.ring_progress(), colors)?;
        nav.items()
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let geometry = nav.layout().geometry(&item.id)?;
                Some(ItemRenderer {
                    item,
                    visual: nav.item_visual(item),
                    pose: ItemPose::at(animation.item_progress(i), geometry.offset),
                    center,
                    size: metrics.item_size,
                    pixbuf: icons.get(item.icon),
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    let visual = nav.center_visual();
    let rotation = center_rotation(animation.ring_progress());
    draw_center(
        cr,
        center,
        metrics.center_size,
        &visual,
        rotation,
        animation.pulse(),
        colors,
    )?;

    for renderer in &renderers {
        renderer.draw(cr, colors)?;
    }
    for renderer in &renderers {
        renderer.draw_tooltip(cr, colors)?;
    }

    if let Some(text) = visual.tooltip {
        let radius = metrics.center_size / 2.0 * visual.scale;
        let anchor = Point::new(center.x + radius + CENTER_TOOLTIP_GAP, center.y);
        draw_tooltip(cr, anchor, text, colors)?;
    }
    Ok(())
}

fn draw_glow(
    cr: &Context,
    center: Point,
    progress: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let (closed_size, closed_opacity) = Layout::glow(Phase::Closed);
    let (open_size, open_opacity) = Layout::glow(Phase::Open);
    let radius = lerp(closed_size, open_size, progress) / 2.0;
    let opacity = lerp(closed_opacity, open_opacity, progress);
    soft_disc(
        cr,
        center,
        0.0,
        radius,
        Srgba {
            alpha: opacity,
            ..colors.primary
        },
    )
}

fn draw_ring(
    cr: &Context,
    center: Point,
    container: f64,
    progress: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let opacity = progress.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return Ok(());
    }
    let size = lerp(
        Layout::container_size(Phase::Closed),
        Layout::container_size(Phase::Open),
        container,
    );
    // enters from half size
    let radius = size / 2.0 * lerp(0.5, 1.0, progress);

    set_source(cr, colors.primary, 0.08 * opacity);
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    cr.fill()?;

    set_source(cr, colors.primary, 0.15 * opacity);
    cr.set_line_width(1.0);
    cr.arc(center.x, center.y, radius - 0.5, 0.0, 2.0 * PI);
    cr.stroke()
}

fn draw_center(
    cr: &Context,
    center: Point,
    size: f64,
    visual: &CenterVisual,
    rotation: f64,
    pulse: Pulse,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let radius = size / 2.0 * visual.scale;

    if visual.pulsing {
        set_source(cr, colors.primary, pulse.opacity);
        cr.set_line_width(2.0);
        cr.arc(center.x, center.y, radius * pulse.scale, 0.0, 2.0 * PI);
        cr.stroke()?;
    }

    let (fill, glyph) = match visual.fill {
        CenterFill::Primary => (colors.primary, colors.primary_fg),
        CenterFill::Dark => (colors.dark, colors.tooltip_fg),
    };

    let shadow = match visual.fill {
        CenterFill::Primary => Srgba {
            alpha: 0.4,
            ..colors.primary
        },
        CenterFill::Dark => Srgba {
            alpha: 0.3,
            ..colors.shadow
        },
    };
    soft_disc(cr, Point::new(center.x, center.y + 4.0), radius, 12.0, shadow)?;

    set_source(cr, fill, 1.0);
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    cr.fill()?;

    // shine from the top-left
    let shine = cairo::LinearGradient::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    );
    shine.add_color_stop_rgba(0.0, 1.0, 1.0, 1.0, 0.1);
    shine.add_color_stop_rgba(0.5, 1.0, 1.0, 1.0, 0.0);
    cr.set_source(&shine)?;
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    cr.fill()?;

    cr.save()?;
    cr.translate(center.x, center.y);
    cr.rotate(rotation.to_radians());
    set_source(cr, glyph, 1.0);
    cr.set_line_width(2.5);
    cr.set_line_cap(cairo::LineCap::Round);
    cr.move_to(-PLUS_ARM, 0.0);
    cr.line_to(PLUS_ARM, 0.0);
    cr.move_to(0.0, -PLUS_ARM);
    cr.line_to(0.0, PLUS_ARM);
    cr.stroke()?;
    cr.restore()
}

fn draw_tooltip(
    cr: &Context,
    anchor: Point,
    text: &str,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(13.0);
    let ext = cr.text_extents(text)?;

    let (pad_x, pad_y) = (12.0, 6.0);
    let (width, height) = (ext.width() + pad_x * 2.0, 13.0 + pad_y * 2.0);

    rounded_rect(cr, anchor.x, anchor.y - height / 2.0, width, height, 8.0);
    set_source(cr, colors.tooltip_bg, 1.0);
    cr.fill()?;

    set_source(cr, colors.tooltip_fg, 1.0);
    cr.move_to(
        anchor.x + pad_x - ext.x_bearing(),
        anchor.y - ext.height() / 2.0 - ext.y_bearing(),
    );
    cr.show_text(text)
}

fn rounded_rect(cr: &Context, x: f64, y: f64, width: f64, height: f64, r: f64) {
    cr.new_sub_path();
    cr.arc(x + width - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + width - r, y + height - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + height - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 1.5 * PI);
    cr.close_path();
}

fn soft_disc(
    cr: &Context,
    center: Point,
    inner: f64,
    blur: f64,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    let outer = inner + blur;
    let (r, g, b, a) = color.into_components();
    let gradient = cairo::RadialGradient::new(center.x, center.y, inner, center.x, center.y, outer);
    gradient.add_color_stop_rgba(0.0, r, g, b, a);
    gradient.add_color_stop_rgba(1.0, r, g, b, 0.0);
    cr.set_source(&gradient)?;
    cr.arc(center.x, center.y, outer, 0.0, 2.0 * PI);
    cr.fill()
}
