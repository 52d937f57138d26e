//! High-level operations.
//!
//! Each one fills in a record from positional arguments and hands it to the
//! matching `emit_*` serializer. The trailing `opacity` is optional: `None`
//! means fully opaque ([`DEFAULT_OPACITY`]), while `Some(v)` is used as
//! given, including `Some(0.0)`.

use std::io::Write;

use super::{Emitter, TextTemplate, DEFAULT_OPACITY};
use crate::coords::polycoord;
use crate::model::{
    Arc, CommonAttr, Curve, Dimension, Ellipse, Image, Line, List, ListItem, Polygon, Polyline,
    Rect, Text,
};
use crate::Result;

fn opacity_or_default(opacity: Option<f64>) -> f64 {
    opacity.unwrap_or(DEFAULT_OPACITY)
}

fn text_record(
    x: f64,
    y: f64,
    s: &str,
    font: &str,
    size: f64,
    color: &str,
    opacity: Option<f64>,
) -> Text {
    Text {
        attr: CommonAttr {
            xp: x,
            yp: y,
            sp: size,
            font: font.to_string(),
            color: color.to_string(),
            opacity: opacity_or_default(opacity),
            ..Default::default()
        },
        data: s.to_string(),
        ..Default::default()
    }
}

fn shape(x: f64, y: f64, w: f64, color: &str, opacity: Option<f64>) -> Dimension {
    let mut d = Dimension::at(x, y, w);
    d.attr.color = color.to_string();
    d.attr.opacity = opacity_or_default(opacity);
    d
}

#[allow(clippy::too_many_arguments)]
impl<W: Write> Emitter<W> {
    /// Plain text at (x, y)
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        s: &str,
        font: &str,
        size: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let t = text_record(x, y, s, font, size, color, opacity);
        self.emit_text(&t, TextTemplate::Plain)
    }

    /// Text centered on (x, y)
    pub fn text_mid(
        &mut self,
        x: f64,
        y: f64,
        s: &str,
        font: &str,
        size: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let mut t = text_record(x, y, s, font, size, color, opacity);
        t.attr.align = "center".to_string();
        self.emit_text(&t, TextTemplate::Plain)
    }

    /// Text right-justified at (x, y)
    pub fn text_end(
        &mut self,
        x: f64,
        y: f64,
        s: &str,
        font: &str,
        size: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let mut t = text_record(x, y, s, font, size, color, opacity);
        t.attr.align = "right".to_string();
        self.emit_text(&t, TextTemplate::Plain)
    }

    /// A block of text at (x, y) wrapped at `margin`
    pub fn text_block(
        &mut self,
        x: f64,
        y: f64,
        s: &str,
        font: &str,
        size: f64,
        margin: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let mut t = text_record(x, y, s, font, size, color, opacity);
        t.wp = margin;
        t.attr.kind = "block".to_string();
        self.emit_text(&t, TextTemplate::Plain)
    }

    /// Text at (x, y) carrying a link
    pub fn text_link(
        &mut self,
        x: f64,
        y: f64,
        s: &str,
        link: &str,
        font: &str,
        size: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let mut t = text_record(x, y, s, font, size, color, opacity);
        t.attr.link = link.to_string();
        t.attr.kind = "plain".to_string();
        self.emit_text(&t, TextTemplate::Link)
    }

    /// Linked text rotated by `rotation` degrees
    pub fn text_rotate(
        &mut self,
        x: f64,
        y: f64,
        s: &str,
        link: &str,
        font: &str,
        rotation: f64,
        size: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let mut t = text_record(x, y, s, font, size, color, opacity);
        t.attr.link = link.to_string();
        t.attr.rotation = rotation;
        t.attr.kind = "plain".to_string();
        self.emit_text(&t, TextTemplate::Rotated)
    }

    /// A code block at (x, y) wrapped at `margin`. The font is left to the
    /// renderer's code style.
    pub fn code(
        &mut self,
        x: f64,
        y: f64,
        s: &str,
        size: f64,
        margin: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let mut t = text_record(x, y, s, "", size, color, opacity);
        t.wp = margin;
        t.attr.kind = "code".to_string();
        self.emit_text(&t, TextTemplate::Plain)
    }

    /// A list of `kind` (plain, bullet, number) with line spacing `spacing`
    /// and wrap width `wrap`
    pub fn list(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        spacing: f64,
        wrap: f64,
        items: &[&str],
        kind: &str,
        font: &str,
        color: &str,
    ) -> Result<()> {
        let l = List {
            attr: CommonAttr {
                xp: x,
                yp: y,
                sp: size,
                lp: spacing,
                kind: kind.to_string(),
                font: font.to_string(),
                color: color.to_string(),
                ..Default::default()
            },
            wp: wrap,
            items: items.iter().map(|s| ListItem::new(*s)).collect(),
        };
        self.emit_list(&l)
    }

    /// A square centered at (x, y) with width `w`
    pub fn square(&mut self, x: f64, y: f64, w: f64, color: &str, opacity: Option<f64>) -> Result<()> {
        let mut dim = shape(x, y, w, color, opacity);
        dim.hr = 100.0;
        self.emit_square(&Rect { dim })
    }

    /// A circle centered at (x, y) with width `w`; the height follows the
    /// width whatever the canvas aspect ratio
    pub fn circle(&mut self, x: f64, y: f64, w: f64, color: &str, opacity: Option<f64>) -> Result<()> {
        let mut dim = shape(x, y, w, color, opacity);
        dim.hr = 100.0;
        self.emit_circle(&Ellipse { dim })
    }

    /// A rectangle centered at (x, y) sized (w, h)
    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let mut dim = shape(x, y, w, color, opacity);
        dim.hp = h;
        self.emit_rect(&Rect { dim })
    }

    /// An ellipse centered at (x, y) sized (w, h)
    pub fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let mut dim = shape(x, y, w, color, opacity);
        dim.hp = h;
        self.emit_ellipse(&Ellipse { dim })
    }

    /// A line from (x1, y1) to (x2, y2), `size` thick
    pub fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        size: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let l = Line {
            xp1: x1,
            yp1: y1,
            xp2: x2,
            yp2: y2,
            sp: size,
            color: color.to_string(),
            opacity: opacity_or_default(opacity),
        };
        self.emit_line(&l)
    }

    /// An arc centered at (x, y) sized (w, h), from angle `a1` to `a2`
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        size: f64,
        a1: f64,
        a2: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let mut dim = Dimension::at(x, y, w);
        dim.hp = h;
        dim.attr.color = color.to_string();
        let a = Arc {
            dim,
            a1,
            a2,
            sp: size,
            opacity: opacity_or_default(opacity),
        };
        self.emit_arc(&a)
    }

    /// A quadratic Bezier from (x1, y1) to (x3, y3) with control point
    /// (x2, y2)
    pub fn curve(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        size: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let c = Curve {
            xp1: x1,
            yp1: y1,
            xp2: x2,
            yp2: y2,
            xp3: x3,
            yp3: y3,
            sp: size,
            color: color.to_string(),
            opacity: opacity_or_default(opacity),
        };
        self.emit_curve(&c)
    }

    /// A polygon through the points of `x` and `y`.
    ///
    /// Mismatched or too short slices still emit a tag, with empty
    /// coordinates; see [`polycoord`].
    pub fn polygon(&mut self, x: &[f64], y: &[f64], color: &str, opacity: Option<f64>) -> Result<()> {
        let (xc, yc) = polycoord(x, y);
        let p = Polygon {
            xc,
            yc,
            color: color.to_string(),
            opacity: opacity_or_default(opacity),
        };
        self.emit_polygon(&p)
    }

    /// A polyline through the points of `x` and `y`, `size` thick
    pub fn polyline(
        &mut self,
        x: &[f64],
        y: &[f64],
        size: f64,
        color: &str,
        opacity: Option<f64>,
    ) -> Result<()> {
        let (xc, yc) = polycoord(x, y);
        let p = Polyline {
            xc,
            yc,
            sp: size,
            color: color.to_string(),
            opacity: opacity_or_default(opacity),
        };
        self.emit_polyline(&p)
    }

    /// The named image centered at (x, y), `w` x `h` device units
    pub fn image(&mut self, x: f64, y: f64, w: i32, h: i32, name: &str, link: &str) -> Result<()> {
        let pic = Image {
            attr: CommonAttr {
                xp: x,
                yp: y,
                link: link.to_string(),
                ..Default::default()
            },
            width: w,
            height: h,
            name: name.to_string(),
            ..Default::default()
        };
        self.emit_image(&pic)
    }
}
