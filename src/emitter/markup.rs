//! Canonical per-kind serializers.
//!
//! Each `emit_*` method is the single definition of one element's markup:
//! fixed attribute names and order, two-decimal fixed point for every
//! number except image sizes, and strings copied verbatim with no escaping.

use std::fmt::Write as _;
use std::io::Write;

use log::trace;

use super::Emitter;
use crate::model::{Arc, Curve, Ellipse, Image, Line, List, Polygon, Polyline, Rect, Text};
use crate::Result;

/// Which of the three text tags to write.
///
/// The choice is made by the caller, never inferred from which fields are
/// set: a rotation is only written with [`TextTemplate::Rotated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTemplate {
    Plain,
    /// Adds `link`
    Link,
    /// Adds `link` and `rotation`
    Rotated,
}

impl<W: Write> Emitter<W> {
    /// `<rect>` with an explicit height percentage (`hp`)
    pub fn emit_rect(&mut self, r: &Rect) -> Result<()> {
        let d = &r.dim;
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<rect xp="{:.2}" yp="{:.2}" wp="{:.2}" hp="{:.2}" opacity="{:.2}" color="{}"/>"#,
            d.attr.xp, d.attr.yp, d.wp, d.hp, d.attr.opacity, d.attr.color
        )?;
        self.element("rect", &buf)
    }

    /// `<rect>` with a width-relative height (`hr`)
    pub fn emit_square(&mut self, r: &Rect) -> Result<()> {
        let d = &r.dim;
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<rect xp="{:.2}" yp="{:.2}" wp="{:.2}" hr="{:.2}" opacity="{:.2}" color="{}"/>"#,
            d.attr.xp, d.attr.yp, d.wp, d.hr, d.attr.opacity, d.attr.color
        )?;
        self.element("square", &buf)
    }

    /// `<ellipse>` with an explicit height percentage (`hp`)
    pub fn emit_ellipse(&mut self, e: &Ellipse) -> Result<()> {
        let d = &e.dim;
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<ellipse xp="{:.2}" yp="{:.2}" wp="{:.2}" hp="{:.2}" opacity="{:.2}" color="{}"/>"#,
            d.attr.xp, d.attr.yp, d.wp, d.hp, d.attr.opacity, d.attr.color
        )?;
        self.element("ellipse", &buf)
    }

    /// `<ellipse>` with a width-relative height (`hr`)
    pub fn emit_circle(&mut self, e: &Ellipse) -> Result<()> {
        let d = &e.dim;
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<ellipse xp="{:.2}" yp="{:.2}" wp="{:.2}" hr="{:.2}" opacity="{:.2}" color="{}"/>"#,
            d.attr.xp, d.attr.yp, d.wp, d.hr, d.attr.opacity, d.attr.color
        )?;
        self.element("circle", &buf)
    }

    pub fn emit_arc(&mut self, a: &Arc) -> Result<()> {
        let d = &a.dim;
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<arc xp="{:.2}" yp="{:.2}" wp="{:.2}" hp="{:.2}" sp="{:.2}" a1="{:.2}" a2="{:.2}" opacity="{:.2}" color="{}"/>"#,
            d.attr.xp, d.attr.yp, d.wp, d.hp, a.sp, a.a1, a.a2, a.opacity, d.attr.color
        )?;
        self.element("arc", &buf)
    }

    pub fn emit_line(&mut self, l: &Line) -> Result<()> {
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<line xp1="{:.2}" yp1="{:.2}" xp2="{:.2}" yp2="{:.2}" sp="{:.2}" opacity="{:.2}" color="{}"/>"#,
            l.xp1, l.yp1, l.xp2, l.yp2, l.sp, l.opacity, l.color
        )?;
        self.element("line", &buf)
    }

    pub fn emit_curve(&mut self, c: &Curve) -> Result<()> {
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<curve xp1="{:.2}" yp1="{:.2}" xp2="{:.2}" yp2="{:.2}" xp3="{:.2}" yp3="{:.2}" sp="{:.2}" opacity="{:.2}" color="{}"/>"#,
            c.xp1, c.yp1, c.xp2, c.yp2, c.xp3, c.yp3, c.sp, c.opacity, c.color
        )?;
        self.element("curve", &buf)
    }

    pub fn emit_polygon(&mut self, p: &Polygon) -> Result<()> {
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<polygon xc="{}" yc="{}" opacity="{:.2}" color="{}"/>"#,
            p.xc, p.yc, p.opacity, p.color
        )?;
        self.element("polygon", &buf)
    }

    pub fn emit_polyline(&mut self, p: &Polyline) -> Result<()> {
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<polyline xc="{}" yc="{}" sp="{:.2}" opacity="{:.2}" color="{}"/>"#,
            p.xc, p.yc, p.sp, p.opacity, p.color
        )?;
        self.element("polyline", &buf)
    }

    /// Text wrapped in `<text>...</text>`, with the attribute set chosen by
    /// `template`.
    pub fn emit_text(&mut self, t: &Text, template: TextTemplate) -> Result<()> {
        let a = &t.attr;
        let mut buf = String::new();
        write!(
            buf,
            r#"<text xp="{:.2}" yp="{:.2}" sp="{:.2}" align="{}" wp="{:.2}" font="{}" opacity="{:.2}" color="{}" type="{}""#,
            a.xp, a.yp, a.sp, a.align, t.wp, a.font, a.opacity, a.color, a.kind
        )?;
        match template {
            TextTemplate::Plain => {}
            TextTemplate::Link => write!(buf, r#" link="{}""#, a.link)?,
            TextTemplate::Rotated => {
                write!(buf, r#" link="{}" rotation="{:.2}""#, a.link, a.rotation)?
            }
        }
        writeln!(buf, ">{}</text>", t.data)?;
        self.element("text", &buf)
    }

    /// `<image>`; width and height are written as integers
    pub fn emit_image(&mut self, pic: &Image) -> Result<()> {
        let a = &pic.attr;
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<image xp="{:.2}" yp="{:.2}" width="{}" height="{}" name="{}" link="{}"/>"#,
            a.xp, a.yp, pic.width, pic.height, pic.name, a.link
        )?;
        self.element("image", &buf)
    }

    /// `<list>`, one `<li>` line per item, then `</list>`.
    ///
    /// Per-item color, opacity and font are not part of the list markup.
    pub fn emit_list(&mut self, l: &List) -> Result<()> {
        let a = &l.attr;
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<list type="{}" xp="{:.2}" yp="{:.2}" sp="{:.2}" lp="{:.2}" wp="{:.2}" font="{}" color="{}">"#,
            a.kind, a.xp, a.yp, a.sp, a.lp, l.wp, a.font, a.color
        )?;
        for item in &l.items {
            writeln!(buf, "<li>{}</li>", item.text)?;
        }
        buf.push_str("</list>\n");
        self.element("list", &buf)
    }

    fn element(&mut self, kind: &str, markup: &str) -> Result<()> {
        self.state.element(kind);
        trace!("{}: {}", kind, markup.trim_end());
        self.write_markup(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommonAttr, Dimension, ListItem};

    fn markup<F>(f: F) -> String
    where
        F: FnOnce(&mut Emitter<&mut Vec<u8>>) -> Result<()>,
    {
        let mut out = Vec::new();
        let mut e = Emitter::new(&mut out, 800, 600);
        f(&mut e).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn colored(color: &str) -> Dimension {
        Dimension {
            attr: CommonAttr {
                color: color.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn zero_records_render_zeroes() {
        let rect = Rect { dim: colored("red") };
        assert_eq!(
            markup(|e| e.emit_rect(&rect)),
            "<rect xp=\"0.00\" yp=\"0.00\" wp=\"0.00\" hp=\"0.00\" opacity=\"0.00\" color=\"red\"/>\n"
        );
        let line = Line { color: "blue".into(), ..Default::default() };
        assert_eq!(
            markup(|e| e.emit_line(&line)),
            "<line xp1=\"0.00\" yp1=\"0.00\" xp2=\"0.00\" yp2=\"0.00\" sp=\"0.00\" opacity=\"0.00\" color=\"blue\"/>\n"
        );
    }

    #[test]
    fn hr_and_hp_templates_read_different_fields() {
        let mut dim = colored("green");
        dim.wp = 4.0;
        dim.hp = 3.0;
        dim.hr = 75.0;
        let e = Ellipse { dim: dim.clone() };
        assert!(markup(|m| m.emit_ellipse(&e)).contains(r#"wp="4.00" hp="3.00" opacity"#));
        assert!(markup(|m| m.emit_circle(&e)).contains(r#"wp="4.00" hr="75.00" opacity"#));
        let r = Rect { dim };
        assert!(markup(|m| m.emit_rect(&r)).starts_with(r#"<rect xp="0.00" yp="0.00" wp="4.00" hp="3.00""#));
        assert!(markup(|m| m.emit_square(&r)).starts_with(r#"<rect xp="0.00" yp="0.00" wp="4.00" hr="75.00""#));
    }

    #[test]
    fn arc_uses_own_stroke_and_opacity() {
        let mut dim = colored("navy");
        dim.attr.xp = 55.0;
        dim.attr.sp = 99.0;
        dim.attr.opacity = 99.0;
        dim.wp = 4.0;
        dim.hp = 4.0;
        let a = Arc { dim, a1: 0.0, a2: 180.0, sp: 0.5, opacity: 30.0 };
        assert_eq!(
            markup(|e| e.emit_arc(&a)),
            "<arc xp=\"55.00\" yp=\"0.00\" wp=\"4.00\" hp=\"4.00\" sp=\"0.50\" a1=\"0.00\" a2=\"180.00\" opacity=\"30.00\" color=\"navy\"/>\n"
        );
    }

    #[test]
    fn text_templates() {
        let t = Text {
            attr: CommonAttr {
                xp: 10.0,
                yp: 20.0,
                sp: 3.0,
                font: "sans".into(),
                opacity: 100.0,
                color: "black".into(),
                link: "http://example.com".into(),
                rotation: 45.0,
                ..Default::default()
            },
            data: "Hello".into(),
            ..Default::default()
        };
        let base = r#"<text xp="10.00" yp="20.00" sp="3.00" align="" wp="0.00" font="sans" opacity="100.00" color="black" type="""#;
        assert_eq!(
            markup(|e| e.emit_text(&t, TextTemplate::Plain)),
            format!("{}>Hello</text>\n", base)
        );
        assert_eq!(
            markup(|e| e.emit_text(&t, TextTemplate::Link)),
            format!("{} link=\"http://example.com\">Hello</text>\n", base)
        );
        assert_eq!(
            markup(|e| e.emit_text(&t, TextTemplate::Rotated)),
            format!("{} link=\"http://example.com\" rotation=\"45.00\">Hello</text>\n", base)
        );
    }

    #[test]
    fn text_is_not_escaped() {
        let t = Text { data: "a < b & \"c\"".into(), ..Default::default() };
        assert!(markup(|e| e.emit_text(&t, TextTemplate::Plain)).ends_with(">a < b & \"c\"</text>\n"));
    }

    #[test]
    fn image_sizes_are_integers() {
        let pic = Image {
            attr: CommonAttr { xp: 50.0, yp: 50.0, link: "next".into(), ..Default::default() },
            width: 640,
            height: 480,
            scale: 50.0,
            name: "pic.png".into(),
            caption: "unused".into(),
            ..Default::default()
        };
        assert_eq!(
            markup(|e| e.emit_image(&pic)),
            "<image xp=\"50.00\" yp=\"50.00\" width=\"640\" height=\"480\" name=\"pic.png\" link=\"next\"/>\n"
        );
    }

    #[test]
    fn list_writes_one_line_per_item() {
        let l = List {
            attr: CommonAttr {
                kind: "bullet".into(),
                xp: 10.0,
                yp: 40.0,
                sp: 1.5,
                ..Default::default()
            },
            wp: 0.0,
            items: vec![ListItem::new("first"), ListItem::new("second")],
        };
        assert_eq!(
            markup(|e| e.emit_list(&l)),
            concat!(
                "<list type=\"bullet\" xp=\"10.00\" yp=\"40.00\" sp=\"1.50\" lp=\"0.00\" wp=\"0.00\" font=\"\" color=\"\">\n",
                "<li>first</li>\n",
                "<li>second</li>\n",
                "</list>\n"
            )
        );
    }

    #[test]
    fn poly_shapes_copy_coordinate_strings() {
        let p = Polygon { xc: "1.00 2.00 3.00".into(), yc: "4.00 5.00 6.00".into(), color: "red".into(), opacity: 50.0 };
        assert_eq!(
            markup(|e| e.emit_polygon(&p)),
            "<polygon xc=\"1.00 2.00 3.00\" yc=\"4.00 5.00 6.00\" opacity=\"50.00\" color=\"red\"/>\n"
        );
        let pl = Polyline { sp: 0.25, ..Default::default() };
        assert_eq!(
            markup(|e| e.emit_polyline(&pl)),
            "<polyline xc=\"\" yc=\"\" sp=\"0.25\" opacity=\"0.00\" color=\"\"/>\n"
        );
    }

    #[test]
    fn curve_template() {
        let c = Curve {
            xp1: 60.0, yp1: 10.0, xp2: 75.0, yp2: 20.0, xp3: 70.0, yp3: 10.0,
            sp: 0.2, color: "gray".into(), opacity: 100.0,
        };
        assert_eq!(
            markup(|e| e.emit_curve(&c)),
            "<curve xp1=\"60.00\" yp1=\"10.00\" xp2=\"75.00\" yp2=\"20.00\" xp3=\"70.00\" yp3=\"10.00\" sp=\"0.20\" opacity=\"100.00\" color=\"gray\"/>\n"
        );
    }
}
