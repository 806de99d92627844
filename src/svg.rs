// Copyright  (C) 2020, Kisio Digital and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Kisio Digital (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// This contribution is a part of the research and development work of the
// IVA Project which aims to enhance traveler information and is carried out
// under the leadership of the Technological Research Institute SystemX,
// with the partnership and support of the transport organization authority
// Ile-De-France Mobilités (IDFM), SNCF, and public funds
// under the scope of the French Program "Investissements d’Avenir".
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io


use serde::Deserialize;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A color attribute value. `None` renders as the literal `none`.
///
/// Deserializes from either a named string, a `[r, g, b]` array or a
/// `[r, g, b, opacity]` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ColorRepr")]
pub enum Color {
    None,
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl Default for Color {
    fn default() -> Self {
        Color::None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Named(name) => Color::Named(name),
            ColorRepr::Rgb(red, green, blue) => Color::Rgb(red, green, blue),
            ColorRepr::Rgba(red, green, blue, opacity) => Color::Rgba(red, green, blue, opacity),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Named(name) => write!(f, "{}", name),
            Color::Rgb(red, green, blue) => write!(f, "rgb({},{},{})", red, green, blue),
            Color::Rgba(red, green, blue, opacity) => {
                write!(f, "rgba({},{},{},{})", red, green, blue, opacity)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeLineCap::Butt => write!(f, "butt"),
            StrokeLineCap::Round => write!(f, "round"),
            StrokeLineCap::Square => write!(f, "square"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeLineJoin::Arcs => write!(f, "arcs"),
            StrokeLineJoin::Bevel => write!(f, "bevel"),
            StrokeLineJoin::Miter => write!(f, "miter"),
            StrokeLineJoin::MiterClip => write!(f, "miter-clip"),
            StrokeLineJoin::Round => write!(f, "round"),
        }
    }
}

/// Stroke and fill attributes shared by every shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathProps {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub stroke_line_cap: Option<StrokeLineCap>,
    pub stroke_line_join: Option<StrokeLineJoin>,
}

impl PathProps {
    fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(out, " fill=\"{}\"", fill)?;
        }
        if let Some(stroke) = &self.stroke {
            write!(out, " stroke=\"{}\"", stroke)?;
        }
        if let Some(width) = self.stroke_width {
            write!(out, " stroke-width=\"{}\"", width)?;
        }
        if let Some(cap) = self.stroke_line_cap {
            write!(out, " stroke-linecap=\"{}\"", cap)?;
        }
        if let Some(join) = self.stroke_line_join {
            write!(out, " stroke-linejoin=\"{}\"", join)?;
        }
        Ok(())
    }
}

/// Fluent setters for the shared path attributes.
pub trait PathPropsExt: Sized {
    fn props_mut(&mut self) -> &mut PathProps;

    fn fill(mut self, color: Color) -> Self {
        self.props_mut().fill = Some(color);
        self
    }

    fn stroke(mut self, color: Color) -> Self {
        self.props_mut().stroke = Some(color);
        self
    }

    fn stroke_width(mut self, width: f64) -> Self {
        self.props_mut().stroke_width = Some(width);
        self
    }

    fn stroke_line_cap(mut self, cap: StrokeLineCap) -> Self {
        self.props_mut().stroke_line_cap = Some(cap);
        self
    }

    fn stroke_line_join(mut self, join: StrokeLineJoin) -> Self {
        self.props_mut().stroke_line_join = Some(join);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    props: PathProps,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Point::default(),
            radius: 1.0,
            props: PathProps::default(),
        }
    }
}

impl Circle {
    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            self.center.x, self.center.y, self.radius
        )?;
        self.props.render(out)?;
        write!(out, "/>")
    }
}

impl PathPropsExt for Circle {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Point>,
    props: PathProps,
}

impl Polyline {
    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "<polyline points=\"")?;
        for (position, point) in self.points.iter().enumerate() {
            if position > 0 {
                write!(out, " ")?;
            }
            write!(out, "{},{}", point.x, point.y)?;
        }
        write!(out, "\"")?;
        self.props.render(out)?;
        write!(out, "/>")
    }
}

impl PathPropsExt for Polyline {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    content: String,
    props: PathProps,
}

impl Text {
    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    pub fn font_weight(mut self, weight: &str) -> Self {
        self.font_weight = Some(weight.to_string());
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "<text x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(out, " font-family=\"{}\"", family)?;
        }
        if let Some(weight) = &self.font_weight {
            write!(out, " font-weight=\"{}\"", weight)?;
        }
        self.props.render(out)?;
        write!(out, ">")?;
        escape_text(out, &self.content)?;
        write!(out, "</text>")
    }
}

impl PathPropsExt for Text {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

fn escape_text<W: Write>(out: &mut W, data: &str) -> fmt::Result {
    for character in data.chars() {
        match character {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            _ => out.write_char(character)?,
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Shape::Polyline(polyline)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Shape::Text(text)
    }
}

/// An SVG document: an ordered sequence of shapes.
/// Shapes are rendered in insertion order, one per line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<S: Into<Shape>>(&mut self, shape: S) {
        self.shapes.push(shape.into());
    }

    pub fn render_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">"
        )?;
        for shape in &self.shapes {
            write!(out, "  ")?;
            match shape {
                Shape::Circle(circle) => circle.render(out)?,
                Shape::Polyline(polyline) => polyline.render(out)?,
                Shape::Text(text) => text.render(out)?,
            }
            writeln!(out)?;
        }
        writeln!(out, "</svg>")
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out)
            .expect("formatting into a String does not fail");
        out
    }
}
