use std::fmt::Write as _;

use crate::core::{Point, format_compact_number};
use crate::error::{GaugeError, GaugeResult};
use crate::render::{
    ArcPrimitive, Fill, LinePrimitive, LinearGradient, PolygonPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub gradients_written: usize,
    pub arcs_written: usize,
    pub lines_written: usize,
    pub polygons_written: usize,
    pub texts_written: usize,
}

/// Serializes frames into standalone SVG documents.
///
/// Frames are not validated: non-finite coordinates are written as `NaN`
/// so a badly configured gauge still produces a document the host can show.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the last `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_frame(&mut self, frame: &RenderFrame) -> std::fmt::Result {
        let out = &mut self.document;
        let mut stats = SvgRenderStats::default();
        let width = frame.viewport.width;
        let height = frame.viewport.height;

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="width: {width}px; height: {height}px;">"#
        )?;

        if !frame.gradients.is_empty() {
            out.push_str("<defs>\n");
            for gradient in &frame.gradients {
                write_gradient(out, gradient)?;
                stats.gradients_written += 1;
            }
            out.push_str("</defs>\n");
        }

        for arc in &frame.arcs {
            write_arc(out, arc)?;
            stats.arcs_written += 1;
        }

        out.push_str("<g>\n");
        for line in &frame.lines {
            write_line(out, line)?;
            stats.lines_written += 1;
        }
        for polygon in &frame.polygons {
            write_polygon(out, polygon)?;
            stats.polygons_written += 1;
        }
        out.push_str("</g>\n");

        for text in &frame.texts {
            write_text(out, text)?;
            stats.texts_written += 1;
        }

        out.push_str("</svg>\n");
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GaugeResult<()> {
        self.document.clear();
        self.write_frame(frame)
            .map_err(|err| GaugeError::InvalidData(format!("failed to write svg: {err}")))
    }
}

/// Path data for an arc primitive, relative to the arc center.
#[must_use]
pub fn arc_path_data(arc: &ArcPrimitive) -> String {
    let sector = arc.sector;
    let [outer_start, outer_end, inner_end, inner_start] = sector.corners();
    let large_arc = u8::from(sector.is_large_arc());
    let outer = format_compact_number(sector.outer_radius);
    let mut data = format!(
        "M{}A{outer},{outer},0,{large_arc},1,{}",
        point_pair(outer_start),
        point_pair(outer_end)
    );
    if sector.inner_radius > 0.0 {
        let inner = format_compact_number(sector.inner_radius);
        data.push_str(&format!(
            "L{}A{inner},{inner},0,{large_arc},0,{}Z",
            point_pair(inner_end),
            point_pair(inner_start)
        ));
    } else {
        data.push_str("L0,0Z");
    }
    data
}

fn write_gradient(out: &mut String, gradient: &LinearGradient) -> std::fmt::Result {
    writeln!(
        out,
        r#"<linearGradient id="{}" x1="{}" x2="{}" y1="{}" y2="{}">"#,
        escape_xml(&gradient.id),
        percent(gradient.x1),
        percent(gradient.x2),
        percent(gradient.y1),
        percent(gradient.y2)
    )?;
    for stop in &gradient.stops {
        writeln!(
            out,
            r#"<stop offset="{}" stop-color="{}" opacity="1"></stop>"#,
            percent(stop.offset),
            stop.color.to_css_string()
        )?;
    }
    out.push_str("</linearGradient>\n");
    Ok(())
}

fn write_arc(out: &mut String, arc: &ArcPrimitive) -> std::fmt::Result {
    let fill = match &arc.fill {
        Fill::Solid(color) => color.to_css_string(),
        Fill::Gradient(id) => format!("url(#{})", escape_xml(id)),
    };
    writeln!(
        out,
        r#"<path d="{}" transform="translate({}, {})" style="fill: {fill};"></path>"#,
        arc_path_data(arc),
        format_compact_number(arc.center.x),
        format_compact_number(arc.center.y)
    )
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    if let Some(class) = line.class {
        write!(out, r#"<g class="{class}">"#)?;
    }
    write!(
        out,
        r#"<line x1="{}" x2="{}" y1="{}" y2="{}" style="stroke: {}; stroke-width: {}px;"></line>"#,
        format_compact_number(line.x1),
        format_compact_number(line.x2),
        format_compact_number(line.y1),
        format_compact_number(line.y2),
        line.color.to_css_string(),
        format_compact_number(line.stroke_width)
    )?;
    if line.class.is_some() {
        out.push_str("</g>");
    }
    out.push('\n');
    Ok(())
}

fn write_polygon(out: &mut String, polygon: &PolygonPrimitive) -> std::fmt::Result {
    if let Some(id) = &polygon.id {
        write!(out, r#"<g id="{}">"#, escape_xml(id))?;
    }
    let mut data = String::new();
    for (index, point) in polygon.points.iter().enumerate() {
        data.push(if index == 0 { 'M' } else { 'L' });
        data.push_str(&point_pair(*point));
    }
    data.push('Z');
    write!(out, r#"<path d="{data}""#)?;
    if let Some(transform) = polygon.transform {
        write!(out, r#" transform="{}""#, transform.to_svg_string())?;
    }
    write!(
        out,
        r#" style="fill: {};"></path>"#,
        polygon.fill.to_css_string()
    )?;
    if polygon.id.is_some() {
        out.push_str("</g>");
    }
    out.push('\n');
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    if let Some(group_id) = &text.group_id {
        write!(out, r#"<g id="{}">"#, escape_xml(group_id))?;
    }
    out.push_str("<text");
    if let Some(class) = text.class {
        write!(out, r#" class="{class}""#)?;
    }
    write!(
        out,
        r#" x="{}" y="{}""#,
        format_compact_number(text.x),
        format_compact_number(text.y)
    )?;
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(out, r#" style="text-anchor: {anchor};"#)?;
    if let Some(size) = text.font_size_px {
        write!(out, " font-size: {}px;", format_compact_number(size))?;
    }
    write!(out, r#"">{}</text>"#, escape_xml(&text.text))?;
    if text.group_id.is_some() {
        out.push_str("</g>");
    }
    out.push('\n');
    Ok(())
}

fn point_pair(point: Point) -> String {
    format!(
        "{},{}",
        format_compact_number(point.x),
        format_compact_number(point.y)
    )
}

fn percent(fraction: f64) -> String {
    let value = (fraction * 100.0 * 1e6).round() / 1e6;
    format!("{}%", format_compact_number(value))
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_xml_replaces_markup_characters() {
        assert_eq!(escape_xml(r#"a<b & "c">"#), "a&lt;b &amp; &quot;c&quot;&gt;");
    }

    #[test]
    fn percent_formats_fractions() {
        assert_eq!(percent(0.15), "15%");
        assert_eq!(percent(0.85), "85%");
        assert_eq!(percent(1.0), "100%");
    }
}
