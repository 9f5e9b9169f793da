use crate::core::Viewport;
use crate::error::{GaugeError, GaugeResult};
use crate::render::{
    ArcPrimitive, Fill, LinePrimitive, LinearGradient, PolygonPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one gauge draw pass.
///
/// Painting order is gradients (definitions only), arcs, lines, polygons,
/// texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub gradients: Vec<LinearGradient>,
    pub arcs: Vec<ArcPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            gradients: Vec::new(),
            arcs: Vec::new(),
            lines: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: LinearGradient) -> Self {
        self.gradients.push(gradient);
        self
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcPrimitive) -> Self {
        self.arcs.push(arc);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn gradient(&self, id: &str) -> Option<&LinearGradient> {
        self.gradients.iter().find(|gradient| gradient.id == id)
    }

    /// Text primitive whose enclosing group carries `group_id`.
    #[must_use]
    pub fn text_in_group(&self, group_id: &str) -> Option<&TextPrimitive> {
        self.texts
            .iter()
            .find(|text| text.group_id.as_deref() == Some(group_id))
    }

    #[must_use]
    pub fn polygon(&self, id: &str) -> Option<&PolygonPrimitive> {
        self.polygons
            .iter()
            .find(|polygon| polygon.id.as_deref() == Some(id))
    }

    pub fn validate(&self) -> GaugeResult<()> {
        if !self.viewport.is_valid() {
            return Err(GaugeError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for gradient in &self.gradients {
            gradient.validate()?;
        }
        for arc in &self.arcs {
            arc.validate()?;
            if let Fill::Gradient(id) = &arc.fill {
                if self.gradient(id).is_none() {
                    return Err(GaugeError::InvalidData(format!(
                        "arc references unknown gradient `{id}`"
                    )));
                }
            }
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
            && self.lines.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }
}
