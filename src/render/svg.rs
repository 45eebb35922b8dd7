// Copyright (c) 2025 Morse Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! SVG output for a [`TreeLayout`].

use std::fmt::{self, Display, Formatter};

use super::layout::TreeLayout;

const EDGE_STROKE: &str = "#ccc";
const OCCUPIED_STROKE: &str = "#007bff";
const OCCUPIED_FILL: &str = "#e7f3ff";
const VACANT_STROKE: &str = "lightgray";
const VACANT_FILL: &str = "#f9f9f9";
const VACANT_LABEL: char = 'ø';

/// Offset that roughly centres a 10px glyph on a point.
const GLYPH_OFFSET: f64 = 3.0;

/// Display adapter writing a layout as an SVG document.
pub struct SvgDocument<'a>(pub &'a TreeLayout);

impl Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let layout = self.0;
        let (w, h) = (layout.width, layout.height);
        write!(f, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}""#)?;
        writeln!(f, r#" viewBox="0 0 {w} {h}" font-family="Arial" font-size="10">"#)?;

        // Edges go first so circles are drawn over their ends.
        for edge in &layout.edges {
            write!(
                f,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}""#,
                edge.x1, edge.y1, edge.x2, edge.y2,
            )?;
            writeln!(f, r#" stroke="{EDGE_STROKE}" stroke-width="1"/>"#)?;
            writeln!(
                f,
                r#"  <text x="{}" y="{}" fill="black">{}</text>"#,
                edge.label_x, edge.label_y, edge.symbol,
            )?;
        }

        for node in &layout.nodes {
            let (stroke, fill, label, label_fill) = match node.character {
                Some(c) => (OCCUPIED_STROKE, OCCUPIED_FILL, c, "black"),
                None => (VACANT_STROKE, VACANT_FILL, VACANT_LABEL, "gray"),
            };
            writeln!(
                f,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{fill}" stroke="{stroke}"/>"#,
                node.x, node.y, layout.node_radius,
            )?;
            writeln!(
                f,
                r#"  <text x="{}" y="{}" fill="{label_fill}">{}</text>"#,
                node.x - GLYPH_OFFSET,
                node.y + GLYPH_OFFSET,
                Escaped(label),
            )?;
        }

        write!(f, "</svg>")
    }
}

struct Escaped(char);

impl Display for Escaped {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            '&' => f.write_str("&amp;"),
            '<' => f.write_str("&lt;"),
            '>' => f.write_str("&gt;"),
            c => write!(f, "{c}"),
        }
    }
}

impl TreeLayout {
    /// Renders the layout as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        SvgDocument(self).to_string()
    }
}
