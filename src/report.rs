//! Serializable summaries of a prepared layer, for text and JSON output.

use std::fmt::Write as _;

use serde::Serialize;

use crate::ascii_map::symbol_of;
use crate::core::{CellBounds, Shape};
use crate::engine::{MaterialShapes, TileSource, TilemapLayer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerReport {
    pub layer: String,
    pub window: WindowReport,
    /// Tiles currently loaded
    pub tiles: usize,
    pub bounds: Option<BoundsReport>,
    pub materials: Vec<MaterialReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowReport {
    pub enabled: bool,
    pub center: [i32; 2],
    pub half_width: i32,
    pub half_height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundsReport {
    pub min: [i32; 2],
    pub max: [i32; 2],
    pub center: [f32; 2],
    pub size: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialReport {
    pub material: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
    pub capped: bool,
    pub shapes: Vec<ShapeReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeReport {
    pub area: f32,
    pub vertices: Vec<[f32; 2]>,
}

impl From<CellBounds> for BoundsReport {
    fn from(b: CellBounds) -> Self {
        Self {
            min: [b.min.x, b.min.y],
            max: [b.max.x, b.max.y],
            center: [b.center.x, b.center.y],
            size: [b.size.x, b.size.y],
        }
    }
}

impl From<&Shape> for ShapeReport {
    fn from(shape: &Shape) -> Self {
        Self {
            // Outer boundaries wind clockwise: positive area here, negative for holes
            area: -shape.signed_area(),
            vertices: shape.vertices().map(|v| [v.x, v.y]).collect(),
        }
    }
}

impl From<MaterialShapes> for MaterialReport {
    fn from(m: MaterialShapes) -> Self {
        Self {
            material: m.material.0,
            symbol: symbol_of(m.material),
            capped: m.capped,
            shapes: m.shapes.iter().map(ShapeReport::from).collect(),
        }
    }
}

impl LayerReport {
    pub fn from_layer<S: TileSource>(layer: &TilemapLayer<S>) -> Self {
        let window = layer.tracker().window();
        Self {
            layer: layer.config().name.clone(),
            window: WindowReport {
                enabled: window.enabled,
                center: [window.center.x, window.center.y],
                half_width: window.half_width,
                half_height: window.half_height,
            },
            tiles: layer.tiles().len(),
            bounds: layer.bounds().map(BoundsReport::from),
            materials: layer.shapes().into_iter().map(MaterialReport::from).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable listing
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let w = &self.window;
        let _ = writeln!(
            out,
            "layer '{}': window {}x{} at ({}, {}){}",
            self.layer,
            2 * w.half_width,
            2 * w.half_height,
            w.center[0],
            w.center[1],
            if w.enabled { "" } else { " (disabled)" }
        );
        let _ = writeln!(out, "tiles loaded: {}", self.tiles);
        match &self.bounds {
            Some(b) => {
                let _ = writeln!(
                    out,
                    "bounds: center ({}, {}) size {}x{}",
                    b.center[0], b.center[1], b.size[0], b.size[1]
                );
            }
            None => {
                let _ = writeln!(out, "bounds: none");
            }
        }

        for material in &self.materials {
            let label = match material.symbol {
                Some(ch) => format!("'{}' (#{})", ch, material.material),
                None => format!("#{}", material.material),
            };
            let _ = writeln!(
                out,
                "material {}: {} shape(s){}",
                label,
                material.shapes.len(),
                if material.capped { " [capped]" } else { "" }
            );
            for (i, shape) in material.shapes.iter().enumerate() {
                let vertices: Vec<String> = shape
                    .vertices
                    .iter()
                    .map(|v| format!("({}, {})", v[0], v[1]))
                    .collect();
                let _ = writeln!(
                    out,
                    "  shape {}: area {} corners {}: {}",
                    i,
                    shape.area,
                    shape.vertices.len(),
                    vertices.join(" ")
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii_map::AsciiMap;
    use crate::engine::LayerConfig;

    fn report(text: &str) -> LayerReport {
        let map = AsciiMap::parse(text).unwrap();
        let center = map.center();
        let mut layer = TilemapLayer::new(LayerConfig::default(), map.into_tiles()).unwrap();
        layer.prepare(center);
        LayerReport::from_layer(&layer)
    }

    #[test]
    fn block_reports_area_and_bounds() {
        let report = report("##\n##\n");
        assert_eq!(report.tiles, 4);
        assert_eq!(report.materials.len(), 1);
        let material = &report.materials[0];
        assert_eq!(material.symbol, Some('#'));
        assert!(!material.capped);
        assert_eq!(material.shapes.len(), 1);
        assert_eq!(material.shapes[0].area, 4.0);
        assert_eq!(material.shapes[0].vertices.len(), 4);

        let bounds = report.bounds.as_ref().unwrap();
        assert_eq!(bounds.size, [2.0, 2.0]);
        assert_eq!(bounds.center, [1.0, 1.0]);
        assert_eq!(report.window.center, [1, 1]);
    }

    #[test]
    fn json_has_expected_fields() {
        let report = report("a.b\n");
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["tiles"], 2);
        assert_eq!(value["materials"].as_array().unwrap().len(), 2);
        assert_eq!(value["materials"][0]["symbol"], "a");
        assert_eq!(value["window"]["half_width"], 10);
    }

    #[test]
    fn text_lists_every_material() {
        let text = report("a.b\n").to_text();
        assert!(text.contains("material 'a' (#97): 1 shape(s)"));
        assert!(text.contains("material 'b' (#98): 1 shape(s)"));
        assert!(text.contains("tiles loaded: 2"));
    }
}
