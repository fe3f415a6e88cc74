use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::fillet::fillet;
use crate::path::{add, normalize_angle, point_on_circle, sub};
use crate::{GeometryError, Path, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layer {
    #[default]
    Plate,
    Top,
    Bottom,
    TopSolderMask,
    BottomSolderMask,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::Plate,
        Layer::Top,
        Layer::Bottom,
        Layer::TopSolderMask,
        Layer::BottomSolderMask,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Plate => "plate",
            Layer::Top => "top",
            Layer::Bottom => "bottom",
            Layer::TopSolderMask => "topSolderMask",
            Layer::BottomSolderMask => "bottomSolderMask",
        }
    }
}

/// A tree of named paths and child models, serialized in the maker.js JSON shape.
///
/// `origin` translates everything below it; children compose their origins with their parent's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Point>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, Path>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub models: IndexMap<String, Model>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<Layer>,
}

/// A path resolved to absolute coordinates together with its effective layer.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkedPath {
    pub route: String,
    pub path: Path,
    pub layer: Layer,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_path(&mut self, name: impl Into<String>, path: Path) -> &mut Self {
        self.paths.insert(name.into(), path);
        self
    }

    pub fn add_model(&mut self, name: impl Into<String>, model: Model) -> &mut Self {
        self.models.insert(name.into(), model);
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Fillets the joint between two named lines, trimming them in place. Returns the arc,
    /// which the caller names and inserts.
    pub fn fillet_paths(
        &mut self,
        first: &str,
        second: &str,
        radius: f64,
    ) -> Result<Path, GeometryError> {
        let missing = |name: &str| GeometryError::MissingPath {
            name: name.to_string(),
        };
        let mut a = self.paths.get(first).cloned().ok_or_else(|| missing(first))?;
        let mut b = self.paths.get(second).cloned().ok_or_else(|| missing(second))?;
        let arc = fillet(&mut a, &mut b, radius)?;
        self.paths.insert(first.to_string(), a);
        self.paths.insert(second.to_string(), b);
        Ok(arc)
    }

    pub fn move_to(&mut self, origin: Point) -> &mut Self {
        self.origin = Some(origin);
        self
    }

    pub fn origin_or_zero(&self) -> Point {
        self.origin.unwrap_or([0.0, 0.0])
    }

    /// Rotates the contents counter-clockwise by `angle_deg` about `about`, where `about` is
    /// expressed in the coordinate frame this model's origin lives in. Origins stay put.
    pub fn rotate(&mut self, angle_deg: f64, about: Point) -> &mut Self {
        if angle_deg == 0.0 {
            return self;
        }
        let local = sub(about, self.origin_or_zero());
        for path in self.paths.values_mut() {
            path.rotate(angle_deg, local);
        }
        for child in self.models.values_mut() {
            child.rotate(angle_deg, local);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.models.iter().all(|(_, m)| m.is_empty())
    }

    pub fn path_count(&self) -> usize {
        self.paths.len() + self.models.values().map(Model::path_count).sum::<usize>()
    }

    /// Every path in depth-first order, translated to absolute coordinates.
    pub fn walk(&self) -> Vec<WalkedPath> {
        let mut out = Vec::new();
        self.walk_into(&mut out, [0.0, 0.0], Layer::Plate, "");
        out
    }

    fn walk_into(&self, out: &mut Vec<WalkedPath>, offset: Point, layer: Layer, route: &str) {
        let offset = add(offset, self.origin_or_zero());
        let layer = self.layer.unwrap_or(layer);
        for (name, path) in &self.paths {
            out.push(WalkedPath {
                route: format!("{route}paths/{name}"),
                path: path.moved(offset),
                layer,
            });
        }
        for (name, child) in &self.models {
            child.walk_into(out, offset, layer, &format!("{route}models/{name}/"));
        }
    }

    /// Axis-aligned bounds `(min, max)` of the absolute geometry, or `None` for an empty model.
    pub fn extents(&self) -> Option<(Point, Point)> {
        self.walk()
            .iter()
            .flat_map(|w| path_extreme_points(&w.path))
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((
                    [lo[0].min(p[0]), lo[1].min(p[1])],
                    [hi[0].max(p[0]), hi[1].max(p[1])],
                )),
            })
    }
}

fn path_extreme_points(path: &Path) -> Vec<Point> {
    match *path {
        Path::Line { origin, end } => vec![origin, end],
        Path::Arc {
            origin,
            radius,
            start_angle,
            ..
        } => {
            let (a, b) = path.endpoints();
            let span = path.arc_span();
            let start = normalize_angle(start_angle);
            let mut pts = vec![a, b];
            for quadrant in [0.0, 90.0, 180.0, 270.0, 360.0, 450.0, 540.0, 630.0] {
                if quadrant > start && quadrant < start + span {
                    pts.push(point_on_circle(origin, radius, quadrant));
                }
            }
            pts
        }
    }
}
