use cavalier_contours::polyline::{PlineVertex, Polyline};

use crate::error::GeometryError;
use crate::path::distance;
use crate::{Path, Point};

/// Endpoint matching distance used when linking paths into loops.
pub const CHAIN_EPS: f64 = 1e-6;

/// A path as traversed by a chain. `reversed` paths are walked from their end to their origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub path: Path,
    pub reversed: bool,
}

impl Link {
    pub fn endpoints(&self) -> (Point, Point) {
        let (a, b) = self.path.endpoints();
        if self.reversed {
            (b, a)
        } else {
            (a, b)
        }
    }
}

/// Groups unordered paths into closed loops by matching endpoints.
///
/// Degenerate paths (shorter than [`CHAIN_EPS`]) are dropped. Any path left without a partner
/// makes the whole set an open chain.
pub fn find_loops(paths: &[Path]) -> Result<Vec<Vec<Link>>, GeometryError> {
    let mut pending: Vec<Path> = paths
        .iter()
        .filter(|p| p.length() >= CHAIN_EPS)
        .cloned()
        .collect();
    let mut loops = Vec::new();

    while !pending.is_empty() {
        let first = pending.remove(0);
        let (start, mut current) = first.endpoints();
        let mut links = vec![Link {
            path: first,
            reversed: false,
        }];

        while distance(current, start) >= CHAIN_EPS {
            let next = pending.iter().position(|p| {
                let (a, b) = p.endpoints();
                distance(a, current) < CHAIN_EPS || distance(b, current) < CHAIN_EPS
            });
            let Some(idx) = next else {
                return Err(GeometryError::OpenChain { at: current });
            };
            let path = pending.remove(idx);
            let (a, b) = path.endpoints();
            let reversed = distance(a, current) >= CHAIN_EPS;
            current = if reversed { a } else { b };
            links.push(Link { path, reversed });
        }

        tracing::trace!(links = links.len(), "closed chain");
        loops.push(links);
    }

    Ok(loops)
}

/// Converts a closed loop into a closed polyline with one vertex per link.
pub fn loop_to_polyline(links: &[Link]) -> Polyline<f64> {
    let mut pl = Polyline::new_closed();
    for link in links {
        let (a, _) = link.endpoints();
        let bulge = match link.path {
            Path::Line { .. } => 0.0,
            Path::Arc { .. } => {
                let bulge = (link.path.arc_span().to_radians() / 4.0).tan();
                if link.reversed {
                    -bulge
                } else {
                    bulge
                }
            }
        };
        pl.vertex_data.push(PlineVertex::new(a[0], a[1], bulge));
    }
    pl
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded_square() -> Vec<Path> {
        vec![
            Path::line([-1.0, 2.0], [1.0, 2.0]),
            Path::arc([1.0, 1.0], 1.0, 0.0, 90.0),
            // Deliberately reversed relative to travel direction.
            Path::line([2.0, -1.0], [2.0, 1.0]),
            Path::line([-2.0, 1.0], [-2.0, -1.0]),
            Path::line([1.0, -2.0], [-1.0, -2.0]),
            Path::arc([-1.0, 1.0], 1.0, 90.0, 180.0),
            Path::arc([-1.0, -1.0], 1.0, 180.0, 270.0),
            Path::arc([1.0, -1.0], 1.0, 270.0, 360.0),
        ]
    }

    #[test]
    fn links_unordered_paths_into_one_loop() {
        let loops = find_loops(&rounded_square()).unwrap();
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 8);
        let pl = loop_to_polyline(&loops[0]);
        assert_eq!(pl.vertex_data.len(), 8);
        assert!(pl.is_closed);
    }

    #[test]
    fn separate_loops_are_reported_separately() {
        let mut paths = rounded_square();
        paths.extend(
            rounded_square()
                .into_iter()
                .map(|p| p.moved([10.0, 0.0])),
        );
        let loops = find_loops(&paths).unwrap();
        assert_eq!(loops.len(), 2);
    }

    #[test]
    fn open_path_is_an_error() {
        let mut paths = rounded_square();
        paths.remove(3);
        assert!(matches!(
            find_loops(&paths),
            Err(GeometryError::OpenChain { .. })
        ));
    }

    #[test]
    fn zero_length_segments_are_ignored() {
        let mut paths = rounded_square();
        paths.push(Path::line([2.0, 1.0], [2.0, 1.0]));
        assert_eq!(find_loops(&paths).unwrap()[0].len(), 8);
    }
}
