//! X-axis helpers: bin widths and conversion between bin edges and points

use crate::series::{BinEdges, Points};
use histo_core::{Error, Result};
use tracing::debug;

impl BinEdges {
    /// Number of bins delimited by these edges
    pub fn bin_count(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Width of each bin, `edges[i + 1] - edges[i]`
    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().windows(2).map(|pair| pair[1] - pair[0])
    }

    /// Edges enclosing the given points
    ///
    /// Interior edges lie midway between neighbouring points; the outer
    /// edges extend half the neighbouring gap beyond the first and last
    /// point. A single point gets a bin of width 1 centred on it.
    pub fn from_points(points: &Points) -> Self {
        let p = points.as_slice();
        match p.len() {
            0 => Self::empty(),
            1 => Self::from([p[0] - 0.5, p[0] + 0.5]),
            n => {
                let mut edges = Vec::with_capacity(n + 1);
                edges.push(p[0] - 0.5 * (p[1] - p[0]));
                edges.extend(p.windows(2).map(|pair| 0.5 * (pair[0] + pair[1])));
                edges.push(p[n - 1] + 0.5 * (p[n - 1] - p[n - 2]));
                Self::new(edges)
            }
        }
    }
}

impl Points {
    /// Bin centres of the given edges
    ///
    /// A single edge delimits no bin and is rejected; empty edges give
    /// empty points.
    pub fn from_bin_edges(edges: &BinEdges) -> Result<Self> {
        if edges.len() == 1 {
            debug!(len = edges.len(), "points rejected, single bin edge");
            return Err(Error::TooFewBinEdges {
                target: "Points",
                len: edges.len(),
            });
        }
        Ok(edges
            .as_slice()
            .windows(2)
            .map(|pair| 0.5 * (pair[0] + pair[1]))
            .collect())
    }
}

/// Null-aware [`Points::from_bin_edges`]
pub fn to_points(edges: Option<&BinEdges>) -> Result<Option<Points>> {
    edges.map(Points::from_bin_edges).transpose()
}

/// Null-aware [`BinEdges::from_points`]
pub fn to_bin_edges(points: Option<&Points>) -> Option<BinEdges> {
    points.map(BinEdges::from_points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bin_count_and_widths() {
        let edges = BinEdges::from([0.1, 0.2, 0.4]);
        assert_eq!(edges.bin_count(), 2);
        let widths: Vec<f64> = edges.widths().collect();
        assert_relative_eq!(widths[0], 0.1, epsilon = 1e-15);
        assert_relative_eq!(widths[1], 0.2, epsilon = 1e-15);

        assert_eq!(BinEdges::empty().bin_count(), 0);
        assert_eq!(BinEdges::from([1.0]).bin_count(), 0);
        assert_eq!(BinEdges::from([1.0]).widths().count(), 0);
    }

    #[test]
    fn test_points_from_bin_edges() {
        let edges = BinEdges::from([1.0, 3.0, 4.0]);
        let points = Points::from_bin_edges(&edges).unwrap();
        assert_eq!(points.as_slice(), &[2.0, 3.5]);
    }

    #[test]
    fn test_points_from_empty_and_single_edge() {
        assert!(Points::from_bin_edges(&BinEdges::empty()).unwrap().is_empty());
        let err = Points::from_bin_edges(&BinEdges::from([1.0])).unwrap_err();
        assert!(err.is_logic_error());
    }

    #[test]
    fn test_bin_edges_from_points() {
        assert!(BinEdges::from_points(&Points::empty()).is_empty());
        assert_eq!(
            BinEdges::from_points(&Points::from([2.0])).as_slice(),
            &[1.5, 2.5]
        );
        assert_eq!(
            BinEdges::from_points(&Points::from([1.0, 3.0, 4.0])).as_slice(),
            &[0.0, 2.0, 3.5, 4.5]
        );
    }

    #[test]
    fn test_uniform_round_trip() {
        let edges = BinEdges::from([0.0, 1.0, 2.0, 3.0]);
        let points = Points::from_bin_edges(&edges).unwrap();
        assert_eq!(BinEdges::from_points(&points), edges);
    }

    #[test]
    fn test_null_propagation() {
        assert_eq!(to_points(None).unwrap(), None);
        assert_eq!(to_bin_edges(None), None);
        let points = Points::from([1.0, 2.0]);
        assert_eq!(
            to_bin_edges(Some(&points)),
            Some(BinEdges::from([0.5, 1.5, 2.5]))
        );
    }
}
