use std::fmt;

use geo::{Coord, Rect};

/// Rectangular extent of a raster in projected units.
///
/// Backed by a [Rect], so corners given in any order are normalised:
/// `right >= left` and `top >= bottom` always hold.
#[derive(Shrinkwrap, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox(Rect<f64>);

impl BoundingBox {
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self(Rect::new(
            Coord { x: left, y: bottom },
            Coord { x: right, y: top },
        ))
    }

    pub fn left(&self) -> f64 {
        self.0.min().x
    }

    pub fn bottom(&self) -> f64 {
        self.0.min().y
    }

    pub fn right(&self) -> f64 {
        self.0.max().x
    }

    pub fn top(&self) -> f64 {
        self.0.max().y
    }

    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    pub fn height(&self) -> f64 {
        self.top() - self.bottom()
    }

    /// Edges are inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.left()..=self.right()).contains(&x) && (self.bottom()..=self.top()).contains(&y)
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(value: Rect<f64>) -> Self {
        Self(value)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox(left={}, bottom={}, right={}, top={})",
            self.left(),
            self.bottom(),
            self.right(),
            self.top()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn normalises_swapped_corners() {
        let bounds = BoundingBox::new(10., 5., 0., -5.);
        assert_eq!(bounds, BoundingBox::new(0., -5., 10., 5.));
        assert_eq!((bounds.width(), bounds.height()), (10., 10.));
    }

    #[rstest]
    #[case(0., 0., true)]
    #[case(10., 5., true)]
    #[case(5., 0.5, true)]
    #[case(10.5, 0., false)]
    #[case(5., -5.1, false)]
    fn contains_point(#[case] x: f64, #[case] y: f64, #[case] inside: bool) {
        let bounds = BoundingBox::new(0., -5., 10., 5.);
        assert_eq!(bounds.contains(x, y), inside)
    }

    #[test]
    fn display() {
        let bounds = BoundingBox::new(500000., 3999700., 500300., 4000000.);
        assert_eq!(
            bounds.to_string(),
            "BoundingBox(left=500000, bottom=3999700, right=500300, top=4000000)"
        )
    }
}
