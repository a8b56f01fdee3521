use geo::{AffineTransform, Coord, Rect};
use log::{debug, trace};

use crate::{
    components::{bounds::BoundingBox, rounding::RoundingPolicy},
    errors::{RasterInfoError, Result},
};

/// Affine mapping from pixel grid `(row, col)` to projected world `(x, y)`:
///
/// ```text
/// x = a * col + b * row + c
/// y = d * col + e * row + f
/// ```
///
/// Indices are zero based and name the top left corner of a pixel.
/// Serialised as the six coefficients in GDAL order `[c, a, b, f, d, e]`.
#[derive(Shrinkwrap, Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "[f64; 6]", into = "[f64; 6]")]
pub struct GeoTransform(AffineTransform);

impl GeoTransform {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self(AffineTransform::new(a, b, c, d, e, f))
    }

    pub fn from_gdal(gdal_transform: [f64; 6]) -> Self {
        Self::new(
            gdal_transform[1],
            gdal_transform[2],
            gdal_transform[0],
            gdal_transform[4],
            gdal_transform[5],
            gdal_transform[3],
        )
    }

    pub fn to_gdal(&self) -> [f64; 6] {
        [self.c(), self.a(), self.b(), self.f(), self.d(), self.e()]
    }

    /// x offset.
    pub fn c(&self) -> f64 {
        self.0.xoff()
    }

    /// y offset.
    pub fn f(&self) -> f64 {
        self.0.yoff()
    }

    pub fn determinant(&self) -> f64 {
        self.a() * self.e() - self.b() * self.d()
    }

    /// Singular when the determinant vanishes relative to the magnitude of
    /// the linear part.
    pub fn is_invertible(&self) -> bool {
        let scale = (self.a() * self.e()).abs() + (self.b() * self.d()).abs();
        self.determinant().abs() > f64::EPSILON * scale
    }

    fn checked_determinant(&self) -> Result<f64> {
        let determinant = self.determinant();
        if self.is_invertible() {
            Ok(determinant)
        } else {
            debug!("singular transform {self:?}");
            Err(RasterInfoError::SingularTransform { determinant })
        }
    }

    /// Transform from world `(x, y)` to fractional pixel `(col, row)`.
    pub fn inverse(&self) -> Result<GeoTransform> {
        let determinant = self.checked_determinant()?;
        self.0
            .inverse()
            .map(GeoTransform)
            .ok_or(RasterInfoError::SingularTransform { determinant })
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.b() == 0. && self.d() == 0.
    }

    /// World coordinates of the top left corner of pixel `(row, col)`.
    /// Indices outside the raster are mapped as well.
    pub fn pixel_to_world(&self, row: i64, col: i64) -> (f64, f64) {
        self.apply_grid(row as f64, col as f64)
    }

    /// World coordinates of the centre of pixel `(row, col)`.
    pub fn pixel_center_to_world(&self, row: i64, col: i64) -> (f64, f64) {
        self.apply_grid(row as f64 + 0.5, col as f64 + 0.5)
    }

    fn apply_grid(&self, row: f64, col: f64) -> (f64, f64) {
        self.0.apply(Coord { x: col, y: row }).x_y()
    }

    /// Fractional `(row, col)` of a world coordinate.
    ///
    /// Values within floating point error of a whole index are snapped to
    /// it, so a pixel corner produced by [GeoTransform::pixel_to_world]
    /// maps back onto its own pixel under every rounding policy.
    pub fn fractional_pixel(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let determinant = self.checked_determinant()?;
        // Offsets first, projected coordinates are large.
        let (dx, dy) = (x - self.c(), y - self.f());
        let col = (self.e() * dx - self.b() * dy) / determinant;
        let row = (self.a() * dy - self.d() * dx) / determinant;
        if !(row.is_finite() && col.is_finite()) {
            return Err(RasterInfoError::NonFiniteCoordinate { x, y });
        }
        // World coordinates carry rounding error in world units; scale it
        // into pixel units through the inverse linear part.
        let (world_x, world_y) = (x.abs() + self.c().abs(), y.abs() + self.f().abs());
        let slack = SNAP_ULPS * f64::EPSILON;
        let pixel_slack = slack * (row.abs() + col.abs() + 1.);
        let col_tolerance = slack
            * (self.e().abs() * world_x + self.b().abs() * world_y)
            / determinant.abs()
            + pixel_slack;
        let row_tolerance = slack
            * (self.a().abs() * world_y + self.d().abs() * world_x)
            / determinant.abs()
            + pixel_slack;
        Ok((snap(row, row_tolerance), snap(col, col_tolerance)))
    }

    /// Integer `(row, col)` holding world coordinate `(x, y)` under `policy`.
    ///
    /// The result is not checked against any raster shape; indices outside
    /// the imaged area are valid output. Values beyond the `i64` range
    /// saturate.
    pub fn world_to_pixel(&self, x: f64, y: f64, policy: RoundingPolicy) -> Result<(i64, i64)> {
        let (row_f, col_f) = self.fractional_pixel(x, y)?;
        let pixel = (policy.apply(row_f) as i64, policy.apply(col_f) as i64);
        trace!("({x}, {y}) -> ({row_f}, {col_f}) -[{policy}]-> {pixel:?}");
        Ok(pixel)
    }

    /// Ground size of one pixel along columns and rows.
    pub fn resolution(&self) -> (f64, f64) {
        (self.a().hypot(self.d()), self.b().hypot(self.e()))
    }

    pub fn is_square_pixel(&self, tolerance: f64) -> bool {
        let (xres, yres) = self.resolution();
        (xres - yres).abs() <= tolerance
    }

    /// Envelope of a `width` x `height` grid in world coordinates.
    pub fn bounds(&self, width: usize, height: usize) -> BoundingBox {
        let (width, height) = (width as f64, height as f64);
        let corners =
            [(0., 0.), (0., width), (height, 0.), (height, width)].map(|(row, col)| {
                let (x, y) = self.apply_grid(row, col);
                Coord { x, y }
            });
        let (min, max) = corners.iter().skip(1).fold(
            (corners[0], corners[0]),
            |(min, max), corner| {
                (
                    Coord {
                        x: min.x.min(corner.x),
                        y: min.y.min(corner.y),
                    },
                    Coord {
                        x: max.x.max(corner.x),
                        y: max.y.max(corner.y),
                    },
                )
            },
        );
        BoundingBox::from(Rect::new(min, max))
    }
}

const SNAP_ULPS: f64 = 4.;

fn snap(value: f64, tolerance: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= tolerance {
        nearest
    } else {
        value
    }
}

impl From<[f64; 6]> for GeoTransform {
    fn from(value: [f64; 6]) -> Self {
        Self::from_gdal(value)
    }
}

impl From<GeoTransform> for [f64; 6] {
    fn from(value: GeoTransform) -> Self {
        value.to_gdal()
    }
}

impl From<AffineTransform> for GeoTransform {
    fn from(value: AffineTransform) -> Self {
        Self(value)
    }
}
