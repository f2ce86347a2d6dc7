use std::fmt;

use bigdecimal::{One, Zero};

use crate::geo_3d::{
    Decimal,
    GeoVector,
    GeoError,
    ProcResult,
    divide,
    display_rounded,
    first_nonzero_index,
    is_near_zero,
    parse_decimal,
    round_places,
    DISPLAY_PLACES,
};

/// A plane in 3D space, `n . x = d`.
/// Contains a normal vector `n`, a constant term `d`,
/// and a basepoint derived from both at construction.
/// There are no mutators; the basepoint is never recomputed.
#[derive(Debug, Clone)]
pub struct Plane {
    normal_vector: GeoVector,
    constant_term: Decimal,
    basepoint: Option<GeoVector>,
}
impl Plane {
    /// Dimension of the space every plane lives in.
    pub const DIMENSION: usize = 3;

    /// Create a new plane.
    /// A missing normal vector defaults to the zero vector, a missing constant to 0.
    /// The normal vector must have exactly `Plane::DIMENSION` coordinates.
    pub fn new(normal_vector: Option<GeoVector>, constant_term: Option<Decimal>) -> ProcResult<Self> {
        let normal_vector = normal_vector.unwrap_or_else(|| GeoVector::zero(Self::DIMENSION));
        if normal_vector.dimension() != Self::DIMENSION {
            return Err(GeoError::DimensionMismatch{expected: Self::DIMENSION, found: normal_vector.dimension()});
        }
        let constant_term = constant_term.unwrap_or_else(Decimal::zero);
        let basepoint = Self::derive_basepoint(&normal_vector, &constant_term)?;

        Ok(Plane{normal_vector, constant_term, basepoint})
    }

    /// Create a new plane from decimal text.
    pub fn from_strs(normal_vector: &[&str], constant_term: &str) -> ProcResult<Self> {
        Self::new(
            Some(GeoVector::from_strs(normal_vector)?),
            Some(parse_decimal(constant_term)?),
        )
    }

    /// The point on the plane that is zero everywhere except at the first
    /// nonzero coordinate `k` of the normal, where it is `d / n[k]`.
    /// `None` when the normal is (near) zero.
    fn derive_basepoint(normal_vector: &GeoVector, constant_term: &Decimal) -> ProcResult<Option<GeoVector>> {
        let initial_index = match first_nonzero_index(normal_vector.coordinates()) {
            Ok(initial_index) => initial_index,
            Err(GeoError::NoNonzeroElements) => {
                log::debug!("Normal vector {} has no nonzero coordinate, plane has no basepoint", normal_vector);
                return Ok(None);
            },
            Err(error) => return Err(error),
        };
        let initial_coefficient = &normal_vector[initial_index];

        let mut basepoint_coords = vec![Decimal::zero(); normal_vector.dimension()];
        basepoint_coords[initial_index] = divide(constant_term, initial_coefficient);
        let basepoint = GeoVector::new(basepoint_coords);
        log::trace!("Basepoint {} from coordinate {} of {}", basepoint, initial_index, normal_vector);

        Ok(Some(basepoint))
    }

    /// Dimension of the plane's space. Always `Plane::DIMENSION`.
    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    /// Get the normal vector of the plane. Not normalized.
    pub fn normal_vector(&self) -> &GeoVector {
        &self.normal_vector
    }

    /// Get the constant term of the plane.
    pub fn constant_term(&self) -> &Decimal {
        &self.constant_term
    }

    /// Get the basepoint, if the normal vector is nonzero.
    pub fn basepoint(&self) -> Option<&GeoVector> {
        self.basepoint.as_ref()
    }

    /// Check if the normal vectors are parallel.
    /// A zero normal is parallel to every plane.
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        self.normal_vector.is_parallel_to(&other.normal_vector)
    }

    /// Check if two planes describe the same set of points.
    ///
    /// Planes with a zero normal are either all of space or empty; two of them
    /// are equal only when their constants agree. Otherwise the normals must be
    /// parallel and the vector between the basepoints must be orthogonal to both
    /// of them, so the check reads the same from either plane.
    pub fn equals(&self, other: &Plane) -> bool {
        if self.normal_vector.is_zero() {
            if !other.normal_vector.is_zero() {
                return false;
            }
            let diff = &self.constant_term - &other.constant_term;
            return is_near_zero(&diff);
        }
        else if other.normal_vector.is_zero() {
            return false;
        }

        if !self.is_parallel_to(other) {
            return false;
        }

        // Nonzero normals always carry a basepoint
        match (&self.basepoint, &other.basepoint) {
            (Some(p1), Some(p2)) => match p1.minus(p2) {
                // Nearly parallel normals can disagree about the offset
                Ok(v) => v.is_orthogonal_to(&self.normal_vector)
                    && v.is_orthogonal_to(&other.normal_vector),
                Err(_) => false,
            },
            _ => false,
        }
    }
}
impl Default for Plane {
    fn default() -> Self {
        Plane{
            normal_vector: GeoVector::zero(Self::DIMENSION),
            constant_term: Decimal::zero(),
            basepoint: None,
        }
    }
}
/// Coincidence within the near-zero tolerance, see `Plane::equals`.
impl PartialEq for Plane {
    fn eq(&self, other: &Plane) -> bool {
        self.equals(other)
    }
}

/// Write a single coefficient, sign included.
/// The initial term has no `+` and no space after its sign.
fn write_coefficient(coefficient: &Decimal, is_initial_term: bool) -> String {
    let coefficient = round_places(coefficient, DISPLAY_PLACES);
    let mut output = String::new();

    if coefficient < Decimal::zero() {
        output.push('-');
    }
    if coefficient > Decimal::zero() && !is_initial_term {
        output.push('+');
    }
    if !is_initial_term {
        output.push(' ');
    }
    if coefficient.abs() != Decimal::one() {
        output.push_str(&display_rounded(&coefficient.abs()));
    }
    output
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coordinates = self.normal_vector.coordinates();

        let lhs = match first_nonzero_index(coordinates) {
            Ok(initial_index) => {
                let terms = coordinates.iter()
                    .enumerate()
                    .filter(|(_, c)| !round_places(c, DISPLAY_PLACES).is_zero())
                    .map(|(i, c)| format!("{}x_{}", write_coefficient(c, i == initial_index), i + 1))
                    .collect::<Vec<_>>();
                if terms.is_empty() {
                    "0".to_string()
                } else {
                    terms.join(" ")
                }
            },
            Err(GeoError::NoNonzeroElements) => "0".to_string(),
            Err(_) => return Err(fmt::Error),
        };

        write!(f, "{} = {}", lhs, display_rounded(&self.constant_term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(normal: &[&str], constant: &str) -> Plane {
        Plane::from_strs(normal, constant).unwrap()
    }

    fn dec(text: &str) -> Decimal {
        parse_decimal(text).unwrap()
    }

    #[test]
    fn defaults() {
        let p = Plane::new(None, None).unwrap();
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.normal_vector(), &GeoVector::zero(3));
        assert!(p.constant_term().is_zero());
        assert!(p.basepoint().is_none());
        assert_eq!(Plane::default().to_string(), p.to_string());
    }

    #[test]
    fn wrong_dimension_is_rejected() {
        let normal = GeoVector::from_strs(&["1", "2"]).unwrap();
        let err = Plane::new(Some(normal), None).unwrap_err();
        assert_eq!(err, GeoError::DimensionMismatch{expected: 3, found: 2});
    }

    #[test]
    fn basepoint_at_first_nonzero() {
        let p = plane(&["0", "2", "3"], "4");
        assert_eq!(p.basepoint().unwrap(), &GeoVector::from_strs(&["0", "2", "0"]).unwrap());

        let p = plane(&["-0.412", "3.806", "0.728"], "-3.46");
        let basepoint = p.basepoint().unwrap();
        assert_eq!(basepoint[0], divide(&dec("-3.46"), &dec("-0.412")));
        assert!(basepoint[1].is_zero());
        assert!(basepoint[2].is_zero());
    }

    #[test]
    fn basepoint_threshold() {
        let p = plane(&["1e-10", "5", "0"], "10");
        assert_eq!(p.basepoint().unwrap(), &GeoVector::from_strs(&["0", "2", "0"]).unwrap());

        let p = plane(&["1.1e-10", "5", "0"], "1.1e-9");
        assert_eq!(p.basepoint().unwrap(), &GeoVector::from_strs(&["10", "0", "0"]).unwrap());
    }

    #[test]
    fn zero_normal_has_no_basepoint() {
        assert!(plane(&["0", "0", "0"], "5").basepoint().is_none());
        assert!(plane(&["1e-10", "-1e-11", "0"], "0").basepoint().is_none());
    }

    #[test]
    fn format_unit_coefficients() {
        assert_eq!(plane(&["1", "1", "1"], "1").to_string(), "x_1 + x_2 + x_3 = 1");
        assert_eq!(plane(&["-1", "1", "-1"], "-1").to_string(), "-x_1 + x_2 - x_3 = -1");
    }

    #[test]
    fn format_rounding_and_omission() {
        assert_eq!(plane(&["-0.412", "3.806", "0.728"], "-3.46").to_string(),
            "-0.412x_1 + 3.806x_2 + 0.728x_3 = -3.460");
        assert_eq!(plane(&["2.5", "-1.23456", "0"], "-7").to_string(),
            "2.500x_1 - 1.235x_2 = -7");
        assert_eq!(plane(&["-2", "0", "1.0002"], "3.5").to_string(),
            "-2x_1 + x_3 = 3.500");
        assert_eq!(plane(&["0", "-1", "0.0004"], "0").to_string(), "-x_2 = 0");
    }

    #[test]
    fn format_leading_coefficient_rounded_away() {
        assert_eq!(plane(&["0.0001", "3", "0"], "1").to_string(), "+ 3x_2 = 1");
        assert_eq!(plane(&["0.0001", "0", "0"], "1").to_string(), "0 = 1");
    }

    #[test]
    fn format_zero_normal() {
        assert_eq!(Plane::default().to_string(), "0 = 0");
        assert_eq!(plane(&["0", "0", "0"], "2.25").to_string(), "0 = 2.250");
    }

    #[test]
    fn parallel_is_symmetric() {
        let planes = vec![
            plane(&["-0.412", "3.806", "0.728"], "-3.46"),
            plane(&["1.03", "-9.515", "-1.82"], "8.65"),
            plane(&["2.611", "5.528", "0.283"], "4.6"),
            plane(&["7.715", "8.306", "5.342"], "3.76"),
            plane(&["0", "0", "0"], "1"),
        ];
        for a in planes.iter() {
            for b in planes.iter() {
                assert_eq!(a.is_parallel_to(b), b.is_parallel_to(a));
            }
        }
    }

    #[test]
    fn equals_is_reflexive_and_symmetric() {
        let planes = vec![
            plane(&["-7.926", "8.625", "-7.212"], "-7.952"),
            plane(&["-2.642", "2.875", "-2.404"], "-2.443"),
            plane(&["0", "0", "3"], "1"),
            plane(&["0", "0", "0"], "0"),
            plane(&["0", "1", "0"], "1"),
            plane(&["0.000001", "1", "0"], "1"),
            plane(&["0.000001", "2", "0"], "2"),
            plane(&["1", "0.00001", "0"], "3"),
            plane(&["1", "0", "0"], "3"),
        ];
        for a in planes.iter() {
            assert!(a.equals(a));
            for b in planes.iter() {
                assert_eq!(a.equals(b), b.equals(a), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn nearly_parallel_planes_are_distinct() {
        // y = 1 and 1e-6 x + y = 1 meet along x = 0
        let p1 = plane(&["0", "1", "0"], "1");
        let p2 = plane(&["0.000001", "1", "0"], "1");
        assert!(p1.is_parallel_to(&p2));
        assert!(!p1.equals(&p2));
        assert!(!p2.equals(&p1));
    }

    #[test]
    fn proportional_planes_coincide() {
        let p1 = plane(&["1", "2", "3"], "4");
        let p2 = plane(&["-2", "-4", "-6"], "-8");
        assert!(p1.is_parallel_to(&p2));
        assert!(p1.equals(&p2));
        assert!(p1 == p2);

        let p1 = plane(&["0", "2", "0"], "4");
        let p2 = plane(&["0", "1", "0"], "2");
        assert!(p1.equals(&p2));
    }

    #[test]
    fn exact_multiple_planes() {
        // Normals and constants both scale by -2.5
        let p1 = plane(&["-0.412", "3.806", "0.728"], "-3.46");
        let p2 = plane(&["1.03", "-9.515", "-1.82"], "8.65");
        assert!(p1.is_parallel_to(&p2));
        assert!(p1.equals(&p2));
    }

    #[test]
    fn parallel_but_distinct_planes() {
        // Normals scale by 3, constants do not
        let p1 = plane(&["-7.926", "8.625", "-7.212"], "-7.952");
        let p2 = plane(&["-2.642", "2.875", "-2.404"], "-2.443");
        assert!(p1.is_parallel_to(&p2));
        assert!(!p1.equals(&p2));

        let p1 = plane(&["0", "0", "5"], "1");
        let p2 = plane(&["0", "0", "5"], "2");
        assert!(p1.is_parallel_to(&p2));
        assert!(p1 != p2);
    }

    #[test]
    fn intersecting_planes() {
        let p1 = plane(&["2.611", "5.528", "0.283"], "4.6");
        let p2 = plane(&["7.715", "8.306", "5.342"], "3.76");
        assert!(!p1.is_parallel_to(&p2));
        assert!(!p1.equals(&p2));
    }

    #[test]
    fn degenerate_planes() {
        let zero = plane(&["0", "0", "0"], "0");
        assert!(zero.equals(&plane(&["0", "0", "0"], "0")));
        assert!(zero.equals(&plane(&["0", "0", "0"], "1e-11")));
        assert!(!zero.equals(&plane(&["0", "0", "0"], "1")));

        let real = plane(&["1", "0", "0"], "0");
        assert!(!zero.equals(&real));
        assert!(!real.equals(&zero));
        assert!(zero.is_parallel_to(&real));
    }
}
