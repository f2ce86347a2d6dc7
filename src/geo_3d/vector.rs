use std::ops::{
    Add,
    Sub,
    Mul,
    Neg,
    Index,
};
use std::fmt;

use bigdecimal::{Zero, One};

use crate::geo_3d::{
    Decimal,
    GeoError,
    ProcResult,
    err_str,
    divide,
    to_f64,
    is_near_zero,
    parse_decimal,
    format_fixed,
    PRECISION,
    DISPLAY_PLACES,
};

/// A vector of decimal coordinates.
/// Used for plane normals and base points; any dimension is allowed,
/// but operations combining two vectors require matching dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoVector {
    coordinates: Vec<Decimal>,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(coordinates: Vec<Decimal>) -> Self {
        GeoVector{coordinates}
    }

    /// Create a new vector from decimal text, e.g. `["-0.412", "3.806", "0.728"]`.
    pub fn from_strs(coordinates: &[&str]) -> ProcResult<Self> {
        let coordinates = coordinates.iter()
            .map(|text| parse_decimal(text))
            .collect::<ProcResult<Vec<_>>>()?;
        Ok(GeoVector{coordinates})
    }

    /// Create a new zero vector.
    pub fn zero(dimension: usize) -> Self {
        GeoVector{coordinates: vec![Decimal::zero(); dimension]}
    }

    /// Create the unit vector along axis `index`.
    pub fn basis(dimension: usize, index: usize) -> ProcResult<Self> {
        if index >= dimension {
            return err_str(&format!("Basis index {} out of range for dimension {}", index, dimension));
        }
        let mut coordinates = vec![Decimal::zero(); dimension];
        coordinates[index] = Decimal::one();
        Ok(GeoVector{coordinates})
    }

    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Coordinates, in order.
    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    fn check_dimension(&self, other: &GeoVector) -> ProcResult<()> {
        if self.dimension() != other.dimension() {
            return Err(GeoError::DimensionMismatch{expected: self.dimension(), found: other.dimension()});
        }
        Ok(())
    }

    /// Sum of two vectors.
    pub fn plus(&self, other: &GeoVector) -> ProcResult<GeoVector> {
        self.check_dimension(other)?;
        Ok(self + other)
    }

    /// Difference `self - other`.
    pub fn minus(&self, other: &GeoVector) -> ProcResult<GeoVector> {
        self.check_dimension(other)?;
        Ok(self - other)
    }

    /// Scale every coordinate.
    pub fn times_scalar(&self, scalar: &Decimal) -> GeoVector {
        self * scalar
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> ProcResult<Decimal> {
        self.check_dimension(other)?;
        Ok(self.coordinates.iter()
            .zip(other.coordinates.iter())
            .fold(Decimal::zero(), |acc, (a, b)| acc + a * b))
    }

    /// Get the magnitude squared of the vector. Exact.
    pub fn magnitude_sq(&self) -> Decimal {
        self.coordinates.iter()
            .fold(Decimal::zero(), |acc, c| acc + c * c)
    }

    /// Get the magnitude of the vector.
    pub fn magnitude(&self) -> Decimal {
        match self.magnitude_sq().sqrt() {
            Some(magnitude) => magnitude.with_prec(PRECISION),
            None => Decimal::zero(),
        }
    }

    /// Unit vector in the same direction.
    pub fn normalized(&self) -> ProcResult<GeoVector> {
        if self.is_zero() {
            return Err(GeoError::ZeroVector);
        }
        let magnitude = self.magnitude();
        Ok(self.coordinates.iter()
            .map(|c| divide(c, &magnitude))
            .collect())
    }

    /// Get the angle between two vectors, in radians.
    pub fn angle_with(&self, other: &GeoVector) -> ProcResult<f64> {
        if self.is_zero() || other.is_zero() {
            return Err(GeoError::ZeroVector);
        }
        let cos = divide(&self.dot(other)?, &(self.magnitude() * other.magnitude()));
        let cos = to_f64(&cos)?;
        // Rounding can push aligned vectors just past +-1
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Get the cross product of two 3D vectors.
    pub fn cross(&self, other: &GeoVector) -> ProcResult<GeoVector> {
        for vector in [self, other] {
            if vector.dimension() != 3 {
                return Err(GeoError::DimensionMismatch{expected: 3, found: vector.dimension()});
            }
        }
        let (a, b) = (&self.coordinates, &other.coordinates);
        Ok(GeoVector::new(vec![
            &a[1] * &b[2] - &a[2] * &b[1],
            &a[2] * &b[0] - &a[0] * &b[2],
            &a[0] * &b[1] - &a[1] * &b[0],
        ]))
    }

    /// Check if every coordinate is within the near-zero tolerance.
    /// Uses the same rule as `first_nonzero_index`, so a non-zero vector
    /// always has a first nonzero coordinate.
    pub fn is_zero(&self) -> bool {
        self.coordinates.iter().all(is_near_zero)
    }

    /// Check if two vectors point along the same line.
    /// The zero vector is parallel to everything.
    /// Vectors of different dimensions are never parallel.
    pub fn is_parallel_to(&self, other: &GeoVector) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }
        if self.is_zero() || other.is_zero() {
            return true;
        }
        let dot = match self.dot(other) {
            Ok(dot) => dot,
            Err(_) => return false,
        };
        // cos^2 of the angle, free of square roots
        let cos_sq = divide(&(&dot * &dot), &(self.magnitude_sq() * other.magnitude_sq()));
        is_near_zero(&(Decimal::one() - cos_sq))
    }

    /// Check if the dot product is within the near-zero tolerance.
    pub fn is_orthogonal_to(&self, other: &GeoVector) -> bool {
        match self.dot(other) {
            Ok(dot) => is_near_zero(&dot),
            Err(_) => false,
        }
    }

    /// Get the projection of `self` onto `basis`.
    pub fn component_parallel_to(&self, basis: &GeoVector) -> ProcResult<GeoVector> {
        if basis.is_zero() {
            return Err(GeoError::ZeroVector);
        }
        let weight = divide(&self.dot(basis)?, &basis.magnitude_sq());
        Ok(basis * &weight)
    }

    /// Get the rejection of `self` from `basis`.
    pub fn component_orthogonal_to(&self, basis: &GeoVector) -> ProcResult<GeoVector> {
        let parallel = self.component_parallel_to(basis)?;
        self.minus(&parallel)
    }
}
impl Index<usize> for GeoVector {
    type Output = Decimal;

    fn index(&self, index: usize) -> &Decimal {
        &self.coordinates[index]
    }
}
impl FromIterator<Decimal> for GeoVector {
    fn from_iter<I: IntoIterator<Item = Decimal>>(iter: I) -> Self {
        GeoVector{coordinates: iter.into_iter().collect()}
    }
}
/// # Panics
/// Panics if the dimensions differ; use `plus` for a checked sum.
impl<'a> Add<&'a GeoVector> for &'a GeoVector {
    type Output = GeoVector;

    fn add(self, other: &'a GeoVector) -> GeoVector {
        assert_eq!(self.dimension(), other.dimension(), "vector dimensions differ");
        self.coordinates.iter()
            .zip(other.coordinates.iter())
            .map(|(a, b)| a + b)
            .collect()
    }
}
/// # Panics
/// Panics if the dimensions differ; use `minus` for a checked difference.
impl<'a> Sub<&'a GeoVector> for &'a GeoVector {
    type Output = GeoVector;

    fn sub(self, other: &'a GeoVector) -> GeoVector {
        assert_eq!(self.dimension(), other.dimension(), "vector dimensions differ");
        self.coordinates.iter()
            .zip(other.coordinates.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}
impl<'a> Mul<&'a Decimal> for &'a GeoVector {
    type Output = GeoVector;

    fn mul(self, scalar: &'a Decimal) -> GeoVector {
        self.coordinates.iter()
            .map(|c| c * scalar)
            .collect()
    }
}
impl Neg for &GeoVector {
    type Output = GeoVector;

    fn neg(self) -> GeoVector {
        self.coordinates.iter()
            .map(|c| -c)
            .collect()
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = f.precision().map(|p| p as i64).unwrap_or(DISPLAY_PLACES);
        let coordinates = self.coordinates.iter()
            .map(|c| format_fixed(c, places))
            .collect::<Vec<_>>();
        write!(f, "({})", coordinates.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn vector(coordinates: &[&str]) -> GeoVector {
        GeoVector::from_strs(coordinates).unwrap()
    }

    fn dec(text: &str) -> Decimal {
        parse_decimal(text).unwrap()
    }

    #[test]
    fn arithmetic() {
        let a = vector(&["8.218", "-9.341"]);
        let b = vector(&["-1.129", "2.111"]);
        assert_eq!(a.plus(&b).unwrap(), vector(&["7.089", "-7.23"]));

        let a = vector(&["7.119", "8.215"]);
        let b = vector(&["-8.223", "0.878"]);
        assert_eq!(a.minus(&b).unwrap(), vector(&["15.342", "7.337"]));

        let a = vector(&["1.671", "-1.012", "-0.318"]);
        assert_eq!(a.times_scalar(&dec("7.41")), vector(&["12.38211", "-7.49892", "-2.35638"]));
        assert_eq!(-&a, vector(&["-1.671", "1.012", "0.318"]));
    }

    #[test]
    fn mismatched_dimensions_are_errors() {
        let a = vector(&["1", "2"]);
        let b = vector(&["1", "2", "3"]);
        assert_eq!(a.minus(&b), Err(GeoError::DimensionMismatch{expected: 2, found: 3}));
        assert!(a.dot(&b).is_err());
        assert!(!a.is_parallel_to(&b));
        assert!(!a.is_orthogonal_to(&b));
        assert!(a.cross(&b).is_err());
    }

    #[test]
    fn dot_and_magnitude() {
        let a = vector(&["7.887", "4.138"]);
        let b = vector(&["-8.802", "6.776"]);
        assert_eq!(a.dot(&b).unwrap(), dec("-41.382286"));

        let a = vector(&["3", "4"]);
        assert_eq!(a.magnitude_sq(), dec("25"));
        assert_eq!(a.magnitude(), dec("5"));
        assert_eq!(a.normalized().unwrap(), vector(&["0.6", "0.8"]));
    }

    #[test]
    fn normalizing_zero_fails() {
        assert_eq!(GeoVector::zero(3).normalized(), Err(GeoError::ZeroVector));
    }

    #[test]
    fn angles() {
        let a = vector(&["1", "0"]);
        let b = vector(&["0", "2"]);
        assert_relative_eq!(a.angle_with(&b).unwrap(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        let c = vector(&["-3", "0"]);
        assert_relative_eq!(a.angle_with(&c).unwrap(), std::f64::consts::PI, epsilon = 1e-12);
        assert!(a.angle_with(&GeoVector::zero(2)).is_err());
    }

    #[test]
    fn cross_product() {
        let a = GeoVector::basis(3, 0).unwrap();
        let b = GeoVector::basis(3, 1).unwrap();
        assert_eq!(a.cross(&b).unwrap(), GeoVector::basis(3, 2).unwrap());
        assert!(GeoVector::basis(3, 3).is_err());
    }

    #[test]
    fn parallel_and_orthogonal() {
        let a = vector(&["-7.579", "-7.88"]);
        let b = vector(&["22.737", "23.64"]);
        assert!(a.is_parallel_to(&b));
        assert!(b.is_parallel_to(&a));
        assert!(!a.is_orthogonal_to(&b));

        let a = vector(&["-2.029", "9.97", "4.172"]);
        let b = vector(&["-9.231", "-6.639", "-7.245"]);
        assert!(!a.is_parallel_to(&b));
        assert!(!a.is_orthogonal_to(&b));

        let a = vector(&["-2.328", "-7.284", "-1.214"]);
        let b = vector(&["-1.821", "1.072", "-2.94"]);
        assert!(!a.is_parallel_to(&b));
        assert!(a.is_orthogonal_to(&b));

        let a = vector(&["2.118", "4.827"]);
        let zero = GeoVector::zero(2);
        assert!(a.is_parallel_to(&zero));
        assert!(zero.is_parallel_to(&a));
        assert!(a.is_orthogonal_to(&zero));
    }

    #[test]
    fn zero_is_componentwise() {
        assert!(vector(&["1e-10", "-1e-10", "0"]).is_zero());
        assert!(!vector(&["0", "1.1e-10", "0"]).is_zero());
    }

    #[test]
    fn projections() {
        let v = vector(&["3", "4"]);
        let basis = vector(&["2", "0"]);
        assert_eq!(v.component_parallel_to(&basis).unwrap(), vector(&["3", "0"]));
        assert_eq!(v.component_orthogonal_to(&basis).unwrap(), vector(&["0", "4"]));

        let v = vector(&["3.039", "1.879"]);
        let basis = vector(&["0.825", "2.036"]);
        let parallel = v.component_parallel_to(&basis).unwrap();
        let orthogonal = v.component_orthogonal_to(&basis).unwrap();
        assert!(parallel.is_parallel_to(&basis));
        assert!(orthogonal.is_orthogonal_to(&basis));
        assert!(v.component_parallel_to(&GeoVector::zero(2)).is_err());
    }

    #[test]
    fn display() {
        let v = vector(&["1", "-0.4125", "2.5"]);
        assert_eq!(format!("{}", v), "(1.000, -0.412, 2.500)");
        assert_eq!(format!("{:.1}", v), "(1.0, -0.4, 2.5)");
    }
}
