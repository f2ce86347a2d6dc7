use std::fmt;

use serde::{Serialize, Serializer, Deserialize, Deserializer, de};

use crate::geo_3d::{
    self,
    Decimal,
    GeoVector,
    Plane,
};
use crate::report::{
    ProcResult,
    err_str,
};

/// A decimal in a config file, kept as the text it was written with.
/// Numbers and strings are both accepted (`-0.412`, `"1e-10"`), and neither
/// passes through `f64`, so `0.1000000000000000000001` stays exact.
/// Load configs through `io::read_cfg_file` or `io::parse_cfg_str`: a deserializer
/// that only offers a binary float for a number is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalCfg(String);
impl DecimalCfg {
    pub fn new(text: &str) -> Self {
        DecimalCfg(text.trim().to_string())
    }

    /// Text as written in the config.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to an exact decimal.
    pub fn to_decimal(&self) -> geo_3d::ProcResult<Decimal> {
        geo_3d::parse_decimal(&self.0)
    }
}
impl Serialize for DecimalCfg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Numbers a float holds exactly are written as numbers
        match self.0.parse::<f64>() {
            Ok(value) if value.is_finite() && value.to_string() == self.0 => serializer.serialize_f64(value),
            _ => serializer.serialize_str(&self.0),
        }
    }
}
impl<'de> Deserialize<'de> for DecimalCfg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Asking for a string makes YAML hand over a number's literal text
        deserializer.deserialize_str(DecimalCfgVisitor)
    }
}

struct DecimalCfgVisitor;
impl<'de> de::Visitor<'de> for DecimalCfgVisitor {
    type Value = DecimalCfg;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a decimal number or decimal text")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<DecimalCfg, E> {
        Ok(DecimalCfg::new(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<DecimalCfg, E> {
        Ok(DecimalCfg(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<DecimalCfg, E> {
        Ok(DecimalCfg(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<DecimalCfg, E> {
        Err(E::custom(format!("decimal {} arrived as a binary float, write it as text (\"{}\") to keep every digit", value, value)))
    }
}

/// A single plane in a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneCfg {
    /// Name used in reports. Defaults to `p<position>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Normal vector. Defaults to the zero vector.
    #[serde(default, alias = "normal_vector", skip_serializing_if = "Option::is_none")]
    pub normal: Option<Vec<DecimalCfg>>,

    /// Constant term. Defaults to 0.
    #[serde(default, alias = "constant_term", skip_serializing_if = "Option::is_none")]
    pub constant: Option<DecimalCfg>,
}
impl PlaneCfg {
    /// Build the plane this entry describes.
    pub fn build(&self) -> geo_3d::ProcResult<Plane> {
        let normal_vector = match &self.normal {
            Some(normal) => Some(normal.iter()
                .map(|c| c.to_decimal())
                .collect::<geo_3d::ProcResult<GeoVector>>()?),
            None => None,
        };
        let constant_term = match &self.constant {
            Some(constant) => Some(constant.to_decimal()?),
            None => None,
        };
        Plane::new(normal_vector, constant_term)
    }
}

/// A config file listing planes to show or compare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneSetCfg {
    pub planes: Vec<PlaneCfg>,
}
impl PlaneSetCfg {
    /// Load a plane set from a config file.
    pub fn from_cfg_file(cfg_file: &str) -> ProcResult<Self> {
        let cfg: PlaneSetCfg = crate::io::read_cfg_file(cfg_file)?;
        Ok(cfg)
    }

    /// Sample config, as printed by `planar example`.
    pub fn example() -> Self {
        let plane = |name: &str, normal: [&str; 3], constant: &str| PlaneCfg{
            name: Some(name.to_string()),
            normal: Some(normal.iter().map(|c| DecimalCfg::new(c)).collect()),
            constant: Some(DecimalCfg::new(constant)),
        };
        PlaneSetCfg{
            planes: vec![
                plane("p1", ["-0.412", "3.806", "0.728"], "-3.46"),
                plane("p2", ["1.03", "-9.515", "-1.82"], "8.65"),
                plane("p3", ["-7.926", "8.625", "-7.212"], "-7.952"),
                plane("p4", ["-2.642", "2.875", "-2.404"], "-2.443"),
            ],
        }
    }
}

/// A plane with the name it is reported under.
#[derive(Debug, Clone)]
pub struct NamedPlane {
    pub name: String,
    pub plane: Plane,
}

/// Planes built from a config, in file order.
#[derive(Debug, Clone)]
pub struct PlaneSet {
    pub planes: Vec<NamedPlane>,
}
impl PlaneSet {
    /// Build every plane in the config.
    /// Names must be unique; unnamed planes are called `p1`, `p2`, ...
    pub fn from_cfg(cfg: &PlaneSetCfg) -> ProcResult<Self> {
        let mut planes: Vec<NamedPlane> = Vec::with_capacity(cfg.planes.len());
        for (idx, plane_cfg) in cfg.planes.iter().enumerate() {
            let name = match &plane_cfg.name {
                Some(name) => name.clone(),
                None => format!("p{}", idx + 1),
            };
            if planes.iter().any(|named| named.name == name) {
                return err_str(&format!("Duplicate plane name \"{}\"", name));
            }
            let plane = match plane_cfg.build() {
                Ok(plane) => plane,
                Err(error) => return err_str(&format!("Plane \"{}\": {}", name, error)),
            };
            planes.push(NamedPlane{name, plane});
        }
        Ok(PlaneSet{planes})
    }
}
