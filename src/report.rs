/*!
 * Comparison reports over a set of planes.
 *
 * Every plane gets its equation and basepoint; every unordered pair gets the
 * parallel and coincidence checks, summarised as a `Relation`.
 */

mod proc_errors;
mod cfg;

use itertools::Itertools;
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::args::Format;
use crate::geo_3d::Plane;

// Re-export errors
pub use proc_errors::{
    ReportError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    DecimalCfg,
    NamedPlane,
    PlaneCfg,
    PlaneSet,
    PlaneSetCfg,
};

/// How two planes sit relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Relation {
    /// Same set of points.
    Coincident,
    /// Parallel normals, no common points.
    Parallel,
    /// Meet in a line.
    Intersecting,
    /// At least one normal is zero and the planes do not coincide.
    Degenerate,
}
impl Relation {
    /// Classify a pair of planes.
    pub fn between(first: &Plane, second: &Plane) -> Self {
        if first.equals(second) {
            Relation::Coincident
        }
        else if first.normal_vector().is_zero() || second.normal_vector().is_zero() {
            Relation::Degenerate
        }
        else if first.is_parallel_to(second) {
            Relation::Parallel
        }
        else {
            Relation::Intersecting
        }
    }
}

/// One plane in a report.
#[derive(Debug, Clone, Serialize)]
pub struct PlaneSummary {
    pub name: String,
    pub equation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basepoint: Option<String>,
}

/// One unordered pair of planes in a report.
#[derive(Debug, Clone, Serialize)]
pub struct PairSummary {
    pub first: String,
    pub second: String,
    pub parallel: bool,
    pub equal: bool,
    pub relation: Relation,
}

/// Report struct.
/// Equations for every plane and the relation of every pair, in file order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub planes: Vec<PlaneSummary>,
    pub pairs: Vec<PairSummary>,
}
impl Report {
    /// Number of pairs with the given relation.
    pub fn count(&self, relation: Relation) -> usize {
        self.pairs.iter().filter(|pair| pair.relation == relation).count()
    }

    /// Render the report as text or a serialized format.
    pub fn render(&self, format: &Format) -> ProcResult<String> {
        match format {
            Format::Text => Ok(self.render_text()),
            _ => Ok(crate::io::to_format_string(self, format)?),
        }
    }

    fn render_text(&self) -> String {
        let mut lines = vec!["Planes:".to_string()];
        for plane in self.planes.iter() {
            let basepoint = match &plane.basepoint {
                Some(basepoint) => format!("basepoint {}", basepoint),
                None => "no basepoint".to_string(),
            };
            lines.push(format!("  {}: {} ({})", plane.name, plane.equation, basepoint));
        }

        lines.push("Pairs:".to_string());
        for pair in self.pairs.iter() {
            lines.push(format!("  {} / {}: {} (parallel: {}, equal: {})",
                pair.first, pair.second, pair.relation, pair.parallel, pair.equal));
        }

        lines.push("Summary:".to_string());
        for relation in Relation::iter() {
            lines.push(format!("  {}: {}", relation, self.count(relation)));
        }
        lines.join("\n")
    }
}

/// Summarise every plane and every unordered pair of planes.
pub fn build_report(plane_set: &PlaneSet) -> Report {
    let planes = plane_set.planes.iter()
        .map(|named| PlaneSummary{
            name: named.name.clone(),
            equation: named.plane.to_string(),
            basepoint: named.plane.basepoint().map(|basepoint| basepoint.to_string()),
        })
        .collect::<Vec<_>>();

    let pairs = plane_set.planes.iter()
        .tuple_combinations()
        .map(|(first, second): (&NamedPlane, &NamedPlane)| {
            let relation = Relation::between(&first.plane, &second.plane);
            log::debug!("{} / {}: {}", first.name, second.name, relation);
            PairSummary{
                first: first.name.clone(),
                second: second.name.clone(),
                parallel: first.plane.is_parallel_to(&second.plane),
                equal: first.plane.equals(&second.plane),
                relation,
            }
        })
        .collect::<Vec<_>>();

    log::info!("Compared {} planes in {} pairs", planes.len(), pairs.len());
    Report{planes, pairs}
}
