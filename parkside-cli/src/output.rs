//! JSON reports printed by the subcommands.

use std::io::Write;

use parkside_core::{Attraction, CurrentLocation, ListingQuery, ParkSession, WeightProfile};
use serde::Serialize;

use crate::CliError;

/// Recommendation list with the inputs that produced it.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendationReport {
    pub(crate) weights: WeightProfile,
    pub(crate) weights_balanced: bool,
    pub(crate) current_location: Option<CurrentLocation>,
    pub(crate) recommendations: Vec<Attraction>,
}

impl RecommendationReport {
    pub(crate) fn build(session: &mut ParkSession, count: usize) -> Self {
        let recommendations = session.recommend(count);
        Self {
            weights: session.weights(),
            weights_balanced: session.weights_balanced(),
            current_location: session.current_location().cloned(),
            recommendations,
        }
    }
}

/// Filtered attraction table with the preferences that produced it.
#[derive(Debug, Serialize)]
pub(crate) struct ListingReport<'a> {
    pub(crate) weights_balanced: bool,
    pub(crate) listing: &'a ListingQuery,
    pub(crate) attractions: Vec<&'a Attraction>,
}

/// Distinct areas of the catalog.
#[derive(Debug, Serialize)]
pub(crate) struct AreasReport {
    pub(crate) weights_balanced: bool,
    pub(crate) areas: Vec<String>,
}

pub(crate) fn write_json<T>(writer: &mut dyn Write, report: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
