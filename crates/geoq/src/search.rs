use crate::error::{GeoqError, GeoqErrorExt};
use geoq_domain::query::GeoQuery;
use geoq_kernel::ports::{GeoFeature, Gazetteer, Geometry, GeometryEngine};
use serde::Serialize;
use tracing::debug;

/// Area derived from one reference feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchArea {
    /// Position of the reference feature in the gazetteer result.
    pub reference_index: usize,
    pub reference: GeoFeature,
    pub relation: String,
    pub area: Geometry,
}

/// Looks up the reference location and applies the spatial relation to every match.
///
/// The location type is passed to the gazetteer as a ranking hint only.
///
/// # Errors
/// * [`GeoqError::LocationNotFound`] when the gazetteer has no match.
/// * [`GeoqError::Collaborator`] when the gazetteer or the geometry engine fails.
pub fn resolve_search_areas<G, E>(
    query: &GeoQuery,
    gazetteer: &G,
    engine: &E,
) -> Result<Vec<SearchArea>, GeoqError>
where
    G: Gazetteer + ?Sized,
    E: GeometryEngine + ?Sized,
{
    let location = query.reference_location();
    let features = gazetteer.search(location.name(), location.type_hint()).context("gazetteer")?;
    if features.is_empty() {
        return Err(GeoqError::LocationNotFound { name: location.name().to_owned(), context: None });
    }
    debug!(name = location.name(), matches = features.len(), "Reference location resolved");

    features
        .into_iter()
        .enumerate()
        .map(|(reference_index, reference)| {
            let area = engine
                .apply_spatial_relation(&reference.geometry, query.spatial_relation(), query.buffer_config())
                .context("geometry engine")?;
            Ok(SearchArea {
                reference_index,
                reference,
                relation: query.spatial_relation().relation.clone(),
                area,
            })
        })
        .collect()
}
