use crate::{
    algorithm::{bearing, candidates, direction, way_filter},
    config::SignBearingConfiguration,
    model::{
        feature::{SignBearing, SignKind},
        osm::{
            graph::{OsmGraph, OsmWayData},
            OsmError,
        },
        task::{output_ops, MapRouletteChallengeWriter, SignBearingCsvWriter, TaskEmitter},
    },
};
use kdam::{tqdm, Bar, BarBuilder, BarExt};
use rayon::prelude::*;
use std::{
    path::Path,
    sync::{Arc, Mutex},
};
use uom::si::f64::Length;

/// infers a bearing for every qualifying sign node in the graph.
///
/// ways are visited in ascending id order. within a way, signs are grouped by
/// kind in the order of `conf.sign_kinds` and otherwise follow the node order.
/// the parallel run produces the same output as the sequential one.
pub fn process_signs(
    graph: &OsmGraph,
    conf: &SignBearingConfiguration,
) -> Result<Vec<SignBearing>, OsmError> {
    let ways: Vec<&OsmWayData> = graph.way_iterator(true).collect();
    let threshold = conf.short_way_threshold();
    let kinds = &conf.sign_kinds;

    let per_way: Vec<Vec<SignBearing>> = if conf.parallelize {
        let bar: Arc<Mutex<Bar>> = Arc::new(Mutex::new(
            BarBuilder::default()
                .desc("sign bearings")
                .total(ways.len())
                .build()
                .map_err(OsmError::InternalError)?,
        ));
        let result = ways
            .par_iter()
            .map(|way| {
                if let Ok(mut bar) = bar.clone().lock() {
                    let _ = bar.update(1);
                }
                process_way(graph, way, kinds, threshold)
            })
            .collect::<Result<Vec<_>, _>>()?;
        eprintln!();
        result
    } else {
        let n_ways = ways.len();
        let result = tqdm!(ways.iter(), desc = "sign bearings", total = n_ways)
            .map(|way| process_way(graph, way, kinds, threshold))
            .collect::<Result<Vec<_>, _>>()?;
        eprintln!();
        result
    };

    let signs: Vec<SignBearing> = per_way.into_iter().flatten().collect();
    log::info!(
        "inferred bearings for {} signs across {} ways",
        signs.len(),
        graph.n_ways()
    );
    Ok(signs)
}

/// bearings for the sign nodes of a single way. ineligible ways yield no signs.
pub fn process_way(
    graph: &OsmGraph,
    way: &OsmWayData,
    kinds: &[SignKind],
    short_way_threshold: Length,
) -> Result<Vec<SignBearing>, OsmError> {
    if !way_filter::is_eligible(way) {
        return Ok(vec![]);
    }
    let mut signs = vec![];
    for kind in kinds.iter() {
        for candidate in candidates::candidates(graph, way, *kind) {
            let estimate =
                direction::estimate(graph, way, &candidate.node_id, short_way_threshold)?;
            let result = bearing::bearing(graph, way, &candidate.node_id, estimate.direction)?;
            let node = graph.get_node_data(&candidate.node_id)?;
            signs.push(SignBearing {
                node_id: candidate.node_id,
                kind: candidate.kind,
                way_id: candidate.way_id,
                bearing_degrees: result.bearing_degrees,
                direction: estimate.direction,
                lat: node.lat,
                lon: node.lon,
            });
        }
    }
    Ok(signs)
}

/// writes the challenge file and the CSV table to `output_directory`. outputs
/// that already exist are kept unless `overwrite` is set.
pub fn write_tasks(
    signs: &[SignBearing],
    conf: &SignBearingConfiguration,
    output_directory: &Path,
    overwrite: bool,
) -> Result<(), OsmError> {
    output_ops::ensure_directory(output_directory)?;
    let mut emitters: Vec<Box<dyn TaskEmitter>> = vec![];
    if let Some(writer) =
        MapRouletteChallengeWriter::create(output_directory, conf.preview.clone(), overwrite)?
    {
        emitters.push(Box::new(writer));
    }
    if let Some(writer) = SignBearingCsvWriter::create(output_directory, overwrite)? {
        emitters.push(Box::new(writer));
    }
    for emitter in emitters.iter_mut() {
        emitter.emit_all(signs)?;
    }
    Ok(())
}
