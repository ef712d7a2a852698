use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{
    aggregate::{DistrictAggregates, DistrictShape, SplitReduction, Splitting, aggregate_shapes},
    compactness::DiscreteCompactness,
    config::ScoreConfig,
    data::{Plan, StateInputs},
    error::ScoreResult,
};

/// Every aggregate computed for one plan, before any formulas or rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanAnalysis {
    pub aggregates: DistrictAggregates,
    pub shapes: Vec<DistrictShape>,
    pub discrete: DiscreteCompactness,
    pub splitting: Splitting,
}

/// Run the aggregators over a plan.
///
/// Everything is allocated for this call alone; `inputs` is only read. The
/// enclosing-circle shuffle is seeded from `config.seed`, so analyzing the
/// same plan twice gives identical results.
pub fn analyze_plan(
    inputs: &StateInputs,
    plan: &Plan,
    config: &ScoreConfig,
    reduction: &dyn SplitReduction,
) -> ScoreResult<PlanAnalysis> {
    let metadata = &inputs.metadata;
    let assignment = inputs.graph.assign(plan, metadata)?;

    let aggregates = DistrictAggregates::aggregate(plan, &inputs.precincts, metadata)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let shapes = aggregate_shapes(plan, &assignment, metadata.num_districts(), &inputs.graph, &inputs.shapes, &mut rng)?;

    let discrete = DiscreteCompactness::compute(&inputs.graph, &assignment, metadata, config.log_det_threshold)?;
    let splitting = Splitting::reduce(&aggregates, reduction)?;

    info!(
        precincts = plan.len(),
        districts = metadata.num_districts(),
        cut_edges = discrete.cut_edges,
        spanning_tree_score = discrete.spanning_tree_score,
        "analyzed plan"
    );

    Ok(PlanAnalysis { aggregates, shapes, discrete, splitting })
}
