use anyhow::Result;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    aggregate::SqrtEntropy,
    config::ScoreConfig,
    data::{Plan, StateInputs},
    error::ScoreResult,
    scorecard::{Scorecard, score_plan_with},
};

/// Score many plans against the same state in parallel.
///
/// Results come back in plan order, one per plan: a plan that fails to score
/// yields its error without affecting the others. Only building the worker
/// pool can fail the batch as a whole.
pub fn score_ensemble(inputs: &StateInputs, plans: &[Plan], config: &ScoreConfig) -> Result<Vec<ScoreResult<Scorecard>>> {
    if config.check_arcs {
        inputs.check_arcs(config.arc_tolerance);
    }

    let score_all = || {
        plans.par_iter()
            .map(|plan| score_plan_with(inputs, plan, config, &SqrtEntropy))
            .collect::<Vec<_>>()
    };

    let results = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(score_all),
        None => score_all(),
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!(plans = plans.len(), failed, "some plans could not be scored");
    }
    info!(plans = plans.len(), scored = plans.len() - failed, "scored ensemble");

    Ok(results)
}
