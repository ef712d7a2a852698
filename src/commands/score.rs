use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{error, info};

use crate::{
    cli::ScoreArgs,
    config::ScoreConfig,
    data::{Metadata, Plan, StateInputs},
    io::{read_adjacency, read_config, read_plan, read_precincts, read_shapes},
    scorecard::{Scorecard, score_ensemble},
};

/// One output line: a scorecard or the reason the plan could not be scored.
#[derive(Serialize)]
struct PlanLine<'a> {
    plan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scorecard: Option<&'a Scorecard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn load_config(args: &ScoreArgs) -> Result<ScoreConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => ScoreConfig::default(),
    };
    if args.threads.is_some() { config.threads = args.threads }
    if args.no_check_arcs { config.check_arcs = false }
    Ok(config)
}

fn open_output(path: Option<&Path>, force: bool) -> Result<Box<dyn Write>> {
    let Some(path) = path else { return Ok(Box::new(io::stdout().lock())) };
    if path.exists() && !force {
        bail!("[score] {} already exists (use --force to overwrite)", path.display());
    }
    let file = File::create(path)
        .with_context(|| format!("[score] Failed to create output file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

pub fn run(args: &ScoreArgs) -> Result<()> {
    let config = load_config(args)?;
    let mut out = open_output(args.output.as_deref(), args.force)?;

    info!(data = %args.data.display(), shapes = %args.shapes.display(), graph = %args.graph.display(), "loading state");
    let precincts = read_precincts(&args.data)?;
    let shapes = read_shapes(&args.shapes)?;
    let adjacency = read_adjacency(&args.graph)?;

    // Unreadable plans are reported in the output rather than aborting the run.
    let loaded = args.plans.iter()
        .map(|path| (path, read_plan(path)))
        .collect::<Vec<(&PathBuf, Result<Plan>)>>();

    let metadata = match args.districts {
        Some(districts) => Metadata::from_precincts(&precincts, districts),
        None => match loaded.iter().find_map(|(_, plan)| plan.as_ref().ok()) {
            Some(plan) => Metadata::from_plan(&precincts, plan),
            None => bail!("[score] None of the {} plan files could be read", loaded.len()),
        },
    };
    info!(precincts = precincts.len(), districts = metadata.num_districts(), counties = metadata.num_counties(), "loaded state");

    let inputs = StateInputs::new(precincts, shapes, &adjacency, metadata)
        .context("[score] Failed to build the precinct graph")?;

    let plans = loaded.iter()
        .filter_map(|(_, plan)| plan.as_ref().ok().cloned())
        .collect::<Vec<_>>();
    let mut scored = score_ensemble(&inputs, &plans, &config)?.into_iter();

    for (path, plan) in &loaded {
        let result = match plan {
            Ok(_) => scored.next().context("[score] Missing result for plan")?
                .map_err(|e| format!("{e}")),
            Err(e) => Err(format!("{e:#}")),
        };
        if let Err(e) = &result {
            error!(plan = %path.display(), error = %e, "failed to score plan");
        }

        let line = PlanLine {
            plan: path.display().to_string(),
            scorecard: result.as_ref().ok(),
            error: result.as_ref().err().cloned(),
        };
        serde_json::to_writer(&mut out, &line).context("[score] Failed to write scorecard")?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
