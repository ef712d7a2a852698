mod common;

use std::f64::consts::PI;

use districtscore::{
    Adjacency, DistrictAggregates, DistrictId, ScoreConfig, ScoreError, StateInputs, analyze_plan, score_ensemble,
    score_plan, SqrtEntropy,
};

use common::GridState;

#[test]
fn four_quadrant_grid_scorecard() {
    let state = GridState::new(10, 10);
    let inputs = state.inputs(4);
    let scorecard = score_plan(&inputs, &state.quadrant_plan(), &ScoreConfig::default()).unwrap();

    assert_eq!(scorecard.num_districts, 4);
    assert_eq!(scorecard.num_counties, 3);
    assert_eq!(scorecard.total_pop, 10_295);
    assert_eq!(scorecard.cut_edges, 20);
    assert!((scorecard.spanning_tree_score - 80.56).abs() < 0.01);

    // 5 x 5 squares.
    for shape in &scorecard.details.shapes {
        assert_eq!(shape.area, 25.0);
        assert_eq!(shape.perimeter, 20.0);
        assert!((shape.diameter - 50f64.sqrt()).abs() < 1e-9);
    }
    assert_eq!(scorecard.reock, ((2.0 / PI) * 1e4).round() / 1e4);
    assert_eq!(scorecard.polsby_popper, ((PI / 4.0) * 1e4).round() / 1e4);

    // Every county band spans both halves of the grid.
    assert_eq!(scorecard.counties_split, 3);
    assert_eq!(scorecard.county_splits, 5);
    assert!(scorecard.county_splitting > 1.0);

    assert_eq!(scorecard.demographics["white"], 0.5);
    let vote = scorecard.estimated_vote_pct.unwrap();
    assert!(vote > 0.0 && vote < 1.0);
}

#[test]
fn cxd_margins_match_aggregates() {
    let state = GridState::new(10, 10);
    let inputs = state.inputs(4);
    let analysis = analyze_plan(&inputs, &state.quadrant_plan(), &ScoreConfig::default(), &SqrtEntropy).unwrap();
    let DistrictAggregates { cxd, pop_by_district, total_pop, .. } = &analysis.aggregates;

    assert_eq!(cxd.sum(), *total_pop);
    for (i, row) in cxd.outer_iter().enumerate() {
        assert_eq!(row.sum(), pop_by_district[i]);
    }

    let mut by_county = vec![0i64; inputs.metadata.num_counties()];
    for (geoid, precinct) in &inputs.precincts {
        by_county[inputs.metadata.county_index(geoid).unwrap()] += precinct.total_pop;
    }
    assert_eq!(analysis.aggregates.pop_by_county(), by_county);
}

#[test]
fn rescoring_is_deterministic() {
    let state = GridState::new(12, 9);
    let inputs = state.inputs(4);
    let plan = state.quadrant_plan();
    let config = ScoreConfig::default();

    let first = score_plan(&inputs, &plan, &config).unwrap();
    let second = score_plan(&inputs, &plan, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
}

#[test]
fn sentinel_only_affects_perimeter() {
    let state = GridState::new(10, 10);
    let plan = state.quadrant_plan();
    let config = ScoreConfig::default();
    let with_border = score_plan(&state.inputs(4), &plan, &config).unwrap();

    let adjacency = state.adjacency.iter()
        .map(|(id, neighbors)| (id.clone(), neighbors.iter().filter(|n| !n.is_out_of_state()).cloned().collect()))
        .collect::<Adjacency>();
    let inputs = StateInputs::new(state.precincts.clone(), state.shapes.clone(), &adjacency, state.inputs(4).metadata).unwrap();
    let without_border = score_plan(&inputs, &plan, &config).unwrap();

    assert_eq!(with_border.cut_edges, without_border.cut_edges);
    assert_eq!(with_border.spanning_tree_score, without_border.spanning_tree_score);
    for (a, b) in with_border.details.shapes.iter().zip(&without_border.details.shapes) {
        assert_eq!(a.perimeter - b.perimeter, 10.0);
        assert_eq!(a.area, b.area);
    }
}

#[test]
fn log_det_threshold_does_not_change_scores() {
    let state = GridState::new(10, 10);
    let inputs = state.inputs(4);
    let plan = state.quadrant_plan();
    let exact = score_plan(&inputs, &plan, &ScoreConfig { log_det_threshold: 100, ..Default::default() }).unwrap();
    let logdet = score_plan(&inputs, &plan, &ScoreConfig { log_det_threshold: 0, ..Default::default() }).unwrap();
    assert_eq!(exact.spanning_tree_score, logdet.spanning_tree_score);
}

#[test]
fn disconnected_district_is_degenerate() {
    let state = GridState::new(10, 10);
    let plan = state.plan(|r, c| if (r, c) == (0, 0) { 4 } else { 1 + (r >= 5) as u32 * 2 + (c >= 5) as u32 });
    let err = score_plan(&state.inputs(4), &plan, &ScoreConfig::default()).unwrap_err();
    assert_eq!(err, ScoreError::DisconnectedDistrict(DistrictId::Number(4)));
}

#[test]
fn plan_must_cover_the_graph() {
    let state = GridState::new(4, 4);
    let inputs = state.inputs(4);
    let plan = state.quadrant_plan();

    let partial = plan.assignments()[1..].iter().cloned().collect();
    assert_eq!(
        score_plan(&inputs, &partial, &ScoreConfig::default()).unwrap_err(),
        ScoreError::VertexMismatch { plan: 15, graph: 16 },
    );

    let mut extra = plan.assignments().to_vec();
    extra.push(districtscore::Assignment::new("34001999999", 1u32));
    assert!(matches!(
        score_plan(&inputs, &districtscore::Plan::new(extra), &ScoreConfig::default()),
        Err(ScoreError::MissingPrecinct { .. })
    ));
}

#[test]
fn precinct_without_shape_fails_the_plan() {
    let mut state = GridState::new(4, 4);
    let missing = common::geoid(4, 1, 2);
    state.shapes.remove(&missing);

    assert_eq!(
        score_plan(&state.inputs(4), &state.quadrant_plan(), &ScoreConfig::default()).unwrap_err(),
        ScoreError::MissingPrecinct { geoid: missing, table: "shapes" },
    );
}

#[test]
fn ensemble_isolates_failing_plans() {
    let state = GridState::new(10, 10);
    let inputs = state.inputs(4);
    let good = state.quadrant_plan();
    let halves = state.plan(|_, c| 1 + (c * 4 / 10) as u32);
    let bad = state.plan(|r, c| if (r, c) == (9, 9) { 1 } else { 1 + (r >= 5) as u32 * 2 + (c >= 5) as u32 });

    let config = ScoreConfig { threads: Some(2), ..Default::default() };
    let results = score_ensemble(&inputs, &[good.clone(), bad, halves.clone()], &config).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), &score_plan(&inputs, &good, &config).unwrap());
    assert_eq!(results[1].as_ref().unwrap_err(), &ScoreError::DisconnectedDistrict(DistrictId::Number(1)));
    assert_eq!(results[2].as_ref().unwrap(), &score_plan(&inputs, &halves, &config).unwrap());
}
