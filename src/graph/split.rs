use crate::{
    data::{Metadata, Plan},
    error::{ScoreError, ScoreResult},
    graph::Graph,
};

impl Graph {
    /// District index (into `metadata`) of every vertex under `plan`.
    ///
    /// The plan must cover exactly the vertices of the graph: a precinct the
    /// graph does not know, a precinct assigned twice, or an unassigned vertex
    /// all fail.
    pub fn assign(&self, plan: &Plan, metadata: &Metadata) -> ScoreResult<Vec<usize>> {
        if plan.is_empty() { return Err(ScoreError::EmptyPlan) }

        let mut assignment = vec![usize::MAX; self.node_count()];
        for a in plan.assignments() {
            let node = self.node(a.geoid.as_str())
                .ok_or_else(|| ScoreError::MissingPrecinct { geoid: a.geoid.clone(), table: "graph" })?;
            if assignment[node] != usize::MAX {
                return Err(ScoreError::DuplicateAssignment { geoid: a.geoid.clone() });
            }
            assignment[node] = metadata.district_index(&a.district)?;
        }

        let covered = assignment.iter().filter(|&&d| d != usize::MAX).count();
        if covered != self.node_count() {
            return Err(ScoreError::VertexMismatch { plan: covered, graph: self.node_count() });
        }
        Ok(assignment)
    }

    /// Fail unless `assignment` has exactly one entry per vertex.
    pub(crate) fn check_assignment(&self, assignment: &[usize]) -> ScoreResult<()> {
        if assignment.len() != self.node_count() {
            return Err(ScoreError::VertexMismatch { plan: assignment.len(), graph: self.node_count() });
        }
        Ok(())
    }

    /// Member vertices of each of `num_districts` districts, in vertex order.
    pub(crate) fn district_members(assignment: &[usize], num_districts: usize) -> ScoreResult<Vec<Vec<usize>>> {
        let mut members = vec![Vec::new(); num_districts];
        for (node, &district) in assignment.iter().enumerate() {
            members.get_mut(district)
                .ok_or(ScoreError::DistrictOutOfRange { index: district, districts: num_districts })?
                .push(node);
        }
        Ok(members)
    }

    /// One induced subgraph per district: edges crossing district lines are dropped.
    pub fn split_by_district(&self, assignment: &[usize], num_districts: usize) -> ScoreResult<Vec<Graph>> {
        self.check_assignment(assignment)?;

        Ok(Self::district_members(assignment, num_districts)?.iter()
            .map(|nodes| self.induced_subgraph(nodes))
            .collect())
    }
}
