use log::warn;

use crate::error::{TreeError, TreeResult};

use super::distance::DistanceTable;
use super::graph::{Edge, NodeGraph};

/// Reconstruct the unrooted tree, discarding the edge stream.
pub fn neighbor_joining(table: &mut DistanceTable) -> TreeResult<NodeGraph> {
    neighbor_joining_with(table, |_| {})
}

/// Reconstruct the unrooted tree from the distances in `table`.
///
/// Each synthesized edge is passed to `on_edge` as soon as it exists.
/// For N taxa this emits 2N-3 edges (none for a single taxon): two per
/// merge while more than two nodes remain active, then one final edge
/// connecting the last two.
pub fn neighbor_joining_with<F>(table: &mut DistanceTable, mut on_edge: F) -> TreeResult<NodeGraph>
where
    F: FnMut(&Edge),
{
    let n = table.num_leaves();
    if n < 1 {
        return Err(TreeError::InvalidInput {
            msg: "at least one taxon is required".to_string(),
        });
    }

    let mut graph = NodeGraph::with_nodes(n);

    while table.active().len() > 2 {
        merge_step(table, &mut graph, &mut on_edge)?;
    }

    if table.active().len() == 2 {
        let (a, b) = (table.active()[0], table.active()[1]);
        let length = table.active_distance(a, b)?;
        graph.add_edge(a, b, length)?;
        on_edge(&Edge { a, b, length });
    }

    Ok(graph)
}

fn merge_step<F>(table: &mut DistanceTable, graph: &mut NodeGraph, on_edge: &mut F) -> TreeResult<()>
where
    F: FnMut(&Edge),
{
    let active = table.active().to_vec();
    let r = active.len() as f64;
    let totals: Vec<f64> = active
        .iter()
        .map(|&i| table.total_active_distance(i))
        .collect::<TreeResult<_>>()?;

    // The active list is ascending, so a strict minimum scan breaks Q ties
    // toward the smaller i, then the smaller j.
    let mut min_q = f64::INFINITY;
    let (mut best_i, mut best_j) = (0, 0);
    let (mut total_i, mut total_j) = (0.0, 0.0);
    for (ai, &i) in active.iter().enumerate() {
        for (aj, &j) in active.iter().enumerate().skip(ai + 1) {
            let q = table.active_distance(i, j)? - (totals[ai] + totals[aj]) / (r - 2.0);
            if q < min_q {
                min_q = q;
                best_i = i;
                best_j = j;
                total_i = totals[ai];
                total_j = totals[aj];
            }
        }
    }
    let (i, j) = (best_i, best_j);

    let dij = table.active_distance(i, j)?;
    let raw_i = 0.5 * dij + (total_i - total_j) / (2.0 * (r - 2.0));
    let length_i = clamp_branch(raw_i, i);
    let length_j = clamp_branch(dij - raw_i, j);

    let name = format!("#{}", table.num_nodes());
    let u = table.merge_into(i, j, name.into_boxed_str(), |t, k| {
        Ok(0.5 * (t.active_distance(i, k)? + t.active_distance(j, k)? - dij))
    })?;

    // The new row covers every node active at merge time; the distances to
    // the merged pair are the branch-length estimates themselves.
    table.set_distance(u, i, length_i)?;
    table.set_distance(u, j, length_j)?;

    let created = graph.add_node();
    debug_assert_eq!(created, u);
    graph.add_edge(i, u, length_i)?;
    graph.add_edge(j, u, length_j)?;
    on_edge(&Edge {
        a: i,
        b: u,
        length: length_i,
    });
    on_edge(&Edge {
        a: j,
        b: u,
        length: length_j,
    });
    Ok(())
}

// Negative estimates are a known artifact of neighbor joining on noisy
// input; they are reported but never fatal.
fn clamp_branch(length: f64, node: usize) -> f64 {
    if length < 0.0 {
        warn!("negative branch length {length} at node {node}, clamping to 0");
        0.0
    } else {
        length
    }
}
