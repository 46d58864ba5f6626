use crate::error::{TreeError, TreeResult};

use super::distance::DistanceTable;

/// Pick the rooting outlier: by exact name when one was supplied,
/// otherwise the leaf farthest from all the others.
pub fn select_outlier(table: &DistanceTable, name: Option<&str>) -> TreeResult<usize> {
    match name {
        Some(name) => select_by_name(table, name),
        None => select_by_max_distance(table),
    }
}

pub fn select_by_name(table: &DistanceTable, name: &str) -> TreeResult<usize> {
    for id in 0..table.num_leaves() {
        if table.name(id)? == name {
            return Ok(id);
        }
    }
    Err(TreeError::OutlierNotFound {
        name: name.to_string(),
    })
}

/// The leaf with the greatest total distance to the other leaves, ties
/// broken toward the smallest id. Only the original leaf block is
/// consulted, never the post-merge estimates.
pub fn select_by_max_distance(table: &DistanceTable) -> TreeResult<usize> {
    let n = table.num_leaves();
    if n == 0 {
        return Err(TreeError::InvalidInput {
            msg: "at least one taxon is required".to_string(),
        });
    }
    let mut best = 0;
    let mut best_total = f64::NEG_INFINITY;
    for i in 0..n {
        let mut total = 0.0;
        for k in 0..n {
            if k != i {
                total += table.distance(i, k)?;
            }
        }
        if total > best_total {
            best_total = total;
            best = i;
        }
    }
    Ok(best)
}
