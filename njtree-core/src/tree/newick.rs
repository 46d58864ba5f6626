use crate::error::TreeResult;

use super::distance::DistanceTable;
use super::graph::NodeGraph;

/// Render the tree in Newick form, rooted at the outlier's unique
/// neighbor. The outlier itself is excluded from the output.
///
/// Two degenerate shapes are handled explicitly: a single-leaf tree is
/// just that leaf's name, and a two-leaf tree puts the full edge length
/// on the outlier and a zero length on the root leaf.
pub fn to_newick(table: &DistanceTable, graph: &NodeGraph, outlier: usize) -> TreeResult<String> {
    let start = graph.neighbors(outlier)?;
    let mut out = String::new();

    if start.is_empty() {
        write_label(&mut out, table.name(outlier)?);
        out.push(';');
        return Ok(out);
    }

    let root = start[0];
    if graph.degree(root.id)? == 1 {
        out.push('(');
        write_label(&mut out, table.name(outlier)?);
        write_length(&mut out, root.length);
        out.push(',');
        write_label(&mut out, table.name(root.id)?);
        write_length(&mut out, 0.0);
        out.push(')');
    } else {
        write_subtree(table, graph, root.id, outlier, &mut out)?;
    }
    out.push(';');
    Ok(out)
}

fn write_subtree(
    table: &DistanceTable,
    graph: &NodeGraph,
    id: usize,
    from: usize,
    out: &mut String,
) -> TreeResult<()> {
    let children: Vec<_> = graph
        .neighbors(id)?
        .iter()
        .filter(|nb| nb.id != from)
        .copied()
        .collect();

    if children.is_empty() {
        // Leaf: its only neighbor is the one we arrived from.
        write_label(out, table.name(id)?);
        return Ok(());
    }

    out.push('(');
    for (i, nb) in children.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_subtree(table, graph, nb.id, id, out)?;
        write_length(out, nb.length);
    }
    out.push(')');
    Ok(())
}

fn write_length(out: &mut String, length: f64) {
    out.push(':');
    out.push_str(&format!("{:.2}", length));
}

fn needs_quoting(label: &str) -> bool {
    label.chars().any(|ch| {
        ch.is_whitespace() || matches!(ch, ':' | ',' | '(' | ')' | ';' | '[' | ']' | '\'')
    })
}

fn write_label(out: &mut String, label: &str) {
    if label.is_empty() {
        return;
    }
    if needs_quoting(label) {
        out.push('\'');
        for ch in label.chars() {
            if ch == '\'' {
                out.push_str("''");
            } else {
                out.push(ch);
            }
        }
        out.push('\'');
    } else {
        out.push_str(label);
    }
}
