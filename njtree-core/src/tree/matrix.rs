use std::io::Write;

use crate::error::TreeResult;

use super::distance::DistanceTable;

/// Emit the full distance table as CSV: one comma-joined row of numeric
/// values per node, no header, no trailing separator.
///
/// Values print in their shortest round-trip form, so the leading leaf
/// block reproduces integer input exactly. Intended for use after the
/// engine has run; called earlier it emits whatever has been built so far.
pub fn write_matrix_csv<W: Write>(table: &DistanceTable, out: &mut W) -> TreeResult<()> {
    let n = table.num_nodes();
    for i in 0..n {
        for j in 0..n {
            if j > 0 {
                out.write_all(b",")?;
            }
            write!(out, "{}", table.distance(i, j)?)?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}
