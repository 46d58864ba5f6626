use crate::error::{TreeError, TreeResult};
use crate::tree::DistanceTable;
use csv::ReaderBuilder;
use std::io::Read;

/// Read a distance matrix in the simplified CSV input format.
///
/// The first data line is an empty field followed by the N taxa names.
/// Each of the next N lines is a taxon name followed by its N distances,
/// in the same order as the names. Lines starting with `#` are comments;
/// lines after the last data row are ignored. The matrix must be
/// symmetric with a zero diagonal and non-negative finite entries.
pub fn read_distance_csv<R: Read>(input: R) -> TreeResult<DistanceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(input);
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => {
            return Err(TreeError::InvalidInput {
                msg: "empty input".to_string(),
            })
        }
    };
    let header_line = line_of(&header);
    if header.get(0).map_or(true, |field| !field.is_empty()) {
        return Err(TreeError::MatrixFormat {
            msg: "first field of the taxa line must be empty".to_string(),
            line: header_line,
        });
    }

    let names: Vec<Box<str>> = header
        .iter()
        .skip(1)
        .map(|s| s.to_string().into_boxed_str())
        .collect();
    let n = names.len();
    if n == 0 {
        return Err(TreeError::MatrixFormat {
            msg: "no taxa names given".to_string(),
            line: header_line,
        });
    }
    for (idx, name) in names.iter().enumerate() {
        if name.is_empty() {
            return Err(TreeError::MatrixFormat {
                msg: format!("taxon name in column {} is empty", idx + 2),
                line: header_line,
            });
        }
        if names[..idx].iter().any(|seen| seen == name) {
            return Err(TreeError::MatrixFormat {
                msg: format!("duplicate taxon name '{name}'"),
                line: header_line,
            });
        }
    }

    let mut data = vec![0.0f64; n * n];
    for row in 0..n {
        let record = match records.next() {
            Some(record) => record?,
            None => {
                return Err(TreeError::InvalidInput {
                    msg: format!("expected {n} distance rows, got {row}"),
                })
            }
        };
        let line = line_of(&record);
        if record.len() != n + 1 {
            return Err(TreeError::MatrixFormat {
                msg: format!("expected {} fields, got {}", n + 1, record.len()),
                line,
            });
        }
        let row_name = record.get(0).unwrap_or("");
        if row_name != names[row].as_ref() {
            return Err(TreeError::MatrixFormat {
                msg: format!(
                    "row name '{row_name}' does not match taxon '{}'",
                    names[row]
                ),
                line,
            });
        }
        for col in 0..n {
            let field = record.get(col + 1).unwrap_or("");
            let value: f64 = field.parse().map_err(|_| TreeError::MatrixFormat {
                msg: format!("field '{field}' is not numeric"),
                line,
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(TreeError::MatrixFormat {
                    msg: format!("distance {value} must be finite and non-negative"),
                    line,
                });
            }
            data[row * n + col] = value;
        }
    }

    for i in 0..n {
        if data[i * n + i] != 0.0 {
            return Err(TreeError::InvalidInput {
                msg: format!("nonzero self-distance for taxon '{}'", names[i]),
            });
        }
        for j in (i + 1)..n {
            if data[i * n + j] != data[j * n + i] {
                return Err(TreeError::InvalidInput {
                    msg: format!(
                        "asymmetric distances between '{}' and '{}'",
                        names[i], names[j]
                    ),
                });
            }
        }
    }

    Ok(DistanceTable::new(names, data))
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
