use crate::domain::model::ResultRow;

const COLUMNS: [&str; 10] = [
    "timestamp_utc",
    "aar",
    "valtype",
    "fylke_id",
    "kommune_id",
    "kommune_navn",
    "partikode",
    "partinavn",
    "stemmer",
    "prosent",
];

fn cells(row: &ResultRow) -> [String; 10] {
    [
        row.timestamp_utc.to_rfc3339(),
        row.aar.clone(),
        row.valtype.code().to_string(),
        row.fylke_id.clone(),
        row.kommune_id.clone(),
        row.kommune_navn.clone().unwrap_or_default(),
        row.partikode.clone().unwrap_or_default(),
        row.partinavn.clone().unwrap_or_default(),
        row.stemmer.map(|v| v.to_string()).unwrap_or_default(),
        row.prosent.map(|v| v.to_string()).unwrap_or_default(),
    ]
}

/// Renders the full result table: header, separator, one line per row,
/// columns padded to their widest cell. Presentation only; rows keep their
/// harvest order.
pub fn render_table(rows: &[ResultRow]) -> String {
    let table: Vec<[String; 10]> = rows.iter().map(cells).collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.len()).collect();
    for row in &table {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &widths, COLUMNS.iter().map(|c| c.to_string()));
    push_line(&mut out, &widths, widths.iter().map(|w| "-".repeat(*w)));
    for row in &table {
        push_line(&mut out, &widths, row.iter().cloned());
    }
    out
}

fn push_line(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    let line = cells
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
