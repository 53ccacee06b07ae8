use std::io::Write;
use std::path::Path;

use crate::data::dataset::PlotPoint;
use crate::data::selection::AxisSelection;
use crate::error::Result;

/// Write the plotted points as CSV, one row per point, with the selected
/// variable names as header. Missing readings are written as empty cells.
pub fn write_points_csv<W: Write>(
    writer: W,
    selection: &AxisSelection,
    points: &[PlotPoint],
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([selection.x.as_str(), selection.y.as_str()])?;
    for p in points {
        wtr.write_record([fmt_cell(p.x), fmt_cell(p.y)])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_points_csv_path<P: AsRef<Path>>(
    path: P,
    selection: &AxisSelection,
    points: &[PlotPoint],
) -> Result<()> {
    let f = std::fs::File::create(path)?;
    write_points_csv(f, selection, points)
}

fn fmt_cell(v: f64) -> String {
    if v.is_finite() {
        v.to_string()
    } else {
        String::new()
    }
}
