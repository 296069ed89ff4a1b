use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{error, info};

use crate::models::{Detection, DistanceRecord};

/// Numeric cells are written with two decimals in every format.
pub const NUMERIC_PRECISION: usize = 2;

/// One exported row: either a located object or a distance between two.
///
/// The two kinds stay as distinct typed variants through the pipeline and
/// are only flattened to cells at the serialization boundary. Cells a row
/// kind does not define are blank, never zero.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultRow {
    Detection { object: String, x: f32, y: f32 },
    Distance { object: String, distance: f32 },
}

/// Ordered rows plus the column layout both exporters share.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn from_results(detections: &[Detection], distances: &[DistanceRecord]) -> Self {
        let mut rows: Vec<ResultRow> = detections
            .iter()
            .map(|d| ResultRow::Detection {
                object: d.target.clone(),
                x: d.center.0,
                y: d.center.1,
            })
            .collect();
        rows.extend(distances.iter().map(|r| ResultRow::Distance {
            object: r.label(),
            distance: r.distance,
        }));
        Self { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn has_distance(&self) -> bool {
        self.rows
            .iter()
            .any(|r| matches!(r, ResultRow::Distance { .. }))
    }

    /// `Object,X,Y` always; `Distance` appended only when distance rows exist.
    pub fn header(&self) -> Vec<&'static str> {
        let mut header = vec!["Object", "X", "Y"];
        if self.has_distance() {
            header.push("Distance");
        }
        header
    }

    /// Flatten one row into cells matching `header()`. Cells the row kind
    /// does not define serialize as the empty string.
    pub fn cells(&self, row: &ResultRow) -> Vec<String> {
        let mut cells = match row {
            ResultRow::Detection { object, x, y } => vec![
                object.clone(),
                format!("{x:.prec$}", prec = NUMERIC_PRECISION),
                format!("{y:.prec$}", prec = NUMERIC_PRECISION),
            ],
            ResultRow::Distance { object, .. } => {
                vec![object.clone(), String::new(), String::new()]
            }
        };
        if self.has_distance() {
            match row {
                ResultRow::Distance { distance, .. } => {
                    cells.push(format!("{distance:.prec$}", prec = NUMERIC_PRECISION));
                }
                ResultRow::Detection { .. } => cells.push(String::new()),
            }
        }
        cells
    }
}

/// A tabular output format. The mandatory implementation writes CSV; the
/// spreadsheet implementation exists only when the `xlsx` feature is
/// compiled in, which is a startup configuration fact rather than a
/// runtime failure to catch.
pub trait TabularExporter {
    fn format_name(&self) -> &'static str;
    fn path(&self) -> &Path;
    fn write(&self, table: &ResultTable) -> anyhow::Result<()>;
}

pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TabularExporter for CsvExporter {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, table: &ResultTable) -> anyhow::Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        writer.write_record(table.header())?;
        for row in table.rows() {
            writer.write_record(table.cells(row))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(feature = "xlsx")]
pub struct XlsxExporter {
    path: PathBuf,
}

#[cfg(feature = "xlsx")]
impl XlsxExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "xlsx")]
impl TabularExporter for XlsxExporter {
    fn format_name(&self) -> &'static str {
        "xlsx"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, table: &ResultTable) -> anyhow::Result<()> {
        use rust_xlsxwriter::Workbook;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, name) in table.header().iter().enumerate() {
            worksheet.write_string(0, col as u16, *name)?;
        }
        for (row_idx, row) in table.rows().iter().enumerate() {
            for (col, cell) in table.cells(row).iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let r = row_idx as u32 + 1;
                let c = col as u16;
                // Numeric columns stay numbers in the spreadsheet.
                match cell.parse::<f64>() {
                    Ok(value) if col > 0 => worksheet.write_number(r, c, value)?,
                    _ => worksheet.write_string(r, c, cell.as_str())?,
                };
            }
        }

        workbook
            .save(&self.path)
            .with_context(|| format!("failed to save {}", self.path.display()))?;
        Ok(())
    }
}

/// Run every configured exporter, best-effort: a failing format is logged
/// and skipped, the remaining formats still run. Returns how many wrote
/// successfully.
pub fn export_all(table: &ResultTable, exporters: &[Box<dyn TabularExporter>]) -> usize {
    let mut written = 0;
    for exporter in exporters {
        match exporter.write(table) {
            Ok(()) => {
                info!(
                    "wrote {} table to {}",
                    exporter.format_name(),
                    exporter.path().display()
                );
                written += 1;
            }
            Err(e) => {
                error!(
                    "{} export to {} failed: {:#}",
                    exporter.format_name(),
                    exporter.path().display(),
                    e
                );
            }
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ResultTable {
        let detections = [
            Detection {
                target: "earth".into(),
                center: (50.0, 50.0),
                radius: 20.0,
            },
            Detection {
                target: "mars".into(),
                center: (50.0, 150.0),
                radius: 12.0,
            },
        ];
        let distances = [DistanceRecord {
            from: "earth".into(),
            to: "mars".into(),
            distance: 100.0,
        }];
        ResultTable::from_results(&detections, &distances)
    }

    #[test]
    fn header_adds_distance_column_only_when_present() {
        let detections = [Detection {
            target: "earth".into(),
            center: (1.0, 2.0),
            radius: 3.0,
        }];
        let without = ResultTable::from_results(&detections, &[]);
        assert_eq!(without.header(), vec!["Object", "X", "Y"]);
        assert_eq!(sample_table().header(), vec!["Object", "X", "Y", "Distance"]);
    }

    #[test]
    fn unused_cells_are_blank_not_zero() {
        let table = sample_table();
        let rows = table.rows();
        let detection_cells = table.cells(&rows[0]);
        assert_eq!(detection_cells, vec!["earth", "50.00", "50.00", ""]);
        let distance_cells = table.cells(&rows[2]);
        assert_eq!(distance_cells, vec!["earth_mars_distance", "", "", "100.00"]);
    }

    #[test]
    fn empty_results_give_empty_table() {
        let table = ResultTable::from_results(&[], &[]);
        assert!(table.is_empty());
        assert_eq!(table.header(), vec!["Object", "X", "Y"]);
    }
}
