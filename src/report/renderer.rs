//! Static Table Renderer
//! Rasterizes a report to a PNG table image with a fixed theme.
//!
//! Layout:
//! 1. Title line: "Pending RMA Part Removal" with due date and chargeback total
//! 2. Header band: blue fill, white column labels
//! 3. One row per record: white cells, black text, light grid lines
//!
//! The image height grows with the row count; the width is fixed.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use super::{ConversionError, Report};
use crate::parse::HEADER_COLUMNS;

const IMAGE_WIDTH: u32 = 1200;
const MARGIN: u32 = 20;
const TITLE_H: u32 = 44;
const HEADER_H: u32 = 36;
const ROW_H: u32 = 30;

// Theme colors
const HEADER_FILL: RGBColor = RGBColor(0x00, 0x66, 0xcc);
const GRID: RGBColor = RGBColor(200, 200, 200);

// Column width shares: RMA, Model/Serial, Part, Price
const COL_PCTS: [f64; 4] = [0.14, 0.32, 0.34, 0.20];

pub struct TableRenderer;

impl TableRenderer {
    /// Render the report to in-memory PNG bytes.
    ///
    /// Content depends only on the table and due date; the caller decides
    /// where (and under what timestamped name) the bytes land.
    pub fn render_png(report: &Report) -> Result<Vec<u8>, ConversionError> {
        let n_rows = report.table.len() as u32;
        let height = MARGIN + TITLE_H + HEADER_H + n_rows * ROW_H + MARGIN;

        let mut buffer = vec![0u8; (IMAGE_WIDTH * height * 3) as usize];
        {
            let root =
                BitMapBackend::with_buffer(&mut buffer, (IMAGE_WIDTH, height)).into_drawing_area();
            Self::draw(&root, report, height).map_err(|e| ConversionError::Render(e.to_string()))?;
            root.present()
                .map_err(|e| ConversionError::Render(e.to_string()))?;
        }

        let img = RgbImage::from_raw(IMAGE_WIDTH, height, buffer)
            .ok_or_else(|| ConversionError::Encode("pixel buffer size mismatch".to_string()))?;

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| ConversionError::Encode(e.to_string()))?;

        Ok(bytes)
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        report: &Report,
        height: u32,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let table_w = IMAGE_WIDTH - 2 * MARGIN;
        let left = MARGIN as i32;
        let right = (MARGIN + table_w) as i32;

        // Title, centered
        let title = report.title();
        let title_style = ("sans-serif", 22).into_font().color(&BLACK);
        let (tw, _) = root.estimate_text_size(&title, &title_style)?;
        let tx = ((IMAGE_WIDTH.saturating_sub(tw)) / 2) as i32;
        root.draw(&Text::new(title, (tx, MARGIN as i32 + 6), title_style))?;

        // Header band
        let header_top = (MARGIN + TITLE_H) as i32;
        let header_bottom = header_top + HEADER_H as i32;
        root.draw(&Rectangle::new(
            [(left, header_top), (right, header_bottom)],
            HEADER_FILL.filled(),
        ))?;

        let col_edges = Self::column_edges(table_w);
        let header_style = ("sans-serif", 17).into_font().color(&WHITE);
        for (i, label) in HEADER_COLUMNS.iter().enumerate() {
            root.draw(&Text::new(
                label.to_string(),
                (left + col_edges[i] as i32 + 8, header_top + 10),
                header_style.clone(),
            ))?;
        }

        // Rows
        let cell_style = ("sans-serif", 15).into_font().color(&BLACK);
        for (row, record) in report.table.iter().enumerate() {
            let row_top = header_bottom + (row as u32 * ROW_H) as i32;

            let cells = [
                record.rma.as_str(),
                record.model_serial.as_str(),
                record.part.as_str(),
                record.price.as_str(),
            ];
            for (i, cell) in cells.iter().enumerate() {
                root.draw(&Text::new(
                    cell.to_string(),
                    (left + col_edges[i] as i32 + 8, row_top + 8),
                    cell_style.clone(),
                ))?;
            }

            // Separator under the row
            let y = row_top + ROW_H as i32;
            root.draw(&PathElement::new(vec![(left, y), (right, y)], GRID))?;
        }

        // Column separators and outer border
        let table_bottom = (height - MARGIN) as i32;
        for edge in col_edges.iter().skip(1) {
            let x = left + *edge as i32;
            root.draw(&PathElement::new(
                vec![(x, header_top), (x, table_bottom)],
                GRID,
            ))?;
        }
        root.draw(&Rectangle::new(
            [(left, header_top), (right, table_bottom)],
            BLACK.stroke_width(1),
        ))?;

        Ok(())
    }

    /// Left x-offset of each column within the table area.
    fn column_edges(table_w: u32) -> [u32; 4] {
        let mut edges = [0u32; 4];
        let mut acc = 0.0;
        for (i, pct) in COL_PCTS.iter().enumerate() {
            edges[i] = (table_w as f64 * acc) as u32;
            acc += pct;
        }
        edges
    }
}
