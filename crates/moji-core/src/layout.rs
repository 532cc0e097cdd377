//! Two-pass layout of a normalized line
//!
//! The measurement pass measures the line with every placeholder replaced by
//! [`REFERENCE_CHAR`] and centres it on the canvas. The render pass walks the
//! same line again and emits draw commands, giving each placeholder exactly
//! one reference-character advance. Both passes read the reference width
//! from the same [`Measurement`], so the emoji slots cannot drift between
//! them.

// this_file: crates/moji-core/src/layout.rs

use crate::{
    is_variation_selector,
    traits::TextMetrics,
    types::{DrawCommand, Layout, NormalizedDocument},
    PLACEHOLDER, REFERENCE_CHAR,
};

/// Output of the measurement pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub start_x: f32,
    pub y: f32,
    pub total_width: f32,
    /// Advance of [`REFERENCE_CHAR`]
    pub unit_width: f32,
}

/// Lays out a single, horizontally and vertically centred line
pub struct LayoutEngine<'a> {
    metrics: &'a dyn TextMetrics,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(metrics: &'a dyn TextMetrics) -> Self {
        Self { metrics }
    }

    /// Both passes in one call
    pub fn layout(&self, doc: &NormalizedDocument, canvas_width: u32, canvas_height: u32) -> Layout {
        let measurement = self.measure(doc, canvas_width, canvas_height);
        self.place(doc, measurement)
    }

    /// Measurement pass
    ///
    /// Variation selectors are dropped from the measured string on purpose:
    /// the render pass skips them too, so both passes see the same text.
    pub fn measure(
        &self,
        doc: &NormalizedDocument,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Measurement {
        let stand_in: String = doc
            .text_with(REFERENCE_CHAR)
            .chars()
            .filter(|&ch| !is_variation_selector(ch))
            .collect();

        let total_width = self.metrics.measure(&stand_in);
        let unit_width = self.metrics.measure_char(REFERENCE_CHAR);

        Measurement {
            start_x: (canvas_width as f32 - total_width) / 2.0,
            y: canvas_height as f32 / 2.0,
            total_width,
            unit_width,
        }
    }

    /// Render pass: one command per drawable character, in text order
    pub fn place(&self, doc: &NormalizedDocument, measurement: Measurement) -> Layout {
        let Measurement {
            start_x,
            y,
            total_width,
            unit_width,
        } = measurement;

        let mut x = start_x;
        let mut keys = doc.keys.iter();
        let mut commands = Vec::with_capacity(doc.text.len());

        for (index, ch) in doc.text.chars().enumerate() {
            if ch == PLACEHOLDER {
                // The slot is consumed even when there is nothing to draw in it
                x += unit_width;
                match keys.next() {
                    Some(key) => commands.push(DrawCommand::Image {
                        key: key.clone(),
                        x,
                        y,
                        size: unit_width,
                    }),
                    None => log::warn!(
                        "Asset key list exhausted at placeholder (char index {}), skipping",
                        index
                    ),
                }
                continue;
            }

            if is_variation_selector(ch) {
                continue;
            }

            let advance = self.metrics.measure_char(ch);
            commands.push(DrawCommand::Text { ch, x, y });
            x += advance;
        }

        log::debug!(
            "Layout: {} commands, measured {:.2}px, walked {:.2}px, unit {:.2}px",
            commands.len(),
            total_width,
            x - start_x,
            unit_width
        );

        Layout {
            start_x,
            y,
            total_width,
            unit_width,
            end_x: x,
            commands,
        }
    }
}
