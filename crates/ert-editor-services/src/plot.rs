//! SVG density plots for the DIST hover.
//!
//! The plot is a small static image: the density sampled across the preview domain, mapped
//! through independent x and y scales into a `width x height` box, then embedded in markdown
//! as a base64 data URL.

use std::fmt::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::preview::{AxisScale, DistributionPreview, Sampling};

/// Colour scheme of the plot, supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotTheme {
    #[default]
    Light,
    Dark,
}

struct Palette {
    background: &'static str,
    axis: &'static str,
    curve: &'static str,
    text: &'static str,
}

impl PlotTheme {
    fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: "#ffffff",
                axis: "#616161",
                curve: "#0066b8",
                text: "#333333",
            },
            Self::Dark => Palette {
                background: "#1e1e1e",
                axis: "#9d9d9d",
                curve: "#4fc1ff",
                text: "#cccccc",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub theme: PlotTheme,
    /// Number of density samples for continuous families.
    pub samples: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 235,
            height: 235,
            theme: PlotTheme::Light,
            samples: 100,
        }
    }
}

const MARGIN_LEFT: f64 = 36.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 22.0;

/// Maps a closed domain interval onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return 0.5 * (r0 + r1);
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum XScale {
    Linear(LinearScale),
    /// Linear in `ln(x)`.
    Log(LinearScale),
}

impl XScale {
    fn new(scale: AxisScale, domain: (f64, f64), range: (f64, f64)) -> Self {
        match scale {
            AxisScale::Linear => Self::Linear(LinearScale { domain, range }),
            AxisScale::Log => Self::Log(LinearScale {
                domain: (domain.0.ln(), domain.1.ln()),
                range,
            }),
        }
    }

    fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Linear(scale) => scale.apply(x),
            Self::Log(scale) => scale.apply(x.ln()),
        }
    }
}

/// Evaluate the density of `preview` at the plot's sample points.
///
/// Continuous families are sampled at `samples` evenly spaced points (log-spaced on a log
/// axis); discrete families at their support points. Non-finite densities are dropped.
pub fn sample(preview: &DistributionPreview, samples: usize) -> Vec<(f64, f64)> {
    let (lo, hi) = preview.domain;
    let xs: Vec<f64> = match &preview.sampling {
        Sampling::Points(points) => points.clone(),
        Sampling::Continuous => {
            let n = samples.max(2);
            let step = |i: usize| i as f64 / (n - 1) as f64;
            match preview.scale {
                AxisScale::Linear => (0..n).map(|i| lo + step(i) * (hi - lo)).collect(),
                AxisScale::Log => {
                    let (ln_lo, ln_hi) = (lo.ln(), hi.ln());
                    (0..n)
                        .map(|i| (ln_lo + step(i) * (ln_hi - ln_lo)).exp())
                        .collect()
                }
            }
        }
    };

    xs.into_iter()
        .map(|x| (x, preview.distribution.pdf(x)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

/// Render the density of `preview` as a standalone SVG document.
pub fn render_svg(preview: &DistributionPreview, options: &PlotOptions) -> String {
    let points = sample(preview, options.samples);
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = write_svg(&mut svg, preview, &points, options);
    svg
}

fn write_svg(
    out: &mut impl Write,
    preview: &DistributionPreview,
    points: &[(f64, f64)],
    options: &PlotOptions,
) -> fmt::Result {
    let palette = options.theme.palette();
    let (width, height) = (f64::from(options.width), f64::from(options.height));
    let (left, right) = (MARGIN_LEFT, (width - MARGIN_RIGHT).max(MARGIN_LEFT + 1.0));
    let (top, bottom) = (MARGIN_TOP, (height - MARGIN_BOTTOM).max(MARGIN_TOP + 1.0));

    let y_max = points.iter().map(|(_, y)| *y).fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };
    let x_scale = XScale::new(preview.scale, preview.domain, (left, right));
    let y_scale = LinearScale {
        domain: (0.0, y_max),
        range: (bottom, top),
    };

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = options.width,
        h = options.height
    )?;
    writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        palette.background
    )?;
    writeln!(
        out,
        r#"<path d="M{left:.2},{top:.2}V{bottom:.2}H{right:.2}" fill="none" stroke="{}" stroke-width="1"/>"#,
        palette.axis
    )?;

    match preview.sampling {
        Sampling::Continuous => {
            let mut d = String::new();
            for (idx, (x, y)) in points.iter().enumerate() {
                let cmd = if idx == 0 { 'M' } else { 'L' };
                write!(d, "{cmd}{:.2},{:.2}", x_scale.apply(*x), y_scale.apply(*y))?;
            }
            writeln!(
                out,
                r#"<path d="{d}" fill="none" stroke="{}" stroke-width="2"/>"#,
                palette.curve
            )?;
        }
        Sampling::Points(_) => {
            for (x, y) in points {
                let (px, py) = (x_scale.apply(*x), y_scale.apply(*y));
                writeln!(
                    out,
                    r#"<line x1="{px:.2}" y1="{bottom:.2}" x2="{px:.2}" y2="{py:.2}" stroke="{}" stroke-width="2"/>"#,
                    palette.curve
                )?;
                writeln!(
                    out,
                    r#"<circle cx="{px:.2}" cy="{py:.2}" r="3" fill="{}"/>"#,
                    palette.curve
                )?;
            }
        }
    }

    let label_y = bottom + 15.0;
    for (x, anchor) in [(preview.domain.0, "start"), (preview.domain.1, "end")] {
        writeln!(
            out,
            r#"<text x="{:.2}" y="{label_y:.2}" font-size="10" font-family="sans-serif" text-anchor="{anchor}" fill="{}">{}</text>"#,
            x_scale.apply(x),
            palette.text,
            format_tick(x)
        )?;
    }
    writeln!(
        out,
        r#"<text x="{:.2}" y="{:.2}" font-size="10" font-family="sans-serif" text-anchor="end" fill="{}">{}</text>"#,
        left - 4.0,
        top + 8.0,
        palette.text,
        format_tick(y_max)
    )?;
    write!(out, "</svg>")
}

/// Compact axis label.
fn format_tick(v: f64) -> String {
    let abs = v.abs();
    if abs != 0.0 && !(1e-3..1e4).contains(&abs) {
        return format!("{v:.1e}");
    }
    let fixed = format!("{v:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `data:` URL carrying the SVG document.
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Markdown image block showing the density plot of `preview`.
pub fn markdown_image(preview: &DistributionPreview, options: &PlotOptions) -> String {
    let url = svg_data_url(&render_svg(preview, options));
    format!("![{} density]({url})", preview.keyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::preview_for_tokens;
    use ert_editor_lang::{Language, tokenize};

    fn preview(line: &str) -> DistributionPreview {
        preview_for_tokens(&tokenize(Language::Dist, line)).unwrap()
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale {
            domain: (0.0, 10.0),
            range: (100.0, 0.0),
        };
        assert_eq!(scale.apply(0.0), 100.0);
        assert_eq!(scale.apply(5.0), 50.0);
        assert_eq!(scale.apply(10.0), 0.0);
    }

    #[test]
    fn test_log_scale_is_linear_in_log_space() {
        let scale = XScale::new(AxisScale::Log, (1.0, 100.0), (0.0, 200.0));
        assert!((scale.apply(10.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_continuous_sampling() {
        let p = preview("PORO NORMAL 0.3 0.05");
        let points = sample(&p, 100);
        assert_eq!(points.len(), 100);
        assert!(points[0].0.abs() < 1e-12);
        assert!((points[99].0 - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_log_sampling_is_geometric() {
        let p = preview("X LOGUNIF 1 100");
        let points = sample(&p, 3);
        assert!((points[1].0 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_discrete_sampling_uses_support() {
        let p = preview("X DUNIF 3 0 10");
        let xs: Vec<f64> = sample(&p, 100).into_iter().map(|(x, _)| x).collect();
        assert_eq!(xs, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_svg_structure_and_theme() {
        let p = preview("X DUNIF 3 0 10");
        let light = render_svg(&p, &PlotOptions::default());
        assert!(light.starts_with("<svg"));
        assert!(light.ends_with("</svg>"));
        assert_eq!(light.matches("<circle").count(), 3);
        assert!(light.contains("#ffffff"));

        let dark = render_svg(
            &p,
            &PlotOptions {
                theme: PlotTheme::Dark,
                ..PlotOptions::default()
            },
        );
        assert!(dark.contains("#1e1e1e"));
    }

    #[test]
    fn test_data_url() {
        assert_eq!(svg_data_url("<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.6), "0.6");
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(25000.0), "2.5e4");
    }
}
