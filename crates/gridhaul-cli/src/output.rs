//! Output formatting for plans and grid paths.
//!
//! The text and rich formats reuse the library's renderer; basic, enhanced
//! and JSON are produced here.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use gridhaul_lib::{Coord, PathAlgorithm, RouteRenderMode, RouteStep, RouteSummary, StepKind};

use crate::terminal::{colors, format_with_separators, supports_color, supports_unicode, ColorPalette};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Step-by-step report followed by the summary metrics.
    #[default]
    Text,
    /// Markdown-flavoured bullet list.
    Rich,
    /// One line per step with `+`/`|`/`-` prefixes.
    Basic,
    /// Colored step tags with fuel/load details and an aligned footer.
    Enhanced,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Whether the logo banner and timing footer accompany this format.
    pub fn is_decorated(self) -> bool {
        matches!(
            self,
            OutputFormat::Text | OutputFormat::Rich | OutputFormat::Enhanced
        )
    }

    /// Print a planned route in this format.
    pub fn render_plan(self, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => print!("{}", summary.render(RouteRenderMode::PlainText)),
            OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
            OutputFormat::Basic => print!("{}", render_basic(summary)),
            OutputFormat::Enhanced => {
                let renderer = EnhancedRenderer::new(ColorPalette::detect());
                print!("{}", renderer.render(summary));
            }
            OutputFormat::Json => render_json(summary)?,
        }
        Ok(())
    }

    /// Print a single grid path in this format.
    pub fn render_path(self, report: &PathReport) -> io::Result<()> {
        match self {
            OutputFormat::Json => render_json(report)?,
            OutputFormat::Basic => print!("{}", report.render_basic()),
            _ => print!("{}", report.render_text()),
        }
        Ok(())
    }
}

/// Print the CLI logo banner, falling back to ASCII when Unicode support is
/// not detected.
pub fn print_logo() {
    let (orange, cyan, reset) = if supports_color() {
        (colors::ORANGE, colors::CYAN, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{cyan}┌──────────────────────────────────────┐{reset}
{cyan}│{orange}   ▚ G R I D H A U L ▞                {cyan}│{reset}
{cyan}│{orange}   capacity & fuel route planner      {cyan}│{reset}
{cyan}└──────────────────────────────────────┘{reset}"
        );
    } else {
        println!(
            "{orange}+--------------------------------------+
|  GRIDHAUL                            |
|  >> capacity & fuel route planner    |
+--------------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: Duration) {
    let (gray, reset) = if supports_color() {
        (colors::GRAY, colors::RESET)
    } else {
        ("", "")
    };

    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{elapsed_ms}ms")
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{gray}Completed in {time_str}{reset}");
}

/// Serialise any report as pretty JSON on stdout.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn line_prefix(index: usize, len: usize) -> char {
    if index == 0 {
        '+'
    } else if index + 1 == len {
        '-'
    } else {
        '|'
    }
}

fn order_suffix(step: &RouteStep) -> String {
    step.order_id
        .map(|id| format!(" #{id}"))
        .unwrap_or_default()
}

/// Minimal route listing: one line per step, then the headline metrics.
pub fn render_basic(summary: &RouteSummary) -> String {
    let mut buffer = String::new();
    let len = summary.steps.len();
    for (i, step) in summary.steps.iter().enumerate() {
        let _ = writeln!(
            buffer,
            "{} {} {}{}",
            line_prefix(i, len),
            step.position,
            step.kind,
            order_suffix(step)
        );
    }
    let metrics = &summary.metrics;
    let _ = writeln!(
        buffer,
        "via {} trips / {} units / {} refuels",
        metrics.trips, metrics.total_distance, metrics.refuel_count
    );
    buffer
}

/// Renderer with colored step tags and per-step fuel/load details.
pub struct EnhancedRenderer {
    palette: ColorPalette,
}

impl EnhancedRenderer {
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    pub fn render(&self, summary: &RouteSummary) -> String {
        let p = &self.palette;
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Delivery plan on a {}{}x{}{} grid from depot {}{}{} ({} orders):",
            p.white_bold,
            summary.grid.rows,
            summary.grid.cols,
            p.reset,
            p.white_bold,
            summary.depot,
            p.reset,
            summary.metrics.orders_delivered
        );

        for step in &summary.steps {
            self.render_step(&mut buffer, step);
            self.render_step_details(&mut buffer, step);
        }

        self.render_footer(&mut buffer, summary);
        buffer
    }

    fn render_step(&self, buffer: &mut String, step: &RouteStep) {
        let p = &self.palette;
        let (tag_color, tag_text) = self.step_tag(step.kind);
        let order = step
            .order_id
            .map(|id| format!(" order {id}"))
            .unwrap_or_default();

        match step.distance {
            Some(distance) => {
                let _ = writeln!(
                    buffer,
                    "{}{}{} {}{}{}{} ({} units)",
                    tag_color,
                    tag_text,
                    p.reset,
                    p.white_bold,
                    step.position,
                    p.reset,
                    order,
                    format_with_separators(u64::from(distance))
                );
            }
            None => {
                let _ = writeln!(
                    buffer,
                    "{}{}{} {}{}{}{}",
                    tag_color, tag_text, p.reset, p.white_bold, step.position, p.reset, order
                );
            }
        }
    }

    fn step_tag(&self, kind: StepKind) -> (&'static str, &'static str) {
        let p = &self.palette;
        match kind {
            StepKind::Start => (p.tag_start, " STRT "),
            StepKind::Pickup => (p.tag_pickup, " PICK "),
            StepKind::Delivery => (p.tag_delivery, " DROP "),
            StepKind::Refuel => (p.tag_refuel, " FUEL "),
            StepKind::Return => (p.tag_depot, " BACK "),
            StepKind::FinalReturn => (p.tag_depot, " HOME "),
        }
    }

    fn render_step_details(&self, buffer: &mut String, step: &RouteStep) {
        let p = &self.palette;
        let mut parts: Vec<String> = Vec::new();

        if let (Some(before), Some(after)) = (step.fuel_before, step.fuel) {
            // The reading that forced the detour is shown in red.
            parts.push(format!(
                "{}fuel {}{:.2}{} -> {:.2}{}",
                p.orange, p.red, before, p.orange, after, p.reset
            ));
        } else if let Some(fuel) = step.fuel {
            parts.push(format!("{}fuel {:.2}{}", p.cyan, fuel, p.reset));
        }
        if let Some(load) = step.load {
            parts.push(format!("{}load {:.2} kg{}", p.green, load, p.reset));
        }
        parts.push(format!("trip {}", step.trip));

        let _ = writeln!(
            buffer,
            "       {}│{} {}",
            p.gray,
            p.reset,
            parts.join(&format!("{}, {}", p.gray, p.reset))
        );
    }

    fn render_footer(&self, buffer: &mut String, summary: &RouteSummary) {
        let p = &self.palette;
        let metrics = &summary.metrics;
        let rows = [
            ("Total Distance:", format_with_separators(metrics.total_distance), " units"),
            ("Trips:", metrics.trips.to_string(), ""),
            ("Refuels:", metrics.refuel_count.to_string(), ""),
            ("Deliveries:", metrics.orders_delivered.to_string(), ""),
        ];
        let width = rows.iter().map(|(_, value, _)| value.len()).max().unwrap_or(0);

        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "{}───────────────────────────────────────{}",
            p.gray, p.reset
        );
        for (label, value, unit) in rows {
            let _ = writeln!(
                buffer,
                "  {}{:<16}{}{}{:>width$}{}{}",
                p.cyan, label, p.reset, p.white_bold, value, unit, p.reset
            );
        }
    }
}

/// A single grid path as printed by the `path` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub algorithm: PathAlgorithm,
    pub from: Coord,
    pub to: Coord,
    pub distance: u32,
    pub cells: Vec<Coord>,
}

impl PathReport {
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path from {} to {} ({} units; algorithm: {}):",
            self.from, self.to, self.distance, self.algorithm
        );
        for cell in &self.cells {
            let _ = writeln!(buffer, " - {cell}");
        }
        buffer
    }

    pub fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let len = self.cells.len();
        for (i, cell) in self.cells.iter().enumerate() {
            let _ = writeln!(buffer, "{} {}", line_prefix(i, len), cell);
        }
        let _ = writeln!(buffer, "distance: {}", self.distance);
        buffer
    }
}
