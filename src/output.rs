//! Result printing for the terminal surface.

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// One query's outcome, also the shape the `--json` flag emits.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<String>,
    pub duration_ms: f64,
    pub cached: bool,
}

/// Map a `--color` argument onto termcolor's choice.
pub fn parse_color_choice(name: &str) -> Option<ColorChoice> {
    match name {
        "auto" => Some(ColorChoice::Auto),
        "always" => Some(ColorChoice::Always),
        "never" => Some(ColorChoice::Never),
        _ => None,
    }
}

/// Print the result count line and one identifier per line.
pub fn print_results(out: &mut dyn WriteColor, response: &QueryResponse) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "found {} result(s)", response.count)?;
    out.reset()?;
    write!(out, " in {:.2}ms", response.duration_ms)?;
    if response.cached {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, " (cached)")?;
        out.reset()?;
    }
    writeln!(out, ":")?;

    for name in &response.results {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        writeln!(out, "{}", name)?;
        out.reset()?;
    }

    Ok(())
}
