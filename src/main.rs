use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::debug;

use projectile_sim::core::config::{EARTH_GRAVITY_MPS2, TRAJECTORY_SAMPLES};
use projectile_sim::core::input::{ANGLE_FIELD, HEIGHT_FIELD, VELOCITY_FIELD, parse_field};
use projectile_sim::core::plot::{DEFAULT_PLOT_SIZE, render_png, render_svg, timestamped_path};
use projectile_sim::{Kinematics, SimConfig, SimError, SimulatorForm};

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "projectile_sim")]
#[command(version)]
#[command(about = "Closed-form projectile motion: time of flight, max height and range")]
struct Cli {
    /// Initial velocity (m/s); prompted for when omitted
    #[arg(short = 'v', long, allow_hyphen_values = true)]
    velocity: Option<String>,

    /// Launch angle (degrees); prompted for when omitted
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    angle: Option<String>,

    /// Initial height (m); prompted for when omitted
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Gravitational acceleration (m/s^2)
    #[arg(short = 'g', long, default_value_t = EARTH_GRAVITY_MPS2)]
    gravity: f64,

    /// Number of trajectory samples
    #[arg(short = 'n', long, default_value_t = TRAJECTORY_SAMPLES)]
    samples: usize,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the trajectory plot; without a path a timestamped file is used
    #[arg(short = 'p', long)]
    plot: Option<Option<PathBuf>>,

    /// Write the plot as SVG instead of PNG
    #[arg(long)]
    svg: bool,
}

/// Keeps asking until the line parses; EOF is an error.
fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    prompt: &str,
) -> Result<String, SimError> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SimError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Input ended unexpectedly (EOF).",
            )));
        }

        match parse_field(field, &line) {
            Ok(_) => return Ok(line.trim().to_string()),
            Err(_) => writeln!(output, "Please enter a valid number (e.g., 45 or 12.5).")?,
        }
    }
}

fn fill_form<R: BufRead, W: Write>(
    cli: &Cli,
    form: &mut SimulatorForm,
    input: &mut R,
    output: &mut W,
) -> Result<(), SimError> {
    form.velocity = match &cli.velocity {
        Some(v) => v.clone(),
        None => prompt_field(input, output, VELOCITY_FIELD, "Initial Velocity (m/s): ")?,
    };
    form.angle = match &cli.angle {
        Some(a) => a.clone(),
        None => prompt_field(input, output, ANGLE_FIELD, "Angle (degrees): ")?,
    };
    form.height = match &cli.height {
        Some(h) => h.clone(),
        None => prompt_field(input, output, HEIGHT_FIELD, "Initial Height (m): ")?,
    };
    Ok(())
}

fn print_report<W: Write>(
    output: &mut W,
    form: &SimulatorForm,
    report: &Kinematics,
    format: OutputFormat,
) -> Result<(), SimError> {
    match format {
        OutputFormat::Table => {
            writeln!(output, "{}", form.time_of_flight_text())?;
            writeln!(output, "{}", form.max_height_text())?;
            writeln!(output, "{}", form.range_text())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, report)?;
            writeln!(output)?;
        }
        OutputFormat::Csv => {
            writeln!(output, "t_s,x_m,y_m")?;
            for s in &report.trajectory {
                writeln!(output, "{:.6},{:.6},{:.6}", s.time_s, s.x_m, s.y_m)?;
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), SimError> {
    let config = SimConfig {
        gravity_mps2: cli.gravity,
        samples: cli.samples,
    };
    config.validate()?;
    debug!("using {config:?}");

    let mut form = SimulatorForm::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    fill_form(&cli, &mut form, &mut stdin.lock(), &mut out)?;

    let report = form.simulate()?.clone();
    print_report(&mut out, &form, &report, cli.format)?;

    if let Some(plot_path) = &cli.plot {
        let extension = if cli.svg { "svg" } else { "png" };
        let path = plot_path
            .clone()
            .unwrap_or_else(|| timestamped_path(extension));
        if cli.svg {
            render_svg(&path, form.plot(), DEFAULT_PLOT_SIZE)?;
        } else {
            render_png(&path, form.plot(), DEFAULT_PLOT_SIZE)?;
        }
        eprintln!("Plot written to {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
