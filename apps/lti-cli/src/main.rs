use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use thiserror::Error;

use lti_model::TransferFunction;
use lti_sim::{IntegratorType, SolverOptions, TimeGrid, step_response_with};

#[derive(Parser)]
#[command(name = "lti-cli")]
#[command(about = "LTI step-response tool - simulate transfer functions on a time grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the unit-step response of a transfer function
    Step {
        /// Numerator coefficients, highest power first (e.g. "1" or "1,2")
        #[arg(long, value_delimiter = ',', required = true)]
        num: Vec<f64>,
        /// Denominator coefficients, highest power first (e.g. "1,1,10")
        #[arg(long, value_delimiter = ',', required = true)]
        den: Vec<f64>,
        /// First sample time
        #[arg(long, default_value_t = 0.0)]
        t_start: f64,
        /// Last sample time
        #[arg(long, default_value_t = 10.0)]
        t_end: f64,
        /// Number of samples
        #[arg(long, default_value_t = 500)]
        points: usize,
        /// Integration method
        #[arg(long, value_enum, default_value = "exact")]
        integrator: IntegratorArg,
        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: Format,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the settled step-response value of a stable system
    FinalValue {
        /// Numerator coefficients, highest power first
        #[arg(long, value_delimiter = ',', required = true)]
        num: Vec<f64>,
        /// Denominator coefficients, highest power first
        #[arg(long, value_delimiter = ',', required = true)]
        den: Vec<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum IntegratorArg {
    /// Exact per-interval discretization
    Exact,
    /// Fixed-substep 4th-order Runge-Kutta
    Rk4,
    /// Fixed-substep forward Euler
    Euler,
}

impl From<IntegratorArg> for IntegratorType {
    fn from(arg: IntegratorArg) -> Self {
        match arg {
            IntegratorArg::Exact => IntegratorType::MatrixExponential,
            IntegratorArg::Rk4 => IntegratorType::Rk4,
            IntegratorArg::Euler => IntegratorType::ForwardEuler,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Model(#[from] lti_model::ModelError),
    #[error(transparent)]
    Sim(#[from] lti_sim::SimError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Step {
            num,
            den,
            t_start,
            t_end,
            points,
            integrator,
            format,
            output,
        } => cmd_step(
            num,
            den,
            t_start,
            t_end,
            points,
            integrator,
            format,
            output.as_deref(),
        ),
        Commands::FinalValue { num, den } => cmd_final_value(num, den),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_step(
    num: Vec<f64>,
    den: Vec<f64>,
    t_start: f64,
    t_end: f64,
    points: usize,
    integrator: IntegratorArg,
    format: Format,
    output: Option<&Path>,
) -> CliResult<()> {
    let tf = TransferFunction::new(num, den)?;
    let grid = TimeGrid::uniform(t_start, t_end, points)?;
    let opts = SolverOptions {
        integrator: integrator.into(),
        ..SolverOptions::default()
    };

    let samples = step_response_with(&tf, &grid, &opts)?;

    let rendered = match format {
        Format::Csv => {
            let mut csv = String::from("time,amplitude\n");
            for s in &samples {
                csv.push_str(&format!("{},{}\n", s.time, s.amplitude));
            }
            csv
        }
        Format::Json => serde_json::to_string_pretty(&samples)?,
    };

    if let Some(path) = output {
        std::fs::write(path, rendered)?;
        println!(
            "✓ Wrote {} samples for {} to {}",
            samples.len(),
            tf,
            path.display()
        );
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

fn cmd_final_value(num: Vec<f64>, den: Vec<f64>) -> CliResult<()> {
    let tf = TransferFunction::new(num, den)?;
    let model = lti_model::StateSpaceModel::from_transfer_function(&tf)?;

    match model.final_value() {
        Some(v) => println!("{}", v),
        None => println!("no finite final value (pole at the origin)"),
    }

    Ok(())
}
