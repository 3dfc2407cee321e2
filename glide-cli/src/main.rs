mod log;
mod plot;
mod settings;

use std::{f64::consts::PI, io, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use glide_core::{
    signals::{Cosine, Curve, InterpolatedGlide},
    Domain, ExponentialSweep,
};

use plot::{Figure, Series};
use settings::Settings;

#[derive(Parser, Debug)]
#[clap(author, version)]
struct Cli {
    /// Where to write the plot, `.svg` for vector output.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
    #[arg(long, global = true)]
    width: Option<u32>,
    #[arg(long, global = true)]
    height: Option<u32>,
    /// Also dump the plotted points to stdout.
    #[arg(long, global = true)]
    print: bool,
    #[command(subcommand)]
    subcommand: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Cosine {
        #[clap(short, long, default_value_t = 0.8)]
        amplitude: f64,
        #[clap(short, long, default_value_t = 1000.0)]
        frequency: f64,
        #[clap(short, long, default_value_t = PI / 2.0)]
        phase: f64,
        #[clap(short, long, default_value_t = 44_100)]
        sample_rate: u32,
        #[clap(long, default_value_t = 0.002)]
        half_width: f64,
    },
    Exponential {
        #[clap(long, default_value_t = 20_000.0)]
        max_frequency: f64,
        /// Not used by the curve, which always starts at `scale`.
        #[clap(long, default_value_t = 600.0)]
        min_frequency: f64,
        #[clap(long, default_value_t = 0.001)]
        step: f64,
        /// Plot a second curve scaled by this divisor next to the unscaled one.
        #[clap(short = 'k', long)]
        scale: Option<f64>,
    },
    Glide {
        #[clap(long, default_value_t = 600.0)]
        min_frequency: f64,
        #[clap(long, default_value_t = 20_000.0)]
        max_frequency: f64,
        #[clap(long, default_value_t = 0.001)]
        step: f64,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Cosine { .. } => "cosine",
            Command::Exponential { .. } => "exponential",
            Command::Glide { .. } => "glide",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().context("failed to load settings")?;

    log::init(&settings.log_level, settings.log_file.as_deref())
        .context("failed to initialise logging")?;

    let figure = build_figure(&cli.subcommand)?;

    if cli.print {
        plot::write_points(&figure, io::stdout().lock())?;
    }

    let path = cli
        .output
        .unwrap_or_else(|| settings.output_dir.join(format!("{}.png", cli.subcommand.name())));
    let size = (
        cli.width.unwrap_or(settings.width),
        cli.height.unwrap_or(settings.height),
    );

    plot::render(&figure, &path, size)
        .with_context(|| format!("failed to render plot to {}", path.display()))?;
    log::info!("plot written to: {}", path.display());

    Ok(())
}

fn build_figure(command: &Command) -> anyhow::Result<Figure> {
    let figure = match *command {
        Command::Cosine {
            amplitude,
            frequency,
            phase,
            sample_rate,
            half_width,
        } => {
            let domain = Domain::around_zero(half_width, sample_rate)?;
            let cosine = Cosine::new(amplitude, frequency, phase);
            let peak = cosine.amplitude().abs().max(f64::EPSILON);

            Figure::new(format!("{amplitude} cos(2π {frequency} t + {phase:.3})"))
                .labels("time", "amplitude")
                .axis(-half_width..half_width, -peak..peak)
                .with_series(Series::new("cosine", cosine.samples(&domain)))
        }
        Command::Exponential {
            max_frequency,
            min_frequency,
            step,
            scale,
        } => {
            log::debug!(min_frequency, "minimum frequency does not drive the curve");

            let domain = Domain::unit(step)?;
            let sweep = ExponentialSweep::new(domain.clone(), max_frequency)?;
            log::debug!(
                rate_constant = sweep.rate_constant(),
                last = ?sweep.value_near(1.0),
                "unscaled sweep"
            );

            let mut figure = Figure::new(format!("exp(ln({max_frequency}) t)"))
                .labels("t", "frequency [Hz]")
                .with_series(Series::new("unscaled", sweep.points()));

            if let Some(scale) = scale {
                let scaled = ExponentialSweep::with_scale(domain, max_frequency, scale)?;
                log::debug!(rate_constant = scaled.rate_constant(), scale, "scaled sweep");

                figure = figure.with_series(Series::new(format!("k = {scale}"), scaled.points()));
            }

            figure
        }
        Command::Glide {
            min_frequency,
            max_frequency,
            step,
        } => {
            let domain = Domain::unit(step)?;
            let glide = InterpolatedGlide::new(min_frequency, max_frequency)?;

            Figure::new(format!("{min_frequency} Hz → {max_frequency} Hz"))
                .labels("t", "frequency [Hz]")
                .with_series(Series::new("glide", glide.samples(&domain)))
        }
    };

    Ok(figure)
}
