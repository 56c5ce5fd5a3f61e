//! Command line options

use clap::Parser;
use lux_core::pbrt::Float;

/// Draws samples from a light sampling strategy and a pixel filter and
/// reports how closely the observed frequencies follow the distributions.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Light sampling strategy.
    #[arg(
        long,
        short = 's',
        value_name = "NAME",
        default_value = "POWER",
        help = "Light sampling strategy: UNIFORM, POWER or LOG_POWER."
    )]
    pub strategy: String,

    /// What the light distribution is used for.
    #[arg(
        long,
        value_name = "NAME",
        default_value = "EMIT",
        help = "Light sampling task: EMIT, ILLUMINATE or INFINITE_ONLY."
    )]
    pub task: String,

    /// Number of light samples to draw.
    #[arg(
        long,
        short = 'n',
        value_name = "NUM",
        default_value_t = 1_000_000,
        help = "Number of light samples to draw."
    )]
    pub samples: u64,

    /// Number of threads to use.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 0,
        help = "Use specified number of threads; 0 uses all available cores."
    )]
    n_threads: usize,

    /// Seed for the per-thread random sequences.
    #[arg(long, value_name = "NUM", default_value_t = 0)]
    pub seed: u64,

    /// Point light intensities.
    #[arg(
        long = "point",
        short = 'p',
        value_name = "INTENSITY",
        value_delimiter = ',',
        default_values_t = vec![1.0, 10.0, 100.0],
        help = "Comma separated intensities of the point lights in the scene."
    )]
    pub point_intensities: Vec<Float>,

    /// Importance multipliers matched to the lights by position.
    #[arg(
        long = "importance",
        value_name = "FLOAT",
        value_delimiter = ',',
        help = "Comma separated importance multipliers, matched to the lights in order."
    )]
    pub importances: Vec<Float>,

    /// Radiance of a constant environment light.
    #[arg(long, value_name = "FLOAT", help = "Add a constant environment light.")]
    pub sky: Option<Float>,

    /// Path to an IES photometric file.
    #[arg(long, value_name = "FILE", help = "Add a goniometric light from an IES file.")]
    pub ies: Option<String>,

    /// Radius of the sphere bounding the scene.
    #[arg(long = "world-radius", value_name = "FLOAT", default_value_t = 1.0)]
    pub world_radius: Float,

    /// Pixel filter to tabulate.
    #[arg(
        long,
        value_name = "NAME",
        default_value = "gaussian",
        help = "Pixel filter: box, triangle, gaussian, mitchell or none."
    )]
    pub filter: String,

    /// Suppress all text output other than error messages.
    #[arg(long, help = "Suppress all text output other than error messages.")]
    pub quiet: bool,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn n_threads(&self) -> usize {
        if self.n_threads == 0 {
            std::thread::available_parallelism().map_or(1, |n| n.get())
        } else {
            self.n_threads
        }
    }
}
