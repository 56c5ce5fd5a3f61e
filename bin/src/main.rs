#[macro_use]
extern crate log;

mod options;

use clap::Parser;
use filters::*;
use indicatif::{ProgressBar, ProgressStyle};
use lights::*;
use lux_core::error::*;
use lux_core::filter::*;
use lux_core::geometry::*;
use lux_core::light::*;
use lux_core::light_distrib::*;
use lux_core::pbrt::*;
use lux_core::rng::RNG;
use lux_core::scene::*;
use options::Options;
use std::sync::Arc;
use std::thread;

/// Light samples a worker draws between progress reports.
const CHUNK_SIZE: u64 = 16_384;

/// Resolution of the tabulated pixel filter.
const FILTER_TABLE_SIZE: usize = 64;

/// Upper bound on the number of pixel filter samples.
const MAX_FILTER_SAMPLES: u64 = 100_000;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = run(&options) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<()> {
    let task: LightSamplingTask = options.task.parse()?;
    let strategy: LightStrategy = options.strategy.parse()?;
    let filter = create_filter(&options.filter)?;

    let scene = build_scene(options)?;
    strategy.preprocess(&scene, task)?;
    let distrib = strategy.current().ok_or_else(|| {
        SamplingError::InvalidArgument("light strategy has no distribution".to_string())
    })?;

    let tally = sample_lights(options, &distrib);
    if !options.quiet {
        report_lights(options, &scene, &distrib, &tally);
    }

    let filter_distrib = FilterDistribution::new(filter, FILTER_TABLE_SIZE)?;
    let stats = sample_filter(options, &filter_distrib);
    if !options.quiet {
        println!(
            "{} filter: mean |dx| {:.4}, mean |dy| {:.4}, mean pdf {:.4}",
            options.filter, stats.mean_dx, stats.mean_dy, stats.mean_pdf
        );
    }

    Ok(())
}

/// Builds the scene from the command line: point lights first, then the
/// environment light and the goniometric light.
///
/// * `options` - The command line options.
fn build_scene(options: &Options) -> Result<Scene> {
    let importance = |i: usize| options.importances.get(i).copied().unwrap_or(1.0);

    let mut lights: Vec<ArcLight> = Vec::new();
    for &intensity in options.point_intensities.iter() {
        let light = PointLight::new(intensity).with_importance(importance(lights.len()));
        lights.push(light.into_arc());
    }
    if let Some(radiance) = options.sky {
        let light = InfiniteAreaLight::constant(radiance)?.with_importance(importance(lights.len()));
        lights.push(light.into_arc());
    }
    if let Some(path) = options.ies.as_ref() {
        let light =
            GoniometricLight::from_ies_file(1.0, path, false)?.with_importance(importance(lights.len()));
        lights.push(light.into_arc());
    }

    if options.importances.len() > lights.len() {
        warn!(
            "{} importances given for {} lights; the rest are ignored",
            options.importances.len(),
            lights.len()
        );
    }
    info!("Scene has {} lights", lights.len());

    Ok(Scene::new(lights, options.world_radius))
}

/// Returns the pixel filter with its default parameters.
///
/// * `name` - Filter name.
fn create_filter(name: &str) -> Result<Option<ArcFilter>> {
    let filter: ArcFilter = match name.to_ascii_lowercase().as_str() {
        "box" => Arc::new(BoxFilter::default()),
        "triangle" => Arc::new(TriangleFilter::default()),
        "gaussian" => Arc::new(GaussianFilter::default()),
        "mitchell" => Arc::new(MitchellFilter::default()),
        "none" => return Ok(None),
        _ => {
            return Err(SamplingError::UnsupportedConfiguration(format!(
                "unknown filter '{name}'"
            )))
        }
    };
    Ok(Some(filter))
}

/// Messages sent from the sampling workers.
enum Message {
    /// Number of samples drawn since the last report.
    Progress(u64),

    /// Final tallies of a worker.
    Done(Tally),
}

/// Light sampling tallies.
struct Tally {
    /// Number of times each light was picked.
    counts: Vec<u64>,

    /// Number of samples that picked no light.
    misses: u64,

    /// Sum of emitted intensity over the sampling densities.
    weight_sum: f64,
}

impl Tally {
    fn new(light_count: usize) -> Self {
        Self {
            counts: vec![0; light_count],
            misses: 0,
            weight_sum: 0.0,
        }
    }

    /// Picks a light and an emission direction and records the outcome.
    ///
    /// * `distrib` - The light distribution.
    /// * `rng`     - The random number generator.
    fn record(&mut self, distrib: &DistributionLightStrategy, rng: &mut RNG) {
        match distrib.sample_lights(rng.uniform_float()) {
            Some(sampled) => {
                self.counts[sampled.index] += 1;
                let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
                if let Some(s) = sampled.light.sample_direction(&u) {
                    self.weight_sum += (s.value / sampled.pdf) as f64;
                }
            }
            None => self.misses += 1,
        }
    }

    fn merge(&mut self, other: &Tally) {
        for (count, other) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += other;
        }
        self.misses += other.misses;
        self.weight_sum += other.weight_sum;
    }
}

/// Draws light samples on all threads and returns the merged tallies.
///
/// * `options` - The command line options.
/// * `distrib` - The light distribution.
fn sample_lights(options: &Options, distrib: &DistributionLightStrategy) -> Tally {
    let n_threads = options.n_threads();
    let progress = if options.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(options.samples)
    };
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} samples ({eta})") {
        progress.set_style(style);
    }

    debug!("Sampling {} lights on {n_threads} threads", distrib.light_count());

    let mut total = Tally::new(distrib.light_count());
    let (tx, rx) = crossbeam_channel::bounded(n_threads);
    thread::scope(|scope| {
        for t in 0..n_threads {
            let tx = tx.clone();
            let extra = if (t as u64) < options.samples % n_threads as u64 {
                1
            } else {
                0
            };
            let n = options.samples / n_threads as u64 + extra;
            let seed = options.seed.wrapping_add(t as u64);

            scope.spawn(move || {
                let mut rng = RNG::new(seed);
                let mut tally = Tally::new(distrib.light_count());
                let mut done = 0;
                while done < n {
                    let chunk = min(CHUNK_SIZE, n - done);
                    for _ in 0..chunk {
                        tally.record(distrib, &mut rng);
                    }
                    done += chunk;
                    // The receiver outlives every worker.
                    let _ = tx.send(Message::Progress(chunk));
                }
                let _ = tx.send(Message::Done(tally));
            });
        }
        drop(tx);

        for message in rx.iter() {
            match message {
                Message::Progress(n) => progress.inc(n),
                Message::Done(tally) => total.merge(&tally),
            }
        }
    });
    progress.finish_and_clear();

    total
}

/// Prints the expected and observed selection frequency of every light.
fn report_lights(
    options: &Options,
    scene: &Scene,
    distrib: &DistributionLightStrategy,
    tally: &Tally,
) {
    let n = max(1, options.samples) as f64;
    println!(
        "{} strategy, {} task, {} samples",
        distrib.strategy_type(),
        distrib.task(),
        options.samples
    );
    for (i, light) in scene.lights.iter().enumerate() {
        println!(
            "light {i:>3}  power {:>12.4}  importance {:>6.2}  pdf {:>8.5}  observed {:>8.5}",
            light.power(scene),
            light.importance(),
            distrib.pdf_discrete(i),
            tally.counts[i] as f64 / n
        );
    }
    if tally.misses > 0 {
        println!("{} samples picked no light", tally.misses);
    }
    println!("estimated emitted intensity: {:.4}", tally.weight_sum / n);
}

/// Pixel filter sampling statistics.
struct FilterStats {
    mean_dx: Float,
    mean_dy: Float,
    mean_pdf: Float,
}

/// Draws pixel sample offsets from the tabulated filter.
///
/// * `options` - The command line options.
/// * `fd`      - The tabulated filter.
fn sample_filter(options: &Options, fd: &FilterDistribution) -> FilterStats {
    let n = min(max(1, options.samples), MAX_FILTER_SAMPLES);
    let mut rng = RNG::new(options.seed);
    let (mut dx, mut dy, mut pdf) = (0.0, 0.0, 0.0);
    for _ in 0..n {
        let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
        let (p, p_pdf) = fd.sample_continuous(&u);
        dx += abs(p.x);
        dy += abs(p.y);
        pdf += p_pdf;
    }
    let inv_n = 1.0 / n as Float;
    FilterStats {
        mean_dx: dx * inv_n,
        mean_dy: dy * inv_n,
        mean_pdf: pdf * inv_n,
    }
}
