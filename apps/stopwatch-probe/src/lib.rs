use anyhow::{ensure, Result};
use chronograph::chronograph_time::{Stopwatch, TimeSource};
use chronograph::Chronograph;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of measured intervals
    #[arg(long, default_value_t = 3)]
    laps: u32,

    /// Time to sleep inside every interval
    #[arg(long, default_value_t = 50)]
    interval_ms: u64,

    /// Restart the stopwatch after the last lap and report its reading
    #[arg(long, default_value_t = false)]
    restart: bool,
}

/// Runs `laps` start/wait/stop intervals and returns the cumulative milliseconds after each one.
pub fn measure_laps<C: TimeSource>(
    stopwatch: &mut Stopwatch<C>,
    laps: u32,
    interval: Duration,
    mut wait: impl FnMut(Duration),
) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(laps as usize);

    for _ in 0..laps {
        stopwatch.start();
        wait(interval);
        stopwatch.stop();

        cumulative.push(stopwatch.elapsed_milliseconds());
    }

    cumulative
}

pub fn internal_main() -> Result<()> {
    let _ = Chronograph::new("Stopwatch Probe");
    let args = Args::parse();

    log::info!(
        "Stopwatch frequency {} tick/s, high resolution: {}",
        Stopwatch::FREQUENCY,
        Stopwatch::IS_HIGH_RESOLUTION
    );

    let interval = Duration::from_millis(args.interval_ms);
    let mut stopwatch = Stopwatch::new();
    let cumulative = measure_laps(&mut stopwatch, args.laps, interval, std::thread::sleep);

    let mut previous = 0.0;
    for (i, total) in cumulative.iter().enumerate() {
        log::info!("lap {}: {}ms ({}ms total)", i + 1, total - previous, total);
        previous = *total;
    }

    let expected = (interval * args.laps).as_secs_f64();
    let measured = stopwatch.elapsed_raw();
    log::info!("{}s measured over {} laps, {}s slept", measured, args.laps, expected);
    ensure!(
        measured + 1e-6 >= expected,
        "stopwatch measured {}s but {}s were slept",
        measured,
        expected
    );

    if args.restart {
        stopwatch.restart();
        log::info!("{}ms right after restart", stopwatch.elapsed_milliseconds());
        ensure!(stopwatch.is_running(), "stopwatch not running after restart");
    }

    Ok(())
}
