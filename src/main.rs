use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use gridscan::{
    BoundingBox, ClusterConfig, ConsoleReporter, Coordinate, Pipeline, RunSummary, TripColumns,
    read_trip_file,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Cluster taxi pickup locations with grid-partitioned DBSCAN
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file of trip records (header row, pickup long/lat in columns 8/9)
    input: PathBuf,

    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid divisions per axis (N)
    #[arg(short = 'n', long)]
    grid: Option<usize>,

    /// Number of concurrent clustering workers
    #[arg(short, long)]
    workers: Option<usize>,

    /// Minimum neighbours for a core point
    #[arg(long)]
    min_pts: Option<usize>,

    /// Neighbourhood radius in degrees
    #[arg(long)]
    eps: Option<f64>,

    /// Partitions buffered between producer and workers
    #[arg(long)]
    queue: Option<usize>,

    /// Clustering region as SW_LAT,SW_LONG,NE_LAT,NE_LONG (defaults to the data's extent)
    #[arg(long, value_parser = parse_bbox, allow_hyphen_values = true)]
    bbox: Option<BoundingBox>,

    /// Print a JSON run summary after the report
    #[arg(long)]
    json: bool,
}

impl Args {
    fn cluster_config(&self) -> Result<ClusterConfig> {
        let mut config = match &self.config {
            Some(path) => ClusterConfig::from_json_file(path)?,
            None => ClusterConfig::default(),
        };

        if let Some(n) = self.grid {
            config = config.with_grid_dimension(n);
        }
        if let Some(w) = self.workers {
            config = config.with_workers(w);
        }
        if let Some(m) = self.min_pts {
            config = config.with_min_pts(m);
        }
        if let Some(eps) = self.eps {
            config = config.with_eps(eps);
        }
        if let Some(q) = self.queue {
            config = config.with_queue_capacity(q);
        }

        Ok(config)
    }
}

fn parse_bbox(raw: &str) -> Result<BoundingBox, String> {
    let values = raw
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|e| format!("invalid coordinate: {e}"))?;

    let [sw_lat, sw_long, ne_lat, ne_long] = values[..] else {
        return Err(format!("expected 4 comma-separated values, got {}", values.len()));
    };
    if values.iter().any(|v| !v.is_finite()) {
        return Err("coordinates must be finite".to_string());
    }

    Ok(BoundingBox::new(
        Coordinate::new(sw_lat, sw_long),
        Coordinate::new(ne_lat, ne_long),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gridscan=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let started_at = Utc::now();
    let start_time = Instant::now();

    // Validate before touching any data
    let config = args.cluster_config()?;
    let pipeline = Pipeline::new(config, Arc::new(ConsoleReporter))
        .context("Invalid clustering configuration")?;

    // Step 1: Ingest
    let step1_start = Instant::now();
    let dataset = read_trip_file(&args.input, TripColumns::default())
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    println!("Number of points: {}", dataset.len());

    let bounds = match (args.bbox, dataset.bounds) {
        (Some(bbox), _) => bbox,
        (None, Some(bbox)) => bbox,
        (None, None) => bail!("No points in {}", args.input.display()),
    };

    println!("SW:{}", bounds.southwest);
    println!("NE:{} \n", bounds.northeast);
    let step1_duration = step1_start.elapsed();

    // Step 2: Partition
    let step2_start = Instant::now();
    let grid = pipeline.partition(&dataset.points, &bounds);
    let partitioned_points = grid.total_points();
    let step2_duration = step2_start.elapsed();

    // Step 3: Cluster
    let step3_start = Instant::now();
    println!(
        "Partition with N = {} and {} consumer threads\n",
        pipeline.config().grid_dimension,
        pipeline.config().workers
    );
    let results = pipeline.cluster(grid).await?;
    let step3_duration = step3_start.elapsed();

    let total_duration = start_time.elapsed();
    println!(
        "\nExecution time: {:.3}s of {} points",
        total_duration.as_secs_f64(),
        partitioned_points
    );
    println!(
        "Number of CPUs: {}",
        std::thread::available_parallelism().map_or(1, |n| n.get())
    );

    println!("\n=== Timing Breakdown ===");
    println!("Step 1 (Ingestion):    {:.3}s", step1_duration.as_secs_f64());
    println!("Step 2 (Partitioning): {:.3}s", step2_duration.as_secs_f64());
    println!("Step 3 (Clustering):   {:.3}s", step3_duration.as_secs_f64());

    if args.json {
        let summary = RunSummary::new(
            started_at,
            dataset.len(),
            bounds,
            pipeline.config(),
            &results,
            total_duration.as_secs_f64(),
        );
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize run summary")?
        );
    }

    Ok(())
}
