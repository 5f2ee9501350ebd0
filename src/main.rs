use std::time::Instant;

use log::{info, warn};
use tokio::task;

use linreg_orchestra::{
    LinearRegression, accumulation, config::RunConfig, dataset, report::FitReport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = RunConfig::from_env()?;
    info!("using {:?}", config.accumulator);

    let dataset = dataset::load(&config.source).await;
    if dataset.is_empty() {
        warn!("fitting an empty dataset, parameters won't be finite");
    }

    let accumulator = accumulation::build(config.accumulator)?;

    let (model, elapsed) = task::spawn_blocking(move || {
        let start = Instant::now();
        let model = LinearRegression::fit_with(&accumulator, dataset.xs(), dataset.ys());
        model.map(|model| (model, start.elapsed()))
    })
    .await??;

    let report = FitReport::new(elapsed, model, config.inputs);
    println!("{report}");

    Ok(())
}
