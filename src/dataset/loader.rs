use log::{error, info};
use reqwest::StatusCode;
use tokio::fs;

use super::{Dataset, DatasetErr, DatasetSource, Result};

/// Retrieves and decodes the dataset at `source`.
///
/// # Returns
/// The dataset or the first retrieval or decoding error.
pub async fn try_load(source: &DatasetSource) -> Result<Dataset> {
    let bytes = match source {
        DatasetSource::Remote(url) => fetch(url).await?,
        DatasetSource::Local(path) => fs::read(path).await?,
    };

    let dataset = Dataset::from_csv(&bytes)?;
    info!(samples = dataset.len(); "loaded dataset from {source}");
    Ok(dataset)
}

/// Like `try_load`, but failures are logged and treated as "no data".
///
/// # Returns
/// The dataset, or an empty one if anything went wrong.
pub async fn load(source: &DatasetSource) -> Dataset {
    match try_load(source).await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("couldn't load dataset from {source}: {e}");
            Dataset::default()
        }
    }
}

async fn fetch(url: &str) -> Result<Vec<u8>> {
    let resp = reqwest::get(url).await?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(DatasetErr::Status(status));
    }

    Ok(resp.bytes().await?.to_vec())
}
