/// Concurrent scoring over the tokio blocking pool.
///
/// The candidate list is split into one contiguous chunk per worker. Each
/// chunk is scored independently; results are reassembled in chunk order so
/// the output lines up with the input before ranking.
use std::sync::Arc;

use fuzzy_core::{CandidateRecord, Engine, ScoredRecord};
use tokio::task::JoinSet;
use tracing::debug;

use crate::error::AppError;

pub async fn score_concurrently(
    engine: Arc<Engine>,
    candidates: Vec<CandidateRecord>,
    workers: usize,
) -> Result<Vec<ScoredRecord>, AppError> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let chunk_size = candidates.len().div_ceil(workers.max(1));
    let mut tasks = JoinSet::new();
    for (index, chunk) in candidates.chunks(chunk_size).enumerate() {
        let engine = Arc::clone(&engine);
        let chunk = chunk.to_vec();
        tasks.spawn_blocking(move || (index, engine.score_all(&chunk)));
    }
    debug!(chunks = tasks.len(), chunk_size, "scoring tasks spawned");

    let mut parts = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        parts.push(joined?);
    }
    parts.sort_by_key(|(index, _)| *index);

    Ok(parts.into_iter().flat_map(|(_, scored)| scored).collect())
}
