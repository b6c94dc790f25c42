use std::sync::Arc;

use ndarray::parallel::prelude::*;
use ndarray::{s, Axis};
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::PixelImage;
use crate::error::Result;
use crate::pixel::Pixel;
use crate::region::ResolvedRegion;

/// Serializable parallelism settings, as found in pipeline config files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Upper bound on concurrently processed row chunks. `None` = one per pool thread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_degree_of_parallelism: Option<usize>,
    /// Build a dedicated pool with this many threads instead of using the global one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_threads: Option<usize>,
}

/// Where and how wide filters run their row-parallel passes.
///
/// Filters only borrow the pool; a context without one runs on rayon's global pool.
#[derive(Clone, Debug, Default)]
pub struct ExecutionContext {
    max_degree_of_parallelism: Option<usize>,
    pool: Option<Arc<ThreadPool>>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of row chunks scheduled at once. Values below 1 are treated as 1.
    pub fn with_max_degree_of_parallelism(mut self, max: usize) -> Self {
        self.max_degree_of_parallelism = Some(max.max(1));
        self
    }

    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Build a context from config, creating a pool when `num_threads` is set.
    pub fn from_config(config: &ExecutionConfig) -> Result<Self> {
        let mut ctx = Self::new();
        if let Some(threads) = config.num_threads {
            let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
            ctx = ctx.with_pool(Arc::new(pool));
        }
        if let Some(max) = config.max_degree_of_parallelism {
            ctx = ctx.with_max_degree_of_parallelism(max);
        }
        Ok(ctx)
    }

    pub fn pool(&self) -> Option<&Arc<ThreadPool>> {
        self.pool.as_ref()
    }

    /// Effective parallelism: the configured cap, bounded by the pool's thread count.
    pub fn max_degree_of_parallelism(&self) -> usize {
        let threads = match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        };
        match self.max_degree_of_parallelism {
            Some(max) => max.min(threads).max(1),
            None => threads.max(1),
        }
    }

    /// Run `op` inside the borrowed pool, or on the caller's pool if there is none.
    pub fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

/// Apply `op` to every pixel of `region`, one row per work item.
///
/// Rows are split across workers with `axis_iter_mut`, so each pixel is
/// written by exactly one worker and no locking is needed. Rows run in no
/// particular order. Empty regions return without touching the image.
pub fn for_each_pixel_in_rows<P, F>(
    image: &mut PixelImage<P>,
    region: &ResolvedRegion,
    exec: &ExecutionContext,
    op: F,
) where
    P: Pixel,
    F: Fn(&mut P) + Send + Sync,
{
    if region.is_empty() {
        return;
    }

    let rows = (region.min_y - region.offset_y)..(region.max_y - region.offset_y);
    let cols = (region.min_x - region.offset_x)..(region.max_x - region.offset_x);

    let parallelism = exec.max_degree_of_parallelism();
    let min_rows_per_task = region.height().div_ceil(parallelism);
    debug!(
        ?region,
        parallelism, min_rows_per_task, "Scheduling row-parallel pass"
    );

    let mut anchored = image
        .data
        .slice_mut(s![region.offset_y.., region.offset_x..]);
    let mut band = anchored.slice_mut(s![rows, ..]);

    exec.install(|| {
        band.axis_iter_mut(Axis(0))
            .into_par_iter()
            .with_min_len(min_rows_per_task)
            .for_each(|mut row| {
                for x in cols.clone() {
                    op(&mut row[x]);
                }
            });
    });
}
