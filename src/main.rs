#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]

use std::path::PathBuf;

use anyhow::{Context, ensure};
use rangekit::{InputRange, OutputRange, SizedRange, appender, chunks, enumerate, iter};

mod config;
mod log;

use crate::{config::CONFIG, log::Logger};

fn main() -> anyhow::Result<()> {
    Logger::new(CONFIG.use_ansi_color, CONFIG.log_filter.as_str()).init()?;

    for warning in &CONFIG.warnings {
        tracing::warn!("{warning}");
    }

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| CONFIG.input.clone());

    let bytes =
        std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::info!(path = %path.display(), len = bytes.len(), chunk_size = CONFIG.chunk_size, "chunking");

    let mut lengths = appender(Vec::<usize>::with_capacity(
        bytes.len().div_ceil(CONFIG.chunk_size),
    ));

    let mut head = enumerate(chunks(iter(&bytes), CONFIG.chunk_size));
    while !head.is_empty() {
        let chunk = head.front();
        let len = chunk.value.size();
        let checksum = chunk
            .value
            .elements()
            .fold(0u32, |acc, byte| acc.wrapping_mul(31).wrapping_add(u32::from(*byte)));

        println!("{:>6} {:>4} {:08x}", chunk.index, len, checksum);
        lengths.put(len);
        head.pop_front();
    }

    let total: usize = lengths.get().iter().sum();
    tracing::info!(chunks = lengths.size(), total, "done");
    ensure!(
        total == bytes.len(),
        "chunks covered {total} bytes of {}",
        bytes.len()
    );

    Ok(())
}
