use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use friendnet_core::SocialGraph;
use tracing::info;
use whiteread::Reader;

/// Read a network file and build the graph.
///
/// Format: `<people> <friendships>` followed by one `src dest` pair per
/// friendship, all whitespace-separated; newlines carry no meaning.
/// File and parse failures surface with the path attached; count and
/// endpoint violations come back as the engine's own errors.
pub fn load_network(path: &Path) -> Result<SocialGraph> {
    let start = Instant::now();
    let file = File::open(path)
        .with_context(|| format!("could not open network file {}", path.display()))?;
    let mut reader = Reader::new(BufReader::new(file));

    let (people, friendships): (i64, i64) = reader
        .parse()
        .map_err(|e| anyhow!("{}: bad header: {}", path.display(), e))?;
    if friendships < 0 {
        bail!("{}: negative friendship count {}", path.display(), friendships);
    }

    let mut edges = Vec::with_capacity(friendships as usize);
    for _ in 0..friendships {
        let pair: (i64, i64) = reader
            .parse()
            .map_err(|e| anyhow!("{}: bad friendship entry: {}", path.display(), e))?;
        edges.push(pair);
    }

    let graph = SocialGraph::from_edge_list(people, edges)
        .with_context(|| format!("{}: rejected network", path.display()))?;

    info!(
        people = graph.person_count(),
        friendships = graph.friendship_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "network loaded"
    );

    Ok(graph)
}
