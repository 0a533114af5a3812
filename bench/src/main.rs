use std::time::Instant;

use friendnet_core::{find_connection, ConnectionResult, SocialGraph};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let people: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);
    let people = people.max(100);

    if mode == "help" || mode == "--help" {
        println!("Usage: friendnet-bench [mode] [person_count]");
        println!();
        println!("Modes:");
        println!("  all          Run all generators and benchmark each (default)");
        println!("  random       Erdos-Renyi uniform friendships (baseline)");
        println!("  smallworld   Watts-Strogatz ring lattice + shortcuts");
        println!("  scalefree    Preferential attachment via edge sampling (hub-heavy)");
        println!("  communities  Two dense clusters joined by a thin bridge");
        println!();
        println!("Default person_count: 1000000 (minimum 100)");
        return;
    }

    println!("friendnet-bench");
    println!("===============");
    println!();

    let generators: Vec<(&str, fn(u64) -> Vec<(i64, i64)>)> = match mode {
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "communities" => vec![("Communities (cluster-bridge-cluster)", gen_communities)],
        "all" => vec![
            ("Erdos-Renyi random", gen_random as fn(u64) -> Vec<(i64, i64)>),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Communities (cluster-bridge-cluster)", gen_communities),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, people);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Vec<(i64, i64)>, people: u64) {
    println!("--- {} ---", name);
    println!("Target: {} people", people);

    let t = Instant::now();
    let edges = generator(people);
    let graph = match SocialGraph::from_edge_list(people as i64, edges) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}: generator produced a bad network: {}", name, err);
            return;
        }
    };
    let build_time = t.elapsed();
    println!(
        "Built in {:.2}s — {} people, {} friendships, ~{:.0}MB",
        build_time.as_secs_f64(),
        graph.person_count(),
        graph.friendship_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    // Friend lookups over a spread of ids
    let samples = 10_000.min(people);
    let step = people / samples;
    let t = Instant::now();
    let mut total_friends = 0usize;
    for i in 0..samples {
        if let Ok(count) = graph.friend_count((i * step) as usize) {
            total_friends += count;
        }
    }
    let elapsed = t.elapsed();
    println!(
        "Friend lookups: {} lookups, {:.1} avg friends, {:.1}ms total",
        samples,
        total_friends as f64 / samples as f64,
        elapsed.as_secs_f64() * 1000.0
    );

    // Connection searches between increasingly distant pairs
    println!();
    println!("{:>12} {:>12} {:>10} {:>10}", "src", "dest", "hops", "time");
    println!("{:->12} {:->12} {:->10} {:->10}", "", "", "", "");
    let far = people as i64 - 1;
    for (src, dest) in [(0, far), (0, far / 2), (far / 4, 3 * far / 4)] {
        let t = Instant::now();
        let result = find_connection(&graph, src, dest);
        let elapsed = t.elapsed();
        let outcome = match result {
            ConnectionResult::Connected(path) => format!("{}", path.len() - 1),
            ConnectionResult::NotConnected => "none".to_string(),
            ConnectionResult::SamePerson => "same".to_string(),
            ConnectionResult::OutOfRange(_) => "bad id".to_string(),
        };
        println!(
            "{:>12} {:>12} {:>10} {:>8.1}ms",
            src,
            dest,
            outcome,
            elapsed.as_secs_f64() * 1000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators — all O(people + friendships), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Erdos-Renyi: uniform random friendships, ~10 per person on average.
/// Baseline topology with no social structure.
fn gen_random(people: u64) -> Vec<(i64, i64)> {
    let target = people * 5;
    let mut rng = FastRng::new(54321);
    let mut edges = Vec::with_capacity(target as usize);

    for _ in 0..target {
        let a = rng.next(people);
        let b = rng.next(people);
        if a != b {
            edges.push((a as i64, b as i64));
        }
    }

    edges
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each person befriends their K nearest ring neighbors, then each
/// friendship is rewired with probability p. High clustering with short
/// path lengths, the classic social-network shape.
fn gen_small_world(people: u64) -> Vec<(i64, i64)> {
    let k = 5u64; // neighbors on each side
    let p = 0.1f64; // rewire probability
    let mut rng = FastRng::new(67890);
    let mut edges = Vec::with_capacity((people * k) as usize);

    for i in 0..people {
        for j in 1..=k {
            let neighbor = (i + j) % people;
            if rng.next_f64() < p {
                let rewired = rng.next(people);
                if rewired != i {
                    edges.push((i as i64, rewired as i64));
                } else {
                    edges.push((i as i64, neighbor as i64));
                }
            } else {
                edges.push((i as i64, neighbor as i64));
            }
        }
    }

    edges
}

/// Scale-free via edge-list sampling (O(friendships), not O(n²)).
///
/// Preferential attachment by picking a random existing friendship and
/// befriending one of its endpoints, so popular people accumulate friends.
fn gen_scale_free(people: u64) -> Vec<(i64, i64)> {
    let per_person = 5u64;
    let mut rng = FastRng::new(12345);
    let mut edges: Vec<(i64, i64)> = Vec::with_capacity((people * per_person) as usize);

    // Endpoint list for O(1) degree-proportional sampling
    let mut endpoints: Vec<u64> = Vec::with_capacity((people * per_person * 2) as usize);

    // Seed: small clique
    let seed = 5u64.min(people);
    for i in 0..seed {
        for j in (i + 1)..seed {
            edges.push((i as i64, j as i64));
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for newcomer in seed..people {
        let attach = per_person.min(newcomer);
        for _ in 0..attach {
            let idx = rng.next(endpoints.len() as u64) as usize;
            let target = endpoints[idx];
            if target != newcomer {
                edges.push((newcomer as i64, target as i64));
                endpoints.push(newcomer);
                endpoints.push(target);
            }
        }
    }

    edges
}

/// Two dense clusters joined by a thin bridge of mutual acquaintances.
/// Worst case for "find the connection through the bottleneck."
fn gen_communities(people: u64) -> Vec<(i64, i64)> {
    let bridge_len = 10u64;
    let cluster = (people - bridge_len) / 2;
    let mut rng = FastRng::new(99999);
    let mut edges = Vec::with_capacity((people * 8) as usize);

    // Cluster A: ids [0, cluster)
    for i in 0..cluster {
        for _ in 0..8u64.min(cluster - 1) {
            let friend = rng.next(cluster);
            if friend != i {
                edges.push((i as i64, friend as i64));
            }
        }
    }

    // Bridge chain from the last of A to the first of B
    let bridge_start = cluster;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        let prev = if i == 0 { cluster - 1 } else { id - 1 };
        edges.push((prev as i64, id as i64));
    }

    // Cluster B: ids [bridge_start + bridge_len, people)
    let b_start = bridge_start + bridge_len;
    edges.push((b_start as i64 - 1, b_start as i64));
    for i in b_start..people {
        for _ in 0..8u64.min(people - b_start - 1) {
            let friend = b_start + rng.next(people - b_start);
            if friend != i {
                edges.push((i as i64, friend as i64));
            }
        }
    }

    edges
}
