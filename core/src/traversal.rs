use std::collections::VecDeque;

use crate::graph::{GraphError, PersonId, SocialGraph};

/// Outcome of a shortest-connection query.
///
/// `NotConnected` is a valid answer, not an error; only `OutOfRange`
/// reports bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionResult {
    /// Both ids name the same person; there is nothing to search for.
    SamePerson,
    /// One of the queried ids is not in the network.
    OutOfRange(GraphError),
    /// Shortest chain of friendships, from source to destination inclusive.
    Connected(Vec<PersonId>),
    /// The two people live in different components.
    NotConnected,
}

/// Shortest connection between two people using BFS (fewest friendships).
///
/// Ids arrive signed from the query boundary so that negative input is
/// representable and rejected instead of wrapping. Traversal state
/// (visited flags, parent pointers, FIFO queue) is allocated fresh per
/// query and dropped on return; the graph itself is never touched.
///
/// The search stops the moment the destination is first discovered:
/// BFS hands out vertices in non-decreasing distance order, so the first
/// discovery is already along a shortest path. Queue exhaustion without
/// discovery means the two people are in different components.
pub fn find_connection(graph: &SocialGraph, src: i64, dest: i64) -> ConnectionResult {
    let src = match graph.resolve_person(src) {
        Ok(id) => id,
        Err(err) => return ConnectionResult::OutOfRange(err),
    };
    let dest = match graph.resolve_person(dest) {
        Ok(id) => id,
        Err(err) => return ConnectionResult::OutOfRange(err),
    };

    if src == dest {
        return ConnectionResult::SamePerson;
    }

    let mut visited = vec![false; graph.person_count()];
    // parent[p] = who first discovered p; None for the source and the unreached
    let mut parent: Vec<Option<PersonId>> = vec![None; graph.person_count()];
    let mut queue: VecDeque<PersonId> = VecDeque::new();

    visited[src] = true;
    queue.push_back(src);

    while let Some(current) = queue.pop_front() {
        for &neighbor in graph.adjacency(current) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            parent[neighbor] = Some(current);

            if neighbor == dest {
                return ConnectionResult::Connected(reconstruct_path(&parent, dest));
            }

            queue.push_back(neighbor);
        }
    }

    ConnectionResult::NotConnected
}

/// Walk parent pointers from the destination back to the source (whose
/// parent is the `None` sentinel), then reverse so the path reads
/// source → destination.
fn reconstruct_path(parent: &[Option<PersonId>], dest: PersonId) -> Vec<PersonId> {
    let mut path = vec![dest];
    let mut current = dest;
    while let Some(prev) = parent[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
