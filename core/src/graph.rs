use thiserror::Error;

/// Identity of a person in the network: a dense index in `[0, person_count)`.
/// There is no payload behind it; the index is the person.
pub type PersonId = usize;

/// Errors produced by graph construction and lookups.
///
/// These are values returned to the caller, never aborts. The frontend
/// decides how to surface them and keeps its session alive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The declared person count was negative.
    #[error("invalid network size: {0}")]
    InvalidSize(i64),
    /// An edge endpoint or queried id falls outside `[0, people)`.
    #[error("person {id} does not exist (valid ids: 0..{people})")]
    OutOfRange { id: i64, people: usize },
}

/// In-memory social network: one owned friend list per person.
///
/// Friendships are undirected: `add_friendship` inserts both directions,
/// so the adjacency relation is symmetric by construction, and every
/// stored id is bounds-checked on the way in. The graph is built once
/// from an edge list and read-only afterwards; there is no removal API,
/// so concurrent read-only queries need no locking.
///
/// Parallel friendships are kept as-is: repeated inserts of the same pair
/// show up in friend counts (input-shape-dependent), while traversal is
/// unaffected, since the visited set admits each person once.
#[derive(Debug)]
pub struct SocialGraph {
    friends: Vec<Vec<PersonId>>,
    friendship_count: usize,
}

impl SocialGraph {
    /// Empty network of `people` persons, no friendships yet.
    pub fn new(people: usize) -> Self {
        Self {
            friends: vec![Vec::new(); people],
            friendship_count: 0,
        }
    }

    /// Build a network from an already-parsed edge list.
    ///
    /// This is the bulk load path. Counts and endpoints arrive as signed
    /// integers straight from the input file, so a negative size or a
    /// negative endpoint is representable and rejected here rather than
    /// wrapping into a huge index.
    pub fn from_edge_list<I>(people: i64, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        if people < 0 {
            return Err(GraphError::InvalidSize(people));
        }
        let mut graph = Self::new(people as usize);
        for (src, dest) in edges {
            let src = graph.resolve_person(src)?;
            let dest = graph.resolve_person(dest)?;
            graph.add_friendship(src, dest)?;
        }
        Ok(graph)
    }

    /// Record that `a` and `b` are friends.
    ///
    /// Appends each to the other's list; both endpoints must be in range.
    /// No dedup: calling twice with the same pair yields a parallel
    /// friendship.
    pub fn add_friendship(&mut self, a: PersonId, b: PersonId) -> Result<(), GraphError> {
        self.check_person(a)?;
        self.check_person(b)?;
        self.friends[a].push(b);
        self.friends[b].push(a);
        self.friendship_count += 1;
        Ok(())
    }

    /// Validate a raw signed id from the query boundary into a `PersonId`.
    pub fn resolve_person(&self, raw: i64) -> Result<PersonId, GraphError> {
        if raw < 0 || raw as u64 >= self.friends.len() as u64 {
            return Err(GraphError::OutOfRange {
                id: raw,
                people: self.friends.len(),
            });
        }
        Ok(raw as PersonId)
    }

    fn check_person(&self, person: PersonId) -> Result<(), GraphError> {
        if person >= self.friends.len() {
            return Err(GraphError::OutOfRange {
                id: person as i64,
                people: self.friends.len(),
            });
        }
        Ok(())
    }

    /// A person's direct friends, in the order the friendships were added.
    pub fn friends_of(&self, person: PersonId) -> Result<&[PersonId], GraphError> {
        self.check_person(person)?;
        Ok(&self.friends[person])
    }

    /// Number of friendships incident to `person`, counting parallels.
    pub fn friend_count(&self, person: PersonId) -> Result<usize, GraphError> {
        self.check_person(person)?;
        Ok(self.friends[person].len())
    }

    /// Neighbor slice without the range check; out-of-range yields an
    /// empty slice. Traversal uses this on ids it has already validated.
    pub(crate) fn adjacency(&self, person: PersonId) -> &[PersonId] {
        self.friends.get(person).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn person_count(&self) -> usize {
        self.friends.len()
    }

    /// Number of undirected friendships added, counting parallels.
    pub fn friendship_count(&self) -> usize {
        self.friendship_count
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists: usize = self
            .friends
            .iter()
            .map(|list| list.capacity() * size_of::<PersonId>())
            .sum();
        lists + self.friends.capacity() * size_of::<Vec<PersonId>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_friendship_symmetric() {
        let mut g = SocialGraph::new(4);
        g.add_friendship(0, 1).unwrap();
        g.add_friendship(1, 2).unwrap();
        assert!(g.friends_of(0).unwrap().contains(&1));
        assert!(g.friends_of(1).unwrap().contains(&0));
        assert!(g.friends_of(1).unwrap().contains(&2));
        assert!(g.friends_of(2).unwrap().contains(&1));
    }

    #[test]
    fn test_friend_count_matches_incident_edges() {
        let mut g = SocialGraph::new(4);
        g.add_friendship(1, 0).unwrap();
        g.add_friendship(1, 2).unwrap();
        g.add_friendship(1, 3).unwrap();
        assert_eq!(g.friend_count(1).unwrap(), 3);
        assert_eq!(g.friend_count(0).unwrap(), 1);
    }

    #[test]
    fn test_parallel_friendships_kept() {
        let mut g = SocialGraph::new(2);
        g.add_friendship(0, 1).unwrap();
        g.add_friendship(0, 1).unwrap();
        assert_eq!(g.friend_count(0).unwrap(), 2);
        assert_eq!(g.friend_count(1).unwrap(), 2);
    }

    #[test]
    fn test_friends_in_insertion_order() {
        let mut g = SocialGraph::new(5);
        g.add_friendship(0, 3).unwrap();
        g.add_friendship(0, 1).unwrap();
        g.add_friendship(0, 4).unwrap();
        assert_eq!(g.friends_of(0).unwrap(), &[3, 1, 4]);
    }

    #[test]
    fn test_add_friendship_out_of_range() {
        let mut g = SocialGraph::new(3);
        let err = g.add_friendship(0, 3).unwrap_err();
        assert_eq!(err, GraphError::OutOfRange { id: 3, people: 3 });
        // Nothing was inserted on the failed call
        assert_eq!(g.friend_count(0).unwrap(), 0);
    }

    #[test]
    fn test_from_edge_list_builds_graph() {
        let g = SocialGraph::from_edge_list(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(g.person_count(), 4);
        assert_eq!(g.friendship_count(), 3);
        assert_eq!(g.friends_of(1).unwrap(), &[0, 2]);
    }

    #[test]
    fn test_from_edge_list_negative_size() {
        let err = SocialGraph::from_edge_list(-1, vec![]).unwrap_err();
        assert_eq!(err, GraphError::InvalidSize(-1));
    }

    #[test]
    fn test_from_edge_list_endpoint_out_of_range() {
        // Edge (5, 1) on a 3-person network must be rejected, not wrapped
        let err = SocialGraph::from_edge_list(3, vec![(0, 1), (5, 1)]).unwrap_err();
        assert_eq!(err, GraphError::OutOfRange { id: 5, people: 3 });
    }

    #[test]
    fn test_from_edge_list_negative_endpoint() {
        let err = SocialGraph::from_edge_list(3, vec![(-2, 1)]).unwrap_err();
        assert_eq!(err, GraphError::OutOfRange { id: -2, people: 3 });
    }

    #[test]
    fn test_resolve_person_bounds() {
        let g = SocialGraph::new(3);
        assert_eq!(g.resolve_person(0).unwrap(), 0);
        assert_eq!(g.resolve_person(2).unwrap(), 2);
        assert!(g.resolve_person(3).is_err());
        assert!(g.resolve_person(-1).is_err());
        assert!(g.resolve_person(i64::MAX).is_err());
    }

    #[test]
    fn test_empty_network() {
        let g = SocialGraph::new(0);
        assert_eq!(g.person_count(), 0);
        assert!(g.resolve_person(0).is_err());
    }

    #[test]
    fn test_self_friendship() {
        // A self pair inserts into the same list twice, like any other pair
        let mut g = SocialGraph::new(2);
        g.add_friendship(1, 1).unwrap();
        assert_eq!(g.friend_count(1).unwrap(), 2);
        assert_eq!(g.friends_of(1).unwrap(), &[1, 1]);
    }

    #[test]
    fn test_queries_out_of_range() {
        let g = SocialGraph::new(3);
        assert!(g.friends_of(3).is_err());
        assert!(g.friend_count(7).is_err());
    }

    #[test]
    fn test_memory_usage_nonzero() {
        let g = SocialGraph::from_edge_list(10, (0..9).map(|i| (i, i + 1))).unwrap();
        assert!(g.memory_usage() > 0);
    }
}
