//! Disjoint set forest over pixel node ids, carrying the per-component statistics the
//! merge criterion needs.
//!
//! Node ids are `1..=n`; slot 0 is reserved and never part of any component. Each slot
//! either links to a parent node or marks a root, in which case it names the statistics
//! record of that root.

use num_traits::Float;

/// Statistics tracked for each root of the forest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootStats<T> {
    rank: usize,
    min_internal_difference: T,
    size: usize,
}

impl<T: Float> RootStats<T> {
    fn singleton() -> Self {
        RootStats { rank: 1, min_internal_difference: T::zero(), size: 1 }
    }

    /// Union by rank bookkeeping value. Approximates tree height, it is not the true height.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Weight of the edge that triggered the latest merge into this component, 0 for a
    /// singleton.
    pub fn min_internal_difference(&self) -> T {
        self.min_internal_difference
    }

    /// Number of nodes in this component.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Adaptive merge threshold: `min_internal_difference + tau_k / size`.
    pub fn threshold(&self, tau_k: T) -> T {
        let size = T::from(self.size).unwrap_or_else(T::one);
        self.min_internal_difference + tau_k / size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Vacant,
    Parent(usize),
    Root(usize),
}

/// Union-find over node ids `1..=n` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSetForest<T> {
    slots: Vec<Slot>,
    stats: Vec<RootStats<T>>,
}

impl<T: Float> DisjointSetForest<T> {
    /// Creates a forest of `n_nodes` singleton components, ids `1..=n_nodes`.
    pub fn new(n_nodes: usize) -> Self {
        let mut slots = Vec::with_capacity(n_nodes + 1);
        slots.push(Slot::Vacant);
        slots.extend((0..n_nodes).map(Slot::Root));
        let stats = vec![RootStats::singleton(); n_nodes];
        DisjointSetForest { slots, stats }
    }

    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the root of `node`, pointing every node visited on the way directly at it.
    ///
    /// # Panics
    /// If `node` is not in `1..=n`.
    pub fn find(&mut self, node: usize) -> usize {
        self.check_node(node);
        let mut root = node;
        while let Slot::Parent(parent) = self.slots[root] {
            root = parent;
        }
        let mut current = node;
        while let Slot::Parent(parent) = self.slots[current] {
            self.slots[current] = Slot::Parent(root);
            current = parent;
        }
        root
    }

    /// Statistics of the component containing `node`.
    ///
    /// # Panics
    /// If `node` is not in `1..=n`.
    pub fn root_stats(&mut self, node: usize) -> &RootStats<T> {
        let root = self.find(node);
        let stats_id = self.stats_id(root);
        &self.stats[stats_id]
    }

    /// Merges the components of `a` and `b`, recording `edge_weight` as the new minimum
    /// internal difference of the surviving root. The higher rank root survives; on equal
    /// ranks the root of `a` survives and its rank grows by one.
    ///
    /// The surviving root's `min_internal_difference` is overwritten, not combined. Merges
    /// are only made along edges that are already above both components' internal
    /// differences, so overwriting always advances the bound.
    ///
    /// # Returns
    /// * `false` if `a` and `b` were already in the same component, `true` otherwise.
    ///
    /// # Panics
    /// If `a` or `b` is not in `1..=n`.
    pub fn union(&mut self, a: usize, b: usize, edge_weight: T) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        let stats_a = self.stats_id(root_a);
        let stats_b = self.stats_id(root_b);
        let rank_a = self.stats[stats_a].rank;
        let rank_b = self.stats[stats_b].rank;

        let (winner, loser, winner_stats, loser_stats) = if rank_a >= rank_b {
            (root_a, root_b, stats_a, stats_b)
        } else {
            (root_b, root_a, stats_b, stats_a)
        };
        let absorbed_size = self.stats[loser_stats].size;
        let survivor = &mut self.stats[winner_stats];
        if rank_a == rank_b {
            survivor.rank += 1;
        }
        survivor.size += absorbed_size;
        survivor.min_internal_difference = edge_weight;
        self.slots[loser] = Slot::Parent(winner);
        true
    }

    /// Every live root with the size of its component, in ascending root order.
    pub fn components(&self) -> Vec<(usize, usize)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(node, slot)| match *slot {
                Slot::Root(stats_id) => Some((node, self.stats[stats_id].size)),
                _ => None,
            })
            .collect()
    }

    /// Number of live roots.
    pub fn component_count(&self) -> usize {
        self.slots.iter().filter(|slot| matches!(slot, Slot::Root(_))).count()
    }

    /// Root of every node, element `i` holding the root of node `i + 1`.
    pub fn labels(&mut self) -> Vec<usize> {
        let n_nodes = self.len();
        (1..=n_nodes).map(|node| self.find(node)).collect()
    }

    fn stats_id(&self, root: usize) -> usize {
        match self.slots[root] {
            Slot::Root(stats_id) => stats_id,
            other => unreachable!("Node {root} is not a root: {other:?}"),
        }
    }

    fn check_node(&self, node: usize) {
        assert!(
            node >= 1 && node < self.slots.len(),
            "Node id {node} is outside the forest's id range 1..={}",
            self.len()
        );
    }
}
