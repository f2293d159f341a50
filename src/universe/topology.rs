//! Jump-route construction: a Kruskal spanning tree over every system pair,
//! topped up to a minimum degree and sprinkled with shortcut routes.

use crate::universe::disjoint_set::DisjointSet;
use crate::universe::model::Position;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Candidate route between two arena indices. Distance is squared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct DegreeBounds {
    pub min: usize,
    pub max: usize,
}

/// Kruskal's algorithm over the complete graph. Ties keep insertion order
/// from the index double loop, so output depends only on `positions`.
pub fn spanning_tree(positions: &[Position]) -> Vec<Edge> {
    let n = positions.len();
    if n < 2 {
        return Vec::new();
    }

    let mut candidates = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            candidates.push(Edge {
                a: i,
                b: j,
                distance: positions[i].distance_squared(&positions[j]) as f64,
            });
        }
    }
    // Stable sort.
    candidates.sort_by(|x, y| x.distance.total_cmp(&y.distance));

    let mut sets = DisjointSet::new(n);
    let mut tree = Vec::with_capacity(n - 1);
    for edge in candidates {
        if sets.union(edge.a, edge.b) {
            tree.push(edge);
            if tree.len() == n - 1 {
                break;
            }
        }
    }
    tree
}

/// Builds the adjacency lists: tree edges first, then minimum-degree
/// top-up, then random shortcuts, then a reciprocity pass.
pub fn build_routes(
    positions: &[Position],
    tree: &[Edge],
    bounds: DegreeBounds,
    shortcut_chance: f64,
    rng: &mut ChaCha8Rng,
) -> Vec<Vec<usize>> {
    let mut links = vec![Vec::new(); positions.len()];
    for edge in tree {
        link(&mut links, edge.a, edge.b);
    }

    let mut topped_up = 0;
    for i in 0..positions.len() {
        if links[i].len() >= bounds.min {
            continue;
        }
        let wanted = bounds.min - links[i].len();
        topped_up += connect_nearest(&mut links, positions, i, wanted, bounds.max);
    }

    let mut shortcuts = 0;
    for i in 0..positions.len() {
        if rng.gen::<f64>() < shortcut_chance {
            let extra = rng.gen_range(1..=2);
            shortcuts += connect_nearest(&mut links, positions, i, extra, bounds.max);
        }
    }

    let repaired = enforce_bidirectional(&mut links);
    log::debug!(
        "routes: {} tree, {} top-up, {} shortcut, {} repaired",
        tree.len(),
        topped_up,
        shortcuts,
        repaired
    );
    links
}

/// Adds every missing reciprocal route. Returns how many were added.
pub fn enforce_bidirectional(links: &mut [Vec<usize>]) -> usize {
    let mut missing = Vec::new();
    for (from, targets) in links.iter().enumerate() {
        for &to in targets {
            if to != from && !links[to].contains(&from) {
                missing.push((to, from));
            }
        }
    }
    let mut added = 0;
    for (from, to) in missing {
        if !links[from].contains(&to) {
            links[from].push(to);
            added += 1;
        }
    }
    added
}

fn link(links: &mut [Vec<usize>], a: usize, b: usize) -> bool {
    if a == b || links[a].contains(&b) {
        return false;
    }
    links[a].push(b);
    links[b].push(a);
    true
}

/// Links `from` to up to `wanted` of its nearest unlinked systems, skipping
/// any system (either end) already at `max`. Returns routes added.
fn connect_nearest(
    links: &mut [Vec<usize>],
    positions: &[Position],
    from: usize,
    wanted: usize,
    max: usize,
) -> usize {
    let origin = positions[from];
    let mut candidates: Vec<usize> = (0..positions.len())
        .filter(|&j| j != from && !links[from].contains(&j))
        .collect();
    candidates.sort_by_key(|&j| origin.distance_squared(&positions[j]));

    let mut added = 0;
    for j in candidates {
        if added == wanted || links[from].len() >= max {
            break;
        }
        if links[j].len() >= max {
            continue;
        }
        if link(links, from, j) {
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn line(n: i32) -> Vec<Position> {
        (0..n).map(|i| Position::new(i * 10, 0)).collect()
    }

    fn scattered(seed: u64, n: usize) -> Vec<Position> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        while out.len() < n {
            let p = Position::new(rng.gen_range(-500..500), rng.gen_range(-500..500));
            if seen.insert(p) {
                out.push(p);
            }
        }
        out
    }

    #[test]
    fn tree_of_a_line_links_neighbours() {
        let tree = spanning_tree(&line(5));
        let pairs: Vec<(usize, usize)> = tree.iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert!(tree.iter().all(|e| e.distance == 100.0));
    }

    #[test]
    fn tree_spans_without_cycles() {
        let positions = scattered(3, 40);
        let tree = spanning_tree(&positions);
        assert_eq!(tree.len(), positions.len() - 1);

        let mut sets = DisjointSet::new(positions.len());
        for edge in &tree {
            assert!(sets.union(edge.a, edge.b), "cycle through {:?}", edge);
        }
        let root = sets.find(0);
        assert!((0..positions.len()).all(|i| sets.find(i) == root));
    }

    #[test]
    fn tree_picks_the_cheaper_side_of_a_triangle() {
        let positions = vec![
            Position::new(0, 0),
            Position::new(3, 0),
            Position::new(0, 4),
        ];
        let tree = spanning_tree(&positions);
        let total: f64 = tree.iter().map(|e| e.distance).sum();
        assert_eq!(total, 9.0 + 16.0);
    }

    #[test]
    fn tiny_inputs_have_no_tree() {
        assert!(spanning_tree(&[]).is_empty());
        assert!(spanning_tree(&[Position::ORIGIN]).is_empty());
    }

    #[test]
    fn routes_respect_degree_bounds_and_symmetry() {
        let positions = scattered(11, 60);
        let tree = spanning_tree(&positions);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let bounds = DegreeBounds { min: 2, max: 6 };
        let links = build_routes(&positions, &tree, bounds, 0.3, &mut rng);

        for (i, targets) in links.iter().enumerate() {
            assert!(targets.len() >= bounds.min, "system {} under-linked", i);
            assert!(targets.len() <= bounds.max, "system {} over-linked", i);
            let unique: HashSet<_> = targets.iter().collect();
            assert_eq!(unique.len(), targets.len());
            for &j in targets {
                assert_ne!(i, j);
                assert!(links[j].contains(&i));
            }
        }
    }

    #[test]
    fn unreachable_minimum_settles_for_what_exists() {
        let positions = line(3);
        let tree = spanning_tree(&positions);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let bounds = DegreeBounds { min: 5, max: 8 };
        let links = build_routes(&positions, &tree, bounds, 0.0, &mut rng);
        assert!(links.iter().all(|l| l.len() == 2));
    }

    #[test]
    fn reciprocity_pass_adds_missing_returns() {
        let mut links = vec![vec![1, 2], vec![], vec![0]];
        assert_eq!(enforce_bidirectional(&mut links), 1);
        assert_eq!(links[1], vec![0]);
        assert_eq!(enforce_bidirectional(&mut links), 0);
    }
}
