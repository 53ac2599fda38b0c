//! Comparison tests between QuadTree and a brute-force linear scan
//!
//! Splitting is an optimization only: whatever the configuration, every query
//! must return exactly what scanning all live items returns.

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rand::{Rng, SeedableRng};

    /// Entity with an identity so duplicates at one coordinate stay distinct
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Tagged {
        id: usize,
        x: f64,
        y: f64,
    }

    impl Locatable for Tagged {
        fn x(&self) -> f64 {
            self.x
        }

        fn y(&self) -> f64 {
            self.y
        }
    }

    fn random_items(rng: &mut rand::rngs::StdRng, count: usize) -> Vec<Tagged> {
        (0..count)
            .map(|id| Tagged {
                id,
                x: rng.random_range(0.0..=100.0),
                y: rng.random_range(0.0..=100.0),
            })
            .collect()
    }

    fn random_box(rng: &mut rand::rngs::StdRng) -> BoundingBox {
        let left = rng.random_range(-10.0..100.0);
        let top = rng.random_range(-10.0..100.0);
        let width = rng.random_range(0.0..40.0);
        let height = rng.random_range(0.0..40.0);
        BoundingBox::create(left, top, left + width, top + height)
    }

    fn ids<'a>(items: impl IntoIterator<Item = &'a Tagged>) -> Vec<usize> {
        let mut ids: Vec<usize> = items.into_iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids
    }

    fn configs() -> Vec<QuadTreeConfig<Tagged>> {
        vec![
            QuadTreeConfig::new(),
            QuadTreeConfig::new().with_capacity(1).with_max_depth(12),
            QuadTreeConfig::new().with_capacity(4),
            QuadTreeConfig::new().with_capacity(2).with_max_depth(3),
            QuadTreeConfig::new().with_split_predicate(|items: &[Tagged]| items.len() > 7),
        ]
    }

    fn build(config: QuadTreeConfig<Tagged>, items: &[Tagged]) -> QuadTree<Tagged> {
        let mut tree = QuadTree::with_config(BoundingBox::create(0.0, 0.0, 100.0, 100.0), config);
        for item in items {
            tree.add(*item);
        }
        tree
    }

    #[test]
    fn test_box_query_consistency() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let items = random_items(&mut rng, 1000);

        for config in configs() {
            let tree = build(config, &items);
            assert_eq!(tree.len(), items.len());

            for _ in 0..200 {
                let area = random_box(&mut rng);
                let expected = ids(items.iter().filter(|t| area.contains(*t)));
                assert_eq!(ids(tree.get(&area)), expected, "Box query {area} differs from linear scan");
            }
        }
    }

    #[test]
    fn test_circle_query_consistency() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let items = random_items(&mut rng, 800);

        for config in configs() {
            let tree = build(config, &items);

            for _ in 0..200 {
                let center = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
                let radius = rng.random_range(0.0..25.0);
                let found = tree.get_in_circle(center, radius);

                let expected = ids(items.iter().filter(|t| center.distance_to(*t) <= radius));
                assert_eq!(ids(found.iter().copied()), expected, "Circle query differs from linear scan");

                let broad = ids(tree.get(&BoundingBox::around(&center, radius)));
                assert!(
                    expected.iter().all(|id| broad.binary_search(id).is_ok()),
                    "Circle result must be a subset of its bounding box result"
                );
            }
        }
    }

    #[test]
    fn test_add_remove_enumeration() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1234);
        let items = random_items(&mut rng, 600);

        for config in configs() {
            let mut tree = build(config, &items);
            let mut live = items.clone();

            for round in 0..300 {
                let index = rng.random_range(0..live.len());
                let victim = live.swap_remove(index);
                tree.remove(&victim);
                if round % 3 == 0 {
                    // removing twice must be harmless
                    tree.remove(&victim);
                }
            }

            assert_eq!(ids(tree.all()), ids(&live), "all() must list exactly the live items");
            assert_eq!(tree.len(), live.len());

            let area = BoundingBox::create(20.0, 20.0, 70.0, 70.0);
            let expected = ids(live.iter().filter(|t| area.contains(*t)));
            assert_eq!(ids(tree.get(&area)), expected);
        }
    }

    #[test]
    fn test_grid_points_on_quadrant_edges() {
        // integer grid puts many points exactly on split lines
        let mut items = Vec::new();
        for gx in 0..=20 {
            for gy in 0..=20 {
                items.push(Tagged {
                    id: items.len(),
                    x: f64::from(gx) * 5.0,
                    y: f64::from(gy) * 5.0,
                });
            }
        }

        let tree = build(QuadTreeConfig::new().with_capacity(3), &items);
        assert_eq!(tree.len(), items.len(), "Every grid point must be stored exactly once");

        let area = BoundingBox::create(25.0, 25.0, 50.0, 75.0);
        let expected = ids(items.iter().filter(|t| area.contains(*t)));
        assert_eq!(expected.len(), 6 * 11);
        assert_eq!(ids(tree.get(&area)), expected);
    }
}
