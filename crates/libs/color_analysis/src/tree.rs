//! CART decision tree over the three RGB channels, split on Gini impurity.

use crate::classifier::TrainOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    const fn of(self, rgb: [u8; 3]) -> u8 {
        match self {
            Self::Red => rgb[0],
            Self::Green => rgb[1],
            Self::Blue => rgb[2],
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        channel: Channel,
        /// Values `<= threshold` go left.
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

/// A fitted tree. Node 0 is the root; class ids index the caller's label table.
#[derive(Debug, Clone)]
pub(crate) struct DecisionTree {
    nodes: Vec<Node>,
    depth: usize,
}

impl DecisionTree {
    /// Fits a tree on `features`/`targets`, where every target is `< n_classes`.
    pub(crate) fn fit(
        features: &[[u8; 3]],
        targets: &[usize],
        n_classes: usize,
        options: &TrainOptions,
    ) -> Self {
        let mut builder = TreeBuilder {
            features,
            targets,
            n_classes,
            max_depth: options.max_depth,
            min_samples_split: options.min_samples_split.max(2),
            rng: fastrand::Rng::with_seed(options.seed),
            nodes: Vec::new(),
            depth: 0,
        };
        let indices: Vec<usize> = (0..features.len()).collect();
        builder.grow(&indices, 0);

        Self {
            nodes: builder.nodes,
            depth: builder.depth,
        }
    }

    pub(crate) fn predict(&self, rgb: [u8; 3]) -> usize {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf { class } => return class,
                Node::Split {
                    channel,
                    threshold,
                    left,
                    right,
                } => {
                    index = if f64::from(channel.of(rgb)) <= threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    pub(crate) const fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Leaf { .. }))
            .count()
    }
}

struct Split {
    channel: Channel,
    threshold: f64,
    /// Weighted Gini impurity of both children, scaled by the node size.
    impurity: f64,
}

struct TreeBuilder<'a> {
    features: &'a [[u8; 3]],
    targets: &'a [usize],
    n_classes: usize,
    max_depth: usize,
    min_samples_split: usize,
    rng: fastrand::Rng,
    nodes: Vec<Node>,
    depth: usize,
}

impl TreeBuilder<'_> {
    /// Grows the subtree for `indices` depth-first (left before right) and
    /// returns its node id.
    fn grow(&mut self, indices: &[usize], depth: usize) -> usize {
        self.depth = self.depth.max(depth);
        let counts = self.class_counts(indices);
        let node_index = self.nodes.len();
        self.nodes.push(Node::Leaf {
            class: majority_class(&counts),
        });

        let is_pure = counts.iter().filter(|&&count| count > 0).count() <= 1;
        if is_pure || depth >= self.max_depth || indices.len() < self.min_samples_split {
            return node_index;
        }
        let Some(split) = self.best_split(indices, &counts) else {
            return node_index;
        };

        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .partition(|&&i| f64::from(split.channel.of(self.features[i])) <= split.threshold);
        let left = self.grow(&left, depth + 1);
        let right = self.grow(&right, depth + 1);
        self.nodes[node_index] = Node::Split {
            channel: split.channel,
            threshold: split.threshold,
            left,
            right,
        };
        node_index
    }

    /// Channels are tried in a seeded random order; a candidate only wins with a
    /// strictly lower impurity, so ties keep the first one found.
    fn best_split(&mut self, indices: &[usize], counts: &[usize]) -> Option<Split> {
        let mut channels = Channel::ALL;
        self.rng.shuffle(&mut channels);

        let total = indices.len();
        let mut sorted = indices.to_vec();
        let mut best: Option<Split> = None;

        for channel in channels {
            sorted.sort_by_key(|&i| channel.of(self.features[i]));

            let mut left_counts = vec![0_u64; self.n_classes];
            let mut right_counts: Vec<u64> = counts.iter().map(|&c| c as u64).collect();
            // Running sums of squared class counts, so Gini is O(1) per position.
            let mut left_squares = 0_u64;
            let mut right_squares: u64 = right_counts.iter().map(|c| c * c).sum();

            for position in 0..total - 1 {
                let class = self.targets[sorted[position]];
                left_squares += 2 * left_counts[class] + 1;
                left_counts[class] += 1;
                right_squares -= 2 * right_counts[class] - 1;
                right_counts[class] -= 1;

                let value = channel.of(self.features[sorted[position]]);
                let next_value = channel.of(self.features[sorted[position + 1]]);
                if value == next_value {
                    continue;
                }

                let n_left = (position + 1) as f64;
                let n_right = (total - position - 1) as f64;
                let impurity = (n_left - left_squares as f64 / n_left)
                    + (n_right - right_squares as f64 / n_right);

                if best.as_ref().is_none_or(|b| impurity < b.impurity) {
                    best = Some(Split {
                        channel,
                        threshold: f64::midpoint(f64::from(value), f64::from(next_value)),
                        impurity,
                    });
                }
            }
        }

        best
    }

    fn class_counts(&self, indices: &[usize]) -> Vec<usize> {
        let mut counts = vec![0; self.n_classes];
        for &i in indices {
            counts[self.targets[i]] += 1;
        }
        counts
    }
}

/// Most frequent class; ties go to the lowest class id.
fn majority_class(counts: &[usize]) -> usize {
    let mut best = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = class;
        }
    }
    best
}
