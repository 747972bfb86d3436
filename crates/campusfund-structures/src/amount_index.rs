//! Amount-ordered index over active funding requests.
//!
//! A plain unbalanced binary search tree keyed by outstanding amount, with
//! the request id stored alongside to disambiguate equal amounts. Entries
//! with equal amounts always descend right, so in-order traversal is stable
//! and every entry is retained regardless of key collisions.
//!
//! No rebalancing is performed — under adversarial insertion order the tree
//! degrades to a linked list. Known limitation, acceptable at this scale.

use campusfund_types::RequestId;
use rust_decimal::Decimal;

#[derive(Debug)]
struct Node {
    amount: Decimal,
    id: RequestId,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(amount: Decimal, id: RequestId) -> Box<Self> {
        Box::new(Self {
            amount,
            id,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree over `(amount, request id)` entries.
#[derive(Debug, Default)]
pub struct AmountIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl AmountIndex {
    /// Create a new empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =================================================================
    // Insertion
    // =================================================================

    /// Insert an entry keyed by `amount`. Equal amounts descend right.
    pub fn insert(&mut self, amount: Decimal, id: RequestId) {
        Self::insert_at(&mut self.root, amount, id);
        self.len += 1;
    }

    fn insert_at(link: &mut Option<Box<Node>>, amount: Decimal, id: RequestId) {
        match link {
            None => *link = Some(Node::leaf(amount, id)),
            Some(node) if amount < node.amount => Self::insert_at(&mut node.left, amount, id),
            Some(node) => Self::insert_at(&mut node.right, amount, id),
        }
    }

    // =================================================================
    // Removal
    // =================================================================

    /// Remove the entry for `id`, located under the key `amount`.
    ///
    /// The caller must pass the amount the entry is currently keyed by.
    /// Returns `false` if no such entry exists. A node with two children is
    /// replaced by its in-order successor (leftmost node of the right
    /// subtree).
    pub fn remove(&mut self, amount: Decimal, id: RequestId) -> bool {
        let removed = Self::remove_from(&mut self.root, amount, id);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_from(link: &mut Option<Box<Node>>, amount: Decimal, id: RequestId) -> bool {
        let Some(node) = link else {
            return false;
        };

        if amount < node.amount {
            return Self::remove_from(&mut node.left, amount, id);
        }
        if amount > node.amount || node.id != id {
            // Equal amounts always descend right, so an identity mismatch
            // at an equal key continues into the right subtree.
            return Self::remove_from(&mut node.right, amount, id);
        }

        match (node.left.take(), node.right.take()) {
            (None, None) => {
                *link = None;
            }
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
            }
            (Some(left), Some(right)) => {
                let (succ_amount, succ_id) = Self::leftmost(&right);
                node.left = Some(left);
                node.right = Some(right);
                node.amount = succ_amount;
                node.id = succ_id;
                let _removed = Self::remove_from(&mut node.right, succ_amount, succ_id);
                debug_assert!(_removed, "in-order successor must exist");
            }
        }
        true
    }

    fn leftmost(mut node: &Node) -> (Decimal, RequestId) {
        while let Some(left) = &node.left {
            node = left;
        }
        (node.amount, node.id)
    }

    // =================================================================
    // Queries
    // =================================================================

    /// In-order traversal: entries in ascending amount order.
    ///
    /// Lazy and restartable — each call starts a fresh traversal borrowing
    /// the tree.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Number of entries in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether an entry for `id` exists under the key `amount`.
    #[must_use]
    pub fn contains(&self, amount: Decimal, id: RequestId) -> bool {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            if amount < node.amount {
                link = node.left.as_deref();
            } else if amount > node.amount || node.id != id {
                link = node.right.as_deref();
            } else {
                return true;
            }
        }
        false
    }
}

/// Iterative in-order traversal over an [`AmountIndex`].
#[derive(Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = (Decimal, RequestId);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((node.amount, node.id))
    }
}
