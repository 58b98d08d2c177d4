//! AVL-balanced ordered map.
//!
//! Nodes are owned boxes; every mutating call rebalances on the way back up the
//! recursion, so the height invariant (`|h(left) - h(right)| <= 1` at every node)
//! holds between calls.

use super::error::MapError;
use std::cmp::Ordering;

type Subtree<V> = Option<Box<Node<V>>>;

struct Node<V> {
    key: String,
    value: V,
    height: u32,
    left: Subtree<V>,
    right: Subtree<V>,
}

impl<V> Node<V> {
    fn leaf(key: String, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Positive when the left side is taller.
    fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

fn height<V>(tree: &Subtree<V>) -> u32 {
    tree.as_ref().map_or(0, |node| node.height)
}

fn compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

fn rotate_right<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Restores the AVL invariant at `node`, assuming both children already satisfy it.
fn rebalance<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // Left-Right case: straighten the left child first.
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        // Right-Left case
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

fn rebalance_slot<V>(slot: &mut Subtree<V>) {
    if let Some(node) = slot.take() {
        *slot = Some(rebalance(node));
    }
}

fn insert_into<V>(slot: &mut Subtree<V>, key: String, value: V) -> Result<(), MapError> {
    let Some(node) = slot.as_mut() else {
        *slot = Some(Node::leaf(key, value));
        return Ok(());
    };

    match compare(key.as_bytes(), node.key.as_bytes()) {
        Ordering::Less => insert_into(&mut node.left, key, value)?,
        Ordering::Greater => insert_into(&mut node.right, key, value)?,
        Ordering::Equal => return Err(MapError::AlreadyExists(key)),
    }

    rebalance_slot(slot);
    Ok(())
}

/// Detaches the leftmost node of `node`, returning it together with what remains.
fn take_min<V>(mut node: Box<Node<V>>) -> (Box<Node<V>>, Subtree<V>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (node, rest)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(rebalance(node)))
        }
    }
}

fn remove_from<V>(slot: &mut Subtree<V>, key: &str) -> Option<V> {
    let node = slot.as_mut()?;

    let removed = match compare(key.as_bytes(), node.key.as_bytes()) {
        Ordering::Less => remove_from(&mut node.left, key)?,
        Ordering::Greater => remove_from(&mut node.right, key)?,
        Ordering::Equal => {
            let mut target = slot.take()?;
            *slot = match (target.left.take(), target.right.take()) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (left, Some(right)) => {
                    let (mut successor, rest) = take_min(right);
                    successor.left = left;
                    successor.right = rest;
                    Some(rebalance(successor))
                }
            };
            return Some(target.value);
        }
    };

    rebalance_slot(slot);
    Some(removed)
}

fn find<'a, V>(mut tree: &'a Subtree<V>, key: &str) -> Option<&'a Node<V>> {
    while let Some(node) = tree {
        tree = match compare(key.as_bytes(), node.key.as_bytes()) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return Some(node),
        };
    }
    None
}

fn find_mut<'a, V>(tree: &'a mut Subtree<V>, key: &str) -> Option<&'a mut Node<V>> {
    let node = tree.as_deref_mut()?;
    match compare(key.as_bytes(), node.key.as_bytes()) {
        Ordering::Less => find_mut(&mut node.left, key),
        Ordering::Greater => find_mut(&mut node.right, key),
        Ordering::Equal => Some(node),
    }
}

/// Pruned in-order walk: subtrees entirely outside `[lo, hi)` are never visited.
fn collect_range<V: Clone>(
    tree: &Subtree<V>,
    lo: &[u8],
    hi: Option<&[u8]>,
    out: &mut Vec<(String, V)>,
) {
    let Some(node) = tree else {
        return;
    };
    let key = node.key.as_bytes();
    let at_or_above_lo = compare(key, lo) != Ordering::Less;
    let below_hi = hi.is_none_or(|hi| compare(key, hi) == Ordering::Less);

    if at_or_above_lo {
        collect_range(&node.left, lo, hi, out);
    }
    if at_or_above_lo && below_hi {
        out.push((node.key.clone(), node.value.clone()));
    }
    if below_hi {
        collect_range(&node.right, lo, hi, out);
    }
}

/// A string-keyed ordered map with logarithmic point operations.
pub struct OrderedMap<V> {
    root: Subtree<V>,
    len: usize,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; 0 when empty, 1 for a single entry.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Adds a new entry. Fails without touching the map if `key` is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<(), MapError> {
        insert_into(&mut self.root, key.into(), value)?;
        self.len += 1;
        Ok(())
    }

    /// Removes `key`, returning the value it held.
    pub fn delete(&mut self, key: &str) -> Result<V, MapError> {
        let value =
            remove_from(&mut self.root, key).ok_or_else(|| MapError::NotFound(key.to_string()))?;
        self.len -= 1;
        Ok(value)
    }

    pub fn lookup(&self, key: &str) -> Result<&V, MapError> {
        find(&self.root, key)
            .map(|node| &node.value)
            .ok_or_else(|| MapError::NotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        find(&self.root, key).is_some()
    }

    /// Replaces the value of an existing key and returns the previous one.
    /// The key itself and the key set are never changed.
    pub fn assign(&mut self, key: &str, value: V) -> Result<V, MapError> {
        let node = find_mut(&mut self.root, key).ok_or_else(|| MapError::NotFound(key.to_string()))?;
        Ok(std::mem::replace(&mut node.value, value))
    }

    /// The greatest key and its value.
    pub fn max(&self) -> Result<(&str, &V), MapError> {
        let mut node = self.root.as_deref().ok_or(MapError::Empty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok((node.key.as_str(), &node.value))
    }

    /// The smallest key and its value.
    pub fn min(&self) -> Result<(&str, &V), MapError> {
        let mut node = self.root.as_deref().ok_or(MapError::Empty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok((node.key.as_str(), &node.value))
    }

    /// Borrowing ascending iterator.
    pub fn iter(&self) -> Iter<'_, V> {
        let mut iter = Iter {
            stack: Vec::with_capacity(self.height() as usize),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<V: Clone> OrderedMap<V> {
    /// Snapshot of every entry in ascending key order.
    pub fn in_order(&self) -> Vec<(String, V)> {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Entries with `lo <= key < hi`, ascending.
    ///
    /// Bounds are raw bytes so that computed bounds (which need not be valid UTF-8)
    /// can be passed directly. An empty result is returned when `hi <= lo`.
    pub fn range(&self, lo: impl AsRef<[u8]>, hi: impl AsRef<[u8]>) -> Vec<(String, V)> {
        let mut out = Vec::new();
        collect_range(&self.root, lo.as_ref(), Some(hi.as_ref()), &mut out);
        out
    }

    /// Entries with `lo <= key`, ascending.
    pub fn range_from(&self, lo: impl AsRef<[u8]>) -> Vec<(String, V)> {
        let mut out = Vec::new();
        collect_range(&self.root, lo.as_ref(), None, &mut out);
        out
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ascending iterator over `(key, value)` references.
pub struct Iter<'a, V> {
    stack: Vec<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((node.key.as_str(), &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
