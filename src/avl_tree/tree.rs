use crate::arena::{Handle, TypedArena};
use crate::avl_tree::cursor::Cursor;
use crate::avl_tree::node::Node;
use crate::avl_tree::{Error, Result};
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp;
use std::cmp::Ordering;

/// An AVL tree over key-value entries, keyed by the entry's key.
///
/// Nodes live in a typed arena and reference each other through handles: the
/// child links are the owning direction of the structure, the parent link is
/// a back-reference used by in-order navigation. The tree never interprets
/// keys beyond comparing them.
pub struct AvlTree<T, U> {
    pub arena: TypedArena<Node<T, U>>,
    pub root: Option<Handle>,
    len: usize,
}

impl<T, U> AvlTree<T, U> {
    pub fn new() -> Self {
        AvlTree {
            arena: TypedArena::new(),
            root: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    fn height(&self, tree: Option<Handle>) -> usize {
        match tree {
            None => 0,
            Some(handle) => self.arena[handle].height,
        }
    }

    fn update_height(&mut self, handle: Handle) {
        let left = self.arena[handle].left;
        let right = self.arena[handle].right;
        let height = cmp::max(self.height(left), self.height(right)) + 1;
        self.arena[handle].height = height;
    }

    fn balance_factor(&self, handle: Handle) -> i32 {
        let node = &self.arena[handle];
        (self.height(node.right) as i32) - (self.height(node.left) as i32)
    }

    /// Points `parent` (or the root, when there is no parent) at `new_child`
    /// in place of `old_child`. The new child's own parent link is the
    /// caller's responsibility.
    fn replace_child(&mut self, parent: Option<Handle>, old_child: Handle, new_child: Option<Handle>) {
        match parent {
            Some(parent_handle) => {
                if self.arena[parent_handle].left == Some(old_child) {
                    self.arena[parent_handle].left = new_child;
                } else {
                    self.arena[parent_handle].right = new_child;
                }
            }
            None => self.root = new_child,
        }
    }

    fn rotate_left(&mut self, handle: Handle) -> Handle {
        let child = match self.arena[handle].right.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        let inner = self.arena[child].left.take();
        self.arena[handle].right = inner;
        if let Some(inner_handle) = inner {
            self.arena[inner_handle].parent = Some(handle);
        }
        let parent = self.arena[handle].parent;
        self.arena[child].parent = parent;
        self.replace_child(parent, handle, Some(child));
        self.arena[child].left = Some(handle);
        self.arena[handle].parent = Some(child);
        self.update_height(handle);
        self.update_height(child);
        child
    }

    fn rotate_right(&mut self, handle: Handle) -> Handle {
        let child = match self.arena[handle].left.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        let inner = self.arena[child].right.take();
        self.arena[handle].left = inner;
        if let Some(inner_handle) = inner {
            self.arena[inner_handle].parent = Some(handle);
        }
        let parent = self.arena[handle].parent;
        self.arena[child].parent = parent;
        self.replace_child(parent, handle, Some(child));
        self.arena[child].right = Some(handle);
        self.arena[handle].parent = Some(child);
        self.update_height(handle);
        self.update_height(child);
        child
    }

    /// Restores the AVL property at a single node and returns the handle now
    /// rooting the subtree.
    fn balance(&mut self, handle: Handle) -> Handle {
        self.update_height(handle);
        let factor = self.balance_factor(handle);
        if factor > 1 {
            let child = match self.arena[handle].right {
                Some(child) => child,
                None => unreachable!(),
            };
            if self.balance_factor(child) < 0 {
                self.rotate_right(child);
            }
            self.rotate_left(handle)
        } else if factor < -1 {
            let child = match self.arena[handle].left {
                Some(child) => child,
                None => unreachable!(),
            };
            if self.balance_factor(child) > 0 {
                self.rotate_left(child);
            }
            self.rotate_right(handle)
        } else {
            handle
        }
    }

    /// Rebalances every node from the structural change point up to the
    /// root. Completes fully before returning; no intermediate state is
    /// observable.
    fn rebalance(&mut self, start: Option<Handle>) {
        let mut current = start;
        while let Some(handle) = current {
            let subtree = self.balance(handle);
            current = self.arena[subtree].parent;
        }
    }

    /// Links a new leaf at its ordered position and rebalances the path back
    /// to the root. No uniqueness check: callers that need unique keys look
    /// the key up first.
    pub fn insert(&mut self, key: T, value: U) -> Handle
    where
        T: Ord,
    {
        let mut parent = None;
        let mut current = self.root;
        while let Some(handle) = current {
            parent = Some(handle);
            current = if key < self.arena[handle].entry.key {
                self.arena[handle].left
            } else {
                self.arena[handle].right
            };
        }

        let mut node = Node::new(key, value);
        node.parent = parent;
        let handle = self.arena.allocate(node);
        self.len += 1;

        match parent {
            Some(parent_handle) => {
                if self.arena[handle].entry.key < self.arena[parent_handle].entry.key {
                    self.arena[parent_handle].left = Some(handle);
                } else {
                    self.arena[parent_handle].right = Some(handle);
                }
                self.rebalance(parent);
            }
            None => self.root = Some(handle),
        }
        handle
    }

    /// Unlinks the referenced node, rebalances the path from the structural
    /// change point to the root, and returns the node's entry.
    pub fn remove(&mut self, handle: Handle) -> Entry<T, U> {
        let parent = self.arena[handle].parent;
        let left = self.arena[handle].left;
        let right = self.arena[handle].right;

        match (left, right) {
            (None, None) => {
                self.replace_child(parent, handle, None);
                self.rebalance(parent);
            }
            (Some(child), None) | (None, Some(child)) => {
                self.arena[child].parent = parent;
                self.replace_child(parent, handle, Some(child));
                self.rebalance(parent);
            }
            (Some(left_child), Some(right_child)) => {
                let successor = self.leftmost(right_child);
                let rebalance_from = if successor == right_child {
                    // The successor keeps its own right subtree and adopts
                    // the removed node's left subtree.
                    self.arena[successor].left = Some(left_child);
                    self.arena[left_child].parent = Some(successor);
                    self.arena[successor].parent = parent;
                    self.replace_child(parent, handle, Some(successor));
                    successor
                } else {
                    let successor_parent = match self.arena[successor].parent {
                        Some(successor_parent) => successor_parent,
                        None => unreachable!(),
                    };
                    // The successor is the leftmost node of the right
                    // subtree: detaching it promotes its right child.
                    let successor_right = self.arena[successor].right;
                    self.arena[successor_parent].left = successor_right;
                    if let Some(successor_right_handle) = successor_right {
                        self.arena[successor_right_handle].parent = Some(successor_parent);
                    }
                    self.arena[successor].left = Some(left_child);
                    self.arena[left_child].parent = Some(successor);
                    self.arena[successor].right = Some(right_child);
                    self.arena[right_child].parent = Some(successor);
                    self.arena[successor].parent = parent;
                    self.replace_child(parent, handle, Some(successor));
                    successor_parent
                };
                self.rebalance(Some(rebalance_from));
            }
        }

        self.len -= 1;
        let node = self.arena.free(handle);
        node.entry
    }

    pub fn find<V>(&self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            current = match key.cmp(self.arena[handle].entry.key.borrow()) {
                Ordering::Less => self.arena[handle].left,
                Ordering::Greater => self.arena[handle].right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns the node with the smallest key that is greater than or equal
    /// to `key`.
    pub fn ceil<V>(&self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut current = self.root;
        let mut result = None;
        while let Some(handle) = current {
            current = match key.cmp(self.arena[handle].entry.key.borrow()) {
                Ordering::Greater => self.arena[handle].right,
                Ordering::Equal => return Some(handle),
                Ordering::Less => {
                    result = Some(handle);
                    self.arena[handle].left
                }
            };
        }
        result
    }

    /// Returns the node with the largest key that is less than or equal to
    /// `key`.
    pub fn floor<V>(&self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut current = self.root;
        let mut result = None;
        while let Some(handle) = current {
            current = match key.cmp(self.arena[handle].entry.key.borrow()) {
                Ordering::Less => self.arena[handle].left,
                Ordering::Equal => return Some(handle),
                Ordering::Greater => {
                    result = Some(handle);
                    self.arena[handle].right
                }
            };
        }
        result
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.arena[handle].left {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.arena[handle].right {
            handle = right;
        }
        handle
    }

    pub fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    pub fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.rightmost(root))
    }

    /// Returns the in-order successor of the referenced node: the leftmost
    /// node of the right subtree when one exists, otherwise the first
    /// ancestor of which the node lies in the left subtree. Depends only on
    /// the current tree shape, which is always valid after rebalancing.
    pub fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.arena[handle].right {
            return Some(self.leftmost(right));
        }
        let mut current = handle;
        let mut parent = self.arena[current].parent;
        while let Some(parent_handle) = parent {
            if self.arena[parent_handle].left == Some(current) {
                return Some(parent_handle);
            }
            current = parent_handle;
            parent = self.arena[parent_handle].parent;
        }
        None
    }

    /// Returns the in-order predecessor of the referenced node; symmetric to
    /// [`successor`](AvlTree::successor).
    pub fn predecessor(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.arena[handle].left {
            return Some(self.rightmost(left));
        }
        let mut current = handle;
        let mut parent = self.arena[current].parent;
        while let Some(parent_handle) = parent {
            if self.arena[parent_handle].right == Some(current) {
                return Some(parent_handle);
            }
            current = parent_handle;
            parent = self.arena[parent_handle].parent;
        }
        None
    }

    pub fn min(&self) -> Option<&Entry<T, U>> {
        self.first().map(|handle| &self.arena[handle].entry)
    }

    pub fn max(&self) -> Option<&Entry<T, U>> {
        self.last().map(|handle| &self.arena[handle].entry)
    }

    pub fn entry(&self, handle: Handle) -> Option<&Entry<T, U>> {
        self.arena.get(handle).map(|node| &node.entry)
    }

    pub fn entry_mut(&mut self, handle: Handle) -> Option<&mut Entry<T, U>> {
        self.arena.get_mut(handle).map(|node| &mut node.entry)
    }

    pub fn begin(&self) -> Cursor {
        Cursor::new(self.first())
    }

    pub fn end(&self) -> Cursor {
        Cursor::new(None)
    }

    /// Moves the cursor to the next node in key order. Moving off the last
    /// node yields the end sentinel; advancing the end sentinel is out of
    /// range.
    pub fn advance(&self, cursor: Cursor) -> Result<Cursor> {
        match cursor.node() {
            Some(handle) => Ok(Cursor::new(self.successor(handle))),
            None => Err(Error::OutOfRange),
        }
    }

    /// Moves the cursor to the previous node in key order. Retreating from
    /// the first node or from the end sentinel is out of range; there is no
    /// before-the-beginning position.
    pub fn retreat(&self, cursor: Cursor) -> Result<Cursor> {
        match cursor.node() {
            Some(handle) => match self.predecessor(handle) {
                Some(predecessor) => Ok(Cursor::new(Some(predecessor))),
                None => Err(Error::OutOfRange),
            },
            None => Err(Error::OutOfRange),
        }
    }

    pub fn get(&self, cursor: Cursor) -> Result<&Entry<T, U>> {
        cursor
            .node()
            .and_then(|handle| self.entry(handle))
            .ok_or(Error::NullDereference)
    }

    pub fn iter(&self) -> Iter<T, U> {
        Iter {
            tree: self,
            current: self.first(),
        }
    }
}

impl<T, U> Default for AvlTree<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> Clone for AvlTree<T, U>
where
    T: Ord + Clone,
    U: Clone,
{
    /// Produces a structurally independent tree by re-inserting every entry
    /// in order. Rebalancing may shape the copy differently; the iteration
    /// order is identical.
    fn clone(&self) -> Self {
        let mut tree = AvlTree::new();
        for (key, value) in self.iter() {
            tree.insert(key.clone(), value.clone());
        }
        tree
    }
}

impl<T, U> IntoIterator for AvlTree<T, U> {
    type IntoIter = IntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            current: self.root,
            tree: self,
            stack: Vec::new(),
        }
    }
}

/// An owning in-order iterator over a tree's entries.
///
/// Nodes are unlinked left-spine first, so every node is freed exactly once
/// and no freed node is ever revisited.
pub struct IntoIter<T, U> {
    tree: AvlTree<T, U>,
    current: Option<Handle>,
    stack: Vec<Handle>,
}

impl<T, U> Iterator for IntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = self.tree.arena[handle].left;
        }
        self.stack.pop().map(|handle| {
            let node = self.tree.arena.free(handle);
            self.current = node.right;
            let Entry { key, value } = node.entry;
            (key, value)
        })
    }
}

/// A borrowing in-order iterator over a tree's entries, driven by the parent
/// links rather than an auxiliary stack.
pub struct Iter<'a, T, U> {
    tree: &'a AvlTree<T, U>,
    current: Option<Handle>,
}

impl<'a, T, U> Iterator for Iter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.current?;
        self.current = tree.successor(handle);
        let entry = &tree.arena[handle].entry;
        Some((&entry.key, &entry.value))
    }
}
