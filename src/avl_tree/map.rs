use crate::avl_tree::cursor::Cursor;
use crate::avl_tree::tree::{self, AvlTree};
use crate::avl_tree::{Error, Result};
use std::borrow::Borrow;
use std::iter::FromIterator;
use std::mem;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using an AVL tree.
///
/// The tree stores key-value entries ordered solely by key; values never
/// participate in comparison, so they can be overwritten in place without
/// disturbing the tree shape.
///
/// # Examples
///
/// ```
/// use ordered_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct AvlMap<T, U> {
    tree: AvlTree<T, U>,
}

impl<T, U> AvlMap<T, U> {
    /// Constructs a new, empty `AvlMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap {
            tree: AvlTree::new(),
        }
    }

    /// Inserts a key-value pair into the map. Returns a cursor to the entry
    /// and `true` if the key was newly inserted. If the key already exists,
    /// the map is unchanged and the cursor references the existing entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// let (_, inserted) = map.insert(1, 1);
    /// assert!(inserted);
    ///
    /// let (_, inserted) = map.insert(1, 2);
    /// assert!(!inserted);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> (Cursor, bool)
    where
        T: Ord,
    {
        match self.tree.find(&key) {
            Some(handle) => (Cursor::new(Some(handle)), false),
            None => {
                let handle = self.tree.insert(key, value);
                (Cursor::new(Some(handle)), true)
            }
        }
    }

    /// Inserts a key-value pair into the map, overwriting the value in place
    /// when the key already exists. Returns a cursor to the entry and `true`
    /// if the key was newly inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// let (_, inserted) = map.insert_or_assign(1, 1);
    /// assert!(inserted);
    ///
    /// let (_, inserted) = map.insert_or_assign(1, 2);
    /// assert!(!inserted);
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert_or_assign(&mut self, key: T, value: U) -> (Cursor, bool)
    where
        T: Ord,
    {
        match self.tree.find(&key) {
            Some(handle) => {
                match self.tree.entry_mut(handle) {
                    Some(entry) => entry.value = value,
                    None => unreachable!(),
                }
                (Cursor::new(Some(handle)), false)
            }
            None => {
                let handle = self.tree.insert(key, value);
                (Cursor::new(Some(handle)), true)
            }
        }
    }

    /// Removes the entry referenced by a cursor and returns the key-value
    /// pair. Fails with [`Error::NullDereference`](super::Error) if the
    /// cursor references no node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// let (pos, _) = map.insert(1, 10);
    /// assert_eq!(map.erase(pos), Ok((1, 10)));
    /// assert!(map.is_empty());
    /// ```
    pub fn erase(&mut self, pos: Cursor) -> Result<(T, U)> {
        match pos.node() {
            Some(handle) if self.tree.entry(handle).is_some() => {
                let entry = self.tree.remove(handle);
                Ok((entry.key, entry.value))
            }
            _ => Err(Error::NullDereference),
        }
    }

    /// Removes a key-value pair from the map. If the key exists in the map,
    /// it will return the associated key-value pair. Otherwise it will
    /// return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.tree.find(key) {
            Some(handle) => {
                let entry = self.tree.remove(handle);
                Some((entry.key, entry.value))
            }
            None => None,
        }
    }

    /// Returns an immutable reference to the value associated with a
    /// particular key. Fails with [`Error::KeyNotFound`](super::Error) if
    /// the key does not exist; the map is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::{AvlMap, Error};
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.at(&1), Ok(&1));
    /// assert_eq!(map.at(&0), Err(Error::KeyNotFound));
    /// ```
    pub fn at<V>(&self, key: &V) -> Result<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .find(key)
            .and_then(|handle| self.tree.entry(handle))
            .map(|entry| &entry.value)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with a particular
    /// key. Fails with [`Error::KeyNotFound`](super::Error) if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.at_mut(&1).unwrap() = 2;
    /// assert_eq!(map.at(&1), Ok(&2));
    /// ```
    pub fn at_mut<V>(&mut self, key: &V) -> Result<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.tree.find(key) {
            Some(handle) => self
                .tree
                .entry_mut(handle)
                .map(|entry| &mut entry.value)
                .ok_or(Error::KeyNotFound),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Returns a mutable reference to the value associated with a key,
    /// inserting a default-initialized value first when the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map: AvlMap<u32, u32> = AvlMap::new();
    /// *map.get_or_insert_default(1) += 5;
    /// *map.get_or_insert_default(1) += 5;
    /// assert_eq!(map.get(&1), Some(&10));
    /// ```
    pub fn get_or_insert_default(&mut self, key: T) -> &mut U
    where
        T: Ord,
        U: Default,
    {
        let handle = match self.tree.find(&key) {
            Some(handle) => handle,
            None => self.tree.insert(key, U::default()),
        };
        match self.tree.entry_mut(handle) {
            Some(entry) => &mut entry.value,
            None => unreachable!(),
        }
    }

    /// Returns an immutable reference to the value associated with a
    /// particular key. It will return `None` if the key does not exist in
    /// the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .find(key)
            .and_then(|handle| self.tree.entry(handle))
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular
    /// key. Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.tree.find(key) {
            Some(handle) => self.tree.entry_mut(handle).map(|entry| &mut entry.value),
            None => None,
        }
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchanges the full contents of two maps in constant time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// let mut other = AvlMap::new();
    /// map.insert(1, 1);
    /// other.insert(2, 2);
    ///
    /// map.swap(&mut other);
    /// assert_eq!(map.get(&2), Some(&2));
    /// assert_eq!(other.get(&1), Some(&1));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves every entry of `other` into `self`, skipping keys already
    /// present, and leaves `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map: AvlMap<u32, u32> = vec![(1, 1), (2, 2)].into_iter().collect();
    /// let mut other: AvlMap<u32, u32> = vec![(2, 20), (3, 3)].into_iter().collect();
    ///
    /// map.merge(&mut other);
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.get(&2), Some(&2));
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        for (key, value) in mem::take(&mut other.tree) {
            self.insert(key, value);
        }
    }

    /// Returns a key in the map that is less than or equal to a particular
    /// key. Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .floor(key)
            .and_then(|handle| self.tree.entry(handle))
            .map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a
    /// particular key. Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .ceil(key)
            .and_then(|handle| self.tree.entry(handle))
            .map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.min().map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.max().map(|entry| &entry.key)
    }

    /// Returns a cursor to the entry with the minimum key, or the end cursor
    /// if the map is empty.
    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    /// Returns the end cursor: the position one past the maximum key.
    pub fn end(&self) -> Cursor {
        self.tree.end()
    }

    /// Moves a cursor to the next entry in ascending key order. Moving off
    /// the last entry yields the end cursor; advancing the end cursor fails
    /// with [`Error::OutOfRange`](super::Error).
    pub fn advance(&self, pos: Cursor) -> Result<Cursor> {
        self.tree.advance(pos)
    }

    /// Moves a cursor to the previous entry in ascending key order.
    /// Retreating from the first entry or from the end cursor fails with
    /// [`Error::OutOfRange`](super::Error).
    pub fn retreat(&self, pos: Cursor) -> Result<Cursor> {
        self.tree.retreat(pos)
    }

    /// Returns the key-value pair referenced by a cursor. Fails with
    /// [`Error::NullDereference`](super::Error) if the cursor references no
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 20);
    /// map.insert(1, 10);
    /// assert_eq!(map.pair(map.begin()), Ok((&1, &10)));
    /// ```
    pub fn pair(&self, pos: Cursor) -> Result<(&T, &U)> {
        self.tree.get(pos).map(|entry| (&entry.key, &entry.value))
    }

    /// Returns an iterator over the map. The iterator will yield key-value
    /// pairs in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlMapIter<T, U> {
        AvlMapIter {
            inner: self.tree.iter(),
        }
    }
}

impl<T, U> IntoIterator for AvlMap<T, U> {
    type IntoIter = AvlMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        AvlMapIntoIter {
            inner: self.tree.into_iter(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a AvlMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = AvlMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned
/// entries.
pub struct AvlMapIntoIter<T, U> {
    inner: tree::IntoIter<T, U>,
}

impl<T, U> Iterator for AvlMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// An iterator for `AvlMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields
/// immutable references.
pub struct AvlMapIter<'a, T, U> {
    inner: tree::Iter<'a, T, U>,
}

impl<'a, T, U> Iterator for AvlMapIter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T, U> FromIterator<(T, U)> for AvlMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = AvlMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U> Extend<(T, U)> for AvlMap<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U> Default for AvlMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> Clone for AvlMap<T, U>
where
    T: Ord + Clone,
    U: Clone,
{
    fn clone(&self) -> Self {
        AvlMap {
            tree: self.tree.clone(),
        }
    }
}

impl<'a, T, U, V> Index<&'a V> for AvlMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for AvlMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::AvlMap;
    use crate::avl_tree::Error;

    #[test]
    fn test_len_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = AvlMap::new();
        let (pos, inserted) = map.insert(1, 10);
        assert!(inserted);
        assert_eq!(map.pair(pos), Ok((&1, &10)));
    }

    #[test]
    fn test_insert_does_not_overwrite() {
        let mut map = AvlMap::new();
        map.insert(1, 10);
        let (pos, inserted) = map.insert(1, 20);
        assert!(!inserted);
        assert_eq!(map.pair(pos), Ok((&1, &10)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_or_assign() {
        let mut map: AvlMap<char, u32> = vec![('b', 228), ('c', 1337)].into_iter().collect();

        let (_, inserted) = map.insert_or_assign('d', 322);
        assert!(inserted);

        let (_, inserted) = map.insert_or_assign('d', 14);
        assert!(!inserted);
        assert_eq!(map.at(&'d'), Ok(&14));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_at_missing_key() {
        let mut map = AvlMap::new();
        map.insert(1, 10);
        assert_eq!(map.at(&0), Err(Error::KeyNotFound));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_or_insert_default() {
        let mut map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(*map.get_or_insert_default(1), 0);
        *map.get_or_insert_default(1) = 5;
        assert_eq!(map.get(&1), Some(&5));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_erase_second_in_order() {
        let mut map: AvlMap<u32, &str> = vec![(1, "a"), (2, "b"), (3, "c"), (4, "d")]
            .into_iter()
            .collect();

        let pos = map.advance(map.begin()).unwrap();
        assert_eq!(map.erase(pos), Ok((2, "b")));

        let pairs = map
            .iter()
            .map(|(key, value)| (*key, *value))
            .collect::<Vec<(u32, &str)>>();
        assert_eq!(pairs, vec![(1, "a"), (3, "c"), (4, "d")]);
    }

    #[test]
    fn test_remove() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert_eq!(map.remove(&1), None);
    }

    #[test]
    fn test_cursor_walk() {
        let mut map = AvlMap::new();
        map.insert(2, 20);
        map.insert(1, 10);
        map.insert(3, 30);

        let mut pairs = Vec::new();
        let mut pos = map.begin();
        while !pos.is_end() {
            let (key, value) = map.pair(pos).unwrap();
            pairs.push((*key, *value));
            pos = map.advance(pos).unwrap();
        }
        assert_eq!(pairs, vec![(1, 10), (2, 20), (3, 30)]);
    }

    #[test]
    fn test_index() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map[&1] = 2;
        assert_eq!(map[&1], 2);
    }

    #[test]
    #[should_panic]
    fn test_index_missing_key() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        let _ = map[&0];
    }

    #[test]
    fn test_merge_skips_duplicates() {
        let mut map: AvlMap<u32, u32> = vec![(1, 1), (2, 2)].into_iter().collect();
        let mut other: AvlMap<u32, u32> = vec![(2, 20), (3, 3)].into_iter().collect();

        map.merge(&mut other);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&2), Some(&2));
        assert!(other.is_empty());
    }

    #[test]
    fn test_clone() {
        let map: AvlMap<u32, u32> = vec![(1, 1), (3, 3), (2, 2)].into_iter().collect();
        let clone = map.clone();
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            clone.iter().collect::<Vec<_>>(),
        );
    }

    #[test]
    fn test_into_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }
}
