/// Ordered list of levels. The menu only ever needs its length.
pub trait LevelCatalog {
    fn level_count(&self) -> usize;
}

impl<T> LevelCatalog for [T] {
    fn level_count(&self) -> usize { self.len() }
}

impl<T> LevelCatalog for Vec<T> {
    fn level_count(&self) -> usize { self.len() }
}
