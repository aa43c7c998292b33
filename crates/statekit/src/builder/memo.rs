use std::sync::OnceLock;

///
/// Memoized
///
/// A build-once cell. The first `get_or_build` call runs the builder and
/// caches the value; later calls return the cached value untouched. Under
/// concurrent first access exactly one caller runs the builder.
///

pub(crate) struct Memoized<T> {
    cell: OnceLock<T>,
}

impl<T> Memoized<T> {
    pub(crate) const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub(crate) fn get_or_build(&self, build: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(build)
    }

    pub(crate) fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }
}
