#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

pub trait VecUtils<T>
where
    T: Clone,
{
    fn reset(&mut self, value: T);
}

impl<T> VecUtils<T> for Vec<T>
where
    T: Clone,
{
    fn reset(&mut self, value: T) {
        self.iter_mut().for_each(|v| *v = value.clone());
    }
}

/// The number of cells in a lattice with the given extents, or None if it overflows a usize.
pub fn checked_lattice_size(extents: &[usize]) -> Option<usize> {
    extents
        .iter()
        .try_fold(1usize, |size, &extent| size.checked_mul(extent))
}

/// The number of unordered pairs that can be drawn from n items.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
