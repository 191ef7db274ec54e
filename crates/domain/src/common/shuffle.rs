//! In-place Fisher-Yates shuffle driven by an injected roll closure.

/// Randomly permutes `items` in place and returns them.
///
/// Walks from the last position down to the second, swapping each with a
/// position `j` in `0..=i` chosen by `roll(0, i)`. With a uniform roll every
/// one of the `n!` orderings is equally likely. Out-of-range rolls are
/// clamped into `0..=i`. Sequences of length 0 or 1 consume no rolls.
///
/// # Example
/// ```
/// use hotcold_domain::shuffle;
///
/// let mut items = [1, 2, 3];
/// // Always picking position 0 rotates the first element to the back.
/// shuffle(&mut items, |_min, _max| 0);
/// assert_eq!(items, [2, 3, 1]);
/// ```
pub fn shuffle<T, R>(items: &mut [T], mut roll: R) -> &mut [T]
where
    R: FnMut(i32, i32) -> i32,
{
    for i in (1..items.len()).rev() {
        let upper = i32::try_from(i).unwrap_or(i32::MAX);
        let j = roll(0, upper).clamp(0, upper) as usize;
        items.swap(i, j);
    }
    items
}
