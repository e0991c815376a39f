use crate::error::Result;
use crate::sort::tracker::Tracker;

/// Adjacent compare-and-swap passes; the counter ends up equal to the number
/// of inversions in the input.
pub fn bubble_sort(t: &mut Tracker<'_, '_>) -> Result<()> {
    let n = t.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            t.highlight(&[j, j + 1]);
            if t.get(j) > t.get(j + 1) {
                t.swap(j, j + 1);
            }
            t.step()?;
        }
        t.mark_sorted(n - i - 1);
    }

    Ok(())
}
