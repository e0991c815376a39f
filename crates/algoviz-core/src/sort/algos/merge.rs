use crate::error::Result;
use crate::sort::tracker::Tracker;

/// Top-down merge sort. Every placement back into the array counts as a copy.
pub fn merge_sort(t: &mut Tracker<'_, '_>) -> Result<()> {
    if t.len() > 1 {
        sort_range(t, 0, t.len() - 1)?;
    }
    Ok(())
}

/// Sort the inclusive range `left..=right`.
fn sort_range(t: &mut Tracker<'_, '_>, left: usize, right: usize) -> Result<()> {
    if left >= right {
        return Ok(());
    }
    let mid = left + (right - left) / 2;
    sort_range(t, left, mid)?;
    sort_range(t, mid + 1, right)?;
    merge(t, left, mid, right)
}

/// Merge the sorted runs `left..=mid` and `mid+1..=right`; ties take the left.
fn merge(t: &mut Tracker<'_, '_>, left: usize, mid: usize, right: usize) -> Result<()> {
    let mut merged = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;

    while i <= mid && j <= right {
        t.highlight(&[i, j]);
        t.step()?;
        if t.get(i) <= t.get(j) {
            merged.push(t.get(i));
            i += 1;
        } else {
            merged.push(t.get(j));
            j += 1;
        }
    }

    for k in (i..=mid).chain(j..=right) {
        merged.push(t.get(k));
        t.step()?;
    }

    for (offset, value) in merged.into_iter().enumerate() {
        t.write_counted(left + offset, value);
        t.step()?;
    }

    Ok(())
}
