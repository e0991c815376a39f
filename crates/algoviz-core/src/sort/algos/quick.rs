use crate::error::Result;
use crate::sort::tracker::Tracker;

/// Quick sort with Lomuto partitioning around the last element.
///
/// Pending ranges live on an explicit stack, left range on top, so ranges are
/// processed in the same order as the recursive formulation. Every partition
/// swap is counted, including the final pivot swap when it is a no-op.
pub fn quick_sort(t: &mut Tracker<'_, '_>) -> Result<()> {
    if t.len() < 2 {
        return Ok(());
    }

    let mut pending = vec![(0, t.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(t, low, high)?;
        pending.push((pivot + 1, high));
        if pivot > low {
            pending.push((low, pivot - 1));
        }
    }

    Ok(())
}

/// Partition `low..=high` and return the pivot's final index.
fn partition(t: &mut Tracker<'_, '_>, low: usize, high: usize) -> Result<usize> {
    let pivot = t.get(high);
    let mut store = low;

    for j in low..high {
        t.highlight(&[j, high]);
        t.step()?;
        if t.get(j) < pivot {
            t.swap(store, j);
            store += 1;
        }
    }

    t.swap(store, high);
    t.highlight(&[store]);
    t.step()?;
    Ok(store)
}
