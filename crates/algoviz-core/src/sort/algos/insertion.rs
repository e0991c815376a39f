use crate::error::Result;
use crate::sort::tracker::Tracker;

/// Shift-based insertion sort; the counter records each backward shift.
pub fn insertion_sort(t: &mut Tracker<'_, '_>) -> Result<()> {
    for i in 1..t.len() {
        let key = t.get(i);
        let mut j = i;

        while j > 0 && t.get(j - 1) > key {
            t.highlight(&[j - 1, j]);
            let shifted = t.get(j - 1);
            t.write_counted(j, shifted);
            t.step()?;
            j -= 1;
        }

        t.write(j, key);
        t.step()?;
    }

    Ok(())
}
