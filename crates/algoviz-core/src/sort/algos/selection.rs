use crate::error::Result;
use crate::sort::tracker::Tracker;

/// Find the minimum of the unsorted suffix and swap it into place. Swaps where
/// the minimum is already in place are skipped and not counted.
pub fn selection_sort(t: &mut Tracker<'_, '_>) -> Result<()> {
    let n = t.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            t.highlight(&[min_idx, j]);
            t.step()?;
            if t.get(j) < t.get(min_idx) {
                min_idx = j;
            }
        }

        if min_idx != i {
            t.swap(i, min_idx);
            t.step()?;
        }
        t.mark_sorted(i);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::algos::fixtures::{run, SAMPLE};

    #[test]
    fn test_sorts_sample() {
        let (values, swaps) = run(selection_sort, &SAMPLE);
        assert_eq!(values, vec![1, 2, 3, 5, 8]);
        // [5,3,8,1,2]: swap 0<->3, 1<->4, 2<->4; index 3 already holds its minimum
        assert_eq!(swaps, 3);
    }

    #[test]
    fn test_no_swaps_when_sorted() {
        assert_eq!(run(selection_sort, &[1, 2, 3, 4, 5]).1, 0);
    }

    #[test]
    fn test_at_most_n_minus_one_swaps() {
        let input = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        assert!(run(selection_sort, &input).1 <= input.len() as u64 - 1);
    }
}
