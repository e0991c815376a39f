use crate::error::Result;
use crate::sort::tracker::Tracker;

/// Build a max-heap, then repeatedly move the root behind the shrinking heap.
/// Every heapify swap and every root extraction swap is counted.
pub fn heap_sort(t: &mut Tracker<'_, '_>) -> Result<()> {
    let n = t.len();

    for i in (0..n / 2).rev() {
        sift_down(t, n, i)?;
    }

    for end in (1..n).rev() {
        t.swap(0, end);
        t.mark_sorted(end);
        t.step()?;
        sift_down(t, end, 0)?;
    }

    Ok(())
}

/// Restore the max-heap property below `root` within the first `size` slots.
fn sift_down(t: &mut Tracker<'_, '_>, size: usize, mut root: usize) -> Result<()> {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < size && t.get(left) > t.get(largest) {
            largest = left;
        }
        if right < size && t.get(right) > t.get(largest) {
            largest = right;
        }
        if largest == root {
            return Ok(());
        }

        t.highlight(&[root, largest]);
        t.swap(root, largest);
        t.step()?;
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::algos::fixtures::{record, run, SAMPLE};

    #[test]
    fn test_sorts_sample() {
        let (values, _) = run(heap_sort, &SAMPLE);
        assert_eq!(values, vec![1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_counts_heapify_and_extraction_swaps() {
        // [1,2]: build swaps 1<->2, extraction swaps root and tail once
        assert_eq!(run(heap_sort, &[1, 2]).1, 2);
        // [2,1]: already a heap, only the extraction swap
        assert_eq!(run(heap_sort, &[2, 1]).1, 1);
    }

    #[test]
    fn test_sorted_input_still_swaps() {
        assert!(run(heap_sort, &[1, 2, 3, 4]).1 > 0);
    }

    #[test]
    fn test_extraction_marks_tail_sorted() {
        let frames = record(heap_sort, &[2, 1]);
        assert_eq!(frames.len(), 2);
        assert!(frames[0].is_sorted(1));
        assert!(!frames[0].is_sorted(0));
        assert_eq!(frames[0].values, vec![1, 2]);
    }
}
