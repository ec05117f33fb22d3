//! Bubble sort demo.

/// Fixed input for the `/bubblesort` route.
pub const DEMO_NUMBERS: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Sorts `items` ascending in place, stopping after the first pass without a swap.
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) {
    let len = items.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Returns `1 + 2 + ... + limit`.
pub fn sum_to(limit: u64) -> u128 {
    let limit = u128::from(limit);
    limit * (limit + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_demo_numbers() {
        let mut numbers = DEMO_NUMBERS;
        bubble_sort(&mut numbers);
        assert_eq!(numbers, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: [i32; 0] = [];
        bubble_sort(&mut empty);

        let mut single = [7];
        bubble_sort(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn test_duplicates_and_reverse_order() {
        let mut values = vec![5, 3, 5, 1, 3, 0];
        bubble_sort(&mut values);
        assert_eq!(values, vec![0, 1, 3, 3, 5, 5]);

        let mut reversed: Vec<i32> = (0..20).rev().collect();
        bubble_sort(&mut reversed);
        assert_eq!(reversed, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_floats() {
        let mut values = [2.5, -1.0, 0.0];
        bubble_sort(&mut values);
        assert_eq!(values, [-1.0, 0.0, 2.5]);
    }

    #[test]
    fn test_sum_to() {
        assert_eq!(sum_to(0), 0);
        assert_eq!(sum_to(1), 1);
        assert_eq!(sum_to(100), 5050);
        assert_eq!(sum_to(u64::MAX), u128::from(u64::MAX) << 63);
    }
}
