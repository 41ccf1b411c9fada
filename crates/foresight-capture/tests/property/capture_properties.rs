use foresight_capture::RingBuffer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn buffer_never_exceeds_capacity(capacity in 1usize..64, pushes in 0usize..300) {
        let mut buffer = RingBuffer::with_capacity(capacity);
        for i in 0..pushes {
            buffer.push(i);
            prop_assert!(buffer.len() <= capacity);
        }
        prop_assert_eq!(buffer.len(), pushes.min(capacity));
    }

    #[test]
    fn buffer_keeps_most_recent_in_order(capacity in 1usize..64, pushes in 1usize..300) {
        let mut buffer = RingBuffer::with_capacity(capacity);
        for i in 0..pushes {
            buffer.push(i);
        }
        let kept: Vec<usize> = buffer.iter().copied().collect();
        let expected: Vec<usize> = (pushes.saturating_sub(capacity)..pushes).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn overflow_by_one_drops_only_the_oldest(capacity in 1usize..64) {
        let mut buffer = RingBuffer::with_capacity(capacity);
        for i in 0..capacity {
            prop_assert!(buffer.push(i).is_none());
        }
        prop_assert_eq!(buffer.push(capacity), Some(0));
        prop_assert_eq!(buffer.len(), capacity);
    }
}
