/*
 * Unit tests for the request queue
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_queue_fifo_order
 * - test_queue_rejects_same_floor_trip
 * - test_queue_rejects_when_full
 * - test_queue_dequeue_empty
 * - test_queue_counts_by_floor_capped
 * - test_queue_destinations_waiting_at
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod request_queue_tests {
    use crate::elevator::RequestQueue;
    use crate::shared::{FloorIndex, Trip};

    fn trip(origin: u8, destination: u8) -> Trip {
        Trip::new(
            FloorIndex::new(origin).unwrap(),
            FloorIndex::new(destination).unwrap(),
        )
    }

    #[test]
    fn test_queue_fifo_order() {
        // Purpose: Verify that trips leave the queue in the order they were added

        // Arrange
        let mut queue = RequestQueue::new(10);
        let trips = vec![trip(1, 3), trip(0, 2), trip(3, 0), trip(2, 1), trip(1, 0)];

        // Act
        for t in trips.iter() {
            assert!(queue.enqueue(*t));
        }
        let served: Vec<Trip> = std::iter::from_fn(|| queue.dequeue()).collect();

        // Assert
        assert_eq!(served, trips);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_rejects_same_floor_trip() {
        // Purpose: Verify that a trip starting and ending on the same floor is never queued

        // Arrange
        let mut queue = RequestQueue::new(10);
        queue.enqueue(trip(0, 1));

        // Act
        let accepted = queue.enqueue(trip(2, 2));

        // Assert
        assert!(!accepted);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_queue_rejects_when_full() {
        // Purpose: Verify that a full queue drops new trips and keeps its contents

        // Arrange
        let mut queue = RequestQueue::new(10);
        for i in 0..10u8 {
            assert!(queue.enqueue(trip(i % 4, (i + 1) % 4)));
        }

        // Act
        let accepted = queue.enqueue(trip(3, 0));

        // Assert
        assert!(!accepted);
        assert!(queue.is_full());
        assert_eq!(queue.len(), queue.capacity());
        assert_eq!(queue.dequeue(), Some(trip(0, 1)));
    }

    #[test]
    fn test_queue_dequeue_empty() {
        // Purpose: Verify that an empty queue yields nothing

        // Arrange
        let mut queue = RequestQueue::new(3);

        // Act
        let head = queue.dequeue();

        // Assert
        assert_eq!(head, None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_queue_counts_by_floor_capped() {
        // Purpose: Verify that waiting counts follow the queue and never exceed the display width

        // Arrange
        let mut queue = RequestQueue::new(10);
        for _ in 0..6 {
            queue.enqueue(trip(1, 2));
        }
        queue.enqueue(trip(3, 0));

        // Act
        let counts = queue.peek_counts_by_floor(4);

        // Assert
        assert_eq!(counts, [0, 4, 0, 1]);
        assert_eq!(queue.len(), 7);

        // Counts reflect the queue at call time
        queue.dequeue();
        assert_eq!(queue.peek_counts_by_floor(10), [0, 5, 0, 1]);
    }

    #[test]
    fn test_queue_destinations_waiting_at() {
        // Purpose: Verify that destinations are reported per origin floor, oldest first

        // Arrange
        let mut queue = RequestQueue::new(10);
        queue.enqueue(trip(2, 0));
        queue.enqueue(trip(1, 3));
        queue.enqueue(trip(2, 3));

        // Act
        let at_two = queue.destinations_waiting_at(FloorIndex::new(2).unwrap());

        // Assert
        assert_eq!(
            at_two,
            vec![FloorIndex::new(0).unwrap(), FloorIndex::new(3).unwrap()]
        );
        assert!(queue.destinations_waiting_at(FloorIndex::GROUND).is_empty());
    }
}
