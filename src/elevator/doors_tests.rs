/*
 * Unit tests for the door sequencer and the tone scheduler
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_door_phase_boundaries
 * - test_door_closed_before_start
 * - test_door_survives_clock_wraparound
 * - test_tone_scheduler_due_times
 * - test_tone_scheduler_empty
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod doors_tests {
    use crate::config::ElevatorConfig;
    use crate::elevator::{DoorSequencer, ToneScheduler};
    use crate::shared::DoorPhase::{Closed, Closing, Open, Opening};
    use crate::shared::{Timestamp, Tone};

    #[test]
    fn test_door_phase_boundaries() {
        // Purpose: Verify the phase at each edge of the 400/800/1200 ms thresholds

        // Arrange
        let mut door = DoorSequencer::new(&ElevatorConfig::default());
        let t0 = 5_000u32;

        // Act
        door.start(Timestamp(t0));

        // Assert
        let expected = [
            (0, Opening),
            (399, Opening),
            (400, Open),
            (799, Open),
            (800, Closing),
            (1199, Closing),
            (1200, Closed),
        ];
        for (offset, phase) in expected.iter() {
            assert_eq!(door.advance(Timestamp(t0 + offset)), *phase, "at +{} ms", offset);
        }
        assert!(!door.is_active());

        // Stays closed afterwards
        assert_eq!(door.advance(Timestamp(t0 + 100)), Closed);
    }

    #[test]
    fn test_door_closed_before_start() {
        // Purpose: Verify that a fresh sequencer is inactive no matter the time

        // Arrange
        let mut door = DoorSequencer::new(&ElevatorConfig::default());

        // Act
        let phase = door.advance(Timestamp(123));

        // Assert
        assert_eq!(phase, Closed);
        assert!(!door.is_active());
    }

    #[test]
    fn test_door_survives_clock_wraparound() {
        // Purpose: Verify that a sequence spanning the counter wraparound keeps its timing

        // Arrange
        let mut door = DoorSequencer::new(&ElevatorConfig::default());
        let t0 = Timestamp(u32::MAX - 100);

        // Act
        door.start(t0);

        // Assert
        assert_eq!(door.advance(t0.offset(50)), Opening);
        assert_eq!(door.advance(Timestamp(299)), Open);
        assert_eq!(door.advance(t0.offset(1000)), Closing);
        assert_eq!(door.advance(t0.offset(1200)), Closed);
    }

    #[test]
    fn test_tone_scheduler_due_times() {
        // Purpose: Verify that tones come out once, when due, in scheduling order

        // Arrange
        let mut tones = ToneScheduler::new();
        let beep = Tone { frequency_hz: 1000, duration_ms: 100 };
        let chirp = Tone { frequency_hz: 2000, duration_ms: 50 };
        tones.schedule(Timestamp(10), beep);
        tones.schedule(Timestamp(20), chirp);

        // Act
        let early = tones.take_due(Timestamp(5));
        let first = tones.take_due(Timestamp(10));
        let rest = tones.take_due(Timestamp(30));

        // Assert
        assert!(early.is_empty());
        assert_eq!(first, vec![beep]);
        assert_eq!(rest, vec![chirp]);
        assert!(tones.is_empty());
    }

    #[test]
    fn test_tone_scheduler_empty() {
        // Purpose: Verify that an empty scheduler yields nothing and a drained one reports empty

        // Arrange
        let mut tones = ToneScheduler::new();

        // Act and assert
        assert!(tones.is_empty());
        assert!(tones.take_due(Timestamp(u32::MAX)).is_empty());

        tones.schedule(Timestamp(0), Tone { frequency_hz: 1000, duration_ms: 100 });
        assert!(!tones.is_empty());
        assert_eq!(tones.take_due(Timestamp(0)).len(), 1);
        assert!(tones.is_empty());
        assert!(tones.take_due(Timestamp(1)).is_empty());
    }
}
