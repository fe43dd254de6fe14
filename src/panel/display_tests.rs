/*
 * Unit tests for the display renderers
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_grid_initial_state
 * - test_grid_waiting_passengers_capped
 * - test_grid_door_open_and_pickup_marker
 * - test_segment_readout
 * - test_terminal_renderer_status_lines_only_on_change
 * - test_json_renderer
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod display_tests {
    use crate::config::{ElevatorConfig, FeedbackConfig};
    use crate::elevator::ElevatorController;
    use crate::panel::display::{render_grid, segment_readout, GRID_HEIGHT};
    use crate::panel::{JsonRenderer, Renderer, TerminalRenderer};
    use crate::shared::{DoorPhase, FloorIndex, Stage, Timestamp, Trip};
    use std::time::Duration;

    const FAST: Duration = Duration::from_millis(100);

    fn trip(origin: u8, destination: u8) -> Trip {
        Trip::new(
            FloorIndex::new(origin).unwrap(),
            FloorIndex::new(destination).unwrap(),
        )
    }

    fn setup_controller() -> ElevatorController {
        ElevatorController::new(
            &ElevatorConfig::default(),
            &FeedbackConfig::default(),
            Timestamp(0),
        )
    }

    // Row index of height `y`, rows are listed top first
    fn row(y: u8) -> usize {
        (GRID_HEIGHT - 1 - y) as usize
    }

    #[test]
    fn test_grid_initial_state() {
        // Purpose: Verify the floors and the car drawn for a fresh controller

        // Arrange
        let controller = setup_controller();

        // Act
        let grid = render_grid(&controller.status());

        // Assert
        assert_eq!(grid.len(), GRID_HEIGHT as usize);
        for y in [0u8, 4, 8, 12].iter() {
            assert_eq!(grid[row(*y)], "========");
        }
        for y in 1..=3u8 {
            assert_eq!(grid[row(y)], " ##     ");
        }
        assert_eq!(grid[row(5)], "        ");
        assert_eq!(grid[row(15)], "        ");
    }

    #[test]
    fn test_grid_waiting_passengers_capped() {
        // Purpose: Verify that waiting passengers show their destination and are capped per floor

        // Arrange
        let mut controller = setup_controller();
        let now = Timestamp(0);
        controller.request_trip(now, trip(2, 0));
        for _ in 0..5 {
            controller.request_trip(now, trip(1, 3));
        }

        // Act
        let grid = render_grid(&controller.status());

        // Assert
        assert_eq!(grid[row(5)], "    3333");
        assert_eq!(grid[row(9)], "    0   ");
    }

    #[test]
    fn test_grid_door_open_and_pickup_marker() {
        // Purpose: Verify the open door glyphs and the marker of the passenger being fetched

        // Arrange
        let mut controller = setup_controller();
        controller.tick(Timestamp(0), FAST, Some(trip(0, 3)));
        controller.tick(Timestamp(10), FAST, None);
        controller.tick(Timestamp(500), FAST, None);
        assert_eq!(controller.door_phase(), DoorPhase::Open);

        let mut fetching = setup_controller();
        fetching.tick(Timestamp(0), FAST, Some(trip(2, 1)));
        fetching.tick(Timestamp(10), FAST, None);
        assert_eq!(fetching.stage(), Stage::MovingToOrigin);

        // Act
        let open_grid = render_grid(&controller.status());
        let fetching_grid = render_grid(&fetching.status());

        // Assert
        assert_eq!(open_grid[row(1)], " []     ");
        assert_eq!(fetching_grid[row(9)], "   1    ");
    }

    #[test]
    fn test_segment_readout() {
        // Purpose: Verify the direction glyph and floor digit

        // Arrange
        let mut controller = setup_controller();
        let idle = segment_readout(&controller.status());
        controller.tick(Timestamp(0), FAST, Some(trip(2, 0)));
        controller.tick(Timestamp(10), FAST, None);

        // Act
        let moving = segment_readout(&controller.status());

        // Assert
        assert_eq!(idle, "-0");
        assert_eq!(moving, "\u{203e}0");
    }

    #[test]
    fn test_terminal_renderer_status_lines_only_on_change() {
        // Purpose: Verify that the status text is written once and not repeated for an unchanged state

        // Arrange
        let controller = setup_controller();
        let status = controller.status();
        let mut renderer = TerminalRenderer::new(Vec::new());

        // Act
        renderer.render(&status).unwrap();
        renderer.render(&status).unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();

        // Assert
        assert_eq!(output.matches("Current Floor: 0").count(), 1);
        assert_eq!(output.matches("Direction: Stationary").count(), 1);
        assert_eq!(output.matches("Floors with passenger: 0").count(), 1);
        assert_eq!(output.matches("========").count(), 8);
    }

    #[test]
    fn test_json_renderer() {
        // Purpose: Verify that each render is one JSON object describing the status

        // Arrange
        let mut controller = setup_controller();
        controller.request_trip(Timestamp(0), trip(3, 1));
        let mut renderer = JsonRenderer::new(Vec::new());

        // Act
        renderer.render(&controller.status()).unwrap();
        renderer.render(&controller.status()).unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();

        // Assert
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["stage"], "idle");
        assert_eq!(value["doorPhase"], "closed");
        assert_eq!(value["position"], 0);
        assert_eq!(value["queueLen"], 1);
        assert_eq!(value["waiting"], serde_json::json!([0, 0, 0, 1]));
    }
}
