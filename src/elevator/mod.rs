pub mod doors;
pub mod fsm;
pub mod request_queue;
pub mod statistics;

pub mod doors_tests;
pub mod request_queue_tests;

pub use doors::{DoorSequencer, ToneScheduler};
pub use fsm::ElevatorController;
pub use request_queue::RequestQueue;
pub use statistics::Statistics;
