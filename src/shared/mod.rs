pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::DoorPhase;
pub use structs::ElevatorStatus;
pub use structs::FinePosition;
pub use structs::FloorIndex;
pub use structs::Stage;
pub use structs::Timestamp;
pub use structs::Tone;
pub use structs::Trip;
pub use structs::N_FLOORS;
