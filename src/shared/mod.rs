pub mod macros;
pub mod structs;
pub mod structs_tests;

pub use structs::Building;
pub use structs::Car;
pub use structs::Floor;
pub use structs::FloorView;
pub use structs::Passenger;
pub use structs::PassengerId;
pub use structs::RiderView;
pub use structs::RunSummary;
pub use structs::SimSnapshot;
