mod home;
mod register_room_location;

pub use home::HomePage;
pub use register_room_location::RegisterRoomLocationPage;
