use serde::{Deserialize, Serialize};

/// Address being entered for the room listing.
///
/// Shared across the registration steps and changed only through
/// [`RegisterRoomAction`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationDraft {
    pub country: String,
    pub city: String,
    pub district: String,
    pub street_address: String,
    pub detail_address: String,
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Single-field updates of the location draft.
#[derive(Clone, Debug, PartialEq)]
pub enum RegisterRoomAction {
    SetCountry(String),
    SetCity(String),
    SetDistrict(String),
    SetStreetAddress(String),
    SetDetailAddress(String),
    SetPostcode(String),
    SetLatitude(f64),
    SetLongitude(f64),
}

impl LocationDraft {
    pub fn apply(&mut self, action: RegisterRoomAction) {
        match action {
            RegisterRoomAction::SetCountry(v) => self.country = v,
            RegisterRoomAction::SetCity(v) => self.city = v,
            RegisterRoomAction::SetDistrict(v) => self.district = v,
            RegisterRoomAction::SetStreetAddress(v) => self.street_address = v,
            RegisterRoomAction::SetDetailAddress(v) => self.detail_address = v,
            RegisterRoomAction::SetPostcode(v) => self.postcode = v,
            RegisterRoomAction::SetLatitude(v) => self.latitude = v,
            RegisterRoomAction::SetLongitude(v) => self.longitude = v,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Address resolved from a pair of coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub country: String,
    pub city: String,
    pub district: String,
    pub street_address: String,
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationInfo {
    /// Updates applied to the draft after a lookup. The detail address is
    /// left to the user.
    pub fn into_actions(self) -> Vec<RegisterRoomAction> {
        vec![
            RegisterRoomAction::SetCountry(self.country),
            RegisterRoomAction::SetCity(self.city),
            RegisterRoomAction::SetDistrict(self.district),
            RegisterRoomAction::SetStreetAddress(self.street_address),
            RegisterRoomAction::SetPostcode(self.postcode),
            RegisterRoomAction::SetLatitude(self.latitude),
            RegisterRoomAction::SetLongitude(self.longitude),
        ]
    }
}
