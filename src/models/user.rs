use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account details shared with the browser. Never carries the password hash.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub lastname: String,
    pub firstname: String,
    pub birthday: NaiveDate,
    pub profile_image: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Which form the auth modal shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignUp,
    LogIn,
}
