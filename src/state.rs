use std::sync::Arc;

use crate::db::Db;
use crate::services::geocode::Geocoder;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub geocoder: Arc<Geocoder>,
}
