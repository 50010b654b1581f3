use leptos::prelude::*;

use crate::models::{AuthMode, LocationDraft, RegisterRoomAction, User};

/// Application-wide state shared through context.
#[derive(Clone, Copy)]
pub struct Store {
    pub user: RwSignal<Option<User>>,
    /// `None` while the auth modal is closed.
    pub auth_mode: RwSignal<Option<AuthMode>>,
    /// Whether inputs show their error messages.
    pub validate_mode: RwSignal<bool>,
    pub register_room: RwSignal<LocationDraft>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            auth_mode: RwSignal::new(None),
            validate_mode: RwSignal::new(false),
            register_room: RwSignal::new(LocationDraft::default()),
        }
    }

    pub fn set_user(&self, user: Option<User>) {
        self.user.set(user);
    }

    pub fn set_auth_mode(&self, mode: Option<AuthMode>) {
        self.auth_mode.set(mode);
    }

    pub fn set_validate_mode(&self, on: bool) {
        self.validate_mode.set(on);
    }

    pub fn dispatch(&self, action: RegisterRoomAction) {
        self.register_room.update(|draft| draft.apply(action));
    }

    /// Reactive read of one field of the location draft.
    pub fn room_field<T>(&self, field: fn(&LocationDraft) -> T) -> Signal<T>
    where
        T: Send + Sync + 'static,
    {
        let draft = self.register_room;
        Signal::derive(move || draft.with(field))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_store() -> Store {
    let store = Store::new();
    provide_context(store);
    store
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}
