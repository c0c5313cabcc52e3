//! Shared application state for every HTTP area.

use std::sync::Arc;

use crate::application::handlers::conference::{
    ChangeRegistrationHandler, CreateConferenceHandler, GetConferenceHandler,
    ListAttendingHandler, ListCreatedHandler, QueryConferencesHandler,
};
use crate::application::handlers::profile::{GetProfileHandler, SaveProfileHandler};
use crate::application::handlers::session::{
    CreateSessionHandler, GetFeaturedSpeakerHandler, ListSessionsHandler,
};
use crate::application::handlers::tasks::SetFeaturedSpeakerHandler;
use crate::application::handlers::wishlist::{AddToWishlistHandler, ListWishlistHandler};
use crate::ports::{
    ConferenceRepository, MemoCache, ProfileRepository, RegistrationLedger, SessionRepository,
    SessionValidator, TaskQueue,
};

/// Arc-wrapped ports, cloned per request. Handlers are built on demand.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileRepository>,
    pub conferences: Arc<dyn ConferenceRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub ledger: Arc<dyn RegistrationLedger>,
    pub tasks: Arc<dyn TaskQueue>,
    pub cache: Arc<dyn MemoCache>,
    pub validator: Arc<dyn SessionValidator>,
}

impl AppState {
    // Profile

    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.profiles.clone())
    }

    pub fn save_profile_handler(&self) -> SaveProfileHandler {
        SaveProfileHandler::new(self.profiles.clone())
    }

    // Conference

    pub fn create_conference_handler(&self) -> CreateConferenceHandler {
        CreateConferenceHandler::new(self.profiles.clone(), self.conferences.clone())
    }

    pub fn get_conference_handler(&self) -> GetConferenceHandler {
        GetConferenceHandler::new(self.profiles.clone(), self.conferences.clone())
    }

    pub fn query_conferences_handler(&self) -> QueryConferencesHandler {
        QueryConferencesHandler::new(self.profiles.clone(), self.conferences.clone())
    }

    pub fn list_created_handler(&self) -> ListCreatedHandler {
        ListCreatedHandler::new(self.profiles.clone(), self.conferences.clone())
    }

    pub fn list_attending_handler(&self) -> ListAttendingHandler {
        ListAttendingHandler::new(self.profiles.clone(), self.conferences.clone())
    }

    pub fn change_registration_handler(&self) -> ChangeRegistrationHandler {
        ChangeRegistrationHandler::new(self.profiles.clone(), self.ledger.clone())
    }

    // Session

    pub fn create_session_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(
            self.conferences.clone(),
            self.sessions.clone(),
            self.tasks.clone(),
        )
    }

    pub fn list_sessions_handler(&self) -> ListSessionsHandler {
        ListSessionsHandler::new(self.sessions.clone())
    }

    pub fn featured_speaker_handler(&self) -> GetFeaturedSpeakerHandler {
        GetFeaturedSpeakerHandler::new(self.cache.clone())
    }

    pub fn set_featured_speaker_handler(&self) -> SetFeaturedSpeakerHandler {
        SetFeaturedSpeakerHandler::new(self.cache.clone())
    }

    // Wishlist

    pub fn add_to_wishlist_handler(&self) -> AddToWishlistHandler {
        AddToWishlistHandler::new(self.profiles.clone(), self.sessions.clone())
    }

    pub fn list_wishlist_handler(&self) -> ListWishlistHandler {
        ListWishlistHandler::new(self.profiles.clone(), self.sessions.clone())
    }
}
