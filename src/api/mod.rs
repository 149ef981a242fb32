//! HTTP API module for the shift earnings engine.
//!
//! This module provides the REST API endpoints for computing shift
//! amounts, billing windows, the home summary, and registration checks.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AmountRequest, PeriodRequest, PlaceCheckRequest, RegistrationRequest, SummaryRequest,
};
pub use response::ApiError;
pub use state::AppState;
