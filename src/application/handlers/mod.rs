//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod booking;
pub mod discovery;

pub use booking::{
    AddMilestoneCommand, AddMilestoneHandler, AddMilestoneResult, BookingUpdate,
    CompleteMilestoneCommand, CompleteMilestoneHandler, CompleteMilestoneResult,
    CreateBookingCommand, CreateBookingHandler, CreateBookingResult, GetBookingBoardHandler,
    GetBookingBoardQuery, GetBookingBoardResult, GetBookingHandler, GetBookingQuery,
    GetBookingResult, StartMilestoneCommand, StartMilestoneHandler, StartMilestoneResult,
    TransitionBookingCommand, TransitionBookingHandler, TransitionBookingResult,
};
pub use discovery::{
    CatalogSnapshot, RecommendBuddiesHandler, RecommendBuddiesQuery, RecommendBuddiesResult,
    SearchLocalitiesHandler, SearchLocalitiesQuery, SearchLocalitiesResult,
};
