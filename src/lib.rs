pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ChatMessage, ChatRole, CompareVehiclesUseCase, EstimatePriceUseCase,
    ExtractDetailsUseCase, GenerationParams,
};

pub use cli::Commands;

pub use connector::{
    create_router, run_server, ApiError, Container, ContainerConfig, MockChatClient,
    OpenAiChatClient,
};

pub use domain::{
    CompareRequest, ComparisonResult, DegradeReason, DomainError, ExtractDetailsRequest,
    ExtractedDetails, Extraction, MileageUnit, PriceEstimateRequest, PriceEstimateResult,
    PriceRange, VehicleDescriptor,
};
