//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    ApplyRequest, ChangePasswordRequest, ConfirmCodeRequest, CreateTaskRequest, LoginRequest,
    LogoutRequest, RefreshTokenRequest, RegisterCompanyRequest, RegisterInfluencerRequest,
    SendEmailCodeRequest, SendSmsCodeRequest, UpdateCompanyRequest, UpdateInfluencerRequest,
    UpdateProfileRequest, UpdateTaskRequest,
};

// Re-export commonly used response types
pub use responses::{
    AcceptResponse, AdminLogResponse, ApiResponse, ApplicationResponse, AuthResponse,
    CategoryResponse, CodeConfirmedResponse, CodeSentResponse, CompanyResponse,
    CurrentUserResponse, HealthChecks, HealthResponse, InfluencerResponse, PagedResponse,
    PaginationMeta, ProfileResponse, ReadinessResponse, StatsResponse, TaskResponse,
    UploadResponse, VideoResponse,
};
