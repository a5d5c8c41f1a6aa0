//! Application services.

pub mod prompt_service;
pub mod scaffold_service;

pub use prompt_service::PromptService;
pub use scaffold_service::ScaffoldService;
