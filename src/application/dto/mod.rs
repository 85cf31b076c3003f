//! DTOs - data transfer objects for layer boundaries

pub mod theme_dto;

pub use theme_dto::ThemeDto;
