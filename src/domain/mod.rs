pub mod advice;
pub mod forecast;
