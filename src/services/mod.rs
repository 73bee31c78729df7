use crate::error::DispatchError;

pub type ServiceResult<T> = Result<T, DispatchError>;

pub mod dispatch_service;

pub use dispatch_service::RequestDispatcher;
