use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Validation,
    NotFound,
    MalformedBody,
    MethodNotAllowed,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Required field is missing or empty"),
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::MalformedBody => write!(f, "Invalid JSON body"),
            KernelError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
