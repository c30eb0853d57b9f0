use crate::controller::{Intake, TryIntake};
use application::transfer::{CreateBookDto, DeleteBookDto, MergeBookDto, ReplaceBookDto};
use error_stack::Report;
use kernel::KernelError;
use serde::Deserialize;

#[derive(Debug)]
pub struct ListRequest;

// Fields are optional so that a missing field answers the original
// "... are required" message instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    title: Option<String>,
    author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceRequest {
    id: Option<i64>,
    title: Option<String>,
    author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    title: Option<String>,
    author: Option<String>,
}

#[derive(Debug)]
pub struct DeleteItemRequest {
    id: i64,
}

impl DeleteItemRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

fn required(message: &str) -> Report<KernelError> {
    Report::new(KernelError::Validation).attach_printable(message.to_string())
}

impl Intake<ListRequest> for BookTransformer {
    type To = ();
    fn emit(&self, _: ListRequest) -> Self::To {}
}

impl TryIntake<CreateRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateRequest) -> Result<Self::To, Self::Error> {
        match (input.title, input.author) {
            (Some(title), Some(author)) if !title.is_empty() && !author.is_empty() => {
                Ok(CreateBookDto { title, author })
            }
            _ => Err(required("Title and author are required")),
        }
    }
}

impl TryIntake<ReplaceRequest> for BookTransformer {
    type To = ReplaceBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: ReplaceRequest) -> Result<Self::To, Self::Error> {
        match (input.id, input.title, input.author) {
            (Some(id), Some(title), Some(author)) if !title.is_empty() && !author.is_empty() => {
                Ok(ReplaceBookDto { id, title, author })
            }
            _ => Err(required("ID, title, and author are required")),
        }
    }
}

impl TryIntake<DeleteRequest> for BookTransformer {
    type To = DeleteBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: DeleteRequest) -> Result<Self::To, Self::Error> {
        input
            .id
            .map(|id| DeleteBookDto { id })
            .ok_or_else(|| required("ID is required"))
    }
}

impl Intake<(i64, MergeRequest)> for BookTransformer {
    type To = MergeBookDto;
    fn emit(&self, (id, input): (i64, MergeRequest)) -> Self::To {
        MergeBookDto {
            id,
            title: input.title,
            author: input.author,
        }
    }
}

impl Intake<DeleteItemRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteItemRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
