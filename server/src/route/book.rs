use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::book::request::{
    BookTransformer, CreateRequest, DeleteItemRequest, DeleteRequest, ListRequest, MergeRequest,
    ReplaceRequest,
};
use crate::route::book::response::{BookPresenter, CreatedBookPresenter};
use application::service::{
    CreateBookService, DeleteBookService, GetBookService, UpdateBookService,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use error_stack::Report;
use kernel::KernelError;

mod request;
mod response;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

fn reject_body(rejection: JsonRejection) -> Report<KernelError> {
    Report::new(KernelError::MalformedBody).attach_printable(rejection)
}

fn reject_path(rejection: PathRejection) -> Report<KernelError> {
    Report::new(KernelError::Validation)
        .attach_printable(rejection)
        .attach_printable("Invalid book ID".to_string())
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new(BookTransformer, BookPresenter)
                    .intake(ListRequest)
                    .handle(|()| async move { module.get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 body: Result<Json<CreateRequest>, JsonRejection>| async move {
                    let Json(req) = body.map_err(reject_body)?;
                    Controller::new(BookTransformer, CreatedBookPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 body: Result<Json<ReplaceRequest>, JsonRejection>| async move {
                    let Json(req) = body.map_err(reject_body)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.replace_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 body: Result<Json<DeleteRequest>, JsonRejection>| async move {
                    let Json(req) = body.map_err(reject_body)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.delete_book_strict(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            put(
                |State(module): State<AppModule>,
                 id: Result<Path<i64>, PathRejection>,
                 body: Result<Json<MergeRequest>, JsonRejection>| async move {
                    let Path(id) = id.map_err(reject_path)?;
                    let Json(req) = body.map_err(reject_body)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.merge_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 id: Result<Path<i64>, PathRejection>| async move {
                    let Path(id) = id.map_err(reject_path)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteItemRequest::new(id))
                        .handle(|dto| async move { module.delete_book_idempotent(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .fallback(|| async { ErrorStatus::from(Report::new(KernelError::MethodNotAllowed)) }),
        )
    }
}
