use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::get,
    Form, Router,
};
use tracing::debug;

use super::client::AppraisalGateway;
use super::domain::AppraisalForm;
use super::service::AppraisalService;

/// Router serving the appraisal page on `GET /` and `POST /`.
pub fn appraisal_router<G>(service: Arc<AppraisalService<G>>) -> Router
where
    G: AppraisalGateway + 'static,
{
    Router::new()
        .route("/", get(index_handler::<G>).post(submit_handler::<G>))
        .with_state(service)
}

pub(crate) async fn index_handler<G>(
    State(service): State<Arc<AppraisalService<G>>>,
) -> Html<String>
where
    G: AppraisalGateway + 'static,
{
    Html(service.initial_page().render())
}

pub(crate) async fn submit_handler<G>(
    State(service): State<Arc<AppraisalService<G>>>,
    form: Result<Form<AppraisalForm>, FormRejection>,
) -> Html<String>
where
    G: AppraisalGateway + 'static,
{
    // An unreadable body is handled like a blank field.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "appraisal form rejected");
            AppraisalForm::default()
        }
    };

    Html(service.submit(&form.domain).await.render())
}
