use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::api::metrics;

/// Alimenta os contadores de `/metrics` (requisições e respostas 4xx/5xx)
pub struct RequestMetrics;

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsMiddleware { service }))
    }
}

pub struct RequestMetricsMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        metrics::increment_request_count();
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            match &result {
                Ok(res) if res.status().is_client_error() || res.status().is_server_error() => {
                    metrics::increment_error_count();
                }
                Err(_) => metrics::increment_error_count(),
                Ok(_) => {}
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryUserRepository, UserRepository};
    use actix_web::{test, web, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_counts_requests_and_errors() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .wrap(RequestMetrics)
                .configure(crate::api::configure),
        )
        .await;

        let before = metrics::snapshot();

        let req = test::TestRequest::get().uri("/api/users").to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::get()
            .uri("/api/users/64b7f0c2a1b2c3d4e5f60718")
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_client_error());

        let after = metrics::snapshot();
        assert!(after.http_requests_total >= before.http_requests_total + 2);
        assert!(after.http_errors_total >= before.http_errors_total + 1);
    }
}
