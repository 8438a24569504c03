#[cfg(test)]
pub mod tests {
    use actix_web::{dev::ServiceResponse, test, web::Data, App};
    use dotenv::dotenv;
    use serde::{de::DeserializeOwned, Serialize};

    use crate::routes::{json_config, routes};

    async fn run_request(req: test::TestRequest) -> ServiceResponse {
        dotenv().ok();

        let app = test::init_service(
            App::new()
                .app_data(Data::new(db::new_pool()))
                .app_data(json_config())
                .configure(routes),
        )
        .await;

        test::call_service(&app, req.to_request()).await
    }

    fn parse_body<R>(status: u16, body: &[u8]) -> R
    where
        R: DeserializeOwned,
    {
        serde_json::from_slice(body).unwrap_or_else(|_| {
            panic!(
                "failed to deserialize response. body: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        })
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let res = run_request(test::TestRequest::get().uri(route)).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, parse_body(status, &body))
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T, R>(route: &str, params: T) -> (u16, R)
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let res = run_request(test::TestRequest::post().set_json(&params).uri(route)).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, parse_body(status, &body))
    }
}
