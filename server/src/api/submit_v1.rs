use std::time::Duration;

use anyhow::Result;
use bytes::Bytes;

use prdscore_payloads::ScoreRecord;

pub fn submit_v1_fallible(body: &[u8]) -> Result<ScoreRecord> {
    let record: ScoreRecord = serde_json::from_slice(body)?;
    record.validate()?;
    Ok(record)
}

fn describe(r: &ScoreRecord) -> String {
    format!(
        "{} [{}] from {} ({}): product={} backend={} frontend={} qa={} design={} global={} level={:?}",
        r.document_name,
        r.business_line,
        r.submitter,
        r.document_link,
        r.product_score,
        r.backend_score,
        r.frontend_score,
        r.qa_score,
        r.design_score,
        r.global_score,
        r.global_level,
    )
}

pub async fn submit_v1(body: Bytes) -> impl warp::reply::Reply {
    let status = match submit_v1_fallible(&body[..]) {
        Ok(record) => {
            log::info!("Score: {}", describe(&record));
            warp::http::StatusCode::OK
        }
        Err(e) => {
            only_every::only_every!(Duration::from_secs(3), {
                log::error!("Could not handle score submission because {:?}", e);
            });

            warp::http::StatusCode::BAD_REQUEST
        }
    };

    warp::reply::with_status(warp::reply::reply(), status)
}

#[cfg(test)]
mod tests {
    use warp::http::StatusCode;

    use prdscore_payloads::SUBMIT_PATH;

    use super::*;

    const EXAMPLE: &str = r#"{"prdDocName":"PRD-1","prdLink":"http://x/1","submitter":"alice","businessLine":"sales","productScore":4,"backendScore":3,"frontendScore":4,"qaScore":5,"designScore":3}"#;

    async fn post(path: &str, body: &str) -> StatusCode {
        warp::test::request()
            .method("POST")
            .path(path)
            .body(body.to_string())
            .reply(&crate::api::routes())
            .await
            .status()
    }

    #[test]
    fn test_decode_fills_defaults() {
        let record = submit_v1_fallible(EXAMPLE.as_bytes()).unwrap();
        assert_eq!(record.document_name, "PRD-1");
        assert_eq!(record.global_score, 0.0);
        assert_eq!(record.global_level, "");
    }

    #[test]
    fn test_describe_names_document() {
        let line = describe(&submit_v1_fallible(EXAMPLE.as_bytes()).unwrap());
        assert!(line.starts_with("PRD-1 [sales] from alice"), "{}", line);
        assert!(line.ends_with("level=\"\""), "{}", line);
    }

    #[tokio::test]
    async fn test_accepts_valid_record() {
        assert_eq!(post(SUBMIT_PATH, EXAMPLE).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_bad_bodies() {
        let missing = EXAMPLE.replace(r#""qaScore":5,"#, "");
        let empty_name = EXAMPLE.replace(r#""PRD-1""#, r#""""#);
        for body in ["not json", missing.as_str(), empty_name.as_str()] {
            assert_eq!(post(SUBMIT_PATH, body).await, StatusCode::BAD_REQUEST, "{}", body);
        }
    }

    #[tokio::test]
    async fn test_other_routes_are_rejected() {
        assert_eq!(
            post("/fullstack/api/prd/score", EXAMPLE).await,
            StatusCode::NOT_FOUND
        );

        let resp = warp::test::request()
            .method("GET")
            .path(SUBMIT_PATH)
            .reply(&crate::api::routes())
            .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
