pub mod submit_v1;

use warp::Filter;

/// Submissions are small; anything bigger than this is not a score record.
const BODY_LIMIT: u64 = 1024 * 10;

pub fn routes() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("fullstack" / "api" / "prd" / "score" / "submit")
        .and(warp::post())
        .and(warp::filters::body::content_length_limit(BODY_LIMIT))
        .and(warp::filters::body::bytes())
        .then(submit_v1::submit_v1)
}
