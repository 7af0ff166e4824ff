//! Middleware Chain Integration Tests
//!
//! Runs decorated views behind detection and Vary middleware, the way a
//! project mounts them:
//! - detection sets the mobile flag before the view runs
//! - the Vary middleware reads NO_MOBILE after the view returns
//! - path parameters reach the view as named arguments


use fixtures::{
	HeaderDetectionMiddleware, RecordingView, VaryMiddleware, mobile_view, normal_view,
	request_with_header,
};
use reinhardt_http::{Handler, MiddlewareChain};
use reinhardt_mobility::{MobileTemplate, ViewExt, ViewHandler};
use rstest::rstest;
use std::sync::Arc;

fn chain_for(handler: Arc<dyn Handler>) -> MiddlewareChain {
	MiddlewareChain::new(handler)
		.with_middleware(Arc::new(VaryMiddleware))
		.with_middleware(Arc::new(HeaderDetectionMiddleware))
}

#[rstest]
#[case(true, "mobile")]
#[case(false, "normal")]
#[tokio::test]
async fn test_detected_flag_drives_mobilized_view(
	normal_view: RecordingView,
	mobile_view: RecordingView,
	#[case] mobile: bool,
	#[case] expected: &str,
) {
	let handler = normal_view.mobilized_with(mobile_view).into_handler();
	let chain = chain_for(Arc::new(handler));

	let response = chain.handle(request_with_header(mobile)).await.unwrap();

	assert_eq!(response.body_text(), expected);
	assert_eq!(response.headers.get("vary").unwrap(), "User-Agent");
}

#[rstest]
#[case(true, "normal:articles/mobile/detail.html")]
#[case(false, "normal:articles/detail.html")]
#[tokio::test]
async fn test_template_view_receives_path_params(
	normal_view: RecordingView,
	#[case] mobile: bool,
	#[case] expected: &str,
) {
	let handler = ViewHandler::new(
		normal_view
			.clone()
			.with_mobile_template(MobileTemplate::new("articles/{mobile/}detail.html").unwrap()),
	);
	let chain = chain_for(Arc::new(handler));

	let response = chain.handle(request_with_header(mobile)).await.unwrap();

	assert_eq!(response.body_text(), expected);
	let calls = normal_view.calls();
	assert_eq!(calls[0].args.get("pk"), Some("12"));
	assert!(calls[0].args.positional.is_empty());
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn test_not_mobilized_view_suppresses_vary(normal_view: RecordingView, #[case] mobile: bool) {
	let chain = chain_for(Arc::new(normal_view.clone().not_mobilized().into_handler()));

	let response = chain.handle(request_with_header(mobile)).await.unwrap();

	assert!(response.headers.get("vary").is_none());
	assert_eq!(response.body_text(), "normal");
	assert_eq!(normal_view.calls()[0].mobile, mobile);
}

#[rstest]
#[tokio::test]
async fn test_requests_do_not_share_flags(normal_view: RecordingView) {
	let opted_out = Arc::new(normal_view.clone().not_mobilized().into_handler());
	let plain = Arc::new(normal_view.clone().into_handler());
	let opted_out_chain = chain_for(opted_out);
	let plain_chain = chain_for(plain);

	let (first, second) = tokio::join!(
		opted_out_chain.handle(request_with_header(true)),
		plain_chain.handle(request_with_header(true)),
	);

	assert!(first.unwrap().headers.get("vary").is_none());
	assert!(second.unwrap().headers.get("vary").is_some());
}
