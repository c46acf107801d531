use httpmock::prelude::*;
use gym_pulse::core::pipeline::scrape_category_boxes;
use gym_pulse::PulseError;

#[tokio::test]
async fn test_scrape_category_boxes() {
    let server = MockServer::start();
    let page_html = r#"
        <html><body>
        <div class="realtime-boxes">
            <div class="category-box">Gym 42</div>
            <div class="category-box">Group exercise 7</div>
        </div>
        </body></html>
    "#;
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(page_html);
    });

    let client = reqwest::Client::new();
    let boxes = scrape_category_boxes(&client, &server.url("/")).await.unwrap();

    page_mock.assert();
    assert_eq!(boxes, vec!["Gym 42", "Group exercise 7"]);
}

#[tokio::test]
async fn test_scrape_page_without_boxes() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html><body><p>maintenance</p></body></html>");
    });

    let client = reqwest::Client::new();
    let boxes = scrape_category_boxes(&client, &server.url("/")).await.unwrap();

    page_mock.assert();
    assert!(boxes.is_empty());
}

#[tokio::test]
async fn test_scrape_page_http_error() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(404);
    });

    let client = reqwest::Client::new();
    let err = scrape_category_boxes(&client, &server.url("/")).await.unwrap_err();

    page_mock.assert();
    assert!(matches!(err, PulseError::ApiError(_)));
}
