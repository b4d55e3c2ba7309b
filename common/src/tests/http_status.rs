use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_categorized_then_ranges_are_respected() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(302).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(404).is_server_error());
}

#[test]
fn given_404_when_checked_then_is_not_found() {
    assert!(HttpStatusCode::from(404).is_not_found());
    assert!(!HttpStatusCode::from(410).is_not_found());
    assert_eq!(HttpStatusCode(404).to_string(), "404");
}
