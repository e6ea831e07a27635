use super::*;

#[test]
fn error_from_parts_uses_message_field() {
    let err = error_from_parts(422, r#"{"message":"Email already registered"}"#);
    assert_eq!(
        err,
        ApiError::Server {
            status: 422,
            message: "Email already registered".to_owned()
        }
    );
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn error_from_parts_falls_back_to_error_field() {
    let err = error_from_parts(401, r#"{"error":"Incorrect email or password"}"#);
    assert_eq!(
        err,
        ApiError::Server {
            status: 401,
            message: "Incorrect email or password".to_owned()
        }
    );
}

#[test]
fn error_from_parts_prefers_message_over_error() {
    let err = error_from_parts(400, r#"{"message":"primary","error":"secondary"}"#);
    assert_eq!(err.to_string(), "primary");
}

#[test]
fn error_from_parts_ignores_blank_messages() {
    assert_eq!(error_from_parts(500, r#"{"message":"   "}"#), ApiError::Status(500));
}

#[test]
fn error_from_parts_handles_non_json_bodies() {
    assert_eq!(error_from_parts(502, "<html>Bad Gateway</html>"), ApiError::Status(502));
    assert_eq!(error_from_parts(404, ""), ApiError::Status(404));
}

#[test]
fn generic_variants_render_generic_text() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
    assert_eq!(
        ApiError::Transport("fetch aborted".to_owned()).to_string(),
        "network error: fetch aborted"
    );
    assert_eq!(
        ApiError::Decode("missing field `data`".to_owned()).to_string(),
        "unexpected response: missing field `data`"
    );
}
