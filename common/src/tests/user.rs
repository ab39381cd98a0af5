use crate::{LoginCredentials, LoginResponse, NewUser, User, UserUpdate};
use serde_json::json;

/// **VALUE**: Verifies that `User` decodes from the server's JSON shape.
///
/// **WHY THIS MATTERS**: Every read operation of the client funnels through this
/// one deserialization. A renamed or retyped field breaks list/get/update at once.
///
/// **BUG THIS CATCHES**: Would catch a field rename (e.g. `user_name`) or an id
/// type change that silently truncates.
#[test]
fn given_server_json_when_decoded_then_user_fields_map_exactly() {
    // GIVEN: The server's user shape
    let payload = json!({"id": 7, "username": "alice", "email": "alice@example.com"});

    // WHEN: Decoding
    let user: User = serde_json::from_value(payload).unwrap();

    // THEN: Fields map 1:1
    assert_eq!(
        user,
        User {
            id: 7,
            username: String::from("alice"),
            email: String::from("alice@example.com"),
        }
    );
}

/// **VALUE**: Verifies the outbound bodies serialize to the field names the server expects.
///
/// **WHY THIS MATTERS**: These structs ARE the wire contract for register, login and
/// update. serde derives make renames easy to introduce silently.
///
/// **BUG THIS CATCHES**: Would catch `#[serde(rename_all = ...)]` being added or a
/// password field leaking into `UserUpdate`.
#[test]
fn given_request_bodies_when_serialized_then_wire_field_names_match() {
    let new_user = NewUser {
        username: String::from("bob"),
        email: String::from("bob@x.com"),
        password: String::from("hunter2"),
    };
    let update = UserUpdate {
        username: String::from("bob"),
        email: String::from("bob@x.com"),
    };
    let credentials = LoginCredentials {
        email: String::from("bob@x.com"),
        password: String::from("hunter2"),
    };

    assert_eq!(
        serde_json::to_value(&new_user).unwrap(),
        json!({"username": "bob", "email": "bob@x.com", "password": "hunter2"})
    );
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({"username": "bob", "email": "bob@x.com"})
    );
    assert_eq!(
        serde_json::to_value(&credentials).unwrap(),
        json!({"email": "bob@x.com", "password": "hunter2"})
    );
}

/// **VALUE**: Verifies that a login response without a token still decodes, with an
/// empty token.
///
/// **WHY THIS MATTERS**: The original service only stored the credential when the
/// server actually sent one. Decoding must not fail on the omission, and the empty
/// marker is what the client checks before writing the session store.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[serde(default)]` from `token`,
/// which would turn an omitted token into a hard decode error.
#[test]
fn given_login_response_without_token_when_decoded_then_token_defaults_empty() {
    // GIVEN: A login payload missing the token field
    let payload = json!({"data": {"id": 1, "username": "a", "email": "a@b.com"}});

    // WHEN: Decoding
    let response: LoginResponse = serde_json::from_value(payload).unwrap();

    // THEN: Token defaults to empty, user data is intact
    assert!(response.token.is_empty());
    assert_eq!(response.data.id, 1);
}
