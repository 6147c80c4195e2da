use prost::Message;
use wpeb_client::{
    codec::{
        decode_authorization, decode_request, encode_authorization, encode_request, proto,
        DecodeError, MalformedMessage,
    },
    domain::{
        actions::{
            Action, ActionType, AuthorizedAction, DrinkTeaAction, OrderPizzaAction,
            PlayVideoGameAction, UserJoinAction, UserLeaveAction,
        },
        envelopes::{CommandAuthorization, CommandRequest},
        notification::NotificationLine,
    },
};

fn sample_actions() -> Vec<Action> {
    vec![
        Action::OrderPizza(OrderPizzaAction {
            pizza_name: "Vegetariana".into(),
            count: 10,
        }),
        Action::PlayVideoGame(PlayVideoGameAction {
            video_game_name: "Candy Crap".into(),
            players: 1,
        }),
        Action::DrinkTea(DrinkTeaAction {
            region: "Turkish Black Sea".into(),
            temperature: -4,
        }),
    ]
}

#[test]
fn order_pizza_request_survives_the_wire() {
    let request = CommandRequest::new(OrderPizzaAction {
        pizza_name: "Margherita".into(),
        count: 3,
    });
    let decoded = decode_request(&encode_request(&request).unwrap()).unwrap();

    assert_eq!(decoded.action_type(), ActionType::OrderPizza);
    match decoded.action {
        Action::OrderPizza(pizza) => {
            assert_eq!(pizza.pizza_name, "Margherita");
            assert_eq!(pizza.count, 3);
        }
        other => panic!("wrong payload {other:?}"),
    }
}

#[test]
fn drink_tea_request_survives_the_wire() {
    let request = CommandRequest::new(DrinkTeaAction {
        region: "India".into(),
        temperature: 45,
    });
    let decoded = decode_request(&encode_request(&request).unwrap()).unwrap();
    assert_eq!(
        decoded.action,
        Action::DrinkTea(DrinkTeaAction {
            region: "India".into(),
            temperature: 45,
        })
    );
}

#[test]
fn user_join_broadcast_is_ready_to_render() {
    let auth = CommandAuthorization {
        user_name: "alice".into(),
        time: 1_700_000_000_000,
        action: AuthorizedAction::UserJoin(UserJoinAction { user_count: 5 }),
    };
    let decoded = decode_authorization(&encode_authorization(&auth).unwrap()).unwrap();

    assert_eq!(decoded.user_name, "alice");
    assert_eq!(decoded.time, 1_700_000_000_000);
    match &decoded.action {
        AuthorizedAction::UserJoin(join) => assert_eq!(join.user_count, 5),
        other => panic!("wrong payload {other:?}"),
    }
    assert_eq!(
        NotificationLine::from_authorization(&decoded).to_string(),
        "[ alice | 2023-11-14 22:13:20 ]: Joined... Logged in users: 5"
    );
}

#[test]
fn garbage_is_malformed_not_a_crash() {
    for bytes in [&[0xff, 0xff][..], &[0x12, 0x34][..], &[][..]] {
        assert!(matches!(
            decode_authorization(bytes),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(decode_request(bytes), Err(DecodeError::Malformed(_))));
    }
}

#[test]
fn every_action_round_trips_deterministically() {
    for action in sample_actions() {
        let request = CommandRequest::new(action.clone());
        let first = encode_request(&request).unwrap();
        let second = encode_request(&request).unwrap();
        assert_eq!(first, second);
        assert_eq!(decode_request(&first).unwrap(), request);

        let auth = CommandAuthorization {
            user_name: "User #4".into(),
            time: 1_439_330_000_000,
            action: AuthorizedAction::from(action),
        };
        assert_eq!(
            decode_authorization(&encode_authorization(&auth).unwrap()).unwrap(),
            auth
        );
    }

    let leave = CommandAuthorization {
        user_name: "User #4".into(),
        time: 0,
        action: AuthorizedAction::UserLeave(UserLeaveAction { user_count: 0 }),
    };
    assert_eq!(
        decode_authorization(&encode_authorization(&leave).unwrap()).unwrap(),
        leave
    );
}

#[test]
fn every_truncation_is_rejected() {
    let auth = CommandAuthorization {
        user_name: "bob".into(),
        time: 1_700_000_000_000,
        action: AuthorizedAction::PlayVideoGame(PlayVideoGameAction {
            video_game_name: "WOW".into(),
            players: 4,
        }),
    };
    let bytes = encode_authorization(&auth).unwrap();
    for len in 0..bytes.len() {
        match decode_authorization(&bytes[..len]) {
            Err(DecodeError::Malformed(_)) => {}
            other => panic!("prefix of {len} bytes decoded to {other:?}"),
        }
    }
}

#[test]
fn unknown_action_type_routes_to_fallback() {
    // userName "carol", time 1, actionType 77
    let bytes = [
        0x0a, 0x05, b'c', b'a', b'r', b'o', b'l', 0x10, 0x01, 0x18, 0x4d,
    ];
    match decode_authorization(&bytes) {
        Err(DecodeError::UnknownActionType(unknown)) => {
            assert_eq!(unknown.action_type, 77);
            assert_eq!(
                NotificationLine::from_unknown(&unknown).text,
                "Unknown action with type 77."
            );
        }
        other => panic!("expected unknown action, got {other:?}"),
    }
}

#[test]
fn missing_action_type_is_malformed() {
    let bytes = [0x0a, 0x01, b'x', 0x10, 0x01];
    assert_eq!(
        decode_authorization(&bytes),
        Err(DecodeError::Malformed(MalformedMessage::MissingField {
            field: "actionType"
        }))
    );
}

#[test]
fn empty_user_name_is_rejected_in_both_directions() {
    let bytes = proto::CommandAuthorization {
        user_name: Some(String::new()),
        time: Some(1),
        action_type: Some(ActionType::UserLeave.value()),
        user_leave_action: Some(proto::UserLeaveAction {
            user_count: Some(2),
        }),
        ..Default::default()
    }
    .encode_to_vec();
    assert_eq!(
        decode_authorization(&bytes),
        Err(DecodeError::Malformed(MalformedMessage::MissingField {
            field: "userName"
        }))
    );

    let named = proto::CommandAuthorization {
        user_name: Some("erin".into()),
        ..proto::CommandAuthorization::decode(bytes.as_slice()).unwrap()
    }
    .encode_to_vec();
    let decoded = decode_authorization(&named).unwrap();
    assert_eq!(encode_authorization(&decoded).unwrap(), named);
}
