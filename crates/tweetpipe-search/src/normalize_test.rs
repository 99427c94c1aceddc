use serde_json::json;

use super::*;

/// A fully-populated raw item with every optional field absent.
fn bare_item() -> RawItem {
    RawItem {
        created_at: Some("Fri Nov 16 12:30:05 +0000 2018".to_string()),
        full_text: Some("Automation is changing everything".to_string()),
        id: Some(json!(1_063_442_069_893_951_488_u64)),
        id_str: Some("1063442069893951488".to_string()),
        favorite_count: Some(json!(12)),
        retweet_count: Some(json!(3)),
        favorited: Some(false),
        retweeted: Some(false),
        lang: Some("en".to_string()),
        ..RawItem::default()
    }
}

#[test]
fn absent_optional_fields_get_no_data_sentinels() {
    let record = normalize(&bare_item()).unwrap();
    assert_eq!(record.place, "noPlaceData");
    assert_eq!(record.coordinates, "noCoordinatesData");
    assert_eq!(record.in_reply_to_user_id, "noInReplyToUseridData");
    assert_eq!(record.in_reply_to_status_id, "noInReplyToStatusidData");
}

#[test]
fn null_optional_fields_from_json_get_no_data_sentinels() {
    let item: RawItem = serde_json::from_value(json!({
        "created_at": "Fri Nov 16 12:30:05 +0000 2018",
        "id_str": "7",
        "full_text": "hi",
        "favorite_count": 0,
        "retweet_count": 0,
        "place": null,
        "coordinates": null,
        "in_reply_to_user_id": null,
        "in_reply_to_user_id_str": null,
        "in_reply_to_status_id": null,
        "in_reply_to_status_id_str": null
    }))
    .unwrap();
    let record = normalize(&item).unwrap();
    assert_eq!(record.place, sentinel::NO_PLACE);
    assert_eq!(record.coordinates, sentinel::NO_COORDINATES);
    assert_eq!(record.in_reply_to_user_id, sentinel::NO_IN_REPLY_TO_USER_ID);
    assert_eq!(record.in_reply_to_status_id, sentinel::NO_IN_REPLY_TO_STATUS_ID);
}

#[test]
fn scalar_fields_are_copied() {
    let record = normalize(&bare_item()).unwrap();
    assert_eq!(record.post_id, "1063442069893951488");
    assert_eq!(record.favorite_count, 12);
    assert_eq!(record.retweet_count, 3);
    assert!(!record.self_favorited);
    assert!(!record.self_retweeted);
    assert_eq!(record.lang, "en");
    assert_eq!(record.text, "Automation is changing everything");
}

#[test]
fn created_at_is_rendered_as_utc_timestamp() {
    let record = normalize(&bare_item()).unwrap();
    assert_eq!(record.created_at, "2018-11-16 12:30:05+00:00");
}

#[test]
fn created_at_in_unknown_layout_is_kept_verbatim() {
    let mut item = bare_item();
    item.created_at = Some("2018-11-16T12:30:05Z".to_string());
    let record = normalize(&item).unwrap();
    assert_eq!(record.created_at, "2018-11-16T12:30:05Z");
}

#[test]
fn nested_place_and_coordinates_resolve() {
    let mut item = bare_item();
    item.place = Some(json!({
        "id": "fbd6d2f5a4e4a15e",
        "place_type": "admin",
        "name": "California",
        "full_name": "California, USA",
        "country_code": "US"
    }));
    item.coordinates = Some(json!({"type": "Point", "coordinates": [-86.4716, 40.0521]}));
    let record = normalize(&item).unwrap();
    assert_eq!(record.place, "California, USA");
    assert_eq!(record.coordinates, "[-86.4716, 40.0521]");
}

#[test]
fn stringified_place_and_coordinates_resolve() {
    let mut item = bare_item();
    item.place = Some(json!(
        "Place(id='1', url='u', place_type='admin', name='California', country_code='US', full_name='California, USA', country='United States')"
    ));
    item.coordinates = Some(json!("Coordinates(type='Point', coordinates=[-86.4716, 40.0521])"));
    let record = normalize(&item).unwrap();
    assert_eq!(record.place, "California");
    assert_eq!(record.coordinates, "[-86.4716, 40.0521]");
}

#[test]
fn malformed_nested_values_get_invalid_sentinels() {
    let cases = [
        (json!("Place(full_name='California')"), json!("not a coordinates dump")),
        (json!({"name": "no full name"}), json!({"type": "Point", "coordinates": [1.0]})),
        (json!(17), json!(true)),
        (json!([]), json!({})),
    ];
    for (place, coordinates) in cases {
        let mut item = bare_item();
        item.place = Some(place.clone());
        item.coordinates = Some(coordinates.clone());
        let record = normalize(&item)
            .unwrap_or_else(|e| panic!("normalize must not fail for {place} / {coordinates}: {e}"));
        assert_eq!(record.place, "placeDataInvalid", "place input {place}");
        assert_eq!(record.coordinates, "coordDataInvalid", "coordinates input {coordinates}");
    }
}

#[test]
fn reply_references_prefer_string_form() {
    let mut item = bare_item();
    item.in_reply_to_user_id = Some(json!(12345));
    item.in_reply_to_user_id_str = Some("12345".to_string());
    item.in_reply_to_status_id = Some(json!(1_063_000_000_000_000_000_u64));
    let record = normalize(&item).unwrap();
    assert_eq!(record.in_reply_to_user_id, "12345");
    assert_eq!(record.in_reply_to_status_id, "1063000000000000000");
}

#[test]
fn string_counts_are_coerced() {
    let mut item = bare_item();
    item.favorite_count = Some(json!("42"));
    item.retweet_count = Some(json!(" 7 "));
    let record = normalize(&item).unwrap();
    assert_eq!(record.favorite_count, 42);
    assert_eq!(record.retweet_count, 7);
}

#[test]
fn non_numeric_count_is_fatal() {
    let mut item = bare_item();
    item.favorite_count = Some(json!("many"));
    let err = normalize(&item).unwrap_err();
    assert!(
        matches!(
            err,
            NormalizeError::InvalidCount { ref post_id, field: "favorite_count", ref value }
                if post_id == "1063442069893951488" && value == "many"
        ),
        "got: {err:?}"
    );
}

#[test]
fn negative_or_missing_count_is_fatal() {
    let mut item = bare_item();
    item.retweet_count = Some(json!(-1));
    assert!(matches!(
        normalize(&item),
        Err(NormalizeError::InvalidCount { field: "retweet_count", .. })
    ));

    let mut item = bare_item();
    item.retweet_count = None;
    assert!(matches!(
        normalize(&item),
        Err(NormalizeError::InvalidCount { field: "retweet_count", .. })
    ));
}

#[test]
fn id_falls_back_to_numeric_id() {
    let mut item = bare_item();
    item.id_str = None;
    item.id = Some(json!(99));
    assert_eq!(normalize(&item).unwrap().post_id, "99");
}

#[test]
fn missing_id_is_fatal() {
    let mut item = bare_item();
    item.id_str = None;
    item.id = None;
    assert!(matches!(
        normalize(&item),
        Err(NormalizeError::MissingField { field: "id" })
    ));
}

#[test]
fn missing_created_at_is_fatal() {
    let mut item = bare_item();
    item.created_at = None;
    assert!(matches!(
        normalize(&item),
        Err(NormalizeError::MissingField { field: "created_at" })
    ));
}

#[test]
fn missing_flags_and_lang_get_defaults() {
    let mut item = bare_item();
    item.favorited = None;
    item.retweeted = None;
    item.lang = None;
    let record = normalize(&item).unwrap();
    assert!(!record.self_favorited);
    assert!(!record.self_retweeted);
    assert_eq!(record.lang, "und");
}

#[test]
fn text_falls_back_to_short_text_then_empty() {
    let mut item = bare_item();
    item.full_text = None;
    item.text = Some("short @someone form".to_string());
    assert_eq!(normalize(&item).unwrap().text, "short form");

    item.text = None;
    assert_eq!(normalize(&item).unwrap().text, "");
}

#[test]
fn optional_fields_are_resolved_or_sentinel_never_blank() {
    let mut item = bare_item();
    item.place = Some(json!({"full_name": "Austin, TX"}));
    item.coordinates = Some(json!("Coordinates(type='Point', coordinates=[-97.7, 30.2]"));
    item.in_reply_to_user_id = Some(json!(42));

    let record = normalize(&item).unwrap();
    for value in [
        &record.place,
        &record.coordinates,
        &record.in_reply_to_user_id,
        &record.in_reply_to_status_id,
    ] {
        assert!(!value.is_empty(), "optional field rendered blank");
    }
    assert!(!sentinel::is_sentinel(&record.place));
    assert!(sentinel::is_sentinel(&record.coordinates), "dump without ')' is invalid");
    assert_eq!(record.coordinates, "coordDataInvalid");
    assert_eq!(record.in_reply_to_user_id, "42");
    assert!(sentinel::is_sentinel(&record.in_reply_to_status_id));
}

#[test]
fn clean_text_strips_links_and_mentions() {
    assert_eq!(
        clean_text("@bot Robots are coming! https://t.co/xyz #automation"),
        "Robots are coming automation"
    );
}

#[test]
fn clean_text_keeps_escape_letters_for_non_ascii() {
    assert_eq!(clean_text("I \u{2764} Rust"), "I xe2 x9d xa4 Rust");
}

#[test]
fn clean_text_turns_quotes_into_separators() {
    assert_eq!(clean_text("don't stop"), "don t stop");
}
