//! Reserved strings that stand in for absent or unparseable optional fields.
//!
//! Downstream consumers never see a null: a field the source left out is
//! filled with its `NO_*` value, and a nested field that was present but could
//! not be resolved is filled with its `*_INVALID` value.

pub const NO_PLACE: &str = "noPlaceData";
pub const PLACE_INVALID: &str = "placeDataInvalid";

pub const NO_COORDINATES: &str = "noCoordinatesData";
pub const COORDINATES_INVALID: &str = "coordDataInvalid";

pub const NO_IN_REPLY_TO_USER_ID: &str = "noInReplyToUseridData";
pub const NO_IN_REPLY_TO_STATUS_ID: &str = "noInReplyToStatusidData";

/// Returns `true` if `value` is one of the reserved sentinel strings.
#[must_use]
pub fn is_sentinel(value: &str) -> bool {
    matches!(
        value,
        NO_PLACE
            | PLACE_INVALID
            | NO_COORDINATES
            | COORDINATES_INVALID
            | NO_IN_REPLY_TO_USER_ID
            | NO_IN_REPLY_TO_STATUS_ID
    )
}
