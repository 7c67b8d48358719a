//! Classify: destination number to routing category.

use std::ops::RangeInclusive;

use super::EventLabel;

/// Destination ranges in evaluation order. Ranges do not overlap;
/// anything outside all of them is a plain routed call.
pub const DESTINATION_RANGES: [(RangeInclusive<u64>, EventLabel); 4] = [
    (800..=899, EventLabel::TimeCondition),
    (400..=499, EventLabel::RingGroup),
    (200..=399, EventLabel::Extension),
    (600..=699, EventLabel::Ivr),
];

pub fn classify(destination: u64) -> EventLabel {
    DESTINATION_RANGES
        .iter()
        .find(|(range, _)| range.contains(&destination))
        .map(|(_, label)| *label)
        .unwrap_or(EventLabel::Routed)
}
