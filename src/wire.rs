//! Legacy transport encoding of detection records.
//!
//! The historical boundary shipped all detections of a frame as a single
//! string: records separated by `|` with a trailing `|` after the last
//! one, fields within a record separated by `,` in the order
//! `class,confidence,cx,cy,width,height`, and the empty string standing
//! for zero detections. The core pipeline never formats; this module
//! exists for the transport edge and for consumers still speaking the old
//! format.

use std::fmt::Write as _;

use crate::detect::Detection;
use crate::util::{DetPostError, DetPostResult};

/// Encodes detections into the legacy wire string.
pub fn encode(detections: &[Detection]) -> String {
    let mut out = String::new();
    for det in detections {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "{},{},{},{},{},{}|",
            det.class_id, det.confidence, det.cx, det.cy, det.width, det.height
        );
    }
    out
}

/// Parses a legacy wire string back into detection records.
///
/// Empty segments (including the one after the trailing `|`) are skipped,
/// so the empty string decodes to zero detections. Records with the wrong
/// field count or non-numeric fields are rejected.
pub fn decode(text: &str) -> DetPostResult<Vec<Detection>> {
    let mut detections = Vec::new();
    for record in text.split('|').filter(|record| !record.is_empty()) {
        detections.push(parse_record(record)?);
    }
    Ok(detections)
}

fn parse_record(record: &str) -> DetPostResult<Detection> {
    let malformed = || DetPostError::MalformedRecord {
        record: record.to_string(),
    };

    let fields: Vec<&str> = record.split(',').collect();
    let [class_id, confidence, cx, cy, width, height] = fields.as_slice() else {
        return Err(malformed());
    };

    Ok(Detection {
        class_id: class_id.parse().map_err(|_| malformed())?,
        confidence: confidence.parse().map_err(|_| malformed())?,
        cx: cx.parse().map_err(|_| malformed())?,
        cy: cy.parse().map_err(|_| malformed())?,
        width: width.parse().map_err(|_| malformed())?,
        height: height.parse().map_err(|_| malformed())?,
    })
}
