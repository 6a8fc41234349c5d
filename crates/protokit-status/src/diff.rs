//! Comparison of the proto enum against `Status.swift`.

use std::collections::BTreeMap;

use crate::existing::{ExistingCodeDetail, ExistingCodes};
use crate::proto::ProtoStatusCode;

/// A code whose Swift doc comment or deprecation no longer matches the proto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentUpdate {
    pub proto: ProtoStatusCode,
    pub existing: ExistingCodeDetail,
}

/// Proto codes with no `init(rawValue:)` mapping, ascending by code.
pub fn find_missing(proto: &[ProtoStatusCode], existing: &ExistingCodes) -> Vec<ProtoStatusCode> {
    let mut missing: Vec<ProtoStatusCode> = proto
        .iter()
        .filter(|pc| !existing.contains_key(&pc.code))
        .cloned()
        .collect();
    missing.sort_by_key(|pc| pc.code);
    missing
}

/// Codes present on both sides whose trimmed comment or deprecated flag
/// differs, in proto order.
pub fn find_comment_updates(
    proto: &[ProtoStatusCode],
    existing: &ExistingCodes,
    details: &[ExistingCodeDetail],
) -> Vec<CommentUpdate> {
    let by_code: BTreeMap<i32, &ExistingCodeDetail> = details.iter().map(|d| (d.code, d)).collect();

    proto
        .iter()
        .filter(|pc| existing.contains_key(&pc.code))
        .filter_map(|pc| {
            let detail = by_code.get(&pc.code)?;
            let drifted =
                pc.comment.trim() != detail.comment.trim() || pc.deprecated != detail.deprecated;
            drifted.then(|| CommentUpdate {
                proto: pc.clone(),
                existing: (*detail).clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn proto(code: i32, comment: &str, deprecated: bool) -> ProtoStatusCode {
        ProtoStatusCode {
            name: format!("CODE_{code}"),
            code,
            comment: comment.into(),
            deprecated,
        }
    }

    fn detail(code: i32, comment: &str, deprecated: bool) -> ExistingCodeDetail {
        ExistingCodeDetail {
            code,
            identifier: format!("code{code}"),
            comment: comment.into(),
            deprecated,
            start_line: 0,
            case_line: 0,
        }
    }

    fn existing(codes: &[i32]) -> ExistingCodes {
        codes.iter().map(|c| (*c, format!("code{c}"))).collect()
    }

    #[test]
    fn missing_codes_are_sorted_ascending() {
        let proto_codes = vec![proto(3, "", false), proto(1, "", false), proto(2, "", false)];

        let missing = find_missing(&proto_codes, &existing(&[2]));

        assert_eq!(missing.iter().map(|c| c.code).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn nothing_missing_when_in_sync() {
        let proto_codes = vec![proto(0, "", false)];
        assert!(find_missing(&proto_codes, &existing(&[0, 5])).is_empty());
    }

    #[test]
    fn comment_and_deprecation_drift_are_detected() {
        let proto_codes = vec![
            proto(0, "Same.", false),
            proto(1, "New text.", false),
            proto(2, "Same.", true),
            proto(3, "Not in swift.", false),
        ];
        let details = vec![
            detail(0, "  Same.  ", false),
            detail(1, "Old text.", false),
            detail(2, "Same.", false),
        ];

        let updates = find_comment_updates(&proto_codes, &existing(&[0, 1, 2]), &details);

        assert_eq!(
            updates.iter().map(|u| u.proto.code).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn codes_without_declaration_detail_are_skipped() {
        let proto_codes = vec![proto(4, "Text.", false)];
        let updates = find_comment_updates(&proto_codes, &existing(&[4]), &[]);
        assert!(updates.is_empty());
    }
}
