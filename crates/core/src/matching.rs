//! Matching rules for locating a tracked order in the external inventory.
//!
//! PO numbers are supposed to be unique but are sometimes reused across
//! unrelated clients in the external system, so a record matches only when
//! the PO number is equal *exactly* and the stored client-name hint is
//! compatible with the record's client name. The hint exists purely to
//! disambiguate PO collisions; it is not a key.

/// Check whether an external record's client name satisfies the hint.
///
/// Rules, in order:
/// - no hint (or an empty hint) matches anything;
/// - otherwise the candidate must exist and either equal the hint or
///   case-insensitively contain it as a substring.
pub fn client_name_matches(hint: Option<&str>, candidate: Option<&str>) -> bool {
    let hint = match hint {
        Some(h) if !h.is_empty() => h,
        _ => return true,
    };
    match candidate {
        Some(name) => name == hint || name.to_lowercase().contains(&hint.to_lowercase()),
        None => false,
    }
}

/// Full match predicate: exact PO equality plus a compatible client name.
pub fn record_matches(
    po_number: &str,
    hint: Option<&str>,
    candidate_po: Option<&str>,
    candidate_name: Option<&str>,
) -> bool {
    candidate_po == Some(po_number) && client_name_matches(hint, candidate_name)
}
