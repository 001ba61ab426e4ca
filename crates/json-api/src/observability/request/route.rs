//! Route labels for spans and metrics.

use uuid::Uuid;

/// Collapse id segments so `/products/<uuid>` and `/users/<uuid>` stay low-cardinality.
pub(super) fn route_label(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
