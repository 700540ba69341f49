/// Filter/sort pipeline
///
/// Derives the current view from the immutable catalog and the control
/// values: drop listings outside the active thresholds, then order what
/// remains by the selected sort key. The result borrows from the catalog;
/// nothing is mutated and nothing is cached between renders.

use std::cmp::Ordering;

use crate::types::{Controls, Property, SortKey};

/// Produce the filtered, sorted view of the catalog.
///
/// An empty result is a valid output (the "no matches" case), not an error.
pub fn apply<'a>(catalog: &'a [Property], controls: &Controls) -> Vec<&'a Property> {
    let mut view: Vec<&Property> = catalog.iter().filter(|p| retain(p, controls)).collect();

    // Stable sort: ties keep the catalog's insertion order.
    match controls.sort {
        SortKey::PriceAsc => view.sort_by(|a, b| cmp_price(a, b)),
        SortKey::PriceDesc => view.sort_by(|a, b| cmp_price(b, a)),
        SortKey::DateAsc => view.sort_by(|a, b| cmp_date(a, b)),
        SortKey::DateDesc => view.sort_by(|a, b| cmp_date(b, a)),
    }

    view
}

/// Filter predicate: a listing survives only if it satisfies every active
/// threshold. A listing missing the filtered field is dropped once the
/// corresponding bound is set.
fn retain(property: &Property, controls: &Controls) -> bool {
    if let Some(max) = controls.max_price {
        match property.price {
            Some(price) if price <= max as f64 => {}
            _ => return false,
        }
    }

    if let Some(min) = controls.min_beds {
        match property.bedrooms {
            Some(beds) if beds >= min => {}
            _ => return false,
        }
    }

    true
}

/// Absent prices compare as the minimum, so they sort first ascending
/// and last descending.
fn cmp_price(a: &Property, b: &Property) -> Ordering {
    match (a.price, b.price) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Absent or unparseable dates compare as the minimum (None < Some)
fn cmp_date(a: &Property, b: &Property) -> Ordering {
    a.listed_timestamp().cmp(&b.listed_timestamp())
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
