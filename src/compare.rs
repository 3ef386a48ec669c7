use std::cmp::Ordering;

use crate::natural;
use crate::options::Options;

/// Order two canonical keys produced under the same `options`.
///
/// `NumericalValue` anywhere means literal digits survived normalization
/// and must be ordered by magnitude; otherwise every run is already words
/// or bucket-prefixed text and plain code-point order is correct.
pub(crate) fn compare_keys(options: &Options, a: &str, b: &str) -> Ordering {
    if options.wants_natural_order() {
        natural::compare(a, b)
    } else {
        a.cmp(b)
    }
}
