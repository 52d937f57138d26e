/// Coordinate-list encoding for polygons and polylines

use std::fmt::Write;

use log::warn;

/// Fewest points a polygon or polyline accepts
pub const MIN_POINTS: usize = 3;

/// Convert parallel x and y coordinate slices into the space-separated
/// strings carried by the `xc` and `yc` attributes.
///
/// Each value is two-decimal fixed point; values are separated by a single
/// space with none after the last. If the slices differ in length or hold
/// fewer than [`MIN_POINTS`] points, both strings come back empty.
///
/// # Examples
///
/// ```
/// let (xc, yc) = deckgen::polycoord(&[10.0, 20.0, 30.0], &[30.0, 40.0, 50.0]);
/// assert_eq!(xc, "10.00 20.00 30.00");
/// assert_eq!(yc, "30.00 40.00 50.00");
/// ```
pub fn polycoord(px: &[f64], py: &[f64]) -> (String, String) {
    let np = px.len();
    if np < MIN_POINTS || py.len() != np {
        warn!(
            "polycoord: need {} or more paired points, got {} x and {} y",
            MIN_POINTS,
            np,
            py.len()
        );
        return (String::new(), String::new());
    }
    (join(px), join(py))
}

fn join(values: &[f64]) -> String {
    let mut s = String::with_capacity(values.len() * 7);
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(s, "{:.2}", v);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_each_value_with_two_decimals() {
        let (xc, yc) = polycoord(&[1.0, 2.5, 3.333, 100.0], &[0.0, -4.0, 7.126, 50.0]);
        assert_eq!(xc, "1.00 2.50 3.33 100.00");
        assert_eq!(yc, "0.00 -4.00 7.13 50.00");
        assert!(!xc.ends_with(' '));
        assert_eq!(xc.split(' ').count(), 4);
    }

    #[test]
    fn rejects_short_input() {
        for n in 0..MIN_POINTS {
            let v = vec![1.0; n];
            assert_eq!(polycoord(&v, &v), (String::new(), String::new()));
        }
    }

    #[test]
    fn rejects_unequal_lengths() {
        let (xc, yc) = polycoord(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]);
        assert!(xc.is_empty());
        assert!(yc.is_empty());
    }
}
