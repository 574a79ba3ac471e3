//! Property tests for label formatting.

use proptest::prelude::*;

use dbinspect::domain::services::value_label;
use dbinspect::domain::value_objects::{NumberFormat, Point3d, MAX_PRECISION};
use dbinspect::Value;

fn real() -> impl Strategy<Value = f64> {
    -1.0e9f64..1.0e9f64
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a real is printed with exactly the configured precision,
    /// the same way every time.
    #[test]
    fn property_real_labels_are_deterministic(x in real(), precision in 0u8..=MAX_PRECISION) {
        let format = NumberFormat::new(precision);
        let label = value_label(&Value::Real(x), &format);

        prop_assert_eq!(&label, &value_label(&Value::Real(x), &format));
        prop_assert_eq!(&label, &format!("{:.*}", precision as usize, x));
        match label.split_once('.') {
            Some((_, decimals)) => prop_assert_eq!(decimals.len(), precision as usize),
            None => prop_assert_eq!(precision, 0),
        }
    }

    /// PROPERTY: precisions beyond the host maximum print like the maximum.
    #[test]
    fn property_precision_is_clamped(x in real(), precision in (MAX_PRECISION + 1)..=u8::MAX) {
        let clamped = NumberFormat::new(precision);
        let max = NumberFormat::new(MAX_PRECISION);
        prop_assert_eq!(
            value_label(&Value::Real(x), &clamped),
            value_label(&Value::Real(x), &max)
        );
    }

    /// PROPERTY: points print their components in order, comma separated.
    #[test]
    fn property_point_labels_join_components(
        x in real(), y in real(), z in real(), precision in 0u8..=MAX_PRECISION
    ) {
        let format = NumberFormat::new(precision);
        let label = value_label(&Value::Point3d(Point3d::new(x, y, z)), &format);
        let expected = format!("({},{},{})", format.real(x), format.real(y), format.real(z));
        prop_assert_eq!(label, expected);
    }
}
