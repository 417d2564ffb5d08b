use chrono::{DateTime, Utc};

use super::{OptionNA, MAX_EPOCH_MILLIS, MIN_EPOCH_MILLIS};

pub trait CoercibleInto<T>: Sized {
    fn coerce_into(self) -> T;
}

impl CoercibleInto<i64> for f64 {
    /// Truncates toward zero, saturating at the bounds of `i64`
    #[inline]
    fn coerce_into(self) -> i64 {
        self as i64
    }
}

impl CoercibleInto<i64> for DateTime<Utc> {
    #[inline]
    fn coerce_into(self) -> i64 {
        self.timestamp_millis()
    }
}

impl CoercibleInto<f64> for DateTime<Utc> {
    #[inline]
    fn coerce_into(self) -> f64 {
        self.timestamp_millis() as f64
    }
}

// epoch-milliseconds outside of the four-digit year range are NA
impl CoercibleInto<OptionNA<DateTime<Utc>>> for i64 {
    #[inline]
    fn coerce_into(self) -> OptionNA<DateTime<Utc>> {
        if !(MIN_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&self) {
            return OptionNA::NA;
        }

        DateTime::<Utc>::from_timestamp_millis(self).into()
    }
}

impl CoercibleInto<OptionNA<DateTime<Utc>>> for f64 {
    #[inline]
    fn coerce_into(self) -> OptionNA<DateTime<Utc>> {
        if !self.is_finite() {
            return OptionNA::NA;
        }

        CoercibleInto::<i64>::coerce_into(self).coerce_into()
    }
}

impl CoercibleInto<DateTime<Utc>> for bool {
    /// Every logical maps onto the epoch origin
    #[inline]
    fn coerce_into(self) -> DateTime<Utc> {
        DateTime::<Utc>::default()
    }
}

impl<T, U> CoercibleInto<OptionNA<U>> for OptionNA<T>
where
    T: CoercibleInto<U>,
{
    #[inline]
    fn coerce_into(self) -> OptionNA<U> {
        self.map(|x| x.coerce_into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use OptionNA::*;

    #[test]
    fn float_millis_truncate_toward_zero() {
        assert_eq!(CoercibleInto::<i64>::coerce_into(1.9_f64), 1);
        assert_eq!(CoercibleInto::<i64>::coerce_into(-1.9_f64), -1);
    }

    #[test]
    fn non_finite_floats_are_na() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let t: OptionNA<DateTime<Utc>> = x.coerce_into();
            assert_eq!(t, NA);
        }
    }

    #[test]
    fn out_of_range_millis_are_na() {
        for x in [i64::MIN, MIN_EPOCH_MILLIS - 1, MAX_EPOCH_MILLIS + 1, i64::MAX] {
            let t: OptionNA<DateTime<Utc>> = x.coerce_into();
            assert_eq!(t, NA);
        }

        let t: OptionNA<DateTime<Utc>> = MAX_EPOCH_MILLIS.coerce_into();
        assert!(!t.is_na());

        let t: OptionNA<DateTime<Utc>> = 0_i64.coerce_into();
        assert_eq!(t, Some(DateTime::<Utc>::default()));
    }

    #[test]
    fn logicals_map_onto_epoch() {
        let t: DateTime<Utc> = true.coerce_into();
        let f: DateTime<Utc> = false.coerce_into();
        assert_eq!(t, f);
        assert_eq!(t.timestamp_millis(), 0);
    }

    #[test]
    fn coercion_lifts_over_na() {
        let x: OptionNA<i64> = Some(DateTime::<Utc>::default()).coerce_into();
        assert_eq!(x, Some(0));

        let x: OptionNA<i64> = NA::<DateTime<Utc>>.coerce_into();
        assert_eq!(x, NA);
    }
}
