//! Running statistics (count, sum, extrema, average, variance)
//!
//! Computes streaming statistics with a recursive update of the sum of squared
//! differences from the running mean. The update never forms `Σx²`, so it does
//! not lose precision when the mean is large relative to the spread.

use num_traits::NumCast;

use crate::statistics::variance::{SpreadStore, Tracked, VarianceMode};
use crate::traits::{AddError, Counter, StateError, Summary, Value};

/// Recursive statistics accumulator
///
/// Keeps count, sum, minimum, maximum and, when `V` is [`Tracked`], the sum of
/// squared differences from the running mean. Memory use is constant no matter
/// how many observations are added.
///
/// - `T`: floating-point value type (default `f32`)
/// - `C`: unsigned counter type (default `u32`)
/// - `V`: [`Tracked`] or [`Untracked`](super::Untracked) (default `Tracked`)
///
/// Statistics that are undefined for the current state are reported as NaN.
///
/// # Example
///
/// ```
/// use statistic::Statistic;
///
/// let mut stat: Statistic<f64> = Statistic::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stat.add(value);
/// }
///
/// assert_eq!(stat.average(), 5.0);
/// assert!((stat.variance() - 4.0).abs() < 1e-12);
/// assert!((stat.pop_stdev() - 2.0).abs() < 1e-12);
/// assert_eq!(stat.minimum(), 2.0);
/// assert_eq!(stat.maximum(), 9.0);
/// ```
///
/// # Thread Safety
///
/// There is no internal synchronization. Share behind a `Mutex` when several
/// threads add observations or need a consistent snapshot of the queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistic<T = f32, C = u32, V = Tracked>
where
    T: Value,
    C: Counter,
    V: VarianceMode,
{
    /// Number of observations added
    count: C,
    /// Running sum
    sum: T,
    /// Smallest observation, zero while empty
    min: T,
    /// Largest observation, zero while empty
    max: T,
    /// Sum of squared differences from the running mean
    spread: V::Store<T>,
}

impl<T: Value, C: Counter, V: VarianceMode> Default for Statistic<T, C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Value, C: Counter, V: VarianceMode> Statistic<T, C, V> {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            count: C::zero(),
            sum: T::zero(),
            min: T::zero(),
            max: T::zero(),
            spread: Default::default(),
        }
    }

    /// Restore an accumulator from raw state
    ///
    /// `sum_squared_diff` must be `Some` exactly when `V` tracks variance.
    /// Returns an error if the parts could not have been produced by a
    /// sequence of [`add`](Self::add) calls.
    pub fn from_parts(
        count: C,
        sum: T,
        min: T,
        max: T,
        sum_squared_diff: Option<T>,
    ) -> Result<Self, StateError> {
        let zero = T::zero();
        if count.is_zero()
            && (sum != zero || min != zero || max != zero || sum_squared_diff.map_or(false, |s| s != zero))
        {
            return Err(StateError::EmptyWithData);
        }
        if min > max {
            return Err(StateError::InvertedBounds);
        }
        // One observation is its own sum, minimum and maximum, with no spread
        if count == C::one()
            && (min < max || sum < min || sum > min || sum_squared_diff.map_or(false, |s| s > zero))
        {
            return Err(StateError::InconsistentSingle);
        }

        let spread = match (V::ENABLED, sum_squared_diff) {
            (true, Some(s)) if s < zero => return Err(StateError::NegativeSpread),
            (true, Some(s)) => <V::Store<T> as SpreadStore<T>>::restore(s),
            (true, None) => return Err(StateError::MissingSpread),
            (false, Some(_)) => return Err(StateError::UnexpectedSpread),
            (false, None) => Default::default(),
        };

        Ok(Self {
            count,
            sum,
            min,
            max,
            spread,
        })
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        trace!("clearing statistic after {:?} observations", self.count);
        self.count = C::zero();
        self.sum = T::zero();
        self.min = T::zero();
        self.max = T::zero();
        self.spread.clear();
    }

    /// Add an observation
    ///
    /// Returns the amount the running sum actually changed by. For values
    /// small enough to be added without rounding this equals `value`; once the
    /// sum grows large it reveals the precision lost by the addition.
    ///
    /// If the counter cannot represent another observation the value is
    /// rejected, nothing changes and zero is returned. See
    /// [`try_add`](Self::try_add) to detect this case.
    ///
    /// Non-finite values are not checked and propagate into every statistic.
    pub fn add(&mut self, value: T) -> T {
        match self.try_add(value) {
            Ok(added) => added,
            Err(AddError::CounterSaturated) => {
                warn!("counter saturated at {:?}; rejected observation {:?}", self.count, value);
                T::zero()
            }
        }
    }

    /// Add an observation, failing if the counter is saturated
    pub fn try_add(&mut self, value: T) -> Result<T, AddError> {
        if self.count == C::max_value() {
            return Err(AddError::CounterSaturated);
        }

        let previous_sum = self.sum;

        // A new minimum is never also checked against the maximum.
        if self.count.is_zero() {
            self.min = value;
            self.max = value;
        } else if value < self.min {
            self.min = value;
        } else if value > self.max {
            self.max = value;
        }

        self.sum = self.sum + value;
        self.count = self.count + C::one();

        if V::ENABLED && self.count > C::one() {
            let n = self.count_as_value();
            // Gap between the updated running mean and the new observation
            let delta = self.sum / n - value;
            self.spread.accumulate(n * delta * delta / (n - T::one()));
        }

        let added = self.sum - previous_sum;
        if added != value {
            trace!("observation {:?} changed sum by {:?}", value, added);
        }
        Ok(added)
    }

    /// Number of observations added
    pub fn count(&self) -> C {
        self.count
    }

    /// Check if no observation has been added
    pub fn is_empty(&self) -> bool {
        self.count.is_zero()
    }

    /// Running sum, zero while empty
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Smallest observation, zero while empty
    pub fn minimum(&self) -> T {
        self.min
    }

    /// Largest observation, zero while empty
    pub fn maximum(&self) -> T {
        self.max
    }

    /// Arithmetic mean, NaN while empty
    pub fn average(&self) -> T {
        if self.count.is_zero() {
            return T::nan();
        }
        self.sum / self.count_as_value()
    }

    /// Raw sum of squared differences, NaN when variance is not tracked
    pub fn sum_squared_diff(&self) -> T {
        self.spread.get().unwrap_or_else(T::nan)
    }

    /// Population variance
    ///
    /// NaN while empty or when variance is not tracked.
    pub fn variance(&self) -> T {
        if !V::ENABLED || self.count.is_zero() {
            return T::nan();
        }
        self.sum_squared_diff() / self.count_as_value()
    }

    /// Population standard deviation
    ///
    /// NaN while empty or when variance is not tracked.
    pub fn pop_stdev(&self) -> T {
        if !V::ENABLED || self.count.is_zero() {
            return T::nan();
        }
        (self.sum_squared_diff() / self.count_as_value()).sqrt()
    }

    /// Unbiased sample standard deviation (Bessel's correction)
    ///
    /// NaN with fewer than two observations or when variance is not tracked.
    pub fn unbiased_stdev(&self) -> T {
        if !V::ENABLED || self.count <= C::one() {
            return T::nan();
        }
        (self.sum_squared_diff() / (self.count_as_value() - T::one())).sqrt()
    }

    /// Create an accumulator; the flag is ignored
    #[deprecated(since = "0.5.0", note = "choose `Tracked` or `Untracked` and use `Statistic::new`")]
    pub fn with_stdev(_use_stdev: bool) -> Self {
        Self::new()
    }

    /// Reset to the empty state; the flag is ignored
    #[deprecated(since = "0.5.0", note = "use `Statistic::clear`")]
    pub fn clear_with(&mut self, _use_stdev: bool) {
        self.clear();
    }

    #[inline]
    fn count_as_value(&self) -> T {
        <T as NumCast>::from(self.count).unwrap_or_else(T::nan)
    }
}

impl<T: Value, C: Counter, V: VarianceMode> Extend<T> for Statistic<T, C, V> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T: Value + 'a, C: Counter, V: VarianceMode> Extend<&'a T> for Statistic<T, C, V> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Value, C: Counter, V: VarianceMode> FromIterator<T> for Statistic<T, C, V> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stat = Self::new();
        stat.extend(iter);
        stat
    }
}

impl<T: Value, C: Counter, V: VarianceMode> Summary for Statistic<T, C, V> {
    type Item = T;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn clear(&mut self) {
        Statistic::clear(self);
    }

    fn is_empty(&self) -> bool {
        Statistic::is_empty(self)
    }
}

#[cfg(feature = "serde")]
impl<T, C, V> serde::Serialize for Statistic<T, C, V>
where
    T: Value + serde::Serialize,
    C: Counter + serde::Serialize,
    V: VarianceMode,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let fields = if V::ENABLED { 5 } else { 4 };
        let mut state = serializer.serialize_struct("Statistic", fields)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("sum", &self.sum)?;
        state.serialize_field("min", &self.min)?;
        state.serialize_field("max", &self.max)?;
        if let Some(spread) = self.spread.get() {
            state.serialize_field("sum_squared_diff", &spread)?;
        }
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C, V> serde::Deserialize<'de> for Statistic<T, C, V>
where
    T: Value + serde::Deserialize<'de>,
    C: Counter + serde::Deserialize<'de>,
    V: VarianceMode,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct StatisticData<T, C> {
            count: C,
            sum: T,
            min: T,
            max: T,
            sum_squared_diff: Option<T>,
        }

        let data = StatisticData::<T, C>::deserialize(deserializer)?;
        Statistic::from_parts(data.count, data.sum, data.min, data.max, data.sum_squared_diff)
            .map_err(serde::de::Error::custom)
    }
}
