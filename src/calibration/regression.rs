//! Simple ordinary least-squares regression
//!
//! Fits `y = beta1 * x + beta0` to labeled data through caller-supplied accessors.

use std::fmt;

/// Error type for regression training
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegressionError {
    EmptyDataset,
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => write!(f, "Cannot train a regression on an empty data set"),
        }
    }
}

impl std::error::Error for RegressionError {}

/// Fitted line coefficients
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coefficients {
    /// Intercept
    pub beta0: f64,
    /// Slope
    pub beta1: f64,
}

type Accessor<'a, T> = Box<dyn Fn(&T) -> f64 + 'a>;

/// Univariate linear regression over data of type `T`
///
/// Coefficients start at zero and are replaced as a pair by each call to
/// [`LinearRegression::train`]. Training data must have positive variance in its
/// x-values; otherwise the slope is not finite.
pub struct LinearRegression<'a, T> {
    x_of: Accessor<'a, T>,
    y_of: Accessor<'a, T>,
    coefficients: Coefficients,
}

impl<'a, T> LinearRegression<'a, T> {
    /// Create an untrained regression with the given accessors
    pub fn new(
        x_of: impl Fn(&T) -> f64 + 'a,
        y_of: impl Fn(&T) -> f64 + 'a,
    ) -> Self {
        Self {
            x_of: Box::new(x_of),
            y_of: Box::new(y_of),
            coefficients: Coefficients::default(),
        }
    }

    /// Create a regression and train it in one step
    ///
    /// # Errors
    /// Returns `RegressionError::EmptyDataset` if `data` is empty.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::calibration::LinearRegression;
    ///
    /// let points = [(1.0, 3.0), (1.2, 3.4)];
    /// let model = LinearRegression::fit(|p: &(f64, f64)| p.0, |p: &(f64, f64)| p.1, &points).unwrap();
    /// assert!((model.predict(1.1) - 3.2).abs() < 1e-9);
    /// ```
    pub fn fit(
        x_of: impl Fn(&T) -> f64 + 'a,
        y_of: impl Fn(&T) -> f64 + 'a,
        data: &[T],
    ) -> Result<Self, RegressionError> {
        let mut regression = Self::new(x_of, y_of);
        regression.train(data)?;
        Ok(regression)
    }

    /// Fit the line to `data`, replacing any previous coefficients
    ///
    /// # Errors
    /// Returns `RegressionError::EmptyDataset` if `data` is empty. The previous
    /// coefficients are left untouched in that case.
    pub fn train(&mut self, data: &[T]) -> Result<&mut Self, RegressionError> {
        if data.is_empty() {
            return Err(RegressionError::EmptyDataset);
        }
        let n = data.len() as f64;
        let mean_x = data.iter().map(&self.x_of).sum::<f64>() / n;
        let mean_y = data.iter().map(&self.y_of).sum::<f64>() / n;

        let (covariance, variance) = data.iter().fold((0.0, 0.0), |(cov, var), datum| {
            let dx = (self.x_of)(datum) - mean_x;
            let dy = (self.y_of)(datum) - mean_y;
            (cov + dx * dy, var + dx * dx)
        });

        let beta1 = covariance / variance;
        self.coefficients = Coefficients {
            beta0: mean_y - beta1 * mean_x,
            beta1,
        };
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub const fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    #[inline]
    #[must_use]
    pub const fn beta0(&self) -> f64 {
        self.coefficients.beta0
    }

    #[inline]
    #[must_use]
    pub const fn beta1(&self) -> f64 {
        self.coefficients.beta1
    }

    /// The x-value of a datum, as seen by this regression
    #[must_use]
    pub fn x(&self, datum: &T) -> f64 {
        (self.x_of)(datum)
    }

    /// The least-squares prediction for an input value
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.coefficients.beta1 * x + self.coefficients.beta0
    }

    /// Mean squared error on `data`, or NaN if it is empty
    #[must_use]
    pub fn mse(&self, data: &[T]) -> f64 {
        self.mean_squared(data, |prediction| prediction)
    }

    /// Mean squared error after rounding each prediction to the nearest integer,
    /// or NaN if `data` is empty
    ///
    /// Real thresholds are integers, so this is the error that matters in practice.
    #[must_use]
    pub fn msre(&self, data: &[T]) -> f64 {
        self.mean_squared(data, f64::round)
    }

    fn mean_squared(&self, data: &[T], adjust: impl Fn(f64) -> f64) -> f64 {
        if data.is_empty() {
            return f64::NAN;
        }
        let total: f64 = data
            .iter()
            .map(|datum| {
                let predicted = adjust(self.predict((self.x_of)(datum)));
                let actual = (self.y_of)(datum);
                (predicted - actual).powi(2)
            })
            .sum();
        total / data.len() as f64
    }
}

impl<T> fmt::Debug for LinearRegression<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearRegression")
            .field("coefficients", &self.coefficients)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct Point {
        x: f64,
        y: f64,
    }

    const fn point(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    fn model_for(data: &[Point]) -> LinearRegression<'static, Point> {
        LinearRegression::fit(|p: &Point| p.x, |p: &Point| p.y, data).unwrap()
    }

    fn two_points() -> LinearRegression<'static, Point> {
        model_for(&[point(1.0, 3.0), point(1.2, 3.4)])
    }

    fn conflicting() -> LinearRegression<'static, Point> {
        model_for(&[
            point(1.0, 110.0),
            point(2.0, 118.0),
            point(2.0, 122.0),
            point(3.0, 130.0),
        ])
    }

    #[test]
    fn untrained_predicts_zero() {
        let model = LinearRegression::new(|p: &Point| p.x, |p: &Point| p.y);
        assert_eq!(model.coefficients(), Coefficients::default());
        assert!(model.predict(42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn train_two_points() {
        let model = two_points();
        assert!((model.beta0() - 1.0).abs() < 1e-12);
        assert!((model.beta1() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn predict_two_points() {
        assert!((two_points().predict(1.1) - 3.2).abs() < 1e-12);
    }

    #[test]
    fn mse_two_points() {
        let test_set = [point(1.1, 3.7), point(1.3, 3.6)];
        assert!((two_points().mse(&test_set) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn msre_rounding_helps() {
        let model = two_points();
        let test_set = [
            point(1.1, 3.0), // predicts 3.2, rounds down to 3
            point(1.3, 5.0), // predicts 3.6, rounds up to 4
            point(1.4, 5.0), // predicts 3.8, rounds up to 4
            point(1.6, 4.0), // predicts 4.2, rounds down to 4
        ];
        assert!((model.msre(&test_set) - 0.5).abs() < 1e-6);
        assert!((model.mse(&test_set) - 0.87).abs() < 1e-6);
    }

    #[test]
    fn msre_rounding_hurts() {
        let model = two_points();
        // predicts 3.2 exactly, but the rounded prediction is 3
        let test_set = [point(1.1, 3.2)];
        assert!(model.mse(&test_set).abs() < 1e-6);
        assert!((model.msre(&test_set) - 0.04).abs() < 1e-6);
    }

    #[test]
    fn train_conflicting_data() {
        let model = conflicting();
        assert!((model.beta0() - 100.0).abs() < 1e-6);
        assert!((model.beta1() - 10.0).abs() < 1e-6);
        assert!((model.predict(2.0) - 120.0).abs() < 1e-6);
    }

    #[test]
    fn mse_conflicting_data() {
        let test_set = [
            point(2.0, 115.0),
            point(2.0, 120.0),
            point(2.0, 120.0),
            point(2.0, 125.0),
        ];
        assert!((conflicting().mse(&test_set) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn msre_conflicting_data() {
        let test_set = [
            point(2.04, 120.4),
            point(2.04, 120.0),
            point(2.04, 120.0),
            point(2.04, 120.4),
        ];
        assert!((conflicting().msre(&test_set) - 0.08).abs() < 1e-6);
    }

    #[test]
    fn empty_training_set_is_an_error() {
        let mut model = two_points();
        let before = model.coefficients();
        assert_eq!(model.train(&[]).unwrap_err(), RegressionError::EmptyDataset);
        assert_eq!(model.coefficients(), before);
    }

    #[test]
    fn empty_test_set_is_nan() {
        let model = two_points();
        assert!(model.mse(&[]).is_nan());
        assert!(model.msre(&[]).is_nan());
    }

    #[test]
    fn retrain_replaces_coefficients() {
        let mut model = two_points();
        model.train(&[point(0.0, 5.0), point(1.0, 4.0)]).unwrap();
        assert!((model.beta0() - 5.0).abs() < 1e-9);
        assert!((model.beta1() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_variance_gives_non_finite_slope() {
        let model = model_for(&[point(1.0, 2.0), point(1.0, 3.0)]);
        assert!(!model.beta1().is_finite());
    }
}
