//! Time-series trend analysis for content metrics.
//!
//! The analyzer fits a least-squares line to the series, classifies its
//! direction and strength, and layers growth, weekday seasonality,
//! rolling-window anomalies, volatility and a linear forecast on top.

mod types;

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

pub use types::{
    Anomaly, AnomalyKind, ForecastPoint, LinearRegression, Seasonality, TrendAnalysis,
    TrendDataPoint, TrendDirection, TrendReport, TrendStrength, WeekdayAverage,
};

const SECONDS_PER_DAY: f64 = 86_400.0;
/// Rolling window for anomaly detection on series of at least this length.
const ANOMALY_WINDOW: usize = 7;
/// Minimum series length for weekday seasonality.
const SEASONALITY_MIN_POINTS: usize = 7;
/// Series longer than this also report monthly averages.
const MONTHLY_MIN_POINTS: usize = 30;
/// Relative weekday deviation counted as significant.
const SEASONAL_DEVIATION: f64 = 0.2;
/// Two-sided 95% normal quantile.
const CONFIDENCE_Z: f64 = 1.96;
/// z-score reported for a point that departs from perfectly flat
/// neighbours. Finite so it survives JSON.
const UNBOUNDED_Z: f64 = f64::MAX;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Tunables for [`TrendAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSettings {
    /// Number of daily forecast steps after the last observation.
    pub forecast_horizon: usize,
    /// Neighbourhood z-score above which a point is an anomaly.
    pub anomaly_z_threshold: f64,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            forecast_horizon: 30,
            anomaly_z_threshold: 2.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    settings: TrendSettings,
}

impl TrendAnalyzer {
    #[must_use]
    pub fn new(settings: TrendSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> TrendSettings {
        self.settings
    }

    /// Analyse a series. Input order does not matter; points are sorted
    /// by timestamp (stable for ties) before processing.
    #[must_use]
    pub fn analyze(&self, data: &[TrendDataPoint]) -> TrendReport {
        if data.len() < 2 {
            tracing::debug!(points = data.len(), "insufficient data for trend analysis");
            return TrendReport::InsufficientData { points: data.len() };
        }

        let mut series = data.to_vec();
        series.sort_by_key(|p| p.timestamp);

        let first = series[0];
        let last = series[series.len() - 1];
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();

        let (min_value, max_value, average_value) = basic_stats(&values);
        let regression = linear_regression(&series);
        let direction = TrendDirection::from_slope(regression.slope);
        let strength = TrendStrength::from_r_squared(regression.r_squared);
        let total_growth = total_growth(first.value, last.value);
        let average_growth_rate = mean(&period_changes(&values));
        let seasonality = seasonality(&series, average_value);
        let anomalies = detect_anomalies(&series, self.settings.anomaly_z_threshold);
        let volatility = volatility(&values);
        let forecast = forecast(
            &regression,
            first.timestamp,
            last.timestamp,
            volatility,
            self.settings.forecast_horizon,
        );

        let mut analysis = TrendAnalysis {
            points: series.len(),
            start_date: first.timestamp,
            end_date: last.timestamp,
            start_value: first.value,
            end_value: last.value,
            min_value,
            max_value,
            average_value,
            regression,
            direction,
            strength,
            total_growth,
            average_growth_rate,
            seasonality,
            anomalies,
            volatility,
            forecast,
            insights: Vec::new(),
        };
        analysis.insights = insights(&analysis);

        tracing::debug!(
            points = analysis.points,
            slope = analysis.regression.slope,
            r_squared = analysis.regression.r_squared,
            anomalies = analysis.anomalies.len(),
            "trend analyzed"
        );

        TrendReport::Analyzed(Box::new(analysis))
    }
}

#[allow(clippy::cast_precision_loss)]
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn basic_stats(values: &[f64]) -> (f64, f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max, mean(values))
}

/// Ordinary least squares on `x = days since the first point`.
#[allow(clippy::cast_precision_loss)]
fn linear_regression(series: &[TrendDataPoint]) -> LinearRegression {
    let base = series[0].timestamp;
    let xs: Vec<f64> = series.iter().map(|p| days_between(base, p.timestamp)).collect();
    let ys: Vec<f64> = series.iter().map(|p| p.value).collect();

    let mean_x = mean(&xs);
    let mean_y = mean(&ys);

    let sxx: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    let sxy: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    if sxx == 0.0 {
        return LinearRegression {
            slope: 0.0,
            intercept: mean_y,
            r_squared: 0.0,
        };
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ss_tot: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
        .sum();
    let r_squared = if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    };

    LinearRegression {
        slope,
        intercept,
        r_squared,
    }
}

fn total_growth(start: f64, end: f64) -> f64 {
    if start == 0.0 {
        0.0
    } else {
        (end - start) / start * 100.0
    }
}

/// Percent change between consecutive values, skipping zero predecessors.
fn period_changes(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0] * 100.0)
        .collect()
}

fn volatility(values: &[f64]) -> f64 {
    let changes = period_changes(values);
    if changes.is_empty() {
        return 0.0;
    }
    let m = mean(&changes);
    let variance = mean(&changes.iter().map(|c| (c - m).powi(2)).collect::<Vec<_>>());
    variance.sqrt()
}

#[allow(clippy::cast_precision_loss)]
fn seasonality(series: &[TrendDataPoint], overall_average: f64) -> Seasonality {
    if series.len() < SEASONALITY_MIN_POINTS {
        return Seasonality::default();
    }

    let weekday_averages: Vec<WeekdayAverage> = WEEK
        .iter()
        .filter_map(|&weekday| {
            let values: Vec<f64> = series
                .iter()
                .filter(|p| p.timestamp.weekday() == weekday)
                .map(|p| p.value)
                .collect();
            (!values.is_empty()).then(|| WeekdayAverage {
                weekday,
                average: mean(&values),
                samples: values.len(),
            })
        })
        .collect();

    let has_seasonality = if overall_average == 0.0 {
        false
    } else {
        weekday_averages
            .iter()
            .filter(|d| ((d.average - overall_average) / overall_average).abs() > SEASONAL_DEVIATION)
            .count()
            >= 2
    };

    let monthly_averages = (series.len() > MONTHLY_MIN_POINTS).then(|| {
        let mut buckets: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
        for point in series {
            let entry = buckets.entry(point.timestamp.month()).or_insert((0.0, 0));
            entry.0 += point.value;
            entry.1 += 1;
        }
        buckets
            .into_iter()
            .map(|(month, (sum, count))| (month, sum / count as f64))
            .collect()
    });

    Seasonality {
        has_seasonality,
        weekday_averages,
        monthly_averages,
    }
}

/// Compare each point that has a full half-window on both sides against
/// the mean and sample standard deviation of its neighbours.
fn detect_anomalies(series: &[TrendDataPoint], threshold: f64) -> Vec<Anomaly> {
    let n = series.len();
    if n < 3 {
        return Vec::new();
    }

    let window = if n < ANOMALY_WINDOW { n / 2 } else { ANOMALY_WINDOW };
    let half = window / 2;
    if half == 0 {
        return Vec::new();
    }

    let mut anomalies = Vec::new();
    for i in half..n - half {
        let neighbours: Vec<f64> = (i - half..=i + half)
            .filter(|&j| j != i)
            .map(|j| series[j].value)
            .collect();

        let expected = mean(&neighbours);
        let std_dev = sample_std_dev(&neighbours, expected);

        let value = series[i].value;
        let deviation = value - expected;
        let z_score = if std_dev > 0.0 {
            deviation.abs() / std_dev
        } else if deviation == 0.0 {
            0.0
        } else {
            UNBOUNDED_Z
        };

        if z_score > threshold {
            anomalies.push(Anomaly {
                timestamp: series[i].timestamp,
                value,
                expected,
                deviation,
                z_score,
                kind: AnomalyKind::classify(value, expected),
            });
        }
    }
    anomalies
}

#[allow(clippy::cast_precision_loss)]
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

fn forecast(
    regression: &LinearRegression,
    base: DateTime<Utc>,
    last: DateTime<Utc>,
    volatility: f64,
    horizon: usize,
) -> Vec<ForecastPoint> {
    let confidence_interval = volatility * CONFIDENCE_Z;
    (1..=horizon)
        .filter_map(|step| {
            let step = i64::try_from(step).ok()?;
            let timestamp = last.checked_add_signed(Duration::days(step))?;
            let predicted_value = regression.predict(days_between(base, timestamp));
            Some(ForecastPoint {
                timestamp,
                predicted_value,
                confidence_interval,
                lower_bound: predicted_value - confidence_interval,
                upper_bound: predicted_value + confidence_interval,
            })
        })
        .collect()
}

fn insights(analysis: &TrendAnalysis) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    out.push(
        match analysis.direction {
            TrendDirection::StronglyIncreasing => {
                "Strong upward trend detected. Content performance is improving significantly."
            }
            TrendDirection::Increasing => {
                "Positive trend observed. Content performance is gradually improving."
            }
            TrendDirection::StronglyDecreasing => {
                "Strong downward trend detected. Immediate attention needed to reverse declining performance."
            }
            TrendDirection::Decreasing => {
                "Negative trend observed. Consider reviewing content strategy."
            }
            TrendDirection::Stable => "Performance is stable. Look for optimization opportunities.",
        }
        .to_string(),
    );

    if analysis.volatility > 50.0 {
        out.push(
            "High volatility detected. Performance is inconsistent - consider standardizing content quality."
                .to_string(),
        );
    } else if analysis.volatility < 10.0 {
        out.push(
            "Low volatility suggests consistent performance. Good content strategy execution."
                .to_string(),
        );
    }

    if analysis.seasonality.has_seasonality {
        out.push(
            "Seasonal patterns detected. Consider timing content releases based on historical performance."
                .to_string(),
        );
    }

    if !analysis.anomalies.is_empty() {
        out.push(format!(
            "Found {} anomalies in the data. Investigate unusual spikes or dips for insights.",
            analysis.anomalies.len()
        ));
    }

    if analysis.total_growth > 50.0 {
        out.push("Excellent growth performance! Current strategy is highly effective.".to_string());
    } else if analysis.total_growth > 20.0 {
        out.push("Good growth performance. Consider scaling successful tactics.".to_string());
    } else if analysis.total_growth < -20.0 {
        out.push(
            "Declining performance requires immediate strategic review and optimization."
                .to_string(),
        );
    }

    out
}

#[cfg(test)]
#[path = "trend_test.rs"]
mod tests;
