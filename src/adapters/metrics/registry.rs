//! In-process metrics registry.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Upper bounds (seconds) of the request duration histogram buckets.
pub const DURATION_BUCKETS: [f64; 10] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RequestKey {
    method: String,
    path: String,
    status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RouteKey {
    method: String,
    path: String,
}

#[derive(Debug, Clone, Default)]
struct Histogram {
    /// Non-cumulative counts; the last slot is `+Inf`.
    buckets: [u64; DURATION_BUCKETS.len() + 1],
    sum: f64,
    count: u64,
}

impl Histogram {
    fn observe(&mut self, seconds: f64) {
        let slot = DURATION_BUCKETS
            .iter()
            .position(|&bound| seconds <= bound)
            .unwrap_or(DURATION_BUCKETS.len());
        self.buckets[slot] += 1;
        self.sum += seconds;
        self.count += 1;
    }
}

#[derive(Debug, Default)]
struct HttpSeries {
    requests: BTreeMap<RequestKey, u64>,
    durations: BTreeMap<RouteKey, Histogram>,
}

/// Process-wide metrics shared by handlers and middleware.
#[derive(Debug)]
pub struct Metrics {
    started: Instant,
    http: Mutex<HttpSeries>,
    mood_entries_created: AtomicU64,
    client_errors_reported: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            http: Mutex::new(HttpSeries::default()),
            mood_entries_created: AtomicU64::new(0),
            client_errors_reported: AtomicU64::new(0),
        }
    }

    /// Time since the registry was created.
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Record one completed HTTP request. `path` must be a route template,
    /// not the raw URI, to keep label cardinality bounded.
    pub fn record_request(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        let mut http = self.http.lock().unwrap_or_else(|e| e.into_inner());

        *http
            .requests
            .entry(RequestKey {
                method: method.to_string(),
                path: path.to_string(),
                status,
            })
            .or_insert(0) += 1;

        http.durations
            .entry(RouteKey {
                method: method.to_string(),
                path: path.to_string(),
            })
            .or_default()
            .observe(elapsed.as_secs_f64());
    }

    pub fn inc_mood_entries_created(&self) {
        self.mood_entries_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_client_errors_reported(&self) {
        self.client_errors_reported.fetch_add(1, Ordering::Relaxed);
    }

    pub fn mood_entries_created(&self) -> u64 {
        self.mood_entries_created.load(Ordering::Relaxed)
    }

    pub fn client_errors_reported(&self) -> u64 {
        self.client_errors_reported.load(Ordering::Relaxed)
    }

    /// Render all series in Prometheus text format.
    pub fn render(&self) -> String {
        let mut output = String::new();

        {
            let http = self.http.lock().unwrap_or_else(|e| e.into_inner());

            write_header(
                &mut output,
                "http_requests_total",
                "Total HTTP requests by method, route and status",
                "counter",
            );
            for (key, count) in &http.requests {
                let _ = writeln!(
                    output,
                    "http_requests_total{{method=\"{}\",path=\"{}\",status=\"{}\"}} {}",
                    escape(&key.method),
                    escape(&key.path),
                    key.status,
                    count
                );
            }

            write_header(
                &mut output,
                "http_request_duration_seconds",
                "HTTP request latency by method and route",
                "histogram",
            );
            for (key, histogram) in &http.durations {
                let labels = format!(
                    "method=\"{}\",path=\"{}\"",
                    escape(&key.method),
                    escape(&key.path)
                );
                let mut cumulative = 0u64;
                for (i, bound) in DURATION_BUCKETS.iter().enumerate() {
                    cumulative += histogram.buckets[i];
                    let _ = writeln!(
                        output,
                        "http_request_duration_seconds_bucket{{{},le=\"{}\"}} {}",
                        labels, bound, cumulative
                    );
                }
                cumulative += histogram.buckets[DURATION_BUCKETS.len()];
                let _ = writeln!(
                    output,
                    "http_request_duration_seconds_bucket{{{},le=\"+Inf\"}} {}",
                    labels, cumulative
                );
                let _ = writeln!(
                    output,
                    "http_request_duration_seconds_sum{{{}}} {:.6}",
                    labels, histogram.sum
                );
                let _ = writeln!(
                    output,
                    "http_request_duration_seconds_count{{{}}} {}",
                    labels, histogram.count
                );
            }
        }

        write_simple(
            &mut output,
            "mood_entries_created_total",
            "Mood entries created since start",
            "counter",
            self.mood_entries_created() as f64,
        );
        write_simple(
            &mut output,
            "client_errors_reported_total",
            "Client error reports accepted since start",
            "counter",
            self.client_errors_reported() as f64,
        );
        write_simple(
            &mut output,
            "process_uptime_seconds",
            "Seconds since the process started",
            "gauge",
            self.uptime().as_secs_f64(),
        );

        output
    }
}

fn write_header(output: &mut String, name: &str, help: &str, typ: &str) {
    let _ = writeln!(output, "# HELP {name} {help}");
    let _ = writeln!(output, "# TYPE {name} {typ}");
}

fn write_simple(output: &mut String, name: &str, help: &str, typ: &str, value: f64) {
    write_header(output, name, help, typ);
    let _ = writeln!(output, "{name} {value}");
}

/// Escape a label value per the exposition format.
fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
