use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

pub struct MetricsService {
    registry: Registry,
    http_requests: IntCounterVec,
    page_views: IntCounter,
    games_uploaded: IntCounter,
    upload_failures: IntCounter,
}

impl MetricsService {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests by method and status class"),
            &["method", "status"],
        )?;
        let page_views = IntCounter::new("page_views_total", "Listing page views recorded")?;
        let games_uploaded = IntCounter::new("games_uploaded_total", "Games created through the dashboard")?;
        let upload_failures = IntCounter::new("upload_failures_total", "Dashboard uploads that failed")?;

        registry.register(Box::new(http_requests.clone()))?;
        registry.register(Box::new(page_views.clone()))?;
        registry.register(Box::new(games_uploaded.clone()))?;
        registry.register(Box::new(upload_failures.clone()))?;

        Ok(Self {
            registry,
            http_requests,
            page_views,
            games_uploaded,
            upload_failures,
        })
    }

    pub fn record_request(&self, method: &str, status: u16) {
        let class = match status {
            100..=199 => "1xx",
            200..=299 => "2xx",
            300..=399 => "3xx",
            400..=499 => "4xx",
            _ => "5xx",
        };
        self.http_requests.with_label_values(&[method, class]).inc();
    }

    pub fn record_page_view(&self) {
        self.page_views.inc();
    }

    pub fn record_upload(&self) {
        self.games_uploaded.inc();
    }

    pub fn record_upload_failure(&self) {
        self.upload_failures.inc();
    }

    /// Text exposition of every registered metric.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
