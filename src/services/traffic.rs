use chrono::{Duration, NaiveDate, Utc};

use crate::{
    errors::Result,
    models::{TrafficLog, TrafficStats},
    store::CatalogStore,
};

/// Number of calendar days, today included, summed into the weekly figure.
pub const WEEK_DAYS: i64 = 7;

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub async fn record_visit(store: &dyn CatalogStore, date: NaiveDate) -> Result<TrafficLog> {
    store.record_visit(date).await
}

pub async fn stats(store: &dyn CatalogStore, today: NaiveDate) -> Result<TrafficStats> {
    let week_start = today - Duration::days(WEEK_DAYS - 1);

    let daily = store.page_views_between(today, today).await?;
    let weekly = store.page_views_between(week_start, today).await?;

    Ok(TrafficStats { daily, weekly })
}
