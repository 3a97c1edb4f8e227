//! Sales records and dashboard analytics.
//!
//! Every order writes one sale row at creation time (see
//! [`crate::core::order::create_order`]); this module reads those rows back.
//! The analytics fold runs in Rust over the full sale list rather than in
//! SQL, which keeps the weekday grouping rule in one tested place.

use crate::{
    entities::{Sale, SaleColumn, sale},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;

/// Aggregated figures for the dashboard revenue panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesAnalytics {
    /// Sum of every sale amount
    pub total_revenue: f64,
    /// Number of sale records, which equals the number of orders ever placed
    pub total_orders: u64,
    /// Revenue grouped by weekday name, as a list in first-seen order;
    /// sales with no recorded day land under `"Unknown"`
    pub sales_by_day: Vec<DaySales>,
}

/// One weekday's revenue total within [`SalesAnalytics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySales {
    pub day: String,
    pub amount: f64,
}

/// Retrieves all sale records, newest first.
pub async fn list_sales(db: &DatabaseConnection) -> Result<Vec<sale::Model>> {
    Sale::find()
        .order_by_desc(SaleColumn::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Computes the dashboard analytics over every sale on record.
pub async fn sales_analytics(db: &DatabaseConnection) -> Result<SalesAnalytics> {
    let sales = Sale::find().all(db).await?;
    Ok(fold_analytics(&sales))
}

/// Folds a batch of sale rows into the analytics summary. At most seven
/// weekday buckets plus `"Unknown"` exist, so the linear scan per sale is
/// fine and keeps the buckets in first-seen order.
fn fold_analytics(sales: &[sale::Model]) -> SalesAnalytics {
    let mut total_revenue = 0.0;
    let mut sales_by_day: Vec<DaySales> = Vec::new();

    for sale in sales {
        total_revenue += sale.amount;
        let day = sale.day.as_deref().unwrap_or("Unknown");
        match sales_by_day.iter_mut().find(|entry| entry.day == day) {
            Some(entry) => entry.amount += sale.amount,
            None => sales_by_day.push(DaySales {
                day: day.to_string(),
                amount: sale.amount,
            }),
        }
    }

    SalesAnalytics {
        total_revenue,
        total_orders: sales.len() as u64,
        sales_by_day,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    fn sale_on(day: Option<&str>, amount: f64) -> sale::Model {
        sale::Model {
            id: 0,
            date: chrono::Utc::now(),
            amount,
            day: day.map(String::from),
            transaction_id: format!("TXN-0-{amount}"),
            order_id: None,
        }
    }

    #[test]
    fn test_fold_analytics_groups_by_weekday() {
        let sales = vec![
            sale_on(Some("Monday"), 100.0),
            sale_on(Some("Monday"), 250.0),
            sale_on(Some("Friday"), 75.0),
            sale_on(None, 25.0),
        ];

        let analytics = fold_analytics(&sales);
        assert_eq!(analytics.total_revenue, 450.0);
        assert_eq!(analytics.total_orders, 4);
        assert_eq!(
            analytics.sales_by_day,
            vec![
                DaySales {
                    day: "Monday".to_string(),
                    amount: 350.0
                },
                DaySales {
                    day: "Friday".to_string(),
                    amount: 75.0
                },
                DaySales {
                    day: "Unknown".to_string(),
                    amount: 25.0
                },
            ]
        );
    }

    #[test]
    fn test_sales_by_day_serializes_as_a_list() {
        // Dashboard clients iterate sales_by_day as a JSON array of
        // {day, amount} objects, never as a keyed map
        let analytics = fold_analytics(&[sale_on(Some("Monday"), 100.0)]);
        let json = serde_json::to_value(&analytics).unwrap();

        let by_day = json["sales_by_day"].as_array().unwrap();
        assert_eq!(by_day[0]["day"], "Monday");
        assert_eq!(by_day[0]["amount"], 100.0);
    }

    #[test]
    fn test_fold_analytics_empty() {
        let analytics = fold_analytics(&[]);
        assert_eq!(analytics.total_revenue, 0.0);
        assert_eq!(analytics.total_orders, 0);
        assert!(analytics.sales_by_day.is_empty());
    }

    #[tokio::test]
    async fn test_sales_analytics_tracks_orders() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_order(&db, "First").await?;
        create_test_order(&db, "Second").await?;

        let analytics = sales_analytics(&db).await?;
        assert_eq!(analytics.total_orders, 2);
        assert!(analytics.total_revenue > 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_order_leaves_analytics() -> Result<()> {
        let (db, order) = setup_with_order().await?;

        crate::core::order::delete_order(&db, order.id).await?;

        let analytics = sales_analytics(&db).await?;
        assert_eq!(analytics.total_orders, 0);
        assert_eq!(analytics.total_revenue, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_sales_newest_first() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_order(&db, "First").await?;
        let second = create_test_order(&db, "Second").await?;

        let sales = list_sales(&db).await?;
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].order_id, Some(second.id));
        assert_eq!(sales[1].order_id, Some(first.id));

        Ok(())
    }
}
