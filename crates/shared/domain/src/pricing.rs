//! Stores and the price records collected from them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::update::nullable;

/// Online store selling game builds (row of `stores`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storefront {
    pub id: i32,
    pub url: String,
    pub home_page: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStorefront {
    pub url: String,
    pub home_page: Option<String>,
}

/// `None` leaves a column unchanged; `Some(None)` clears `home_page`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStorefront {
    pub url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub home_page: Option<Option<String>>,
}

/// One observed price of a game build at a store.
///
/// Rows are only ever appended; a price change is a new row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparative {
    pub id: i32,
    pub characteristic_id: i32,
    /// Store-side identifier of the offer
    pub offer_id: Option<String>,
    pub stores_id: i32,
    pub price: Decimal,
    pub price_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComparative {
    pub characteristic_id: i32,
    pub offer_id: Option<String>,
    pub stores_id: i32,
    pub price: Decimal,
    /// Defaults to the insert time
    pub price_date: Option<DateTime<Utc>>,
}

/// Reduce a price history to the newest record per store, ordered by store id.
///
/// Records with the same `price_date` are ordered by id.
pub fn current_offers(records: impl IntoIterator<Item = Comparative>) -> Vec<Comparative> {
    let mut latest: BTreeMap<i32, Comparative> = BTreeMap::new();

    for record in records {
        match latest.get(&record.stores_id) {
            Some(current) if (current.price_date, current.id) >= (record.price_date, record.id) => {}
            _ => {
                latest.insert(record.stores_id, record);
            }
        }
    }

    latest.into_values().collect()
}

/// Cheapest price among the given records
pub fn lowest_price<'a>(records: impl IntoIterator<Item = &'a Comparative>) -> Option<Decimal> {
    records.into_iter().map(|r| r.price).min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: i32, store: i32, cents: i64, day: u32) -> Comparative {
        Comparative {
            id,
            characteristic_id: 1,
            offer_id: None,
            stores_id: store,
            price: Decimal::new(cents, 2),
            price_date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_current_offers_keeps_newest_per_store() {
        let offers = current_offers(vec![
            record(1, 2, 5999, 1),
            record(2, 1, 4999, 1),
            record(3, 2, 3999, 5),
            record(4, 1, 5499, 3),
        ]);

        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].id, 4);
        assert_eq!(offers[1].id, 3);
    }

    #[test]
    fn test_current_offers_breaks_ties_by_id() {
        let offers = current_offers(vec![record(7, 1, 1000, 2), record(3, 1, 900, 2)]);
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].id, 7);
    }

    #[test]
    fn test_lowest_price() {
        let records = vec![record(1, 1, 2999, 1), record(2, 2, 1999, 1)];
        assert_eq!(lowest_price(&records), Some(Decimal::new(1999, 2)));
        assert_eq!(lowest_price(&Vec::<Comparative>::new()), None);
    }
}
