use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

/// 持久化实体
///
/// `version` 是乐观锁版本号，新建时为 0，由仓储在每次成功更新时递增。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: Uuid,
    pub version: i64,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: i64,
    pub price: Decimal,
    pub quantity_on_hand: i32,
}

/// 调用方可以修改的字段
#[derive(Debug, Clone, PartialEq)]
pub struct BeerChanges {
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: i64,
    pub price: Decimal,
    pub quantity_on_hand: Option<i32>,
}

impl Beer {
    pub fn new(beer_name: &str, beer_style: BeerStyle, upc: i64, price: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            version: 0,
            created_date: now,
            last_modified_date: now,
            beer_name: beer_name.to_string(),
            beer_style,
            upc,
            price,
            quantity_on_hand: 0,
        }
    }

    pub fn with_quantity_on_hand(mut self, quantity_on_hand: i32) -> Self {
        self.quantity_on_hand = quantity_on_hand;
        self
    }

    /// 覆盖可变字段并刷新修改时间，版本号不在这里处理
    pub fn apply(&mut self, changes: BeerChanges) {
        self.beer_name = changes.beer_name;
        self.beer_style = changes.beer_style;
        self.upc = changes.upc;
        self.price = changes.price;

        if let Some(quantity_on_hand) = changes.quantity_on_hand {
            self.quantity_on_hand = quantity_on_hand;
        }

        self.last_modified_date = Utc::now();
    }
}

impl From<BeerChanges> for Beer {
    fn from(changes: BeerChanges) -> Self {
        Beer::new(&changes.beer_name, changes.beer_style, changes.upc, changes.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_style_wire_names() {
        assert_eq!(BeerStyle::PaleAle.to_string(), "PALE_ALE");
        assert_eq!(BeerStyle::Ipa.to_string(), "IPA");
        assert_eq!(BeerStyle::from_str("SAISON").unwrap(), BeerStyle::Saison);
        assert!(BeerStyle::from_str("CIDER").is_err());

        // serde 与 strum 的名称必须一致
        for style in BeerStyle::iter() {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style));
        }
    }

    #[test]
    fn test_new_beer_defaults() {
        let beer = Beer::new("Nice Ale", BeerStyle::Ale, 123123123123, dec!(9.99));

        assert_eq!(beer.version, 0);
        assert_eq!(beer.quantity_on_hand, 0);
        assert_eq!(beer.created_date, beer.last_modified_date);
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut beer = Beer::new("Nice Ale", BeerStyle::Ale, 123123123123, dec!(9.99))
            .with_quantity_on_hand(12);
        let id = beer.id;
        let created = beer.created_date;

        beer.apply(BeerChanges {
            beer_name: "Better Ale".to_string(),
            beer_style: BeerStyle::PaleAle,
            upc: 42,
            price: dec!(10.50),
            quantity_on_hand: None,
        });

        assert_eq!(beer.id, id);
        assert_eq!(beer.created_date, created);
        assert_eq!(beer.version, 0);
        assert_eq!(beer.beer_name, "Better Ale");
        assert_eq!(beer.beer_style, BeerStyle::PaleAle);
        assert_eq!(beer.quantity_on_hand, 12);
        assert!(beer.last_modified_date >= created);
    }
}
