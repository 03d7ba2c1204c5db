use std::borrow::Cow;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::models::beer::{Beer, BeerChanges, BeerStyle};
use crate::error::AppError;

/// 价格最多保留的小数位
pub const PRICE_SCALE: u32 = 2;
pub const BEER_NAME_MAX_LENGTH: u64 = 100;

/// 请求与响应共用的传输对象
///
/// 入参中的 `id`、`version`、`createdDate`、`lastModifiedDate` 由服务端分配，
/// 调用方传入的值会被忽略。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    pub id: Option<Uuid>,
    pub version: Option<i64>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,

    #[validate(
        required(message = "must not be blank"),
        custom(function = "validate_not_blank"),
        length(max = 100, message = "length must be at most 100 characters")
    )]
    pub beer_name: Option<String>,

    #[validate(required(message = "must not be null"), custom(function = "validate_beer_style"))]
    pub beer_style: Option<String>,

    #[validate(required(message = "must not be null"), range(min = 1, message = "must be positive"))]
    pub upc: Option<i64>,

    #[validate(required(message = "must not be null"), custom(function = "validate_price"))]
    pub price: Option<Decimal>,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub quantity_on_hand: Option<i32>,
}

impl BeerDto {
    /// 调用方填写了的服务端字段名，用于日志提示
    pub fn server_assigned_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.id.is_some() {
            fields.push("id");
        }
        if self.version.is_some() {
            fields.push("version");
        }
        if self.created_date.is_some() {
            fields.push("createdDate");
        }
        if self.last_modified_date.is_some() {
            fields.push("lastModifiedDate");
        }
        fields
    }
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        Self {
            id: Some(beer.id),
            version: Some(beer.version),
            created_date: Some(beer.created_date),
            last_modified_date: Some(beer.last_modified_date),
            beer_name: Some(beer.beer_name),
            beer_style: Some(beer.beer_style.to_string()),
            upc: Some(beer.upc),
            price: Some(beer.price),
            quantity_on_hand: Some(beer.quantity_on_hand),
        }
    }
}

impl TryFrom<BeerDto> for BeerChanges {
    type Error = AppError;

    fn try_from(dto: BeerDto) -> Result<Self, Self::Error> {
        dto.validate()?;

        let beer_style = dto
            .beer_style
            .as_deref()
            .and_then(|style| BeerStyle::from_str(style).ok())
            .ok_or_else(|| AppError::BadRequest("beerStyle is missing".to_string()))?;

        Ok(Self {
            beer_name: dto
                .beer_name
                .ok_or_else(|| AppError::BadRequest("beerName is missing".to_string()))?,
            beer_style,
            upc: dto
                .upc
                .ok_or_else(|| AppError::BadRequest("upc is missing".to_string()))?,
            price: dto
                .price
                .ok_or_else(|| AppError::BadRequest("price is missing".to_string()))?,
            quantity_on_hand: dto.quantity_on_hand,
        })
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(Cow::from("must not be blank")));
    }
    Ok(())
}

fn validate_beer_style(value: &str) -> Result<(), ValidationError> {
    if BeerStyle::from_str(value).is_err() {
        let mut error = ValidationError::new("beer_style")
            .with_message(Cow::from(format!("unknown beer style '{}'", value)));
        error.add_param(Cow::from("value"), &value);
        return Err(error);
    }
    Ok(())
}

fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("price").with_message(Cow::from("must not be negative")));
    }
    if value.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new("price")
            .with_message(Cow::from("must have at most 2 fractional digits")));
    }
    Ok(())
}
