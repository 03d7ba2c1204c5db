use strum::IntoEnumIterator;

use crate::docs::descriptor::{parameter_with_name, FieldDescriptor, FieldType, ParameterDescriptor};
use crate::domain::dtos::beer_dto::{BEER_NAME_MAX_LENGTH, PRICE_SCALE};
use crate::domain::models::beer::BeerStyle;

/// BeerDto 各属性的校验约束说明，与 `BeerDto` 上的校验规则保持一致
pub fn constraints_for(property: &str) -> Vec<String> {
    match property {
        "beerName" => vec![
            "Must not be blank".to_string(),
            format!("Size must be at most {}", BEER_NAME_MAX_LENGTH),
        ],
        "beerStyle" => vec![
            "Must not be null".to_string(),
            format!("Must be one of {}", style_names().join(", ")),
        ],
        "upc" => vec!["Must not be null".to_string(), "Must be positive".to_string()],
        "price" => vec![
            "Must not be null".to_string(),
            "Must not be negative".to_string(),
            format!("Must have at most {} fractional digits", PRICE_SCALE),
        ],
        "quantityOnHand" => vec!["Must not be negative".to_string()],
        _ => Vec::new(),
    }
}

fn style_names() -> Vec<String> {
    BeerStyle::iter().map(|style| style.to_string()).collect()
}

fn constrained(path: &'static str) -> FieldDescriptor {
    FieldDescriptor::field_with_path(path).constraints(constraints_for(path))
}

pub fn beer_path_parameters() -> Vec<ParameterDescriptor> {
    vec![parameter_with_name("beerId", "UUID of desired beer to get.")]
}

pub fn beer_request_parameters() -> Vec<ParameterDescriptor> {
    vec![parameter_with_name("isCold", "Is Beer Cold Query param")]
}

pub fn beer_response_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::field_with_path("id").of_type(FieldType::Uuid).description("Id of Beer"),
        FieldDescriptor::field_with_path("version").of_type(FieldType::Long).description("Version Number"),
        FieldDescriptor::field_with_path("createdDate").of_type(FieldType::Timestamp).description("Date Created"),
        FieldDescriptor::field_with_path("lastModifiedDate").of_type(FieldType::Timestamp).description("Date Updated"),
        FieldDescriptor::field_with_path("beerName").of_type(FieldType::String).description("Beer Name"),
        FieldDescriptor::field_with_path("beerStyle").of_type(FieldType::String).description("Beer Style"),
        FieldDescriptor::field_with_path("upc").of_type(FieldType::Long).description("UPC of Beer"),
        FieldDescriptor::field_with_path("price").of_type(FieldType::Decimal).description("Price"),
        FieldDescriptor::field_with_path("quantityOnHand").of_type(FieldType::Integer).description("Quantity on hand"),
    ]
}

/// 新建请求：服务端分配的字段标记为忽略
pub fn beer_create_request_fields() -> Vec<FieldDescriptor> {
    vec![
        constrained("id").ignored(),
        constrained("version").ignored(),
        constrained("createdDate").ignored(),
        constrained("lastModifiedDate").ignored(),
        constrained("beerName").of_type(FieldType::String).description("Beer Name"),
        constrained("beerStyle").of_type(FieldType::Enum).description("Beer Style"),
        constrained("upc").of_type(FieldType::Long).description("UPC of Beer"),
        constrained("price").of_type(FieldType::Decimal).description("Price"),
        constrained("quantityOnHand").ignored(),
    ]
}

/// 更新请求：库存可以修改，不传则保留原值
pub fn beer_update_request_fields() -> Vec<FieldDescriptor> {
    vec![
        constrained("id").ignored(),
        constrained("version").ignored(),
        constrained("createdDate").ignored(),
        constrained("lastModifiedDate").ignored(),
        constrained("beerName").of_type(FieldType::String).description("Beer Name"),
        constrained("beerStyle").of_type(FieldType::Enum).description("Beer Style"),
        constrained("upc").of_type(FieldType::Long).description("UPC of Beer"),
        constrained("price").of_type(FieldType::Decimal).description("Price"),
        constrained("quantityOnHand")
            .of_type(FieldType::Integer)
            .description("Quantity on hand")
            .optional(),
    ]
}
