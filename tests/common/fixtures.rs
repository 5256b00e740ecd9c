//! Static catalogue documents used across harnesses.

use nopo_core::Catalog;

/// The sample catalogue shipped in `data/`. Eight restaurants, mixed integer,
/// text, null and non-numeric (`"시가"`) prices.
pub const SAMPLE_CATALOG: &str = include_str!("../../data/restaurants.json");

/// A document keyed with the English aliases instead of the Korean keys.
pub const ENGLISH_KEYS: &str = r#"[
    {"name": "Kim's BBQ", "address": "Seoul%20Mapo-gu", "menu": [
        {"name": "pork belly", "price": "14,000 KRW"},
        {"name": "stew", "price": 8000}
    ]},
    {"name": "Noodle Bar", "address": "Busan%20Jung-gu"}
]"#;

/// Prices in every shape the normalizer has to cope with.
pub const ODD_PRICES: &str = r#"[
    {"식당명": "가", "주소": "a", "메뉴": [
        {"메뉴명": "정수", "가격": 5000},
        {"메뉴명": "음수", "가격": -5000},
        {"메뉴명": "문자", "가격": "5,000원"},
        {"메뉴명": "소수", "가격": 5000.0},
        {"메뉴명": "참거짓", "가격": true},
        {"메뉴명": "없음", "가격": null},
        {"메뉴명": "빈칸", "가격": ""},
        {"메뉴명": "시가", "가격": "시가"},
        {"메뉴명": "전각", "가격": "５,０００원"}
    ]},
    {"식당명": "나", "주소": "b", "메뉴": [
        {"메뉴명": "누락"}
    ]}
]"#;

/// Parse [`SAMPLE_CATALOG`].
pub fn sample_catalog() -> Catalog {
    Catalog::from_json_str(SAMPLE_CATALOG).expect("sample catalogue must parse")
}
