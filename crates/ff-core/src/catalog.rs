//! Product catalog and the client-side filter

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter value meaning "no constraint"
pub const ALL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub protocol: &'static str,
    pub band: &'static str,
    pub keys: &'static str,
    pub housing: &'static str,
    pub cert: &'static str,
    pub application: &'static str,
    pub bullets: &'static [&'static str],
    pub datasheet_url: &'static str,
    pub image: &'static str,
}

/// Attributes the catalog can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    Protocol,
    Band,
    Keys,
    Housing,
    Cert,
    Application,
}

impl FilterKey {
    pub const ALL: [FilterKey; 6] = [
        FilterKey::Protocol,
        FilterKey::Band,
        FilterKey::Keys,
        FilterKey::Housing,
        FilterKey::Cert,
        FilterKey::Application,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::Protocol => "Protocol",
            FilterKey::Band => "Frequency",
            FilterKey::Keys => "Buttons",
            FilterKey::Housing => "Housing",
            FilterKey::Cert => "Certification",
            FilterKey::Application => "Application",
        }
    }

    pub fn value_of<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            FilterKey::Protocol => product.protocol,
            FilterKey::Band => product.band,
            FilterKey::Keys => product.keys,
            FilterKey::Housing => product.housing,
            FilterKey::Cert => product.cert,
            FilterKey::Application => product.application,
        }
    }
}

/// Dropdown selections plus an optional free-text query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    selections: BTreeMap<FilterKey, String>,
    query: String,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ProductFilter::select`]
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.select(key, value);
        self
    }

    /// Set a dropdown; selecting "All" clears the constraint
    pub fn select(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        if value == ALL {
            self.selections.remove(&key);
        } else {
            self.selections.insert(key, value);
        }
    }

    pub fn selected(&self, key: FilterKey) -> &str {
        self.selections.get(&key).map(String::as_str).unwrap_or(ALL)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn clear(&mut self) {
        self.selections.clear();
        self.query.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty() && self.query.trim().is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.selections
            .iter()
            .all(|(key, value)| key.value_of(product) == value.as_str())
            && self.matches_query(product)
    }

    fn matches_query(&self, product: &Product) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [product.name, product.id, product.protocol, product.application]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Products matching every active selection, in catalog order
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Dropdown options for a key: "All" then distinct values in first-seen order
pub fn filter_options(products: &[Product], key: FilterKey) -> Vec<&str> {
    let mut options = vec![ALL];
    for product in products {
        let value = key.value_of(product);
        if !options.contains(&value) {
            options.push(value);
        }
    }
    options
}

pub const DEMO_PRODUCTS: &[Product] = &[
    Product {
        id: "ff-rc433-4k",
        name: "4-Button Rolling Code Remote",
        protocol: "Rolling code (HCS301)",
        band: "433 MHz",
        keys: "4",
        housing: "ABS",
        cert: "CE",
        application: "Garage door",
        bullets: &[
            "KeeLoq-compatible rolling code",
            "Up to 50 m open-field range",
            "CR2032 coin cell, 2-year battery life",
        ],
        datasheet_url: "/datasheets/ff-rc433-4k.pdf",
        image: "/assets/products/ff-rc433-4k.webp",
    },
    Product {
        id: "ff-rc315-2k",
        name: "2-Button Fixed Code Key Fob",
        protocol: "Fixed code (EV1527)",
        band: "315 MHz",
        keys: "2",
        housing: "ABS",
        cert: "FCC",
        application: "Car alarm",
        bullets: &[
            "1 million code combinations",
            "Learning-code receivers supported",
            "Custom button icons",
        ],
        datasheet_url: "/datasheets/ff-rc315-2k.pdf",
        image: "/assets/products/ff-rc315-2k.webp",
    },
    Product {
        id: "ff-rc433-zn",
        name: "Zinc Alloy Premium Remote",
        protocol: "Fixed code (EV1527)",
        band: "433 MHz",
        keys: "4",
        housing: "Zinc alloy",
        cert: "CE",
        application: "Gate automation",
        bullets: &[
            "Die-cast zinc shell with sliding cover",
            "Laser-engraved logo",
            "IP54 splash resistance",
        ],
        datasheet_url: "/datasheets/ff-rc433-zn.pdf",
        image: "/assets/products/ff-rc433-zn.webp",
    },
    Product {
        id: "ff-ble-1k",
        name: "Single-Button BLE Smart Tag",
        protocol: "BLE 5.0",
        band: "2.4 GHz",
        keys: "1",
        housing: "Silicone",
        cert: "FCC / CE",
        application: "Smart home",
        bullets: &[
            "iOS and Android SDK",
            "Configurable click and long-press events",
            "Up to 18 months standby",
        ],
        datasheet_url: "/datasheets/ff-ble-1k.pdf",
        image: "/assets/products/ff-ble-1k.webp",
    },
    Product {
        id: "ff-rc868-4k",
        name: "868 MHz Gate Remote",
        protocol: "Rolling code (HCS301)",
        band: "868 MHz",
        keys: "4",
        housing: "ABS",
        cert: "CE / RED",
        application: "Gate automation",
        bullets: &[
            "EU SRD band compliant",
            "Clone-proof hopping code",
            "Keyring loop and belt clip",
        ],
        datasheet_url: "/datasheets/ff-rc868-4k.pdf",
        image: "/assets/products/ff-rc868-4k.webp",
    },
    Product {
        id: "ff-rc433-6k",
        name: "6-Button Industrial Remote",
        protocol: "Rolling code (HCS301)",
        band: "433 MHz",
        keys: "6",
        housing: "ABS",
        cert: "CE",
        application: "Industrial control",
        bullets: &[
            "Rubberised keypad for gloved use",
            "Interlocked direction buttons",
            "Up to 100 m range",
        ],
        datasheet_url: "/datasheets/ff-rc433-6k.pdf",
        image: "/assets/products/ff-rc433-6k.webp",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_filter_ignores_all() {
        let filter = ProductFilter::new()
            .with(FilterKey::Band, "433 MHz")
            .with(FilterKey::Housing, "All");
        let result = filter_products(DEMO_PRODUCTS, &filter);

        let expected: Vec<&Product> = DEMO_PRODUCTS.iter().filter(|p| p.band == "433 MHz").collect();
        assert_eq!(result, expected);
        assert_eq!(result.len(), 3);
        assert!(result.iter().any(|p| p.housing == "Zinc alloy"));
    }

    #[test]
    fn test_every_selection_must_match() {
        let filter = ProductFilter::new()
            .with(FilterKey::Band, "433 MHz")
            .with(FilterKey::Housing, "ABS")
            .with(FilterKey::Keys, "4");
        let ids: Vec<&str> = filter_products(DEMO_PRODUCTS, &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["ff-rc433-4k"]);
    }

    #[test]
    fn test_exact_match_only() {
        let filter = ProductFilter::new().with(FilterKey::Band, "433");
        assert!(filter_products(DEMO_PRODUCTS, &filter).is_empty());
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let filter = ProductFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter_products(DEMO_PRODUCTS, &filter).len(), DEMO_PRODUCTS.len());
        assert_eq!(filter.selected(FilterKey::Cert), ALL);
    }

    #[test]
    fn test_selecting_all_clears() {
        let mut filter = ProductFilter::new().with(FilterKey::Cert, "FCC");
        assert_eq!(filter.selected(FilterKey::Cert), "FCC");
        filter.select(FilterKey::Cert, ALL);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut filter = ProductFilter::new();
        filter.set_query("  gate ");
        let ids: Vec<&str> = filter_products(DEMO_PRODUCTS, &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["ff-rc433-zn", "ff-rc868-4k"]);

        filter.select(FilterKey::Band, "868 MHz");
        assert_eq!(filter_products(DEMO_PRODUCTS, &filter).len(), 1);

        filter.clear();
        assert!(filter.query().is_empty());
    }

    #[test]
    fn test_filter_options() {
        assert_eq!(
            filter_options(DEMO_PRODUCTS, FilterKey::Band),
            vec!["All", "433 MHz", "315 MHz", "2.4 GHz", "868 MHz"]
        );
        assert_eq!(filter_options(&[], FilterKey::Keys), vec!["All"]);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in DEMO_PRODUCTS.iter().enumerate() {
            assert!(DEMO_PRODUCTS[i + 1..].iter().all(|b| b.id != a.id));
        }
    }
}
