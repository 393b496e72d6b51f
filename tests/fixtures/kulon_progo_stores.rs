//! Store locations across Kulon Progo, Yogyakarta.
//!
//! Coordinates are approximate town centres, good enough for great-circle
//! routing around the Wates depot.

/// A named store with coordinates.
#[derive(Debug, Clone)]
pub struct Store {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Store {
    pub const fn new(id: &'static str, name: &'static str, lat: f64, lng: f64) -> Self {
        Self { id, name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// North: hills towards Magelang
// ============================================================================

pub const NORTH_STORES: &[Store] = &[
    Store::new("nanggulan", "Toko Nanggulan", -7.7600, 110.2050),
    Store::new("girimulyo", "Warung Girimulyo", -7.7500, 110.1600),
    Store::new("kalibawang", "Toko Kalibawang", -7.6900, 110.2450),
    Store::new("samigaluh", "Warung Samigaluh", -7.6800, 110.1700),
];

// ============================================================================
// South: coastal plain
// ============================================================================

pub const SOUTH_STORES: &[Store] = &[
    Store::new("panjatan", "Toko Panjatan", -7.9100, 110.1450),
    Store::new("galur", "Toko Galur", -7.9400, 110.2100),
    Store::new("lendah", "Warung Lendah", -7.9200, 110.2250),
    Store::new("brosot", "Toko Brosot", -7.9450, 110.2300),
];

// ============================================================================
// West: towards the airport
// ============================================================================

pub const WEST_STORES: &[Store] = &[
    Store::new("temon", "Toko Temon", -7.8950, 110.0650),
    Store::new("glagah", "Warung Glagah", -7.9050, 110.0700),
    Store::new("kokap", "Toko Kokap", -7.8350, 110.0850),
];

pub fn all_stores() -> Vec<Store> {
    NORTH_STORES
        .iter()
        .chain(SOUTH_STORES)
        .chain(WEST_STORES)
        .cloned()
        .collect()
}
