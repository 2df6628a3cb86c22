//! Restaurant catalog
//!
//! Fixed, ordered list of restaurants a guest can book at, each paired with
//! the image the front-end shows for it.

use serde::{Deserialize, Serialize};

/// A bookable restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Display name, also stored on every reservation
    pub name: String,
    /// Image asset reference, opaque to the core
    pub image: String,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// Look up a restaurant by its exact name.
    pub fn get(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.name == name)
    }

    /// Restaurant at a 1-based menu position.
    pub fn by_position(&self, position: usize) -> Option<&Restaurant> {
        position
            .checked_sub(1)
            .and_then(|idx| self.restaurants.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_restaurants())
    }
}

pub fn default_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new("Amirtha Fine Dining", "amirtha.png"),
        Restaurant::new("Zaitoon", "zaitoon.png"),
        Restaurant::new("The Vellore Kitchen", "vellore kitchen.png"),
        Restaurant::new("Signature", "signature.png"),
    ]
}
