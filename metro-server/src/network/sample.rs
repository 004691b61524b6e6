//! Built-in sample network.
//!
//! A central slice of the Delhi Metro, used as the default network when no
//! feed file is configured and as a realistic fixture in tests. Coordinates
//! are provided for the major interchanges only; the rest of the stations
//! exercise the missing-geodata paths.

use crate::domain::{LineId, StationName};

use super::{Coordinates, LineOrderings, Network};

const YELLOW: &[&str] = &[
    "Vishwavidyalaya",
    "Vidhan Sabha",
    "Civil Lines",
    "Kashmere Gate",
    "Chandni Chowk",
    "Chawri Bazar",
    "New Delhi",
    "Rajiv Chowk",
    "Patel Chowk",
    "Central Secretariat",
    "Udyog Bhawan",
    "Lok Kalyan Marg",
    "Jorbagh",
    "Dilli Haat - Ina",
    "Aiims",
    "Green Park",
    "Hauz Khas",
    "Malviya Nagar",
    "Saket",
];

const BLUE: &[&str] = &[
    "Karol Bagh",
    "Jhandewalan",
    "RK Ashram Marg",
    "Rajiv Chowk",
    "Barakhamba",
    "Mandi House",
    "Supreme Court",
    "Indraprastha",
    "Yamuna Bank",
    "Akshardham",
];

const VIOLET: &[&str] = &[
    "Kashmere Gate",
    "Lal Quila",
    "Jama Masjid",
    "Delhi Gate",
    "Ito",
    "Mandi House",
    "Janpath",
    "Central Secretariat",
    "Khan Market",
    "Jawahar Lal Nehru Stadium",
    "Jangpura",
    "Lajpat Nagar",
];

const MAGENTA: &[&str] = &[
    "Munirka",
    "RK Puram",
    "Iit",
    "Hauz Khas",
    "Panchsheel Park",
    "Chirag Delhi",
    "Greater Kailash",
    "Nehru Enclave",
    "Kalkaji Mandir",
];

/// Hand-checked coordinates for the major stations.
const COORDINATES: &[(&str, f64, f64)] = &[
    ("Rajiv Chowk", 28.6327, 77.2195),
    ("Kashmere Gate", 28.6675, 77.2285),
    ("New Delhi", 28.6431, 77.2223),
    ("Central Secretariat", 28.6148, 77.2120),
    ("Mandi House", 28.6257, 77.2335),
    ("Hauz Khas", 28.5433, 77.2066),
    ("Saket", 28.5205, 77.2020),
];

fn stations(names: &[&str]) -> Vec<StationName> {
    names
        .iter()
        .filter_map(|name| StationName::parse(name).ok())
        .collect()
}

fn line_defs() -> Vec<(LineId, &'static [&'static str])> {
    [
        ("Yellow", YELLOW),
        ("Blue", BLUE),
        ("Violet", VIOLET),
        ("Magenta", MAGENTA),
    ]
    .into_iter()
    .filter_map(|(name, segment)| LineId::parse(name).ok().map(|line| (line, segment)))
    .collect()
}

/// Build the sample network.
pub fn sample_network() -> Network {
    let mut builder = Network::builder();

    for (line, names) in line_defs() {
        builder = builder.add_line_segment(line, &stations(names));
    }

    for (name, lat, lon) in COORDINATES {
        if let (Ok(station), Ok(coords)) = (StationName::parse(name), Coordinates::new(*lat, *lon))
        {
            builder = builder.set_coordinates(station, coords);
        }
    }

    builder.build()
}

/// Line orderings matching [`sample_network`].
pub fn sample_orderings() -> LineOrderings {
    let mut orderings = LineOrderings::new();
    for (line, names) in line_defs() {
        orderings.add(line, stations(names));
    }
    orderings
}
