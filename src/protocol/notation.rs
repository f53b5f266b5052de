//! DATC standard order notation.
//!
//! Test cases in the Diplomacy Adjudicator Test Cases are written as blocks
//! of orders under a country header:
//!
//! ```text
//! France:
//! A Paris - Burgundy
//! A Marseilles Supports A Paris - Burgundy
//! F Brest Supports F English Channel
//! ```
//!
//! A supported order without an order type is a supported hold. Province
//! names map to the location ids of the anchor tables; a coast is written
//! as a parenthesised suffix, `Spain(nc)`. Convoys have no counterpart in
//! the order model and are rejected.

use std::collections::HashMap;

use thiserror::Error;

use crate::board::{AssistedOrder, Order, OrderType, UnitType};
use crate::map::coords::has_unit_anchor;

/// Errors that can occur when parsing standard notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown unit type '{0}'")]
    UnknownUnitType(String),

    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    #[error("order appears before any country header: '{0}'")]
    MissingCountry(String),

    #[error("missing destination in '{0}'")]
    MissingDestination(String),

    #[error("missing supported order in '{0}'")]
    MissingSupportedOrder(String),

    #[error("unsupported order '{0}'")]
    UnsupportedOrder(String),
}

/// The seven powers that may head a block.
const COUNTRIES: [&str; 7] = [
    "Austria", "England", "France", "Germany", "Italy", "Russia", "Turkey",
];

const HOLD: &str = "Hold";
const ATTACK: &str = "-";
const SUPPORTS: &str = "Supports";
const CONVOYS: &str = "Convoys";
const KEYWORDS: [&str; 4] = [HOLD, ATTACK, SUPPORTS, CONVOYS];

/// Province names and their location ids. The first name listed for an id
/// is the one used when formatting.
const LOCATION_NAMES: [(&str, &str); 78] = [
    ("Adriatic Sea", "adr"),
    ("Aegean Sea", "aeg"),
    ("Albania", "alb"),
    ("Ankara", "ank"),
    ("Apulia", "apu"),
    ("Armenia", "arm"),
    ("Baltic Sea", "bal"),
    ("Barents Sea", "bar"),
    ("Belgium", "bel"),
    ("Berlin", "ber"),
    ("Black Sea", "bla"),
    ("Bohemia", "boh"),
    ("Brest", "bre"),
    ("Budapest", "bud"),
    ("Bulgaria", "bul"),
    ("Burgundy", "bur"),
    ("Clyde", "cly"),
    ("Constantinople", "con"),
    ("Denmark", "den"),
    ("Eastern Mediterranean", "eas"),
    ("Edinburgh", "edi"),
    ("English Channel", "eng"),
    ("Finland", "fin"),
    ("Galicia", "gal"),
    ("Gascony", "gas"),
    ("Greece", "gre"),
    ("Gulf of Lyon", "gol"),
    ("Gulf of Bothnia", "bot"),
    ("Helgoland Bight", "hel"),
    ("Heligoland Bight", "hel"),
    ("Holland", "hol"),
    ("Ionian Sea", "ion"),
    ("Irish Sea", "iri"),
    ("Kiel", "kie"),
    ("Liverpool", "lvp"),
    ("Livonia", "lvn"),
    ("London", "lon"),
    ("Marseilles", "mar"),
    ("Mid-Atlantic Ocean", "mao"),
    ("Moscow", "mos"),
    ("Munich", "mun"),
    ("Naples", "nap"),
    ("North Atlantic Ocean", "nao"),
    ("North Africa", "naf"),
    ("North Sea", "nth"),
    ("Norway", "nor"),
    ("Norwegian Sea", "nwg"),
    ("Paris", "par"),
    ("Picardy", "pic"),
    ("Piedmont", "pie"),
    ("Portugal", "por"),
    ("Prussia", "pru"),
    ("Rome", "rom"),
    ("Ruhr", "ruh"),
    ("Rumania", "rum"),
    ("Serbia", "ser"),
    ("Sevastopol", "sev"),
    ("Silesia", "sil"),
    ("Skagerrak", "ska"),
    ("Smyrna", "smy"),
    ("Spain", "spa"),
    ("St Petersburg", "stp"),
    ("St. Petersburg", "stp"),
    ("Sweden", "swe"),
    ("Switzerland", "swi"),
    ("Syria", "syr"),
    ("Trieste", "tri"),
    ("Tunis", "tun"),
    ("Tuscany", "tus"),
    ("Tyrolia", "tyr"),
    ("Tyrrhenian Sea", "tys"),
    ("Ukraine", "ukr"),
    ("Venice", "ven"),
    ("Vienna", "vie"),
    ("Wales", "wal"),
    ("Warsaw", "war"),
    ("Western Mediterranean", "wes"),
    ("Yorkshire", "yor"),
];

/// Maps a province name, optionally with a `(xc)` coast suffix, to its
/// location id.
pub fn location_id(name: &str) -> Result<String, NotationError> {
    let unknown = || NotationError::UnknownLocation(name.to_string());
    let name = name.trim();
    let (province, coast) = match name.strip_suffix(')').and_then(|s| s.rsplit_once('(')) {
        Some((province, coast)) => (province.trim_end(), Some(coast)),
        None => (name, None),
    };
    let id = LOCATION_NAMES
        .iter()
        .find(|(n, _)| *n == province)
        .map(|(_, id)| *id)
        .ok_or_else(unknown)?;
    let id = match coast {
        Some(coast) => format!("{}-{}", id, coast),
        None => id.to_string(),
    };
    if has_unit_anchor(&id) {
        Ok(id)
    } else {
        Err(unknown())
    }
}

/// Maps a location id back to its standard notation name.
pub fn location_name(id: &str) -> Option<String> {
    let (province, coast) = match id.split_once('-') {
        Some((province, coast)) => (province, Some(coast)),
        None => (id, None),
    };
    let name = LOCATION_NAMES
        .iter()
        .find(|(_, i)| *i == province)
        .map(|(n, _)| *n)?;
    Some(match coast {
        Some(coast) => format!("{}({})", name, coast),
        None => name.to_string(),
    })
}

fn country_header(tokens: &[&str]) -> Option<String> {
    match tokens {
        [single] => {
            let name = single.strip_suffix(':')?;
            COUNTRIES
                .contains(&name)
                .then(|| name.to_lowercase())
        }
        _ => None,
    }
}

/// The part every order line shares: unit type, location, and the order
/// keyword with whatever follows it.
struct Head<'a> {
    unit_type: UnitType,
    location: String,
    keyword: Option<&'a str>,
    rest: &'a [&'a str],
}

fn parse_head<'a>(tokens: &'a [&'a str]) -> Result<Head<'a>, NotationError> {
    let (first, tail) = tokens
        .split_first()
        .ok_or_else(|| NotationError::MissingSupportedOrder(String::new()))?;
    let unit_type = UnitType::from_notation(first)
        .ok_or_else(|| NotationError::UnknownUnitType(first.to_string()))?;
    let idx = tail
        .iter()
        .position(|t| KEYWORDS.contains(t))
        .unwrap_or(tail.len());
    let location = location_id(&tail[..idx].join(" "))?;
    let (keyword, rest) = match tail.get(idx) {
        Some(keyword) => (Some(*keyword), &tail[idx + 1..]),
        None => (None, &tail[idx..]),
    };
    Ok(Head {
        unit_type,
        location,
        keyword,
        rest,
    })
}

fn parse_destination(rest: &[&str], line: &str) -> Result<String, NotationError> {
    let rest = match rest {
        [head @ .., "via", "Convoy"] => head,
        _ => rest,
    };
    if rest.is_empty() {
        return Err(NotationError::MissingDestination(line.to_string()));
    }
    location_id(&rest.join(" "))
}

fn parse_assisted(
    tokens: &[&str],
    countries: &HashMap<String, String>,
    line: &str,
) -> Result<AssistedOrder, NotationError> {
    if tokens.is_empty() {
        return Err(NotationError::MissingSupportedOrder(line.to_string()));
    }
    let head = parse_head(tokens)?;
    let mut assisted = match head.keyword {
        None | Some(HOLD) => AssistedOrder::hold(&head.location),
        Some(ATTACK) => {
            AssistedOrder::attack(&head.location, &parse_destination(head.rest, line)?)
        }
        Some(_) => return Err(NotationError::UnsupportedOrder(line.to_string())),
    };
    assisted.country = countries.get(&head.location).cloned();
    assisted.unit_type = Some(head.unit_type);
    Ok(assisted)
}

fn parse_order_line(
    tokens: &[&str],
    country: &str,
    countries: &HashMap<String, String>,
) -> Result<Order, NotationError> {
    let line = tokens.join(" ");
    let head = parse_head(tokens)?;
    match head.keyword {
        None | Some(HOLD) => Ok(Order::hold(country, head.unit_type, &head.location)),
        Some(ATTACK) => Ok(Order::attack(
            country,
            head.unit_type,
            &head.location,
            &parse_destination(head.rest, &line)?,
        )),
        Some(SUPPORTS) => Ok(Order::support(
            country,
            head.unit_type,
            &head.location,
            parse_assisted(head.rest, countries, &line)?,
        )),
        Some(_) => Err(NotationError::UnsupportedOrder(line)),
    }
}

/// Parses every order in a block of DATC notation.
///
/// Countries come from the headers; the country of a supported unit is the
/// one whose block lists an order for it.
pub fn parse_standard_orders(text: &str) -> Result<Vec<Order>, NotationError> {
    let lines: Vec<Vec<&str>> = text
        .lines()
        .map(|l| l.split_whitespace().collect::<Vec<_>>())
        .filter(|tokens| !tokens.is_empty())
        .collect();

    // First pass: which country owns the unit at each location id.
    let mut owned: Vec<(&[&str], String)> = Vec::new();
    let mut countries: HashMap<String, String> = HashMap::new();
    let mut current: Option<String> = None;
    for tokens in &lines {
        if let Some(country) = country_header(tokens) {
            current = Some(country);
            continue;
        }
        let country = current
            .clone()
            .ok_or_else(|| NotationError::MissingCountry(tokens.join(" ")))?;
        let head = parse_head(tokens)?;
        countries.insert(head.location, country.clone());
        owned.push((tokens.as_slice(), country));
    }

    owned
        .into_iter()
        .map(|(tokens, country)| parse_order_line(tokens, &country, &countries))
        .collect()
}

/// Formats an order in standard notation.
pub fn format_order(order: &Order) -> String {
    let name = |id: &str| location_name(id).unwrap_or_else(|| id.to_string());
    let unit = format!("{} {}", order.unit_type.notation_char(), name(&order.location));
    match order.order_type {
        OrderType::Hold => format!("{} {}", unit, HOLD),
        OrderType::Attack => format!(
            "{} - {}",
            unit,
            name(order.destination.as_deref().unwrap_or("?"))
        ),
        OrderType::Support => match order.assisted_order.as_deref() {
            Some(assisted) => {
                let supported = match assisted.unit_type {
                    Some(t) => format!("{} {}", t.notation_char(), name(&assisted.location)),
                    None => name(&assisted.location),
                };
                match (assisted.order_type, assisted.destination.as_deref()) {
                    (OrderType::Attack, Some(dest)) => {
                        format!("{} {} {} - {}", unit, SUPPORTS, supported, name(dest))
                    }
                    _ => format!("{} {} {}", unit, SUPPORTS, supported),
                }
            }
            None => format!("{} {}", unit, SUPPORTS),
        },
    }
}
