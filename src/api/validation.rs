//! Local checks on profile writes, mirroring the backend's constraints.
//!
//! Requests that would certainly be rejected are stopped before dispatch.

use crate::api::types::{ProfileFields, UserCreate, UserUpdate};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;

fn check_values(
    age: Option<u32>,
    price_min: Option<u32>,
    price_max: Option<u32>,
    search_radius: Option<u32>,
    problems: &mut Vec<String>,
) {
    if let Some(age) = age {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            problems.push(format!("age must be between {} and {}", MIN_AGE, MAX_AGE));
        }
    }
    if let (Some(min), Some(max)) = (price_min, price_max) {
        if max < min {
            problems.push("price_max must be greater than or equal to price_min".to_string());
        }
    }
    if search_radius == Some(0) {
        problems.push("search_radius must be greater than zero".to_string());
    }
}

fn check_fields(fields: &ProfileFields, problems: &mut Vec<String>) {
    check_values(fields.age, fields.price_min, fields.price_max, fields.search_radius, problems);
}

fn check_location(lat: Option<f64>, lon: Option<f64>, problems: &mut Vec<String>) {
    if let Some(lat) = lat {
        if !(-90.0..=90.0).contains(&lat) {
            problems.push("lat must be between -90 and 90".to_string());
        }
    }
    if let Some(lon) = lon {
        if !(-180.0..=180.0).contains(&lon) {
            problems.push("lon must be between -180 and 180".to_string());
        }
    }
}

fn finish(problems: Vec<String>) -> Result<(), Vec<String>> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

pub fn validate_update(update: &UserUpdate) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    check_values(
        update.age.flatten(),
        update.price_min.flatten(),
        update.price_max.flatten(),
        update.search_radius.flatten(),
        &mut problems,
    );
    check_location(update.lat, update.lon, &mut problems);
    finish(problems)
}

pub fn validate_create(create: &UserCreate) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    check_fields(&create.fields, &mut problems);
    check_location(create.lat, create.lon, &mut problems);
    finish(problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_update() {
        let update = UserUpdate {
            lat: Some(55.75),
            lon: Some(37.61),
            ..UserUpdate::from(ProfileFields {
                age: Some(25),
                price_min: Some(20_000),
                price_max: Some(20_000),
                search_radius: Some(1000),
                ..Default::default()
            })
        };
        assert!(validate_update(&update).is_ok());
    }

    #[test]
    fn test_collects_every_problem() {
        let update = UserUpdate {
            lat: Some(91.0),
            ..UserUpdate::from(ProfileFields {
                age: Some(17),
                price_min: Some(50_000),
                price_max: Some(30_000),
                search_radius: Some(0),
                ..Default::default()
            })
        };
        let problems = validate_update(&update).unwrap_err();
        assert_eq!(problems.len(), 4);
        assert!(problems[0].starts_with("age"));
    }

    #[test]
    fn test_create_checks_location() {
        let create = UserCreate {
            telegram_id: 7,
            lon: Some(-200.0),
            ..Default::default()
        };
        assert_eq!(validate_create(&create).unwrap_err(), vec!["lon must be between -180 and 180"]);
    }
}
